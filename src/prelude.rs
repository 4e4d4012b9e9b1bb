//! Commonly used items for convenient importing.
//!
//! # Usage
//!
//! ```rust
//! use stubcall::prelude::*;
//!
//! fn parse_digit(c: char) -> Expected<u32, char> {
//!     match c.to_digit(10) {
//!         Some(digit) => Expected::new(digit),
//!         None => Unexpected::new(c).into(),
//!     }
//! }
//!
//! let parse = FunctionWrapper::<fn(char) -> Expected<u32, char>>::from_function(parse_digit);
//! assert_eq!(parse.call('7').map(|parsed| parsed.value_or(0)), Ok(7));
//! ```
//!
//! # What's Included
//!
//! - **[`FunctionWrapper`]** with the [`Method`] and [`ConstMethod`]
//!   signatures
//! - **[`MemberFunction`]**, **[`FunctionAlternates`]** and [`FunctionType`]
//! - **[`Expected`]**, **[`Unexpected`]** and the [`UNEXPECT`] tag
//! - **[`Error`]** and [`ErrorKind`]

pub use crate::{
    ConstMethod, Error, ErrorKind, Expected, FunctionAlternates, FunctionType, FunctionWrapper,
    MemberFunction, Method, UNEXPECT, Unexpected,
};
