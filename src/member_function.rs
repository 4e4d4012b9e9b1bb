//! A method slot that is called with the receiver supplied at call time.
//!
//! See [`MemberFunction`] for details.

use core::marker::PhantomData;

use crate::{
    error::{Error, ErrorKind},
    signature::MemberSignature,
};

/// Which kind of method a [`MemberFunction`] or
/// [`FunctionAlternates`](crate::FunctionAlternates) is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FunctionType {
    /// Not bound to anything.
    NoFunction,
    /// Bound to a method taking `&mut O`.
    NonConstFunction,
    /// Bound to a method taking `&O`.
    ConstFunction,
}

/// The bound method, tagged with its receiver kind.
#[derive(Clone, Copy)]
pub(crate) enum Binding<N, C> {
    NoFunction,
    NonConst(N),
    Const(C),
}

impl<N, C> Binding<N, C> {
    pub(crate) const fn function_type(&self) -> FunctionType {
        match self {
            Binding::NoFunction => FunctionType::NoFunction,
            Binding::NonConst(_) => FunctionType::NonConstFunction,
            Binding::Const(_) => FunctionType::ConstFunction,
        }
    }
}

/// Compares two bindings by kind and by method address.
pub(crate) fn same_binding<O, S: MemberSignature<O>>(
    lhs: &Binding<S::NonConst, S::Const>,
    rhs: &Binding<S::NonConst, S::Const>,
) -> bool {
    match (lhs, rhs) {
        (Binding::NoFunction, Binding::NoFunction) => true,
        (Binding::NonConst(lhs), Binding::NonConst(rhs)) => {
            S::non_const_address(*lhs) == S::non_const_address(*rhs)
        }
        (Binding::Const(lhs), Binding::Const(rhs)) => {
            S::const_address(*lhs) == S::const_address(*rhs)
        }
        _ => false,
    }
}

/// A method of `O` with signature `S`, called on a receiver supplied at call
/// time.
///
/// A `MemberFunction` holds either nothing, a method taking `&mut O`, or a
/// method taking `&O`, and remembers which. Calling an unbound
/// `MemberFunction` returns the default value passed to the call.
///
/// `S` is the signature without the receiver, so
/// `MemberFunction<Counter, fn(u32) -> u32>` binds
/// `fn(&mut Counter, u32) -> u32` or `fn(&Counter, u32) -> u32`.
///
/// # Examples
///
/// ```
/// use stubcall::{ErrorKind, FunctionType, MemberFunction};
///
/// struct Counter(u32);
///
/// impl Counter {
///     fn bump(&mut self, by: u32) -> u32 {
///         self.0 += by;
///         self.0
///     }
///
///     fn peek(&self, plus: u32) -> u32 {
///         self.0 + plus
///     }
/// }
///
/// let bump = MemberFunction::<Counter, fn(u32) -> u32>::from_non_const(Counter::bump);
/// let peek = MemberFunction::<Counter, fn(u32) -> u32>::from_const(Counter::peek);
/// let unbound = MemberFunction::<Counter, fn(u32) -> u32>::new();
///
/// let mut counter = Counter(0);
/// assert_eq!(bump.call(&mut counter, 2, 0), 2);
/// assert_eq!(peek.call(&mut counter, 1, 0), 3);
/// assert_eq!(unbound.call(&mut counter, 1, 99), 99);
///
/// assert_eq!(peek.call_const(&counter, 1, 0), Ok(3));
/// assert_eq!(
///     bump.call_const(&counter, 1, 0).unwrap_err().kind(),
///     ErrorKind::CallToNonConst
/// );
/// assert_eq!(unbound.function_type(), FunctionType::NoFunction);
/// ```
pub struct MemberFunction<O, S: MemberSignature<O>> {
    binding: Binding<S::NonConst, S::Const>,
    _receiver: PhantomData<fn(&O)>,
}

impl<O, S: MemberSignature<O>> MemberFunction<O, S> {
    /// Creates an unbound member function.
    #[inline]
    pub const fn new() -> Self {
        Self {
            binding: Binding::NoFunction,
            _receiver: PhantomData,
        }
    }

    /// Creates a member function bound to a method taking `&mut O`.
    #[inline]
    pub const fn from_non_const(function: S::NonConst) -> Self {
        Self {
            binding: Binding::NonConst(function),
            _receiver: PhantomData,
        }
    }

    /// Creates a member function bound to a method taking `&O`.
    #[inline]
    pub const fn from_const(function: S::Const) -> Self {
        Self {
            binding: Binding::Const(function),
            _receiver: PhantomData,
        }
    }

    /// Returns which kind of method is bound.
    #[inline]
    pub const fn function_type(&self) -> FunctionType {
        self.binding.function_type()
    }

    /// Returns `true` if a method is bound.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        !matches!(self.binding, Binding::NoFunction)
    }
}

impl<O, S: MemberSignature<O>> Clone for MemberFunction<O, S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<O, S: MemberSignature<O>> Copy for MemberFunction<O, S> {}

impl<O, S: MemberSignature<O>> Default for MemberFunction<O, S> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<O, S: MemberSignature<O>> PartialEq for MemberFunction<O, S> {
    /// Two member functions are equal when both are unbound, or when they are
    /// bound to the same method with the same receiver kind.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        same_binding::<O, S>(&self.binding, &other.binding)
    }
}

impl<O, S: MemberSignature<O>> Eq for MemberFunction<O, S> {}

impl<O, S: MemberSignature<O>> core::fmt::Debug for MemberFunction<O, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MemberFunction")
            .field("function_type", &self.function_type())
            .finish()
    }
}

macro_rules! impl_member_function {
    ($($arg:ident: $ty:ident),*) => {
        impl<O, R, $($ty,)*> MemberFunction<O, fn($($ty),*) -> R> {
            /// Calls the bound method on `receiver`, or returns
            /// `default_value` if nothing is bound.
            ///
            /// For methods returning `()`, `call_unit`
            /// takes no default value.
            #[inline]
            pub fn call(&self, receiver: &mut O, $($arg: $ty,)* default_value: R) -> R {
                match self.binding {
                    Binding::NonConst(function) => function(receiver, $($arg),*),
                    Binding::Const(function) => function(receiver, $($arg),*),
                    Binding::NoFunction => default_value,
                }
            }

            /// Calls the bound method on a shared `receiver`, or returns
            /// `default_value` if nothing is bound.
            ///
            /// A method taking `&mut O` cannot be called through a shared
            /// receiver. In that case the failure hook is run and
            /// [`ErrorKind::CallToNonConst`] is returned.
            #[inline]
            #[track_caller]
            pub fn call_const(&self, receiver: &O, $($arg: $ty,)* default_value: R) -> Result<R, Error> {
                match self.binding {
                    Binding::Const(function) => Ok(function(receiver, $($arg),*)),
                    Binding::NoFunction => Ok(default_value),
                    Binding::NonConst(_) => Err(Error::signal(ErrorKind::CallToNonConst)),
                }
            }
        }

        impl<O, $($ty,)*> MemberFunction<O, fn($($ty),*)> {
            /// Calls the bound method on `receiver`, or does nothing if
            /// nothing is bound.
            ///
            /// Same as `call` with `()` as the default value.
            #[inline]
            pub fn call_unit(&self, receiver: &mut O, $($arg: $ty),*) {
                self.call(receiver, $($arg,)* ())
            }

            /// Calls the bound method on a shared `receiver`, or does nothing
            /// if nothing is bound.
            ///
            /// Same as `call_const` with `()` as the
            /// default value.
            #[inline]
            #[track_caller]
            pub fn call_const_unit(&self, receiver: &O, $($arg: $ty),*) -> Result<(), Error> {
                self.call_const(receiver, $($arg,)* ())
            }
        }
    };
}

for_each_arity!(impl_member_function);

#[cfg(test)]
mod tests {
    use std::string::String;

    use super::*;

    struct Account {
        balance: i64,
        owner: String,
    }

    impl Account {
        fn deposit(&mut self, amount: i64, note: &'static str) -> i64 {
            self.balance += amount;
            self.owner.push_str(note);
            self.balance
        }

        fn withdraw(&mut self, amount: i64, _note: &'static str) -> i64 {
            self.balance -= amount;
            self.balance
        }

        fn preview(&self, amount: i64, _note: &'static str) -> i64 {
            self.balance + amount
        }
    }

    type AccountMember = MemberFunction<Account, fn(i64, &'static str) -> i64>;

    fn account() -> Account {
        Account {
            balance: 10,
            owner: String::from("ann"),
        }
    }

    #[test]
    fn test_unbound_returns_default() {
        let member = AccountMember::new();
        let mut account = account();
        assert_eq!(member.function_type(), FunctionType::NoFunction);
        assert!(!member.is_valid());
        assert_eq!(member.call(&mut account, 5, "", -1), -1);
        assert_eq!(member.call_const(&account, 5, "", -2), Ok(-2));
        assert_eq!(account.balance, 10);
        assert_eq!(member, AccountMember::default());
    }

    #[test]
    fn test_non_const_binding() {
        let member = AccountMember::from_non_const(Account::deposit);
        let mut account = account();
        assert_eq!(member.function_type(), FunctionType::NonConstFunction);
        assert!(member.is_valid());
        assert_eq!(member.call(&mut account, 5, "!", 0), 15);
        assert_eq!(account.owner, "ann!");

        let line = line!() + 1;
        let error = member.call_const(&account, 5, "", 0).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::CallToNonConst);
        assert_eq!(error.location().line(), line);
        assert_eq!(account.balance, 15);
    }

    #[test]
    fn test_const_binding() {
        let member = AccountMember::from_const(Account::preview);
        let mut account = account();
        assert_eq!(member.function_type(), FunctionType::ConstFunction);
        assert_eq!(member.call(&mut account, 5, "", 0), 15);
        assert_eq!(member.call_const(&account, 7, "", 0), Ok(17));
        assert_eq!(account.balance, 10);
    }

    #[test]
    fn test_equality() {
        let deposit = AccountMember::from_non_const(Account::deposit);
        assert_eq!(deposit, AccountMember::from_non_const(Account::deposit));
        assert_ne!(deposit, AccountMember::from_non_const(Account::withdraw));
        assert_ne!(deposit, AccountMember::from_const(Account::preview));
        assert_ne!(deposit, AccountMember::new());

        let mut copy = deposit;
        assert_eq!(copy, deposit);
        copy = AccountMember::new();
        assert!(!copy.is_valid());
    }

    #[test]
    fn test_const_construction() {
        const DEPOSIT: AccountMember = AccountMember::from_non_const(Account::deposit);
        let mut account = account();
        assert_eq!(DEPOSIT.call(&mut account, 1, "", 0), 11);
    }

    struct Lever {
        pulls: u32,
    }

    impl Lever {
        fn pull(&mut self, times: u32) {
            self.pulls += times;
        }

        fn inspect(&self, _times: u32) {}
    }

    type LeverMember = MemberFunction<Lever, fn(u32)>;

    #[test]
    fn test_unit_calls_take_no_default() {
        let mut lever = Lever { pulls: 0 };

        let pull = LeverMember::from_non_const(Lever::pull);
        pull.call_unit(&mut lever, 2);
        assert_eq!(lever.pulls, 2);

        let line = line!() + 1;
        let error = pull.call_const_unit(&lever, 1).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::CallToNonConst);
        assert_eq!(error.location().line(), line);

        let inspect = LeverMember::from_const(Lever::inspect);
        inspect.call_unit(&mut lever, 5);
        assert_eq!(inspect.call_const_unit(&lever, 5), Ok(()));

        LeverMember::new().call_unit(&mut lever, 7);
        assert_eq!(LeverMember::new().call_const_unit(&lever, 7), Ok(()));
        assert_eq!(lever.pulls, 2);
    }

    #[test]
    fn test_layout() {
        assert!(size_of::<AccountMember>() <= 2 * size_of::<usize>());
        static_assertions::assert_impl_all!(AccountMember: Copy, Send, Sync);
    }
}
