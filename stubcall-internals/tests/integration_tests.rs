//! Integration tests for the stubcall-internals crate.
//!
//! This test suite exercises the public surface of the crate with **8 tests**:
//!
//! ## Function records (3 tests)
//! - `test_free_function_record`: Binding, calling, copying and resetting a
//!   record holding a function pointer
//! - `test_many_arities`: Records for zero, four and eight arguments
//! - `test_owned_arguments_survive_unbound_call`: Non-`Copy` arguments handed
//!   back intact by an unbound record
//!
//! ## Functor records (2 tests)
//! - `test_shared_functor_sees_captured_state`: A functor bound by shared
//!   reference observes changes made through interior mutability
//! - `test_stateful_functor_record_copies`: Copies of a record bound to an
//!   exclusive functor all drive the same functor
//!
//! ## Receiver records (3 tests)
//! - `test_method_record_mutates_receiver`: A `&mut O` record updates the
//!   receiver it is given at each call
//! - `test_const_method_record_reads_receiver`: A `&O` record reads the
//!   receiver it is given at each call
//! - `test_records_compare_by_identity`: Equality by stub and target, never by
//!   behaviour

use std::cell::Cell;

use stubcall_internals::{
    RawInvocation,
    invocation::{ConstMethodStub, FunctionStub, MethodStub},
};

type Record<'a, A, R> = RawInvocation<'a, fn(A) -> R, FunctionStub<fn(A) -> R, (A,), R>>;

struct Account {
    balance: i64,
    name: String,
}

impl Account {
    fn deposit(&mut self, amount: i64) -> i64 {
        self.balance += amount;
        self.balance
    }

    fn withdraw(&mut self, amount: i64) -> i64 {
        self.balance -= amount;
        self.balance
    }

    fn name_len(&self, extra: usize) -> usize {
        self.name.len() + extra
    }
}

type AccountMethod<'a> = RawInvocation<
    'a,
    fn(&mut Account, i64) -> i64,
    MethodStub<fn(&mut Account, i64) -> i64, Account, (i64,), i64>,
>;

type AccountQuery<'a> = RawInvocation<
    'a,
    fn(&Account, usize) -> usize,
    ConstMethodStub<fn(&Account, usize) -> usize, Account, (usize,), usize>,
>;

fn shout(text: String) -> String {
    text.to_uppercase()
}

#[test]
fn test_free_function_record() {
    let record = Record::<String, String>::bind_function(shout);
    assert!(record.is_valid());
    assert_eq!(record.invoke((String::from("quiet"),)), Ok(String::from("QUIET")));

    let copy = record;
    assert_eq!(copy.invoke((String::from("again"),)), Ok(String::from("AGAIN")));

    let mut cleared = copy;
    cleared.reset();
    assert!(!cleared.is_valid());
    assert!(record.is_valid());
}

#[test]
fn test_many_arities() {
    type Nullary = RawInvocation<'static, fn() -> u8, FunctionStub<fn() -> u8, (), u8>>;
    type Quaternary = RawInvocation<
        'static,
        fn(u8, u8, u8, u8) -> u8,
        FunctionStub<fn(u8, u8, u8, u8) -> u8, (u8, u8, u8, u8), u8>,
    >;
    type Octonary = RawInvocation<
        'static,
        fn(u8, u8, u8, u8, u8, u8, u8, u8) -> u8,
        FunctionStub<
            fn(u8, u8, u8, u8, u8, u8, u8, u8) -> u8,
            (u8, u8, u8, u8, u8, u8, u8, u8),
            u8,
        >,
    >;

    fn zero() -> u8 {
        42
    }

    fn four(a: u8, b: u8, c: u8, d: u8) -> u8 {
        a * 8 + b * 4 + c * 2 + d
    }

    fn eight(a: u8, b: u8, c: u8, d: u8, e: u8, f: u8, g: u8, h: u8) -> u8 {
        a + b + c + d + e + f + g + h
    }

    assert_eq!(Nullary::bind_function(zero).invoke(()), Ok(42));
    assert_eq!(Quaternary::bind_function(four).invoke((1, 0, 1, 1)), Ok(11));
    assert_eq!(
        Octonary::bind_function(eight).invoke((1, 1, 1, 1, 1, 1, 1, 1)),
        Ok(8)
    );
}

#[test]
fn test_owned_arguments_survive_unbound_call() {
    let record = Record::<String, usize>::new();
    let returned = record.invoke((String::from("kept"),));
    assert_eq!(returned, Err((String::from("kept"),)));
}

#[test]
fn test_shared_functor_sees_captured_state() {
    let factor = Cell::new(2);
    let scale = |value: i32| value * factor.get();
    let record = Record::<i32, i32>::bind_functor(&scale);

    assert_eq!(record.invoke((5,)), Ok(10));
    factor.set(3);
    assert_eq!(record.invoke((5,)), Ok(15));
}

#[test]
fn test_stateful_functor_record_copies() {
    let mut seen = Vec::new();
    let mut collect = |value: i32| {
        seen.push(value);
        seen.len()
    };
    {
        // SAFETY: All calls below are sequential
        let record = unsafe { Record::<i32, usize>::bind_functor_mut(&mut collect) };
        let copy = record;
        assert_eq!(record.invoke((1,)), Ok(1));
        assert_eq!(copy.invoke((2,)), Ok(2));
        assert_eq!(record, copy);
    }
    assert_eq!(seen, [1, 2]);
}

#[test]
fn test_method_record_mutates_receiver() {
    let mut first = Account {
        balance: 10,
        name: String::from("first"),
    };
    let mut second = Account {
        balance: 100,
        name: String::from("second"),
    };

    let deposit = AccountMethod::bind_method(Account::deposit);
    assert_eq!(deposit.invoke_method(&mut first, (5,)), Ok(15));
    assert_eq!(deposit.invoke_method(&mut second, (5,)), Ok(105));

    let fee = 1;
    let charge = move |account: &mut Account, amount: i64| account.withdraw(amount + fee);
    let withdraw = AccountMethod::bind_method_functor(&charge);
    assert_eq!(withdraw.invoke_method(&mut first, (4,)), Ok(10));
    assert_eq!(first.balance, 10);
    assert_eq!(second.balance, 105);
}

#[test]
fn test_const_method_record_reads_receiver() {
    let account = Account {
        balance: 0,
        name: String::from("savings"),
    };

    let query = AccountQuery::bind_const_method(Account::name_len);
    assert_eq!(query.invoke_const_method(&account, (1,)), Ok(8));

    let factor = 2;
    let doubled = move |account: &Account, extra: usize| account.name.len() * factor + extra;
    let query = AccountQuery::bind_const_method_functor(&doubled);
    assert_eq!(query.invoke_const_method(&account, (0,)), Ok(14));
    assert_eq!(AccountQuery::new().invoke_const_method(&account, (3,)), Err((3,)));
}

#[test]
fn test_records_compare_by_identity() {
    assert_eq!(
        AccountMethod::bind_method(Account::deposit),
        AccountMethod::bind_method(Account::deposit)
    );
    assert_ne!(
        AccountMethod::bind_method(Account::deposit),
        AccountMethod::bind_method(Account::withdraw)
    );
    assert_eq!(AccountMethod::new(), AccountMethod::default());

    let bonus = 7;
    let same_behaviour_a = move |account: &mut Account, amount: i64| account.deposit(amount + bonus);
    let same_behaviour_b = move |account: &mut Account, amount: i64| account.deposit(amount + bonus);
    assert_ne!(
        AccountMethod::bind_method_functor(&same_behaviour_a),
        AccountMethod::bind_method_functor(&same_behaviour_b)
    );
    assert_eq!(
        AccountMethod::bind_method_functor(&same_behaviour_a),
        AccountMethod::bind_method_functor(&same_behaviour_a)
    );
}
