//! Tests for the structural combinators shared by the optic kinds:
//! `first`, `second`, `left`, `right`, `split` and `choice`.

use optika::optics::{FunctionGetter, FunctionIso, FunctionSetter, Getter, Prism, Setter};
use optika::{Either, lens, prism};
use rstest::rstest;

#[derive(Clone, PartialEq, Debug)]
struct Account {
    owner: String,
    balance: i64,
}

#[derive(Clone, PartialEq, Debug)]
enum Token {
    Number(i64),
    Word(String),
}

fn balance_getter() -> FunctionGetter<Account, i64> {
    FunctionGetter::new(|account: &Account| account.balance)
}

fn celsius_to_fahrenheit() -> FunctionIso<f64, f64, f64, f64> {
    FunctionIso::new(
        |celsius: f64| celsius.mul_add(9.0 / 5.0, 32.0),
        |fahrenheit: f64| (fahrenheit - 32.0) * 5.0 / 9.0,
    )
}

fn account() -> Account {
    Account { owner: "Alice".to_string(), balance: 100 }
}

// =============================================================================
// Getter
// =============================================================================

#[rstest]
fn test_getter_first_and_second_carry_the_other_slot() {
    assert_eq!(balance_getter().first::<char>().get(&(account(), 'x')), (100, 'x'));
    assert_eq!(balance_getter().second::<char>().get(&('x', account())), ('x', 100));
}

#[rstest]
fn test_getter_left_and_right_pass_the_other_case_through() {
    let left = balance_getter().left::<&str>();
    assert_eq!(left.get(&Either::Left(account())), Either::Left(100));
    assert_eq!(left.get(&Either::Right("none")), Either::Right("none"));

    let right = balance_getter().right::<&str>();
    assert_eq!(right.get(&Either::Right(account())), Either::Right(100));
}

#[rstest]
fn test_getter_split_and_choice() {
    let length = FunctionGetter::new(|text: &String| text.len());
    let split = balance_getter().split(length);
    assert_eq!(split.get(&(account(), "four".to_string())), (100, 4));

    let count = FunctionGetter::new(|values: &Vec<i64>| values.iter().sum::<i64>());
    let either = balance_getter().choice(count);
    assert_eq!(either.get(&Either::Left(account())), 100);
    assert_eq!(either.get(&Either::Right(vec![1, 2, 3])), 6);
}

// =============================================================================
// Setter
// =============================================================================

#[rstest]
fn test_setter_first_and_second() {
    let balance = lens!(Account, balance).to_setter();

    let (updated, extra) = balance.clone().first::<u8>().modify((account(), 9), |n| n + 1);
    assert_eq!((updated.balance, extra), (101, 9));

    let (extra, updated) = balance.second::<u8>().set(0, (9, account()));
    assert_eq!((extra, updated.balance), (9, 0));
}

#[rstest]
fn test_setter_left_and_right_leave_the_other_case_alone() {
    let balance = lens!(Account, balance).to_setter();

    let left = balance.clone().left::<String>();
    assert_eq!(
        left.modify(Either::Right("untouched".to_string()), |n| n * 2),
        Either::Right("untouched".to_string())
    );

    let right = balance.right::<String>();
    let updated = right.modify(Either::Right(account()), |n| n * 2);
    assert_eq!(updated.map_right(|account| account.balance), Either::Right(200));
}

#[rstest]
fn test_setter_choice_shares_one_function() {
    let balance = lens!(Account, balance).to_setter();
    let each = FunctionSetter::new(|values: Vec<i64>, function: &dyn Fn(i64) -> i64| {
        values.into_iter().map(function).collect::<Vec<_>>()
    });
    let either = balance.choice(each);

    assert_eq!(
        either.modify(Either::Right(vec![1, 2]), |n| n - 1),
        Either::Right(vec![0, 1])
    );
    let updated = either.modify(Either::Left(account()), |n| n - 1);
    assert_eq!(updated.map_left(|account| account.balance), Either::Left(99));
}

// =============================================================================
// Lens
// =============================================================================

#[rstest]
fn test_lens_first_reads_and_writes_both_slots() {
    let balance = lens!(Account, balance).first::<String>();
    let source = (account(), "memo".to_string());

    assert_eq!(balance.get(&source), (100, "memo".to_string()));

    let (updated, memo) = balance.set((5, "new memo".to_string()), source);
    assert_eq!(updated.balance, 5);
    assert_eq!(memo, "new memo");
}

#[rstest]
fn test_lens_second() {
    let owner = lens!(Account, owner).second::<u32>();
    let (id, updated) = owner.modify((7, account()), |(id, name)| (id + 1, name.to_uppercase()));

    assert_eq!(id, 8);
    assert_eq!(updated.owner, "ALICE");
}

#[rstest]
fn test_lens_split_works_on_independent_sources() {
    let both = lens!(Account, balance).split(lens!(Account, owner));
    let source = (account(), Account { owner: "Bob".to_string(), balance: 0 });

    assert_eq!(both.get(&source), (100, "Bob".to_string()));

    let (first, second) = both.set((1, "Carol".to_string()), source);
    assert_eq!(first.balance, 1);
    assert_eq!(first.owner, "Alice");
    assert_eq!(second.owner, "Carol");
    assert_eq!(second.balance, 0);
}

// =============================================================================
// Prism
// =============================================================================

#[rstest]
#[case((Token::Number(3), 'a'), Some((3, 'a')))]
#[case((Token::Word("w".to_string()), 'a'), None)]
fn test_prism_first(#[case] source: (Token, char), #[case] expected: Option<(i64, char)>) {
    assert_eq!(prism!(Token, Number).first::<char>().preview(source), expected);
}

#[rstest]
fn test_prism_first_keeps_extra_on_miss() {
    let number = prism!(Token, Number).first::<char>();
    let source = (Token::Word("w".to_string()), 'z');

    assert_eq!(number.try_get(source.clone()), Either::Left(source));
    assert_eq!(number.reverse_get((4, 'q')), (Token::Number(4), 'q'));
}

#[rstest]
fn test_prism_second() {
    let word = prism!(Token, Word).second::<u8>();

    assert_eq!(word.preview((1, Token::Word("hi".to_string()))), Some((1, "hi".to_string())));
    assert_eq!(word.reverse_get((2, "yo".to_string())), (2, Token::Word("yo".to_string())));
}

#[rstest]
fn test_prism_left_and_right() {
    let left = prism!(Token, Number).left::<bool>();
    assert_eq!(left.preview(Either::Left(Token::Number(1))), Some(1));
    assert_eq!(left.try_get(Either::Right(true)), Either::Left(Either::Right(true)));

    let right = prism!(Token, Number).right::<bool>();
    assert_eq!(right.preview(Either::Right(Token::Number(2))), Some(2));
    assert_eq!(right.reverse_get(5), Either::Right(Token::Number(5)));
}

// =============================================================================
// Iso
// =============================================================================

#[rstest]
fn test_iso_first_and_second() {
    let first = celsius_to_fahrenheit().first::<&str>();
    assert_eq!(first.get((100.0, "boiling")), (212.0, "boiling"));
    assert_eq!(first.reverse_get((32.0, "freezing")), (0.0, "freezing"));

    let second = celsius_to_fahrenheit().second::<&str>();
    assert_eq!(second.get(("freezing", 0.0)), ("freezing", 32.0));
}

#[rstest]
fn test_iso_left_and_right_are_total() {
    let left = celsius_to_fahrenheit().left::<String>();
    assert_eq!(left.get(Either::Left(100.0)), Either::Left(212.0));
    assert_eq!(left.get(Either::Right("x".to_string())), Either::Right("x".to_string()));
    assert_eq!(left.reverse_get(Either::Left(212.0)), Either::Left(100.0));

    let right = celsius_to_fahrenheit().right::<u8>();
    assert_eq!(right.get(Either::Right(0.0)), Either::Right(32.0));
    assert_eq!(right.reverse_get(Either::Left(3)), Either::Left(3));
}

#[rstest]
fn test_iso_split_round_trips() {
    let chars = FunctionIso::new(
        |text: String| text.chars().collect::<Vec<_>>(),
        |chars: Vec<char>| chars.into_iter().collect::<String>(),
    );
    let both = celsius_to_fahrenheit().split(chars);

    let converted = both.get((0.0, "ab".to_string()));
    assert_eq!(converted, (32.0, vec!['a', 'b']));
    assert_eq!(both.reverse_get(converted), (0.0, "ab".to_string()));
}
