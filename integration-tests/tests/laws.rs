//! Behavior that holds across the callable traits and `Opt`.

use std::{cell::Cell, convert::Infallible};

use tryfn_core::{Action, Opt, Predicate, Producer, Transform, identity, is_equal, not};

#[derive(Debug, Clone, PartialEq)]
struct Signal(u32);

/// Counts calls and succeeds with a fixed value or fails with `Signal`.
struct Probe<'a, V> {
    calls: &'a Cell<u32>,
    outcome: Result<V, Signal>,
}

impl<V: Clone> Probe<'_, V> {
    fn record(&self) -> Result<V, Signal> {
        self.calls.set(self.calls.get() + 1);
        self.outcome.clone()
    }
}

impl Action<i32> for Probe<'_, ()> {
    type Error = Signal;

    fn accept(&self, _value: &i32) -> Result<(), Self::Error> {
        self.record()
    }
}

impl Predicate<i32> for Probe<'_, bool> {
    type Error = Signal;

    fn test(&self, _value: &i32) -> Result<bool, Self::Error> {
        self.record()
    }
}

impl Transform<i32> for Probe<'_, i32> {
    type Output = i32;
    type Error = Signal;

    fn apply(&self, _value: i32) -> Result<Self::Output, Self::Error> {
        self.record()
    }
}

impl Producer for Probe<'_, Opt<i32>> {
    type Output = Opt<i32>;
    type Error = Signal;

    fn get(&self) -> Result<Self::Output, Self::Error> {
        self.record()
    }
}

fn probe<V>(calls: &Cell<u32>, outcome: Result<V, Signal>) -> Probe<'_, V> {
    Probe { calls, outcome }
}

#[test]
fn errors_reach_the_caller_unchanged() {
    let calls = Cell::new(0);

    assert_eq!(Opt::of(1).if_present(probe::<()>(&calls, Err(Signal(1)))), Err(Signal(1)));
    assert_eq!(Opt::of(1).filter(probe::<bool>(&calls, Err(Signal(2)))), Err(Signal(2)));
    assert_eq!(Opt::of(1).map(probe::<i32>(&calls, Err(Signal(3)))), Err(Signal(3)));
    assert_eq!(Opt::<i32>::empty().or(probe::<Opt<i32>>(&calls, Err(Signal(4)))), Err(Signal(4)));

    assert_eq!(calls.get(), 4);
}

#[test]
fn failed_left_side_never_runs_right_side() {
    let left = Cell::new(0);
    let right = Cell::new(0);

    let actions = probe::<()>(&left, Err(Signal(1))).and_then(probe(&right, Ok(())));
    assert_eq!(actions.accept(&0), Err(Signal(1)));

    let transforms = probe::<i32>(&left, Err(Signal(2))).and_then(probe(&right, Ok(0)));
    assert_eq!(transforms.apply(0), Err(Signal(2)));

    let composed = probe::<i32>(&right, Ok(0)).compose(probe(&left, Err(Signal(3))));
    assert_eq!(composed.apply(0), Err(Signal(3)));

    let both = probe::<bool>(&left, Err(Signal(4))).and(probe(&right, Ok(true)));
    assert_eq!(both.test(&0), Err(Signal(4)));

    assert_eq!(left.get(), 4);
    assert_eq!(right.get(), 0);
}

#[test]
fn boolean_short_circuit() {
    let right = Cell::new(0);
    let left = Cell::new(0);

    let both = probe(&left, Ok(false)).and(probe(&right, Ok(true)));
    assert_eq!(both.test(&0), Ok(false));

    let either = probe(&left, Ok(true)).or(probe(&right, Ok(false)));
    assert_eq!(either.test(&0), Ok(true));

    assert_eq!(right.get(), 0);
}

#[test]
fn filter_on_empty_never_tests() {
    let calls = Cell::new(0);

    let filtered = Opt::<i32>::empty().filter(probe(&calls, Ok(true)));

    assert_eq!(filtered, Ok(Opt::empty()));
    assert_eq!(calls.get(), 0);
}

#[test]
fn of_then_or_else_get_skips_supplier() {
    let calls = Cell::new(0);
    let supplier = || {
        calls.set(calls.get() + 1);
        Ok::<_, Infallible>("fallback")
    };

    assert_eq!(Opt::of("held").or_else_get(supplier), Ok("held"));
    assert_eq!(calls.get(), 0);

    assert_eq!(Opt::empty().or_else_get(supplier), Ok("fallback"));
    assert_eq!(calls.get(), 1);
}

#[test]
fn present_or_never_calls_supplier() {
    let calls = Cell::new(0);

    assert_eq!(Opt::of(1).or(probe(&calls, Ok(Opt::of(2)))), Ok(Opt::of(1)));
    assert_eq!(calls.get(), 0);
}

#[test]
fn flat_map_returns_mapper_result_directly() {
    let to_opt = |value: i32| Ok::<_, Infallible>(Opt::of(value * 10));

    let result: Opt<i32> = Opt::of(4).flat_map(to_opt).unwrap();

    assert_eq!(result, Opt::of(40));
}

#[test]
fn identity_and_equality_helpers() {
    let id = identity::<Opt<i32>, Infallible>();
    assert_eq!(id.apply(Opt::of(3)), Ok(Opt::of(3)));

    let nothing = is_equal::<Option<&str>, Infallible>(None);
    assert_eq!(nothing.test(&None), Ok(true));
    assert_eq!(nothing.test(&Some("x")), Ok(false));
    assert_eq!(not(nothing).test(&Some("x")), Ok(true));

    assert_eq!(Opt::of(5).filter(is_equal::<_, Infallible>(5)), Ok(Opt::of(5)));
    assert_eq!(Opt::of(6).filter(is_equal::<_, Infallible>(5)), Ok(Opt::empty()));
}
