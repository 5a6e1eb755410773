mod and;
mod equal;
mod negate;
mod or;

use crate::map_err::MapErr;

pub use equal::IsEqual;

/// A callable that tests a value and may fail.
///
/// A `Predicate` is the fallible counterpart of a closure `Fn(&T) -> bool`.
/// Any closure `Fn(&T) -> Result<bool, E>` is a `Predicate<T, Error = E>`.
///
/// The boolean combinators short-circuit exactly like `&&` and `||`: the
/// right-hand predicate is not called once the result is known, and an error
/// from the left-hand predicate is returned before the right-hand one runs.
///
/// # Example
///
/// ```
/// use std::path::Path;
///
/// use tryfn_core::Predicate;
///
/// #[derive(Debug, PartialEq)]
/// struct NotUtf8;
///
/// let is_hidden = |path: &Path| {
///     let name = path.file_name().and_then(|name| name.to_str());
///     name.map(|name| name.starts_with('.')).ok_or(NotUtf8)
/// };
///
/// let visible = is_hidden.negate();
///
/// assert_eq!(visible.test(Path::new("notes.txt")), Ok(true));
/// assert_eq!(visible.test(Path::new(".cache")), Ok(false));
/// ```
///
/// ## Calling combinators on closures
///
/// A closure `Fn(&T) -> Result<bool, E>` is also a `Transform<&T>`, so with
/// both traits in scope `.map_err()` on it is ambiguous. Name the trait
/// instead:
///
/// ```
/// use tryfn_core::{Action, Predicate, Producer, Transform};
///
/// let is_even = |value: &i32| if *value < 0 { Err(*value) } else { Ok(value % 2 == 0) };
///
/// let described = Predicate::map_err(is_even, |value| format!("{value} is negative"));
/// let small_even = Predicate::and(described, |value: &i32| Ok(*value < 10));
///
/// assert_eq!(small_even.test(&4), Ok(true));
/// assert_eq!(small_even.test(&12), Ok(false));
/// assert_eq!(small_even.test(&-2), Err("-2 is negative".to_string()));
/// ```
pub trait Predicate<T: ?Sized> {
    type Error;

    /// Evaluates this predicate on `value`.
    ///
    /// # Errors
    ///
    /// Each predicate defines its own `Error` type.
    fn test(&self, value: &T) -> Result<bool, Self::Error>;

    /// Returns a predicate that is true when both this and `other` are.
    ///
    /// `other` is only evaluated when this predicate returns `Ok(true)`.
    fn and<P>(self, other: P) -> impl Predicate<T, Error = Self::Error>
    where
        Self: Sized,
        P: Predicate<T, Error = Self::Error>,
    {
        and::And {
            left: self,
            right: other,
        }
    }

    /// Returns a predicate that is true when either this or `other` is.
    ///
    /// `other` is only evaluated when this predicate returns `Ok(false)`.
    fn or<P>(self, other: P) -> impl Predicate<T, Error = Self::Error>
    where
        Self: Sized,
        P: Predicate<T, Error = Self::Error>,
    {
        or::Or {
            left: self,
            right: other,
        }
    }

    /// Returns a predicate with the opposite boolean result.
    ///
    /// Errors pass through unchanged.
    fn negate(self) -> impl Predicate<T, Error = Self::Error>
    where
        Self: Sized,
    {
        negate::Not(self)
    }

    /// Transforms this predicate's error into a different type.
    fn map_err<ErrorMap, NewError>(self, error_map: ErrorMap) -> impl Predicate<T, Error = NewError>
    where
        Self: Sized,
        ErrorMap: Fn(Self::Error) -> NewError,
    {
        MapErr::new(self, error_map)
    }
}

impl<F, T, E> Predicate<T> for F
where
    T: ?Sized,
    F: Fn(&T) -> Result<bool, E>,
{
    type Error = E;

    fn test(&self, value: &T) -> Result<bool, Self::Error> {
        self(value)
    }
}

/// Returns the negation of `target`.
///
/// Equivalent to [`Predicate::negate()`], usable where a free function reads
/// better, such as an argument to [`Opt::filter()`](crate::Opt::filter).
pub fn not<T, P>(target: P) -> impl Predicate<T, Error = P::Error>
where
    T: ?Sized,
    P: Predicate<T>,
{
    negate::Not(target)
}

/// Returns a predicate that compares values against `reference`.
///
/// Comparison uses `PartialEq`. To compare possibly-absent values, use an
/// `Option` reference: `None` then equals only `None`, and `Some(x)` equals
/// `Some(y)` when `x == y`.
///
/// The predicate never fails; `E` is whatever error type the surrounding
/// composition needs.
pub const fn is_equal<R, E>(reference: R) -> IsEqual<R, E> {
    IsEqual::new(reference)
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, convert::Infallible, fmt};

    use super::*;

    struct IsPositive;

    impl Predicate<i32> for IsPositive {
        type Error = Infallible;

        fn test(&self, value: &i32) -> Result<bool, Self::Error> {
            Ok(*value > 0)
        }
    }

    /// Counts its calls and returns a fixed answer.
    struct Counted<'a> {
        calls: &'a Cell<u32>,
        answer: Result<bool, Failed>,
    }

    impl Predicate<i32> for Counted<'_> {
        type Error = Failed;

        fn test(&self, _value: &i32) -> Result<bool, Self::Error> {
            self.calls.set(self.calls.get() + 1);
            self.answer.clone()
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Failed(&'static str);

    impl fmt::Display for Failed {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{} failed", self.0)
        }
    }

    fn counted(calls: &Cell<u32>, answer: Result<bool, Failed>) -> Counted<'_> {
        Counted { calls, answer }
    }

    #[test]
    fn and_evaluates_right_only_when_left_is_true() {
        let right_calls = Cell::new(0);
        let left_calls = Cell::new(0);

        let both = counted(&left_calls, Ok(false)).and(counted(&right_calls, Ok(true)));
        assert_eq!(both.test(&1), Ok(false));
        assert_eq!(right_calls.get(), 0);

        let both = counted(&left_calls, Ok(true)).and(counted(&right_calls, Ok(false)));
        assert_eq!(both.test(&1), Ok(false));
        assert_eq!(right_calls.get(), 1);

        let both = counted(&left_calls, Ok(true)).and(counted(&right_calls, Ok(true)));
        assert_eq!(both.test(&1), Ok(true));
        assert_eq!(left_calls.get(), 3);
    }

    #[test]
    fn or_evaluates_right_only_when_left_is_false() {
        let right_calls = Cell::new(0);
        let left_calls = Cell::new(0);

        let either = counted(&left_calls, Ok(true)).or(counted(&right_calls, Ok(false)));
        assert_eq!(either.test(&1), Ok(true));
        assert_eq!(right_calls.get(), 0);

        let either = counted(&left_calls, Ok(false)).or(counted(&right_calls, Ok(true)));
        assert_eq!(either.test(&1), Ok(true));
        assert_eq!(right_calls.get(), 1);

        let either = counted(&left_calls, Ok(false)).or(counted(&right_calls, Ok(false)));
        assert_eq!(either.test(&1), Ok(false));
        assert_eq!(left_calls.get(), 3);
    }

    #[test]
    fn left_error_stops_evaluation() {
        let right_calls = Cell::new(0);
        let left_calls = Cell::new(0);

        let both = counted(&left_calls, Err(Failed("left"))).and(counted(&right_calls, Ok(true)));
        assert_eq!(both.test(&1), Err(Failed("left")));

        let either = counted(&left_calls, Err(Failed("left"))).or(counted(&right_calls, Ok(true)));
        assert_eq!(either.test(&1), Err(Failed("left")));

        assert_eq!(right_calls.get(), 0);
    }

    #[test]
    fn right_error_propagates() {
        let calls = Cell::new(0);

        let both = counted(&calls, Ok(true)).and(counted(&calls, Err(Failed("right"))));
        assert_eq!(both.test(&1), Err(Failed("right")));

        let either = counted(&calls, Ok(false)).or(counted(&calls, Err(Failed("right"))));
        assert_eq!(either.test(&1), Err(Failed("right")));
    }

    #[test]
    fn negate_and_not_invert_the_result() {
        assert_eq!(IsPositive.negate().test(&5), Ok(false));
        assert_eq!(IsPositive.negate().test(&-5), Ok(true));
        assert_eq!(not(IsPositive).test(&5), Ok(false));
        assert_eq!(not(not(IsPositive)).test(&5), Ok(true));
    }

    #[test]
    fn negate_keeps_errors() {
        let calls = Cell::new(0);
        let negated = counted(&calls, Err(Failed("inner"))).negate();

        assert_eq!(negated.test(&0), Err(Failed("inner")));
    }

    #[test]
    fn closures_combine() {
        let is_even = |value: &i32| Ok::<bool, Infallible>(value % 2 == 0);
        let is_small = |value: &i32| Ok(value.abs() < 10);

        let small_even = is_even.and(is_small);

        assert_eq!(small_even.test(&4), Ok(true));
        assert_eq!(small_even.test(&5), Ok(false));
        assert_eq!(small_even.test(&12), Ok(false));
    }

    #[test]
    fn is_equal_compares_values() {
        let is_seven = is_equal::<_, Infallible>(7);
        assert_eq!(is_seven.reference(), &7);

        assert_eq!(is_seven.test(&7), Ok(true));
        assert_eq!(is_seven.test(&8), Ok(false));
    }

    #[test]
    fn is_equal_treats_none_as_equal_only_to_none() {
        let is_none = is_equal::<Option<i32>, Infallible>(None);
        assert_eq!(is_none.test(&None), Ok(true));
        assert_eq!(is_none.test(&Some(0)), Ok(false));

        let is_some_three = is_equal::<_, Infallible>(Some(3));
        assert_eq!(is_some_three.test(&Some(3)), Ok(true));
        assert_eq!(is_some_three.test(&None), Ok(false));
    }

    #[test]
    fn is_equal_compares_across_borrowed_forms() {
        let is_tryfn = is_equal::<_, Infallible>(String::from("tryfn"));

        assert_eq!(is_tryfn.test("tryfn"), Ok(true));
        assert_eq!(is_tryfn.test("tryfm"), Ok(false));
    }

    #[test]
    fn map_err_transforms_predicate_error() {
        let calls = Cell::new(0);
        let described = counted(&calls, Err(Failed("check"))).map_err(|err| err.to_string());

        assert_eq!(described.test(&1), Err("check failed".to_string()));
    }
}
