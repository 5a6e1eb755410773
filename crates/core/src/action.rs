mod and_then;

use crate::map_err::MapErr;

/// A callable that performs an effect on a value and may fail.
///
/// An `Action` is the fallible counterpart of a closure `Fn(&T)`. It
/// receives the value by reference, produces no output, and reports failure
/// through its own `Error` type.
///
/// Any closure `Fn(&T) -> Result<(), E>` is an `Action<T, Error = E>`.
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
///
/// use tryfn_core::Action;
///
/// #[derive(Debug, PartialEq)]
/// struct TooLong(usize);
///
/// let log = RefCell::new(Vec::new());
///
/// let check = |name: &String| {
///     if name.len() > 5 { Err(TooLong(name.len())) } else { Ok(()) }
/// };
/// let record = |name: &String| {
///     log.borrow_mut().push(name.clone());
///     Ok(())
/// };
///
/// let check_then_record = check.and_then(record);
///
/// assert_eq!(check_then_record.accept(&"ada".to_string()), Ok(()));
/// assert_eq!(check_then_record.accept(&"grace hopper".to_string()), Err(TooLong(12)));
/// assert_eq!(*log.borrow(), vec!["ada".to_string()]);
/// ```
///
/// ## Calling combinators on closures
///
/// A closure `Fn(&T) -> Result<(), E>` is also a `Transform<&T>`, so with both
/// traits in scope `check.and_then(log)` is ambiguous. Name the trait instead:
///
/// ```
/// use tryfn_core::{Action, Predicate, Producer, Transform};
///
/// let check = |value: &i32| if *value > 0 { Ok(()) } else { Err("not positive") };
/// let log = |_: &i32| Ok(());
///
/// let checked = Action::and_then(check, log);
///
/// assert_eq!(checked.accept(&1), Ok(()));
/// assert_eq!(checked.accept(&0), Err("not positive"));
/// ```
pub trait Action<T: ?Sized> {
    type Error;

    /// Performs the action on `value`.
    ///
    /// # Errors
    ///
    /// Each action defines its own `Error` type.
    fn accept(&self, value: &T) -> Result<(), Self::Error>;

    /// Sequences this action with another acting on the same value.
    ///
    /// `after` runs only if this action succeeds. If this action fails, its
    /// error is returned unchanged and `after` is never called. Effects of
    /// this action are not undone when `after` fails.
    fn and_then<A>(self, after: A) -> impl Action<T, Error = Self::Error>
    where
        Self: Sized,
        A: Action<T, Error = Self::Error>,
    {
        and_then::AndThen {
            first: self,
            second: after,
        }
    }

    /// Transforms this action's error into a different type.
    fn map_err<ErrorMap, NewError>(self, error_map: ErrorMap) -> impl Action<T, Error = NewError>
    where
        Self: Sized,
        ErrorMap: Fn(Self::Error) -> NewError,
    {
        MapErr::new(self, error_map)
    }
}

impl<F, T, E> Action<T> for F
where
    T: ?Sized,
    F: Fn(&T) -> Result<(), E>,
{
    type Error = E;

    fn accept(&self, value: &T) -> Result<(), Self::Error> {
        self(value)
    }
}
