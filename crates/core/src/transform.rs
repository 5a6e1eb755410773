mod chain;
mod inspect;
mod passthrough;
#[cfg(feature = "tracing")]
mod traced;

use crate::map_err::MapErr;

/// A callable that maps an input to an output and may fail.
///
/// A `Transform` is the fallible counterpart of a closure `Fn(T) -> R`.
/// Any closure `Fn(T) -> Result<R, E>` is a
/// `Transform<T, Output = R, Error = E>`.
///
/// ## Composing Transforms
///
/// Transforms are combined sequentially with [`Transform::and_then()`] or,
/// from the other side, [`Transform::compose()`]. To ensure type safety:
/// - The first transform's output type must match the second's input type.
/// - Both transforms must use the same error type.
///
/// Use [`Transform::map_err()`] to bring transforms with different error types
/// into agreement.
///
/// # Example
///
/// ```
/// use std::num::ParseIntError;
///
/// use tryfn_core::Transform;
///
/// let parse = |text: &str| text.trim().parse::<i32>();
/// let double = |n: i32| Ok::<_, ParseIntError>(n * 2);
///
/// let parse_then_double = parse.and_then(double);
///
/// assert_eq!(parse_then_double.apply(" 21 "), Ok(42));
/// assert!(parse_then_double.apply("twenty-one").is_err());
/// ```
pub trait Transform<T> {
    type Output;
    type Error;

    /// Applies the transform to `value`.
    ///
    /// # Errors
    ///
    /// Each transform defines its own `Error` type.
    fn apply(&self, value: T) -> Result<Self::Output, Self::Error>;

    /// Returns a transform that applies `before` and then this transform.
    ///
    /// If `before` fails, its error is returned and this transform is never
    /// called.
    fn compose<V, B>(
        self,
        before: B,
    ) -> impl Transform<V, Output = Self::Output, Error = Self::Error>
    where
        Self: Sized,
        B: Transform<V, Output = T, Error = Self::Error>,
    {
        chain::Chain {
            first: before,
            second: self,
        }
    }

    /// Returns a transform that applies this transform and then `after`.
    ///
    /// If this transform fails, its error is returned and `after` is never
    /// called.
    fn and_then<A>(self, after: A) -> impl Transform<T, Output = A::Output, Error = Self::Error>
    where
        Self: Sized,
        A: Transform<Self::Output, Error = Self::Error>,
    {
        chain::Chain {
            first: self,
            second: after,
        }
    }

    /// Transforms this transform's error into a different type.
    fn map_err<ErrorMap, NewError>(
        self,
        error_map: ErrorMap,
    ) -> impl Transform<T, Output = Self::Output, Error = NewError>
    where
        Self: Sized,
        ErrorMap: Fn(Self::Error) -> NewError,
    {
        MapErr::new(self, error_map)
    }

    /// Inspects inputs and successful outputs without modifying behavior.
    ///
    /// `input_handler` is called before the transform runs and
    /// `output_handler` after it succeeds. Neither is called with an error.
    fn inspect<InputHandler, OutputHandler>(
        self,
        input_handler: InputHandler,
        output_handler: OutputHandler,
    ) -> impl Transform<T, Output = Self::Output, Error = Self::Error>
    where
        Self: Sized,
        InputHandler: Fn(&T),
        OutputHandler: Fn(&Self::Output),
    {
        inspect::Inspect {
            transform: self,
            input_handler,
            output_handler,
        }
    }

    /// Emits `tracing` events around each call to this transform.
    ///
    /// Each call logs a `trace` event tagged with `label`, and a failing call
    /// logs a `debug` event with the error. The result is returned unchanged.
    #[cfg(feature = "tracing")]
    fn traced(
        self,
        label: &'static str,
    ) -> impl Transform<T, Output = Self::Output, Error = Self::Error>
    where
        Self: Sized,
        Self::Error: std::fmt::Display,
    {
        traced::Traced {
            transform: self,
            label,
        }
    }
}

impl<F, T, R, E> Transform<T> for F
where
    F: Fn(T) -> Result<R, E>,
{
    type Output = R;
    type Error = E;

    fn apply(&self, value: T) -> Result<Self::Output, Self::Error> {
        self(value)
    }
}

/// Returns a transform that yields its input unchanged.
///
/// The identity never fails, so its error type is whatever the surrounding
/// composition needs (often [`Infallible`](std::convert::Infallible)).
#[must_use]
pub fn identity<T, E>() -> impl Transform<T, Output = T, Error = E> {
    passthrough::Identity::new()
}
