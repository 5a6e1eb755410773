use crate::map_err::MapErr;

/// A callable that produces a value from nothing and may fail.
///
/// A `Producer` is the fallible counterpart of a closure `Fn() -> T`. Any
/// closure `Fn() -> Result<T, E>` is a `Producer<Output = T, Error = E>`.
///
/// # Example
///
/// ```
/// use std::env::VarError;
///
/// use tryfn_core::Producer;
///
/// let home = || std::env::var("TRYFN_SURELY_UNSET_VARIABLE");
///
/// assert_eq!(home.get(), Err(VarError::NotPresent));
/// ```
pub trait Producer {
    type Output;
    type Error;

    /// Produces a value.
    ///
    /// # Errors
    ///
    /// Each producer defines its own `Error` type.
    fn get(&self) -> Result<Self::Output, Self::Error>;

    /// Transforms this producer's error into a different type.
    fn map_err<ErrorMap, NewError>(
        self,
        error_map: ErrorMap,
    ) -> impl Producer<Output = Self::Output, Error = NewError>
    where
        Self: Sized,
        ErrorMap: Fn(Self::Error) -> NewError,
    {
        MapErr::new(self, error_map)
    }
}

impl<F, R, E> Producer for F
where
    F: Fn() -> Result<R, E>,
{
    type Output = R;
    type Error = E;

    fn get(&self) -> Result<Self::Output, Self::Error> {
        self()
    }
}
