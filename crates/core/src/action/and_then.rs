use crate::Action;

/// A wrapper that runs two actions on the same value in sequence.
///
/// Internally used by `.and_then()`. Both actions share an error type, so a
/// failure from either side propagates unchanged.
pub(crate) struct AndThen<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

impl<T, A, B> Action<T> for AndThen<A, B>
where
    T: ?Sized,
    A: Action<T>,
    B: Action<T, Error = A::Error>,
{
    type Error = A::Error;

    /// Calls the first action and, if it succeeds, the second.
    fn accept(&self, value: &T) -> Result<(), Self::Error> {
        self.first.accept(value)?;
        self.second.accept(value)
    }
}
