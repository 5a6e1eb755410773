use crate::Transform;

/// A wrapper that applies two transforms sequentially.
///
/// Internally used by both `.and_then()` and `.compose()`, which differ only
/// in which transform becomes `first`. The output of `first` must match the
/// input of `second`, and both share an error type so failures propagate
/// unchanged.
pub(crate) struct Chain<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

impl<T, A, B> Transform<T> for Chain<A, B>
where
    A: Transform<T>,
    B: Transform<A::Output, Error = A::Error>,
{
    type Output = B::Output;
    type Error = A::Error;

    /// Applies the first transform and passes its output to the second.
    fn apply(&self, value: T) -> Result<Self::Output, Self::Error> {
        let intermediate = self.first.apply(value)?;
        self.second.apply(intermediate)
    }
}
