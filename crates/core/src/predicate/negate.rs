use crate::Predicate;

/// A predicate with the opposite result of the one it wraps.
///
/// Internally used by `.negate()` and [`not()`](crate::not).
pub(crate) struct Not<P>(pub(crate) P);

impl<T, P> Predicate<T> for Not<P>
where
    T: ?Sized,
    P: Predicate<T>,
{
    type Error = P::Error;

    fn test(&self, value: &T) -> Result<bool, Self::Error> {
        self.0.test(value).map(|result| !result)
    }
}
