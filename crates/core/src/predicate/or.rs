use crate::Predicate;

/// A predicate that is true when either inner predicate is.
///
/// Internally used by `.or()`.
pub(crate) struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<T, L, R> Predicate<T> for Or<L, R>
where
    T: ?Sized,
    L: Predicate<T>,
    R: Predicate<T, Error = L::Error>,
{
    type Error = L::Error;

    fn test(&self, value: &T) -> Result<bool, Self::Error> {
        if self.left.test(value)? {
            Ok(true)
        } else {
            self.right.test(value)
        }
    }
}
