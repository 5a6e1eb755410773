use crate::Predicate;

/// A predicate that is true when both inner predicates are.
///
/// Internally used by `.and()`.
pub(crate) struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<T, L, R> Predicate<T> for And<L, R>
where
    T: ?Sized,
    L: Predicate<T>,
    R: Predicate<T, Error = L::Error>,
{
    type Error = L::Error;

    fn test(&self, value: &T) -> Result<bool, Self::Error> {
        if self.left.test(value)? {
            self.right.test(value)
        } else {
            Ok(false)
        }
    }
}
