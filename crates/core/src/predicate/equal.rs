use std::{fmt, marker::PhantomData};

use crate::Predicate;

/// A predicate comparing values against a fixed reference.
///
/// Created by [`is_equal()`](crate::is_equal).
pub struct IsEqual<R, E> {
    reference: R,
    _marker: PhantomData<fn() -> E>,
}

impl<R, E> IsEqual<R, E> {
    pub(crate) const fn new(reference: R) -> Self {
        Self {
            reference,
            _marker: PhantomData,
        }
    }

    /// Returns the reference value.
    pub const fn reference(&self) -> &R {
        &self.reference
    }
}

impl<R: fmt::Debug, E> fmt::Debug for IsEqual<R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IsEqual").field(&self.reference).finish()
    }
}

impl<R: Clone, E> Clone for IsEqual<R, E> {
    fn clone(&self) -> Self {
        Self::new(self.reference.clone())
    }
}

impl<T, R, E> Predicate<T> for IsEqual<R, E>
where
    T: ?Sized,
    R: PartialEq<T>,
{
    type Error = E;

    fn test(&self, value: &T) -> Result<bool, Self::Error> {
        Ok(self.reference == *value)
    }
}
