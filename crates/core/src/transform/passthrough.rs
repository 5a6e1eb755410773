use std::marker::PhantomData;

use crate::Transform;

/// A transform that returns its input unchanged.
pub(crate) struct Identity<T, E> {
    _marker: PhantomData<fn(T) -> Result<T, E>>,
}

impl<T, E> Identity<T, E> {
    /// Creates a new identity transform.
    pub(crate) const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T, E> Transform<T> for Identity<T, E> {
    type Output = T;
    type Error = E;

    fn apply(&self, value: T) -> Result<Self::Output, Self::Error> {
        Ok(value)
    }
}
