use std::marker::PhantomData;

use crate::{Action, Predicate, Producer, Transform};

/// A wrapper that adapts a callable by transforming its error type.
///
/// Shared by the `.map_err()` method of every callable trait. The wrapped
/// callable is invoked unchanged; only an `Err` passes through `error_map`.
pub(crate) struct MapErr<C, ErrorMap, NewError> {
    callable: C,
    error_map: ErrorMap,
    _marker: PhantomData<fn() -> NewError>,
}

impl<C, ErrorMap, NewError> MapErr<C, ErrorMap, NewError> {
    /// Creates a new callable with a transformed error type.
    pub(crate) const fn new(callable: C, error_map: ErrorMap) -> Self {
        Self {
            callable,
            error_map,
            _marker: PhantomData,
        }
    }
}

impl<T, C, ErrorMap, NewError> Action<T> for MapErr<C, ErrorMap, NewError>
where
    T: ?Sized,
    C: Action<T>,
    ErrorMap: Fn(C::Error) -> NewError,
{
    type Error = NewError;

    fn accept(&self, value: &T) -> Result<(), Self::Error> {
        self.callable.accept(value).map_err(&self.error_map)
    }
}

impl<T, C, ErrorMap, NewError> Transform<T> for MapErr<C, ErrorMap, NewError>
where
    C: Transform<T>,
    ErrorMap: Fn(C::Error) -> NewError,
{
    type Output = C::Output;
    type Error = NewError;

    fn apply(&self, value: T) -> Result<Self::Output, Self::Error> {
        self.callable.apply(value).map_err(&self.error_map)
    }
}

impl<T, C, ErrorMap, NewError> Predicate<T> for MapErr<C, ErrorMap, NewError>
where
    T: ?Sized,
    C: Predicate<T>,
    ErrorMap: Fn(C::Error) -> NewError,
{
    type Error = NewError;

    fn test(&self, value: &T) -> Result<bool, Self::Error> {
        self.callable.test(value).map_err(&self.error_map)
    }
}

impl<C, ErrorMap, NewError> Producer for MapErr<C, ErrorMap, NewError>
where
    C: Producer,
    ErrorMap: Fn(C::Error) -> NewError,
{
    type Output = C::Output;
    type Error = NewError;

    fn get(&self) -> Result<Self::Output, Self::Error> {
        self.callable.get().map_err(&self.error_map)
    }
}
