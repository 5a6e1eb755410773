use crate::{AbsentError, Action, Predicate, Producer, Transform};

/// A container holding zero or one value, transformed by fallible callables.
///
/// `Opt` wraps a standard [`Option`] and mirrors the familiar combinators,
/// except that each one takes a callable from this crate and returns that
/// callable's error to the caller untouched. None of them catch, log, or
/// translate an error.
///
/// An `Opt` is either present, holding a value, or absent. Operations never
/// mutate; they consume the receiver and return a new `Opt`.
///
/// # Example
///
/// ```
/// use std::num::ParseIntError;
///
/// use tryfn_core::Opt;
///
/// fn port(raw: Option<&str>) -> Result<Opt<u16>, ParseIntError> {
///     Opt::of_nullable(raw)
///         .filter(|text: &&str| Ok::<_, ParseIntError>(!text.is_empty()))?
///         .map(|text: &str| text.parse::<u16>())
/// }
///
/// assert_eq!(port(Some("8080")), Ok(Opt::of(8080)));
/// assert_eq!(port(Some("")), Ok(Opt::empty()));
/// assert_eq!(port(None), Ok(Opt::empty()));
/// assert!(port(Some("http")).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Opt<T>(Option<T>);

impl<T> Opt<T> {
    /// Creates a present `Opt` holding `value`.
    pub const fn of(value: T) -> Self {
        Self(Some(value))
    }

    /// Creates an absent `Opt`.
    pub const fn empty() -> Self {
        Self(None)
    }

    /// Creates an `Opt` that is present exactly when `value` is `Some`.
    pub const fn of_nullable(value: Option<T>) -> Self {
        Self(value)
    }

    /// Returns `true` if a value is present.
    pub const fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// Returns `true` if no value is present.
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Returns a reference to the held value.
    ///
    /// # Errors
    ///
    /// Returns [`AbsentError`] if no value is present.
    pub fn get(&self) -> Result<&T, AbsentError> {
        self.0.as_ref().ok_or(AbsentError)
    }

    /// Converts from `&Opt<T>` to `Opt<&T>`.
    pub const fn as_ref(&self) -> Opt<&T> {
        Opt(self.0.as_ref())
    }

    /// Returns the wrapped standard `Option`.
    pub fn into_option(self) -> Option<T> {
        self.0
    }

    /// Calls `action` with the held value, if any.
    ///
    /// # Errors
    ///
    /// Returns the error from `action` unchanged.
    pub fn if_present<A>(&self, action: A) -> Result<(), A::Error>
    where
        A: Action<T>,
    {
        self.if_present_or_else(action, || {})
    }

    /// Calls `action` with the held value, or `empty_action` if absent.
    ///
    /// Only `action` has an error channel. `empty_action` is a plain closure;
    /// a failure there is a panic, not a typed error.
    ///
    /// # Errors
    ///
    /// Returns the error from `action` unchanged.
    pub fn if_present_or_else<A, F>(&self, action: A, empty_action: F) -> Result<(), A::Error>
    where
        A: Action<T>,
        F: FnOnce(),
    {
        match &self.0 {
            Some(value) => action.accept(value),
            None => {
                empty_action();
                Ok(())
            }
        }
    }

    /// Keeps the held value only if `predicate` accepts it.
    ///
    /// An absent `Opt` is returned as is and `predicate` is not called.
    ///
    /// # Errors
    ///
    /// Returns the error from `predicate` unchanged.
    pub fn filter<P>(self, predicate: P) -> Result<Self, P::Error>
    where
        P: Predicate<T>,
    {
        let keep = match &self.0 {
            Some(value) => predicate.test(value)?,
            None => true,
        };
        Ok(if keep { self } else { Self::empty() })
    }

    /// Applies `mapper` to the held value, if any.
    ///
    /// # Errors
    ///
    /// Returns the error from `mapper` unchanged.
    pub fn map<M>(self, mapper: M) -> Result<Opt<M::Output>, M::Error>
    where
        M: Transform<T>,
    {
        match self.0 {
            Some(value) => mapper.apply(value).map(Opt::of),
            None => Ok(Opt::empty()),
        }
    }

    /// Applies `mapper` to the held value, collapsing a `None` result.
    ///
    /// Use this when the mapped result may itself be missing. A mapper
    /// returning `Ok(None)` yields an absent `Opt`, never a present one
    /// holding nothing.
    ///
    /// # Errors
    ///
    /// Returns the error from `mapper` unchanged.
    pub fn map_nullable<U, M>(self, mapper: M) -> Result<Opt<U>, M::Error>
    where
        M: Transform<T, Output = Option<U>>,
    {
        match self.0 {
            Some(value) => mapper.apply(value).map(Opt::of_nullable),
            None => Ok(Opt::empty()),
        }
    }

    /// Applies `mapper` to the held value and returns its `Opt` directly.
    ///
    /// # Errors
    ///
    /// Returns the error from `mapper` unchanged.
    pub fn flat_map<U, M>(self, mapper: M) -> Result<Opt<U>, M::Error>
    where
        M: Transform<T, Output = Opt<U>>,
    {
        match self.0 {
            Some(value) => mapper.apply(value),
            None => Ok(Opt::empty()),
        }
    }

    /// Returns `self` if present, otherwise the `Opt` from `supplier`.
    ///
    /// `supplier` is not called when a value is present.
    ///
    /// # Errors
    ///
    /// Returns the error from `supplier` unchanged.
    pub fn or<S>(self, supplier: S) -> Result<Self, S::Error>
    where
        S: Producer<Output = Self>,
    {
        if self.is_present() {
            Ok(self)
        } else {
            supplier.get()
        }
    }

    /// Returns the held value, otherwise the value from `supplier`.
    ///
    /// `supplier` is not called when a value is present.
    ///
    /// # Errors
    ///
    /// Returns the error from `supplier` unchanged.
    pub fn or_else_get<S>(self, supplier: S) -> Result<T, S::Error>
    where
        S: Producer<Output = T>,
    {
        match self.0 {
            Some(value) => Ok(value),
            None => supplier.get(),
        }
    }

    /// Returns the held value, otherwise `other`.
    pub fn or_else(self, other: T) -> T {
        self.0.unwrap_or(other)
    }

    /// Returns the held value, otherwise fails with the error from `error`.
    ///
    /// `error` produces the error to return when absent. If producing it
    /// fails, that failure is returned instead.
    ///
    /// # Errors
    ///
    /// Returns the produced error when no value is present.
    pub fn ok_or_else<S, E>(self, error: S) -> Result<T, E>
    where
        S: Producer<Output = E, Error = E>,
    {
        match self.0 {
            Some(value) => Ok(value),
            None => Err(error.get().unwrap_or_else(|failure| failure)),
        }
    }
}

impl<T> Default for Opt<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Opt<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> From<Opt<T>> for Option<T> {
    fn from(value: Opt<T>) -> Self {
        value.into_option()
    }
}
