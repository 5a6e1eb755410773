use std::fmt::Display;

use tracing::{debug, trace};

use crate::Transform;

/// A wrapper that emits `tracing` events around each call.
///
/// This struct is used internally by `.traced()`.
pub(crate) struct Traced<C> {
    pub(crate) transform: C,
    pub(crate) label: &'static str,
}

impl<T, C> Transform<T> for Traced<C>
where
    C: Transform<T>,
    C::Error: Display,
{
    type Output = C::Output;
    type Error = C::Error;

    fn apply(&self, value: T) -> Result<Self::Output, Self::Error> {
        trace!(label = self.label, "applying transform");

        let result = self.transform.apply(value);
        match &result {
            Ok(_) => trace!(label = self.label, "transform succeeded"),
            Err(error) => debug!(label = self.label, %error, "transform signaled an error"),
        }
        result
    }
}
