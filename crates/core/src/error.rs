use thiserror::Error;

/// Returned when a value is requested from an absent [`Opt`](crate::Opt).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no value present")]
pub struct AbsentError;
