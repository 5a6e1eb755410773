//! Shared fixtures for the integration tests.

pub mod settings {
    use serde::{Deserialize, Serialize};
    use thiserror::Error;
    use tryfn_core::{Opt, Predicate, Transform};

    /// Raw service settings as read from a JSON document.
    ///
    /// Missing or `null` keys deserialize to an absent [`Opt`].
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct RawSettings {
        #[serde(default)]
        pub port: Opt<String>,
        #[serde(default)]
        pub workers: Opt<String>,
        #[serde(default)]
        pub fallback_port: Opt<u16>,
    }

    /// Errors raised while validating [`RawSettings`].
    #[derive(Debug, PartialEq, Eq, Error)]
    pub enum SettingsError {
        #[error("`{0}` is not a number")]
        NotANumber(String),

        #[error("{0} is outside the allowed range")]
        OutOfRange(u32),

        #[error("no port configured")]
        MissingPort,
    }

    /// Parses decimal text into a `u32`.
    pub struct ParseNumber;

    impl Transform<String> for ParseNumber {
        type Output = u32;
        type Error = SettingsError;

        fn apply(&self, value: String) -> Result<Self::Output, Self::Error> {
            value
                .trim()
                .parse()
                .map_err(|_| SettingsError::NotANumber(value))
        }
    }

    /// Narrows a `u32` to a non-zero `u16`.
    pub struct ToPort;

    impl Transform<u32> for ToPort {
        type Output = u16;
        type Error = SettingsError;

        fn apply(&self, value: u32) -> Result<Self::Output, Self::Error> {
            u16::try_from(value)
                .ok()
                .filter(|port| *port != 0)
                .ok_or(SettingsError::OutOfRange(value))
        }
    }

    /// Accepts worker counts in `1..=limit`.
    pub struct WithinLimit {
        pub limit: u32,
    }

    impl Predicate<u32> for WithinLimit {
        type Error = SettingsError;

        fn test(&self, value: &u32) -> Result<bool, Self::Error> {
            Ok((1..=self.limit).contains(value))
        }
    }

    /// Resolves the port: the configured one, else the fallback, else an error.
    ///
    /// # Errors
    ///
    /// Fails if the configured port is malformed or out of range, or if no port
    /// is available at all.
    pub fn resolve_port(raw: &RawSettings) -> Result<u16, SettingsError> {
        let fallback = raw.fallback_port;
        raw.port
            .clone()
            .map(ParseNumber.and_then(ToPort))?
            .or(|| Ok::<_, SettingsError>(fallback))?
            .ok_or_else(|| Ok(SettingsError::MissingPort))
    }

    /// Resolves the worker count, dropping values outside `1..=limit`.
    ///
    /// # Errors
    ///
    /// Fails if the configured count is malformed.
    pub fn resolve_workers(raw: &RawSettings, limit: u32) -> Result<Opt<u32>, SettingsError> {
        raw.workers
            .clone()
            .map(ParseNumber)?
            .filter(WithinLimit { limit })
    }
}
