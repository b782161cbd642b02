use serde::Deserializer;
use serde::de::{Error, Unexpected, Visitor};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// [`LogFilter`] is a wrapper for [`EnvFilter`] that can be cloned and read from configuration.
#[derive(Debug)]
pub struct LogFilter(pub EnvFilter);

impl LogFilter {
    /// Consumes the wrapper and returns the filter for a subscriber layer.
    pub fn into_inner(self) -> EnvFilter {
        self.0
    }
}

impl Display for LogFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Clone for LogFilter {
    fn clone(&self) -> Self {
        LogFilter(EnvFilter::new(self.0.to_string()))
    }
}

impl Default for LogFilter {
    fn default() -> Self {
        LogFilter(EnvFilter::new("info"))
    }
}

impl FromStr for LogFilter {
    type Err = tracing_subscriber::filter::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LogFilter(EnvFilter::try_new(s)?))
    }
}

/// Deserializer for [LogFilter] from string. E.g. `info` or `mcutils_client=debug`.
pub fn parse_log_filter<'de, D>(deserializer: D) -> Result<LogFilter, D::Error>
where
    D: Deserializer<'de>,
{
    struct LogFilterVisitor;

    impl Visitor<'_> for LogFilterVisitor {
        type Value = LogFilter;

        fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
            write!(formatter, "a list of log filter directives")
        }

        fn visit_str<E>(self, value: &str) -> Result<LogFilter, E>
        where
            E: Error,
        {
            LogFilter::from_str(value)
                .map_err(|_| Error::invalid_value(Unexpected::Str(value), &"log filter directives"))
        }
    }

    deserializer.deserialize_str(LogFilterVisitor)
}
