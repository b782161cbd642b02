/// A boxed error cause that can be sent across tasks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The fault type for everything that is not a remote-reported failure.
///
/// Failures that the API reports itself are part of the [`Outcome`](crate::Outcome) of an
/// operation. This type only carries faults where no decodable answer exists: the client could not
/// be configured, the request could not be transmitted, or the body did not match the expected
/// shape. The causes are kept as-is and are not classified any further.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The configured endpoint is not a usable base URL.
    #[error("invalid endpoint {endpoint}: {cause}")]
    InvalidEndpoint {
        /// The endpoint as supplied.
        endpoint: String,
        /// The cause of the error.
        #[source]
        cause: BoxError,
    },

    /// The request URL composed from the endpoint and the identifiers could not be parsed.
    #[error("invalid request url {url}: {cause}")]
    InvalidUrl {
        /// The composed URL.
        url: String,
        /// The cause of the error.
        #[source]
        cause: url::ParseError,
    },

    /// The transport failed before any HTTP status was received.
    #[error("failed to fetch {operation} resource: {cause}")]
    FailedFetch {
        /// The operation that failed.
        operation: &'static str,
        /// The cause of the error.
        #[source]
        cause: BoxError,
    },

    /// The body could not be decoded as the expected success or error shape.
    #[error("failed to parse {operation} resource: {cause}")]
    FailedParse {
        /// The operation that failed.
        operation: &'static str,
        /// The cause of the error.
        #[source]
        cause: BoxError,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
