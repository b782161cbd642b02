use crate::HTTP_CLIENT;
use crate::error::BoxError;
use bytes::Bytes;
use reqwest::StatusCode;
use std::fmt::{Debug, Formatter};
use url::Url;

/// The raw answer of the API to a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// The HTTP status of the answer.
    pub status: StatusCode,
    /// The complete body of the answer.
    pub body: Bytes,
}

impl TransportResponse {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// The seam between the endpoint client and the network.
///
/// A transport issues exactly one GET request per call and resolves with the status and the full
/// body. Connection handling, TLS and timeouts are entirely up to the implementation. Any fault
/// before a status is known is returned as error and is not interpreted by the client.
pub trait Transport: Debug + Send + Sync {
    fn get(&self, url: Url) -> impl Future<Output = Result<TransportResponse, BoxError>> + Send;
}

/// The default transport that issues requests through [`reqwest`].
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport on top of a custom configured client (e.g. with a timeout or proxy).
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(HTTP_CLIENT.clone())
    }
}

impl Debug for HttpTransport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "HttpTransport")
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: Url) -> Result<TransportResponse, BoxError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        Ok(TransportResponse { status, body })
    }
}
