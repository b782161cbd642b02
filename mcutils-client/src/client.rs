use crate::error::{BoxError, Error, Result};
use crate::outcome::Outcome;
use crate::query::{
    DEFAULT_CAPE_PART_SIZE, DEFAULT_SERVER_PREVIEW_SIZE, SkinPartOptions, build_query,
};
use crate::transport::{HttpTransport, Transport, TransportResponse};
use crate::DEFAULT_ENDPOINT;
use bytes::Bytes;
use mcutils_types::{
    BedrockServer, Blocked, CapeData, ErrorResponse, ImageFormat, IpLookup, JavaServer,
    MinecraftServer, Platform, Player, PlayerName,
};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace};
use url::Url;

/// The client for all endpoints of the API.
///
/// The client holds nothing but the immutable endpoint and its transport, so a single instance can
/// be shared and used by many tasks at once. Every operation issues exactly one request and neither
/// caches, retries nor rate limits.
#[derive(Debug, Clone)]
pub struct McUtilsClient<T = HttpTransport> {
    endpoint: String,
    transport: T,
}

impl McUtilsClient<HttpTransport> {
    /// Creates a new client for the supplied endpoint (e.g. `https://mc.fascinated.cc/api`).
    ///
    /// # Errors
    ///
    /// Will return [`Error::InvalidEndpoint`] if the endpoint is not an absolute base URL or if it
    /// carries a query or fragment.
    pub fn new(endpoint: impl AsRef<str>) -> Result<Self> {
        Self::with_transport(endpoint, HttpTransport::default())
    }
}

impl Default for McUtilsClient<HttpTransport> {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT).expect("expected default endpoint to be a valid url")
    }
}

impl<T> McUtilsClient<T>
where
    T: Transport,
{
    /// Creates a new client for the supplied endpoint that issues its requests via `transport`.
    ///
    /// # Errors
    ///
    /// Will return [`Error::InvalidEndpoint`] if the endpoint is not an absolute base URL or if it
    /// carries a query or fragment.
    pub fn with_transport(endpoint: impl AsRef<str>, transport: T) -> Result<Self> {
        let endpoint = endpoint.as_ref().trim();
        let invalid = |cause: BoxError| Error::InvalidEndpoint {
            endpoint: endpoint.to_owned(),
            cause,
        };

        let parsed = Url::parse(endpoint).map_err(|err| invalid(err.into()))?;
        if parsed.cannot_be_a_base() {
            return Err(invalid("endpoint cannot be used as base url".into()));
        }
        // request paths and queries are appended to the endpoint
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(invalid("endpoint must not have a query or fragment".into()));
        }

        Ok(Self {
            endpoint: parsed.as_str().trim_end_matches('/').to_owned(),
            transport,
        })
    }

    /// Returns the endpoint all request paths are appended to (without trailing slash).
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the transport of this client.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Composes the full request URL for a path and its query pairs.
    ///
    /// The path identifiers are used as supplied; only characters that are not allowed in a URL
    /// are percent-encoded by the URL parser.
    pub fn url<K, V>(&self, path: &str, params: &[(K, V)]) -> Result<Url>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let url = format!("{}{}{}", self.endpoint, path, build_query(params));
        Url::parse(&url).map_err(|cause| Error::InvalidUrl { url, cause })
    }

    /// Fetches a server of the requested platform.
    ///
    /// The variant of the returned [`MinecraftServer`] is always the requested platform.
    #[instrument(skip(self))]
    pub async fn fetch_server(
        &self,
        platform: Platform,
        host: &str,
    ) -> Result<Outcome<MinecraftServer>> {
        let path = format!("/server/{platform}/{host}");
        self.fetch_with("server", &path, NO_PARAMS, move |body| {
            Ok(MinecraftServer::from_slice(platform, &body)?)
        })
        .await
    }

    /// Fetches a Java server (eg: `aetheria.cc`).
    #[instrument(skip(self))]
    pub async fn fetch_java_server(&self, host: &str) -> Result<Outcome<JavaServer>> {
        let path = format!("/server/{}/{host}", Platform::Java);
        self.fetch_json("java_server", &path, NO_PARAMS).await
    }

    /// Fetches a Bedrock server (eg: `geo.hivebedrock.network`).
    #[instrument(skip(self))]
    pub async fn fetch_bedrock_server(&self, host: &str) -> Result<Outcome<BedrockServer>> {
        let path = format!("/server/{}/{host}", Platform::Bedrock);
        self.fetch_json("bedrock_server", &path, NO_PARAMS).await
    }

    /// Fetches whether a hostname is on Mojang's server blocklist.
    #[instrument(skip(self))]
    pub async fn fetch_server_blocked(&self, host: &str) -> Result<Outcome<bool>> {
        let path = format!("/server/blocked/{host}");
        let outcome = self
            .fetch_json::<Blocked>("server_blocked", &path, NO_PARAMS)
            .await?;
        Ok(outcome.map(|blocked| blocked.blocked))
    }

    /// Fetches the favicon of a server as image.
    #[instrument(skip(self))]
    pub async fn fetch_server_icon(&self, host: &str) -> Result<Outcome<Bytes>> {
        let path = format!("/server/icon/{host}");
        self.fetch_image("server_icon", &path, NO_PARAMS).await
    }

    /// Fetches the rendered server list preview of a server as image.
    ///
    /// Without a `size`, [`DEFAULT_SERVER_PREVIEW_SIZE`] is requested.
    #[instrument(skip(self))]
    pub async fn fetch_server_preview(
        &self,
        platform: Platform,
        host: &str,
        size: Option<u32>,
    ) -> Result<Outcome<Bytes>> {
        let path = format!("/server/{platform}/preview/{host}");
        let size = size.unwrap_or(DEFAULT_SERVER_PREVIEW_SIZE);
        self.fetch_image("server_preview", &path, &[("size", size.to_string())])
            .await
    }

    /// Fetches a player by unique id or username (eg: `ImFascinated`).
    #[instrument(skip(self))]
    pub async fn fetch_player(&self, id: &str) -> Result<Outcome<Player>> {
        let path = format!("/player/{id}");
        self.fetch_json("player", &path, NO_PARAMS).await
    }

    /// Resolves a username to the unique id of the player or the other way around.
    #[instrument(skip(self))]
    pub async fn fetch_player_uuid(&self, id: &str) -> Result<Outcome<PlayerName>> {
        let path = format!("/player/uuid/{id}");
        self.fetch_json("player_uuid", &path, NO_PARAMS).await
    }

    /// Fetches the raw skin texture of a player as image.
    #[instrument(skip(self))]
    pub async fn fetch_player_skin(&self, id: &str, format: ImageFormat) -> Result<Outcome<Bytes>> {
        let path = format!("/player/{id}/skin.{format}");
        self.fetch_image("player_skin", &path, NO_PARAMS).await
    }

    /// Fetches a rendered part (eg: `head`, `fullbody_front`) of a player's skin as image.
    #[instrument(skip(self))]
    pub async fn fetch_player_skin_part(
        &self,
        id: &str,
        part: &str,
        options: SkinPartOptions,
    ) -> Result<Outcome<Bytes>> {
        let path = format!("/player/{id}/skin/{part}.{}", options.format);
        self.fetch_image("player_skin_part", &path, &options.params())
            .await
    }

    /// Fetches the catalog of all known capes.
    #[instrument(skip(self))]
    pub async fn fetch_capes(&self) -> Result<Outcome<Vec<CapeData>>> {
        self.fetch_json("capes", "/capes", NO_PARAMS).await
    }

    /// Fetches the raw texture of a cape (by name or texture id) as image.
    #[instrument(skip(self))]
    pub async fn fetch_cape_texture(&self, query: &str) -> Result<Outcome<Bytes>> {
        let path = format!("/capes/{query}/texture.png");
        self.fetch_image("cape_texture", &path, NO_PARAMS).await
    }

    /// Fetches a rendered part (eg: `front`) of a cape as image.
    ///
    /// Without a `size`, [`DEFAULT_CAPE_PART_SIZE`] is requested.
    #[instrument(skip(self))]
    pub async fn fetch_cape_part(
        &self,
        query: &str,
        part: &str,
        size: Option<u32>,
    ) -> Result<Outcome<Bytes>> {
        let path = format!("/capes/{query}/{part}.png");
        let size = size.unwrap_or(DEFAULT_CAPE_PART_SIZE);
        self.fetch_image("cape_part", &path, &[("size", size.to_string())])
            .await
    }

    /// Looks up the location and network ownership of an IP address.
    #[instrument(skip(self))]
    pub async fn fetch_ip(&self, query: &str) -> Result<Outcome<IpLookup>> {
        let path = format!("/ip/{query}");
        self.fetch_json("ip", &path, NO_PARAMS).await
    }

    async fn fetch_json<S>(
        &self,
        operation: &'static str,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Outcome<S>>
    where
        S: DeserializeOwned + Send,
    {
        self.fetch_with(operation, path, params, |body| {
            Ok(serde_json::from_slice(&body)?)
        })
        .await
    }

    async fn fetch_image(
        &self,
        operation: &'static str,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Outcome<Bytes>> {
        // image bodies are handed out as-is, the format is not checked
        self.fetch_with(operation, path, params, Ok).await
    }

    /// Issues a single request and classifies its answer.
    ///
    /// Any success status is decoded with `decode`, any other status is decoded as
    /// [`ErrorResponse`]. The status code itself is not interpreted any further.
    async fn fetch_with<S, D>(
        &self,
        operation: &'static str,
        path: &str,
        params: &[(&str, String)],
        decode: D,
    ) -> Result<Outcome<S>>
    where
        S: Send,
        D: FnOnce(Bytes) -> Result<S, BoxError> + Send,
    {
        let url = self.url(path, params)?;
        debug!(operation, url = %url, "issuing request");

        let TransportResponse { status, body } = self
            .transport
            .get(url)
            .await
            .map_err(|cause| Error::FailedFetch { operation, cause })?;
        trace!(operation, status = %status, length = body.len(), "received response");

        if status.is_success() {
            let value = decode(body).map_err(|cause| Error::FailedParse { operation, cause })?;
            return Ok(Outcome::Success(value));
        }

        let error: ErrorResponse =
            serde_json::from_slice(&body).map_err(|err| Error::FailedParse {
                operation,
                cause: Box::new(err),
            })?;
        debug!(operation, status = %status, code = error.code, "api reported failure");
        Ok(Outcome::Failure(error))
    }
}

const NO_PARAMS: &[(&str, String)] = &[];
