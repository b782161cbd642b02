//! The endpoint client of the Minecraft metadata API.
//!
//! Every operation of [`McUtilsClient`] is a single request/response exchange. The HTTP outcome is
//! classified as either success or failure and the body is decoded into the declared success type
//! or into an [`ErrorResponse`](mcutils_types::ErrorResponse) respectively. Faults that happen
//! before a status is known (transport) or while decoding a body (parse) are passed through as
//! [`Error`] without further interpretation.

use std::sync::LazyLock;

pub mod client;
pub mod error;
pub mod outcome;
pub mod query;
pub mod transport;

// reexport the client surface
pub use client::McUtilsClient;
pub use error::*;
pub use outcome::Outcome;
pub use query::{SkinPartOptions, build_query};
pub use transport::{HttpTransport, Transport, TransportResponse};

/// The production origin of the API.
pub const DEFAULT_ENDPOINT: &str = "https://mc.fascinated.cc/api";

/// The shared http client (for all API requests of the default transport).
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .user_agent(concat!("mcutils/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("failed to build reqwest client")
});
