//! This crate contains the data contracts of the Minecraft metadata API. Every record is a plain,
//! immutable value that is decoded fresh from a response body and owned by the caller afterward.
//!
//! The types target a single revision of the API schema. Optional members of that revision are
//! modeled as [`Option`] and collections that may be omitted default to empty, so that additive
//! schema changes do not break decoding.

use serde::{Deserialize, Serialize};

pub mod dns;
pub mod error;
pub mod ip;
pub mod player;
pub mod server;

// reexport the data types
pub use dns::{ARecord, DnsRecord, SrvRecord};
pub use error::{ErrorResponse, ParseError};
pub use ip::{AsnLookup, GeoLocation, IpLookup};
pub use player::{
    Cape, CapeData, ImageFormat, Player, PlayerName, ProfileProperty, Skin, SkinModel,
    TextureParts,
};
pub use server::{
    BedrockServer, Blocked, JavaServer, MinecraftServer, Platform, Server, ServerEdition,
    ServerFavicon, ServerMotd, ServerPlayer, ServerPlayers, ServerRegistryEntry,
};

/// The cache envelope that the API attaches to every cacheable record.
///
/// The envelope is bookkeeping of the remote service and is passed through as-is. It is flattened
/// into the record that it describes, so its fields appear next to the fields of the payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Cache {
    /// Whether the record was served from the cache of the remote service.
    #[serde(default)]
    pub cached: bool,
    /// The unix timestamp (milliseconds) at which the record was cached, if it was cached.
    #[serde(default)]
    pub cached_time: Option<i64>,
}
