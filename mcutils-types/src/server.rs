//! The server records of the API.
//!
//! Java and Bedrock servers share a common base of host, MOTD, player and network information that
//! is modeled as [`Server`] and flattened into the platform-specific records. Which of the two
//! records a body decodes into is decided by the platform the caller requested, never by probing
//! the body.

use crate::dns::DnsRecord;
use crate::error::ParseError;
use crate::ip::{AsnLookup, GeoLocation};
use crate::Cache;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The edition of Minecraft a server runs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[serde(alias = "JAVA")]
    Java,
    #[serde(alias = "BEDROCK")]
    Bedrock,
}

impl Platform {
    /// Returns the path segment that identifies this platform in request URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Java => "java",
            Platform::Bedrock => "bedrock",
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "java" => Ok(Platform::Java),
            "bedrock" => Ok(Platform::Bedrock),
            _ => Err(ParseError::UnknownPlatform(s.to_owned())),
        }
    }
}

/// The message of the day of a server in its three renderings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerMotd {
    /// The lines as sent by the server, including formatting codes.
    #[serde(default)]
    pub raw: Vec<String>,
    /// The lines with all formatting codes stripped.
    #[serde(default)]
    pub clean: Vec<String>,
    /// The lines rendered as HTML markup.
    #[serde(default)]
    pub html: Vec<String>,
}

/// A single sampled player entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerPlayer {
    pub name: String,
    pub id: String,
}

/// The current, maximum and sampled players of a server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerPlayers {
    pub online: u32,
    pub max: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample: Option<Vec<ServerPlayer>>,
}

/// The entry of a server in the curated server registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServerRegistryEntry {
    pub server_id: String,
    pub display_name: String,
    #[serde(default)]
    pub hostnames: Vec<String>,
    #[serde(default)]
    pub wildcard_hostnames: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image_url: Option<String>,
    pub platform: Platform,
}

/// The fields that every server record carries, regardless of its platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    /// The hostname the server was looked up with.
    pub hostname: String,
    /// The IP address the hostname resolved to.
    pub ip: String,
    pub port: u16,
    pub motd: ServerMotd,
    pub players: ServerPlayers,
    /// The DNS records that were used to resolve the hostname.
    #[serde(default)]
    pub records: Vec<DnsRecord>,
    #[serde(default)]
    pub location: Option<GeoLocation>,
    #[serde(default)]
    pub asn: Option<AsnLookup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry: Option<ServerRegistryEntry>,
    #[serde(flatten)]
    pub cache: Cache,
}

/// The version information of a Java server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JavaVersion {
    /// The version name as reported by the server (may be custom text).
    pub name: String,
    /// The server software (e.g. `Paper`).
    #[serde(default)]
    pub platform: String,
    /// The numeric protocol version.
    pub protocol: i32,
    /// The release name that belongs to the protocol version.
    #[serde(default)]
    pub protocol_name: String,
}

/// The favicon of a Java server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerFavicon {
    /// The favicon as base64 data URI.
    pub base64: String,
    /// The URL at which the API serves the favicon as image.
    pub url: String,
}

/// The legacy (pre 1.13) Forge mod information.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ForgeModInfo {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mod_list: Option<Vec<ForgeMod>>,
}

/// The modern Forge network data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ForgeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ForgeChannel>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mods: Option<Vec<ForgeMod>>,
    #[serde(default)]
    pub truncated: bool,
    pub fml_network_version: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForgeChannel {
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForgeMod {
    pub name: String,
    pub version: String,
}

/// A Java Edition server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JavaServer {
    #[serde(flatten)]
    pub server: Server,
    pub version: JavaVersion,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<ServerFavicon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mod_info: Option<ForgeModInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forge_data: Option<ForgeData>,
    #[serde(default)]
    pub prevents_chat_reports: bool,
    #[serde(default)]
    pub enforces_secure_chat: bool,
    #[serde(default)]
    pub previews_chat: bool,
    /// Whether the hostname is on Mojang's blocklist.
    #[serde(default)]
    pub mojang_blocked: bool,
    #[serde(default)]
    pub is_modded: bool,
}

/// The edition of a Bedrock server.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ServerEdition {
    /// Pocket Edition (regular Bedrock).
    #[serde(rename = "MCPE")]
    Mcpe,
    /// Education Edition.
    #[serde(rename = "MCEE")]
    Mcee,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BedrockVersion {
    pub protocol: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServerGamemode {
    pub name: String,
    pub numeric_id: i32,
}

/// A Bedrock Edition server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BedrockServer {
    #[serde(flatten)]
    pub server: Server,
    /// The server's unique id as announced in the unconnected pong.
    pub id: String,
    pub edition: ServerEdition,
    pub version: BedrockVersion,
    pub gamemode: ServerGamemode,
}

/// A server of either platform.
///
/// The variant always matches the platform that was requested from the API.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum MinecraftServer {
    Java(JavaServer),
    Bedrock(BedrockServer),
}

impl MinecraftServer {
    /// Returns the platform of this server.
    pub fn platform(&self) -> Platform {
        match self {
            MinecraftServer::Java(_) => Platform::Java,
            MinecraftServer::Bedrock(_) => Platform::Bedrock,
        }
    }

    /// Returns the platform independent part of this server.
    pub fn server(&self) -> &Server {
        match self {
            MinecraftServer::Java(java) => &java.server,
            MinecraftServer::Bedrock(bedrock) => &bedrock.server,
        }
    }

    /// Decodes a JSON body as the server record of the given platform.
    pub fn from_slice(platform: Platform, body: &[u8]) -> serde_json::Result<Self> {
        Ok(match platform {
            Platform::Java => MinecraftServer::Java(serde_json::from_slice(body)?),
            Platform::Bedrock => MinecraftServer::Bedrock(serde_json::from_slice(body)?),
        })
    }
}

/// The blocklist status of a hostname.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Blocked {
    pub blocked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    const JAVA: &str = r#"{
        "hostname": "aetheria.cc",
        "ip": "51.89.10.20",
        "port": 25565,
        "motd": {
            "raw": ["§bAetheria"],
            "clean": ["Aetheria"],
            "html": ["<span style=\"color: #55FFFF\">Aetheria</span>"]
        },
        "players": {"online": 12, "max": 100, "sample": [{"name": "Notch", "id": "069a79f4-44e9-4726-a5be-fca90e38aaf5"}]},
        "records": [
            {"type": "SRV", "ttl": 300, "name": "_minecraft._tcp.aetheria.cc", "target": "node.aetheria.cc", "priority": 0, "weight": 5, "port": 25565},
            {"type": "A", "ttl": 300, "name": "node.aetheria.cc", "address": "51.89.10.20"}
        ],
        "location": {"country": "France", "countryCode": "FR", "latitude": 48.85, "longitude": 2.35},
        "asn": {"asn": "AS16276", "asnOrg": "OVH SAS"},
        "version": {"name": "Velocity 1.7.2-1.21.4", "platform": "Velocity", "protocol": 769, "protocolName": "1.21.4"},
        "favicon": {"base64": "data:image/png;base64,AAAA", "url": "https://mc.fascinated.cc/api/server/icon/aetheria.cc"},
        "enforcesSecureChat": true,
        "mojangBlocked": false,
        "cached": true,
        "cachedTime": 1719849600000
    }"#;

    const BEDROCK: &str = r#"{
        "hostname": "geo.hivebedrock.network",
        "ip": "104.18.2.3",
        "port": 19132,
        "motd": {"raw": ["BEDWARS + BUILD BATTLE"], "clean": ["BEDWARS + BUILD BATTLE"], "html": ["BEDWARS + BUILD BATTLE"]},
        "players": {"online": 20000, "max": 100001},
        "records": [],
        "location": null,
        "asn": null,
        "id": "8462847658492011",
        "edition": "MCPE",
        "version": {"protocol": 712, "name": "1.21.20"},
        "gamemode": {"name": "Survival", "numericId": 1}
    }"#;

    #[test]
    fn platform_roundtrip_str() {
        assert_eq!(Platform::Java.to_string(), "java");
        assert_eq!("Bedrock".parse::<Platform>().unwrap(), Platform::Bedrock);
        assert_eq!(
            "pocket".parse::<Platform>(),
            Err(ParseError::UnknownPlatform("pocket".to_owned()))
        );
    }

    #[test]
    fn decode_java_server() {
        let server = MinecraftServer::from_slice(Platform::Java, JAVA.as_bytes()).unwrap();
        assert_eq!(server.platform(), Platform::Java);

        let MinecraftServer::Java(java) = server else {
            panic!("expected a java server");
        };
        assert_eq!(java.server.hostname, "aetheria.cc");
        assert_eq!(java.server.players.online, 12);
        assert_eq!(java.server.records.len(), 2);
        assert!(matches!(java.server.records[0], DnsRecord::Srv(_)));
        assert_eq!(java.server.asn.as_ref().unwrap().asn, "AS16276");
        assert!(java.server.cache.cached);
        assert_eq!(java.version.protocol, 769);
        assert!(java.enforces_secure_chat);
        assert!(!java.prevents_chat_reports);
        assert!(java.mod_info.is_none());
    }

    #[test]
    fn decode_bedrock_server() {
        let server = MinecraftServer::from_slice(Platform::Bedrock, BEDROCK.as_bytes()).unwrap();
        assert_eq!(server.server().port, 19132);
        assert!(server.server().location.is_none());
        assert!(server.server().players.sample.is_none());

        let MinecraftServer::Bedrock(bedrock) = server else {
            panic!("expected a bedrock server");
        };
        assert_eq!(bedrock.edition, ServerEdition::Mcpe);
        assert_eq!(bedrock.gamemode.numeric_id, 1);
        assert!(!bedrock.server.cache.cached);
    }

    #[test]
    fn platform_is_not_inferred_from_body() {
        // a java body requested as bedrock lacks the bedrock members and is rejected
        let result = MinecraftServer::from_slice(Platform::Bedrock, JAVA.as_bytes());
        assert!(result.is_err());
    }

    #[test]
    fn decode_registry_entry() {
        let entry: ServerRegistryEntry = serde_json::from_str(
            r#"{
                "serverId": "hypixel",
                "displayName": "Hypixel",
                "hostnames": ["mc.hypixel.net"],
                "wildcardHostnames": ["*.hypixel.net"],
                "platform": "JAVA"
            }"#,
        )
        .unwrap();
        assert_eq!(entry.platform, Platform::Java);
        assert_eq!(entry.background_image_url, None);
    }
}
