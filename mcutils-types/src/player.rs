use crate::Cache;
use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// The rendered images of a texture, keyed by part name (e.g. `HEAD` or `FULLBODY_FRONT`).
///
/// The set of parts grows with the API, so the keys are kept as plain strings.
pub type TextureParts = BTreeMap<String, String>;

/// The arm model of a skin.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum SkinModel {
    /// The classic model with four pixel wide arms ("Steve").
    #[default]
    Default,
    /// The slim model with three pixel wide arms ("Alex").
    Slim,
}

/// The image format of a rendered skin.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Png,
    Jpg,
}

impl ImageFormat {
    /// Returns the file extension of this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpg => "jpg",
        }
    }
}

impl Display for ImageFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ImageFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpg),
            _ => Err(ParseError::UnknownImageFormat(s.to_owned())),
        }
    }
}

/// A skin of a player.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Skin {
    /// The texture hash of the skin on Mojang's texture server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture_id: Option<String>,
    #[serde(default)]
    pub model: SkinModel,
    /// Whether the skin uses the legacy 64x32 layout.
    #[serde(default)]
    pub legacy: bool,
    pub texture_url: String,
    #[serde(default)]
    pub parts: TextureParts,
}

/// A cape that is (or was) equipped by a player.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Cape {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture_id: Option<String>,
    pub texture_url: String,
    #[serde(default)]
    pub parts: TextureParts,
}

/// Represents a single property of a Minecraft user profile.
///
/// The most prominent property is called `textures`, the base64 encoded description of the skin
/// and cape. Properties are signed by Mojang, the signature is only present if the service
/// requested a signed profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileProperty {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

/// A Minecraft player with the current and historical appearance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub unique_id: Uuid,
    pub username: String,
    /// Whether the account was never migrated to a Mojang/Microsoft account.
    #[serde(default)]
    pub legacy_account: bool,
    pub skin: Skin,
    /// The currently equipped cape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cape: Option<Cape>,
    /// All capes the player has owned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capes: Option<Vec<Cape>>,
    /// All skins the player has been seen with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skins: Option<Vec<Skin>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_properties: Option<Vec<ProfileProperty>>,
    #[serde(flatten)]
    pub cache: Cache,
}

/// The pair of username and unique id, as returned when resolving one from the other.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerName {
    pub username: String,
    pub unique_id: Uuid,
    #[serde(flatten)]
    pub cache: Cache,
}

/// An entry of the cape catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CapeData {
    /// The display name of the cape (e.g. `Migrator`).
    pub name: String,
    pub texture_id: String,
    pub texture_url: String,
    #[serde(default)]
    pub parts: TextureParts,
}
