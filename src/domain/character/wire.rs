//! Wire types for character responses.

use serde::{Deserialize, Serialize};

use crate::domain::DataWrapper;

/// Response shape for character listings.
pub type CharacterDataWrapper = DataWrapper<Character>;

/// One character as the gateway sends it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Last-modified stamp, kept verbatim — the gateway emits placeholder
    /// dates (year -0001) for some records, which no datetime type accepts.
    #[serde(default)]
    pub modified: Option<String>,
    #[serde(default, rename = "resourceURI")]
    pub resource_uri: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<Image>,
}

/// Path + extension pair the gateway uses for every image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub path: String,
    pub extension: String,
}

impl Image {
    /// Full-size variant URL.
    pub fn url(&self) -> String {
        format!("{}.{}", self.path, self.extension)
    }
}
