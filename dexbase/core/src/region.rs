use crate::creature;

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Region {
    pub key: Key,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub map_image: Option<String>,
    #[serde(default)]
    pub featured: Vec<creature::Id>,
    #[serde(default)]
    pub pokedex: Option<String>,
}

impl Region {
    pub fn map_image(&self) -> Option<&str> {
        self.map_image
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(String);

impl Key {
    pub fn parse(key: &str) -> Option<Self> {
        if key.is_empty() {
            return None;
        }

        Some(Self(key.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An entry of the region selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub key: Key,
    pub name: String,
}

impl From<&Region> for Choice {
    fn from(region: &Region) -> Self {
        Self {
            key: region.key.clone(),
            name: region.name.clone(),
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            self.key.fmt(f)
        } else {
            f.write_str(&self.name)
        }
    }
}

/// The payload of the region catalogue endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalogue {
    #[serde(default, deserialize_with = "crate::lenient::deserialize")]
    pub regions: Option<Vec<Region>>,
}

/// The payload of the region detail endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Detail {
    #[serde(default, deserialize_with = "crate::lenient::deserialize")]
    pub region: Option<Region>,
    #[serde(default, deserialize_with = "crate::lenient::deserialize")]
    pub pokemon: Option<Vec<creature::Summary>>,
}

pub fn portrait_url(id: creature::Id) -> String {
    format!("https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/{id}.png")
}
