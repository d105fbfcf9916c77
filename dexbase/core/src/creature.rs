use crate::Error;

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Creature {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub height_m: f64,
    pub weight_kg: f64,
    pub image_url: Option<String>,
    #[serde(deserialize_with = "crate::lenient::or_default")]
    pub types: Vec<String>,
    #[serde(deserialize_with = "crate::lenient::or_default")]
    pub abilities: Vec<String>,
    #[serde(deserialize_with = "crate::lenient::or_default")]
    pub stats: Vec<Stat>,
}

impl Creature {
    /// The image URL, if the API provided a usable one.
    pub fn image(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(pub u32);

impl Id {
    /// `#` followed by the id zero-padded to 3 digits.
    pub fn label(self) -> String {
        format!("#{:03}", self.0)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Stat {
    pub name: String,
    pub value: u32,
}

/// A creature as listed by a type or a region: just enough to look it up.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Summary {
    pub id: Id,
    pub name: String,
}

/// What the user typed in a lookup field, trimmed and known to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub const EMPTY: &'static str = "Necesitamos que escribas algo antes de buscar.";

    pub fn parse(input: &str) -> Result<Self, Error> {
        let query = input.trim();

        if query.is_empty() {
            return Err(Error::Validation(Self::EMPTY));
        }

        Ok(Self(query.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Id> for Query {
    fn from(id: Id) -> Self {
        Self(id.to_string())
    }
}
