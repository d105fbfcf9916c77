use crate::creature;

use serde::{Deserialize, Serialize};
use std::fmt;

/// The elemental types that can be browsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Normal,
    Fire,
    Water,
    Grass,
    Electric,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl Type {
    pub const ALL: &'static [Self] = &[
        Self::Normal,
        Self::Fire,
        Self::Water,
        Self::Grass,
        Self::Electric,
        Self::Ice,
        Self::Fighting,
        Self::Poison,
        Self::Ground,
        Self::Flying,
        Self::Psychic,
        Self::Bug,
        Self::Rock,
        Self::Ghost,
        Self::Dragon,
        Self::Dark,
        Self::Steel,
        Self::Fairy,
    ];

    /// The path segment the API expects.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Fire => "fire",
            Self::Water => "water",
            Self::Grass => "grass",
            Self::Electric => "electric",
            Self::Ice => "ice",
            Self::Fighting => "fighting",
            Self::Poison => "poison",
            Self::Ground => "ground",
            Self::Flying => "flying",
            Self::Psychic => "psychic",
            Self::Bug => "bug",
            Self::Rock => "rock",
            Self::Ghost => "ghost",
            Self::Dragon => "dragon",
            Self::Dark => "dark",
            Self::Steel => "steel",
            Self::Fairy => "fairy",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Normal => "Normal",
            Self::Fire => "Fuego",
            Self::Water => "Agua",
            Self::Grass => "Planta",
            Self::Electric => "Eléctrico",
            Self::Ice => "Hielo",
            Self::Fighting => "Lucha",
            Self::Poison => "Veneno",
            Self::Ground => "Tierra",
            Self::Flying => "Volador",
            Self::Psychic => "Psíquico",
            Self::Bug => "Bicho",
            Self::Rock => "Roca",
            Self::Ghost => "Fantasma",
            Self::Dragon => "Dragón",
            Self::Dark => "Siniestro",
            Self::Steel => "Acero",
            Self::Fairy => "Hada",
        })
    }
}

/// The creatures sharing one elemental type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Listing {
    #[serde(rename = "type", default)]
    pub name: String,
    /// `None` when the API answered with something other than a list.
    #[serde(default, deserialize_with = "crate::lenient::deserialize")]
    pub pokemon: Option<Vec<creature::Summary>>,
}
