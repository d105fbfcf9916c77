use crate::creature::{self, Creature};
use crate::Error;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Comparison {
    /// `None` when the API answered with something other than a list.
    #[serde(deserialize_with = "crate::lenient::deserialize")]
    pub pokemon: Option<Vec<Contender>>,
    pub winner: Option<String>,
    pub is_tie: bool,
    pub message: String,
    pub difference: Option<u32>,
}

impl Comparison {
    pub const MALFORMED: &'static str = "Respuesta inesperada de la comparación.";

    /// The two contenders, in the order they were requested.
    pub fn contenders(&self) -> Result<(&Contender, &Contender), Error> {
        match self.pokemon.as_deref() {
            Some([first, second, ..]) => Ok((first, second)),
            _ => Err(Error::malformed(Self::MALFORMED)),
        }
    }

    /// Whether the contender takes the win. Never true on a tie.
    pub fn is_winner(&self, contender: &Contender) -> bool {
        !self.is_tie
            && self
                .winner
                .as_deref()
                .is_some_and(|winner| winner == contender.creature.name)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Contender {
    #[serde(flatten)]
    pub creature: Creature,
    #[serde(default)]
    pub total_stats: u32,
}

/// Two lookups to pit against each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matchup {
    pub first: creature::Query,
    pub second: creature::Query,
}

impl Matchup {
    pub const INCOMPLETE: &'static str =
        "Necesitamos dos Pokémon para comparar. / We need two Pokémon to compare.";

    pub fn parse(first: &str, second: &str) -> Result<Self, Error> {
        let incomplete = |_| Error::Validation(Self::INCOMPLETE);

        Ok(Self {
            first: creature::Query::parse(first).map_err(incomplete)?,
            second: creature::Query::parse(second).map_err(incomplete)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    fn comparison(winner: Option<&str>, is_tie: bool) -> Comparison {
        serde_json::from_value(serde_json::json!({
            "pokemon": [
                {"id": 25, "name": "Pikachu", "total_stats": 320},
                {"id": 133, "name": "Eevee", "total_stats": 325},
            ],
            "winner": winner,
            "is_tie": is_tie,
            "message": "",
        }))
        .expect("Decode comparison")
    }

    #[test]
    fn only_the_named_winner_is_marked() {
        let comparison = comparison(Some("Pikachu"), false);
        let (first, second) = comparison.contenders().expect("Two contenders");

        assert!(comparison.is_winner(first));
        assert!(!comparison.is_winner(second));
    }

    #[test]
    fn nobody_wins_a_tie() {
        let comparison = comparison(Some("Pikachu"), true);
        let (first, second) = comparison.contenders().expect("Two contenders");

        assert!(!comparison.is_winner(first));
        assert!(!comparison.is_winner(second));
    }

    #[test]
    fn contenders_flatten_the_creature() {
        let comparison = comparison(None, true);
        let (first, _) = comparison.contenders().expect("Two contenders");

        assert_eq!(first.creature.id, creature::Id(25));
        assert_eq!(first.total_stats, 320);
    }

    #[test]
    fn missing_or_scalar_pokemon_is_malformed() {
        for payload in [
            serde_json::json!({"winner": "Pikachu"}),
            serde_json::json!({"pokemon": 42}),
            serde_json::json!({"pokemon": [{"id": 1, "name": "Bulbasaur"}]}),
        ] {
            let comparison: Comparison =
                serde_json::from_value(payload).expect("Decode comparison");

            assert!(matches!(
                comparison.contenders(),
                Err(Error::Malformed { .. })
            ));
        }
    }

    #[test]
    fn matchup_requires_both_sides() {
        for (first, second) in [("", "pikachu"), ("pikachu", "  "), ("", "")] {
            assert!(matches!(
                Matchup::parse(first, second),
                Err(Error::Validation(Matchup::INCOMPLETE))
            ));
        }

        let matchup = Matchup::parse(" pikachu", "25 ").expect("Valid matchup");
        assert_eq!(matchup.first.as_str(), "pikachu");
        assert_eq!(matchup.second.as_str(), "25");
    }
}
