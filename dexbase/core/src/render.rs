//! Pure functions turning API payloads into the view models the panels show.
//!
//! Nothing here knows about widgets. A view model is replaced wholesale every
//! time its payload changes, so stale tags or rows can never survive a render.
use crate::comparison::{Comparison, Contender};
use crate::creature::{self, Creature};
use crate::region::{self, Key};
use crate::Error;

pub const DREAM_BALL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/items/dream-ball.png";

pub const POKE_BALL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/items/poke-ball.png";

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: creature::Id,
    pub name: String,
    pub label: String,
    pub description: String,
    pub height: String,
    pub weight: String,
    pub image: String,
    pub alt: String,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub stats: Vec<String>,
}

pub fn card(creature: &Creature) -> Card {
    Card {
        id: creature.id,
        name: creature.name.clone(),
        label: creature.id.label(),
        description: creature.description.clone(),
        height: format!("{} m", creature.height_m),
        weight: format!("{} kg", creature.weight_kg),
        image: creature.image().unwrap_or(DREAM_BALL).to_owned(),
        alt: format!("Ilustración de {}", creature.name),
        types: creature.types.clone(),
        abilities: creature.abilities.clone(),
        stats: stat_rows(&creature.stats),
    }
}

fn stat_rows<'a>(stats: impl IntoIterator<Item = &'a creature::Stat>) -> Vec<String> {
    stats
        .into_iter()
        .map(|stat| format!("{}: {}", stat.name, stat.value))
        .collect()
}

/// An actionable entry that looks a creature up when chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: creature::Id,
    pub label: String,
}

impl From<&creature::Summary> for Entry {
    fn from(summary: &creature::Summary) -> Self {
        Self {
            id: summary.id,
            label: format!("{} {}", summary.id.label(), summary.name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Listing {
    #[default]
    Idle,
    Loading,
    Empty,
    Entries(Vec<Entry>),
    Failed(String),
}

impl Listing {
    pub const LOADING: &'static str = "Cargando lista...";
    pub const EMPTY: &'static str = "No hay Pokémon para mostrar.";

    pub fn failed(error: &Error) -> Self {
        Self::Failed(error.to_string())
    }
}

/// Renders a type listing. An absent or empty list yields [`Listing::Empty`].
pub fn listing(pokemon: Option<&[creature::Summary]>) -> Listing {
    match pokemon {
        Some(pokemon) if !pokemon.is_empty() => {
            Listing::Entries(pokemon.iter().map(Entry::from).collect())
        }
        _ => Listing::Empty,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Versus {
    pub cards: [MiniCard; 2],
    pub verdict: String,
    pub summary: String,
    pub difference: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MiniCard {
    pub image: String,
    pub alt: String,
    pub name: String,
    pub total: String,
    pub stats: Vec<String>,
    pub is_winner: bool,
}

pub fn versus(comparison: &Comparison) -> Result<Versus, Error> {
    let (first, second) = comparison.contenders()?;

    let verdict = if comparison.is_tie {
        "¡Empate de poder!".to_owned()
    } else {
        format!(
            "Ganador: {}",
            comparison.winner.as_deref().unwrap_or_default()
        )
    };

    Ok(Versus {
        cards: [
            mini_card(first, comparison),
            mini_card(second, comparison),
        ],
        verdict,
        summary: comparison.message.clone(),
        difference: comparison
            .difference
            .map(|difference| format!("Diferencia: {difference} puntos")),
    })
}

fn mini_card(contender: &Contender, comparison: &Comparison) -> MiniCard {
    let creature = &contender.creature;

    MiniCard {
        image: creature.image().unwrap_or(POKE_BALL).to_owned(),
        alt: format!("Retrato de {}", creature.name),
        name: if creature.name.is_empty() {
            "Desconocido".to_owned()
        } else {
            creature.name.clone()
        },
        total: contender.total_stats.to_string(),
        stats: stat_rows(creature.stats.iter().take(3)),
        is_winner: comparison.is_winner(contender),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub key: Key,
    pub name: String,
    pub description: String,
    pub backdrop: Option<Backdrop>,
    pub portraits: Vec<Portrait>,
    pub inhabitants: Vec<Entry>,
}

/// A map image with the overlay drawn on top of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Backdrop {
    pub overlay: Gradient,
    pub map_image: String,
}

/// A two-stop linear gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub degrees: f32,
    pub from: Rgba,
    pub to: Rgba,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

pub const OVERLAY: Gradient = Gradient {
    degrees: 135.0,
    from: Rgba {
        r: 85,
        g: 214,
        b: 255,
        a: 0.35,
    },
    to: Rgba {
        r: 255,
        g: 205,
        b: 0,
        a: 0.25,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portrait {
    pub id: creature::Id,
    pub url: String,
}

/// Renders a region detail. Fails if the payload carries no region.
pub fn region(detail: &region::Detail) -> Result<Region, Error> {
    let Some(region) = &detail.region else {
        return Err(Error::malformed(MALFORMED_REGION));
    };

    Ok(Region {
        key: region.key.clone(),
        name: region.name.clone(),
        description: region.description.clone(),
        backdrop: region.map_image().map(|map_image| Backdrop {
            overlay: OVERLAY,
            map_image: map_image.to_owned(),
        }),
        portraits: region
            .featured
            .iter()
            .map(|&id| Portrait {
                id,
                url: region::portrait_url(id),
            })
            .collect(),
        inhabitants: detail
            .pokemon
            .iter()
            .flatten()
            .map(Entry::from)
            .collect(),
    })
}

pub const MALFORMED_REGION: &str = "Respuesta inesperada al explorar la región.";

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    fn pikachu() -> Creature {
        serde_json::from_value(serde_json::json!({
            "id": 25,
            "name": "Pikachu",
            "description": "Ratón eléctrico.",
            "height_m": 0.4,
            "weight_kg": 6.0,
            "image_url": "https://img/25.png",
            "types": ["Electric"],
            "abilities": ["Static", "Lightning Rod"],
            "stats": [
                {"name": "Hp", "value": 35},
                {"name": "Attack", "value": 55},
                {"name": "Defense", "value": 40},
                {"name": "Speed", "value": 90},
            ],
        }))
        .expect("Decode creature")
    }

    #[test]
    fn card_formats_every_field() {
        let card = card(&pikachu());

        assert_eq!(card.label, "#025");
        assert_eq!(card.height, "0.4 m");
        assert_eq!(card.weight, "6 kg");
        assert_eq!(card.image, "https://img/25.png");
        assert_eq!(card.alt, "Ilustración de Pikachu");
        assert_eq!(card.types, vec!["Electric"]);
        assert_eq!(card.abilities, vec!["Static", "Lightning Rod"]);
        assert_eq!(
            card.stats,
            vec!["Hp: 35", "Attack: 55", "Defense: 40", "Speed: 90"]
        );
    }

    #[test]
    fn card_survives_missing_optional_fields() {
        let creature: Creature =
            serde_json::from_str(r#"{"id": 7, "name": "Squirtle"}"#).expect("Decode creature");

        let card = card(&creature);

        assert_eq!(card.label, "#007");
        assert_eq!(card.image, DREAM_BALL);
        assert!(card.types.is_empty());
        assert!(card.abilities.is_empty());
        assert!(card.stats.is_empty());
    }

    #[test]
    fn empty_or_missing_listing_renders_placeholder() {
        assert_eq!(listing(Some(&[])), Listing::Empty);
        assert_eq!(listing(None), Listing::Empty);
    }

    #[test]
    fn listing_renders_one_entry_per_creature() {
        let pokemon = [
            creature::Summary {
                id: creature::Id(4),
                name: "Charmander".to_owned(),
            },
            creature::Summary {
                id: creature::Id(37),
                name: "Vulpix".to_owned(),
            },
        ];

        assert_eq!(
            listing(Some(&pokemon)),
            Listing::Entries(vec![
                Entry {
                    id: creature::Id(4),
                    label: "#004 Charmander".to_owned(),
                },
                Entry {
                    id: creature::Id(37),
                    label: "#037 Vulpix".to_owned(),
                },
            ])
        );
    }

    fn comparison(is_tie: bool) -> Comparison {
        let mut first = serde_json::to_value(pikachu()).expect("Encode creature");
        first["total_stats"] = serde_json::json!(220);

        let winner = if is_tie { None } else { Some("Pikachu") };

        serde_json::from_value(serde_json::json!({
            "pokemon": [
                first,
                {"id": 133, "name": "", "total_stats": 180},
            ],
            "winner": winner,
            "is_tie": is_tie,
            "message": "¡Pikachu gana!",
            "difference": 40,
        }))
        .expect("Decode comparison")
    }

    #[test]
    fn versus_marks_the_winner_only() {
        let versus = versus(&comparison(false)).expect("Render versus");

        assert_eq!(versus.verdict, "Ganador: Pikachu");
        assert_eq!(versus.summary, "¡Pikachu gana!");
        assert_eq!(versus.difference.as_deref(), Some("Diferencia: 40 puntos"));
        assert!(versus.cards[0].is_winner);
        assert!(!versus.cards[1].is_winner);
    }

    #[test]
    fn versus_tie_marks_nobody() {
        let versus = versus(&comparison(true)).expect("Render versus");

        assert_eq!(versus.verdict, "¡Empate de poder!");
        assert!(versus.cards.iter().all(|card| !card.is_winner));
    }

    #[test]
    fn mini_cards_show_three_stats_and_fallbacks() {
        let versus = versus(&comparison(false)).expect("Render versus");
        let [first, second] = &versus.cards;

        assert_eq!(first.stats, vec!["Hp: 35", "Attack: 55", "Defense: 40"]);
        assert_eq!(first.total, "220");
        assert_eq!(second.name, "Desconocido");
        assert_eq!(second.image, POKE_BALL);
        assert!(second.stats.is_empty());
    }

    #[test]
    fn region_renders_backdrop_portraits_and_inhabitants() {
        let detail: region::Detail = serde_json::from_value(serde_json::json!({
            "region": {
                "key": "kanto",
                "name": "Kanto",
                "description": "La región clásica.",
                "map_image": "https://maps/kanto.png",
                "featured": [25, 1],
            },
            "pokemon": [{"id": 1, "name": "Bulbasaur"}],
        }))
        .expect("Decode detail");

        let region = region(&detail).expect("Render region");

        assert_eq!(region.key.as_str(), "kanto");
        assert_eq!(
            region.backdrop,
            Some(Backdrop {
                overlay: OVERLAY,
                map_image: "https://maps/kanto.png".to_owned(),
            })
        );
        assert_eq!(
            region
                .portraits
                .iter()
                .map(|portrait| portrait.id)
                .collect::<Vec<_>>(),
            vec![creature::Id(25), creature::Id(1)]
        );
        assert_eq!(region.inhabitants[0].label, "#001 Bulbasaur");
    }

    #[test]
    fn region_without_map_has_no_backdrop() {
        let detail: region::Detail = serde_json::from_str(
            r#"{"region": {"key": "johto", "map_image": "  "}}"#,
        )
        .expect("Decode detail");

        let region = region(&detail).expect("Render region");

        assert_eq!(region.backdrop, None);
        assert!(region.inhabitants.is_empty());
    }

    #[test]
    fn region_payload_without_region_is_malformed() {
        assert!(matches!(
            region(&region::Detail::default()),
            Err(Error::Malformed { .. })
        ));
    }
}
