pub mod compare;
pub mod lookup;
pub mod regions;
pub mod types;

pub use compare::Compare;
pub use lookup::Lookup;
pub use regions::Regions;
pub use types::Types;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Pokedex,
    Types,
    Compare,
    Regions,
}

impl Tab {
    pub const ALL: &'static [Self] = &[Self::Pokedex, Self::Types, Self::Compare, Self::Regions];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Pokedex => "Pokédex",
            Tab::Types => "Tipos",
            Tab::Compare => "Combate",
            Tab::Regions => "Regiones",
        }
    }
}
