pub mod session;

pub use dexbase_core as core;

pub use crate::core::{
    comparison, creature, error, explorer, generation, region, render, status, typing,
};
pub use crate::core::{
    Comparison, Creature, Error, Explorer, Generation, Region, Status, Type,
};
pub use session::Session;
