mod lenient;

pub mod comparison;
pub mod creature;
pub mod error;
pub mod explorer;
pub mod generation;
pub mod region;
pub mod render;
pub mod status;
pub mod typing;

pub use comparison::Comparison;
pub use creature::Creature;
pub use error::Error;
pub use explorer::Explorer;
pub use generation::Generation;
pub use region::Region;
pub use status::Status;
pub use typing::Type;
