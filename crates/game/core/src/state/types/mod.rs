mod common;
mod effects;
mod object;
mod world;

pub use common::{ObjectId, Position, Tick};
pub use effects::Effects;
pub use object::{GameObject, ObjectKind};
pub use world::{GameState, World};
