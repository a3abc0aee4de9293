mod loader;
mod model;
mod validator;

pub use loader::{DEFAULT_WORLD, build_world, load_world_from_file, load_world_from_str};

pub use model::{Exit, Item, Room, RoomId, World};
pub use validator::{ValidationError, validate_world};
