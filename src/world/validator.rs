use std::collections::HashSet;

use super::model::World;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

/// Check the structural rules a playable world must satisfy. Returns every
/// problem found; an empty list means the world is fine.
pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    if world.rooms.is_empty() {
        errors.push(ValidationError::new("world has no rooms"));
    } else if world.start_room.0 >= world.rooms.len() {
        errors.push(ValidationError::new("start_room is out of range"));
    }

    for room in &world.rooms {
        let mut directions: HashSet<&str> = HashSet::new();
        for exit in &room.exits {
            if exit.direction.is_empty() {
                errors.push(ValidationError::new(format!(
                    "room '{}' has an exit with an empty direction",
                    room.name
                )));
            } else if exit.direction.contains(char::is_whitespace) {
                errors.push(ValidationError::new(format!(
                    "room '{}' exit '{}' must be a single word",
                    room.name, exit.direction
                )));
            } else if !directions.insert(exit.direction.as_str()) {
                errors.push(ValidationError::new(format!(
                    "room '{}' declares exit '{}' more than once",
                    room.name, exit.direction
                )));
            }

            if exit.target.0 >= world.rooms.len() {
                errors.push(ValidationError::new(format!(
                    "room '{}' exit '{}' targets a missing room",
                    room.name, exit.direction
                )));
            }
        }

        // Lookup is by lower-cased name, so two items may not share one.
        let mut names: HashSet<String> = HashSet::new();
        for item in &room.items {
            if item.name.is_empty() {
                errors.push(ValidationError::new(format!(
                    "room '{}' has an item with an empty name",
                    room.name
                )));
                continue;
            }
            // Commands take one word per argument.
            if item.name.contains(char::is_whitespace) {
                errors.push(ValidationError::new(format!(
                    "room '{}' item '{}' must be a single word",
                    room.name, item.name
                )));
            }
            if !names.insert(item.name.to_lowercase()) {
                errors.push(ValidationError::new(format!(
                    "room '{}' holds more than one item named '{}'",
                    room.name, item.name
                )));
            }
            if let Some(target) = &item.usable_in {
                if world.room_id(target).is_none() {
                    errors.push(ValidationError::new(format!(
                        "item '{}' is usable in missing room '{}'",
                        item.name, target
                    )));
                }
            }
        }
    }

    errors
}
