use crate::error::{GameError, GameResult};
use crate::world::{Item, RoomId, World};

/// Per-session player state. `current` points into the world's rooms; the
/// inventory owns whatever has been picked up.
#[derive(Debug, Clone)]
pub struct Player {
    pub current: RoomId,
    pub inventory: Vec<Item>,
}

impl Player {
    pub fn new(start: RoomId) -> Self {
        Player {
            current: start,
            inventory: Vec::new(),
        }
    }

    pub fn move_to(&mut self, world: &World, direction: &str) -> GameResult<String> {
        let room = world.room(self.current);
        let target = room
            .exit(direction)
            .ok_or_else(|| GameError::InvalidDirection {
                direction: direction.to_string(),
            })?;

        tracing::debug!(from = %room.name, to = %world.room(target).name, "player moved");
        self.current = target;
        Ok(format!(
            "You move {} to the {}.",
            direction,
            world.room(target).name
        ))
    }

    /// Move an item from the current room into the inventory.
    pub fn take_item(&mut self, world: &mut World, name: &str) -> GameResult<String> {
        let item = world.room_mut(self.current).remove_item(name)?;
        tracing::debug!(item = %item.name, "item taken");
        self.inventory.push(item);
        Ok(format!("You picked up the {}.", name))
    }

    /// Use a carried item. Items tied to a room only work there; the
    /// item's `use_text` is added when it is used in that room.
    pub fn use_item(&self, world: &World, name: &str) -> GameResult<String> {
        let item = self.held(name).ok_or_else(|| GameError::ItemNotHeld {
            item: name.to_string(),
        })?;

        let Some(usable_in) = item.usable_in.as_deref() else {
            return Ok(format!("You used the {}.", name));
        };

        let room = world.room(self.current);
        if room.name != usable_in {
            return Err(GameError::WrongLocation {
                item: name.to_string(),
            });
        }

        tracing::debug!(item = %item.name, room = %room.name, "item used in place");
        let mut text = format!("You used the {} in the {}.", name, room.name);
        if let Some(bonus) = &item.use_text {
            text.push('\n');
            text.push_str(bonus);
        }
        Ok(text)
    }

    pub fn show_inventory(&self) -> String {
        if self.inventory.is_empty() {
            return "Your inventory is empty.".to_string();
        }
        let names = self
            .inventory
            .iter()
            .map(|i| i.name.as_str())
            .collect::<Vec<&str>>()
            .join(", ");
        format!("Inventory: {}", names)
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.held(name).is_some()
    }

    fn held(&self, name: &str) -> Option<&Item> {
        self.inventory.iter().find(|i| i.is_named(name))
    }
}
