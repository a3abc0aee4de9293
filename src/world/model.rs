use std::collections::HashMap;

use crate::error::{GameError, GameResult};

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Index of a room inside `World::rooms`. Stable for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(pub usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub desc: String,
    /// Name of the only room this item works in, if any.
    pub usable_in: Option<String>,
    /// Extra line shown when the item is used in `usable_in`.
    pub use_text: Option<String>,
}

impl Item {
    pub fn new(name: impl Into<String>, desc: impl Into<String>) -> Self {
        Item {
            name: name.into(),
            desc: desc.into(),
            usable_in: None,
            use_text: None,
        }
    }

    pub fn usable_in(mut self, room: impl Into<String>) -> Self {
        self.usable_in = Some(room.into());
        self
    }

    pub fn with_use_text(mut self, text: impl Into<String>) -> Self {
        self.use_text = Some(text.into());
        self
    }

    /// Items are identified by name, ignoring case. Folds the same way the
    /// command parser does, so non-ASCII names stay reachable.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }
}

#[derive(Debug, Clone)]
pub struct Exit {
    pub direction: String,
    pub target: RoomId,
}

#[derive(Debug, Clone)]
pub struct Room {
    pub name: String,
    pub desc: String,
    pub exits: Vec<Exit>,
    pub items: Vec<Item>,
}

impl Room {
    pub fn new(name: impl Into<String>, desc: impl Into<String>) -> Self {
        Room {
            name: name.into(),
            desc: desc.into(),
            exits: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Take an item out of the room. Fails with `ItemNotHere` when absent.
    pub fn remove_item(&mut self, name: &str) -> GameResult<Item> {
        let pos = self
            .items
            .iter()
            .position(|i| i.is_named(name))
            .ok_or_else(|| GameError::ItemNotHere {
                item: name.to_string(),
            })?;
        Ok(self.items.remove(pos))
    }

    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.is_named(name))
    }

    pub fn exit(&self, direction: &str) -> Option<RoomId> {
        self.exits
            .iter()
            .find(|e| e.direction == direction)
            .map(|e| e.target)
    }

    /// Name, description, exits and (when present) items, one per line.
    pub fn describe(&self) -> String {
        crate::engine::render_room(self)
    }

    /// Exit directions in the order they were declared.
    pub fn exit_directions(&self) -> impl Iterator<Item = &str> {
        self.exits.iter().map(|e| e.direction.as_str())
    }
}

/// Runtime world: owns every room for the lifetime of a session.
#[derive(Debug, Clone)]
pub struct World {
    pub name: String,
    pub desc: String,
    pub start_room: RoomId,
    pub rooms: Vec<Room>,
    pub(crate) index: HashMap<String, RoomId>,
}

impl World {
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    pub fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.0]
    }

    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.index.get(name).copied()
    }

    pub fn room_by_name(&self, name: &str) -> Option<&Room> {
        self.room_id(name).map(|id| self.room(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> Room {
        let mut room = Room::new("Library", "Books.");
        room.add_item(Item::new("Key", "A small rusty key.").usable_in("Library"));
        room
    }

    #[test]
    fn find_item_ignores_case() {
        let room = library();
        assert_eq!(room.find_item("key").map(|i| i.name.as_str()), Some("Key"));
        assert_eq!(room.find_item("KEY").map(|i| i.name.as_str()), Some("Key"));
        assert!(room.find_item("sword").is_none());
    }

    #[test]
    fn find_item_folds_non_ascii_case() {
        let mut room = Room::new("Armory", "");
        room.add_item(Item::new("Épée", "A slim blade."));
        assert_eq!(room.find_item("épée").map(|i| i.name.as_str()), Some("Épée"));
        assert_eq!(room.find_item("ÉPÉE").map(|i| i.name.as_str()), Some("Épée"));
    }

    #[test]
    fn remove_item_moves_it_out() {
        let mut room = library();
        let key = room.remove_item("key").unwrap();
        assert_eq!(key.usable_in.as_deref(), Some("Library"));
        assert!(room.items.is_empty());
    }

    #[test]
    fn remove_missing_item_is_not_here() {
        let mut room = library();
        let err = room.remove_item("sword").unwrap_err();
        assert_eq!(
            err,
            GameError::ItemNotHere {
                item: "sword".into()
            }
        );
        assert_eq!(room.items.len(), 1);
    }

    #[test]
    fn exits_keep_declaration_order() {
        let mut room = Room::new("Hall", "");
        room.exits.push(Exit {
            direction: "north".into(),
            target: RoomId(1),
        });
        room.exits.push(Exit {
            direction: "east".into(),
            target: RoomId(2),
        });
        assert_eq!(room.exit_directions().collect::<Vec<_>>(), ["north", "east"]);
        assert_eq!(room.exit("east"), Some(RoomId(2)));
        assert_eq!(room.exit("west"), None);
    }
}
