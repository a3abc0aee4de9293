use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::model::{Exit, Item, Room, RoomId, World};
use super::validator::{ValidationError, validate_world};
use crate::error::WorldError;

/// The manor that ships with the game: four rooms and three items.
pub const DEFAULT_WORLD: &str = include_str!("../../public/manor.toml");

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    world: WorldHeader,
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
}

#[derive(Deserialize)]
struct WorldHeader {
    name: String,
    #[serde(default)]
    desc: String,
    start_room: String,
}

#[derive(Deserialize)]
struct RoomConfig {
    name: String,
    #[serde(default)]
    desc: String,
    #[serde(default)]
    exit: Vec<ExitConfig>, // [[room.exit]]
    #[serde(default)]
    item: Vec<ItemConfig>, // [[room.item]]
}

#[derive(Deserialize)]
struct ExitConfig {
    direction: String,
    /// Name of the room this exit leads to.
    target: String,
}

#[derive(Deserialize)]
struct ItemConfig {
    name: String,
    #[serde(default)]
    desc: String,
    #[serde(default)]
    usable_in: Option<String>,
    #[serde(default)]
    use_text: Option<String>,
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Build the default manor world.
pub fn build_world() -> Result<World, WorldError> {
    load_world_from_str(DEFAULT_WORLD)
}

/// Load a world from a .toml file on disk.
pub fn load_world_from_file(path: &Path) -> Result<World, WorldError> {
    let contents = fs::read_to_string(path)?;
    let world = load_world_from_str(&contents)?;
    tracing::info!(path = %path.display(), rooms = world.rooms.len(), "world file loaded");
    Ok(world)
}

/// Load a world from TOML text, then validate it.
pub fn load_world_from_str(contents: &str) -> Result<World, WorldError> {
    let world_file: WorldFile = toml::from_str(contents)?;
    let mut problems: Vec<ValidationError> = Vec::new();

    // Rooms first, so exits can be resolved by name afterwards.
    let mut index: HashMap<String, RoomId> = HashMap::new();
    let mut rooms: Vec<Room> = Vec::with_capacity(world_file.room.len());

    for rc in &world_file.room {
        let name = rc.name.trim().to_string();
        if name.is_empty() {
            problems.push(ValidationError::new("a room has an empty name"));
            continue;
        }
        if index.contains_key(&name) {
            problems.push(ValidationError::new(format!("duplicate room name '{}'", name)));
            continue;
        }

        let mut room = Room::new(name.clone(), normalize_multiline_desc(&rc.desc));
        for ic in &rc.item {
            let mut item = Item::new(ic.name.trim(), normalize_multiline_desc(&ic.desc));
            item.usable_in = ic
                .usable_in
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from);
            item.use_text = ic.use_text.as_deref().map(normalize_multiline_desc);
            room.add_item(item);
        }

        index.insert(name, RoomId(rooms.len()));
        rooms.push(room);
    }

    for rc in &world_file.room {
        let Some(&id) = index.get(rc.name.trim()) else {
            continue;
        };
        for ec in &rc.exit {
            match index.get(ec.target.trim()) {
                Some(&target) => rooms[id.0].exits.push(Exit {
                    direction: ec.direction.trim().to_lowercase(),
                    target,
                }),
                None => problems.push(ValidationError::new(format!(
                    "room '{}' exit '{}' targets missing room '{}'",
                    rc.name, ec.direction, ec.target
                ))),
            }
        }
    }

    let start_name = world_file.world.start_room.trim();
    let start_room = match index.get(start_name) {
        Some(&id) => id,
        None => {
            problems.push(ValidationError::new(format!(
                "start_room '{}' not found among rooms",
                start_name
            )));
            RoomId(0)
        }
    };

    if !problems.is_empty() {
        return Err(WorldError::Invalid(problems));
    }

    let world = World {
        name: world_file.world.name,
        desc: normalize_multiline_desc(&world_file.world.desc),
        start_room,
        rooms,
        index,
    };

    let problems = validate_world(&world);
    if !problems.is_empty() {
        return Err(WorldError::Invalid(problems));
    }

    tracing::debug!(name = %world.name, rooms = world.rooms.len(), "world built");
    Ok(world)
}

/// Wrapped lines join with a space; a blank line becomes a newline and two
/// or more blank lines a paragraph break.
fn normalize_multiline_desc(raw: &str) -> String {
    let mut result = String::new();
    let mut pending_blank_lines = 0usize;

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            pending_blank_lines += 1;
            continue;
        }

        if !result.is_empty() {
            match pending_blank_lines {
                0 => result.push(' '),
                1 => result.push('\n'),
                _ => result.push_str("\n\n"),
            }
        }
        result.push_str(trimmed);
        pending_blank_lines = 0;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_world_has_the_manor() {
        let world = build_world().unwrap();
        let names: Vec<&str> = world.rooms.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Entrance Hall", "Library", "Armory", "Secret Room"]);
        assert_eq!(world.room(world.start_room).name, "Entrance Hall");
    }

    #[test]
    fn default_world_wires_exits() {
        let world = build_world().unwrap();
        let id = |n: &str| world.room_id(n).unwrap();

        let hall = world.room(id("Entrance Hall"));
        assert_eq!(hall.exit("north"), Some(id("Library")));
        assert_eq!(hall.exit("east"), Some(id("Armory")));

        let library = world.room(id("Library"));
        assert_eq!(library.exit("south"), Some(id("Entrance Hall")));
        assert_eq!(library.exit("east"), Some(id("Secret Room")));

        assert_eq!(world.room(id("Armory")).exit("west"), Some(id("Entrance Hall")));
        assert_eq!(world.room(id("Secret Room")).exit("west"), Some(id("Library")));
    }

    #[test]
    fn default_world_places_one_item_per_room() {
        let world = build_world().unwrap();
        let items = |n: &str| -> Vec<String> {
            world
                .room_by_name(n)
                .unwrap()
                .items
                .iter()
                .map(|i| i.name.clone())
                .collect()
        };
        assert!(items("Entrance Hall").is_empty());
        assert_eq!(items("Library"), ["Key"]);
        assert_eq!(items("Armory"), ["Sword"]);
        assert_eq!(items("Secret Room"), ["Treasure"]);

        let key = world.room_by_name("Library").unwrap().find_item("key").unwrap();
        assert_eq!(key.usable_in.as_deref(), Some("Library"));
        assert!(key.use_text.as_deref().unwrap().contains("treasure map"));
    }

    #[test]
    fn wrapped_descriptions_are_joined() {
        let world = build_world().unwrap();
        assert_eq!(
            world.room_by_name("Library").unwrap().desc,
            "A dusty room filled with old books. There is a locked chest here."
        );
        assert_eq!(normalize_multiline_desc("a\n\nb\n\n\nc"), "a\nb\n\nc");
    }

    #[test]
    fn unknown_exit_target_is_rejected() {
        let src = r#"
            [world]
            name = "Test"
            start_room = "A"

            [[room]]
            name = "A"

            [[room.exit]]
            direction = "up"
            target = "Nowhere"
        "#;
        match load_world_from_str(src) {
            Err(WorldError::Invalid(problems)) => {
                assert_eq!(problems.len(), 1);
                assert!(problems[0].message.contains("Nowhere"));
            }
            other => panic!("expected invalid world, got {other:?}"),
        }
    }

    #[test]
    fn missing_start_room_and_duplicate_rooms_are_reported_together() {
        let src = r#"
            [world]
            name = "Test"
            start_room = "B"

            [[room]]
            name = "A"

            [[room]]
            name = "A"
        "#;
        match load_world_from_str(src) {
            Err(WorldError::Invalid(problems)) => assert_eq!(problems.len(), 2),
            other => panic!("expected invalid world, got {other:?}"),
        }
    }

    #[test]
    fn world_name_is_required() {
        let src = "[world]\nstart_room = \"A\"\n\n[[room]]\nname = \"A\"\n";
        assert!(matches!(load_world_from_str(src), Err(WorldError::Parse(_))));
    }

    #[test]
    fn non_ascii_item_names_load_and_resolve() {
        let src = r#"
            [world]
            name = "Test"
            start_room = "Armory"

            [[room]]
            name = "Armory"

            [[room.item]]
            name = "Épée"
            desc = "A slim blade."
        "#;
        let world = load_world_from_str(src).unwrap();
        let armory = world.room_by_name("Armory").unwrap();
        assert!(armory.describe().ends_with("Items: Épée"));
        assert!(armory.find_item("épée").is_some());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            load_world_from_str("[world"),
            Err(WorldError::Parse(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.toml");
        fs::write(
            &path,
            "[world]\nname = \"Cell\"\nstart_room = \"Cell\"\n\n[[room]]\nname = \"Cell\"\ndesc = \"Bare stone.\"\n",
        )
        .unwrap();

        let world = load_world_from_file(&path).unwrap();
        assert_eq!(world.rooms.len(), 1);
        assert!(matches!(
            load_world_from_file(&dir.path().join("missing.toml")),
            Err(WorldError::Io(_))
        ));
    }
}
