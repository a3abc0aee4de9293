use crate::world;

/// Render a room for display:
///
/// ```text
/// <name>
/// <description>
/// Exits: <dir>, <dir>
/// Items: <item>, <item>
/// ```
///
/// The `Items:` line is only present when the room holds something.
pub fn render_room(room: &world::Room) -> String {
    let exits = room.exit_directions().collect::<Vec<&str>>().join(", ");
    let mut out = format!("{}\n{}\nExits: {}", room.name, room.desc, exits);

    if !room.items.is_empty() {
        let items = room
            .items
            .iter()
            .map(|i| i.name.as_str())
            .collect::<Vec<&str>>()
            .join(", ");
        out.push_str("\nItems: ");
        out.push_str(&items);
    }

    out
}

#[cfg(test)]
mod tests {
    use crate::world::build_world;

    #[test]
    fn hall_has_no_items_line() {
        let world = build_world().unwrap();
        assert_eq!(
            world.room_by_name("Entrance Hall").unwrap().describe(),
            "Entrance Hall\nA large hall with doors to the north and east.\nExits: north, east"
        );
    }

    #[test]
    fn library_lists_exits_and_items() {
        let world = build_world().unwrap();
        assert_eq!(
            world.room_by_name("Library").unwrap().describe(),
            "Library\n\
             A dusty room filled with old books. There is a locked chest here.\n\
             Exits: south, east\n\
             Items: Key"
        );
    }
}
