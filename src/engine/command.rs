use crate::engine::output::{Outcome, Reply, ReplyKind};
use crate::engine::player::Player;
use crate::error::{GameError, GameResult};
use crate::world::World;

pub const HELP_TEXT: &str = "\
Commands:
  move [direction] - Move to a room in the specified direction (north, south, east, west).
  take [item] - Pick up an item in the current room.
  use [item] - Use an item from your inventory.
  inventory - Show your current inventory.
  help - Show this list.
  quit - Exit the game.";

/// A parsed player command. Arguments are already lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move { direction: String },
    Take { item: String },
    Use { item: String },
    Inventory,
    Help,
    Quit,
    /// Blank input.
    Nothing,
}

/// Split a line into a verb plus arguments and check the argument count.
pub fn parse_command(input: &str) -> GameResult<Command> {
    let lower = input.trim().to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();

    let command = match words.as_slice() {
        [] => Command::Nothing,
        ["move", direction] => Command::Move {
            direction: direction.to_string(),
        },
        ["take", item] => Command::Take {
            item: item.to_string(),
        },
        ["use", item] => Command::Use {
            item: item.to_string(),
        },
        ["inventory"] => Command::Inventory,
        ["help"] => Command::Help,
        ["quit"] => Command::Quit,
        _ => {
            return Err(GameError::InvalidCommand {
                input: input.trim().to_string(),
            });
        }
    };

    Ok(command)
}

/// Run one line of player input against the world. Performs no I/O; the
/// caller shows the returned text.
pub fn handle_command(world: &mut World, player: &mut Player, input: &str) -> Outcome {
    let command = parse_command(input).inspect_err(|_| {
        tracing::debug!(input, "unrecognized command");
    })?;
    tracing::debug!(?command, "handling command");

    let reply = match command {
        Command::Move { direction } => {
            Reply::new(ReplyKind::Moved, player.move_to(world, &direction)?)
        }
        Command::Take { item } => Reply::new(ReplyKind::Taken, player.take_item(world, &item)?),
        Command::Use { item } => Reply::new(ReplyKind::Used, player.use_item(world, &item)?),
        Command::Inventory => Reply::new(ReplyKind::Inventory, player.show_inventory()),
        Command::Help => Reply::new(ReplyKind::Help, HELP_TEXT),
        Command::Quit => Reply::new(ReplyKind::Quit, "Thank you for playing!"),
        Command::Nothing => Reply::new(ReplyKind::Idle, ""),
    };

    Ok(reply)
}
