mod command;
mod output;
mod player;
mod render;

pub use command::{Command, HELP_TEXT, handle_command, parse_command};
pub use output::{Notice, Outcome, Reply, ReplyKind, Turn};
pub use player::Player;
pub use render::render_room;
