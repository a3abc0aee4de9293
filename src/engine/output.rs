use serde::Serialize;

use crate::engine::player::Player;
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    Moved,
    Taken,
    Used,
    Inventory,
    Help,
    Quit,
    /// Blank input; nothing to show.
    Idle,
}

/// A successful command result. The caller decides how to show `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub kind: ReplyKind,
    pub text: String,
}

impl Reply {
    pub fn new(kind: ReplyKind, text: impl Into<String>) -> Self {
        Reply {
            kind,
            text: text.into(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            ReplyKind::Moved => "Moved",
            ReplyKind::Taken => "Item Taken",
            ReplyKind::Used => "Item Used",
            ReplyKind::Inventory => "Inventory",
            ReplyKind::Help => "Help",
            ReplyKind::Quit => "Goodbye",
            ReplyKind::Idle => "",
        }
    }
}

pub type Outcome = Result<Reply, GameError>;

/// Everything a surface needs after one command: what happened, what the
/// room looks like now, and whether the session is over.
#[derive(Debug, Clone)]
pub struct Turn {
    pub outcome: Outcome,
    pub room: String,
    pub quit: bool,
}

impl Turn {
    /// The line to print for this turn, success or failure.
    pub fn message(&self) -> String {
        match &self.outcome {
            Ok(reply) => reply.text.clone(),
            Err(e) => e.to_string(),
        }
    }
}

/// Modal-dialog form of an outcome, for event-driven hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub error: bool,
}

impl From<&Outcome> for Notice {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Ok(reply) => Notice {
                title: reply.title().to_string(),
                message: reply.text.clone(),
                error: false,
            },
            Err(e) => Notice {
                title: e.title().to_string(),
                message: e.to_string(),
                error: true,
            },
        }
    }
}

impl Notice {
    /// The notice a modal host should pop up for this outcome. Blank input
    /// shows nothing.
    pub fn for_outcome(outcome: &Outcome) -> Option<Notice> {
        match outcome {
            Ok(reply) if reply.kind == ReplyKind::Idle => None,
            outcome => Some(Notice::from(outcome)),
        }
    }

    /// The "Show Inventory" notice.
    pub fn inventory(player: &Player) -> Notice {
        let outcome: Outcome = Ok(Reply::new(ReplyKind::Inventory, player.show_inventory()));
        Notice::from(&outcome)
    }
}
