pub mod engine;
pub mod error;
pub mod world;

use engine::{Player, ReplyKind, Turn, handle_command};
use world::{Room, World};

pub use error::{GameError, WorldError};
pub use world::{build_world, load_world_from_file, load_world_from_str};

/// One play session: the world and the player walking through it.
pub struct GameState {
    pub world: World,
    pub player: Player,
}

#[cfg(feature = "wasm")]
mod wasm_bindings {
    use super::*;
    use crate::engine::Notice;
    use serde::Serialize;
    use serde_wasm_bindgen::to_value;
    use wasm_bindgen::prelude::*;

    #[derive(Serialize)]
    struct WasmTurn {
        notice: Option<Notice>,
        room: String,
        quit: bool,
    }

    #[wasm_bindgen]
    pub struct WasmGame {
        state: GameState,
    }

    #[wasm_bindgen]
    impl WasmGame {
        /// Start a session in the built-in manor.
        #[wasm_bindgen(constructor)]
        pub fn new() -> Result<WasmGame, JsValue> {
            let world = build_world().map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(WasmGame {
                state: GameState::new(world),
            })
        }

        /// Start a session from a TOML world string.
        #[wasm_bindgen(js_name = fromToml)]
        pub fn from_toml(world_toml: &str) -> Result<WasmGame, JsValue> {
            let world =
                load_world_from_str(world_toml).map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(WasmGame {
                state: GameState::new(world),
            })
        }

        /// Text for the read-only room display.
        #[wasm_bindgen]
        pub fn room(&self) -> String {
            self.state.describe_room()
        }

        /// Submit the entry field's text. Blank input produces no notice.
        #[wasm_bindgen]
        pub fn submit(&mut self, input: &str) -> JsValue {
            let turn = self.state.step(input);
            to_value(&WasmTurn {
                notice: Notice::for_outcome(&turn.outcome),
                room: turn.room,
                quit: turn.quit,
            })
            .unwrap_or(JsValue::NULL)
        }

        /// The "Show Inventory" action.
        #[wasm_bindgen]
        pub fn inventory(&self) -> JsValue {
            to_value(&Notice::inventory(&self.state.player)).unwrap_or(JsValue::NULL)
        }
    }
}

impl GameState {
    pub fn new(world: World) -> Self {
        let player = Player::new(world.start_room);
        GameState { world, player }
    }

    pub fn current_room(&self) -> &Room {
        self.world.room(self.player.current)
    }

    pub fn describe_room(&self) -> String {
        self.current_room().describe()
    }

    /// Process a single player input.
    pub fn step(&mut self, input: &str) -> Turn {
        let outcome = handle_command(&mut self.world, &mut self.player, input);
        let quit = matches!(&outcome, Ok(reply) if reply.kind == ReplyKind::Quit);
        Turn {
            outcome,
            room: self.describe_room(),
            quit,
        }
    }

    /// Process input and hand the result to `render`. Returns false once the
    /// session has ended.
    pub fn play<F>(&mut self, input: &str, mut render: F) -> bool
    where
        F: FnMut(&Turn),
    {
        let turn = self.step(input);
        render(&turn);
        !turn.quit
    }
}
