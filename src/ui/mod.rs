//! GUI module for the game
//!
//! Native egui/eframe interface: board rendering, mouse input and the
//! round/score flow.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::TorusApp;
pub use game_state::{GameState, RoundOutcome, Scores};
