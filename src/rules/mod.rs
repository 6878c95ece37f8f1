//! Game rules for the wrap-around grid
//!
//! Win detection over toroidal three-in-a-row lines.

pub mod win;

// Re-exports for convenient access
pub use win::{check_winner, WinLine};
