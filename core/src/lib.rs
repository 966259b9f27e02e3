//! Rules engine for Vanishing Tic Tac Toe.
//!
//! Each player keeps at most three marks on the board: placing a fourth one clears that
//! player's oldest mark before the board is checked for a winner.

#![no_std]

extern crate alloc;

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use history::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod history;
mod types;
