//! Circuit puzzle sessions with undo/redo.
//!
//! This crate layers a turn history over a [`lightwire_core::Board`]:
//!
//! - [`TurnCommand`]: a reversible quarter turn of one tile
//! - [`CommandStack`]: bounded linear undo/redo history of turns
//! - [`Game`]: a session owning the board and its history
//! - [`HistoryConfig`]: history settings

mod command;
mod command_stack;
mod config;
mod game;

pub use self::{
    command::TurnCommand, command_stack::CommandStack, config::HistoryConfig, game::Game,
};
