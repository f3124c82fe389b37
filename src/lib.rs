//! Crate root module declarations for the chess game server core.
//!
//! This file exposes all top-level subsystems (board model, move rules,
//! game state, and the game registry) so servers, tests, and external
//! tooling can import stable module paths.

pub mod board_location;
pub mod color;
pub mod errors;
pub mod game;
pub mod game_manager;
pub mod game_status;
pub mod move_kind;
pub mod move_record;
pub mod piece_class;
pub mod piece_record;
pub mod piece_register;
pub mod player;

pub mod move_rules {
    pub mod analysis;
    pub mod legal_move_checks;
    pub mod legal_move_evaluator;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
}
