use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::board_location::{is_on_board, BoardLocation};
use crate::color::{Color, ColorPolicy};
use crate::errors::GameError;
use crate::game_status::GameStatus;
use crate::move_kind::MoveKind;
use crate::move_record::MoveRecord;
use crate::move_rules::analysis::{is_in_check, is_in_checkmate, is_in_stalemate};
use crate::move_rules::legal_move_evaluator::{evaluate_move, legal_destinations};
use crate::piece_class::PieceClass;
use crate::piece_record::PieceRecord;
use crate::piece_register::PieceRegister;
use crate::player::Player;

/// Opaque game identifier, a UUID rendered as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub String);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One game of chess: board, turn order, move history, and the player roster.
///
/// The game exclusively owns its register, history, and players. A move is
/// applied as validate, mutate, classify, append; a rejected move leaves
/// every field untouched.
#[derive(Debug, Clone)]
pub struct Game {
    id: GameId,
    first_player_color: ColorPolicy,
    starting_color: Color,
    turn: u32,
    register: PieceRegister,
    moves: Vec<MoveRecord>,
    players: Vec<Player>,
    created_at: DateTime<Utc>,
    last_interaction: DateTime<Utc>,
    is_public: bool,
}

impl Game {
    /// Creates a game, rejecting custom layouts that are not a usable
    /// starting position (see `PieceRegister::validate`).
    pub fn new(
        id: GameId,
        first_player_color: ColorPolicy,
        custom_layout: Option<Vec<PieceRecord>>,
        starting_color: Color,
        is_public: bool,
    ) -> Result<Self, GameError> {
        let register = match custom_layout {
            Some(records) => PieceRegister::from_records(records),
            None => PieceRegister::standard_setup(),
        };
        register.validate()?;
        let now = Utc::now();
        Ok(Game {
            id,
            first_player_color,
            starting_color,
            turn: 0,
            register,
            moves: Vec::new(),
            players: Vec::new(),
            created_at: now,
            last_interaction: now,
            is_public,
        })
    }

    pub fn id(&self) -> &GameId {
        &self.id
    }

    /// The color whose turn it is: turn-counter parity offset by the color
    /// configured to move first.
    pub fn active_color(&self) -> Color {
        if self.turn % 2 == 0 {
            self.starting_color
        } else {
            self.starting_color.opposite()
        }
    }

    pub fn pieces(&self) -> impl Iterator<Item = &PieceRecord> {
        self.register.iter()
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.moves
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    /// Status after the most recent move; a fresh game is `NotCheck`.
    pub fn status(&self) -> GameStatus {
        self.moves
            .last()
            .map(|m| m.status)
            .unwrap_or(GameStatus::NotCheck)
    }

    pub fn is_public(&self) -> bool {
        self.is_public
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_interaction(&self) -> DateTime<Utc> {
        self.last_interaction
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Seats a new player. The first joiner receives the configured color
    /// (resolving a random policy with a coin flip), the second the opposite.
    /// Roster capacity is enforced by the registry, not here.
    pub fn add_player(&mut self, name: &str, token: &str, connection_id: &str) -> Player {
        let color = if self.players.is_empty() {
            self.first_player_color.resolve()
        } else {
            self.players[0].color.opposite()
        };
        let player = Player {
            name: name.to_string(),
            token: token.to_string(),
            connection_id: connection_id.to_string(),
            color,
        };
        self.players.push(player.clone());
        self.last_interaction = Utc::now();
        player
    }

    pub fn player_by_token(&self, token: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.token == token)
    }

    pub fn player_by_connection(&self, connection_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.connection_id == connection_id)
    }

    /// Reattaches a returning player's connection handle. Returns the updated
    /// player, or `None` if the token is unknown.
    pub fn rejoin_player(&mut self, token: &str, connection_id: &str) -> Option<Player> {
        let player = self.players.iter_mut().find(|p| p.token == token)?;
        player.connection_id = connection_id.to_string();
        self.last_interaction = Utc::now();
        Some(player.clone())
    }

    pub fn opponent_name(&self, color: Color) -> Option<&str> {
        self.players
            .iter()
            .find(|p| p.color != color)
            .map(|p| p.name.as_str())
    }

    /// Fully legal destinations from a square, for the active color's own
    /// pieces only; empty for enemy pieces and empty squares.
    pub fn legal_destinations_from(&self, from: BoardLocation) -> Vec<BoardLocation> {
        match self.register.piece_at(&from) {
            Some(piece) if piece.color == self.active_color() => {
                legal_destinations(&self.register, piece, self.moves.last())
            }
            _ => Vec::new(),
        }
    }

    /// Validates and applies one move, returning the appended history record.
    ///
    /// Any failed precondition returns before the first mutation, so a
    /// rejected move never leaves a partial board behind.
    pub fn apply_move(
        &mut self,
        from: BoardLocation,
        to: BoardLocation,
        promotion: Option<PieceClass>,
    ) -> Result<MoveRecord, GameError> {
        if !is_on_board(&from) {
            return Err(GameError::InvalidSquare(from));
        }
        if !is_on_board(&to) {
            return Err(GameError::InvalidSquare(to));
        }
        let piece = *self
            .register
            .piece_at(&from)
            .ok_or(GameError::NoPieceAtSource(from))?;
        if piece.color != self.active_color() {
            return Err(GameError::NotYourTurn);
        }
        let kind = evaluate_move(&self.register, &piece, to, self.moves.last())
            .ok_or(GameError::IllegalMove)?;
        let promoted_to = match kind {
            MoveKind::Promotion => {
                let target = promotion.unwrap_or(PieceClass::Queen);
                if !target.is_valid_promotion_target() {
                    return Err(GameError::InvalidPromotionChoice);
                }
                Some(target)
            }
            _ if promotion.is_some() => return Err(GameError::InvalidPromotionChoice),
            _ => None,
        };

        // Everything is validated; mutation starts here.
        let mut did_capture = self.register.remove_at(&to);
        if kind == MoveKind::EnPassant {
            did_capture |= self.register.remove_at(&(to.0, from.1));
        }
        {
            let moved = self
                .register
                .piece_at_mut(&from)
                .expect("validated move lost its piece");
            moved.location = to;
            moved.has_moved = true;
            if let Some(target) = promoted_to {
                moved.class = target;
            }
        }
        if kind == MoveKind::Castling {
            // The rook relocation is part of the same move application; no
            // observable state exists with only one of the two pieces moved.
            let rank = from.1;
            let (rook_from, rook_to) = if to.0 == 6 {
                ((7, rank), (5, rank))
            } else {
                ((0, rank), (3, rank))
            };
            let rook = self
                .register
                .piece_at_mut(&rook_from)
                .expect("castling validated without its rook");
            rook.location = rook_to;
            rook.has_moved = true;
        }
        self.turn += 1;
        self.last_interaction = Utc::now();

        let provisional = MoveRecord {
            color: piece.color,
            class: promoted_to.unwrap_or(piece.class),
            from,
            to,
            kind,
            status: GameStatus::NotCheck,
            did_capture,
            promoted_to,
        };
        let next = piece.color.opposite();
        let status = if is_in_check(&self.register, next) {
            if is_in_checkmate(&self.register, next, Some(&provisional)) {
                GameStatus::Checkmate
            } else {
                GameStatus::Check
            }
        } else if is_in_stalemate(&self.register, next, Some(&provisional)) {
            GameStatus::Stalemate
        } else {
            GameStatus::NotCheck
        };

        let record = MoveRecord {
            status,
            ..provisional
        };
        self.moves.push(record);
        Ok(record)
    }
}
