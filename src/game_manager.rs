use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::color::{Color, ColorPolicy};
use crate::errors::GameError;
use crate::game::{Game, GameId};
use crate::piece_record::PieceRecord;
use crate::player::Player;

/// Registry of live games, shared across connections.
///
/// The map itself sits behind one mutex; each game behind its own, so two
/// games never block each other. Map-level operations are insert, lookup, and
/// reap, all short.
#[derive(Debug, Default)]
pub struct GameManager {
    games: Mutex<HashMap<GameId, Arc<Mutex<Game>>>>,
}

impl GameManager {
    pub fn new() -> Self {
        GameManager {
            games: Mutex::new(HashMap::new()),
        }
    }

    /// Creates a game under a fresh UUID and returns its id. A custom layout
    /// that fails validation registers nothing.
    pub fn new_game(
        &self,
        first_player_color: ColorPolicy,
        custom_layout: Option<Vec<PieceRecord>>,
        starting_color: Color,
        is_public: bool,
    ) -> Result<GameId, GameError> {
        let id = GameId(Uuid::new_v4().to_string());
        let game = Game::new(
            id.clone(),
            first_player_color,
            custom_layout,
            starting_color,
            is_public,
        )?;
        let mut games = self.games.lock().unwrap();
        games.insert(id.clone(), Arc::new(Mutex::new(game)));
        Ok(id)
    }

    pub fn game(&self, id: &GameId) -> Option<Arc<Mutex<Game>>> {
        let games = self.games.lock().unwrap();
        games.get(id).cloned()
    }

    pub fn game_count(&self) -> usize {
        self.games.lock().unwrap().len()
    }

    /// Ids of games listed publicly, for the lobby.
    ///
    /// The map lock is released before any game lock is taken, so a busy
    /// game never stalls the listing; it is simply skipped this round.
    pub fn public_games(&self) -> Vec<GameId> {
        let snapshot: Vec<(GameId, Arc<Mutex<Game>>)> = {
            let games = self.games.lock().unwrap();
            games
                .iter()
                .map(|(id, game)| (id.clone(), Arc::clone(game)))
                .collect()
        };
        snapshot
            .into_iter()
            .filter_map(|(id, game)| {
                let public = game.try_lock().map(|g| g.is_public()).unwrap_or(false);
                public.then_some(id)
            })
            .collect()
    }

    /// Seats a player in a game, or reattaches them if their token is already
    /// on the roster. A full roster only rejects tokens it has never seen.
    pub fn join_game(
        &self,
        id: &GameId,
        name: &str,
        token: &str,
        connection_id: &str,
    ) -> Result<Player, GameError> {
        let game = self
            .game(id)
            .ok_or_else(|| GameError::GameNotFound(id.clone()))?;
        let mut game = game.lock().unwrap();
        if let Some(player) = game.rejoin_player(token, connection_id) {
            return Ok(player);
        }
        if game.player_count() >= 2 {
            return Err(GameError::GameFull);
        }
        Ok(game.add_player(name, token, connection_id))
    }

    /// Removes games idle for longer than `max_age` and returns how many were
    /// reaped. A game whose mutex is held is in use and is always kept.
    pub fn expire_idle_games(&self, max_age: Duration) -> usize {
        let cutoff = Utc::now() - max_age;
        let mut games = self.games.lock().unwrap();
        let before = games.len();
        games.retain(|_, game| match game.try_lock() {
            Ok(game) => game.last_interaction() > cutoff,
            Err(_) => true,
        });
        before - games.len()
    }
}
