//! Thread-safe engine handle.
//!
//! Each command holds one lock across "read state, compute next state,
//! publish", so concurrent moves are serialized and turn alternation is never
//! skipped or duplicated. Readers get `Arc` snapshots and never block writers
//! for longer than a pointer clone.

use crate::action::{MoveError, MoveOutcome};
use crate::engine::GameEngine;
use crate::position::Position;
use crate::types::GameState;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{instrument, warn};

/// Cloneable handle to one engine shared between threads.
#[derive(Debug, Clone, Default)]
pub struct SharedEngine {
    inner: Arc<Mutex<GameEngine>>,
}

impl SharedEngine {
    /// Creates a handle around a fresh engine.
    pub fn new() -> Self {
        Self::from_engine(GameEngine::new())
    }

    /// Creates a handle around an existing engine.
    pub fn from_engine(engine: GameEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, GameEngine> {
        // A panic while holding the lock cannot leave a half-applied move:
        // the engine swaps its state in one assignment.
        self.inner.lock().unwrap_or_else(|poisoned| {
            warn!("Engine lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Current state snapshot.
    pub fn snapshot(&self) -> Arc<GameState> {
        self.lock().snapshot()
    }

    /// See [`GameEngine::make_move`].
    #[instrument(skip(self))]
    pub fn make_move(&self, row: usize, col: usize) -> Result<bool, MoveError> {
        self.lock().make_move(row, col)
    }

    /// See [`GameEngine::try_move`].
    #[instrument(skip(self))]
    pub fn try_move(&self, position: Position) -> Result<MoveOutcome, MoveError> {
        self.lock().try_move(position)
    }

    /// See [`GameEngine::reset_round`].
    pub fn reset_round(&self) {
        self.lock().reset_round();
    }

    /// See [`GameEngine::reset_score`].
    pub fn reset_score(&self) {
        self.lock().reset_score();
    }
}
