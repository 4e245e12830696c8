//! Session score and best score bookkeeping

use serde::{Deserialize, Serialize};

use super::obstacles::ObstaclePair;

/// Tracks the running session score and the best score ever committed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTracker {
    session: u64,
    best: u64,
}

impl ScoreTracker {
    /// Start with a previously persisted best score
    pub fn new(best: u64) -> Self {
        Self { session: 0, best }
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    /// Count a pair once its leading edge reaches the actor
    ///
    /// The pair's `scored` flag makes this fire at most once per pair no
    /// matter how far the pair moves in a single tick. Returns true on the
    /// tick the point is awarded.
    pub fn on_pass(&mut self, pair: &mut ObstaclePair, actor_x: f32) -> bool {
        if pair.scored || pair.x > actor_x {
            return false;
        }
        pair.scored = true;
        self.session += 1;
        true
    }

    /// Fold the session score into the best score
    ///
    /// Returns true if the best score increased; the caller writes it through.
    pub fn commit_session_end(&mut self) -> bool {
        if self.session > self.best {
            log::info!("New best score: {} (was {})", self.session, self.best);
            self.best = self.session;
            true
        } else {
            false
        }
    }

    pub fn reset_session(&mut self) {
        self.session = 0;
    }
}
