use serde::{Deserialize, Serialize};

use crate::*;

/// Level progression constants. The target score grows geometrically while
/// the clock shrinks linearly down to a floor.
const INITIAL_TARGET: f64 = 75.0;
const TARGET_GROWTH: f64 = 1.6;
const INITIAL_TIME: u32 = 120;
const TIME_STEP: u32 = 10;
const MIN_TIME: u32 = 45;
const INITIAL_COINS: u64 = 15;
const LEVEL_COIN_REWARD: u64 = 20;

fn target_for_level(level: u32) -> u64 {
    (INITIAL_TARGET * TARGET_GROWTH.powi(level.saturating_sub(1) as i32)).floor() as u64
}

fn time_for_level(level: u32) -> u32 {
    INITIAL_TIME
        .saturating_sub(TIME_STEP * level.saturating_sub(1))
        .max(MIN_TIME)
}

/// One run of the game: the live board plus everything that persists across
/// word submissions. Scoring itself lives in [`score`]; the session only
/// records accepted results and tracks progression.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    grid: Grid,
    words_found: Vec<String>,
    score: u64,
    coins: u64,
    level: u32,
    time_remaining: u32,
    target_score: u64,
}

impl Session {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            words_found: Vec::new(),
            score: 0,
            coins: INITIAL_COINS,
            level: 1,
            time_remaining: INITIAL_TIME,
            target_score: target_for_level(1),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn words_found(&self) -> &[String] {
        &self.words_found
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn coins(&self) -> u64 {
        self.coins
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn target_score(&self) -> u64 {
        self.target_score
    }

    /// Case-insensitive membership test against the words already accepted
    /// this level.
    pub fn already_found(&self, word: &str) -> bool {
        self.words_found
            .iter()
            .any(|found| found.eq_ignore_ascii_case(word))
    }

    /// Records an accepted word with its already-computed rewards. Duplicate
    /// words are rejected here as the last line of defense; the lexicon layer
    /// normally reports them before scoring runs.
    pub fn record_word(&mut self, word: &str, points: u32, coins: u32) -> bool {
        if self.already_found(word) {
            return false;
        }
        self.words_found.push(word.to_ascii_lowercase());
        self.score += u64::from(points);
        self.coins += u64::from(coins);
        true
    }

    pub fn spend_coins(&mut self, amount: u64) -> bool {
        if amount > self.coins {
            return false;
        }
        self.coins -= amount;
        true
    }

    pub fn level_complete(&self) -> bool {
        self.score >= self.target_score
    }

    /// Moves to the next level on a fresh board. Score and found words reset,
    /// the target rises, the clock shrinks, and the level reward is paid out.
    pub fn advance_level(&mut self, grid: Grid) {
        self.level += 1;
        self.grid = grid;
        self.words_found.clear();
        self.score = 0;
        self.coins += LEVEL_COIN_REWARD;
        self.target_score = target_for_level(self.level);
        self.time_remaining = time_for_level(self.level);
    }

    /// Clock maintenance from the driving loop.
    pub fn tick(&mut self) {
        self.time_remaining = self.time_remaining.saturating_sub(1);
    }

    pub fn extend_time(&mut self, seconds: u32) {
        self.time_remaining += seconds;
    }

    pub fn time_expired(&self) -> bool {
        self.time_remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::tests::grid;

    fn session() -> Session {
        Session::new(grid(&["cats", "odgs", "wxyz", "abcd"]))
    }

    #[test]
    fn fresh_session_state() {
        let session = session();
        assert_eq!(session.level(), 1);
        assert_eq!(session.score(), 0);
        assert_eq!(session.coins(), 15);
        assert_eq!(session.time_remaining(), 120);
        assert_eq!(session.target_score(), 75);
        assert!(session.words_found().is_empty());
        assert!(!session.level_complete());
    }

    #[test]
    fn recording_accumulates_score_and_coins() {
        let mut session = session();
        assert!(session.record_word("cat", 5, 2));
        assert!(session.record_word("dog", 5, 0));
        assert_eq!(session.score(), 10);
        assert_eq!(session.coins(), 17);
        assert_eq!(session.words_found(), &["cat", "dog"]);
    }

    #[test]
    fn duplicates_are_rejected_case_insensitively() {
        let mut session = session();
        assert!(session.record_word("Cat", 5, 0));
        assert!(session.already_found("CAT"));
        assert!(!session.record_word("cat", 5, 0));
        assert_eq!(session.score(), 5);
        assert_eq!(session.words_found().len(), 1);
    }

    #[test]
    fn target_curve_is_geometric() {
        assert_eq!(target_for_level(1), 75);
        assert_eq!(target_for_level(2), 120);
        assert_eq!(target_for_level(3), 192);
        assert_eq!(target_for_level(4), 307);
    }

    #[test]
    fn clock_shrinks_to_a_floor() {
        assert_eq!(time_for_level(1), 120);
        assert_eq!(time_for_level(2), 110);
        assert_eq!(time_for_level(8), 50);
        assert_eq!(time_for_level(9), 45);
        assert_eq!(time_for_level(30), 45);
    }

    #[test]
    fn advancing_resets_the_level_state() {
        let mut session = session();
        session.record_word("cat", 80, 0);
        assert!(session.level_complete());

        session.advance_level(grid(&["ab", "cd"]));
        assert_eq!(session.level(), 2);
        assert_eq!(session.score(), 0);
        assert_eq!(session.coins(), 35);
        assert_eq!(session.target_score(), 120);
        assert_eq!(session.time_remaining(), 110);
        assert!(session.words_found().is_empty());
        assert_eq!(session.grid().size(), 2);
        // Words from the previous level are fair game again.
        assert!(session.record_word("cat", 5, 0));
    }

    #[test]
    fn spending_respects_the_balance() {
        let mut session = session();
        assert!(session.spend_coins(10));
        assert_eq!(session.coins(), 5);
        assert!(!session.spend_coins(6));
        assert_eq!(session.coins(), 5);
    }

    #[test]
    fn ticking_runs_the_clock_out() {
        let mut session = session();
        for _ in 0..120 {
            session.tick();
        }
        assert!(session.time_expired());
        session.tick();
        assert_eq!(session.time_remaining(), 0);

        session.extend_time(45);
        assert_eq!(session.time_remaining(), 45);
        assert!(!session.time_expired());
    }
}
