//! Generic quiz-session state machine shared by every mini-game.
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::score::SessionSummary;

/// Session lengths offered on every setup screen.
pub const SESSION_LENGTHS: [usize; 3] = [5, 10, 15];

/// One quizzable item: it knows which answers are correct and can explain why.
pub trait QuizItem: Clone {
    /// The answer type the player submits (a circle, a yes/no, a choice id...).
    type Answer: Clone + PartialEq;

    /// Whether the submitted answer matches the item's ground truth.
    fn is_correct(&self, answer: &Self::Answer) -> bool;

    /// Explanation text shown (and optionally narrated) during feedback.
    fn explanation(&self) -> &str;
}

/// The four phases a session moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    /// Choosing a session length; no items drawn yet.
    Setup,
    /// An item is presented and the player has not answered it.
    AwaitingChoice,
    /// The player answered; outcome and explanation are on display.
    Feedback,
    /// Every drawn item has been answered.
    Complete,
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionPhase::Setup => write!(f, "setup"),
            SessionPhase::AwaitingChoice => write!(f, "awaiting-choice"),
            SessionPhase::Feedback => write!(f, "feedback"),
            SessionPhase::Complete => write!(f, "complete"),
        }
    }
}

/// Validated session length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    rounds: usize,
}

impl SessionConfig {
    /// Build a config from one of [`SESSION_LENGTHS`].
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidLength`] for any other value.
    pub fn new(rounds: usize) -> Result<Self, SessionError> {
        if SESSION_LENGTHS.contains(&rounds) {
            Ok(Self { rounds })
        } else {
            Err(SessionError::InvalidLength(rounds))
        }
    }

    /// The number of rounds in a session with this config, capped by the pool
    /// it is drawn from.
    #[must_use]
    pub const fn effective_rounds(self, pool_len: usize) -> usize {
        if self.rounds < pool_len {
            self.rounds
        } else {
            pool_len
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { rounds: 5 }
    }
}

/// Outcome of one answered round.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundOutcome<A> {
    pub answer: A,
    pub correct: bool,
}

/// Rejected operations; callers may ignore these, the session is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session length {0} is not one of 5, 10 or 15")]
    InvalidLength(usize),
    #[error("cannot start a session from an empty pool")]
    EmptyPool,
    #[error("cannot start a session in the {0} phase")]
    AlreadyStarted(SessionPhase),
    #[error("no answer expected in the {0} phase")]
    NotAwaitingChoice(SessionPhase),
    #[error("nothing to acknowledge in the {0} phase")]
    NotInFeedback(SessionPhase),
}

/// Draw a session's items: uniform shuffle of the pool, truncated to the
/// configured length.
pub fn draw_session<I: Clone, R: Rng>(pool: &[I], config: SessionConfig, rng: &mut R) -> Vec<I> {
    let mut items = pool.to_vec();
    items.shuffle(rng);
    items.truncate(config.effective_rounds(pool.len()));
    items
}

/// One play-through of a mini-game.
///
/// Phase order is strict: `Setup -> AwaitingChoice -> Feedback -> ...
/// -> Complete`, with `Feedback` looping back to `AwaitingChoice` until the
/// drawn items run out. Answers submitted in the wrong phase are rejected
/// without mutating anything, so double-clicks cannot double-score a round.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession<I: QuizItem> {
    items: Vec<I>,
    current: usize,
    score: usize,
    phase: SessionPhase,
    last_outcome: Option<RoundOutcome<I::Answer>>,
}

impl<I: QuizItem> Default for QuizSession<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: QuizItem> QuizSession<I> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            current: 0,
            score: 0,
            phase: SessionPhase::Setup,
            last_outcome: None,
        }
    }

    /// Draw items from `pool` and enter `AwaitingChoice`.
    ///
    /// # Errors
    ///
    /// Rejected when the pool is empty or the session is already underway.
    pub fn start<R: Rng>(
        &mut self,
        pool: &[I],
        config: SessionConfig,
        rng: &mut R,
    ) -> Result<(), SessionError> {
        if self.phase != SessionPhase::Setup {
            return Err(SessionError::AlreadyStarted(self.phase));
        }
        if pool.is_empty() {
            return Err(SessionError::EmptyPool);
        }
        self.items = draw_session(pool, config, rng);
        self.current = 0;
        self.score = 0;
        self.last_outcome = None;
        self.phase = SessionPhase::AwaitingChoice;
        Ok(())
    }

    /// Judge `answer` against the current item and enter `Feedback`.
    ///
    /// # Errors
    ///
    /// Rejected outside `AwaitingChoice`; the score is untouched.
    pub fn submit(&mut self, answer: I::Answer) -> Result<RoundOutcome<I::Answer>, SessionError> {
        if self.phase != SessionPhase::AwaitingChoice {
            return Err(SessionError::NotAwaitingChoice(self.phase));
        }
        let correct = self.items[self.current].is_correct(&answer);
        if correct {
            self.score += 1;
        }
        let outcome = RoundOutcome { answer, correct };
        self.last_outcome = Some(outcome.clone());
        self.phase = SessionPhase::Feedback;
        Ok(outcome)
    }

    /// Leave `Feedback`: advance to the next item, or to `Complete` after the
    /// final round. Returns the phase entered.
    ///
    /// # Errors
    ///
    /// Rejected outside `Feedback`.
    pub fn acknowledge(&mut self) -> Result<SessionPhase, SessionError> {
        if self.phase != SessionPhase::Feedback {
            return Err(SessionError::NotInFeedback(self.phase));
        }
        self.last_outcome = None;
        if self.current + 1 < self.items.len() {
            self.current += 1;
            self.phase = SessionPhase::AwaitingChoice;
        } else {
            self.phase = SessionPhase::Complete;
        }
        Ok(self.phase)
    }

    /// Drop the finished run and return to `Setup` for a fresh draw.
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Number of items drawn for this run; zero while in `Setup`.
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.items.len()
    }

    /// Zero-based index of the round on display.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&I> {
        match self.phase {
            SessionPhase::AwaitingChoice | SessionPhase::Feedback => self.items.get(self.current),
            SessionPhase::Setup | SessionPhase::Complete => None,
        }
    }

    #[must_use]
    pub fn last_outcome(&self) -> Option<&RoundOutcome<I::Answer>> {
        self.last_outcome.as_ref()
    }

    /// Final score summary; only available once the session is `Complete`.
    #[must_use]
    pub fn summary(&self) -> Option<SessionSummary> {
        if self.phase == SessionPhase::Complete {
            Some(SessionSummary::new(self.score, self.items.len()))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[derive(Debug, Clone, PartialEq)]
    struct YesNo {
        id: u32,
        truth: bool,
    }

    impl QuizItem for YesNo {
        type Answer = bool;

        fn is_correct(&self, answer: &bool) -> bool {
            *answer == self.truth
        }

        fn explanation(&self) -> &str {
            "because"
        }
    }

    fn pool(n: u32) -> Vec<YesNo> {
        (0..n).map(|id| YesNo { id, truth: id % 2 == 0 }).collect()
    }

    #[test]
    fn config_accepts_only_offered_lengths() {
        for len in SESSION_LENGTHS {
            assert!(SessionConfig::new(len).is_ok());
        }
        assert_eq!(
            SessionConfig::new(7),
            Err(SessionError::InvalidLength(7))
        );
        assert_eq!(SessionConfig::new(0), Err(SessionError::InvalidLength(0)));
    }

    #[test]
    fn draw_returns_distinct_items_from_the_pool() {
        let pool = pool(20);
        let mut rng = SmallRng::seed_from_u64(7);
        let drawn = draw_session(&pool, SessionConfig::new(10).unwrap(), &mut rng);
        assert_eq!(drawn.len(), 10);
        let mut ids: Vec<u32> = drawn.iter().map(|i| i.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 10, "drawn items must be distinct");
        assert!(drawn.iter().all(|i| pool.contains(i)));
    }

    #[test]
    fn draw_clamps_to_pool_size() {
        let pool = pool(8);
        let mut rng = SmallRng::seed_from_u64(1);
        let drawn = draw_session(&pool, SessionConfig::new(15).unwrap(), &mut rng);
        assert_eq!(drawn.len(), 8);
    }

    #[test]
    fn start_rejects_empty_pool_and_running_session() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut session = QuizSession::<YesNo>::new();
        assert_eq!(
            session.start(&[], SessionConfig::default(), &mut rng),
            Err(SessionError::EmptyPool)
        );
        session
            .start(&pool(10), SessionConfig::default(), &mut rng)
            .unwrap();
        assert_eq!(
            session.start(&pool(10), SessionConfig::default(), &mut rng),
            Err(SessionError::AlreadyStarted(SessionPhase::AwaitingChoice))
        );
    }

    #[test]
    fn submit_scores_once_and_moves_to_feedback() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut session = QuizSession::new();
        session
            .start(&pool(10), SessionConfig::default(), &mut rng)
            .unwrap();
        let truth = session.current_item().unwrap().truth;
        let outcome = session.submit(truth).unwrap();
        assert!(outcome.correct);
        assert_eq!(session.score(), 1);
        assert_eq!(session.phase(), SessionPhase::Feedback);

        // A second submit while feedback is showing changes nothing.
        assert_eq!(
            session.submit(truth),
            Err(SessionError::NotAwaitingChoice(SessionPhase::Feedback))
        );
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn wrong_answer_records_outcome_without_scoring() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut session = QuizSession::new();
        session
            .start(&pool(10), SessionConfig::default(), &mut rng)
            .unwrap();
        let truth = session.current_item().unwrap().truth;
        let outcome = session.submit(!truth).unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.answer, !truth);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn acknowledge_walks_every_round_then_completes() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut session = QuizSession::new();
        session
            .start(&pool(10), SessionConfig::default(), &mut rng)
            .unwrap();
        for round in 0..5 {
            assert_eq!(session.current_index(), round);
            let truth = session.current_item().unwrap().truth;
            session.submit(truth).unwrap();
            let next = session.acknowledge().unwrap();
            if round < 4 {
                assert_eq!(next, SessionPhase::AwaitingChoice);
            } else {
                assert_eq!(next, SessionPhase::Complete);
            }
        }
        assert_eq!(session.score(), 5);
        let summary = session.summary().unwrap();
        assert_eq!(summary.percentage, 100);

        // Guards hold at the end too.
        assert_eq!(
            session.acknowledge(),
            Err(SessionError::NotInFeedback(SessionPhase::Complete))
        );
        assert_eq!(
            session.submit(true),
            Err(SessionError::NotAwaitingChoice(SessionPhase::Complete))
        );
    }

    #[test]
    fn restart_returns_to_setup() {
        let mut rng = SmallRng::seed_from_u64(9);
        let mut session = QuizSession::new();
        session
            .start(&pool(10), SessionConfig::default(), &mut rng)
            .unwrap();
        session.restart();
        assert_eq!(session.phase(), SessionPhase::Setup);
        assert_eq!(session.score(), 0);
        assert_eq!(session.rounds(), 0);
        assert!(session.current_item().is_none());
        // A fresh draw works after restart.
        session
            .start(&pool(10), SessionConfig::default(), &mut rng)
            .unwrap();
        assert_eq!(session.phase(), SessionPhase::AwaitingChoice);
    }
}
