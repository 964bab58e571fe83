use crate::Round;

/// Everything that can go wrong inside the engine. Probabilistic outcomes
/// (bails, injuries, lost matches) are ordinary values, never errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Catalog lookup miss. Validated inputs should make this unreachable.
    #[error("unknown trick '{0}'")]
    UnknownTrick(String),
    /// Attempt against a skater already at zero health. The bout's early
    /// exits prevent this; seeing it means a caller bug.
    #[error("{0} can no longer compete (health is 0)")]
    NotCompeting(String),
    /// Selection-time legality: the trick is not in the skater's unlocked set.
    #[error("trick '{0}' is not unlocked yet")]
    TrickLocked(String),
    /// Human entered something that is not a position in the offered list.
    /// Recovered at the input boundary by re-prompting.
    #[error("enter a number between 1 and {0}")]
    InvalidSelection(usize),
    /// Advancing past the final round. A notice, not a failure.
    #[error("round {0} is the final; there is nowhere further to advance")]
    RoundLimitReached(Round),
}
