/// How run scanning treats the left and right edges of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// Every step must stay on the board in both row and column.
    #[default]
    Bounded,
    /// Plain flat-index arithmetic: a run may continue from the last
    /// column of one row into the first column of the next. Only the end
    /// of the container stops it. Kept for parity with the original web UI.
    Wrapping,
}

/// Rule switches for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuleConfig {
    pub edge_policy: EdgePolicy,
}

impl RuleConfig {
    pub fn wrapping() -> Self {
        Self {
            edge_policy: EdgePolicy::Wrapping,
        }
    }
}
