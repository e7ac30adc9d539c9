#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevertReason {
    Empty,
    MultipleDecimalPoints,
    NoNumericPrefix,
    Unparsable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The whole draft was a valid number.
    Accepted,
    /// A number was recovered from the start of a malformed draft.
    Recovered,
    /// The draft was discarded and the committed value kept.
    Reverted(RevertReason),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommitReport {
    pub outcome: CommitOutcome,
    pub clamped: bool,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    pub clamped: bool,
    pub value: f64,
}

impl CommitReport {
    #[must_use]
    pub fn is_reverted(&self) -> bool {
        matches!(self.outcome, CommitOutcome::Reverted(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_reverted_outcome_reports_reverted() {
        let accepted = CommitReport {
            outcome: CommitOutcome::Accepted,
            clamped: false,
            value: 3.0,
        };
        let reverted = CommitReport {
            outcome: CommitOutcome::Reverted(RevertReason::Empty),
            ..accepted
        };

        assert!(!accepted.is_reverted());
        assert!(reverted.is_reverted());
    }
}
