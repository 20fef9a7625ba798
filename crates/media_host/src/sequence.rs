//! Monotonic request tagging used to drop stale responses and collapse debounced input.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Sequence number attached to an issued request.
pub struct RequestSeq(pub u64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Issues increasing sequence numbers for one logical query and checks responses against the
/// latest one.
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    /// Issues the next sequence number; every earlier number becomes stale.
    pub fn issue(&mut self) -> RequestSeq {
        self.latest = self.latest.saturating_add(1);
        RequestSeq(self.latest)
    }

    /// Returns `true` when `seq` is the most recently issued number.
    pub fn is_current(&self, seq: RequestSeq) -> bool {
        seq.0 == self.latest && self.latest != 0
    }

    /// Most recently issued number.
    pub fn latest(&self) -> RequestSeq {
        RequestSeq(self.latest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_issued_sequence_is_current() {
        let mut sequence = RequestSequence::default();
        assert!(!sequence.is_current(RequestSeq(0)));

        let first = sequence.issue();
        assert!(sequence.is_current(first));

        let second = sequence.issue();
        assert!(!sequence.is_current(first));
        assert!(sequence.is_current(second));
        assert_eq!(sequence.latest(), second);
    }
}
