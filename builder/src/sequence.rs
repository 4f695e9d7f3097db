//! Per-adapter request sequencing.
//!
//! Every adapter call takes a token at invocation. Only the most recently
//! issued token may fold its response into state, so overlapping calls to the
//! same adapter resolve as latest-issued-wins regardless of arrival order.

#[cfg(test)]
#[path = "sequence_test.rs"]
mod sequence_test;

/// Opaque sequence number handed out by [`RequestSequence::issue`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Monotonic issue/settle counter for one adapter.
#[derive(Clone, Debug, Default)]
pub struct RequestSequence {
    issued: u64,
    settled: u64,
}

impl RequestSequence {
    /// Issue the next token. It supersedes every token issued before it.
    pub fn issue(&mut self) -> RequestToken {
        self.issued = self.issued.saturating_add(1);
        RequestToken(self.issued)
    }

    #[must_use]
    pub fn is_latest(&self, token: RequestToken) -> bool {
        token.0 == self.issued
    }

    /// Mark `token` as finished. Returns `false` (and changes nothing) when
    /// the token has been superseded or was already settled.
    pub fn settle(&mut self, token: RequestToken) -> bool {
        if !self.is_latest(token) || token.0 <= self.settled {
            return false;
        }
        self.settled = token.0;
        true
    }

    /// `true` while the latest issued token has not been settled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.settled < self.issued
    }
}
