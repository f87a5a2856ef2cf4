// Shared committee and quorum helpers for the multisig wallet contracts

use cosmwasm_schema::cw_serde;

/// Default page size for list queries
pub const DEFAULT_LIMIT: u32 = 10;
/// Upper bound on any requested page size
pub const MAX_LIMIT: u32 = 30;

#[cw_serde]
pub struct QuorumStatus {
    pub confirmations: u64,
    pub threshold: u64,
}

impl QuorumStatus {
    pub fn new(confirmations: u64, threshold: u64) -> Self {
        Self {
            confirmations,
            threshold,
        }
    }

    pub fn is_met(&self) -> bool {
        meets_quorum(self.confirmations, self.threshold)
    }
}

// Common helper functions

/// Threshold must be at least one and no larger than the committee
pub fn is_valid_threshold(threshold: u64, owner_count: usize) -> bool {
    threshold >= 1 && threshold <= owner_count as u64
}

/// Check if a confirmation count reaches the threshold
pub fn meets_quorum(confirmations: u64, threshold: u64) -> bool {
    confirmations >= threshold
}

/// Resolve an optional page size against the default and maximum
pub fn page_limit(limit: Option<u32>) -> usize {
    limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_threshold() {
        assert!(is_valid_threshold(1, 1));
        assert!(is_valid_threshold(2, 3));
        assert!(is_valid_threshold(3, 3));
        assert!(!is_valid_threshold(0, 3));
        assert!(!is_valid_threshold(4, 3));
        assert!(!is_valid_threshold(1, 0));
    }

    #[test]
    fn test_meets_quorum() {
        assert!(meets_quorum(2, 2));
        assert!(meets_quorum(3, 2));
        assert!(!meets_quorum(1, 2));
        assert!(!QuorumStatus::new(0, 1).is_met());
        assert!(QuorumStatus::new(1, 1).is_met());
    }

    #[test]
    fn test_page_limit() {
        assert_eq!(page_limit(None), 10);
        assert_eq!(page_limit(Some(5)), 5);
        assert_eq!(page_limit(Some(1000)), 30); // clamped
    }
}
