//! Deployment limits and storage lifetimes

/// Upper bound on the number of proposals a ballot may be deployed with
pub const MAX_PROPOSALS: u32 = 64;

/// Upper bound on a proposal name, in bytes
pub const MAX_PROPOSAL_NAME_LEN: u32 = 64;

// ── Ledger TTL constants ─────────────────────────────────────────────────────
// At ~5s per ledger one day is 17,280 ledgers.
pub const DAY_IN_LEDGERS: u32 = 17_280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const VOTER_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const VOTER_LIFETIME_THRESHOLD: u32 = VOTER_BUMP_AMOUNT - DAY_IN_LEDGERS;
