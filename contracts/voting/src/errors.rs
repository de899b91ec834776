//! Error codes for the voting ledger
//!
//! Codes are part of the contract interface: clients discriminate failures by
//! code, and the messages below are the strings callers pattern-match on.

use core::fmt;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VotingError {
    /// Caller is not the owner and may not register voters
    Unauthorized = 1,

    /// Caller was never registered as a voter
    NotEligible = 2,

    /// Caller has already cast their vote
    AlreadyVoted = 3,

    /// Proposal index is outside the fixed proposal range
    InvalidProposal = 4,

    /// Proposal list given at deployment is empty, too long or has a bad name
    InvalidConfig = 5,
}

impl VotingError {
    /// Human-readable reason attached to the failure.
    pub const fn message(&self) -> &'static str {
        match self {
            VotingError::Unauthorized => "Only the owner can add voters",
            VotingError::NotEligible => "You are not an approved voter",
            VotingError::AlreadyVoted => "You have already voted",
            VotingError::InvalidProposal => "Invalid proposal index",
            VotingError::InvalidConfig => "Invalid proposal configuration",
        }
    }
}

impl fmt::Display for VotingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
