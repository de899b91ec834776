use soroban_sdk::{contracttype, Address, String};

/// A ballot option and its running tally
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub name: String,
    pub vote_count: u64,
}

/// Where an identity sits in the Unregistered -> Registered -> Voted lifecycle
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum VoterStatus {
    Unregistered,
    Registered,
    Voted,
}

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    ProposalCount,
    Proposal(u32),
    // Number of identities that have voted; equals the sum of all tallies
    TotalVotes,
    Voter(Address),
    Voted(Address),
}
