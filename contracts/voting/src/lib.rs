#![no_std]
//! # Voting Ledger
//!
//! A single-ballot Soroban contract. The deployer names an owner and a fixed,
//! ordered list of proposals. The owner registers voters; each registered
//! voter casts exactly one vote for one proposal, and the contract keeps a
//! running tally per proposal.
//!
//! Every identity moves through `Unregistered -> Registered -> Voted` and
//! never back. The sum of all tallies always equals the number of identities
//! that have voted.
//!
//! Failing calls return a [`VotingError`] and leave storage untouched.

use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, String, Vec};

mod constants;
mod contract;
mod errors;
mod events;
mod storage;
mod types;

use contract::VotingContract;

pub use errors::VotingError;
pub use types::{Proposal, VoterStatus};

#[contract]
pub struct VotingLedger;

#[contractimpl]
impl VotingLedger {
    /// Deploy the ballot. `owner` is fixed for the contract's lifetime.
    pub fn __constructor(env: Env, owner: Address, proposal_names: Vec<String>) {
        if let Err(err) = VotingContract::initialize(&env, owner, proposal_names) {
            panic_with_error!(&env, err);
        }
    }

    /// Owner-only. Registering an existing voter is a no-op.
    pub fn register_voter(env: Env, caller: Address, voter: Address) -> Result<(), VotingError> {
        VotingContract::register_voter(&env, caller, voter)
    }

    /// Checks run in order: registered, not yet voted, index in range.
    pub fn cast_vote(env: Env, caller: Address, proposal_index: u32) -> Result<(), VotingError> {
        VotingContract::cast_vote(&env, caller, proposal_index)
    }

    pub fn owner(env: Env) -> Address {
        VotingContract::owner(&env)
    }

    pub fn is_owner(env: Env, identity: Address) -> bool {
        VotingContract::is_owner(&env, identity)
    }

    pub fn is_registered(env: Env, identity: Address) -> bool {
        VotingContract::is_registered(&env, identity)
    }

    pub fn has_voted(env: Env, identity: Address) -> bool {
        VotingContract::has_voted(&env, identity)
    }

    pub fn voter_status(env: Env, identity: Address) -> VoterStatus {
        VotingContract::voter_status(&env, identity)
    }

    pub fn tally(env: Env, proposal_index: u32) -> Result<u64, VotingError> {
        VotingContract::tally(&env, proposal_index)
    }

    pub fn proposal(env: Env, proposal_index: u32) -> Result<Proposal, VotingError> {
        VotingContract::proposal(&env, proposal_index)
    }

    pub fn proposals(env: Env) -> Vec<Proposal> {
        VotingContract::proposals(&env)
    }

    pub fn proposal_count(env: Env) -> u32 {
        VotingContract::proposal_count(&env)
    }

    /// Number of identities that have voted.
    pub fn total_votes(env: Env) -> u64 {
        VotingContract::total_votes(&env)
    }
}
