use soroban_sdk::{Address, Env, String, Vec};

use crate::constants::{MAX_PROPOSALS, MAX_PROPOSAL_NAME_LEN};
use crate::errors::VotingError;
use crate::events;
use crate::storage;
use crate::types::{Proposal, VoterStatus};

pub struct VotingContract;

fn validate_proposal_names(names: &Vec<String>) -> Result<(), VotingError> {
    if names.is_empty() || names.len() > MAX_PROPOSALS {
        return Err(VotingError::InvalidConfig);
    }
    for name in names.iter() {
        if name.is_empty() || name.len() > MAX_PROPOSAL_NAME_LEN {
            return Err(VotingError::InvalidConfig);
        }
    }
    Ok(())
}

impl VotingContract {
    // -------------------------------
    // Construction
    // -------------------------------
    pub fn initialize(
        env: &Env,
        owner: Address,
        proposal_names: Vec<String>,
    ) -> Result<(), VotingError> {
        validate_proposal_names(&proposal_names)?;

        storage::set_owner(env, &owner);
        for (name, index) in proposal_names.iter().zip(0u32..) {
            storage::save_proposal(
                env,
                index,
                &Proposal {
                    name,
                    vote_count: 0,
                },
            );
        }
        storage::set_proposal_count(env, proposal_names.len());
        storage::set_total_votes(env, 0);
        storage::bump_instance(env);

        events::initialized(env, &owner, proposal_names.len());

        Ok(())
    }

    // -------------------------------
    // Registration
    // -------------------------------
    pub fn register_voter(env: &Env, caller: Address, voter: Address) -> Result<(), VotingError> {
        caller.require_auth();

        if caller != storage::get_owner(env) {
            return Err(VotingError::Unauthorized);
        }

        // Re-registering only refreshes the entry's TTL.
        let newly_registered = !storage::is_voter(env, &voter);
        storage::set_voter(env, &voter);
        storage::bump_instance(env);

        if newly_registered {
            events::voter_registered(env, &caller, &voter);
        }

        Ok(())
    }

    // -------------------------------
    // Voting
    // -------------------------------
    pub fn cast_vote(env: &Env, caller: Address, proposal_index: u32) -> Result<(), VotingError> {
        caller.require_auth();

        if !storage::is_voter(env, &caller) {
            return Err(VotingError::NotEligible);
        }
        if storage::has_voted(env, &caller) {
            return Err(VotingError::AlreadyVoted);
        }
        let mut proposal =
            storage::get_proposal(env, proposal_index).ok_or(VotingError::InvalidProposal)?;

        // Every check is done; nothing below can fail.
        proposal.vote_count += 1;
        let total_votes = storage::get_total_votes(env) + 1;

        storage::set_voted(env, &caller);
        storage::save_proposal(env, proposal_index, &proposal);
        storage::set_total_votes(env, total_votes);
        storage::bump_instance(env);

        events::vote_cast(env, &caller, proposal_index, proposal.vote_count);

        Ok(())
    }

    // -------------------------------
    // Read-only Queries
    // -------------------------------
    pub fn owner(env: &Env) -> Address {
        storage::get_owner(env)
    }

    pub fn is_owner(env: &Env, identity: Address) -> bool {
        identity == storage::get_owner(env)
    }

    pub fn is_registered(env: &Env, identity: Address) -> bool {
        storage::is_voter(env, &identity)
    }

    pub fn has_voted(env: &Env, identity: Address) -> bool {
        storage::has_voted(env, &identity)
    }

    pub fn voter_status(env: &Env, identity: Address) -> VoterStatus {
        if storage::has_voted(env, &identity) {
            VoterStatus::Voted
        } else if storage::is_voter(env, &identity) {
            VoterStatus::Registered
        } else {
            VoterStatus::Unregistered
        }
    }

    pub fn tally(env: &Env, proposal_index: u32) -> Result<u64, VotingError> {
        Self::proposal(env, proposal_index).map(|proposal| proposal.vote_count)
    }

    pub fn proposal(env: &Env, proposal_index: u32) -> Result<Proposal, VotingError> {
        storage::get_proposal(env, proposal_index).ok_or(VotingError::InvalidProposal)
    }

    pub fn proposals(env: &Env) -> Vec<Proposal> {
        let mut proposals = Vec::new(env);
        for index in 0..storage::get_proposal_count(env) {
            if let Some(proposal) = storage::get_proposal(env, index) {
                proposals.push_back(proposal);
            }
        }
        proposals
    }

    pub fn proposal_count(env: &Env) -> u32 {
        storage::get_proposal_count(env)
    }

    pub fn total_votes(env: &Env) -> u64 {
        storage::get_total_votes(env)
    }
}
