use soroban_sdk::{unwrap::UnwrapOptimized, Address, Env};

use crate::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, VOTER_BUMP_AMOUNT,
    VOTER_LIFETIME_THRESHOLD,
};
use crate::types::{DataKey, Proposal};

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// ── Owner ────────────────────────────────────────────────────────────────────

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

/// Written once by the constructor, so always present afterwards.
pub fn get_owner(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .unwrap_optimized()
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn set_proposal_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::ProposalCount, &count);
}

pub fn get_proposal_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0)
}

pub fn save_proposal(env: &Env, index: u32, proposal: &Proposal) {
    env.storage()
        .instance()
        .set(&DataKey::Proposal(index), proposal);
}

pub fn get_proposal(env: &Env, index: u32) -> Option<Proposal> {
    if index >= get_proposal_count(env) {
        return None;
    }
    env.storage().instance().get(&DataKey::Proposal(index))
}

// ── Vote totals ──────────────────────────────────────────────────────────────

pub fn get_total_votes(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::TotalVotes)
        .unwrap_or(0)
}

pub fn set_total_votes(env: &Env, total: u64) {
    env.storage().instance().set(&DataKey::TotalVotes, &total);
}

// ── Voter registry ───────────────────────────────────────────────────────────

pub fn set_voter(env: &Env, voter: &Address) {
    let key = DataKey::Voter(voter.clone());
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, VOTER_LIFETIME_THRESHOLD, VOTER_BUMP_AMOUNT);
}

pub fn is_voter(env: &Env, identity: &Address) -> bool {
    env.storage()
        .persistent()
        .get::<DataKey, bool>(&DataKey::Voter(identity.clone()))
        .unwrap_or(false)
}

// ── Vote record ──────────────────────────────────────────────────────────────

pub fn set_voted(env: &Env, voter: &Address) {
    let key = DataKey::Voted(voter.clone());
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, VOTER_LIFETIME_THRESHOLD, VOTER_BUMP_AMOUNT);
}

pub fn has_voted(env: &Env, identity: &Address) -> bool {
    env.storage()
        .persistent()
        .get::<DataKey, bool>(&DataKey::Voted(identity.clone()))
        .unwrap_or(false)
}
