//! Contract events emitted on each successful state transition
#![allow(deprecated)]

use soroban_sdk::{Address, Env, Symbol};

pub fn initialized(env: &Env, owner: &Address, proposal_count: u32) {
    env.events().publish(
        (Symbol::new(env, "initialized"),),
        (owner.clone(), proposal_count),
    );
}

pub fn voter_registered(env: &Env, owner: &Address, voter: &Address) {
    env.events().publish(
        (Symbol::new(env, "voter_registered"), voter.clone()),
        owner.clone(),
    );
}

pub fn vote_cast(env: &Env, voter: &Address, proposal_index: u32, vote_count: u64) {
    env.events().publish(
        (Symbol::new(env, "vote_cast"), voter.clone()),
        (proposal_index, vote_count),
    );
}
