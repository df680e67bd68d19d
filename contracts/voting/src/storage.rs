use soroban_sdk::{Address, Env};

use crate::types::{DataKey, Proposal, Voter, WorkflowStatus};

// ── Admin ────────────────────────────────────────────────────────────────────

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().persistent().set(&DataKey::Admin, admin);
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Admin)
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Admin)
}

// ── Workflow Status ──────────────────────────────────────────────────────────

pub fn set_status(env: &Env, status: WorkflowStatus) {
    env.storage().persistent().set(&DataKey::Status, &status);
}

pub fn get_status(env: &Env) -> WorkflowStatus {
    env.storage()
        .persistent()
        .get(&DataKey::Status)
        .unwrap_or(WorkflowStatus::RegisteringVoters)
}

// ── Voters ───────────────────────────────────────────────────────────────────

pub fn save_voter(env: &Env, address: &Address, voter: &Voter) {
    env.storage()
        .persistent()
        .set(&DataKey::Voter(address.clone()), voter);
}

/// Returns the stored record, or the zero-value record for unknown addresses.
pub fn get_voter(env: &Env, address: &Address) -> Voter {
    env.storage()
        .persistent()
        .get(&DataKey::Voter(address.clone()))
        .unwrap_or_else(Voter::unregistered)
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn get_proposal_count(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0u32)
}

/// Stores `proposal` at the next dense index and returns that index.
pub fn append_proposal(env: &Env, proposal: &Proposal) -> u32 {
    let id = get_proposal_count(env);
    env.storage().persistent().set(&DataKey::Proposal(id), proposal);
    env.storage()
        .persistent()
        .set(&DataKey::ProposalCount, &(id + 1));
    id
}

pub fn save_proposal(env: &Env, id: u32, proposal: &Proposal) {
    env.storage().persistent().set(&DataKey::Proposal(id), proposal);
}

pub fn get_proposal(env: &Env, id: u32) -> Option<Proposal> {
    env.storage().persistent().get(&DataKey::Proposal(id))
}

// ── Winning Proposal ─────────────────────────────────────────────────────────

pub fn set_winning_proposal(env: &Env, id: u32) {
    env.storage().persistent().set(&DataKey::WinningProposal, &id);
}

pub fn get_winning_proposal(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::WinningProposal)
        .unwrap_or(0u32)
}
