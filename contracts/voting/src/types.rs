use soroban_sdk::{contracttype, Address, String};

/// Phases of the ballot workflow, in chronological order.
/// This is a closed enum with only valid phases - no string states allowed.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WorkflowStatus {
    RegisteringVoters = 0,
    ProposalsRegistrationStarted = 1,
    ProposalsRegistrationEnded = 2,
    VotingSessionStarted = 3,
    VotingSessionEnded = 4,
    VotesTallied = 5,
}

impl WorkflowStatus {
    /// Validates whether a transition from the current status to the next is allowed.
    ///
    /// Valid transitions:
    /// - RegisteringVoters → ProposalsRegistrationStarted
    /// - ProposalsRegistrationStarted → ProposalsRegistrationEnded
    /// - ProposalsRegistrationEnded → VotingSessionStarted
    /// - VotingSessionStarted → VotingSessionEnded
    /// - VotingSessionEnded → VotesTallied
    /// - VotesTallied → (no transitions)
    pub fn can_transition_to(self, next: WorkflowStatus) -> bool {
        use WorkflowStatus::*;
        match (self, next) {
            (RegisteringVoters, ProposalsRegistrationStarted) => true,
            (ProposalsRegistrationStarted, ProposalsRegistrationEnded) => true,
            (ProposalsRegistrationEnded, VotingSessionStarted) => true,
            (VotingSessionStarted, VotingSessionEnded) => true,
            (VotingSessionEnded, VotesTallied) => true,
            // VotesTallied is terminal; skips and reversals are rejected
            _ => false,
        }
    }
}

/// Registration and ballot record for a single address.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Voter {
    /// True once the administrator has whitelisted the address
    pub is_registered: bool,
    /// True once the voter has cast their vote
    pub has_voted: bool,
    /// Index of the proposal voted for; meaningful only if `has_voted`
    pub voted_proposal_id: u32,
}

impl Voter {
    /// Record returned for addresses that were never registered.
    pub fn unregistered() -> Self {
        Voter {
            is_registered: false,
            has_voted: false,
            voted_proposal_id: 0,
        }
    }
}

/// A candidate proposal on the ballot.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    /// Non-empty free-form description
    pub description: String,
    /// Number of votes received so far
    pub vote_count: u32,
}

/// Storage keys
#[contracttype]
pub enum DataKey {
    Admin,
    Status,
    Voter(Address),
    Proposal(u32),
    ProposalCount,
    WinningProposal,
}
