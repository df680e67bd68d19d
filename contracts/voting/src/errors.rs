//! Error codes for the voting contract
//!
//! Every operation returns a typed error on failure; failed calls leave
//! contract storage untouched.

use soroban_sdk::contracterror;

/// Errors raised by the voting contract
///
/// Codes are stable so clients and indexers can match on them across
/// contract upgrades.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum VotingError {
    /// Contract not initialized
    NotInitialized = 1,

    /// Contract already initialized
    AlreadyInitialized = 2,

    /// Caller is not the ballot administrator
    AccessDenied = 3,

    /// Caller is not a registered voter
    NotVoter = 4,

    /// Operation not allowed in the current workflow status
    WrongPhase = 5,

    /// Address is already on the voter whitelist
    AlreadyRegistered = 6,

    /// Voter has already cast a vote
    AlreadyVoted = 7,

    /// Proposal description is empty
    EmptyProposal = 8,

    /// No proposal exists at the given index
    InvalidProposalId = 9,

    /// Cannot tally a ballot with no proposals
    NoProposals = 10,
}

impl VotingError {
    /// Get a human-readable description of the error
    pub fn message(&self) -> &str {
        match self {
            VotingError::NotInitialized => "Contract not initialized",
            VotingError::AlreadyInitialized => "Contract already initialized",
            VotingError::AccessDenied => "Caller is not the administrator",
            VotingError::NotVoter => "You're not a voter",
            VotingError::WrongPhase => "Operation not allowed in the current workflow status",
            VotingError::AlreadyRegistered => "Already registered",
            VotingError::AlreadyVoted => "You have already voted",
            VotingError::EmptyProposal => "Proposal description cannot be empty",
            VotingError::InvalidProposalId => "Proposal not found",
            VotingError::NoProposals => "No proposals to tally",
        }
    }
}
