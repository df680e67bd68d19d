#![no_std]

mod contract;
mod errors;
mod storage;
mod types;

pub use contract::{VotingContract, VotingContractClient};
pub use errors::VotingError;
pub use types::{Proposal, Voter, WorkflowStatus};
