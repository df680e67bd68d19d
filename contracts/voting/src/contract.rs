use soroban_sdk::{contract, contractimpl, Address, Env, String, Symbol};

use crate::{
    errors::VotingError,
    storage,
    types::{Proposal, Voter, WorkflowStatus},
};

#[contract]
pub struct VotingContract;

#[contractimpl]
impl VotingContract {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Initialize the contract with the ballot administrator.
    /// Can only be called once. The workflow starts in `RegisteringVoters`.
    pub fn initialize(env: Env, admin: Address) -> Result<(), VotingError> {
        if storage::has_admin(&env) {
            return Err(VotingError::AlreadyInitialized);
        }
        admin.require_auth();
        storage::set_admin(&env, &admin);
        storage::set_status(&env, WorkflowStatus::RegisteringVoters);

        env.events().publish(
            (soroban_sdk::symbol_short!("init"),),
            (admin,),
        );

        Ok(())
    }

    // ── Voter Registration ───────────────────────────────────────────────────

    /// Register an address on the voter whitelist.
    /// Admin only; allowed only while voter registration is open.
    pub fn add_voter(env: Env, admin: Address, voter: Address) -> Result<(), VotingError> {
        Self::require_admin(&env, &admin)?;
        Self::require_status(&env, WorkflowStatus::RegisteringVoters)?;

        if storage::get_voter(&env, &voter).is_registered {
            return Err(VotingError::AlreadyRegistered);
        }

        let record = Voter {
            is_registered: true,
            has_voted: false,
            voted_proposal_id: 0,
        };
        storage::save_voter(&env, &voter, &record);

        env.events()
            .publish((Symbol::new(&env, "voter_registered"),), voter);

        Ok(())
    }

    /// Get the registration and ballot record for an address.
    /// Unknown addresses yield the zero-value record rather than an error.
    pub fn get_voter(env: Env, voter: Address) -> Voter {
        storage::get_voter(&env, &voter)
    }

    // ── Proposal Registration ────────────────────────────────────────────────

    /// Submit a proposal and return its index.
    /// Registered voters only; allowed only while proposal registration is open.
    /// Indices are assigned densely in submission order, starting at 0.
    pub fn add_proposal(
        env: Env,
        voter: Address,
        description: String,
    ) -> Result<u32, VotingError> {
        Self::require_voter(&env, &voter)?;
        Self::require_status(&env, WorkflowStatus::ProposalsRegistrationStarted)?;

        if description.len() == 0 {
            return Err(VotingError::EmptyProposal);
        }

        let proposal = Proposal {
            description,
            vote_count: 0,
        };
        let proposal_id = storage::append_proposal(&env, &proposal);

        env.events().publish(
            (Symbol::new(&env, "proposal_registered"), proposal_id),
            voter,
        );

        Ok(proposal_id)
    }

    /// Retrieve a single proposal by index.
    pub fn get_one_proposal(env: Env, proposal_id: u32) -> Result<Proposal, VotingError> {
        storage::get_proposal(&env, proposal_id).ok_or(VotingError::InvalidProposalId)
    }

    /// Get the current total number of proposals.
    pub fn proposal_count(env: Env) -> u32 {
        storage::get_proposal_count(&env)
    }

    // ── Voting ───────────────────────────────────────────────────────────────

    /// Cast a vote for a proposal. Registered voters only, one vote each;
    /// allowed only while the voting session is open.
    pub fn set_vote(env: Env, voter: Address, proposal_id: u32) -> Result<(), VotingError> {
        let mut record = Self::require_voter(&env, &voter)?;
        Self::require_status(&env, WorkflowStatus::VotingSessionStarted)?;

        if record.has_voted {
            return Err(VotingError::AlreadyVoted);
        }

        let mut proposal =
            storage::get_proposal(&env, proposal_id).ok_or(VotingError::InvalidProposalId)?;

        proposal.vote_count += 1;
        storage::save_proposal(&env, proposal_id, &proposal);

        record.has_voted = true;
        record.voted_proposal_id = proposal_id;
        storage::save_voter(&env, &voter, &record);

        env.events()
            .publish((Symbol::new(&env, "vote_cast"), proposal_id), voter);

        Ok(())
    }

    // ── Workflow Transitions ─────────────────────────────────────────────────

    /// Open proposal registration. Admin only.
    pub fn start_proposals_registering(env: Env, admin: Address) -> Result<(), VotingError> {
        Self::require_admin(&env, &admin)?;
        Self::advance_status(&env, WorkflowStatus::ProposalsRegistrationStarted)
    }

    /// Close proposal registration. Admin only.
    pub fn end_proposals_registering(env: Env, admin: Address) -> Result<(), VotingError> {
        Self::require_admin(&env, &admin)?;
        Self::advance_status(&env, WorkflowStatus::ProposalsRegistrationEnded)
    }

    /// Open the voting session. Admin only.
    pub fn start_voting_session(env: Env, admin: Address) -> Result<(), VotingError> {
        Self::require_admin(&env, &admin)?;
        Self::advance_status(&env, WorkflowStatus::VotingSessionStarted)
    }

    /// Close the voting session. Admin only.
    pub fn end_voting_session(env: Env, admin: Address) -> Result<(), VotingError> {
        Self::require_admin(&env, &admin)?;
        Self::advance_status(&env, WorkflowStatus::VotingSessionEnded)
    }

    // ── Tally ────────────────────────────────────────────────────────────────

    /// Compute and store the winning proposal, then close the workflow.
    /// Admin only; allowed only once the voting session has ended.
    ///
    /// The winner is the proposal with the most votes; on a tie the
    /// lowest-index proposal wins. Returns the winning index.
    pub fn tally_votes(env: Env, admin: Address) -> Result<u32, VotingError> {
        Self::require_admin(&env, &admin)?;
        Self::require_status(&env, WorkflowStatus::VotingSessionEnded)?;

        let count = storage::get_proposal_count(&env);
        if count == 0 {
            return Err(VotingError::NoProposals);
        }

        let mut winning_id = 0u32;
        let mut winning_count = 0u32;
        for id in 0..count {
            // Indices below `count` are dense, so the lookup always succeeds
            if let Some(proposal) = storage::get_proposal(&env, id) {
                if proposal.vote_count > winning_count {
                    winning_id = id;
                    winning_count = proposal.vote_count;
                }
            }
        }

        storage::set_winning_proposal(&env, winning_id);
        Self::advance_status(&env, WorkflowStatus::VotesTallied)?;

        env.events().publish(
            (Symbol::new(&env, "votes_tallied"),),
            (winning_id, winning_count),
        );

        Ok(winning_id)
    }

    // ── Read-only Queries ────────────────────────────────────────────────────

    /// Current phase of the workflow.
    pub fn workflow_status(env: Env) -> WorkflowStatus {
        storage::get_status(&env)
    }

    /// Index of the winning proposal. Zero until `tally_votes` has run.
    pub fn winning_proposal_id(env: Env) -> u32 {
        storage::get_winning_proposal(&env)
    }

    /// Get the ballot administrator.
    pub fn get_admin(env: Env) -> Result<Address, VotingError> {
        storage::get_admin(&env).ok_or(VotingError::NotInitialized)
    }

    // ── Private Helpers ──────────────────────────────────────────────────────

    fn require_admin(env: &Env, caller: &Address) -> Result<(), VotingError> {
        caller.require_auth();
        let admin = storage::get_admin(env).ok_or(VotingError::NotInitialized)?;
        if *caller != admin {
            return Err(VotingError::AccessDenied);
        }
        Ok(())
    }

    fn require_voter(env: &Env, caller: &Address) -> Result<Voter, VotingError> {
        caller.require_auth();
        let record = storage::get_voter(env, caller);
        if !record.is_registered {
            return Err(VotingError::NotVoter);
        }
        Ok(record)
    }

    fn require_status(env: &Env, expected: WorkflowStatus) -> Result<(), VotingError> {
        if storage::get_status(env) != expected {
            return Err(VotingError::WrongPhase);
        }
        Ok(())
    }

    /// Moves the workflow to `target`, enforcing the forward-only transition
    /// table, and emits the status change.
    fn advance_status(env: &Env, target: WorkflowStatus) -> Result<(), VotingError> {
        let current = storage::get_status(env);
        if !current.can_transition_to(target) {
            return Err(VotingError::WrongPhase);
        }
        storage::set_status(env, target);

        env.events()
            .publish((Symbol::new(env, "status_change"),), (current, target));

        Ok(())
    }
}
