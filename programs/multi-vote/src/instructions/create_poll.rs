use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::VoteError;
use crate::state::{Poll, PollCounter};

// Accounts needed for creating a new poll
#[derive(Accounts)]
pub struct CreatePoll<'info> {
    // The person creating the poll (must sign the transaction)
    #[account(mut)]
    pub creator: Signer<'info>,

    // The creator's sequence counter; its current value becomes the new
    // poll's id and it advances by one
    #[account(
        mut,
        seeds = [POLL_COUNTER_SEED, creator.key().as_ref()],
        bump
    )]
    pub poll_counter: Account<'info, PollCounter>,

    // The poll account (PDA) - derived from the counter's current value,
    // so each of a creator's polls gets a distinct address
    #[account(
        init,
        payer = creator,
        space = DISCRIMINATOR_SIZE + Poll::INIT_SPACE,
        seeds = [POLL_SEED, creator.key().as_ref(), poll_counter.poll_count.to_le_bytes().as_ref()],
        bump
    )]
    pub poll: Account<'info, Poll>,

    // Required system program for account creation
    pub system_program: Program<'info, System>,
}

impl<'info> CreatePoll<'info> {
    pub fn create_poll(
        &mut self,
        question: String,
        candidates: Vec<String>,
        max_plus_votes: u8,
        allow_minus_vote: bool,
        _bumps: &CreatePollBumps,
    ) -> Result<()> {
        // Input validation
        validate_poll_inputs(&question, &candidates, max_plus_votes)?;

        // Get current time
        let current_time = Clock::get()?.unix_timestamp;

        let poll_id = self.poll_counter.poll_count;

        // Every candidate starts at a net score of zero
        let vote_counts = vec![0i64; candidates.len()];

        // Set up the poll account
        self.poll.set_inner(Poll {
            creator: self.creator.key(),
            poll_id,
            question,
            candidates,
            vote_counts,
            total_voters: 0,
            is_active: true,
            created_at: current_time,
            max_plus_votes,
            allow_minus_vote,
        });

        // Advance the sequence counter in the same instruction, so the
        // poll and the counter commit together or not at all
        self.poll_counter.poll_count = poll_id
            .checked_add(1)
            .ok_or(VoteError::MathOverflow)?;

        emit!(PollCreated {
            poll: self.poll.key(),
            creator: self.creator.key(),
            poll_id,
            candidate_count: self.poll.candidates.len() as u8,
            created_at: current_time,
        });

        msg!("Poll created successfully!");
        msg!("Poll ID: {}", poll_id);
        msg!("Question: {}", self.poll.question);
        msg!("Candidates: {}", self.poll.candidates.len());

        Ok(())
    }
}

/// Validate poll creation inputs.
///
/// Bounds are checked in a fixed order so the first violated one decides
/// the error: candidate count, plus-vote cap, question length, candidate
/// name lengths.
pub fn validate_poll_inputs(
    question: &str,
    candidates: &[String],
    max_plus_votes: u8,
) -> Result<()> {
    require!(
        is_valid_candidate_count(candidates.len()),
        VoteError::InvalidCandidateCount
    );

    require!(
        is_valid_max_plus_votes(max_plus_votes),
        VoteError::InvalidMaxVotes
    );

    require!(
        question.len() <= MAX_QUESTION_LENGTH,
        VoteError::QuestionTooLong
    );

    for candidate in candidates {
        require!(
            candidate.len() <= MAX_CANDIDATE_NAME_LENGTH,
            VoteError::CandidateNameTooLong
        );
    }

    Ok(())
}

// Emitted once per successful poll creation, for off-chain tracking
#[event]
pub struct PollCreated {
    pub poll: Pubkey,
    pub creator: Pubkey,
    pub poll_id: u64,
    pub candidate_count: u8,
    pub created_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate_names(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("Candidate {}", i)).collect()
    }

    #[test]
    fn test_accepts_inputs_at_the_bounds() {
        assert!(validate_poll_inputs("Favorite chain?", &candidate_names(3), 2).is_ok());
        assert!(validate_poll_inputs(&"q".repeat(200), &candidate_names(8), 3).is_ok());
        assert!(validate_poll_inputs("Q", &vec!["c".repeat(50); 4], 2).is_ok());
    }

    #[test]
    fn test_rejects_candidate_count_out_of_bounds() {
        assert_eq!(
            validate_poll_inputs("Q", &candidate_names(2), 2).unwrap_err(),
            VoteError::InvalidCandidateCount.into()
        );
        assert_eq!(
            validate_poll_inputs("Q", &candidate_names(9), 2).unwrap_err(),
            VoteError::InvalidCandidateCount.into()
        );
    }

    #[test]
    fn test_rejects_invalid_plus_vote_cap() {
        assert_eq!(
            validate_poll_inputs("Q", &candidate_names(4), 1).unwrap_err(),
            VoteError::InvalidMaxVotes.into()
        );
        assert_eq!(
            validate_poll_inputs("Q", &candidate_names(4), 4).unwrap_err(),
            VoteError::InvalidMaxVotes.into()
        );
    }

    #[test]
    fn test_rejects_oversized_text() {
        assert_eq!(
            validate_poll_inputs(&"q".repeat(201), &candidate_names(4), 2).unwrap_err(),
            VoteError::QuestionTooLong.into()
        );

        let mut candidates = candidate_names(4);
        candidates[2] = "c".repeat(51);
        assert_eq!(
            validate_poll_inputs("Q", &candidates, 2).unwrap_err(),
            VoteError::CandidateNameTooLong.into()
        );
    }

    #[test]
    fn test_first_violated_bound_wins() {
        // Candidate count is checked before the plus-vote cap
        assert_eq!(
            validate_poll_inputs("Q", &candidate_names(2), 9).unwrap_err(),
            VoteError::InvalidCandidateCount.into()
        );

        // Question length is checked before candidate names
        assert_eq!(
            validate_poll_inputs(&"q".repeat(201), &vec!["c".repeat(51); 4], 2).unwrap_err(),
            VoteError::QuestionTooLong.into()
        );
    }
}
