use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::{Poll, VoteRecord};

// Accounts needed for casting a ballot
#[derive(Accounts)]
pub struct CastVote<'info> {
    // The person casting the ballot (must sign the transaction)
    #[account(mut)]
    pub voter: Signer<'info>,

    // The poll being voted on (tally will be updated)
    #[account(mut)]
    pub poll: Account<'info, Poll>,

    // Vote record PDA - created here, so a voter's second ballot on the
    // same poll fails at account creation
    #[account(
        init,
        payer = voter,
        space = DISCRIMINATOR_SIZE + VoteRecord::INIT_SPACE,
        seeds = [VOTE_RECORD_SEED, poll.key().as_ref(), voter.key().as_ref()],
        bump
    )]
    pub vote_record: Account<'info, VoteRecord>,

    // Required system program for account creation
    pub system_program: Program<'info, System>,
}

impl<'info> CastVote<'info> {
    pub fn cast_vote(
        &mut self,
        vote_option_1: u8,
        vote_option_2: Option<u8>,
        minus_vote_index: Option<u8>,
        _bumps: &CastVoteBumps,
    ) -> Result<()> {
        self.poll
            .validate_ballot(vote_option_1, vote_option_2, minus_vote_index)?;

        // Get current time
        let current_time = Clock::get()?.unix_timestamp;

        // Record and tally move in the same instruction; a ballot is
        // never counted without the record that blocks its replay
        self.vote_record.set_inner(VoteRecord {
            voter: self.voter.key(),
            poll: self.poll.key(),
            vote_option_1,
            vote_option_2,
            minus_vote: minus_vote_index,
            voted_at: current_time,
        });

        self.poll
            .apply_ballot(vote_option_1, vote_option_2, minus_vote_index)?;

        emit!(VoteCast {
            poll: self.poll.key(),
            voter: self.voter.key(),
            total_voters: self.poll.total_voters,
            voted_at: current_time,
        });

        msg!("Vote cast successfully!");
        msg!("Voter: {}", self.voter.key());
        msg!("Poll: {}", self.poll.key());
        msg!("Total voters: {}", self.poll.total_voters);

        Ok(())
    }
}

// Emitted once per accepted ballot
#[event]
pub struct VoteCast {
    pub poll: Pubkey,
    pub voter: Pubkey,
    pub total_voters: u64,
    pub voted_at: i64,
}
