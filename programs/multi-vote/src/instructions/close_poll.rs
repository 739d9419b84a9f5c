use anchor_lang::prelude::*;

use crate::error::VoteError;
use crate::state::Poll;

// Accounts needed for closing a poll
#[derive(Accounts)]
pub struct ClosePoll<'info> {
    // The poll creator (must sign the transaction)
    pub creator: Signer<'info>,

    // The poll to close; must belong to the signing creator
    #[account(
        mut,
        has_one = creator @ VoteError::Unauthorized
    )]
    pub poll: Account<'info, Poll>,
}

impl<'info> ClosePoll<'info> {
    pub fn close_poll(&mut self) -> Result<()> {
        // Rejects with PollAlreadyClosed if the poll is no longer active
        Poll::close(&mut self.poll)?;

        // Get current time
        let current_time = Clock::get()?.unix_timestamp;

        msg!("Poll closed successfully!");
        msg!("Poll ID: {}", self.poll.poll_id);
        msg!("Total voters: {}", self.poll.total_voters);

        // Log the final tally for each candidate
        for (candidate, score) in self
            .poll
            .candidates
            .iter()
            .zip(self.poll.vote_counts.iter())
        {
            msg!("  {}: {} net votes", candidate, score);
        }

        if let Some((leader, score)) = self.poll.leading_candidate() {
            msg!(
                "Leader: '{}' with a net score of {}",
                self.poll.candidates[leader],
                score
            );
        }

        emit!(PollClosed {
            poll: self.poll.key(),
            creator: self.creator.key(),
            total_voters: self.poll.total_voters,
            closed_at: current_time,
        });

        Ok(())
    }
}

// Emitted when a poll is closed
#[event]
pub struct PollClosed {
    pub poll: Pubkey,
    pub creator: Pubkey,
    pub total_voters: u64,
    pub closed_at: i64,
}
