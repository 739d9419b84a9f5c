use anchor_lang::prelude::*;

// Import our modules
pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;

// Import instruction handlers
use instructions::*;

declare_id!("GmVVTa2jWgisJZAwbXHEVttEYxYcHDcLHBBxnD1mUmTq");

#[program]
pub mod multi_vote {
    use super::*;

    /// Provision the per-creator sequence counter (once per creator)
    pub fn initialize_poll_counter(ctx: Context<InitializePollCounter>) -> Result<()> {
        ctx.accounts.initialize_poll_counter(&ctx.bumps)
    }

    /// Create a new poll with a question and a bounded candidate slate
    pub fn create_poll(
        ctx: Context<CreatePoll>,
        question: String,
        candidates: Vec<String>,
        max_plus_votes: u8,
        allow_minus_vote: bool,
    ) -> Result<()> {
        ctx.accounts
            .create_poll(question, candidates, max_plus_votes, allow_minus_vote, &ctx.bumps)
    }

    /// Cast a ballot: one or two plus votes and optionally one minus vote
    pub fn cast_vote(
        ctx: Context<CastVote>,
        vote_option_1: u8,
        vote_option_2: Option<u8>,
        minus_vote_index: Option<u8>,
    ) -> Result<()> {
        ctx.accounts
            .cast_vote(vote_option_1, vote_option_2, minus_vote_index, &ctx.bumps)
    }

    /// Close a poll (creator only); a closed poll accepts no further ballots
    pub fn close_poll(ctx: Context<ClosePoll>) -> Result<()> {
        ctx.accounts.close_poll()
    }
}
