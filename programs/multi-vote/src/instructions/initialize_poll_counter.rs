use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::PollCounter;

// Accounts needed for provisioning a creator's poll counter
#[derive(Accounts)]
pub struct InitializePollCounter<'info> {
    // The creator this counter will belong to (must sign the transaction)
    #[account(mut)]
    pub creator: Signer<'info>,

    // The counter account (PDA) - one per creator; a second
    // initialization attempt fails because the address is already taken
    #[account(
        init,
        payer = creator,
        space = DISCRIMINATOR_SIZE + PollCounter::INIT_SPACE,
        seeds = [POLL_COUNTER_SEED, creator.key().as_ref()],
        bump
    )]
    pub poll_counter: Account<'info, PollCounter>,

    // Required system program for account creation
    pub system_program: Program<'info, System>,
}

impl<'info> InitializePollCounter<'info> {
    pub fn initialize_poll_counter(
        &mut self,
        _bumps: &InitializePollCounterBumps,
    ) -> Result<()> {
        self.poll_counter.set_inner(PollCounter {
            creator: self.creator.key(),
            poll_count: 0,
        });

        msg!("Poll counter initialized");
        msg!("Creator: {}", self.creator.key());

        Ok(())
    }
}
