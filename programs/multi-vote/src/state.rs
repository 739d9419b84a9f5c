use anchor_lang::prelude::*;

use crate::error::VoteError;

// Per-creator sequence counter. Each new poll consumes the current value
// as its poll_id and bumps the counter by one.
#[account]
#[derive(InitSpace)]
pub struct PollCounter {
    // The creator this counter belongs to
    pub creator: Pubkey,

    // Number of polls this creator has created so far
    pub poll_count: u64,
}

// The Poll account stores the question, the candidate slate and the
// running tally.
#[account]
#[derive(InitSpace)]
pub struct Poll {
    // Who created this poll (only they may close it)
    pub creator: Pubkey,

    // The creator's sequence number for this poll, fixed at creation
    pub poll_id: u64,

    // The question being asked
    #[max_len(200)]
    pub question: String,

    // The candidate slate; order is significant, ballots reference
    // candidates by index
    #[max_len(8, 50)]
    pub candidates: Vec<String>,

    // Net score per candidate, index-aligned with candidates.
    // Signed: minus votes can drive an entry below zero.
    #[max_len(8)]
    pub vote_counts: Vec<i64>,

    // Number of distinct voters who have cast a ballot
    pub total_voters: u64,

    // Whether ballots are still accepted
    pub is_active: bool,

    // When this poll was created
    pub created_at: i64,

    // Maximum number of plus votes a single ballot may carry (2 or 3)
    pub max_plus_votes: u8,

    // Whether ballots on this poll may carry a minus vote
    pub allow_minus_vote: bool,
}

// Vote Record - proves that a voter has cast a ballot on a specific poll.
// Its address is derived from (poll, voter), so a second ballot from the
// same voter fails to create the account and is rejected.
#[account]
#[derive(InitSpace)]
pub struct VoteRecord {
    // Who cast this ballot
    pub voter: Pubkey,

    // Which poll it was cast on
    pub poll: Pubkey,

    // First plus vote (mandatory)
    pub vote_option_1: u8,

    // Second plus vote, if the voter cast two
    pub vote_option_2: Option<u8>,

    // Minus vote, if the voter cast one
    pub minus_vote: Option<u8>,

    // When the ballot was cast
    pub voted_at: i64,
}

impl Poll {
    // Helper method to validate a candidate index
    pub fn is_valid_candidate(&self, index: u8) -> bool {
        (index as usize) < self.candidates.len()
    }

    /// Run the full ballot validation sequence against this poll.
    ///
    /// Checks are ordered so that each failure mode is distinct: poll
    /// state, index ranges, plus-vote arity, duplicate plus target, and
    /// finally the minus-vote rules.
    pub fn validate_ballot(
        &self,
        vote_option_1: u8,
        vote_option_2: Option<u8>,
        minus_vote_index: Option<u8>,
    ) -> Result<()> {
        // Closed polls accept no ballots at all
        require!(self.is_active, VoteError::PollClosed);

        // Every supplied index must point at a candidate
        require!(
            self.is_valid_candidate(vote_option_1),
            VoteError::InvalidCandidateIndex
        );
        if let Some(second) = vote_option_2 {
            require!(
                self.is_valid_candidate(second),
                VoteError::InvalidCandidateIndex
            );
        }
        if let Some(minus) = minus_vote_index {
            require!(
                self.is_valid_candidate(minus),
                VoteError::InvalidCandidateIndex
            );
        }

        // Plus-vote arity: the first slot is mandatory, the second optional
        let plus_count = 1 + u8::from(vote_option_2.is_some());
        require!(plus_count >= 1, VoteError::MustCastAtLeastOnePlusVote);
        require!(
            plus_count <= self.max_plus_votes,
            VoteError::TooManyPlusVotes
        );

        // Both plus votes must target different candidates
        if let Some(second) = vote_option_2 {
            require!(second != vote_option_1, VoteError::DuplicateVote);
        }

        // Minus-vote rules: the poll must allow it, both plus slots must
        // be filled, and the target must not also receive a plus vote
        if let Some(minus) = minus_vote_index {
            require!(self.allow_minus_vote, VoteError::MinusVoteNotAllowed);
            require!(
                plus_count >= 2,
                VoteError::MinusVoteRequiresTwoPlusVotes
            );
            require!(
                minus != vote_option_1 && Some(minus) != vote_option_2,
                VoteError::CannotPlusAndMinusSameCandidate
            );
        }

        Ok(())
    }

    /// Apply a validated ballot to the tally: +1 per plus target, -1 for
    /// the minus target, and one more distinct voter.
    pub fn apply_ballot(
        &mut self,
        vote_option_1: u8,
        vote_option_2: Option<u8>,
        minus_vote_index: Option<u8>,
    ) -> Result<()> {
        let first = vote_option_1 as usize;
        self.vote_counts[first] = self.vote_counts[first]
            .checked_add(1)
            .ok_or(VoteError::MathOverflow)?;

        if let Some(second) = vote_option_2 {
            let second = second as usize;
            self.vote_counts[second] = self.vote_counts[second]
                .checked_add(1)
                .ok_or(VoteError::MathOverflow)?;
        }

        if let Some(minus) = minus_vote_index {
            let minus = minus as usize;
            self.vote_counts[minus] = self.vote_counts[minus]
                .checked_sub(1)
                .ok_or(VoteError::MathOverflow)?;
        }

        self.total_voters = self
            .total_voters
            .checked_add(1)
            .ok_or(VoteError::MathOverflow)?;

        Ok(())
    }

    /// Flip the poll inactive. Closing is terminal and one-way.
    pub fn close(&mut self) -> Result<()> {
        require!(self.is_active, VoteError::PollAlreadyClosed);
        self.is_active = false;
        Ok(())
    }

    // Helper method to get the current leader (index and net score)
    pub fn leading_candidate(&self) -> Option<(usize, i64)> {
        let mut best = *self.vote_counts.first()?;
        let mut leader = 0;

        for (index, &score) in self.vote_counts.iter().enumerate().skip(1) {
            if score > best {
                best = score;
                leader = index;
            }
        }

        Some((leader, best))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mock poll with four candidates, mirroring a typical on-chain layout
    fn test_poll(max_plus_votes: u8, allow_minus_vote: bool) -> Poll {
        let candidates = vec![
            "Solana".to_string(),
            "Ethereum".to_string(),
            "Polygon".to_string(),
            "Avalanche".to_string(),
        ];

        Poll {
            creator: Pubkey::default(),
            poll_id: 0,
            question: "Which blockchain is best for smart contracts?".to_string(),
            vote_counts: vec![0; candidates.len()],
            candidates,
            total_voters: 0,
            is_active: true,
            created_at: 1_700_000_000,
            max_plus_votes,
            allow_minus_vote,
        }
    }

    #[test]
    fn test_accepts_single_plus_vote() {
        let poll = test_poll(2, false);
        assert!(poll.validate_ballot(0, None, None).is_ok());
    }

    #[test]
    fn test_accepts_full_ballot() {
        let poll = test_poll(2, true);
        assert!(poll.validate_ballot(2, Some(3), Some(0)).is_ok());
    }

    #[test]
    fn test_rejects_ballot_on_closed_poll() {
        let mut poll = test_poll(2, true);
        poll.is_active = false;

        assert_eq!(
            poll.validate_ballot(0, Some(1), None).unwrap_err(),
            VoteError::PollClosed.into()
        );

        // Poll state is checked before anything else, even a bad index
        assert_eq!(
            poll.validate_ballot(200, None, None).unwrap_err(),
            VoteError::PollClosed.into()
        );
    }

    #[test]
    fn test_rejects_out_of_range_indexes() {
        let poll = test_poll(2, true);

        assert_eq!(
            poll.validate_ballot(4, None, None).unwrap_err(),
            VoteError::InvalidCandidateIndex.into()
        );
        assert_eq!(
            poll.validate_ballot(0, Some(9), None).unwrap_err(),
            VoteError::InvalidCandidateIndex.into()
        );
        assert_eq!(
            poll.validate_ballot(0, Some(1), Some(200)).unwrap_err(),
            VoteError::InvalidCandidateIndex.into()
        );
    }

    #[test]
    fn test_rejects_duplicate_plus_votes() {
        let poll = test_poll(2, true);

        assert_eq!(
            poll.validate_ballot(0, Some(0), None).unwrap_err(),
            VoteError::DuplicateVote.into()
        );
    }

    #[test]
    fn test_rejects_minus_vote_when_disabled() {
        let poll = test_poll(2, false);

        assert_eq!(
            poll.validate_ballot(0, Some(1), Some(2)).unwrap_err(),
            VoteError::MinusVoteNotAllowed.into()
        );
    }

    #[test]
    fn test_minus_vote_requires_both_plus_slots() {
        let poll = test_poll(2, true);

        assert_eq!(
            poll.validate_ballot(0, None, Some(2)).unwrap_err(),
            VoteError::MinusVoteRequiresTwoPlusVotes.into()
        );
    }

    #[test]
    fn test_rejects_minus_vote_on_plus_target() {
        let poll = test_poll(2, true);

        assert_eq!(
            poll.validate_ballot(0, Some(1), Some(0)).unwrap_err(),
            VoteError::CannotPlusAndMinusSameCandidate.into()
        );
        assert_eq!(
            poll.validate_ballot(0, Some(1), Some(1)).unwrap_err(),
            VoteError::CannotPlusAndMinusSameCandidate.into()
        );
    }

    #[test]
    fn test_tally_conservation_across_ballots() {
        let mut poll = test_poll(2, true);

        // Alice: plus votes for candidates 0 and 1
        poll.apply_ballot(0, Some(1), None).unwrap();
        assert_eq!(poll.vote_counts, vec![1, 1, 0, 0]);
        assert_eq!(poll.total_voters, 1);

        // Bob: plus votes for 2 and 3, minus vote for 0
        poll.apply_ballot(2, Some(3), Some(0)).unwrap();
        assert_eq!(poll.vote_counts, vec![0, 1, 1, 1]);
        assert_eq!(poll.total_voters, 2);
    }

    #[test]
    fn test_minus_votes_can_drive_score_negative() {
        let mut poll = test_poll(2, true);

        poll.apply_ballot(1, Some(2), Some(0)).unwrap();
        assert_eq!(poll.vote_counts[0], -1);
        assert_eq!(poll.total_voters, 1);
    }

    #[test]
    fn test_tally_overflow_is_rejected() {
        let mut poll = test_poll(2, true);
        poll.vote_counts[0] = i64::MAX;

        assert_eq!(
            poll.apply_ballot(0, None, None).unwrap_err(),
            VoteError::MathOverflow.into()
        );
    }

    #[test]
    fn test_closure_is_terminal() {
        let mut poll = test_poll(2, true);

        poll.close().unwrap();
        assert!(!poll.is_active);

        // A second closure and any later ballot are both rejected
        assert_eq!(
            poll.close().unwrap_err(),
            VoteError::PollAlreadyClosed.into()
        );
        assert_eq!(
            poll.validate_ballot(0, Some(1), None).unwrap_err(),
            VoteError::PollClosed.into()
        );
    }

    #[test]
    fn test_leading_candidate_tracks_net_score() {
        let mut poll = test_poll(2, true);
        assert_eq!(poll.leading_candidate(), Some((0, 0)));

        poll.apply_ballot(2, Some(1), Some(0)).unwrap();
        poll.apply_ballot(2, Some(3), Some(0)).unwrap();
        assert_eq!(poll.leading_candidate(), Some((2, 2)));

        poll.vote_counts.clear();
        assert_eq!(poll.leading_candidate(), None);
    }
}
