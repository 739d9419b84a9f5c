// PDA Seeds for deterministic address generation

// Seed for PollCounter PDAs: ["poll_counter", creator.key()]
// One counter per creator, created once and never deleted
pub const POLL_COUNTER_SEED: &[u8] = b"poll_counter";

// Seed for Poll PDAs: ["poll", creator.key(), poll_id]
// The poll_id is the creator's counter value at creation time
pub const POLL_SEED: &[u8] = b"poll";

// Seed for VoteRecord PDAs: ["vote_record", poll.key(), voter.key()]
// This ensures one vote record per voter per poll
pub const VOTE_RECORD_SEED: &[u8] = b"vote_record";

// Candidate slate bounds
pub const MIN_CANDIDATES: usize = 3;
pub const MAX_CANDIDATES: usize = 8;

// Text length limits (bytes)
pub const MAX_QUESTION_LENGTH: usize = 200;
pub const MAX_CANDIDATE_NAME_LENGTH: usize = 50;

// A ballot carries one or two plus votes; polls cap it at 2 or 3
pub const MIN_PLUS_VOTES: u8 = 2;
pub const MAX_PLUS_VOTES: u8 = 3;

// Anchor discriminator size (8 bytes)
pub const DISCRIMINATOR_SIZE: usize = 8;

/// Check that a candidate slate has an allowed number of entries
pub fn is_valid_candidate_count(count: usize) -> bool {
    (MIN_CANDIDATES..=MAX_CANDIDATES).contains(&count)
}

/// Check that a poll's plus-vote cap is an allowed value
pub fn is_valid_max_plus_votes(max_plus_votes: u8) -> bool {
    (MIN_PLUS_VOTES..=MAX_PLUS_VOTES).contains(&max_plus_votes)
}
