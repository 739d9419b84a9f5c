use anchor_lang::prelude::*;

// Custom error types for the voting ledger
#[error_code]
pub enum VoteError {
    #[msg("Poll must have between 3 and 8 candidates")]
    InvalidCandidateCount,

    #[msg("Max plus votes must be between 2 and 3")]
    InvalidMaxVotes,

    #[msg("Question is too long (max 200 characters)")]
    QuestionTooLong,

    #[msg("Candidate name is too long (max 50 characters)")]
    CandidateNameTooLong,

    #[msg("Poll is closed")]
    PollClosed,

    #[msg("Too many plus votes")]
    TooManyPlusVotes,

    #[msg("Must cast at least one plus vote")]
    MustCastAtLeastOnePlusVote,

    #[msg("Cannot vote for the same candidate twice")]
    DuplicateVote,

    #[msg("Invalid candidate index")]
    InvalidCandidateIndex,

    #[msg("Minus vote is not allowed for this poll")]
    MinusVoteNotAllowed,

    #[msg("Minus vote requires at least two plus votes")]
    MinusVoteRequiresTwoPlusVotes,

    #[msg("Cannot cast plus and minus vote for same candidate")]
    CannotPlusAndMinusSameCandidate,

    #[msg("Poll is already closed")]
    PollAlreadyClosed,

    #[msg("Unauthorized: Only poll creator can close poll")]
    Unauthorized,

    #[msg("Mathematical overflow in vote tally")]
    MathOverflow,
}
