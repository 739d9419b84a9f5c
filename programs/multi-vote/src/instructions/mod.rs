// Export all instruction modules

pub mod cast_vote;
pub mod close_poll;
pub mod create_poll;
pub mod initialize_poll_counter;

// Re-export the instruction structs for easy access
pub use cast_vote::*;
pub use close_poll::*;
pub use create_poll::*;
pub use initialize_poll_counter::*;
