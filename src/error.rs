// Definition of crate errors.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("cannot parse state '{input}': {reason}")]
    ParseState { input: String, reason: String },

    #[error("state {state} does not fit jug capacities ({capacity_a}, {capacity_b})")]
    StateOutOfBounds {
        state: String,
        capacity_a: u32,
        capacity_b: u32,
    },

    #[error("action '{action}' is not legal in state {state}")]
    IllegalTransition { action: String, state: String },

    #[error("unknown puzzle '{name}'")]
    UnknownPuzzle { name: String },
}

pub type Result<T> = std::result::Result<T, Error>;
