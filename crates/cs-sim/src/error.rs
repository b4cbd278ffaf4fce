use cs_core::{CoreError, Tick};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("fleet still not drained at {tick}; drain limit is {limit} ticks past the horizon")]
    DrainExceeded {
        tick:  Tick,
        limit: u64,
    },
}

pub type SimResult<T> = Result<T, SimError>;
