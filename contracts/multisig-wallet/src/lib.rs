pub mod contract;
mod error;
pub mod forward;
pub mod msg;
pub mod state;

pub use crate::error::{ConfigError, ContractError};
