pub mod contracts;
pub mod erc20;
pub mod error;
pub mod provider;
pub mod units;

pub use erc20::*;
pub use error::*;
pub use provider::*;
