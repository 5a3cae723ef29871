//! Shared test helpers.
//!
//! - `pda`: program ID and PDA derivation
//! - `setup`: program deployment and pool initialization

pub mod pda;
pub mod setup;

pub use pda::*;
pub use setup::*;
