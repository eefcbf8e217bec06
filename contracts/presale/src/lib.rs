#![no_std]
#![allow(clippy::too_many_arguments)]

mod admission;
mod contract;
mod errors;
mod events;
mod ledger;
mod storage;
mod treasury;
mod types;
mod vesting;


pub use admission::{SignatureVerifier, SignatureVerifierClient};
pub use contract::{PresaleContract, PresaleContractClient};
pub use errors::Error;
pub use treasury::{TokenTreasury, Treasury};
pub use types::*;
