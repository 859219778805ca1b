#![no_std]

pub mod aggregator;
pub mod atv_oracle;
pub mod atv_types;
mod error;
pub mod fixed_point;
mod index_types;
mod ledger;
pub mod price;
pub mod sources;

pub use atv_oracle::{AtvOracle, AtvOracleClient};
pub use atv_types::*;
pub use error::Error;
pub use sources::{ReferenceClient, VaultClient};
