use soroban_sdk::{Address, Env, String};

use crate::{Error, RoundData};

/// Round-based price feed read interface
pub trait IsAggregator {
    /// Number of decimals of every reported price
    fn decimals(env: &Env) -> u32;

    /// Human readable name of the feed
    fn description(env: &Env) -> String;

    /// Version of the feed interface
    fn version(env: &Env) -> u32;

    /// Most recently committed round
    fn latest_round_data(env: &Env) -> Result<RoundData, Error>;

    /// Round with the given id
    fn get_round_data(env: &Env, round_id: u64) -> Result<RoundData, Error>;
}

/// Update interface; only the configured updater may invoke it
pub trait IsAggregatorUpdater {
    /// Read the vault and reference contracts, compute a price and commit it
    /// as a new round. Returns the new round id.
    fn calculate_and_store_price(
        env: &Env,
        vault: Address,
        reference: Address,
    ) -> Result<u64, Error>;
}
