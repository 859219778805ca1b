use soroban_sdk::{
    Address, Env, String, Symbol, contract, contractimpl, contracttype, log, symbol_short,
};

use crate::aggregator::{IsAggregator, IsAggregatorUpdater};
use crate::atv_types::*;
use crate::error::Error;
use crate::index_types::{RoundCommitted, UpdaterChanged};
use crate::ledger::RoundLedger;
use crate::price::compute_price;
use crate::sources::{read_reference, read_vault};

const ADMIN_KEY: Symbol = symbol_short!("ADMIN");
const STORAGE: Symbol = symbol_short!("STORAGE");

/// Version of the feed interface served by this contract
const FEED_VERSION: u32 = 1;

#[contracttype]
#[derive(Clone, Debug)]
pub struct AtvOracleStorage {
    /// Account allowed to trigger price updates
    updater: Address,
    /// Feed name ("ATV / USD", etc.)
    description: String,
    /// Decimals of the vault's reserve and share quantities
    vault_units: VaultUnits,
}

impl AtvOracleStorage {
    pub fn get_state(env: &Env) -> AtvOracleStorage {
        env.storage().instance().get(&STORAGE).unwrap()
    }

    pub fn set_state(env: &Env, storage: &AtvOracleStorage) {
        env.storage().instance().set(&STORAGE, &storage);
    }
}

#[contract]
pub struct AtvOracle;

#[contractimpl]
impl AtvOracle {
    pub fn __constructor(
        env: &Env,
        admin: Address,
        updater: Address,
        description: String,
        vault_units: VaultUnits,
    ) -> Result<(), Error> {
        if vault_units.asset_decimals > MAX_DECIMALS || vault_units.share_decimals > MAX_DECIMALS {
            return Err(Error::InvalidConfig);
        }
        env.storage().instance().set(&ADMIN_KEY, &admin);
        AtvOracleStorage::set_state(
            env,
            &AtvOracleStorage {
                updater,
                description,
                vault_units,
            },
        );
        Ok(())
    }

    fn require_admin(env: &Env) -> Address {
        let admin = Self::admin(env);
        admin.require_auth();
        admin
    }

    fn require_updater(env: &Env) {
        AtvOracleStorage::get_state(env).updater.require_auth();
    }

    /// Get the admin address
    pub fn admin(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&ADMIN_KEY)
            .expect("Admin must be set")
    }

    /// Get the address allowed to trigger price updates
    pub fn updater(env: &Env) -> Address {
        AtvOracleStorage::get_state(env).updater
    }

    /// Replace the updater. Admin-only.
    pub fn set_updater(env: &Env, updater: Address) {
        let admin = Self::require_admin(env);
        let mut state = AtvOracleStorage::get_state(env);
        state.updater = updater.clone();
        AtvOracleStorage::set_state(env, &state);
        UpdaterChanged { admin, updater }.publish(env);
    }

    /// Decimals of the vault quantities this oracle was configured with
    pub fn vault_units(env: &Env) -> VaultUnits {
        AtvOracleStorage::get_state(env).vault_units
    }

    /// Number of committed rounds
    pub fn round_count(env: &Env) -> u64 {
        RoundLedger::latest_round_id(env)
    }
}

#[contractimpl]
impl IsAggregatorUpdater for AtvOracle {
    fn calculate_and_store_price(
        env: &Env,
        vault: Address,
        reference: Address,
    ) -> Result<u64, Error> {
        Self::require_updater(env);
        let state = AtvOracleStorage::get_state(env);

        // Nothing is written until the price is fully computed
        let vault_value = read_vault(env, &vault, &state.vault_units)?;
        let reference_value = read_reference(env, &reference)?;
        let price = compute_price(env, &vault_value, &reference_value)?;

        let updated_at = env.ledger().timestamp();
        let round_id = RoundLedger::append(env, price, updated_at)?;
        log!(env, "round committed", round_id, price);

        RoundCommitted {
            round_id,
            price,
            updated_at,
            vault,
            reference,
        }
        .publish(env);
        Ok(round_id)
    }
}

#[contractimpl]
impl IsAggregator for AtvOracle {
    fn decimals(_env: &Env) -> u32 {
        PRICE_DECIMALS
    }

    fn description(env: &Env) -> String {
        AtvOracleStorage::get_state(env).description
    }

    fn version(_env: &Env) -> u32 {
        FEED_VERSION
    }

    fn latest_round_data(env: &Env) -> Result<RoundData, Error> {
        RoundLedger::latest(env)
    }

    fn get_round_data(env: &Env, round_id: u64) -> Result<RoundData, Error> {
        RoundLedger::get(env, round_id)
    }
}
