use soroban_sdk::{Env, Symbol, contracttype, symbol_short};

use crate::atv_types::RoundData;
use crate::error::Error;

// Id of the most recently committed round; absent until the first append
const LATEST_ROUND: Symbol = symbol_short!("LATEST");

#[contracttype]
enum DataKey {
    Round(u64),
}

/// Append-only round history.
///
/// Sole owner of the round entries and the latest-round counter.
pub struct RoundLedger;

impl RoundLedger {
    /// Id of the latest committed round, or 0 when empty
    pub fn latest_round_id(env: &Env) -> u64 {
        env.storage()
            .instance()
            .get(&LATEST_ROUND)
            .unwrap_or_default()
    }

    /// Commit a new round and return its id
    pub fn append(env: &Env, price: i128, timestamp: u64) -> Result<u64, Error> {
        let round_id = Self::latest_round_id(env)
            .checked_add(1)
            .ok_or(Error::StorageExhausted)?;
        let round = RoundData {
            round_id,
            price,
            started_at: timestamp,
            updated_at: timestamp,
            answered_in_round: round_id,
        };

        let key = DataKey::Round(round_id);
        env.storage().persistent().set(&key, &round);
        let ttl = env.storage().max_ttl();
        env.storage().persistent().extend_ttl(&key, ttl, ttl);
        env.storage().instance().set(&LATEST_ROUND, &round_id);
        Ok(round_id)
    }

    pub fn latest(env: &Env) -> Result<RoundData, Error> {
        match Self::latest_round_id(env) {
            0 => Err(Error::NoRoundsYet),
            round_id => Self::get(env, round_id),
        }
    }

    pub fn get(env: &Env, round_id: u64) -> Result<RoundData, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Round(round_id))
            .ok_or(Error::RoundNotFound)
    }
}
