use soroban_sdk::{Address, Env, contractclient};

use crate::atv_types::{INTERNAL_DECIMALS, MAX_DECIMALS, NormalizedValue, VaultUnits};
use crate::error::Error;
use crate::fixed_point::{mul_div_rescaled, pow10};

/// Read interface of the vault holding the tracked asset
#[contractclient(name = "VaultClient")]
pub trait VaultInterface {
    /// Total asset reserves held by the vault
    fn reserve_quantity(env: Env) -> i128;

    /// Total shares issued against the reserves
    fn share_supply(env: Env) -> i128;
}

/// Read interface of the storage contract holding the reference value
#[contractclient(name = "ReferenceClient")]
pub trait ReferenceInterface {
    /// Returns `(magnitude, decimals)`
    fn reference_value(env: Env) -> (i128, u32);
}

fn non_negative(value: i128) -> Result<u128, Error> {
    u128::try_from(value).map_err(|_| Error::InvalidInput)
}

/// Read the vault and return its per-share value at `INTERNAL_DECIMALS`.
pub fn read_vault(
    env: &Env,
    vault: &Address,
    units: &VaultUnits,
) -> Result<NormalizedValue, Error> {
    let client = VaultClient::new(env, vault);
    let reserve = match client.try_reserve_quantity() {
        Ok(Ok(reserve)) => reserve,
        _ => return Err(Error::CollaboratorUnavailable),
    };
    let supply = match client.try_share_supply() {
        Ok(Ok(supply)) => supply,
        _ => return Err(Error::CollaboratorUnavailable),
    };

    let reserve = non_negative(reserve)?;
    let supply = non_negative(supply)?;
    if supply == 0 {
        return Err(Error::InvalidVaultState);
    }

    // reserve * 10^share_decimals / supply is at asset_decimals precision
    let per_share = mul_div_rescaled(
        env,
        reserve,
        pow10(units.share_decimals)?,
        supply,
        units.asset_decimals,
        INTERNAL_DECIMALS,
    )?;
    Ok(NormalizedValue::new(per_share, INTERNAL_DECIMALS))
}

/// Read the reference contract, keeping the decimals it reports.
pub fn read_reference(env: &Env, reference: &Address) -> Result<NormalizedValue, Error> {
    let client = ReferenceClient::new(env, reference);
    let (magnitude, decimals) = match client.try_reference_value() {
        Ok(Ok(value)) => value,
        _ => return Err(Error::CollaboratorUnavailable),
    };
    if decimals > MAX_DECIMALS {
        return Err(Error::CollaboratorUnavailable);
    }
    Ok(NormalizedValue::new(non_negative(magnitude)?, decimals))
}
