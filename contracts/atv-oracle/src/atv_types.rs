use soroban_sdk::contracttype;

/// Decimals of every price published by the oracle
pub const PRICE_DECIMALS: u32 = 8;

/// Precision the vault's per-share value is normalized to
pub const INTERNAL_DECIMALS: u32 = 18;

/// Upper bound on decimals accepted from collaborators and configuration
pub const MAX_DECIMALS: u32 = 36;

/// Round record (price feed compatible)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundData {
    /// Round identifier, starting at 1
    pub round_id: u64,
    /// Price with `PRICE_DECIMALS` decimals
    pub price: i128,
    /// Timestamp the round computation started
    pub started_at: u64,
    /// Timestamp the round was committed
    pub updated_at: u64,
    /// Round in which the reported price was computed
    pub answered_in_round: u64,
}

/// Decimal precisions of the vault's quantities.
///
/// The vault exposes no decimals query, so these are fixed when the oracle is
/// constructed.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VaultUnits {
    /// Decimals of `reserve_quantity`
    pub asset_decimals: u32,
    /// Decimals of `share_supply`
    pub share_decimals: u32,
}

/// Non-negative fixed-point value read from a collaborator
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NormalizedValue {
    pub magnitude: u128,
    pub decimals: u32,
}

impl NormalizedValue {
    #[must_use]
    pub fn new(magnitude: u128, decimals: u32) -> Self {
        NormalizedValue {
            magnitude,
            decimals,
        }
    }
}
