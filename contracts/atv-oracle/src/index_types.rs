use soroban_sdk::{Address, contractevent};

#[contractevent(topics = ["round"])]
pub struct RoundCommitted {
    #[topic]
    pub round_id: u64,
    pub price: i128,
    pub updated_at: u64,
    pub vault: Address,
    pub reference: Address,
}

#[contractevent(topics = ["updater"], data_format = "single-value")]
pub struct UpdaterChanged {
    #[topic]
    pub admin: Address,
    pub updater: Address,
}
