use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// A vault or reference read failed or returned malformed data
    CollaboratorUnavailable = 1,

    /// Vault share supply is zero, so the per-share value is undefined
    InvalidVaultState = 2,

    /// Zero or negative magnitude, or decimals out of range
    InvalidInput = 3,

    /// Fixed-point arithmetic overflowed
    ArithmeticOverflow = 4,

    /// Fixed-point division by zero
    DivisionByZero = 5,

    /// No round has been committed yet
    NoRoundsYet = 6,

    /// No round exists with the requested id
    RoundNotFound = 7,

    /// Round id space exhausted
    StorageExhausted = 8,

    /// Constructor arguments out of range
    InvalidConfig = 9,
}
