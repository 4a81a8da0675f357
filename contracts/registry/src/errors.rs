use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Admin-only operation invoked by someone else.
    Unauthorized = 3,
    /// Payment differs from the configured manager price.
    WrongFee = 4,
    InvalidAmount = 5,
    ManagerNotFound = 6,
    NothingToWithdraw = 7,
    Overflow = 8,
}
