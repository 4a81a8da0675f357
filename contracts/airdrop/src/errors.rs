use soroban_sdk::contracterror;

/// Every rejected operation surfaces one of these codes. The host rolls back
/// all storage writes, nested transfers and events of the failed invocation.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AirdropError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Owner-only operation invoked by someone else.
    Unauthorized = 3,
    /// Payment on self-admission differs from the configured whitelist fee.
    WrongFee = 4,
    /// Fixed-amount campaign already holds `max_participant_amount` participants.
    CapacityExceeded = 5,
    /// Participant mutation attempted at or after the deadline.
    WindowClosed = 6,
    /// Claim or sweep attempted before the deadline.
    NotClaimableYet = 7,
    /// Token sweep attempted before `deadline + TOKEN_SWEEP_DELAY`.
    TokensNotClaimableYet = 8,
    /// Claimant is not whitelisted or the campaign is paused.
    NotEligible = 9,
    AlreadyClaimed = 10,
    /// Retirement requested by an identity that is not whitelisted.
    NotParticipating = 11,
    /// Owner has not approved the platform for the campaign pool.
    InsufficientAllowance = 12,
    InsufficientBalance = 13,
    /// Withdrawal exceeds the tokens held by the manager.
    InsufficientFunds = 14,
    ManagerNotFound = 15,
    CampaignNotFound = 16,
    InvalidAmount = 17,
    InvalidDuration = 18,
    /// Admission attempted while the campaign is paused.
    CampaignInactive = 19,
    PayableWhitelistClosed = 20,
    AlreadyParticipating = 21,
    /// Payout rounds to zero or exceeds what is left in the pool.
    PoolExhausted = 22,
    Overflow = 23,
}
