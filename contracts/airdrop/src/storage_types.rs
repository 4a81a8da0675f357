use soroban_sdk::{contracttype, Address};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Seconds after the deadline during which only participants may touch the
/// token pool. The owner can sweep leftovers once it has elapsed.
pub const TOKEN_SWEEP_DELAY: u64 = 7 * 24 * 60 * 60;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Registry contract allowed to register managers.
    Registry,
    /// Native asset contract used for whitelist fees.
    NativeToken,
    /// Number of managers registered so far; also the next manager id.
    ManagerCount,
    Manager(u32),
    /// (manager id, campaign index)
    Campaign(u32, u32),
    /// (manager id, campaign index, participant)
    Participant(u32, u32, Address),
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Manager {
    pub owner: Address,
    pub token: Address,
    /// Token amount declared when the manager was registered.
    pub creation_deposit: i128,
    pub campaign_count: u32,
    /// Tokens swept back from campaigns and not yet withdrawn.
    pub held_tokens: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub owner: Address,
    pub token: Address,
    pub total_token_amount: i128,
    pub claimed_amount: i128,
    pub created_at: u64,
    pub deadline: u64,
    pub is_active: bool,
    pub accept_payable_whitelist: bool,
    pub whitelist_fee: i128,
    /// 0 means unlimited. Only enforced under the fixed-amount policy.
    pub max_participant_amount: u32,
    pub has_fixed_amount: bool,
    pub amount_for_each_user: i128,
    pub participant_amount: u32,
    pub collected_fees: i128,
    pub fees_swept: bool,
    pub tokens_swept: bool,
    pub swept_token_amount: i128,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct Participant {
    pub is_whitelisted: bool,
    pub has_claimed: bool,
    /// Native amount paid on self-admission and not refunded yet.
    pub paid_fee: i128,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum CampaignOption {
    IsActive,
    AcceptPayableWhitelist,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum CampaignValue {
    WhitelistFee,
    MaxParticipantAmount,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Asset {
    /// Whitelist fees collected in the native currency.
    Native,
    /// The campaign's airdropped token.
    Token,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Phase {
    /// Admissions allowed, claims not yet.
    Open,
    /// Claims allowed, token sweep not yet.
    Claimable,
    /// Claims still allowed while tokens remain; the owner may sweep.
    Sweepable,
}
