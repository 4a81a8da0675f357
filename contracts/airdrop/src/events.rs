use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::storage_types::{Asset, CampaignOption, CampaignValue};

pub const MANAGER_REGISTERED: Symbol = symbol_short!("mgr_new");
pub const CAMPAIGN_CREATED: Symbol = symbol_short!("camp_new");
pub const PARTICIPANT_ADMITTED: Symbol = symbol_short!("admitted");
pub const PARTICIPATION_TOGGLED: Symbol = symbol_short!("toggled");
pub const PARTICIPANT_RETIRED: Symbol = symbol_short!("retired");
pub const OPTION_TOGGLED: Symbol = symbol_short!("option");
pub const VALUE_UPDATED: Symbol = symbol_short!("value");
pub const TOKENS_CLAIMED: Symbol = symbol_short!("claimed");
pub const FUNDS_MANAGED: Symbol = symbol_short!("funds");
pub const HELD_WITHDRAWN: Symbol = symbol_short!("withdrawn");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ManagerRegisteredEvent {
    pub owner: Address,
    pub token: Address,
    pub creation_deposit: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreatedEvent {
    pub owner: Address,
    pub total_token_amount: i128,
    pub deadline: u64,
    pub has_fixed_amount: bool,
    pub amount_for_each_user: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParticipantAdmittedEvent {
    pub participant: Address,
    pub fee_paid: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParticipationToggledEvent {
    pub participant: Address,
    pub is_whitelisted: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParticipantRetiredEvent {
    pub participant: Address,
    pub refund: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OptionToggledEvent {
    pub option: CampaignOption,
    pub enabled: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValueUpdatedEvent {
    pub field: CampaignValue,
    pub value: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokensClaimedEvent {
    pub participant: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsManagedEvent {
    pub asset: Asset,
    pub recipient: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HeldTokensWithdrawnEvent {
    pub to: Address,
    pub amount: i128,
}

pub fn emit_manager_registered(env: &Env, manager_id: u32, event: ManagerRegisteredEvent) {
    env.events().publish((MANAGER_REGISTERED, manager_id), event);
}

pub fn emit_campaign_created(
    env: &Env,
    manager_id: u32,
    campaign_id: u32,
    event: CampaignCreatedEvent,
) {
    env.events()
        .publish((CAMPAIGN_CREATED, manager_id, campaign_id), event);
}

pub fn emit_participant_admitted(
    env: &Env,
    manager_id: u32,
    campaign_id: u32,
    event: ParticipantAdmittedEvent,
) {
    env.events()
        .publish((PARTICIPANT_ADMITTED, manager_id, campaign_id), event);
}

pub fn emit_participation_toggled(
    env: &Env,
    manager_id: u32,
    campaign_id: u32,
    event: ParticipationToggledEvent,
) {
    env.events()
        .publish((PARTICIPATION_TOGGLED, manager_id, campaign_id), event);
}

pub fn emit_participant_retired(
    env: &Env,
    manager_id: u32,
    campaign_id: u32,
    event: ParticipantRetiredEvent,
) {
    env.events()
        .publish((PARTICIPANT_RETIRED, manager_id, campaign_id), event);
}

pub fn emit_option_toggled(
    env: &Env,
    manager_id: u32,
    campaign_id: u32,
    event: OptionToggledEvent,
) {
    env.events()
        .publish((OPTION_TOGGLED, manager_id, campaign_id), event);
}

pub fn emit_value_updated(env: &Env, manager_id: u32, campaign_id: u32, event: ValueUpdatedEvent) {
    env.events()
        .publish((VALUE_UPDATED, manager_id, campaign_id), event);
}

pub fn emit_tokens_claimed(
    env: &Env,
    manager_id: u32,
    campaign_id: u32,
    event: TokensClaimedEvent,
) {
    env.events()
        .publish((TOKENS_CLAIMED, manager_id, campaign_id), event);
}

pub fn emit_funds_managed(env: &Env, manager_id: u32, campaign_id: u32, event: FundsManagedEvent) {
    env.events()
        .publish((FUNDS_MANAGED, manager_id, campaign_id), event);
}

pub fn emit_held_withdrawn(env: &Env, manager_id: u32, event: HeldTokensWithdrawnEvent) {
    env.events().publish((HELD_WITHDRAWN, manager_id), event);
}
