use soroban_sdk::{Address, Env};

use crate::errors::AirdropError;
use crate::storage_types::{
    Campaign, DataKey, Manager, Participant, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD,
    PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD,
};

pub(crate) fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub(crate) fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Registry)
}

pub(crate) fn registry(env: &Env) -> Result<Address, AirdropError> {
    env.storage()
        .instance()
        .get(&DataKey::Registry)
        .ok_or(AirdropError::NotInitialized)
}

pub(crate) fn native_token(env: &Env) -> Result<Address, AirdropError> {
    env.storage()
        .instance()
        .get(&DataKey::NativeToken)
        .ok_or(AirdropError::NotInitialized)
}

pub(crate) fn manager_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ManagerCount)
        .unwrap_or(0)
}

pub(crate) fn set_manager_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::ManagerCount, &count);
}

pub(crate) fn load_manager(env: &Env, manager_id: u32) -> Result<Manager, AirdropError> {
    env.storage()
        .persistent()
        .get(&DataKey::Manager(manager_id))
        .ok_or(AirdropError::ManagerNotFound)
}

pub(crate) fn save_manager(env: &Env, manager_id: u32, manager: &Manager) {
    let key = DataKey::Manager(manager_id);
    env.storage().persistent().set(&key, manager);
    extend_persistent(env, &key);
}

pub(crate) fn load_campaign(
    env: &Env,
    manager_id: u32,
    campaign_id: u32,
) -> Result<Campaign, AirdropError> {
    env.storage()
        .persistent()
        .get(&DataKey::Campaign(manager_id, campaign_id))
        .ok_or(AirdropError::CampaignNotFound)
}

pub(crate) fn save_campaign(env: &Env, manager_id: u32, campaign_id: u32, campaign: &Campaign) {
    let key = DataKey::Campaign(manager_id, campaign_id);
    env.storage().persistent().set(&key, campaign);
    extend_persistent(env, &key);
}

/// Identities never admitted read back as the default, non-whitelisted entry.
pub(crate) fn load_participant(
    env: &Env,
    manager_id: u32,
    campaign_id: u32,
    who: &Address,
) -> Participant {
    env.storage()
        .persistent()
        .get(&DataKey::Participant(manager_id, campaign_id, who.clone()))
        .unwrap_or_default()
}

pub(crate) fn save_participant(
    env: &Env,
    manager_id: u32,
    campaign_id: u32,
    who: &Address,
    participant: &Participant,
) {
    let key = DataKey::Participant(manager_id, campaign_id, who.clone());
    env.storage().persistent().set(&key, participant);
    extend_persistent(env, &key);
}
