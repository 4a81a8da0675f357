//! Per-owner managers: registration, the campaign factory and custody of
//! tokens swept back from finished campaigns.

use soroban_sdk::{log, token, Address, Env};

use crate::errors::AirdropError;
use crate::events::{self, CampaignCreatedEvent, HeldTokensWithdrawnEvent, ManagerRegisteredEvent};
use crate::storage;
use crate::storage_types::{Campaign, Manager};

/// Manager-level gate for every owner operation. Campaign code re-checks its
/// own owner after this passes.
pub fn require_owner(env: &Env, caller: &Address, manager_id: u32) -> Result<Manager, AirdropError> {
    caller.require_auth();
    let manager = storage::load_manager(env, manager_id)?;
    if manager.owner != *caller {
        return Err(AirdropError::Unauthorized);
    }
    Ok(manager)
}

pub fn register(
    env: &Env,
    owner: Address,
    token: Address,
    creation_deposit: i128,
) -> Result<u32, AirdropError> {
    let registry = storage::registry(env)?;
    registry.require_auth();

    if creation_deposit < 0 {
        return Err(AirdropError::InvalidAmount);
    }

    let manager_id = storage::manager_count(env);
    let next = manager_id.checked_add(1).ok_or(AirdropError::Overflow)?;

    let manager = Manager {
        owner: owner.clone(),
        token: token.clone(),
        creation_deposit,
        campaign_count: 0,
        held_tokens: 0,
    };
    storage::save_manager(env, manager_id, &manager);
    storage::set_manager_count(env, next);

    log!(env, "manager {} registered for {}", manager_id, owner);
    events::emit_manager_registered(
        env,
        manager_id,
        ManagerRegisteredEvent {
            owner,
            token,
            creation_deposit,
        },
    );

    Ok(manager_id)
}

/// Pulls `total_token_amount` from the owner's allowance into a new campaign
/// whose deadline is `now + duration`.
pub fn create_campaign(
    env: &Env,
    caller: &Address,
    manager_id: u32,
    duration: u64,
    total_token_amount: i128,
    has_fixed_amount: bool,
    amount_for_each_user: i128,
) -> Result<u32, AirdropError> {
    let mut manager = require_owner(env, caller, manager_id)?;

    if total_token_amount <= 0 {
        return Err(AirdropError::InvalidAmount);
    }
    if duration == 0 {
        return Err(AirdropError::InvalidDuration);
    }
    let amount_for_each_user = if has_fixed_amount {
        if amount_for_each_user <= 0 || amount_for_each_user > total_token_amount {
            return Err(AirdropError::InvalidAmount);
        }
        amount_for_each_user
    } else {
        0
    };

    let this = env.current_contract_address();
    let token_client = token::Client::new(env, &manager.token);
    if token_client.allowance(caller, &this) < total_token_amount {
        return Err(AirdropError::InsufficientAllowance);
    }
    if token_client.balance(caller) < total_token_amount {
        return Err(AirdropError::InsufficientBalance);
    }

    let now = env.ledger().timestamp();
    let deadline = now.checked_add(duration).ok_or(AirdropError::Overflow)?;

    let campaign_id = manager.campaign_count;
    manager.campaign_count = campaign_id.checked_add(1).ok_or(AirdropError::Overflow)?;

    let campaign = Campaign {
        owner: manager.owner.clone(),
        token: manager.token.clone(),
        total_token_amount,
        claimed_amount: 0,
        created_at: now,
        deadline,
        is_active: true,
        accept_payable_whitelist: false,
        whitelist_fee: 0,
        max_participant_amount: 0,
        has_fixed_amount,
        amount_for_each_user,
        participant_amount: 0,
        collected_fees: 0,
        fees_swept: false,
        tokens_swept: false,
        swept_token_amount: 0,
    };
    storage::save_campaign(env, manager_id, campaign_id, &campaign);
    storage::save_manager(env, manager_id, &manager);

    token_client.transfer_from(&this, caller, &this, &total_token_amount);

    log!(
        env,
        "campaign {} of manager {} holds {} until {}",
        campaign_id,
        manager_id,
        total_token_amount,
        deadline
    );
    events::emit_campaign_created(
        env,
        manager_id,
        campaign_id,
        CampaignCreatedEvent {
            owner: campaign.owner,
            total_token_amount,
            deadline,
            has_fixed_amount,
            amount_for_each_user,
        },
    );

    Ok(campaign_id)
}

/// Credits tokens swept from one of the manager's campaigns.
pub(crate) fn hold_tokens(env: &Env, manager_id: u32, amount: i128) -> Result<(), AirdropError> {
    let mut manager = storage::load_manager(env, manager_id)?;
    manager.held_tokens = manager
        .held_tokens
        .checked_add(amount)
        .ok_or(AirdropError::Overflow)?;
    storage::save_manager(env, manager_id, &manager);
    Ok(())
}

pub fn withdraw_held_tokens(
    env: &Env,
    caller: &Address,
    manager_id: u32,
    to: Address,
    amount: i128,
) -> Result<(), AirdropError> {
    let mut manager = require_owner(env, caller, manager_id)?;

    if amount <= 0 {
        return Err(AirdropError::InvalidAmount);
    }
    if amount > manager.held_tokens {
        return Err(AirdropError::InsufficientFunds);
    }

    manager.held_tokens -= amount;
    storage::save_manager(env, manager_id, &manager);

    token::Client::new(env, &manager.token).transfer(&env.current_contract_address(), &to, &amount);

    events::emit_held_withdrawn(env, manager_id, HeldTokensWithdrawnEvent { to, amount });
    Ok(())
}
