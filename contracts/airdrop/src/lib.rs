#![no_std]

mod campaign;
mod errors;
mod events;
mod manager;
mod storage;
mod storage_types;


use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

pub use errors::AirdropError;
pub use storage_types::{
    Asset, Campaign, CampaignOption, CampaignValue, Manager, Participant, Phase,
    TOKEN_SWEEP_DELAY,
};

use storage_types::DataKey;

// ── Contract ────────────────────────────────────────────────────────────────

#[contract]
pub struct AirdropContract;

#[contractimpl]
impl AirdropContract {
    /// Initializes the platform.
    ///
    /// # Arguments
    /// * `registry`     – The only address allowed to register managers.
    /// * `native_token` – The native asset contract used for whitelist fees.
    pub fn initialize(env: Env, registry: Address, native_token: Address) -> Result<(), AirdropError> {
        if storage::is_initialized(&env) {
            return Err(AirdropError::AlreadyInitialized);
        }

        env.storage().instance().set(&DataKey::Registry, &registry);
        env.storage().instance().set(&DataKey::NativeToken, &native_token);
        storage::set_manager_count(&env, 0);
        storage::extend_instance(&env);

        log!(&env, "airdrop platform initialized for registry {}", registry);
        Ok(())
    }

    // ── Managers ────────────────────────────────────────────────────────

    /// Registers a new manager for `owner`. Only the registry may call this,
    /// after it has collected the creation fee.
    ///
    /// # Returns
    /// The id of the new manager.
    pub fn register_manager(
        env: Env,
        owner: Address,
        token: Address,
        creation_deposit: i128,
    ) -> Result<u32, AirdropError> {
        storage::extend_instance(&env);
        manager::register(&env, owner, token, creation_deposit)
    }

    /// Creates a campaign that distributes `total_token_amount` of the
    /// manager's token once `duration` seconds have elapsed.
    ///
    /// The owner must have approved the platform for at least
    /// `total_token_amount` on the token contract.
    ///
    /// # Arguments
    /// * `caller`               – The manager owner.
    /// * `manager_id`           – The manager that will own the campaign.
    /// * `duration`             – Seconds until the claim window opens.
    /// * `total_token_amount`   – Tokens pulled into the campaign pool.
    /// * `has_fixed_amount`     – Fixed payout per participant instead of an even split.
    /// * `amount_for_each_user` – The fixed payout; ignored for an even split.
    ///
    /// # Returns
    /// The index of the campaign within the manager.
    pub fn create_campaign(
        env: Env,
        caller: Address,
        manager_id: u32,
        duration: u64,
        total_token_amount: i128,
        has_fixed_amount: bool,
        amount_for_each_user: i128,
    ) -> Result<u32, AirdropError> {
        storage::extend_instance(&env);
        manager::create_campaign(
            &env,
            &caller,
            manager_id,
            duration,
            total_token_amount,
            has_fixed_amount,
            amount_for_each_user,
        )
    }

    /// Sends tokens swept into the manager's custody to `to`.
    pub fn withdraw_held_tokens(
        env: Env,
        caller: Address,
        manager_id: u32,
        to: Address,
        amount: i128,
    ) -> Result<(), AirdropError> {
        storage::extend_instance(&env);
        manager::withdraw_held_tokens(&env, &caller, manager_id, to, amount)
    }

    // ── Whitelist ───────────────────────────────────────────────────────

    /// Whitelists `participant` for free. Returns `false` if it already was.
    pub fn add_participant(
        env: Env,
        caller: Address,
        manager_id: u32,
        campaign_id: u32,
        participant: Address,
    ) -> Result<bool, AirdropError> {
        storage::extend_instance(&env);
        campaign::add_participant(&env, &caller, manager_id, campaign_id, participant)
    }

    /// Whitelists every address in `participants`; all or nothing.
    ///
    /// # Returns
    /// How many of them were newly admitted.
    pub fn batch_add_participants(
        env: Env,
        caller: Address,
        manager_id: u32,
        campaign_id: u32,
        participants: Vec<Address>,
    ) -> Result<u32, AirdropError> {
        storage::extend_instance(&env);
        campaign::batch_add_participants(&env, &caller, manager_id, campaign_id, participants)
    }

    /// Joins a campaign whose payable whitelist is open by paying exactly the
    /// whitelist fee in the native asset.
    pub fn self_admit(
        env: Env,
        participant: Address,
        manager_id: u32,
        campaign_id: u32,
        payment: i128,
    ) -> Result<(), AirdropError> {
        storage::extend_instance(&env);
        campaign::self_admit(&env, participant, manager_id, campaign_id, payment)
    }

    /// Flips `participant`'s whitelist flag while the campaign is open.
    /// Turning someone back on is subject to the participant cap.
    ///
    /// # Returns
    /// Whether the participant is whitelisted afterwards.
    pub fn toggle_participation(
        env: Env,
        caller: Address,
        manager_id: u32,
        campaign_id: u32,
        participant: Address,
    ) -> Result<bool, AirdropError> {
        storage::extend_instance(&env);
        campaign::toggle_participation(&env, &caller, manager_id, campaign_id, participant)
    }

    /// Leaves the whitelist before the deadline.
    ///
    /// # Returns
    /// The whitelist fee refunded to the participant.
    pub fn retire_from_campaign(
        env: Env,
        participant: Address,
        manager_id: u32,
        campaign_id: u32,
    ) -> Result<i128, AirdropError> {
        storage::extend_instance(&env);
        campaign::retire(&env, participant, manager_id, campaign_id)
    }

    // ── Configuration ───────────────────────────────────────────────────

    /// Flips a campaign flag and returns its new value.
    pub fn toggle_campaign_option(
        env: Env,
        caller: Address,
        manager_id: u32,
        campaign_id: u32,
        option: CampaignOption,
    ) -> Result<bool, AirdropError> {
        storage::extend_instance(&env);
        campaign::toggle_option(&env, &caller, manager_id, campaign_id, option)
    }

    /// Sets the whitelist fee or the participant cap (0 = unlimited).
    ///
    /// # Arguments
    /// * `field` – Which value to set.
    /// * `value` – The new value; negative, or above `u32::MAX` for the cap,
    ///   is rejected with `InvalidAmount`.
    pub fn update_value(
        env: Env,
        caller: Address,
        manager_id: u32,
        campaign_id: u32,
        field: CampaignValue,
        value: i128,
    ) -> Result<(), AirdropError> {
        storage::extend_instance(&env);
        campaign::update_value(&env, &caller, manager_id, campaign_id, field, value)
    }

    // ── Claims & custody ────────────────────────────────────────────────

    /// Claims the caller's share once the deadline has passed.
    ///
    /// # Returns
    /// The amount of tokens transferred.
    pub fn receive_tokens(
        env: Env,
        participant: Address,
        manager_id: u32,
        campaign_id: u32,
    ) -> Result<i128, AirdropError> {
        storage::extend_instance(&env);
        campaign::receive_tokens(&env, participant, manager_id, campaign_id)
    }

    /// Sweeps collected fees (`Asset::Native`) or leftover tokens
    /// (`Asset::Token`). Leftover tokens go to the owner when
    /// `to_owner_directly` is set, otherwise they are held by the manager.
    ///
    /// # Returns
    /// The amount moved; 0 once the asset has already been swept.
    pub fn manage_funds(
        env: Env,
        caller: Address,
        manager_id: u32,
        campaign_id: u32,
        asset: Asset,
        to_owner_directly: bool,
    ) -> Result<i128, AirdropError> {
        storage::extend_instance(&env);
        campaign::manage_funds(&env, &caller, manager_id, campaign_id, asset, to_owner_directly)
    }

    // ── View helpers ────────────────────────────────────────────────────

    /// The address allowed to register managers.
    pub fn registry(env: Env) -> Result<Address, AirdropError> {
        storage::registry(&env)
    }

    /// The native asset contract whitelist fees are paid in.
    pub fn native_token(env: Env) -> Result<Address, AirdropError> {
        storage::native_token(&env)
    }

    /// Seconds after the deadline before leftover tokens can be swept.
    pub fn token_sweep_delay(_env: Env) -> u64 {
        TOKEN_SWEEP_DELAY
    }

    /// Number of registered managers; ids run from 0 to this value.
    pub fn manager_count(env: Env) -> u32 {
        storage::manager_count(&env)
    }

    /// Returns the manager record, including tokens it holds in custody.
    pub fn manager(env: Env, manager_id: u32) -> Result<Manager, AirdropError> {
        storage::load_manager(&env, manager_id)
    }

    /// Number of campaigns the manager has created.
    pub fn campaign_count(env: Env, manager_id: u32) -> Result<u32, AirdropError> {
        Ok(storage::load_manager(&env, manager_id)?.campaign_count)
    }

    /// Returns one campaign record.
    pub fn campaign(env: Env, manager_id: u32, campaign_id: u32) -> Result<Campaign, AirdropError> {
        storage::load_campaign(&env, manager_id, campaign_id)
    }

    /// Returns every campaign of the manager in creation order.
    pub fn campaigns(env: Env, manager_id: u32) -> Result<Vec<Campaign>, AirdropError> {
        let manager = storage::load_manager(&env, manager_id)?;
        let mut campaigns = Vec::new(&env);
        for campaign_id in 0..manager.campaign_count {
            campaigns.push_back(storage::load_campaign(&env, manager_id, campaign_id)?);
        }
        Ok(campaigns)
    }

    /// Returns `participant`'s entry; never-admitted addresses get the default.
    pub fn participant(
        env: Env,
        manager_id: u32,
        campaign_id: u32,
        participant: Address,
    ) -> Participant {
        campaign::participant(&env, manager_id, campaign_id, &participant)
    }

    /// Whether `participant` is currently on the whitelist.
    pub fn is_whitelisted(env: Env, manager_id: u32, campaign_id: u32, participant: Address) -> bool {
        campaign::participant(&env, manager_id, campaign_id, &participant).is_whitelisted
    }

    /// Whether `participant` has already received their share.
    pub fn has_claimed(env: Env, manager_id: u32, campaign_id: u32, participant: Address) -> bool {
        campaign::participant(&env, manager_id, campaign_id, &participant).has_claimed
    }

    /// The campaign phase at the current ledger time.
    pub fn phase(env: Env, manager_id: u32, campaign_id: u32) -> Result<Phase, AirdropError> {
        let campaign = storage::load_campaign(&env, manager_id, campaign_id)?;
        Ok(campaign.phase(env.ledger().timestamp()))
    }

    /// Returns what a single claim would pay right now; 0 when the next
    /// claim would fail with `PoolExhausted`.
    pub fn claimable_amount(env: Env, manager_id: u32, campaign_id: u32) -> Result<i128, AirdropError> {
        let campaign = storage::load_campaign(&env, manager_id, campaign_id)?;
        Ok(campaign.claim_payout())
    }
}
