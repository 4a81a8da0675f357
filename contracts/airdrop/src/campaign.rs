//! Campaign state machine: admission while open, one-shot claims once the
//! deadline passes, and the two independent sweeps of fees and tokens.
//!
//! Every operation that moves value writes its state first and transfers
//! last, so a token that calls back into the platform observes the
//! post-operation state.

use soroban_sdk::{log, token, Address, Env, Vec};

use crate::errors::AirdropError;
use crate::events::{
    self, FundsManagedEvent, OptionToggledEvent, ParticipantAdmittedEvent,
    ParticipantRetiredEvent, ParticipationToggledEvent, TokensClaimedEvent, ValueUpdatedEvent,
};
use crate::manager;
use crate::storage;
use crate::storage_types::{
    Asset, Campaign, CampaignOption, CampaignValue, Participant, Phase, TOKEN_SWEEP_DELAY,
};

impl Campaign {
    pub fn is_open(&self, now: u64) -> bool {
        now < self.deadline
    }

    pub fn is_claimable(&self, now: u64) -> bool {
        now >= self.deadline
    }

    pub fn tokens_claimable(&self, now: u64) -> bool {
        now >= self.deadline.saturating_add(TOKEN_SWEEP_DELAY)
    }

    pub fn phase(&self, now: u64) -> Phase {
        if self.is_open(now) {
            Phase::Open
        } else if self.tokens_claimable(now) {
            Phase::Sweepable
        } else {
            Phase::Claimable
        }
    }

    /// The participant cap only binds under the fixed-amount policy.
    pub fn has_capacity(&self) -> bool {
        !self.has_fixed_amount
            || self.max_participant_amount == 0
            || self.participant_amount < self.max_participant_amount
    }

    /// Tokens neither claimed nor swept.
    pub fn remaining_tokens(&self) -> i128 {
        self.total_token_amount - self.claimed_amount - self.swept_token_amount
    }

    /// Share for one claim evaluated against the current participant count.
    /// The integer division remainder stays in the pool.
    pub fn payout(&self) -> i128 {
        if self.has_fixed_amount {
            self.amount_for_each_user
        } else if self.participant_amount == 0 {
            0
        } else {
            self.total_token_amount / self.participant_amount as i128
        }
    }

    /// What the next claim pays out, or 0 when it would be rejected because
    /// the share rounds to nothing or the pool cannot cover it.
    pub fn claim_payout(&self) -> i128 {
        let amount = self.payout();
        if amount <= 0 || amount > self.remaining_tokens() {
            0
        } else {
            amount
        }
    }

    fn ensure_owner(&self, caller: &Address) -> Result<(), AirdropError> {
        if self.owner != *caller {
            return Err(AirdropError::Unauthorized);
        }
        Ok(())
    }

    fn ensure_open(&self, now: u64) -> Result<(), AirdropError> {
        if !self.is_open(now) {
            return Err(AirdropError::WindowClosed);
        }
        Ok(())
    }
}

/// Loads a campaign for an owner operation, checking both authorization
/// layers before anything else.
fn load_for_owner(
    env: &Env,
    caller: &Address,
    manager_id: u32,
    campaign_id: u32,
) -> Result<Campaign, AirdropError> {
    manager::require_owner(env, caller, manager_id)?;
    let campaign = storage::load_campaign(env, manager_id, campaign_id)?;
    campaign.ensure_owner(caller)?;
    Ok(campaign)
}

fn admit(
    env: &Env,
    campaign: &mut Campaign,
    manager_id: u32,
    campaign_id: u32,
    who: &Address,
) -> Result<bool, AirdropError> {
    let mut participant = storage::load_participant(env, manager_id, campaign_id, who);
    if participant.is_whitelisted {
        return Ok(false);
    }
    if !campaign.has_capacity() {
        return Err(AirdropError::CapacityExceeded);
    }

    participant.is_whitelisted = true;
    campaign.participant_amount += 1;
    storage::save_participant(env, manager_id, campaign_id, who, &participant);

    events::emit_participant_admitted(
        env,
        manager_id,
        campaign_id,
        ParticipantAdmittedEvent {
            participant: who.clone(),
            fee_paid: 0,
        },
    );
    Ok(true)
}

pub fn add_participant(
    env: &Env,
    caller: &Address,
    manager_id: u32,
    campaign_id: u32,
    who: Address,
) -> Result<bool, AirdropError> {
    let mut participants = Vec::new(env);
    participants.push_back(who);
    let admitted = batch_add_participants(env, caller, manager_id, campaign_id, participants)?;
    Ok(admitted == 1)
}

pub fn batch_add_participants(
    env: &Env,
    caller: &Address,
    manager_id: u32,
    campaign_id: u32,
    participants: Vec<Address>,
) -> Result<u32, AirdropError> {
    let mut campaign = load_for_owner(env, caller, manager_id, campaign_id)?;
    campaign.ensure_open(env.ledger().timestamp())?;
    if !campaign.is_active {
        return Err(AirdropError::CampaignInactive);
    }

    let mut admitted = 0u32;
    for who in participants.iter() {
        if admit(env, &mut campaign, manager_id, campaign_id, &who)? {
            admitted += 1;
        }
    }

    if admitted > 0 {
        storage::save_campaign(env, manager_id, campaign_id, &campaign);
    }
    Ok(admitted)
}

/// Pay-to-join admission. `payment` must equal the whitelist fee exactly.
pub fn self_admit(
    env: &Env,
    participant: Address,
    manager_id: u32,
    campaign_id: u32,
    payment: i128,
) -> Result<(), AirdropError> {
    participant.require_auth();

    let mut campaign = storage::load_campaign(env, manager_id, campaign_id)?;
    if !campaign.accept_payable_whitelist {
        return Err(AirdropError::PayableWhitelistClosed);
    }
    campaign.ensure_open(env.ledger().timestamp())?;
    if !campaign.is_active {
        return Err(AirdropError::CampaignInactive);
    }
    if payment != campaign.whitelist_fee {
        return Err(AirdropError::WrongFee);
    }

    let mut entry = storage::load_participant(env, manager_id, campaign_id, &participant);
    if entry.is_whitelisted {
        return Err(AirdropError::AlreadyParticipating);
    }
    if !campaign.has_capacity() {
        return Err(AirdropError::CapacityExceeded);
    }

    entry.is_whitelisted = true;
    entry.paid_fee = entry
        .paid_fee
        .checked_add(payment)
        .ok_or(AirdropError::Overflow)?;
    campaign.participant_amount += 1;
    campaign.collected_fees = campaign
        .collected_fees
        .checked_add(payment)
        .ok_or(AirdropError::Overflow)?;
    storage::save_participant(env, manager_id, campaign_id, &participant, &entry);
    storage::save_campaign(env, manager_id, campaign_id, &campaign);

    if payment > 0 {
        let native = storage::native_token(env)?;
        token::Client::new(env, &native).transfer(
            &participant,
            &env.current_contract_address(),
            &payment,
        );
    }

    events::emit_participant_admitted(
        env,
        manager_id,
        campaign_id,
        ParticipantAdmittedEvent {
            participant,
            fee_paid: payment,
        },
    );
    Ok(())
}

/// Flips a participant's whitelist flag. `has_claimed` is never reset.
pub fn toggle_participation(
    env: &Env,
    caller: &Address,
    manager_id: u32,
    campaign_id: u32,
    who: Address,
) -> Result<bool, AirdropError> {
    let mut campaign = load_for_owner(env, caller, manager_id, campaign_id)?;
    campaign.ensure_open(env.ledger().timestamp())?;

    let mut participant = storage::load_participant(env, manager_id, campaign_id, &who);
    if participant.is_whitelisted {
        participant.is_whitelisted = false;
        campaign.participant_amount -= 1;
    } else {
        if !campaign.has_capacity() {
            return Err(AirdropError::CapacityExceeded);
        }
        participant.is_whitelisted = true;
        campaign.participant_amount += 1;
    }
    storage::save_participant(env, manager_id, campaign_id, &who, &participant);
    storage::save_campaign(env, manager_id, campaign_id, &campaign);

    events::emit_participation_toggled(
        env,
        manager_id,
        campaign_id,
        ParticipationToggledEvent {
            participant: who,
            is_whitelisted: participant.is_whitelisted,
        },
    );
    Ok(participant.is_whitelisted)
}

/// Leaves the whitelist before the deadline and refunds whatever fee the
/// participant paid to get in.
pub fn retire(
    env: &Env,
    participant: Address,
    manager_id: u32,
    campaign_id: u32,
) -> Result<i128, AirdropError> {
    participant.require_auth();

    let mut campaign = storage::load_campaign(env, manager_id, campaign_id)?;
    campaign.ensure_open(env.ledger().timestamp())?;

    let mut entry = storage::load_participant(env, manager_id, campaign_id, &participant);
    if !entry.is_whitelisted {
        return Err(AirdropError::NotParticipating);
    }
    if entry.has_claimed {
        return Err(AirdropError::AlreadyClaimed);
    }

    let refund = entry.paid_fee;
    entry.is_whitelisted = false;
    entry.paid_fee = 0;
    campaign.participant_amount -= 1;
    campaign.collected_fees -= refund;
    storage::save_participant(env, manager_id, campaign_id, &participant, &entry);
    storage::save_campaign(env, manager_id, campaign_id, &campaign);

    if refund > 0 {
        let native = storage::native_token(env)?;
        token::Client::new(env, &native).transfer(
            &env.current_contract_address(),
            &participant,
            &refund,
        );
    }

    events::emit_participant_retired(
        env,
        manager_id,
        campaign_id,
        ParticipantRetiredEvent {
            participant,
            refund,
        },
    );
    Ok(refund)
}

/// Allowed at any time. Pausing after the deadline halts claims but never
/// reopens admission.
pub fn toggle_option(
    env: &Env,
    caller: &Address,
    manager_id: u32,
    campaign_id: u32,
    option: CampaignOption,
) -> Result<bool, AirdropError> {
    let mut campaign = load_for_owner(env, caller, manager_id, campaign_id)?;

    let enabled = match option {
        CampaignOption::IsActive => {
            campaign.is_active = !campaign.is_active;
            campaign.is_active
        }
        CampaignOption::AcceptPayableWhitelist => {
            campaign.accept_payable_whitelist = !campaign.accept_payable_whitelist;
            campaign.accept_payable_whitelist
        }
    };
    storage::save_campaign(env, manager_id, campaign_id, &campaign);

    events::emit_option_toggled(
        env,
        manager_id,
        campaign_id,
        OptionToggledEvent { option, enabled },
    );
    Ok(enabled)
}

pub fn update_value(
    env: &Env,
    caller: &Address,
    manager_id: u32,
    campaign_id: u32,
    field: CampaignValue,
    value: i128,
) -> Result<(), AirdropError> {
    let mut campaign = load_for_owner(env, caller, manager_id, campaign_id)?;

    if value < 0 {
        return Err(AirdropError::InvalidAmount);
    }
    match field {
        CampaignValue::WhitelistFee => campaign.whitelist_fee = value,
        CampaignValue::MaxParticipantAmount => {
            campaign.max_participant_amount =
                u32::try_from(value).map_err(|_| AirdropError::InvalidAmount)?;
        }
    }
    storage::save_campaign(env, manager_id, campaign_id, &campaign);

    events::emit_value_updated(
        env,
        manager_id,
        campaign_id,
        ValueUpdatedEvent { field, value },
    );
    Ok(())
}

pub fn receive_tokens(
    env: &Env,
    participant: Address,
    manager_id: u32,
    campaign_id: u32,
) -> Result<i128, AirdropError> {
    participant.require_auth();

    let mut campaign = storage::load_campaign(env, manager_id, campaign_id)?;
    if !campaign.is_claimable(env.ledger().timestamp()) {
        return Err(AirdropError::NotClaimableYet);
    }
    if !campaign.is_active {
        return Err(AirdropError::NotEligible);
    }

    let mut entry = storage::load_participant(env, manager_id, campaign_id, &participant);
    if !entry.is_whitelisted {
        return Err(AirdropError::NotEligible);
    }
    if entry.has_claimed {
        return Err(AirdropError::AlreadyClaimed);
    }

    let amount = campaign.claim_payout();
    if amount == 0 {
        return Err(AirdropError::PoolExhausted);
    }

    entry.has_claimed = true;
    campaign.claimed_amount += amount;
    storage::save_participant(env, manager_id, campaign_id, &participant, &entry);
    storage::save_campaign(env, manager_id, campaign_id, &campaign);

    token::Client::new(env, &campaign.token).transfer(
        &env.current_contract_address(),
        &participant,
        &amount,
    );

    events::emit_tokens_claimed(
        env,
        manager_id,
        campaign_id,
        TokensClaimedEvent {
            participant,
            amount,
        },
    );
    Ok(amount)
}

/// One-shot sweeps. Native fees unlock at the deadline and always go to the
/// owner; leftover tokens unlock `TOKEN_SWEEP_DELAY` later and go to the
/// owner or stay with the manager. A repeated sweep returns 0 and changes
/// nothing.
pub fn manage_funds(
    env: &Env,
    caller: &Address,
    manager_id: u32,
    campaign_id: u32,
    asset: Asset,
    to_owner_directly: bool,
) -> Result<i128, AirdropError> {
    let mut campaign = load_for_owner(env, caller, manager_id, campaign_id)?;
    let now = env.ledger().timestamp();
    if !campaign.is_claimable(now) {
        return Err(AirdropError::NotClaimableYet);
    }

    let this = env.current_contract_address();
    let (amount, recipient) = match asset {
        Asset::Native => {
            if campaign.fees_swept {
                return Ok(0);
            }
            let amount = campaign.collected_fees;
            campaign.fees_swept = true;
            campaign.collected_fees = 0;
            storage::save_campaign(env, manager_id, campaign_id, &campaign);

            if amount > 0 {
                let native = storage::native_token(env)?;
                token::Client::new(env, &native).transfer(&this, &campaign.owner, &amount);
            }
            (amount, campaign.owner.clone())
        }
        Asset::Token => {
            if !campaign.tokens_claimable(now) {
                return Err(AirdropError::TokensNotClaimableYet);
            }
            if campaign.tokens_swept {
                return Ok(0);
            }
            let amount = campaign.remaining_tokens();
            campaign.tokens_swept = true;
            campaign.swept_token_amount = amount;
            storage::save_campaign(env, manager_id, campaign_id, &campaign);

            if to_owner_directly {
                if amount > 0 {
                    token::Client::new(env, &campaign.token).transfer(
                        &this,
                        &campaign.owner,
                        &amount,
                    );
                }
                (amount, campaign.owner.clone())
            } else {
                manager::hold_tokens(env, manager_id, amount)?;
                (amount, this)
            }
        }
    };

    log!(
        env,
        "campaign {} of manager {} swept {}",
        campaign_id,
        manager_id,
        amount
    );
    events::emit_funds_managed(
        env,
        manager_id,
        campaign_id,
        FundsManagedEvent {
            asset,
            recipient,
            amount,
        },
    );
    Ok(amount)
}

/// Read-only view of a participant's flags; never-admitted identities
/// report the default entry.
pub fn participant(env: &Env, manager_id: u32, campaign_id: u32, who: &Address) -> Participant {
    storage::load_participant(env, manager_id, campaign_id, who)
}
