#![no_std]

mod errors;
mod events;
mod storage_types;


use soroban_sdk::{
    contract, contractimpl, log, token, vec, Address, Env, IntoVal, Symbol, Vec,
};

pub use errors::RegistryError;
pub use storage_types::DeployedManager;

use events::{FeesWithdrawnEvent, ManagerDeployedEvent};
use storage_types::{DataKey, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};

fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn read<V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>>(
    env: &Env,
    key: &DataKey,
) -> Result<V, RegistryError> {
    env.storage()
        .instance()
        .get(key)
        .ok_or(RegistryError::NotInitialized)
}

fn require_admin(env: &Env, caller: &Address) -> Result<(), RegistryError> {
    caller.require_auth();
    let admin: Address = read(env, &DataKey::Admin)?;
    if admin != *caller {
        return Err(RegistryError::Unauthorized);
    }
    Ok(())
}

fn load_deployed_managers(env: &Env) -> Vec<DeployedManager> {
    env.storage()
        .instance()
        .get(&DataKey::DeployedManagers)
        .unwrap_or(Vec::new(env))
}

#[contract]
pub struct RegistryContract;

#[contractimpl]
impl RegistryContract {
    /// Initializes the admin panel.
    ///
    /// # Arguments
    /// * `admin`         – Receives creation fees and sets the price.
    /// * `native_token`  – The native asset contract fees are paid in.
    /// * `platform`      – The airdrop platform that stores the managers.
    /// * `manager_price` – The fee charged for every new manager.
    pub fn initialize(
        env: Env,
        admin: Address,
        native_token: Address,
        platform: Address,
        manager_price: i128,
    ) -> Result<(), RegistryError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(RegistryError::AlreadyInitialized);
        }
        if manager_price < 0 {
            return Err(RegistryError::InvalidAmount);
        }

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::NativeToken, &native_token);
        env.storage().instance().set(&DataKey::Platform, &platform);
        env.storage().instance().set(&DataKey::ManagerPrice, &manager_price);
        env.storage().instance().set(&DataKey::CollectedFees, &0i128);
        extend_instance(&env);

        log!(&env, "registry initialized with price {}", manager_price);
        Ok(())
    }

    /// Registers a new airdrop manager for `owner` after charging the
    /// manager price in the native asset.
    ///
    /// # Arguments
    /// * `owner`            – The future manager owner; pays the fee.
    /// * `token`            – The token the manager's campaigns distribute.
    /// * `creation_deposit` – The token amount the owner declares for the manager;
    ///   must not be negative.
    /// * `payment`          – Must equal the current manager price.
    ///
    /// # Returns
    /// The id of the manager on the platform.
    pub fn new_manager(
        env: Env,
        owner: Address,
        token: Address,
        creation_deposit: i128,
        payment: i128,
    ) -> Result<u32, RegistryError> {
        owner.require_auth();

        if creation_deposit < 0 {
            return Err(RegistryError::InvalidAmount);
        }
        let price: i128 = read(&env, &DataKey::ManagerPrice)?;
        if payment != price {
            return Err(RegistryError::WrongFee);
        }

        let collected: i128 = read(&env, &DataKey::CollectedFees)?;
        let collected = collected
            .checked_add(payment)
            .ok_or(RegistryError::Overflow)?;
        env.storage()
            .instance()
            .set(&DataKey::CollectedFees, &collected);
        if payment > 0 {
            let native: Address = read(&env, &DataKey::NativeToken)?;
            token::Client::new(&env, &native).transfer(
                &owner,
                &env.current_contract_address(),
                &payment,
            );
        }

        // Register the manager on the platform.
        let platform: Address = read(&env, &DataKey::Platform)?;
        let manager_id: u32 = env.invoke_contract(
            &platform,
            &Symbol::new(&env, "register_manager"),
            vec![
                &env,
                owner.into_val(&env),
                token.into_val(&env),
                creation_deposit.into_val(&env),
            ],
        );

        let mut managers = load_deployed_managers(&env);
        managers.push_back(DeployedManager {
            owner: owner.clone(),
            manager_id,
            token: token.clone(),
        });
        env.storage()
            .instance()
            .set(&DataKey::DeployedManagers, &managers);
        extend_instance(&env);

        events::emit_manager_deployed(
            &env,
            ManagerDeployedEvent {
                owner,
                manager_id,
                token,
                fee_paid: payment,
            },
        );
        Ok(manager_id)
    }

    pub fn set_manager_price(env: Env, admin: Address, price: i128) -> Result<(), RegistryError> {
        require_admin(&env, &admin)?;
        if price < 0 {
            return Err(RegistryError::InvalidAmount);
        }

        env.storage().instance().set(&DataKey::ManagerPrice, &price);
        extend_instance(&env);

        events::emit_price_updated(&env, price);
        Ok(())
    }

    /// Sends every collected creation fee to `to`.
    pub fn withdraw_fees(env: Env, admin: Address, to: Address) -> Result<i128, RegistryError> {
        require_admin(&env, &admin)?;

        let amount: i128 = read(&env, &DataKey::CollectedFees)?;
        if amount == 0 {
            return Err(RegistryError::NothingToWithdraw);
        }
        env.storage().instance().set(&DataKey::CollectedFees, &0i128);
        extend_instance(&env);

        let native: Address = read(&env, &DataKey::NativeToken)?;
        token::Client::new(&env, &native).transfer(&env.current_contract_address(), &to, &amount);

        log!(&env, "withdrew {} in creation fees", amount);
        events::emit_fees_withdrawn(&env, FeesWithdrawnEvent { to, amount });
        Ok(amount)
    }

    // ── View helpers ────────────────────────────────────────────────────

    pub fn admin(env: Env) -> Result<Address, RegistryError> {
        read(&env, &DataKey::Admin)
    }

    pub fn platform(env: Env) -> Result<Address, RegistryError> {
        read(&env, &DataKey::Platform)
    }

    pub fn manager_price(env: Env) -> Result<i128, RegistryError> {
        read(&env, &DataKey::ManagerPrice)
    }

    pub fn collected_fees(env: Env) -> Result<i128, RegistryError> {
        read(&env, &DataKey::CollectedFees)
    }

    /// Returns every manager registered through this panel, in order.
    pub fn deployed_managers(env: Env) -> Vec<DeployedManager> {
        load_deployed_managers(&env)
    }

    pub fn deployed_manager(env: Env, index: u32) -> Result<DeployedManager, RegistryError> {
        load_deployed_managers(&env)
            .get(index)
            .ok_or(RegistryError::ManagerNotFound)
    }

    pub fn manager_count(env: Env) -> u32 {
        load_deployed_managers(&env).len()
    }
}
