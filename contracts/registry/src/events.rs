use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

pub const MANAGER_DEPLOYED: Symbol = symbol_short!("mgr_dep");
pub const PRICE_UPDATED: Symbol = symbol_short!("price");
pub const FEES_WITHDRAWN: Symbol = symbol_short!("fees_out");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ManagerDeployedEvent {
    pub owner: Address,
    pub manager_id: u32,
    pub token: Address,
    pub fee_paid: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeesWithdrawnEvent {
    pub to: Address,
    pub amount: i128,
}

pub fn emit_manager_deployed(env: &Env, event: ManagerDeployedEvent) {
    env.events().publish((MANAGER_DEPLOYED,), event);
}

pub fn emit_price_updated(env: &Env, price: i128) {
    env.events().publish((PRICE_UPDATED,), price);
}

pub fn emit_fees_withdrawn(env: &Env, event: FeesWithdrawnEvent) {
    env.events().publish((FEES_WITHDRAWN,), event);
}
