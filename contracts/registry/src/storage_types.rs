use soroban_sdk::{contracttype, Address};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    /// Native asset contract the creation fee is paid in.
    NativeToken,
    /// Airdrop platform contract that stores the managers.
    Platform,
    ManagerPrice,
    /// Creation fees received and not yet withdrawn.
    CollectedFees,
    /// Every manager registered through this panel, in order.
    DeployedManagers,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct DeployedManager {
    pub owner: Address,
    pub manager_id: u32,
    pub token: Address,
}
