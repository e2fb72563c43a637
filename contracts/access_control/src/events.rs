use crate::GrantPolicy;
use soroban_sdk::{symbol_short, Address, Env, String};

/// Event published when the registry is initialized.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub timestamp: u64,
}

/// Event published when an authorized person record is created or overwritten.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PersonSetEvent {
    pub account: Address,
    pub gov_id: String,
    pub timestamp: u64,
}

/// Event published when an account's authorization flag is toggled.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthorizationChangedEvent {
    pub account: Address,
    pub is_authorized: bool,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PolicyChangedEvent {
    pub policy: GrantPolicy,
    pub timestamp: u64,
}

pub fn publish_initialized(env: &Env, admin: Address) {
    let topics = (symbol_short!("INIT"),);
    let data = InitializedEvent {
        admin,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a person is registered or re-registered.
/// Names are left out of the payload; indexers look them up by account.
pub fn publish_person_set(env: &Env, account: Address, gov_id: String) {
    let topics = (symbol_short!("PER_SET"), account.clone());
    let data = PersonSetEvent {
        account,
        gov_id,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_authorization_changed(env: &Env, account: Address, is_authorized: bool) {
    let topics = (symbol_short!("PER_AUTH"), account.clone());
    let data = AuthorizationChangedEvent {
        account,
        is_authorized,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_policy_changed(env: &Env, policy: GrantPolicy) {
    let topics = (symbol_short!("POLICY"),);
    let data = PolicyChangedEvent {
        policy,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
