#![no_std]

//! Registry of the accounts allowed to write clinical data.
//!
//! One [`AuthorizedPerson`] is kept per account, last write wins. Unknown
//! accounts read back as an empty, unauthorized record; they are never an
//! error. Who may change the registry is governed by [`GrantPolicy`].

pub mod errors;
pub mod events;

use ledger_common::{extend_instance, extend_persistent};
use soroban_sdk::{
    contract, contractimpl, contracttype, log, symbol_short, Address, Env, String, Symbol,
};

pub use errors::{ContractError, ErrorCategory, ErrorSeverity};

// ── Storage keys ─────────────────────────────────────────────────────────────

const ADMIN: Symbol = symbol_short!("ADMIN");
const INITIALIZED: Symbol = symbol_short!("INIT");
const POLICY: Symbol = symbol_short!("POLICY");
const PERSON: Symbol = symbol_short!("PERSON");

// ── Types ────────────────────────────────────────────────────────────────────

/// A person allowed (or formerly allowed) to record clinical data.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthorizedPerson {
    pub first_name: String,
    pub last_name: String,
    /// 11-digit government id, stored exactly as supplied.
    pub gov_id: String,
    pub registered_at: u64,
    pub account: Address,
    pub is_authorized: bool,
}

impl AuthorizedPerson {
    /// The zero-valued record returned for accounts never written.
    pub fn empty(env: &Env, account: Address) -> Self {
        Self {
            first_name: String::from_str(env, ""),
            last_name: String::from_str(env, ""),
            gov_id: String::from_str(env, ""),
            registered_at: 0,
            account,
            is_authorized: false,
        }
    }
}

/// Who may register, authorize and deauthorize accounts.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GrantPolicy {
    /// Anyone may change the registry.
    Open,
    /// Only the admin may change the registry.
    AdminOnly,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct AccessControlContract;

#[contractimpl]
impl AccessControlContract {
    /// Initialize the registry. The admin is registered as the first
    /// authorized person so a fresh deployment can record data right away.
    pub fn initialize(
        env: Env,
        admin: Address,
        first_name: String,
        last_name: String,
        gov_id: String,
        registered_at: u64,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }

        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&INITIALIZED, &true);
        env.storage()
            .instance()
            .set(&POLICY, &GrantPolicy::AdminOnly);
        extend_instance(&env);

        Self::write_person(
            &env,
            &AuthorizedPerson {
                first_name,
                last_name,
                gov_id: gov_id.clone(),
                registered_at,
                account: admin.clone(),
                is_authorized: true,
            },
        );

        events::publish_initialized(&env, admin.clone());
        events::publish_person_set(&env, admin, gov_id);

        Ok(())
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&ADMIN)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn get_grant_policy(env: Env) -> GrantPolicy {
        env.storage()
            .instance()
            .get(&POLICY)
            .unwrap_or(GrantPolicy::AdminOnly)
    }

    /// Switch between admin-only and open registry writes. Admin only.
    pub fn set_grant_policy(env: Env, policy: GrantPolicy) -> Result<(), ContractError> {
        let admin = Self::get_admin(env.clone())?;
        admin.require_auth();

        env.storage().instance().set(&POLICY, &policy);
        extend_instance(&env);

        events::publish_policy_changed(&env, policy);
        Ok(())
    }

    // ── Registry writes ──────────────────────────────────────────────────────

    /// Create or overwrite the record for `account`. Registering implies
    /// granting, so `is_authorized` is set as part of the call.
    pub fn set_authorized_person(
        env: Env,
        first_name: String,
        last_name: String,
        gov_id: String,
        registered_at: u64,
        account: Address,
    ) -> Result<(), ContractError> {
        Self::require_grant_capability(&env)?;

        Self::write_person(
            &env,
            &AuthorizedPerson {
                first_name,
                last_name,
                gov_id: gov_id.clone(),
                registered_at,
                account: account.clone(),
                is_authorized: true,
            },
        );

        events::publish_person_set(&env, account, gov_id);
        Ok(())
    }

    pub fn authorize_person(env: Env, account: Address) -> Result<(), ContractError> {
        Self::set_flag(&env, account, true)
    }

    pub fn deauthorize_person(env: Env, account: Address) -> Result<(), ContractError> {
        Self::set_flag(&env, account, false)
    }

    // ── Reads ────────────────────────────────────────────────────────────────

    /// `false` for accounts never registered.
    pub fn is_person_authorized(env: Env, account: Address) -> bool {
        Self::read_person(&env, &account)
            .map(|person| person.is_authorized)
            .unwrap_or(false)
    }

    pub fn get_authorized_person(env: Env, account: Address) -> AuthorizedPerson {
        Self::read_person(&env, &account)
            .unwrap_or_else(|| AuthorizedPerson::empty(&env, account))
    }

    pub fn version() -> u32 {
        1
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Single gate for every registry write.
    fn require_grant_capability(env: &Env) -> Result<(), ContractError> {
        match Self::get_grant_policy(env.clone()) {
            GrantPolicy::Open => Ok(()),
            GrantPolicy::AdminOnly => {
                let admin = Self::get_admin(env.clone()).map_err(|err| {
                    log!(env, "registry write before initialize");
                    err
                })?;
                admin.require_auth();
                Ok(())
            }
        }
    }

    /// Flips only `is_authorized`; unknown accounts get an empty record.
    fn set_flag(env: &Env, account: Address, is_authorized: bool) -> Result<(), ContractError> {
        Self::require_grant_capability(env)?;

        let mut person = Self::read_person(env, &account)
            .unwrap_or_else(|| AuthorizedPerson::empty(env, account.clone()));
        person.is_authorized = is_authorized;
        Self::write_person(env, &person);

        events::publish_authorization_changed(env, account, is_authorized);
        Ok(())
    }

    fn read_person(env: &Env, account: &Address) -> Option<AuthorizedPerson> {
        env.storage()
            .persistent()
            .get(&(PERSON, account.clone()))
    }

    fn write_person(env: &Env, person: &AuthorizedPerson) {
        let key = (PERSON, person.account.clone());
        env.storage().persistent().set(&key, person);
        extend_persistent(env, &key);
    }
}

#[cfg(test)]
mod test;
