//! The writer gate.
//!
//! Every clinical write goes through [`require_writer`]; the ciphertext
//! paths additionally consult the [`EncryptedWritePolicy`] first. The
//! authorization list itself lives in the access control contract and is
//! queried by cross-contract call on every gated write.

use crate::{ContractError, EncryptedWritePolicy};
use soroban_sdk::{contractclient, log, symbol_short, Address, Env, Symbol};

pub(crate) const AC_ADDR: Symbol = symbol_short!("AC_ADDR");
pub(crate) const POLICY: Symbol = symbol_short!("POLICY");

/// The slice of the access control contract the ledger relies on.
#[contractclient(name = "AccessControlClient")]
pub trait AccessControlInterface {
    fn is_person_authorized(env: Env, account: Address) -> bool;
}

pub fn access_control(env: &Env) -> Option<Address> {
    env.storage().instance().get(&AC_ADDR)
}

pub fn encrypted_write_policy(env: &Env) -> EncryptedWritePolicy {
    env.storage()
        .instance()
        .get(&POLICY)
        .unwrap_or(EncryptedWritePolicy::Gated)
}

/// Succeeds only if `caller` signed the invocation and is currently
/// authorized. Fails closed when the access control contract errors.
pub fn require_writer(env: &Env, caller: &Address) -> Result<(), ContractError> {
    let registry = access_control(env).ok_or(ContractError::NotInitialized)?;
    caller.require_auth();

    let client = AccessControlClient::new(env, &registry);
    match client.try_is_person_authorized(caller) {
        Ok(Ok(true)) => Ok(()),
        Ok(Ok(false)) => {
            log!(env, "rejected clinical write", caller.clone());
            Err(ContractError::Unauthorized)
        }
        _ => Err(ContractError::AccessControlUnavailable),
    }
}

/// Gate for the ciphertext paths, which take an optional caller.
///
/// A named caller ends up as `recorded_by` in the entry event, so it must
/// sign under either policy.
pub fn require_encrypted_writer(
    env: &Env,
    caller: &Option<Address>,
) -> Result<(), ContractError> {
    match encrypted_write_policy(env) {
        EncryptedWritePolicy::Ungated => {
            if let Some(account) = caller {
                account.require_auth();
            }
            Ok(())
        }
        EncryptedWritePolicy::Gated => match caller {
            Some(account) => require_writer(env, account),
            None if access_control(env).is_none() => Err(ContractError::NotInitialized),
            None => {
                log!(env, "rejected anonymous ciphertext write");
                Err(ContractError::Unauthorized)
            }
        },
    }
}
