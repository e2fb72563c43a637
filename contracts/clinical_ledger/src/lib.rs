#![no_std]

//! Append-only procedure and vaccine histories per patient.
//!
//! Each patient owns four independent sequences: plaintext procedures,
//! ciphertext procedures, plaintext vaccines and ciphertext vaccines.
//! Indices are stable forever. Plaintext writes require a currently
//! authorized caller, as reported by the access control contract bound at
//! `initialize`. Ciphertext writes follow [`EncryptedWritePolicy`].
//! Ciphertext is stored and returned byte for byte; it is never parsed.

pub mod errors;
pub mod events;
pub mod gate;
pub mod ledger;
pub mod types;
pub mod validation;

use ledger_common::extend_instance;
use soroban_sdk::{
    contract, contractimpl, symbol_short, Address, Bytes, Env, String, Symbol, Vec,
};

pub use errors::{ContractError, ErrorCategory, ErrorSeverity};
pub use ledger::MAX_PAGE_SIZE;
pub use types::{Bucket, Channel, EncryptedWritePolicy, Procedure, Vaccine};

// ── Storage keys ─────────────────────────────────────────────────────────────

const ADMIN: Symbol = symbol_short!("ADMIN");
const INITIALIZED: Symbol = symbol_short!("INIT");

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct ClinicalLedgerContract;

#[contractimpl]
impl ClinicalLedgerContract {
    /// Bind the ledger to the access control contract that decides who may write.
    pub fn initialize(
        env: Env,
        admin: Address,
        access_control: Address,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }

        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&gate::AC_ADDR, &access_control);
        env.storage()
            .instance()
            .set(&gate::POLICY, &EncryptedWritePolicy::Gated);
        env.storage().instance().set(&INITIALIZED, &true);
        extend_instance(&env);

        events::publish_initialized(&env, admin, access_control);

        Ok(())
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&ADMIN)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn get_access_control(env: Env) -> Result<Address, ContractError> {
        gate::access_control(&env).ok_or(ContractError::NotInitialized)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn get_encrypted_write_policy(env: Env) -> EncryptedWritePolicy {
        gate::encrypted_write_policy(&env)
    }

    /// Choose whether ciphertext writes are gated. Admin only.
    pub fn set_encrypted_write_policy(
        env: Env,
        policy: EncryptedWritePolicy,
    ) -> Result<(), ContractError> {
        let admin = Self::get_admin(env.clone())?;
        admin.require_auth();

        env.storage().instance().set(&gate::POLICY, &policy);
        extend_instance(&env);

        events::publish_policy_changed(&env, policy);
        Ok(())
    }

    // ── Procedures ───────────────────────────────────────────────────────────

    /// Append a plaintext procedure and return its index.
    pub fn add_procedure(
        env: Env,
        clinic_or_hospital: String,
        info: String,
        date: u64,
        doctor_gov_id: String,
        patient_gov_id: String,
        caller_account: Address,
    ) -> Result<u32, ContractError> {
        gate::require_writer(&env, &caller_account)?;

        let procedure = Procedure {
            clinic_or_hospital,
            info,
            date,
            doctor_gov_id,
            patient_gov_id: patient_gov_id.clone(),
            recorded_by: caller_account.clone(),
        };
        let index = ledger::append(&env, &patient_gov_id, Channel::Procedure, &procedure)?;

        events::publish_entry_added(
            &env,
            patient_gov_id,
            Channel::Procedure,
            index,
            Some(caller_account),
        );
        Ok(index)
    }

    /// Append an opaque ciphertext procedure and return its index.
    pub fn add_encrypted_procedure(
        env: Env,
        ciphertext: Bytes,
        patient_gov_id: String,
        caller_account: Option<Address>,
    ) -> Result<u32, ContractError> {
        Self::append_ciphertext(
            &env,
            ciphertext,
            patient_gov_id,
            Channel::EncryptedProcedure,
            caller_account,
        )
    }

    /// `(plaintext, ciphertext)` procedure counts for the patient.
    pub fn get_number_of_procedures(env: Env, patient_gov_id: String) -> (u32, u32) {
        ledger::counts(
            &env,
            &patient_gov_id,
            Channel::Procedure,
            Channel::EncryptedProcedure,
        )
    }

    pub fn get_procedure(
        env: Env,
        patient_gov_id: String,
        index: u32,
    ) -> Result<Procedure, ContractError> {
        ledger::entry(&env, &patient_gov_id, Channel::Procedure, index)
    }

    pub fn get_encrypted_procedure(
        env: Env,
        patient_gov_id: String,
        index: u32,
    ) -> Result<Bytes, ContractError> {
        ledger::entry(&env, &patient_gov_id, Channel::EncryptedProcedure, index)
    }

    /// Up to [`MAX_PAGE_SIZE`] plaintext procedures starting at `start`.
    pub fn get_procedures(
        env: Env,
        patient_gov_id: String,
        start: u32,
        limit: u32,
    ) -> Vec<Procedure> {
        ledger::page(&env, &patient_gov_id, Channel::Procedure, start, limit)
    }

    // ── Vaccines ─────────────────────────────────────────────────────────────

    /// Append a plaintext vaccine dose and return its index.
    #[allow(clippy::too_many_arguments)]
    pub fn add_vaccine(
        env: Env,
        name: String,
        lab: String,
        lot: String,
        dose: u64,
        total_doses: u64,
        date: u64,
        patient_gov_id: String,
        caller_account: Address,
    ) -> Result<u32, ContractError> {
        gate::require_writer(&env, &caller_account)?;
        validation::validate_doses(dose, total_doses)?;

        let vaccine = Vaccine {
            name,
            lab,
            lot,
            dose,
            total_doses,
            date,
            patient_gov_id: patient_gov_id.clone(),
            recorded_by: caller_account.clone(),
        };
        let index = ledger::append(&env, &patient_gov_id, Channel::Vaccine, &vaccine)?;

        events::publish_entry_added(
            &env,
            patient_gov_id,
            Channel::Vaccine,
            index,
            Some(caller_account),
        );
        Ok(index)
    }

    /// Append an opaque ciphertext vaccine and return its index.
    pub fn add_encrypted_vaccine(
        env: Env,
        ciphertext: Bytes,
        patient_gov_id: String,
        caller_account: Option<Address>,
    ) -> Result<u32, ContractError> {
        Self::append_ciphertext(
            &env,
            ciphertext,
            patient_gov_id,
            Channel::EncryptedVaccine,
            caller_account,
        )
    }

    /// `(plaintext, ciphertext)` vaccine counts for the patient.
    pub fn get_number_of_vaccines(env: Env, patient_gov_id: String) -> (u32, u32) {
        ledger::counts(
            &env,
            &patient_gov_id,
            Channel::Vaccine,
            Channel::EncryptedVaccine,
        )
    }

    pub fn get_vaccine(
        env: Env,
        patient_gov_id: String,
        index: u32,
    ) -> Result<Vaccine, ContractError> {
        ledger::entry(&env, &patient_gov_id, Channel::Vaccine, index)
    }

    pub fn get_encrypted_vaccine(
        env: Env,
        patient_gov_id: String,
        index: u32,
    ) -> Result<Bytes, ContractError> {
        ledger::entry(&env, &patient_gov_id, Channel::EncryptedVaccine, index)
    }

    /// Up to [`MAX_PAGE_SIZE`] plaintext vaccines starting at `start`.
    pub fn get_vaccines(
        env: Env,
        patient_gov_id: String,
        start: u32,
        limit: u32,
    ) -> Vec<Vaccine> {
        ledger::page(&env, &patient_gov_id, Channel::Vaccine, start, limit)
    }

    pub fn version() -> u32 {
        1
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn append_ciphertext(
        env: &Env,
        ciphertext: Bytes,
        patient_gov_id: String,
        channel: Channel,
        caller_account: Option<Address>,
    ) -> Result<u32, ContractError> {
        gate::require_encrypted_writer(env, &caller_account)?;

        let index = ledger::append(env, &patient_gov_id, channel, &ciphertext)?;

        events::publish_entry_added(env, patient_gov_id, channel, index, caller_account);
        Ok(index)
    }
}
