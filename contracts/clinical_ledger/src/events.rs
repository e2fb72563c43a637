use crate::{Channel, EncryptedWritePolicy};
use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

/// Event published when the ledger is initialized.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub access_control: Address,
    pub timestamp: u64,
}

/// Event published when an entry is appended to a patient history.
/// Carries no clinical content and no ciphertext.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EntryAddedEvent {
    pub patient_gov_id: String,
    pub channel: Channel,
    pub index: u32,
    pub recorded_by: Option<Address>,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PolicyChangedEvent {
    pub policy: EncryptedWritePolicy,
    pub timestamp: u64,
}

pub fn publish_initialized(env: &Env, admin: Address, access_control: Address) {
    let topics = (symbol_short!("INIT"),);
    let data = InitializedEvent {
        admin,
        access_control,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

fn topic_for(channel: Channel) -> Symbol {
    match channel {
        Channel::Procedure | Channel::EncryptedProcedure => symbol_short!("PROC_ADD"),
        Channel::Vaccine | Channel::EncryptedVaccine => symbol_short!("VACC_ADD"),
    }
}

/// Publishes an event when an entry lands in any of the four channels.
pub fn publish_entry_added(
    env: &Env,
    patient_gov_id: String,
    channel: Channel,
    index: u32,
    recorded_by: Option<Address>,
) {
    let topics = (topic_for(channel), patient_gov_id.clone());
    let data = EntryAddedEvent {
        patient_gov_id,
        channel,
        index,
        recorded_by,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_policy_changed(env: &Env, policy: EncryptedWritePolicy) {
    let topics = (symbol_short!("POLICY"),);
    let data = PolicyChangedEvent {
        policy,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
