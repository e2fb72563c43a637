use soroban_sdk::{contracttype, Address, String};

/// A procedure performed on a patient. Appended once, never changed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Procedure {
    pub clinic_or_hospital: String,
    /// Free text; may contain newlines.
    pub info: String,
    pub date: u64,
    pub doctor_gov_id: String,
    pub patient_gov_id: String,
    pub recorded_by: Address,
}

/// A vaccine dose given to a patient. Appended once, never changed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Vaccine {
    pub name: String,
    pub lab: String,
    pub lot: String,
    pub dose: u64,
    pub total_doses: u64,
    pub date: u64,
    pub patient_gov_id: String,
    pub recorded_by: Address,
}

/// The four independent histories each patient owns.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Channel {
    Procedure,
    EncryptedProcedure,
    Vaccine,
    EncryptedVaccine,
}

/// One append-only history: a patient and a channel.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bucket {
    pub patient_gov_id: String,
    pub channel: Channel,
}

impl Bucket {
    pub fn new(patient_gov_id: &String, channel: Channel) -> Self {
        Self {
            patient_gov_id: patient_gov_id.clone(),
            channel,
        }
    }
}

/// Whether the ciphertext write paths go through the writer gate.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EncryptedWritePolicy {
    /// Any caller may append ciphertext; the caller is only recorded.
    Ungated,
    /// The caller must be present and currently authorized.
    Gated,
}
