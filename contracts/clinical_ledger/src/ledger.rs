//! Per-patient clinical histories on top of [`ledger_common::sequence`].
//!
//! Each `(patient_gov_id, channel)` pair is its own bucket, so a patient
//! owns four independent sequences. Unknown patients simply have four empty
//! sequences.

use crate::{Bucket, Channel, ContractError};
use ledger_common::sequence;
use soroban_sdk::{Env, IntoVal, String, TryFromVal, Val, Vec};

/// Upper bound on entries returned by one paged read.
pub const MAX_PAGE_SIZE: u32 = 50;

pub fn count(env: &Env, patient_gov_id: &String, channel: Channel) -> u32 {
    sequence::len(env, &Bucket::new(patient_gov_id, channel))
}

/// `(plaintext, ciphertext)` lengths for the procedure or vaccine pair.
pub fn counts(
    env: &Env,
    patient_gov_id: &String,
    plain: Channel,
    cipher: Channel,
) -> (u32, u32) {
    (
        count(env, patient_gov_id, plain),
        count(env, patient_gov_id, cipher),
    )
}

pub fn append<T>(
    env: &Env,
    patient_gov_id: &String,
    channel: Channel,
    entry: &T,
) -> Result<u32, ContractError>
where
    T: IntoVal<Env, Val>,
{
    sequence::append(env, &Bucket::new(patient_gov_id, channel), entry)
        .ok_or(ContractError::SequenceFull)
}

pub fn entry<T>(
    env: &Env,
    patient_gov_id: &String,
    channel: Channel,
    index: u32,
) -> Result<T, ContractError>
where
    T: TryFromVal<Env, Val>,
{
    sequence::get(env, &Bucket::new(patient_gov_id, channel), index)
        .ok_or(ContractError::IndexOutOfRange)
}

/// Entries `start .. min(start + limit, len)`, with `limit` capped at
/// [`MAX_PAGE_SIZE`]. Empty when `start` is at or past the end.
pub fn page<T>(
    env: &Env,
    patient_gov_id: &String,
    channel: Channel,
    start: u32,
    limit: u32,
) -> Vec<T>
where
    T: IntoVal<Env, Val> + TryFromVal<Env, Val>,
{
    let bucket = Bucket::new(patient_gov_id, channel);
    let len = sequence::len(env, &bucket);
    let end = start.saturating_add(limit.min(MAX_PAGE_SIZE)).min(len);

    let mut out = Vec::new(env);
    for index in start..end {
        if let Some(item) = sequence::get(env, &bucket, index) {
            out.push_back(item);
        }
    }
    out
}
