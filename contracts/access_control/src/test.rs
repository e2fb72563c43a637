#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::arithmetic_side_effects
)]

use super::*;
use soroban_sdk::testutils::{Address as _, Events};
use soroban_sdk::xdr::{ContractEventBody, ScVal};
use soroban_sdk::{Env, IntoVal, TryFromVal, Val, Vec};

/// Compares the most recent event against the expected topics and payload.
fn assert_last_event(env: &Env, topics: Vec<Val>, data: Val) {
    let events = env.events().all();
    let event = events.events().last().unwrap();
    let ContractEventBody::V0(body) = &event.body;

    assert_eq!(body.topics.len(), topics.len() as usize);
    for (actual, expected) in body.topics.iter().zip(topics.iter()) {
        assert_eq!(*actual, ScVal::try_from_val(env, &expected).unwrap());
    }
    assert_eq!(body.data, ScVal::try_from_val(env, &data).unwrap());
}

fn setup() -> (Env, AccessControlContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(AccessControlContract, ());
    let client = AccessControlContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(
        &admin,
        &String::from_str(&env, "Fabio"),
        &String::from_str(&env, "Benjovengo"),
        &String::from_str(&env, "12312312312"),
        &1_680_000_000,
    );

    (env, client, admin)
}

fn register(env: &Env, client: &AccessControlContractClient, first: &str, account: &Address) {
    client.set_authorized_person(
        &String::from_str(env, first),
        &String::from_str(env, "Doe"),
        &String::from_str(env, "12481632641"),
        &1_690_000_000,
        account,
    );
}

#[test]
fn test_initialize_registers_admin() {
    let (env, client, admin) = setup();

    assert!(client.is_initialized());
    assert_eq!(client.get_admin(), admin);
    assert!(client.is_person_authorized(&admin));
    assert_eq!(client.get_grant_policy(), GrantPolicy::AdminOnly);

    let person = client.get_authorized_person(&admin);
    assert_eq!(person.first_name, String::from_str(&env, "Fabio"));
    assert_eq!(person.registered_at, 1_680_000_000);
    assert_eq!(person.account, admin);
}

#[test]
fn test_double_initialize_fails() {
    let (env, client, _admin) = setup();

    let result = client.try_initialize(
        &Address::generate(&env),
        &String::from_str(&env, "Eve"),
        &String::from_str(&env, "Mallory"),
        &String::from_str(&env, "00000000000"),
        &0,
    );
    assert_eq!(result, Err(Ok(ContractError::AlreadyInitialized)));
}

#[test]
fn test_set_authorized_person_grants() {
    let (env, client, _admin) = setup();
    let account = Address::generate(&env);

    register(&env, &client, "John", &account);

    let person = client.get_authorized_person(&account);
    assert!(person.is_authorized);
    assert_eq!(person.first_name, String::from_str(&env, "John"));
    assert_eq!(person.last_name, String::from_str(&env, "Doe"));
    assert_eq!(person.gov_id, String::from_str(&env, "12481632641"));
    assert!(client.is_person_authorized(&account));
}

#[test]
fn test_second_registration_overwrites_fields() {
    let (env, client, _admin) = setup();
    let account = Address::generate(&env);

    register(&env, &client, "Jane", &account);
    client.deauthorize_person(&account);
    register(&env, &client, "Janet", &account);

    let person = client.get_authorized_person(&account);
    assert_eq!(person.first_name, String::from_str(&env, "Janet"));
    assert!(client.is_person_authorized(&account));
}

#[test]
fn test_toggle_keeps_identity_fields() {
    let (env, client, _admin) = setup();
    let account = Address::generate(&env);
    register(&env, &client, "Jane", &account);

    client.deauthorize_person(&account);
    assert!(!client.is_person_authorized(&account));

    client.authorize_person(&account);
    assert!(client.is_person_authorized(&account));

    let person = client.get_authorized_person(&account);
    assert_eq!(person.first_name, String::from_str(&env, "Jane"));
    assert_eq!(person.last_name, String::from_str(&env, "Doe"));
    assert_eq!(person.gov_id, String::from_str(&env, "12481632641"));
    assert_eq!(person.registered_at, 1_690_000_000);
}

#[test]
fn test_unknown_account_reads_empty() {
    let (env, client, _admin) = setup();
    let stranger = Address::generate(&env);

    assert!(!client.is_person_authorized(&stranger));
    assert_eq!(
        client.get_authorized_person(&stranger),
        AuthorizedPerson::empty(&env, stranger.clone())
    );
}

#[test]
fn test_authorize_unknown_account_creates_empty_record() {
    let (env, client, _admin) = setup();
    let account = Address::generate(&env);

    client.authorize_person(&account);

    let person = client.get_authorized_person(&account);
    assert!(person.is_authorized);
    assert_eq!(person.first_name, String::from_str(&env, ""));
    assert_eq!(person.registered_at, 0);
}

#[test]
fn test_registry_write_before_initialize_fails() {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(AccessControlContract, ());
    let client = AccessControlContractClient::new(&env, &contract_id);

    let account = Address::generate(&env);
    let result = client.try_authorize_person(&account);
    assert_eq!(result, Err(Ok(ContractError::NotInitialized)));
    assert!(!client.is_person_authorized(&account));
}

#[test]
fn test_admin_only_policy_requires_admin_auth() {
    let (env, client, admin) = setup();
    let account = Address::generate(&env);

    client.authorize_person(&account);

    let auths = env.auths();
    assert_eq!(auths.len(), 1);
    assert_eq!(auths[0].0, admin);
}

#[test]
fn test_open_policy_skips_admin_auth() {
    let (env, client, _admin) = setup();
    client.set_grant_policy(&GrantPolicy::Open);
    assert_eq!(client.get_grant_policy(), GrantPolicy::Open);

    let account = Address::generate(&env);
    client.authorize_person(&account);

    assert!(env.auths().is_empty());
    assert!(client.is_person_authorized(&account));
}

#[test]
#[should_panic]
fn test_admin_only_policy_rejects_without_auth() {
    let env = Env::default();
    let contract_id = env.register(AccessControlContract, ());
    let client = AccessControlContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(
        &admin,
        &String::from_str(&env, "Fabio"),
        &String::from_str(&env, "Benjovengo"),
        &String::from_str(&env, "12312312312"),
        &0,
    );

    // No auths are mocked, so the admin signature is missing.
    client.authorize_person(&Address::generate(&env));
}

#[test]
fn test_authorization_change_event() {
    let (env, client, _admin) = setup();
    let account = Address::generate(&env);

    client.deauthorize_person(&account);

    assert_last_event(
        &env,
        (symbol_short!("PER_AUTH"), account.clone()).into_val(&env),
        events::AuthorizationChangedEvent {
            account: account.clone(),
            is_authorized: false,
            timestamp: env.ledger().timestamp(),
        }
        .into_val(&env),
    );
}

#[test]
fn test_error_classification() {
    assert_eq!(
        ContractError::Unauthorized.category(),
        ErrorCategory::Authorization
    );
    assert_eq!(ContractError::Unauthorized.severity(), ErrorSeverity::Medium);
    assert!(!ContractError::NotInitialized.retryable());
    assert_eq!(ContractError::AlreadyInitialized as u32, 2);
}
