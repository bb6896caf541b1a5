use std::{
    cell::Cell,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use learnhub::{
    client::{
        error::AuthError,
        flow::{Destination, LoginForm, LoginOutcome},
        store::{Severity, TokenStore},
    },
    model::auth::Role,
};
use learnhub_test_utils::{
    constant::{PREVIOUS_TOKEN, TEST_EMAIL, TEST_TOKEN},
    prelude::*,
};
use serde_json::json;

#[tokio::test]
// Test that blank credentials are rejected without a request
async fn blank_credentials_skip_request() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    test.auth()
        .create_login_endpoint(Role::User, 200, json!({ "token": TEST_TOKEN }), 0);

    let form = LoginForm {
        email: "   ".to_string(),
        ..factory::login_form(Role::User)
    };
    let outcome = test.services().submit_login(&form, &Cell::new(false)).await;

    test.assert_mocks();
    assert!(matches!(outcome, LoginOutcome::Failed(AuthError::Validation(_))));
    assert!(outcome.is_failure());
    assert_eq!(
        test.notifier.messages_with(Severity::Error),
        vec!["Please enter both email and password".to_string()]
    );
    assert_eq!(test.tokens.get(), None);

    Ok(())
}

#[tokio::test]
// Test the stored token, single session refresh and course redirect after login
async fn successful_login_stores_token_and_navigates() -> Result<(), TestError> {
    let mut test = TestSetup::new()
        .await?
        .with_session(StubSession::resolving_to(factory::session_user(Role::Admin)));
    test.auth().create_login_success_endpoint(Role::Admin, TEST_TOKEN);

    let busy = Cell::new(false);
    let outcome = test
        .services()
        .submit_login(&factory::login_form(Role::Admin), &busy)
        .await;

    test.assert_mocks();
    assert!(matches!(outcome, LoginOutcome::LoggedIn { navigated: true }));
    assert!(!outcome.is_failure());
    assert_eq!(test.tokens.get().as_deref(), Some(TEST_TOKEN));
    assert_eq!(test.session.fetch_calls(), 1);
    assert_eq!(test.navigator.visited(), vec![Destination::Course]);
    assert_eq!(
        test.notifier.messages_with(Severity::Success),
        vec!["Successfully logged in".to_string()]
    );
    assert!(!busy.get());

    Ok(())
}

#[tokio::test]
// Test that there is no redirect when the refreshed session is still empty
async fn stays_on_page_when_session_stays_empty() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    test.auth().create_login_success_endpoint(Role::User, TEST_TOKEN);

    let outcome = test
        .services()
        .submit_login(&factory::login_form(Role::User), &Cell::new(false))
        .await;

    test.assert_mocks();
    assert!(matches!(outcome, LoginOutcome::LoggedIn { navigated: false }));
    assert_eq!(test.tokens.get().as_deref(), Some(TEST_TOKEN));
    assert_eq!(test.session.fetch_calls(), 1);
    assert!(test.navigator.visited().is_empty());

    Ok(())
}

#[tokio::test]
// Test the default credential message when the backend sends none
async fn unauthorized_without_message_uses_default() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    test.auth()
        .create_login_endpoint(Role::User, 401, json!({}), 1);

    let outcome = test
        .services()
        .submit_login(&factory::login_form(Role::User), &Cell::new(false))
        .await;

    test.assert_mocks();
    assert!(matches!(
        outcome,
        LoginOutcome::Failed(AuthError::Credential { status: 401, .. })
    ));
    assert_eq!(
        test.notifier.messages(),
        vec!["Invalid email or password".to_string()]
    );

    Ok(())
}

#[tokio::test]
// Test that the backend message is shown verbatim when present
async fn backend_message_wins_over_default() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    test.auth().create_login_endpoint(
        Role::Instructor,
        400,
        json!({ "message": "Account locked" }),
        1,
    );

    test.services()
        .submit_login(&factory::login_form(Role::Instructor), &Cell::new(false))
        .await;

    test.assert_mocks();
    assert_eq!(test.notifier.messages(), vec!["Account locked".to_string()]);

    Ok(())
}

#[tokio::test]
// Test that a 404 is reported as an unknown user
async fn not_found_reports_unknown_user() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    test.auth()
        .create_login_endpoint(Role::User, 404, json!({}), 1);

    let outcome = test
        .services()
        .submit_login(&factory::login_form(Role::User), &Cell::new(false))
        .await;

    test.assert_mocks();
    assert!(matches!(outcome, LoginOutcome::Failed(AuthError::NotFound { .. })));
    assert_eq!(test.notifier.messages(), vec!["User not found".to_string()]);

    Ok(())
}

#[tokio::test]
// Test the generic message for a 500 internal server error
async fn server_error_uses_generic_message() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    test.auth()
        .create_login_endpoint(Role::User, 500, json!({}), 1);

    test.services()
        .submit_login(&factory::login_form(Role::User), &Cell::new(false))
        .await;

    test.assert_mocks();
    assert_eq!(
        test.notifier.messages(),
        vec!["Login failed, please try again".to_string()]
    );

    Ok(())
}

#[tokio::test]
// Test that a failed login leaves a previously stored token alone
async fn failure_keeps_previous_token() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?.with_stored_token(PREVIOUS_TOKEN)?;
    test.auth()
        .create_login_endpoint(Role::User, 401, json!({ "message": "Nope" }), 1);

    test.services()
        .submit_login(&factory::login_form(Role::User), &Cell::new(false))
        .await;

    test.assert_mocks();
    assert_eq!(test.tokens.load()?.as_deref(), Some(PREVIOUS_TOKEN));
    assert_eq!(test.session.fetch_calls(), 0);
    assert!(test.navigator.visited().is_empty());

    Ok(())
}

#[tokio::test]
// Test that a 2xx without a token is treated as a failed login
async fn success_without_token_is_failure() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    test.auth()
        .create_login_endpoint(Role::User, 200, json!({ "message": "ok" }), 1);

    let outcome = test
        .services()
        .submit_login(&factory::login_form(Role::User), &Cell::new(false))
        .await;

    test.assert_mocks();
    assert!(matches!(outcome, LoginOutcome::Failed(AuthError::MissingToken)));
    assert_eq!(test.tokens.get(), None);
    assert_eq!(
        test.notifier.messages(),
        vec!["Login failed, please try again".to_string()]
    );

    Ok(())
}

#[tokio::test]
// Test the connection error message when the backend cannot be reached
async fn unreachable_backend_reports_network_error() -> Result<(), TestError> {
    let test = TestSetup::unreachable().await?;

    let busy = Cell::new(false);
    let outcome = test
        .services()
        .submit_login(&factory::login_form(Role::User), &busy)
        .await;

    assert!(matches!(outcome, LoginOutcome::Failed(AuthError::Network(_))));
    assert_eq!(
        test.notifier.messages(),
        vec!["Network error, please check your connection".to_string()]
    );
    assert!(!busy.get());

    Ok(())
}

#[tokio::test]
// Test that a submit is dropped while another one is in flight
async fn submit_while_busy_is_ignored() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    test.auth()
        .create_login_endpoint(Role::User, 200, json!({ "token": TEST_TOKEN }), 0);

    let outcome = test
        .services()
        .submit_login(&factory::login_form(Role::User), &Cell::new(true))
        .await;

    test.assert_mocks();
    assert!(matches!(outcome, LoginOutcome::Ignored));
    assert!(!outcome.is_failure());
    assert!(test.notifier.toasts().is_empty());

    Ok(())
}

#[tokio::test]
// Test that the busy flag is raised while the backend handles the request
async fn busy_flag_is_raised_during_request() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let busy = Arc::new(AtomicBool::new(false));
    let observed = Arc::new(AtomicBool::new(false));

    let probe = (busy.clone(), observed.clone());
    let mock = test
        .server
        .mock("POST", "/user/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body_from_request(move |_| {
            probe.1.store(probe.0.load(Ordering::SeqCst), Ordering::SeqCst);
            json!({ "token": TEST_TOKEN }).to_string().into_bytes()
        })
        .create();

    test.services()
        .submit_login(&factory::login_form(Role::User), &*busy)
        .await;

    mock.assert();
    assert!(observed.load(Ordering::SeqCst));
    assert!(!busy.load(Ordering::SeqCst));

    Ok(())
}

#[tokio::test]
// Test that the typed email is sent without trimming
async fn credentials_are_sent_as_typed() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let padded = format!(" {} ", TEST_EMAIL);
    let mock = test
        .server
        .mock("POST", "/user/login")
        .match_body(mockito::Matcher::PartialJson(json!({ "email": padded })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "token": TEST_TOKEN }).to_string())
        .create();

    let form = LoginForm {
        email: padded.clone(),
        ..factory::login_form(Role::User)
    };
    test.services().submit_login(&form, &Cell::new(false)).await;

    mock.assert();

    Ok(())
}
