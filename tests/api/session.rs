use learnhub::{client::api::AuthApi, client::error::ApiError, model::auth::Role};
use learnhub_test_utils::{constant::TEST_TOKEN, prelude::*};
use serde_json::json;

#[tokio::test]
// Test that the token is sent as a bearer token and the user decoded
async fn resolves_user_for_token() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let user = factory::session_user(Role::Instructor);
    test.auth().create_session_endpoint(TEST_TOKEN, &user);

    let result = test.api().current_user(TEST_TOKEN).await;

    test.assert_mocks();
    assert_eq!(result.unwrap(), Some(user));

    Ok(())
}

#[tokio::test]
// Test decoding of documents using `_id` and `profileImage`
async fn accepts_backend_field_names() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test
        .server
        .mock("GET", "/me")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "_id": "65a1",
                "username": "grace",
                "email": "grace@example.com",
                "role": "admin",
                "profileImage": "https://cdn.example.com/grace.png"
            })
            .to_string(),
        )
        .create();

    let user = test.api().current_user(TEST_TOKEN).await.unwrap().unwrap();

    mock.assert();
    assert_eq!(user.id, "65a1");
    assert_eq!(user.role, Role::Admin);
    assert_eq!(
        user.profile_image.as_deref(),
        Some("https://cdn.example.com/grace.png")
    );

    Ok(())
}

#[tokio::test]
// Test that an unknown token means "no session" rather than an error
async fn unauthorized_means_no_session() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test.server.mock("GET", "/me").with_status(401).create();

    let result = test.api().current_user("expired").await;

    mock.assert();
    assert_eq!(result, Ok(None));

    Ok(())
}

#[tokio::test]
// Test that server failures surface as errors
async fn server_error_is_reported() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test.server.mock("GET", "/me").with_status(500).create();

    let result = test.api().current_user(TEST_TOKEN).await;

    mock.assert();
    assert!(matches!(result, Err(ApiError::Status { status: 500, .. })));

    Ok(())
}
