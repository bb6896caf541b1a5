use learnhub::{
    client::{api::AuthApi, error::ApiError},
    model::auth::{LoginRequest, Role},
};
use learnhub_test_utils::{
    constant::{TEST_EMAIL, TEST_PASSWORD, TEST_TOKEN},
    prelude::*,
};
use mockito::Matcher;
use serde_json::json;

fn request(role: Role) -> LoginRequest {
    LoginRequest {
        role,
        email: TEST_EMAIL.to_string(),
        password: TEST_PASSWORD.to_string(),
    }
}

#[tokio::test]
// Test that the role selects the path and is repeated in the JSON body
async fn posts_credentials_to_role_endpoint() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test
        .server
        .mock("POST", "/instructor/login")
        .match_body(Matcher::Json(json!({
            "role": "instructor",
            "email": TEST_EMAIL,
            "password": TEST_PASSWORD,
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "token": TEST_TOKEN, "user": { "id": 1 } }).to_string())
        .create();

    let response = test.api().login(&request(Role::Instructor)).await;

    mock.assert();
    let response = response.unwrap();
    assert_eq!(response.token.as_deref(), Some(TEST_TOKEN));

    Ok(())
}

#[tokio::test]
// Test that the backend `{message}` is carried on error statuses
async fn keeps_backend_message_on_error_status() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    test.auth().create_login_endpoint(
        Role::User,
        401,
        json!({ "message": "Wrong password" }),
        1,
    );

    let result = test.api().login(&request(Role::User)).await;

    test.assert_mocks();
    assert_eq!(
        result.unwrap_err(),
        ApiError::Status {
            status: 401,
            message: Some("Wrong password".to_string())
        }
    );

    Ok(())
}

#[tokio::test]
// Test that no message is kept when the error body is not the expected JSON shape
async fn tolerates_non_json_error_body() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test
        .server
        .mock("POST", "/admin/login")
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create();

    let result = test.api().login(&request(Role::Admin)).await;

    mock.assert();
    assert_eq!(
        result.unwrap_err(),
        ApiError::Status {
            status: 502,
            message: None
        }
    );

    Ok(())
}

#[tokio::test]
// Test the decode error for a 2xx body that is not JSON
async fn rejects_undecodable_success_body() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test
        .server
        .mock("POST", "/user/login")
        .with_status(200)
        .with_body("ok")
        .create();

    let result = test.api().login(&request(Role::User)).await;

    mock.assert();
    assert!(matches!(result, Err(ApiError::Decode(_))));

    Ok(())
}

#[tokio::test]
// Test the network error when nothing answers
async fn reports_network_error_without_response() -> Result<(), TestError> {
    let test = TestSetup::unreachable().await?;

    let result = test.api().login(&request(Role::User)).await;

    assert!(matches!(result, Err(ApiError::Network(_))));

    Ok(())
}
