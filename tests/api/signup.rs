use learnhub::{
    client::{api::AuthApi, error::ApiError},
    model::auth::{RegistrationRequest, Role, PENDING_APPROVAL_MESSAGE},
};
use learnhub_test_utils::{constant::TEST_TOKEN, prelude::*};
use mockito::Matcher;
use serde_json::json;

fn request(role: Role) -> RegistrationRequest {
    RegistrationRequest {
        username: "ada".to_string(),
        email: "ada@example.com".to_string(),
        password: "hunter2".to_string(),
        role,
        profile_image: factory::profile_image(),
    }
}

#[tokio::test]
// Test every text field and the image file part in the multipart body
async fn sends_multipart_form() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test
        .server
        .mock("POST", "/instructor/signup")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="username"\r\n\r\nada\r\n"#.to_string()),
            Matcher::Regex(r#"name="email"\r\n\r\nada@example.com\r\n"#.to_string()),
            Matcher::Regex(r#"name="password"\r\n\r\nhunter2\r\n"#.to_string()),
            Matcher::Regex(r#"name="role"\r\n\r\ninstructor\r\n"#.to_string()),
            Matcher::Regex(r#"name="profileImage"; filename="avatar.png""#.to_string()),
            Matcher::Regex("Content-Type: image/png".to_string()),
            Matcher::Regex("not-really-a-png".to_string()),
        ]))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(json!({ "token": TEST_TOKEN, "message": "Registered" }).to_string())
        .create();

    let response = test.api().signup(&request(Role::Instructor)).await;

    mock.assert();
    let response = response.unwrap();
    assert_eq!(response.token.as_deref(), Some(TEST_TOKEN));
    assert!(!response.is_pending_approval());

    Ok(())
}

#[tokio::test]
// Test that the pending approval message survives decoding untouched
async fn decodes_pending_approval_message() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    test.auth().create_signup_endpoint(
        Role::Instructor,
        200,
        json!({ "token": TEST_TOKEN, "message": PENDING_APPROVAL_MESSAGE }),
        1,
    );

    let response = test.api().signup(&request(Role::Instructor)).await;

    test.assert_mocks();
    assert!(response.unwrap().is_pending_approval());

    Ok(())
}

#[tokio::test]
// Test that a non-2xx signup is an error even when the body parses
async fn error_status_is_not_success() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    test.auth().create_signup_endpoint(
        Role::User,
        409,
        json!({ "message": "Email already registered" }),
        1,
    );

    let result = test.api().signup(&request(Role::User)).await;

    test.assert_mocks();
    assert_eq!(
        result.unwrap_err(),
        ApiError::Status {
            status: 409,
            message: Some("Email already registered".to_string())
        }
    );

    Ok(())
}

#[tokio::test]
// Test that an unparsable content type fails before anything is sent
async fn rejects_invalid_image_content_type() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    test.auth()
        .create_signup_endpoint(Role::User, 200, json!({ "token": TEST_TOKEN }), 0);

    let mut request = request(Role::User);
    request.profile_image.content_type = Some("not a mime type".to_string());
    let result = test.api().signup(&request).await;

    test.assert_mocks();
    assert!(matches!(result, Err(ApiError::InvalidRequest(_))));

    Ok(())
}
