//! Mock HTTP endpoints for the authentication backend.

use learnhub::model::{auth::Role, user::SessionUser};
use mockito::{Matcher, Mock};
use serde_json::{json, Value};

use crate::setup::TestSetup;

pub struct AuthFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl TestSetup {
    pub fn auth(&mut self) -> AuthFixtures<'_> {
        AuthFixtures { setup: self }
    }
}

impl<'a> AuthFixtures<'a> {
    /// `POST /{role}/login` answering `status` with a JSON `body`.
    ///
    /// `TestSetup::assert_mocks` verifies the endpoint saw `expected_requests` calls.
    pub fn create_login_endpoint(
        &mut self,
        role: Role,
        status: usize,
        body: Value,
        expected_requests: usize,
    ) {
        let mock = self
            .setup
            .server
            .mock("POST", format!("/{}/login", role.as_str()).as_str())
            .match_header("content-type", "application/json")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create();

        self.track(mock);
    }

    pub fn create_login_success_endpoint(&mut self, role: Role, token: &str) {
        self.create_login_endpoint(role, 200, json!({ "token": token }), 1)
    }

    /// `POST /{role}/signup` answering `status` with a JSON `body`.
    ///
    /// Only matches multipart bodies carrying every form field the client must send.
    pub fn create_signup_endpoint(
        &mut self,
        role: Role,
        status: usize,
        body: Value,
        expected_requests: usize,
    ) {
        let mock = self
            .setup
            .server
            .mock("POST", format!("/{}/signup", role.as_str()).as_str())
            .match_header(
                "content-type",
                Matcher::Regex("^multipart/form-data; boundary=".to_string()),
            )
            .match_body(Matcher::AllOf(
                ["username", "email", "password", "role", "profileImage"]
                    .iter()
                    .map(|field| Matcher::Regex(format!(r#"name="{}""#, field)))
                    .collect(),
            ))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create();

        self.track(mock);
    }

    /// `GET /me` resolving `token` to `user`.
    pub fn create_session_endpoint(&mut self, token: &str, user: &SessionUser) {
        let body = serde_json::to_string(user).expect("session user serializes");

        let mock = self
            .setup
            .server
            .mock("GET", "/me")
            .match_header("authorization", format!("Bearer {}", token).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create();

        self.track(mock);
    }

    // Mocks are removed from the server when dropped, so the setup owns them.
    fn track(&mut self, mock: Mock) {
        self.setup.mocks.push(mock);
    }
}
