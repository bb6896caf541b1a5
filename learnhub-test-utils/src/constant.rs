//! Values shared by the fixtures. None of them are real credentials.

pub static TEST_EMAIL: &str = "ada@example.com";

pub static TEST_PASSWORD: &str = "correct horse battery staple";

pub static TEST_USERNAME: &str = "ada";

/// Token the mock backend issues on success
pub static TEST_TOKEN: &str = "abc123";

/// Token already present in storage before a test runs
pub static PREVIOUS_TOKEN: &str = "previous-token";

/// Address nothing listens on, used to provoke network failures
pub static UNREACHABLE_BASE_URL: &str = "http://127.0.0.1:9";
