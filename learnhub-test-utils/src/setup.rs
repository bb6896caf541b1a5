use learnhub::client::{
    api::HttpAuthApi,
    config::Config,
    flow::PageServices,
    store::{MemoryTokenStore, TokenStore},
};
use mockito::{Mock, Server, ServerGuard};

use crate::{
    constant::UNREACHABLE_BASE_URL,
    doubles::{RecordingNavigator, RecordingNotifier, StubSession},
    error::TestError,
};

pub type TestServices = PageServices<
    HttpAuthApi,
    MemoryTokenStore,
    RecordingNotifier,
    RecordingNavigator,
    StubSession,
>;

/// A mock backend plus recording collaborators for one test
pub struct TestSetup {
    pub server: ServerGuard,
    pub config: Config,
    pub tokens: MemoryTokenStore,
    pub notifier: RecordingNotifier,
    pub navigator: RecordingNavigator,
    pub session: StubSession,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;
        let config = Config::new(&server.url(), None)?;

        Ok(Self {
            server,
            config,
            tokens: MemoryTokenStore::new(),
            notifier: RecordingNotifier::default(),
            navigator: RecordingNavigator::default(),
            session: StubSession::empty(),
            mocks: Vec::new(),
        })
    }

    /// Point the client at an address nothing listens on
    pub async fn unreachable() -> Result<Self, TestError> {
        let mut setup = Self::new().await?;
        setup.config = Config::new(UNREACHABLE_BASE_URL, None)?;
        Ok(setup)
    }

    pub fn with_session(mut self, session: StubSession) -> Self {
        self.session = session;
        self
    }

    pub fn with_stored_token(self, token: &str) -> Result<Self, TestError> {
        self.tokens.save(token)?;
        Ok(self)
    }

    pub fn api(&self) -> HttpAuthApi {
        HttpAuthApi::new(self.config.clone())
    }

    /// Services sharing state with this setup's doubles
    pub fn services(&self) -> TestServices {
        PageServices::new(
            self.api(),
            self.tokens.clone(),
            self.notifier.clone(),
            self.navigator.clone(),
            self.session.clone(),
        )
    }

    /// Assert all mock endpoints were called as expected.
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
