pub mod constant;
pub mod doubles;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use error::TestError;
pub use setup::{TestServices, TestSetup};

pub mod prelude {
    pub use crate::{
        doubles::{RecordingNavigator, RecordingNotifier, StubSession},
        fixtures::factory,
        TestError, TestServices, TestSetup,
    };
}
