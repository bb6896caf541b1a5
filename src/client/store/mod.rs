pub mod session;
pub mod toast;
pub mod token;

pub use session::{SessionHandle, SessionState};
pub use toast::{Position, Severity, Toast, ToastQueue};
pub use token::{MemoryTokenStore, PlatformTokenStore, TokenStore, TOKEN_KEY};
