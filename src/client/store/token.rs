//! Durable storage of the authentication token.
//!
//! The token lives in a single slot keyed by [`TOKEN_KEY`]. The browser build keeps it in
//! `localStorage`; native builds keep it in a file under the platform config directory.

use std::{cell::RefCell, rc::Rc};

use crate::client::error::StorageError;

/// Name of the slot holding the auth token
pub const TOKEN_KEY: &str = "token";

pub trait TokenStore {
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn save(&self, token: &str) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

impl<T: TokenStore + ?Sized> TokenStore for Rc<T> {
    fn load(&self) -> Result<Option<String>, StorageError> {
        (**self).load()
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        (**self).save(token)
    }

    fn clear(&self) -> Result<(), StorageError> {
        (**self).clear()
    }
}

/// Process local store, shared between clones
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(token.to_string()))),
        }
    }

    pub fn get(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.get())
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.slot.borrow_mut().take();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserTokenStore as PlatformTokenStore;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileTokenStore as PlatformTokenStore;

#[cfg(target_arch = "wasm32")]
mod browser {
    use web_sys::Storage;

    use super::{TokenStore, TOKEN_KEY};
    use crate::client::error::StorageError;

    /// `window.localStorage` backed store
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserTokenStore;

    impl BrowserTokenStore {
        pub fn open() -> Result<Self, StorageError> {
            local_storage().map(|_| Self)
        }
    }

    fn local_storage() -> Result<Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }

    impl TokenStore for BrowserTokenStore {
        fn load(&self) -> Result<Option<String>, StorageError> {
            local_storage()?
                .get_item(TOKEN_KEY)
                .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
        }

        fn save(&self, token: &str) -> Result<(), StorageError> {
            local_storage()?
                .set_item(TOKEN_KEY, token)
                .map_err(|e| StorageError::Write(format!("{:?}", e)))
        }

        fn clear(&self) -> Result<(), StorageError> {
            local_storage()?
                .remove_item(TOKEN_KEY)
                .map_err(|e| StorageError::Write(format!("{:?}", e)))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::{fs, io, path::PathBuf};

    use directories::ProjectDirs;

    use super::{TokenStore, TOKEN_KEY};
    use crate::client::error::StorageError;

    /// Stores the token as a plain file named after [`TOKEN_KEY`]
    #[derive(Debug, Clone)]
    pub struct FileTokenStore {
        path: PathBuf,
    }

    impl FileTokenStore {
        pub fn at(dir: impl Into<PathBuf>) -> Self {
            Self {
                path: dir.into().join(TOKEN_KEY),
            }
        }

        /// Store under the per-user config directory, e.g. `~/.config/learnhub/token`
        pub fn open() -> Result<Self, StorageError> {
            let dirs = ProjectDirs::from("com", "LearnHub", "learnhub").ok_or_else(|| {
                StorageError::Unavailable("no home directory for this user".to_string())
            })?;

            Ok(Self::at(dirs.config_dir()))
        }
    }

    impl TokenStore for FileTokenStore {
        fn load(&self) -> Result<Option<String>, StorageError> {
            match fs::read_to_string(&self.path) {
                Ok(token) if token.trim().is_empty() => Ok(None),
                Ok(token) => Ok(Some(token.trim().to_string())),
                Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
                Err(err) => Err(err.into()),
            }
        }

        fn save(&self, token: &str) -> Result<(), StorageError> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, token)?;
            Ok(())
        }

        fn clear(&self) -> Result<(), StorageError> {
            match fs::remove_file(&self.path) {
                Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err.into()),
                _ => Ok(()),
            }
        }
    }

}
