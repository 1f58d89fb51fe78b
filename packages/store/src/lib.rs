pub mod credentials;

mod memory;
pub use memory::MemoryCredentials;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileCredentials;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageCredentials;

pub use credentials::{CredentialStore, TOKEN_KEY};
