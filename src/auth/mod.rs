//! Hardcoded single-session auth stub. Not real authentication: one literal
//! credential pair, one session record, mirrored into a pluggable storage.

pub mod router;
pub mod service;
pub mod session;

pub use router::auth_router;
pub use service::{AuthError, AuthService, DEMO_PASSWORD, DEMO_USERNAME};
pub use session::{
    FileSessionStorage, InMemorySessionStorage, SessionRecord, SessionStorage,
    SessionStorageError, SESSION_STORAGE_KEY,
};
