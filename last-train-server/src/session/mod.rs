//! Per-visitor session state.
//!
//! A session is a cookie-issued id mapped to a small key/value bag.
//! Bags are created lazily on first reference and evicted after a
//! period of inactivity; the only key the app uses is the stored
//! last calculation, which is consumed on its first render.

mod bag;
mod id;
mod store;

pub use bag::{LAST_CALCULATION_KEY, SessionBag, SessionValue};
pub use id::SessionId;
pub use store::{SessionStore, SessionStoreConfig};
