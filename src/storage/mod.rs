//! Persistence boundary: string key/value stores and the JSON adapter the ledgers sit on.

pub mod json_store;
pub mod kv;

pub use json_store::JsonStore;
pub use kv::{FileStore, KeyValueStore, MemoryStore, PostgresStore};

// Collection keys. Each holds a JSON-serialized array.
pub const FAVORITES_KEY: &str = "lunchboxd_favorites";
pub const REVIEWS_KEY: &str = "lunchboxd_reviews";
pub const USERS_KEY: &str = "lunchboxd_users";
pub const RESTAURANT_REQUESTS_KEY: &str = "lunchboxd_restaurant_requests";
pub const CONTACT_MESSAGES_KEY: &str = "lunchboxd_contact_messages";
