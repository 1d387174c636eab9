//! Directory domain: restaurant records, the query engine, the ledgers and the randomizer.
//!
//! The ledgers own their collections and are the only code that mutates them.
//! Each mutation saves the candidate collection through [`crate::storage::JsonStore`]
//! and only replaces the in-memory copy once the save succeeds.

pub mod admin;
pub mod catalogue;
pub mod error;
pub mod favorites;
pub mod ids;
pub mod query;
pub mod randomizer;
pub mod restaurant;
pub mod reviews;
pub mod users;

pub use admin::AdminInbox;
pub use catalogue::Catalogue;
pub use error::{DirectoryError, DirectoryResult};
pub use favorites::{Favorite, FavoritesLedger};
pub use query::{filter_options, filter_restaurants, paginate, FilterCriteria, FilterOptions, Page};
pub use randomizer::{pick_one, reroll_distinct, spin_wheel, Wheel, WheelSpin};
pub use restaurant::{BudgetRange, Restaurant, Side};
pub use reviews::{Review, ReviewLedger};
pub use users::{User, UserDirectory};
