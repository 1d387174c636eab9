pub mod router;
pub mod types;
pub mod handlers {
    pub mod admin;
    pub mod common;
    pub mod favorites;
    pub mod health;
    pub mod randomizer;
    pub mod restaurants;
    pub mod reviews;
    pub mod users;
}

pub use router::{create_router, ApiDoc};
pub use types::AppState;
