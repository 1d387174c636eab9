pub mod directory_service;
pub mod seed;
