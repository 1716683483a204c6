pub mod article;
pub mod authorization;
pub mod errors;
pub mod taxonomy;
pub mod user;
