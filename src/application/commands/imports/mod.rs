// src/application/commands/imports/mod.rs
mod articles;
mod categories;
mod service;
mod tags;

pub use articles::ImportArticlesCommand;
pub use categories::ImportCategoriesCommand;
pub use service::ImportCommandService;
pub use tags::ImportTagsCommand;
