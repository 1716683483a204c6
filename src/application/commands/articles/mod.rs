// src/application/commands/articles/mod.rs
mod access;
mod create;
mod delete;
mod publish;
mod service;
mod update;
mod views;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use delete::DeleteArticleCommand;
pub use publish::{PublishArticleCommand, UnpublishArticleCommand};
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
pub use views::ViewRecorder;
