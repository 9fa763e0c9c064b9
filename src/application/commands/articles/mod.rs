// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod review;
mod service;
mod update;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use delete::DeleteArticleCommand;
pub use review::{ReviewArticleCommand, ReviewDecision};
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
