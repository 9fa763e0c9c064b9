pub mod article;
pub mod errors;
pub mod newsletter;
pub mod notification;
pub mod pagination;
pub mod publisher;
pub mod subscription;
pub mod user;
