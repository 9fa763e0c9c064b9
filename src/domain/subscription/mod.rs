pub mod entity;
pub mod repository;

pub use entity::{Subscription, SubscriptionTarget};
pub use repository::SubscriptionRepository;
