pub mod entity;
pub mod repository;

pub use entity::{NewNewsletter, Newsletter, NewsletterId};
pub use repository::NewsletterRepository;
