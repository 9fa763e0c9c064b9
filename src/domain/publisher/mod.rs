pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewPublisher, Publisher, PublisherMembers};
pub use repository::PublisherRepository;
pub use value_objects::{MembershipKind, PublisherId, PublisherName};
