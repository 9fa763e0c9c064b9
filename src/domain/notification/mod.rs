pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewNotificationJob, NotificationDelivery, NotificationJob};
pub use repository::OutboxRepository;
pub use value_objects::{DeliveryChannel, JobId, JobStatus};
