mod service;
mod subscribe;

pub use service::SubscriptionCommandService;
pub use subscribe::SubscriptionTargetRef;
