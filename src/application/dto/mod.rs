pub mod articles;
pub mod auth;
pub mod newsletters;
pub mod pagination;
pub mod publishers;
pub mod serde_time;
pub mod subscriptions;
pub mod users;

pub use articles::ArticleDto;
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use newsletters::NewsletterDto;
pub use pagination::PaginatedResult;
pub use publishers::{PublisherDetailDto, PublisherDto};
pub use subscriptions::{SubscribeOutcome, SubscriptionDto, SubscriptionListDto};
pub use users::{CapabilityView, SessionView, UserDto, UserProfileDto};
