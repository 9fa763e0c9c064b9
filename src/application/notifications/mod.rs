mod dispatcher;
mod message;

pub use dispatcher::{DispatchSignal, NotificationDispatcher};
pub use message::{ArticleAnnouncement, SOCIAL_POST_LIMIT, article_url};
