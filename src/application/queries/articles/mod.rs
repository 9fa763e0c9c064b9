mod feeds;
mod get_by_id;
mod service;

pub use feeds::ListArticlesQuery;
pub use service::ArticleQueryService;
