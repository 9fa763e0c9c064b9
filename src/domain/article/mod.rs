pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{Article, ArticleContentUpdate, ArticleReview, NewArticle};
pub use repository::{ArticleFeed, ArticleReadRepository, ArticleWriteRepository};
pub use specifications::ArticleOwnershipSpec;
pub use value_objects::{ArticleBody, ArticleId, ArticleStatus, ArticleTitle};
