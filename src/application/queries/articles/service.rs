use std::sync::Arc;

use crate::domain::{
    article::ArticleReadRepository, publisher::PublisherRepository, user::UserRepository,
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) publisher_repo: Arc<dyn PublisherRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        publisher_repo: Arc<dyn PublisherRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            read_repo,
            publisher_repo,
            user_repo,
        }
    }
}
