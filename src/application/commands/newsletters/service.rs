use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{newsletter::NewsletterRepository, publisher::PublisherRepository},
};

pub struct NewsletterCommandService {
    pub(super) newsletter_repo: Arc<dyn NewsletterRepository>,
    pub(super) publisher_repo: Arc<dyn PublisherRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl NewsletterCommandService {
    pub fn new(
        newsletter_repo: Arc<dyn NewsletterRepository>,
        publisher_repo: Arc<dyn PublisherRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            newsletter_repo,
            publisher_repo,
            clock,
        }
    }
}
