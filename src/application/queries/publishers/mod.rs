use std::sync::Arc;

use crate::{
    application::{
        dto::{PaginatedResult, PublisherDetailDto, PublisherDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        pagination::PageRequest,
        publisher::{PublisherId, PublisherRepository},
    },
};

pub struct PublisherQueryService {
    publisher_repo: Arc<dyn PublisherRepository>,
}

impl PublisherQueryService {
    pub fn new(publisher_repo: Arc<dyn PublisherRepository>) -> Self {
        Self { publisher_repo }
    }

    pub async fn list_publishers(
        &self,
        page: PageRequest,
    ) -> ApplicationResult<PaginatedResult<PublisherDto>> {
        let page = self.publisher_repo.list(page).await?;
        Ok(PaginatedResult::from_page(page))
    }

    pub async fn get_publisher(&self, id: i64) -> ApplicationResult<PublisherDetailDto> {
        let id =
            PublisherId::new(id).map_err(|_| ApplicationError::not_found("publisher not found"))?;
        let publisher = self
            .publisher_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("publisher not found"))?;
        let members = self.publisher_repo.members(id).await?;
        Ok(PublisherDetailDto::from_parts(publisher, members))
    }
}
