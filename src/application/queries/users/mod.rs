use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, PaginatedResult, UserDto, UserProfileDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        pagination::PageRequest,
        user::{Role, UserRepository},
    },
};

pub struct UserQueryService {
    users: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl UserQueryService {
    pub fn new(users: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { users, clock }
    }

    /// The caller's account together with the capabilities their token grants.
    pub async fn get_profile(&self, actor: &AuthenticatedUser) -> ApplicationResult<UserProfileDto> {
        let user = self
            .users
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;
        Ok(UserProfileDto::from_parts(user, actor, self.clock.now()))
    }

    /// Active journalists, ordered by username.
    pub async fn list_journalists(
        &self,
        page: PageRequest,
    ) -> ApplicationResult<PaginatedResult<UserDto>> {
        let page = self.users.list_by_role(Role::Journalist, page).await?;
        Ok(PaginatedResult::from_page(page))
    }
}
