use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, NewUser, PasswordHash, Role, User, Username},
};

pub struct RegisterUserCommand {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<Role>,
}

impl UserCommandService {
    /// Open registration: the caller picks their own role, defaulting to reader.
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        validate_password(&command.password)?;
        let email = command
            .email
            .filter(|value| !value.trim().is_empty())
            .map(|value| Email::new(value.trim()))
            .transpose()?;
        let role = command.role.unwrap_or_default();

        if self.users.find_by_username(&username).await?.is_some() {
            return Err(ApplicationError::conflict("username already exists"));
        }

        let user = self
            .create_and_insert_user(
                username,
                email,
                command.first_name.unwrap_or_default(),
                command.last_name.unwrap_or_default(),
                &command.password,
                role,
            )
            .await?;

        tracing::info!(user_id = %user.id, role = %user.role, "registered user");
        Ok(user.into())
    }

    async fn create_and_insert_user(
        &self,
        username: Username,
        email: Option<Email>,
        first_name: String,
        last_name: String,
        password: &str,
        role: Role,
    ) -> ApplicationResult<User> {
        let hashed = self.hasher.hash(password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let created_at = self.clock.now();
        let new_user = NewUser::new(username, email, password_hash, role, created_at)?
            .with_names(first_name.trim(), last_name.trim());
        let user = self.users.insert(new_user).await?;

        Ok(user)
    }
}
