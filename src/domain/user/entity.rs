// src/domain/user/entity.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::value_objects::{Email, PasswordHash, Role, UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: Option<Email>,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_reader(&self) -> bool {
        self.role == Role::Reader
    }

    pub fn is_editor(&self) -> bool {
        self.role == Role::Editor
    }

    pub fn is_journalist(&self) -> bool {
        self.role == Role::Journalist
    }

    /// Full name when one is set, otherwise the username.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.username.to_string()
        } else {
            full.to_string()
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub email: Option<Email>,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        username: Username,
        email: Option<Email>,
        password_hash: PasswordHash,
        role: Role,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        Ok(Self {
            username,
            email,
            first_name: String::new(),
            last_name: String::new(),
            password_hash,
            role,
            is_active: true,
            created_at,
        })
    }

    pub fn with_names(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }
}
