// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
};
use async_trait::async_trait;

/// One-way password storage. `verify` fails with `Unauthorized` on mismatch.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}

/// Issues bearer tokens and resolves them back to the caller's identity and role.
#[async_trait]
pub trait TokenManager: Send + Sync {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto>;
    /// Expired, forged and malformed tokens all map to `Unauthorized`.
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}
