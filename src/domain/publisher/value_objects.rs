use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PublisherId(pub i64);

impl PublisherId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "publisher id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl fmt::Display for PublisherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PublisherId> for i64 {
    fn from(value: PublisherId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublisherName(String);

impl PublisherName {
    pub const MAX_LEN: usize = 200;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation(
                "publisher name cannot be empty".into(),
            ));
        }
        if value.chars().count() > Self::MAX_LEN {
            return Err(DomainError::Validation(format!(
                "publisher name must be at most {} characters",
                Self::MAX_LEN
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PublisherName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PublisherName> for String {
    fn from(value: PublisherName) -> Self {
        value.0
    }
}

/// How a staff member belongs to a publisher. Follows the member's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MembershipKind {
    Editor,
    Journalist,
}

impl MembershipKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipKind::Editor => "editor",
            MembershipKind::Journalist => "journalist",
        }
    }

    pub fn parse(value: &str) -> DomainResult<Self> {
        match value {
            "editor" => Ok(MembershipKind::Editor),
            "journalist" => Ok(MembershipKind::Journalist),
            other => Err(DomainError::Validation(format!(
                "unknown membership kind '{other}'"
            ))),
        }
    }
}
