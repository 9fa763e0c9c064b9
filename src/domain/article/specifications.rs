use std::collections::HashSet;

use crate::domain::article::entity::Article;
use crate::domain::user::value_objects::{Capability, UserId};

/// Who may change or remove an article: holders of the `:any` action, or the
/// author when they hold the `:own` action.
pub struct ArticleOwnershipSpec<'a> {
    capabilities: &'a HashSet<Capability>,
    article: &'a Article,
    user_id: UserId,
}

impl<'a> ArticleOwnershipSpec<'a> {
    pub fn new(
        capabilities: &'a HashSet<Capability>,
        article: &'a Article,
        user_id: UserId,
    ) -> Self {
        Self {
            capabilities,
            article,
            user_id,
        }
    }

    pub fn can_update(&self) -> bool {
        self.allows("update")
    }

    pub fn can_delete(&self) -> bool {
        self.allows("delete")
    }

    /// Approved articles are public; anything else is visible to its author
    /// and to reviewers.
    pub fn can_view(&self) -> bool {
        self.article.is_approved()
            || self.article.author_id == self.user_id
            || self.has_capability("articles", "view:pending")
    }

    fn allows(&self, verb: &str) -> bool {
        self.has_capability("articles", &format!("{verb}:any"))
            || (self.has_capability("articles", &format!("{verb}:own"))
                && self.article.author_id == self.user_id)
    }

    fn has_capability(&self, resource: &str, action: &str) -> bool {
        self.capabilities
            .iter()
            .any(|cap| cap.matches(resource, action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::value_objects::{
        ArticleBody, ArticleId, ArticleStatus, ArticleTitle,
    };
    use crate::domain::user::Role;
    use chrono::Utc;

    fn article_by(author: i64, status: ArticleStatus) -> Article {
        Article {
            id: ArticleId::new(1).unwrap(),
            title: ArticleTitle::new("t").unwrap(),
            body: ArticleBody::new("b").unwrap(),
            status,
            author_id: UserId::new(author).unwrap(),
            publisher_id: None,
            reviewed_by: None,
            reviewed_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn journalists_only_touch_their_own_articles() {
        let caps = Role::Journalist.default_capabilities();
        let article = article_by(5, ArticleStatus::Pending);
        let own = ArticleOwnershipSpec::new(&caps, &article, UserId::new(5).unwrap());
        let other = ArticleOwnershipSpec::new(&caps, &article, UserId::new(6).unwrap());

        assert!(own.can_update() && own.can_delete() && own.can_view());
        assert!(!other.can_update());
        assert!(!other.can_delete());
        assert!(!other.can_view());
    }

    #[test]
    fn editors_manage_any_article() {
        let caps = Role::Editor.default_capabilities();
        let article = article_by(5, ArticleStatus::Rejected);
        let spec = ArticleOwnershipSpec::new(&caps, &article, UserId::new(9).unwrap());
        assert!(spec.can_update() && spec.can_delete() && spec.can_view());
    }

    #[test]
    fn readers_see_only_approved_articles() {
        let caps = Role::Reader.default_capabilities();
        let pending = article_by(5, ArticleStatus::Pending);
        let approved = article_by(5, ArticleStatus::Approved);
        let reader = UserId::new(3).unwrap();
        assert!(!ArticleOwnershipSpec::new(&caps, &pending, reader).can_view());
        assert!(ArticleOwnershipSpec::new(&caps, &approved, reader).can_view());
        assert!(!ArticleOwnershipSpec::new(&caps, &approved, reader).can_delete());
    }
}
