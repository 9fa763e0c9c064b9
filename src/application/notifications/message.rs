// src/application/notifications/message.rs
use crate::application::ports::notifier::EmailMessage;

pub const SOCIAL_POST_LIMIT: usize = 280;
const EXCERPT_CHARS: usize = 200;
const INDEPENDENT: &str = "Independent";

/// Everything the outgoing messages say about a freshly approved article.
#[derive(Debug, Clone)]
pub struct ArticleAnnouncement {
    pub article_id: i64,
    pub title: String,
    pub author_name: String,
    pub publisher_name: Option<String>,
    pub excerpt: String,
    pub url: String,
}

impl ArticleAnnouncement {
    pub fn new(
        site_url: &str,
        article_id: i64,
        title: impl Into<String>,
        body: &str,
        author_name: impl Into<String>,
        publisher_name: Option<String>,
    ) -> Self {
        let excerpt = match body.char_indices().nth(EXCERPT_CHARS) {
            Some((idx, _)) => &body[..idx],
            None => body,
        };
        Self {
            article_id,
            title: title.into(),
            author_name: author_name.into(),
            publisher_name,
            excerpt: excerpt.to_string(),
            url: article_url(site_url, article_id),
        }
    }

    pub fn email_subject(&self) -> String {
        format!("New Article: {}", self.title)
    }

    pub fn email_body(&self) -> String {
        format!(
            "A new article has been published:\n\n\
             Title: {title}\n\
             Author: {author}\n\
             Publisher: {publisher}\n\n\
             {excerpt}...\n\n\
             Read the full article at: {url}\n",
            title = self.title,
            author = self.author_name,
            publisher = self.publisher_name.as_deref().unwrap_or(INDEPENDENT),
            excerpt = self.excerpt,
            url = self.url,
        )
    }

    pub fn email_to(&self, recipient: impl Into<String>) -> EmailMessage {
        EmailMessage {
            to: recipient.into(),
            subject: self.email_subject(),
            body: self.email_body(),
        }
    }

    /// Post text, shortened to title and link when the full form is over the limit.
    pub fn social_text(&self) -> String {
        let byline = match &self.publisher_name {
            Some(publisher) => format!("By {} for {}", self.author_name, publisher),
            None => format!("By {} ({INDEPENDENT})", self.author_name),
        };
        let full = format!("New Article: {}\n\n{}\n\n{}", self.title, byline, self.url);
        if full.chars().count() <= SOCIAL_POST_LIMIT {
            return full;
        }

        let fixed = "New Article: ".len() + "...".len() + "\n\n".len() + self.url.chars().count();
        let budget = SOCIAL_POST_LIMIT.saturating_sub(fixed);
        let title: String = self.title.chars().take(budget).collect();
        format!("New Article: {title}...\n\n{}", self.url)
    }
}

pub fn article_url(site_url: &str, article_id: i64) -> String {
    format!("{}/articles/{}/", site_url.trim_end_matches('/'), article_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn announcement(title: &str, publisher: Option<&str>) -> ArticleAnnouncement {
        ArticleAnnouncement::new(
            "https://news.example.com/",
            42,
            title,
            "Body text",
            "Jane Doe",
            publisher.map(str::to_string),
        )
    }

    #[test]
    fn email_mentions_publisher_or_independent() {
        let independent = announcement("Storm", None);
        assert_eq!(independent.email_subject(), "New Article: Storm");
        assert!(independent.email_body().contains("Publisher: Independent"));
        assert!(
            independent
                .email_body()
                .contains("https://news.example.com/articles/42/")
        );

        let owned = announcement("Storm", Some("Daily Planet"));
        assert!(owned.email_body().contains("Publisher: Daily Planet"));
        assert!(owned.email_body().contains("Body text..."));
    }

    #[test]
    fn excerpt_is_capped_at_two_hundred_chars() {
        let body = "é".repeat(450);
        let a = ArticleAnnouncement::new("http://x", 1, "t", &body, "a", None);
        assert_eq!(a.excerpt.chars().count(), 200);
    }

    #[test]
    fn social_text_uses_byline() {
        let text = announcement("Storm", Some("Daily Planet")).social_text();
        assert_eq!(
            text,
            "New Article: Storm\n\nBy Jane Doe for Daily Planet\n\nhttps://news.example.com/articles/42/"
        );
        let text = announcement("Storm", None).social_text();
        assert!(text.contains("By Jane Doe (Independent)"));
    }

    #[test]
    fn long_social_text_is_truncated_to_limit() {
        let title = "A".repeat(300);
        let text = announcement(&title, Some("Daily Planet")).social_text();
        assert!(text.chars().count() <= SOCIAL_POST_LIMIT);
        assert!(text.starts_with("New Article: AAA"));
        assert!(text.ends_with("...\n\nhttps://news.example.com/articles/42/"));
        assert!(!text.contains("By Jane Doe"));
    }
}
