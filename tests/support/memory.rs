// tests/support/memory.rs
use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use newsdesk::domain::{
    article::{
        Article, ArticleContentUpdate, ArticleFeed, ArticleId, ArticleReadRepository,
        ArticleReview, ArticleStatus, ArticleWriteRepository, NewArticle,
    },
    errors::{DomainError, DomainResult},
    newsletter::{NewNewsletter, Newsletter, NewsletterId, NewsletterRepository},
    notification::{
        JobId, JobStatus, NewNotificationJob, NotificationDelivery, NotificationJob,
        OutboxRepository,
    },
    pagination::{Page, PageRequest},
    publisher::{
        MembershipKind, NewPublisher, Publisher, PublisherId, PublisherMembers,
        PublisherRepository,
    },
    subscription::{Subscription, SubscriptionRepository, SubscriptionTarget},
    user::{NewUser, Role, User, UserId, UserRepository, Username},
};

#[derive(Default)]
struct State {
    users: Vec<User>,
    articles: Vec<Article>,
    publishers: Vec<Publisher>,
    members: Vec<(PublisherId, UserId, MembershipKind)>,
    subscriptions: Vec<Subscription>,
    newsletters: Vec<Newsletter>,
    jobs: Vec<NotificationJob>,
    deliveries: Vec<NotificationDelivery>,
    failing_completions: usize,
    next_id: i64,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn subscribed_to(&self, reader: UserId, target: &SubscriptionTarget) -> bool {
        self.subscriptions
            .iter()
            .any(|s| s.reader_id == reader && &s.target == target)
    }

    fn follows(&self, reader: UserId, author: UserId, publisher: Option<PublisherId>) -> bool {
        self.subscribed_to(reader, &SubscriptionTarget::Journalist(author))
            || publisher
                .is_some_and(|p| self.subscribed_to(reader, &SubscriptionTarget::Publisher(p)))
    }
}

/// One shared store behind every repository trait, so cross-entity queries
/// (feeds, audiences) see the same data the commands wrote.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

fn newest_first<T>(items: &mut [T], key: impl Fn(&T) -> (DateTime<Utc>, i64)) {
    items.sort_by(|a, b| key(b).cmp(&key(a)));
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deliveries(&self) -> Vec<NotificationDelivery> {
        self.state.lock().unwrap().deliveries.clone()
    }

    /// The next `count` calls to `mark_completed` fail.
    pub fn fail_completions(&self, count: usize) {
        self.state.lock().unwrap().failing_completions = count;
    }

    pub fn jobs(&self) -> Vec<NotificationJob> {
        self.state.lock().unwrap().jobs.clone()
    }

    pub fn article(&self, id: i64) -> Option<Article> {
        self.state
            .lock()
            .unwrap()
            .articles
            .iter()
            .find(|a| a.id.0 == id)
            .cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut state = self.state.lock().unwrap();
        if state.users.iter().any(|u| u.username == new_user.username) {
            return Err(DomainError::Conflict("username already exists".into()));
        }
        let user = User {
            id: UserId(state.next_id()),
            username: new_user.username,
            email: new_user.email,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            password_hash: new_user.password_hash,
            role: new_user.role,
            is_active: new_user.is_active,
            created_at: new_user.created_at,
        };
        state.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|u| &u.username == username).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|u| u.id == id).cloned())
    }

    async fn list_by_role(&self, role: Role, page: PageRequest) -> DomainResult<Page<User>> {
        let state = self.state.lock().unwrap();
        let mut users: Vec<User> = state
            .users
            .iter()
            .filter(|u| u.role == role && u.is_active)
            .cloned()
            .collect();
        users.sort_by(|a, b| a.username.as_str().cmp(b.username.as_str()));
        Ok(Page::from_all(users, page))
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        let created = Article {
            id: ArticleId(state.next_id()),
            title: article.title,
            body: article.body,
            status: ArticleStatus::Pending,
            author_id: article.author_id,
            publisher_id: article.publisher_id,
            reviewed_by: None,
            reviewed_at: None,
            created_at: article.created_at,
            updated_at: article.created_at,
        };
        state.articles.push(created.clone());
        Ok(created)
    }

    async fn update_content(&self, update: ArticleContentUpdate) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        let article = state
            .articles
            .iter_mut()
            .find(|a| {
                a.id == update.id
                    && a.status == ArticleStatus::Pending
                    && a.updated_at == update.original_updated_at
            })
            .ok_or_else(|| DomainError::stale("article update"))?;
        if let Some(title) = update.title {
            article.title = title;
        }
        if let Some(body) = update.body {
            article.body = body;
        }
        article.updated_at = update.updated_at;
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.articles.len();
        state.articles.retain(|a| a.id != id);
        if state.articles.len() == before {
            return Err(DomainError::not_found("article"));
        }
        Ok(())
    }

    async fn record_review(
        &self,
        review: ArticleReview,
        job: Option<NewNotificationJob>,
    ) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        if let Some(job) = &job {
            if state.jobs.iter().any(|j| j.article_id == job.article_id) {
                return Err(DomainError::Conflict(
                    "notifications already queued for this article".into(),
                ));
            }
        }
        let article = state
            .articles
            .iter_mut()
            .find(|a| {
                a.id == review.id
                    && a.status == ArticleStatus::Pending
                    && a.updated_at == review.original_updated_at
            })
            .ok_or_else(|| DomainError::stale("article review"))?;
        article.status = review.status;
        article.reviewed_by = Some(review.reviewed_by);
        article.reviewed_at = Some(review.reviewed_at);
        article.updated_at = review.reviewed_at;
        let reviewed = article.clone();

        if let Some(job) = job {
            let id = JobId(state.next_id());
            state.jobs.push(NotificationJob {
                id,
                article_id: job.article_id,
                status: JobStatus::Pending,
                enqueued_at: job.enqueued_at,
                completed_at: None,
            });
        }
        Ok(reviewed)
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let state = self.state.lock().unwrap();
        Ok(state.articles.iter().find(|a| a.id == id).cloned())
    }

    async fn list_feed(&self, feed: ArticleFeed, page: PageRequest) -> DomainResult<Page<Article>> {
        let state = self.state.lock().unwrap();
        let mut articles: Vec<Article> = state
            .articles
            .iter()
            .filter(|a| a.status == ArticleStatus::Approved)
            .filter(|a| match &feed {
                ArticleFeed::Approved { search: None } => true,
                ArticleFeed::Approved {
                    search: Some(needle),
                } => {
                    let needle = needle.to_lowercase();
                    a.title.as_str().to_lowercase().contains(&needle)
                        || a.body.as_str().to_lowercase().contains(&needle)
                }
                ArticleFeed::Subscribed(reader) => {
                    state.follows(*reader, a.author_id, a.publisher_id)
                }
                ArticleFeed::Publisher(id) => a.publisher_id == Some(*id),
                ArticleFeed::Journalist(id) => a.author_id == *id,
            })
            .cloned()
            .collect();
        newest_first(&mut articles, |a| (a.created_at, a.id.0));
        Ok(Page::from_all(articles, page))
    }

    async fn list_by_author(
        &self,
        author: UserId,
        page: PageRequest,
    ) -> DomainResult<Page<Article>> {
        let state = self.state.lock().unwrap();
        let mut articles: Vec<Article> = state
            .articles
            .iter()
            .filter(|a| a.author_id == author)
            .cloned()
            .collect();
        newest_first(&mut articles, |a| (a.created_at, a.id.0));
        Ok(Page::from_all(articles, page))
    }

    async fn list_pending(&self, page: PageRequest) -> DomainResult<Page<Article>> {
        let state = self.state.lock().unwrap();
        let mut articles: Vec<Article> = state
            .articles
            .iter()
            .filter(|a| a.status == ArticleStatus::Pending)
            .cloned()
            .collect();
        articles.sort_by_key(|a| (a.created_at, a.id.0));
        Ok(Page::from_all(articles, page))
    }
}

#[async_trait]
impl PublisherRepository for InMemoryStore {
    async fn insert(&self, publisher: NewPublisher) -> DomainResult<Publisher> {
        let mut state = self.state.lock().unwrap();
        if state.publishers.iter().any(|p| p.name == publisher.name) {
            return Err(DomainError::Conflict("publisher name already exists".into()));
        }
        let created = Publisher {
            id: PublisherId(state.next_id()),
            name: publisher.name,
            description: publisher.description,
            created_at: publisher.created_at,
        };
        state.publishers.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: PublisherId) -> DomainResult<Option<Publisher>> {
        let state = self.state.lock().unwrap();
        Ok(state.publishers.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self, page: PageRequest) -> DomainResult<Page<Publisher>> {
        let state = self.state.lock().unwrap();
        let mut publishers = state.publishers.clone();
        publishers.sort_by(|a, b| (a.name.as_str(), a.id).cmp(&(b.name.as_str(), b.id)));
        Ok(Page::from_all(publishers, page))
    }

    async fn add_member(
        &self,
        publisher_id: PublisherId,
        user_id: UserId,
        kind: MembershipKind,
    ) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        if !state
            .members
            .iter()
            .any(|(p, u, _)| *p == publisher_id && *u == user_id)
        {
            state.members.push((publisher_id, user_id, kind));
        }
        Ok(())
    }

    async fn members(&self, publisher_id: PublisherId) -> DomainResult<PublisherMembers> {
        let state = self.state.lock().unwrap();
        let mut members = PublisherMembers::default();
        for (p, user, kind) in &state.members {
            if *p != publisher_id {
                continue;
            }
            match kind {
                MembershipKind::Editor => members.editors.push(*user),
                MembershipKind::Journalist => members.journalists.push(*user),
            }
        }
        members.editors.sort();
        members.journalists.sort();
        Ok(members)
    }
}

#[async_trait]
impl SubscriptionRepository for InMemoryStore {
    async fn subscribe(
        &self,
        reader: UserId,
        target: SubscriptionTarget,
        at: DateTime<Utc>,
    ) -> DomainResult<(Subscription, bool)> {
        let mut state = self.state.lock().unwrap();
        if let Some(existing) = state
            .subscriptions
            .iter()
            .find(|s| s.reader_id == reader && s.target == target)
        {
            return Ok((existing.clone(), false));
        }
        let subscription = Subscription {
            reader_id: reader,
            target,
            created_at: at,
        };
        state.subscriptions.push(subscription.clone());
        Ok((subscription, true))
    }

    async fn unsubscribe(&self, reader: UserId, target: SubscriptionTarget) -> DomainResult<bool> {
        let mut state = self.state.lock().unwrap();
        let before = state.subscriptions.len();
        state
            .subscriptions
            .retain(|s| !(s.reader_id == reader && s.target == target));
        Ok(state.subscriptions.len() != before)
    }

    async fn list_for_reader(&self, reader: UserId) -> DomainResult<Vec<Subscription>> {
        let state = self.state.lock().unwrap();
        let mut subscriptions: Vec<Subscription> = state
            .subscriptions
            .iter()
            .filter(|s| s.reader_id == reader)
            .cloned()
            .collect();
        subscriptions.sort_by_key(|s| {
            let ord = match s.target {
                SubscriptionTarget::Publisher(_) => 0,
                SubscriptionTarget::Journalist(_) => 1,
            };
            (ord, s.created_at, s.target.target_id())
        });
        Ok(subscriptions)
    }

    async fn audience_for(
        &self,
        author: UserId,
        publisher: Option<PublisherId>,
    ) -> DomainResult<Vec<User>> {
        let state = self.state.lock().unwrap();
        let mut seen = HashSet::new();
        let mut audience: Vec<User> = state
            .users
            .iter()
            .filter(|u| u.role == Role::Reader && u.is_active)
            .filter(|u| state.follows(u.id, author, publisher))
            .filter(|u| seen.insert(u.id))
            .cloned()
            .collect();
        audience.sort_by_key(|u| u.id);
        Ok(audience)
    }
}

#[async_trait]
impl NewsletterRepository for InMemoryStore {
    async fn insert(&self, newsletter: NewNewsletter) -> DomainResult<Newsletter> {
        let mut state = self.state.lock().unwrap();
        let created = Newsletter {
            id: NewsletterId(state.next_id()),
            title: newsletter.title,
            body: newsletter.body,
            author_id: newsletter.author_id,
            publisher_id: newsletter.publisher_id,
            created_at: newsletter.created_at,
        };
        state.newsletters.push(created.clone());
        Ok(created)
    }

    async fn delete(&self, id: NewsletterId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.newsletters.len();
        state.newsletters.retain(|n| n.id != id);
        if state.newsletters.len() == before {
            return Err(DomainError::not_found("newsletter"));
        }
        Ok(())
    }

    async fn list(&self, page: PageRequest) -> DomainResult<Page<Newsletter>> {
        let state = self.state.lock().unwrap();
        let mut newsletters = state.newsletters.clone();
        newest_first(&mut newsletters, |n| (n.created_at, n.id.0));
        Ok(Page::from_all(newsletters, page))
    }

    async fn list_subscribed(
        &self,
        reader: UserId,
        page: PageRequest,
    ) -> DomainResult<Page<Newsletter>> {
        let state = self.state.lock().unwrap();
        let mut newsletters: Vec<Newsletter> = state
            .newsletters
            .iter()
            .filter(|n| state.follows(reader, n.author_id, n.publisher_id))
            .cloned()
            .collect();
        newest_first(&mut newsletters, |n| (n.created_at, n.id.0));
        Ok(Page::from_all(newsletters, page))
    }
}

#[async_trait]
impl OutboxRepository for InMemoryStore {
    async fn claim_pending(&self, limit: u32) -> DomainResult<Vec<NotificationJob>> {
        let mut state = self.state.lock().unwrap();
        let mut claimed = Vec::new();
        for job in state
            .jobs
            .iter_mut()
            .filter(|j| j.status == JobStatus::Pending)
            .take(limit as usize)
        {
            job.status = JobStatus::Running;
            claimed.push(job.clone());
        }
        Ok(claimed)
    }

    async fn record_delivery(&self, delivery: NotificationDelivery) -> DomainResult<()> {
        self.state.lock().unwrap().deliveries.push(delivery);
        Ok(())
    }

    async fn mark_completed(&self, job_id: JobId, at: DateTime<Utc>) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.failing_completions > 0 {
            state.failing_completions -= 1;
            return Err(DomainError::Persistence("connection reset".into()));
        }
        let job = state
            .jobs
            .iter_mut()
            .find(|j| j.id == job_id)
            .ok_or_else(|| DomainError::not_found("notification job"))?;
        job.status = JobStatus::Completed;
        job.completed_at = Some(at);
        Ok(())
    }

    async fn deliveries_for(&self, job_id: JobId) -> DomainResult<Vec<NotificationDelivery>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .deliveries
            .iter()
            .filter(|d| d.job_id == job_id)
            .cloned()
            .collect())
    }

    async fn requeue_running(&self) -> DomainResult<u64> {
        let mut state = self.state.lock().unwrap();
        let mut requeued = 0;
        for job in state.jobs.iter_mut().filter(|j| j.status == JobStatus::Running) {
            job.status = JobStatus::Pending;
            requeued += 1;
        }
        Ok(requeued)
    }
}
