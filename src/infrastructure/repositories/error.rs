use crate::domain::errors::DomainError;

const CNT_USER_USERNAME: &str = "users_username_key";
const CNT_PUBLISHER_NAME: &str = "publishers_name_key";
const CNT_ARTICLE_AUTHOR: &str = "articles_author_id_fkey";
const CNT_ARTICLE_PUBLISHER: &str = "articles_publisher_id_fkey";
const CNT_ARTICLE_TITLE_LEN: &str = "articles_title_len_chk";
const CNT_MEMBER_USER: &str = "publisher_members_user_id_fkey";
const CNT_JOB_ARTICLE: &str = "notification_jobs_article_id_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_USER_USERNAME => DomainError::Conflict("username already exists".into()),
                    CNT_PUBLISHER_NAME => {
                        DomainError::Conflict("publisher name already exists".into())
                    }
                    CNT_ARTICLE_AUTHOR => DomainError::not_found("author"),
                    CNT_ARTICLE_PUBLISHER => DomainError::not_found("publisher"),
                    CNT_MEMBER_USER => DomainError::not_found("user"),
                    CNT_ARTICLE_TITLE_LEN => DomainError::Validation(
                        "title must be between 1 and 200 characters".into(),
                    ),
                    CNT_JOB_ARTICLE => DomainError::Conflict(
                        "notifications already enqueued for this article".into(),
                    ),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::not_found("referenced record");
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
