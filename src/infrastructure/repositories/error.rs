use crate::domain::errors::DomainError;

const CNT_BLOG_SLUG: &str = "blog_posts_slug_key";
const CNT_BLOG_PKEY: &str = "blog_posts_pkey";
const CNT_BLOG_CATEGORY: &str = "blog_posts_category_id_fkey";
const CNT_BLOG_READ_TIME_CHECK: &str = "blog_posts_read_time_chk";
const CNT_BLOG_COVER_IMAGE_CHECK: &str = "blog_posts_cover_image_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return map_constraint(constraint);
            }
            if let Some(mapped) = db_err.code().and_then(|code| map_sqlstate(code.as_ref())) {
                return mapped;
            }
            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Named constraints from `migrations/` and the domain error each one stands for.
fn map_constraint(constraint: &str) -> DomainError {
    match constraint {
        CNT_BLOG_SLUG => DomainError::Conflict("slug".into()),
        CNT_BLOG_PKEY => DomainError::Conflict("id".into()),
        CNT_BLOG_CATEGORY => DomainError::NotFound("category".into()),
        CNT_BLOG_READ_TIME_CHECK => {
            DomainError::Validation("read time must be between 1 and 60 minutes".into())
        }
        CNT_BLOG_COVER_IMAGE_CHECK => DomainError::Validation("image required".into()),
        other => DomainError::Persistence(format!("database constraint violation: {other}")),
    }
}

/// Fallback for violations reported without a constraint name.
fn map_sqlstate(code: &str) -> Option<DomainError> {
    match code {
        "23505" => Some(DomainError::Conflict("unique value".into())),
        "23503" => Some(DomainError::NotFound("referenced record".into())),
        "23514" => Some(DomainError::Validation("check constraint violated".into())),
        _ => None,
    }
}
