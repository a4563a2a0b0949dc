use crate::domain::category::entity::{CategoryId, CategorySummary};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Read-only view over categories; blog posts reference them but never own them.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn exists(&self, id: CategoryId) -> DomainResult<bool>;
    async fn find_summaries(&self, ids: &[CategoryId]) -> DomainResult<Vec<CategorySummary>>;
}
