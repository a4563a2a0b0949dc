// tests/support/mocks/category_repo.rs
use async_trait::async_trait;
use blog_core::domain::category::{CategoryId, CategoryRepository, CategorySummary};
use blog_core::domain::errors::DomainResult;
use std::collections::HashMap;
use std::sync::Mutex;

/// 既知のカテゴリだけを返すインメモリリポジトリ
#[derive(Default)]
pub struct InMemoryCategoryRepo {
    inner: Mutex<HashMap<CategoryId, String>>,
}

impl InMemoryCategoryRepo {
    pub fn with(categories: &[(CategoryId, &str)]) -> Self {
        let repo = Self::default();
        for (id, title) in categories {
            repo.add(*id, title);
        }
        repo
    }

    pub fn add(&self, id: CategoryId, title: &str) {
        self.inner.lock().unwrap().insert(id, title.to_string());
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepo {
    async fn exists(&self, id: CategoryId) -> DomainResult<bool> {
        Ok(self.inner.lock().unwrap().contains_key(&id))
    }

    async fn find_summaries(&self, ids: &[CategoryId]) -> DomainResult<Vec<CategorySummary>> {
        let map = self.inner.lock().unwrap();
        Ok(ids
            .iter()
            .filter_map(|id| {
                map.get(id).map(|title| CategorySummary {
                    id: *id,
                    title: title.clone(),
                })
            })
            .collect())
    }
}
