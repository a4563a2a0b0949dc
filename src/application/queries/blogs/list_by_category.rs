use super::BlogQueryService;
use crate::{
    application::{
        dto::{BlogDto, Paginated},
        error::ApplicationResult,
    },
    domain::{
        blog::{BlogListFilter, BlogSort, PageRequest},
        category::CategoryId,
    },
};

pub struct ListBlogsByCategoryQuery {
    pub category_id: String,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl BlogQueryService {
    /// Category listing: same publish gating as the main listing, newest first.
    pub async fn list_blogs_by_category(
        &self,
        query: ListBlogsByCategoryQuery,
    ) -> ApplicationResult<Paginated<BlogDto>> {
        let page = PageRequest::new(query.page, query.limit)?;
        let category_id = CategoryId::parse(&query.category_id)?;
        let filter = BlogListFilter::visible_at(self.clock.now()).with_category(Some(category_id));

        self.fetch_page(&filter, BlogSort::default(), page).await
    }
}
