use super::BlogQueryService;
use crate::{
    application::{
        dto::{BlogDto, Paginated, PaginationDto},
        error::ApplicationResult,
    },
    domain::{
        blog::{BlogListFilter, BlogSort, BlogSortField, PageRequest, SortOrder},
        category::CategoryId,
    },
};

#[derive(Debug, Clone, Default)]
pub struct ListBlogsQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub category_id: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl BlogQueryService {
    pub async fn list_blogs(&self, query: ListBlogsQuery) -> ApplicationResult<Paginated<BlogDto>> {
        let page = PageRequest::new(query.page, query.limit)?;
        let sort = BlogSort::new(
            parse_or_default(query.sort_by.as_deref(), BlogSortField::parse)?,
            parse_or_default(query.sort_order.as_deref(), SortOrder::parse)?,
        );
        let category_id = query
            .category_id
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(CategoryId::parse)
            .transpose()?;

        let filter = BlogListFilter::visible_at(self.clock.now())
            .with_category(category_id)
            .with_search(query.search.as_deref());

        self.fetch_page(&filter, sort, page).await
    }

    pub(super) async fn fetch_page(
        &self,
        filter: &BlogListFilter,
        sort: BlogSort,
        page: PageRequest,
    ) -> ApplicationResult<Paginated<BlogDto>> {
        let result = self.read_repo.list_page(filter, sort, page).await?;
        let pagination = PaginationDto::new(page, result.total);
        let items = self.assembler.many(result.items).await?;
        Ok(Paginated::new(items, pagination))
    }
}

fn parse_or_default<T: Default>(
    value: Option<&str>,
    parse: impl Fn(&str) -> crate::domain::errors::DomainResult<T>,
) -> ApplicationResult<T> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => Ok(parse(value)?),
        None => Ok(T::default()),
    }
}
