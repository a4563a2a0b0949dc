mod get;
mod list;
mod list_by_category;
mod service;

pub use get::{GetBlogBySlugQuery, GetBlogQuery};
pub use list::ListBlogsQuery;
pub use list_by_category::ListBlogsByCategoryQuery;
pub use service::BlogQueryService;
