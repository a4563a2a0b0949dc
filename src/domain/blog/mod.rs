pub mod entity;
pub mod listing;
pub mod repository;
pub mod services;
pub mod slug;
pub mod value_objects;

pub use entity::{BlogPost, BlogPostUpdate, NewBlogPost};
pub use listing::{BlogListFilter, BlogPage, BlogSort, BlogSortField, PageRequest, SortOrder};
pub use repository::{BlogReadRepository, BlogWriteRepository};
pub use value_objects::{
    BlogContent, BlogId, BlogSlug, BlogTitle, CoverImageUrl, MetaDescription, MetaTitle, ReadTime,
};
