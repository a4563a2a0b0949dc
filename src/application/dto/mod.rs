pub mod blogs;
pub mod pagination;

pub use blogs::{BlogDto, CategoryRefDto};
pub use pagination::{Paginated, PaginationDto};
