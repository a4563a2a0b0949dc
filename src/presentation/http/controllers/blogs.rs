// src/presentation/http/controllers/blogs.rs
use crate::application::{
    commands::blogs::DeleteBlogCommand,
    dto::BlogDto,
    queries::blogs::{
        GetBlogBySlugQuery, GetBlogQuery, ListBlogsByCategoryQuery, ListBlogsQuery,
    },
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::BlogSubmission;
use crate::presentation::http::response::ApiResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListBlogsParams {
    /// 1-based page number, defaults to 1.
    #[param(value_type = Option<i64>)]
    pub page: Option<String>,
    /// Page size, defaults to 10 and is capped at 100.
    #[param(value_type = Option<i64>)]
    pub limit: Option<String>,
    /// Only posts in this category.
    #[serde(alias = "categoryId")]
    pub category: Option<String>,
    /// Case-insensitive match against title and content.
    pub search: Option<String>,
    /// `publishedDate` (default), `createdAt`, `updatedAt`, `title` or `readTime`.
    pub sort_by: Option<String>,
    /// `asc` or `desc` (default).
    pub sort_order: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    #[param(value_type = Option<i64>)]
    pub page: Option<String>,
    #[param(value_type = Option<i64>)]
    pub limit: Option<String>,
}

/// Numbers arrive as strings so malformed values get the same error envelope as everything else.
fn parse_number(name: &str, value: Option<&str>) -> HttpResult<Option<i64>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(raw) => raw
            .parse::<i64>()
            .map(Some)
            .map_err(|_| HttpError::bad_request(format!("{name} must be a positive integer"))),
        None => Ok(None),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/blogs",
    request_body(
        content = crate::presentation::http::extractors::BlogRequest,
        description = "JSON body, or multipart/form-data with the same fields and an `image` file part."
    ),
    responses(
        (status = 201, description = "Post created.", body = crate::presentation::http::openapi::BlogResponse),
        (status = 400, description = "Missing or invalid field.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Category not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug already exists.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blogs"
)]
pub async fn create_blog(
    Extension(state): Extension<HttpState>,
    submission: BlogSubmission,
) -> HttpResult<(StatusCode, Json<ApiResponse<BlogDto>>)> {
    let blog = state
        .services
        .blog_commands
        .create_blog(submission.into_create_command())
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data(blog).with_message("Blog created successfully")),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/blogs",
    params(ListBlogsParams),
    responses(
        (status = 200, description = "Published posts, one page at a time.", body = crate::presentation::http::openapi::BlogListResponse),
        (status = 400, description = "Invalid paging or sort parameters.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blogs"
)]
pub async fn list_blogs(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListBlogsParams>,
) -> HttpResult<Json<ApiResponse<Vec<BlogDto>>>> {
    let query = ListBlogsQuery {
        page: parse_number("page", params.page.as_deref())?,
        limit: parse_number("limit", params.limit.as_deref())?,
        category_id: params.category,
        search: params.search,
        sort_by: params.sort_by,
        sort_order: params.sort_order,
    };

    state
        .services
        .blog_queries
        .list_blogs(query)
        .await
        .into_http()
        .map(|page| Json(ApiResponse::from(page)))
}

#[utoipa::path(
    get,
    path = "/api/v1/blogs/category/{category_id}",
    params(("category_id" = String, Path, description = "Category id"), PageParams),
    responses(
        (status = 200, description = "Published posts in the category.", body = crate::presentation::http::openapi::BlogListResponse),
        (status = 400, description = "Invalid category id or paging parameters.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blogs"
)]
pub async fn list_blogs_by_category(
    Extension(state): Extension<HttpState>,
    Path(category_id): Path<String>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<ApiResponse<Vec<BlogDto>>>> {
    let query = ListBlogsByCategoryQuery {
        category_id,
        page: parse_number("page", params.page.as_deref())?,
        limit: parse_number("limit", params.limit.as_deref())?,
    };

    state
        .services
        .blog_queries
        .list_blogs_by_category(query)
        .await
        .into_http()
        .map(|page| Json(ApiResponse::from(page)))
}

#[utoipa::path(
    get,
    path = "/api/v1/blogs/{id}",
    params(("id" = String, Path, description = "Post id or slug")),
    responses(
        (status = 200, description = "The post.", body = crate::presentation::http::openapi::BlogResponse),
        (status = 404, description = "No post with that id or slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blogs"
)]
pub async fn get_blog(
    Extension(state): Extension<HttpState>,
    Path(identifier): Path<String>,
) -> HttpResult<Json<ApiResponse<BlogDto>>> {
    state
        .services
        .blog_queries
        .get_blog(GetBlogQuery { identifier })
        .await
        .into_http()
        .map(|blog| Json(ApiResponse::data(blog)))
}

#[utoipa::path(
    get,
    path = "/api/v1/blogs/slug/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "The post.", body = crate::presentation::http::openapi::BlogResponse),
        (status = 404, description = "No post with that slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blogs"
)]
pub async fn get_blog_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ApiResponse<BlogDto>>> {
    state
        .services
        .blog_queries
        .get_blog_by_slug(GetBlogBySlugQuery { slug })
        .await
        .into_http()
        .map(|blog| Json(ApiResponse::data(blog)))
}

#[utoipa::path(
    patch,
    path = "/api/v1/blogs/{id}",
    params(("id" = String, Path, description = "Post id")),
    request_body(
        content = crate::presentation::http::extractors::BlogRequest,
        description = "Only supplied fields change. Multipart requests may carry a new `image` file."
    ),
    responses(
        (status = 200, description = "Post updated.", body = crate::presentation::http::openapi::BlogResponse),
        (status = 400, description = "Invalid field.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Post or category not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug already exists.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blogs"
)]
pub async fn update_blog(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    submission: BlogSubmission,
) -> HttpResult<Json<ApiResponse<BlogDto>>> {
    let blog = state
        .services
        .blog_commands
        .update_blog(submission.into_update_command(id))
        .await
        .into_http()?;

    Ok(Json(
        ApiResponse::data(blog).with_message("Blog updated successfully"),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/blogs/{id}",
    params(("id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post deleted.", body = crate::presentation::http::openapi::MessageResponse),
        (status = 404, description = "Post not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blogs"
)]
pub async fn delete_blog(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ApiResponse<()>>> {
    state
        .services
        .blog_commands
        .delete_blog(DeleteBlogCommand { id })
        .await
        .into_http()?;

    Ok(Json(ApiResponse::message("Blog deleted successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_numbers_are_absent() {
        assert_eq!(parse_number("page", Some("  ")).unwrap(), None);
        assert_eq!(parse_number("page", None).unwrap(), None);
        assert_eq!(parse_number("page", Some("3")).unwrap(), Some(3));
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        let err = parse_number("limit", Some("ten")).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
