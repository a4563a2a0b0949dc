// src/application/commands/blogs/service.rs
use std::sync::Arc;

use crate::{
    application::{
        assembler::BlogAssembler,
        ports::{
            assets::{AssetStore, UploadPolicy},
            time::Clock,
        },
    },
    domain::{
        blog::{BlogReadRepository, BlogWriteRepository, services::BlogSlugService},
        category::CategoryRepository,
    },
};

pub struct BlogCommandService {
    pub(super) write_repo: Arc<dyn BlogWriteRepository>,
    pub(super) read_repo: Arc<dyn BlogReadRepository>,
    pub(super) categories: Arc<dyn CategoryRepository>,
    pub(super) assets: Arc<dyn AssetStore>,
    pub(super) slug_service: Arc<BlogSlugService>,
    pub(super) assembler: Arc<BlogAssembler>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) upload_policy: UploadPolicy,
}

impl BlogCommandService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        write_repo: Arc<dyn BlogWriteRepository>,
        read_repo: Arc<dyn BlogReadRepository>,
        categories: Arc<dyn CategoryRepository>,
        assets: Arc<dyn AssetStore>,
        slug_service: Arc<BlogSlugService>,
        assembler: Arc<BlogAssembler>,
        clock: Arc<dyn Clock>,
        upload_policy: UploadPolicy,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            categories,
            assets,
            slug_service,
            assembler,
            clock,
            upload_policy,
        }
    }
}

/// Treat blank form values the same as absent ones.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
