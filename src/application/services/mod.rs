// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        assembler::BlogAssembler,
        commands::blogs::BlogCommandService,
        ports::{
            assets::{AssetStore, UploadPolicy},
            time::Clock,
        },
        queries::blogs::BlogQueryService,
    },
    domain::{
        blog::{BlogReadRepository, BlogWriteRepository, services::BlogSlugService},
        category::CategoryRepository,
    },
};

pub struct ApplicationServices {
    pub blog_commands: Arc<BlogCommandService>,
    pub blog_queries: Arc<BlogQueryService>,
}

impl ApplicationServices {
    pub fn new(
        blog_write_repo: Arc<dyn BlogWriteRepository>,
        blog_read_repo: Arc<dyn BlogReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        asset_store: Arc<dyn AssetStore>,
        clock: Arc<dyn Clock>,
        upload_policy: UploadPolicy,
    ) -> Self {
        let slug_service = Arc::new(BlogSlugService::new(Arc::clone(&blog_read_repo)));
        let assembler = Arc::new(BlogAssembler::new(Arc::clone(&category_repo)));

        let blog_commands = Arc::new(BlogCommandService::new(
            Arc::clone(&blog_write_repo),
            Arc::clone(&blog_read_repo),
            Arc::clone(&category_repo),
            Arc::clone(&asset_store),
            Arc::clone(&slug_service),
            Arc::clone(&assembler),
            Arc::clone(&clock),
            upload_policy,
        ));

        let blog_queries = Arc::new(BlogQueryService::new(
            Arc::clone(&blog_read_repo),
            Arc::clone(&assembler),
            Arc::clone(&clock),
        ));

        Self {
            blog_commands,
            blog_queries,
        }
    }
}
