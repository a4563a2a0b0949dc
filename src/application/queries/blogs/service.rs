use std::sync::Arc;

use crate::{
    application::{assembler::BlogAssembler, ports::time::Clock},
    domain::blog::BlogReadRepository,
};

pub struct BlogQueryService {
    pub(super) read_repo: Arc<dyn BlogReadRepository>,
    pub(super) assembler: Arc<BlogAssembler>,
    pub(super) clock: Arc<dyn Clock>,
}

impl BlogQueryService {
    pub fn new(
        read_repo: Arc<dyn BlogReadRepository>,
        assembler: Arc<BlogAssembler>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read_repo,
            assembler,
            clock,
        }
    }
}
