use super::BlogCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::blog::BlogId,
};

pub struct DeleteBlogCommand {
    pub id: String,
}

impl BlogCommandService {
    pub async fn delete_blog(&self, command: DeleteBlogCommand) -> ApplicationResult<()> {
        let id = BlogId::parse(&command.id).ok_or_else(|| ApplicationError::not_found("blog"))?;
        let post = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("blog"))?;

        // A failed asset release is logged inside and never blocks the record delete.
        self.release_image(&post.cover_image_url).await;

        self.write_repo.delete(id).await?;
        tracing::info!(blog_id = %id, slug = %post.slug, "blog post deleted");
        Ok(())
    }
}
