// tests/support/mocks/blog_repo.rs
use async_trait::async_trait;
use blog_core::domain::blog::{
    BlogId, BlogListFilter, BlogPage, BlogPost, BlogPostUpdate, BlogReadRepository, BlogSlug,
    BlogSort, BlogWriteRepository, NewBlogPost, PageRequest,
};
use blog_core::domain::errors::{DomainError, DomainResult};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/* -------------------------------- インメモリ記事リポジトリ -------------------------------- */

/// 読み書き両方を実装するインメモリの記事ストア。
/// スラグの一意制約は本物のデータベースと同じく書き込み時に検査する。
#[derive(Default)]
pub struct InMemoryBlogRepo {
    posts: Mutex<HashMap<BlogId, BlogPost>>,
    writes: AtomicUsize,
    fail_writes: AtomicBool,
    hide_slugs: AtomicBool,
}

impl InMemoryBlogRepo {
    pub fn with_posts(posts: impl IntoIterator<Item = BlogPost>) -> Self {
        let repo = Self::default();
        {
            let mut map = repo.posts.lock().unwrap();
            for post in posts {
                map.insert(post.id, post);
            }
        }
        repo
    }

    pub fn seed(&self, post: BlogPost) {
        self.posts.lock().unwrap().insert(post.id, post);
    }

    pub fn get(&self, id: BlogId) -> Option<BlogPost> {
        self.posts.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    /// insert / update / delete が呼ばれた回数
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// 以降の書き込みを永続化エラーで失敗させる
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    /// スラグ検索を常に空振りさせる。事前確認をすり抜けた同時書き込みを再現し、
    /// 一意制約違反は書き込み時にだけ検出される
    pub fn hide_slugs_from_reads(&self) {
        self.hide_slugs.store(true, Ordering::SeqCst);
    }

    fn begin_write(&self) -> DomainResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("connection reset".into()));
        }
        Ok(())
    }

    fn slug_taken(map: &HashMap<BlogId, BlogPost>, slug: &BlogSlug, owner: BlogId) -> bool {
        map.values().any(|p| p.id != owner && &p.slug == slug)
    }
}

#[async_trait]
impl BlogWriteRepository for InMemoryBlogRepo {
    async fn insert(&self, new: NewBlogPost) -> DomainResult<BlogPost> {
        self.begin_write()?;
        let mut map = self.posts.lock().unwrap();
        if Self::slug_taken(&map, &new.slug, new.id) {
            return Err(DomainError::Conflict("slug".into()));
        }

        let post = BlogPost {
            id: new.id,
            title: new.title,
            slug: new.slug,
            content: new.content,
            cover_image_url: new.cover_image_url,
            read_time: new.read_time,
            category_id: new.category_id,
            meta_title: new.meta_title,
            meta_description: new.meta_description,
            published_date: new.published_date,
            created_at: new.created_at,
            updated_at: new.created_at,
        };
        map.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(&self, update: BlogPostUpdate) -> DomainResult<BlogPost> {
        self.begin_write()?;
        let mut map = self.posts.lock().unwrap();
        let taken = update
            .slug
            .as_ref()
            .is_some_and(|slug| Self::slug_taken(&map, slug, update.id));
        if taken {
            return Err(DomainError::Conflict("slug".into()));
        }

        let post = map
            .get_mut(&update.id)
            .ok_or_else(|| DomainError::NotFound("blog".into()))?;
        update.apply_to(post);
        Ok(post.clone())
    }

    async fn delete(&self, id: BlogId) -> DomainResult<()> {
        self.begin_write()?;
        self.posts
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("blog".into()))
    }
}

#[async_trait]
impl BlogReadRepository for InMemoryBlogRepo {
    async fn find_by_id(&self, id: BlogId) -> DomainResult<Option<BlogPost>> {
        Ok(self.get(id))
    }

    async fn find_by_slug(&self, slug: &BlogSlug) -> DomainResult<Option<BlogPost>> {
        if self.hide_slugs.load(Ordering::SeqCst) {
            return Ok(None);
        }
        let map = self.posts.lock().unwrap();
        Ok(map.values().find(|p| &p.slug == slug).cloned())
    }

    async fn list_page(
        &self,
        filter: &BlogListFilter,
        sort: BlogSort,
        page: PageRequest,
    ) -> DomainResult<BlogPage> {
        let map = self.posts.lock().unwrap();
        let mut matching: Vec<BlogPost> = map.values().filter(|p| filter.matches(p)).cloned().collect();
        matching.sort_by(|a, b| sort.compare(a, b));

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok(BlogPage { items, total })
    }
}
