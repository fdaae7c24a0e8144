//! The publication state machine.
//!
//! A content unit lives in two persisted records: the author-owned draft and,
//! while published, the public post row. This service owns every transition
//! between the two states and keeps the six synchronized fields
//! (`title/slug/category_id/description/content/image`) in agreement.
//!
//! Publish and save-while-published are multi-step writes without a wrapping
//! transaction; the partial-failure window is covered by `check_sync`, the
//! explicit reconciliation operation.

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::domain::{ContentStatus, Draft, Identity, Post};
use crate::error::{DomainError, RepoError};
use crate::ports::{BlobPath, BlobStore, CategoryRepository, DraftRepository, PostRepository};
use crate::validation;

/// Input for creating a draft.
#[derive(Debug, Clone)]
pub struct NewDraft {
    pub title: String,
    pub slug: String,
    pub category_id: Option<Uuid>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
}

/// Input for saving a draft.
#[derive(Debug, Clone)]
pub struct DraftUpdate {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub category_id: Option<Uuid>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
}

/// Result of the draft/post reconciliation check.
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    pub draft_id: Uuid,
    pub post_id: Option<Uuid>,
    /// The draft claims to be published but the post row is gone.
    pub post_missing: bool,
    pub mismatched_fields: Vec<&'static str>,
}

impl SyncReport {
    pub fn in_sync(&self) -> bool {
        !self.post_missing && self.mismatched_fields.is_empty()
    }
}

/// Draft/publish lifecycle service.
pub struct PublicationService {
    drafts: Arc<dyn DraftRepository>,
    posts: Arc<dyn PostRepository>,
    categories: Arc<dyn CategoryRepository>,
    blobs: Arc<dyn BlobStore>,
}

impl PublicationService {
    pub fn new(
        drafts: Arc<dyn DraftRepository>,
        posts: Arc<dyn PostRepository>,
        categories: Arc<dyn CategoryRepository>,
        blobs: Arc<dyn BlobStore>,
    ) -> Self {
        Self {
            drafts,
            posts,
            categories,
            blobs,
        }
    }

    /// Create a new draft owned by the caller, in the initial `draft` state.
    pub async fn create_draft(
        &self,
        identity: &Identity,
        input: NewDraft,
    ) -> Result<Draft, DomainError> {
        validation::validate_title(&input.title)?;
        validation::validate_slug(&input.slug)?;
        validation::validate_description(input.description.as_deref())?;

        let mut draft = Draft::new(identity.user_id, input.title, input.slug);
        draft.category_id = self.resolve_category(input.category_id).await;
        draft.description = input.description;
        draft.content = input.content;
        draft.image = input.image;

        self.drafts
            .insert(draft)
            .await
            .map_err(|e| DomainError::store("create_draft", e))
    }

    /// Save a draft. When the draft is published, the same field values are
    /// written to the linked post so the live content stays synchronized.
    ///
    /// A failed post sync surfaces as an error; the draft write that already
    /// happened stands (see `check_sync`).
    pub async fn update_draft(
        &self,
        identity: &Identity,
        update: DraftUpdate,
    ) -> Result<Draft, DomainError> {
        validation::validate_title(&update.title)?;
        validation::validate_slug(&update.slug)?;
        validation::validate_description(update.description.as_deref())?;

        let draft = self.owned_draft(identity, update.id).await?;
        let category_id = self.resolve_category(update.category_id).await;

        let mut changed = draft.clone();
        changed.title = update.title;
        changed.slug = update.slug;
        changed.category_id = category_id;
        changed.description = update.description;
        changed.content = update.content;
        changed.image = update.image;

        let saved = self
            .drafts
            .update(changed)
            .await
            .map_err(|e| DomainError::store("update_draft", e))?;

        if draft.is_published() {
            if let Some(post_id) = draft.post_id {
                self.sync_post(&saved, post_id).await?;
            }
        }

        Ok(saved)
    }

    /// Publish a draft: insert the public post, best-effort copy the cover
    /// image to the post path, and link the draft to the new post.
    ///
    /// Returns the public slug for redirect purposes.
    pub async fn publish(&self, identity: &Identity, draft_id: Uuid) -> Result<String, DomainError> {
        let draft = self.owned_draft(identity, draft_id).await?;
        if draft.is_published() {
            return Err(DomainError::AlreadyPublished);
        }

        let inserted = self
            .posts
            .insert(Post::from_draft(&draft))
            .await
            .map_err(|e| match e {
                RepoError::UniqueViolation(_) => DomainError::DuplicateSlug {
                    entity: "post",
                    slug: draft.slug.clone(),
                },
                other => DomainError::store("publish_insert_post", other),
            })?;

        // The editor stores the cover image under the draft id; public URLs
        // use the post id. Copy failure must not fail the publish.
        self.copy_cover_image(&draft, inserted.id).await;

        let mut linked = draft.clone();
        linked.status = ContentStatus::Published;
        linked.post_id = Some(inserted.id);
        self.drafts
            .update(linked)
            .await
            .map_err(|e| DomainError::store("publish_update_draft", e))?;

        tracing::info!(draft_id = %draft_id, post_id = %inserted.id, slug = %inserted.slug, "draft published");

        if inserted.slug.is_empty() {
            Ok(draft.slug)
        } else {
            Ok(inserted.slug)
        }
    }

    /// Unpublish a draft: delete the linked post and reset the draft state.
    ///
    /// The cover image blob at the post-id path is intentionally left behind.
    pub async fn unpublish(&self, identity: &Identity, draft_id: Uuid) -> Result<(), DomainError> {
        let draft = self.owned_draft(identity, draft_id).await?;
        if !draft.is_published() {
            return Err(DomainError::NotPublished);
        }

        if let Some(post_id) = draft.post_id {
            match self.posts.delete(post_id).await {
                Ok(()) | Err(RepoError::NotFound) => {}
                Err(e) => return Err(DomainError::store("unpublish_delete_post", e)),
            }
        }

        let mut reset = draft;
        reset.status = ContentStatus::Draft;
        reset.post_id = None;
        self.drafts
            .update(reset)
            .await
            .map_err(|e| DomainError::store("unpublish_update_draft", e))?;

        tracing::info!(draft_id = %draft_id, "draft unpublished");
        Ok(())
    }

    /// Override a post's publication timestamp. Admin only.
    pub async fn set_publish_date(
        &self,
        identity: &Identity,
        post_id: Uuid,
        published_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<(), DomainError> {
        if !identity.is_admin() {
            return Err(DomainError::Forbidden);
        }

        let post = self
            .posts
            .find_by_id(post_id)
            .await
            .map_err(|e| DomainError::store("set_publish_date", e))?
            .ok_or_else(|| DomainError::not_found("post", post_id))?;

        let mut changed = post;
        changed.published_at = published_at;
        self.posts
            .update(changed)
            .await
            .map_err(|e| DomainError::store("set_publish_date", e))?;
        Ok(())
    }

    /// Reconciliation check: report which synchronized fields differ between
    /// a published draft and its linked post.
    pub async fn check_sync(
        &self,
        identity: &Identity,
        draft_id: Uuid,
    ) -> Result<SyncReport, DomainError> {
        let draft = self.owned_draft(identity, draft_id).await?;

        let Some(post_id) = draft.post_id.filter(|_| draft.is_published()) else {
            return Ok(SyncReport {
                draft_id,
                post_id: None,
                post_missing: false,
                mismatched_fields: Vec::new(),
            });
        };

        let post = self
            .posts
            .find_by_id(post_id)
            .await
            .map_err(|e| DomainError::store("check_sync", e))?;

        let Some(post) = post else {
            return Ok(SyncReport {
                draft_id,
                post_id: Some(post_id),
                post_missing: true,
                mismatched_fields: Vec::new(),
            });
        };

        let mut mismatched = Vec::new();
        if draft.title != post.title {
            mismatched.push("title");
        }
        if draft.slug != post.slug {
            mismatched.push("slug");
        }
        if draft.category_id != post.category_id {
            mismatched.push("category_id");
        }
        if draft.description != post.description {
            mismatched.push("description");
        }
        if draft.content != post.content {
            mismatched.push("content");
        }
        if draft.image != post.image {
            mismatched.push("image");
        }

        Ok(SyncReport {
            draft_id,
            post_id: Some(post_id),
            post_missing: false,
            mismatched_fields: mismatched,
        })
    }

    /// All drafts owned by the caller, for the editor listing.
    pub async fn list_drafts(&self, identity: &Identity) -> Result<Vec<Draft>, DomainError> {
        self.drafts
            .find_by_author(identity.user_id)
            .await
            .map_err(|e| DomainError::store("list_drafts", e))
    }

    /// A single draft, author-or-admin gated.
    pub async fn get_draft(&self, identity: &Identity, draft_id: Uuid) -> Result<Draft, DomainError> {
        self.owned_draft(identity, draft_id).await
    }

    /// Fetch a draft the caller may act on. A draft that exists but belongs
    /// to someone else reports `NotFound`, matching the owner-filtered
    /// lookups of the editor surface.
    async fn owned_draft(&self, identity: &Identity, draft_id: Uuid) -> Result<Draft, DomainError> {
        let draft = self
            .drafts
            .find_by_id(draft_id)
            .await
            .map_err(|e| DomainError::store("find_draft", e))?
            .ok_or_else(|| DomainError::not_found("draft", draft_id))?;

        if !identity.can_access(draft.author_id) {
            return Err(DomainError::not_found("draft", draft_id));
        }
        Ok(draft)
    }

    /// Resolve a category reference. A missing or invalid category falls
    /// back to "no category" rather than failing the save.
    async fn resolve_category(&self, category_id: Option<Uuid>) -> Option<Uuid> {
        let id = category_id?;
        match self.categories.find_by_id(id).await {
            Ok(Some(_)) => Some(id),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(category_id = %id, error = %e, "category lookup failed; saving without category");
                None
            }
        }
    }

    /// Write the draft's synchronized fields to the linked post.
    async fn sync_post(&self, draft: &Draft, post_id: Uuid) -> Result<(), DomainError> {
        let post = self
            .posts
            .find_by_id(post_id)
            .await
            .map_err(|e| DomainError::store("update_sync_post", e))?
            .ok_or_else(|| DomainError::not_found("post", post_id))?;

        let mut changed = post;
        changed.title = draft.title.clone();
        changed.slug = draft.slug.clone();
        changed.category_id = draft.category_id;
        changed.description = draft.description.clone();
        changed.content = draft.content.clone();
        changed.image = draft.image.clone();

        self.posts
            .update(changed)
            .await
            .map_err(|e| match e {
                RepoError::UniqueViolation(_) => DomainError::DuplicateSlug {
                    entity: "post",
                    slug: draft.slug.clone(),
                },
                other => DomainError::store("update_sync_post", other),
            })?;
        Ok(())
    }

    /// Best-effort cover image copy from the draft path to the post path.
    async fn copy_cover_image(&self, draft: &Draft, post_id: Uuid) {
        let Some(filename) = draft
            .image
            .as_deref()
            .map(str::trim)
            .filter(|f| !f.is_empty())
        else {
            return;
        };

        let from = BlobPath::new(draft.author_id, draft.id, filename);
        let to = BlobPath::new(draft.author_id, post_id, filename);
        if let Err(err) = self.blobs.copy(&from, &to).await {
            tracing::warn!(
                operation = "publish_copy_cover",
                %from,
                %to,
                error = %err,
                "cover image copy failed; post published without it"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::domain::Category;
    use crate::error::StorageError;
    use crate::ports::BaseRepository;

    #[derive(Default)]
    struct FakeDrafts {
        items: Mutex<HashMap<Uuid, Draft>>,
    }

    #[async_trait]
    impl BaseRepository<Draft, Uuid> for FakeDrafts {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Draft>, RepoError> {
            Ok(self.items.lock().unwrap().get(&id).cloned())
        }

        async fn insert(&self, entity: Draft) -> Result<Draft, RepoError> {
            self.items.lock().unwrap().insert(entity.id, entity.clone());
            Ok(entity)
        }

        async fn update(&self, entity: Draft) -> Result<Draft, RepoError> {
            let mut items = self.items.lock().unwrap();
            if !items.contains_key(&entity.id) {
                return Err(RepoError::NotFound);
            }
            items.insert(entity.id, entity.clone());
            Ok(entity)
        }

        async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
            self.items
                .lock()
                .unwrap()
                .remove(&id)
                .map(|_| ())
                .ok_or(RepoError::NotFound)
        }
    }

    #[async_trait]
    impl DraftRepository for FakeDrafts {
        async fn find_by_author(&self, author_id: Uuid) -> Result<Vec<Draft>, RepoError> {
            Ok(self
                .items
                .lock()
                .unwrap()
                .values()
                .filter(|d| d.author_id == author_id)
                .cloned()
                .collect())
        }
    }

    /// Post store that enforces slug uniqueness like the real table.
    #[derive(Default)]
    struct FakePosts {
        items: Mutex<HashMap<Uuid, Post>>,
    }

    #[async_trait]
    impl BaseRepository<Post, Uuid> for FakePosts {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
            Ok(self.items.lock().unwrap().get(&id).cloned())
        }

        async fn insert(&self, entity: Post) -> Result<Post, RepoError> {
            let mut items = self.items.lock().unwrap();
            if items.values().any(|p| p.slug == entity.slug) {
                return Err(RepoError::UniqueViolation("posts_slug_key".into()));
            }
            items.insert(entity.id, entity.clone());
            Ok(entity)
        }

        async fn update(&self, entity: Post) -> Result<Post, RepoError> {
            let mut items = self.items.lock().unwrap();
            if !items.contains_key(&entity.id) {
                return Err(RepoError::NotFound);
            }
            if items
                .values()
                .any(|p| p.id != entity.id && p.slug == entity.slug)
            {
                return Err(RepoError::UniqueViolation("posts_slug_key".into()));
            }
            items.insert(entity.id, entity.clone());
            Ok(entity)
        }

        async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
            self.items
                .lock()
                .unwrap()
                .remove(&id)
                .map(|_| ())
                .ok_or(RepoError::NotFound)
        }
    }

    #[async_trait]
    impl PostRepository for FakePosts {
        async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
            Ok(self
                .items
                .lock()
                .unwrap()
                .values()
                .find(|p| p.slug == slug)
                .cloned())
        }

        async fn list_published(&self) -> Result<Vec<Post>, RepoError> {
            Ok(self.items.lock().unwrap().values().cloned().collect())
        }
    }

    #[derive(Default)]
    struct FakeCategories {
        items: Mutex<HashMap<Uuid, Category>>,
    }

    #[async_trait]
    impl BaseRepository<Category, Uuid> for FakeCategories {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, RepoError> {
            Ok(self.items.lock().unwrap().get(&id).cloned())
        }

        async fn insert(&self, entity: Category) -> Result<Category, RepoError> {
            self.items.lock().unwrap().insert(entity.id, entity.clone());
            Ok(entity)
        }

        async fn update(&self, entity: Category) -> Result<Category, RepoError> {
            self.items.lock().unwrap().insert(entity.id, entity.clone());
            Ok(entity)
        }

        async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
            self.items
                .lock()
                .unwrap()
                .remove(&id)
                .map(|_| ())
                .ok_or(RepoError::NotFound)
        }
    }

    #[async_trait]
    impl CategoryRepository for FakeCategories {
        async fn list_all(&self) -> Result<Vec<Category>, RepoError> {
            Ok(self.items.lock().unwrap().values().cloned().collect())
        }
    }

    /// Blob store that records copies and can be told to fail.
    #[derive(Default)]
    struct FakeBlobs {
        copies: Mutex<Vec<(String, String)>>,
        fail: bool,
    }

    #[async_trait]
    impl BlobStore for FakeBlobs {
        async fn copy(&self, from: &BlobPath, to: &BlobPath) -> Result<(), StorageError> {
            if self.fail {
                return Err(StorageError::Backend("simulated outage".into()));
            }
            self.copies.lock().unwrap().push((from.key(), to.key()));
            Ok(())
        }

        async fn list(&self, _prefix: &str) -> Result<Vec<String>, StorageError> {
            Ok(Vec::new())
        }
    }

    struct Harness {
        service: PublicationService,
        drafts: Arc<FakeDrafts>,
        posts: Arc<FakePosts>,
        categories: Arc<FakeCategories>,
        blobs: Arc<FakeBlobs>,
    }

    fn harness_with_blobs(blobs: FakeBlobs) -> Harness {
        let drafts = Arc::new(FakeDrafts::default());
        let posts = Arc::new(FakePosts::default());
        let categories = Arc::new(FakeCategories::default());
        let blobs = Arc::new(blobs);
        let service = PublicationService::new(
            drafts.clone(),
            posts.clone(),
            categories.clone(),
            blobs.clone(),
        );
        Harness {
            service,
            drafts,
            posts,
            categories,
            blobs,
        }
    }

    fn harness() -> Harness {
        harness_with_blobs(FakeBlobs::default())
    }

    fn author() -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            email: "author@example.com".into(),
            roles: vec!["user".into()],
        }
    }

    fn admin() -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            email: "admin@example.com".into(),
            roles: vec!["admin".into()],
        }
    }

    async fn seed_draft(h: &Harness, identity: &Identity) -> Draft {
        h.service
            .create_draft(
                identity,
                NewDraft {
                    title: "My Post".into(),
                    slug: "my-post".into(),
                    category_id: None,
                    description: Some("A description".into()),
                    content: Some(r#"{"type":"doc","content":[]}"#.into()),
                    image: Some("cover.png".into()),
                },
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn publish_creates_post_and_links_draft() {
        let h = harness();
        let identity = author();
        let draft = seed_draft(&h, &identity).await;

        let slug = h.service.publish(&identity, draft.id).await.unwrap();
        assert_eq!(slug, "my-post");

        let draft = h.drafts.find_by_id(draft.id).await.unwrap().unwrap();
        assert_eq!(draft.status, ContentStatus::Published);
        let post_id = draft.post_id.expect("draft should link to the post");

        let post = h.posts.find_by_id(post_id).await.unwrap().unwrap();
        assert_eq!(post.title, draft.title);
        assert_eq!(post.slug, draft.slug);
        assert_eq!(post.description, draft.description);
        assert_eq!(post.content, draft.content);
        assert_eq!(post.image, draft.image);
        assert_eq!(post.author_id, draft.author_id);
        assert!(post.published);
    }

    #[tokio::test]
    async fn publish_copies_cover_image_to_post_path() {
        let h = harness();
        let identity = author();
        let draft = seed_draft(&h, &identity).await;

        h.service.publish(&identity, draft.id).await.unwrap();

        let copies = h.blobs.copies.lock().unwrap();
        assert_eq!(copies.len(), 1);
        let (from, to) = &copies[0];
        let linked = h.drafts.items.lock().unwrap()[&draft.id].clone();
        assert_eq!(
            from,
            &format!("{}/{}/cover.png", draft.author_id, draft.id)
        );
        assert_eq!(
            to,
            &format!("{}/{}/cover.png", draft.author_id, linked.post_id.unwrap())
        );
    }

    #[tokio::test]
    async fn blob_copy_failure_does_not_fail_publish() {
        let h = harness_with_blobs(FakeBlobs {
            fail: true,
            ..Default::default()
        });
        let identity = author();
        let draft = seed_draft(&h, &identity).await;

        let result = h.service.publish(&identity, draft.id).await;
        assert!(result.is_ok());

        let draft = h.drafts.find_by_id(draft.id).await.unwrap().unwrap();
        assert_eq!(draft.status, ContentStatus::Published);
    }

    #[tokio::test]
    async fn publish_twice_fails_and_creates_no_second_post() {
        let h = harness();
        let identity = author();
        let draft = seed_draft(&h, &identity).await;

        h.service.publish(&identity, draft.id).await.unwrap();
        let err = h.service.publish(&identity, draft.id).await.unwrap_err();
        assert!(matches!(err, DomainError::AlreadyPublished));
        assert_eq!(h.posts.items.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn publish_duplicate_slug_leaves_draft_unmodified() {
        let h = harness();
        let identity = author();
        let draft = seed_draft(&h, &identity).await;

        // Another author already owns the slug.
        let mut occupied = Draft::new(Uuid::new_v4(), "Other".into(), "my-post".into());
        occupied.content = None;
        h.posts.insert(Post::from_draft(&occupied)).await.unwrap();

        let err = h.service.publish(&identity, draft.id).await.unwrap_err();
        assert!(matches!(err, DomainError::DuplicateSlug { .. }));

        let draft = h.drafts.find_by_id(draft.id).await.unwrap().unwrap();
        assert_eq!(draft.status, ContentStatus::Draft);
        assert_eq!(draft.post_id, None);
    }

    #[tokio::test]
    async fn publish_someone_elses_draft_reports_not_found() {
        let h = harness();
        let identity = author();
        let draft = seed_draft(&h, &identity).await;

        let err = h.service.publish(&author(), draft.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn admin_can_publish_any_draft() {
        let h = harness();
        let identity = author();
        let draft = seed_draft(&h, &identity).await;

        assert!(h.service.publish(&admin(), draft.id).await.is_ok());
    }

    #[tokio::test]
    async fn unpublish_deletes_post_and_resets_draft() {
        let h = harness();
        let identity = author();
        let draft = seed_draft(&h, &identity).await;

        h.service.publish(&identity, draft.id).await.unwrap();
        let post_id = h
            .drafts
            .find_by_id(draft.id)
            .await
            .unwrap()
            .unwrap()
            .post_id
            .unwrap();

        h.service.unpublish(&identity, draft.id).await.unwrap();

        assert!(h.posts.find_by_id(post_id).await.unwrap().is_none());
        let draft = h.drafts.find_by_id(draft.id).await.unwrap().unwrap();
        assert_eq!(draft.status, ContentStatus::Draft);
        assert_eq!(draft.post_id, None);
    }

    #[tokio::test]
    async fn unpublish_unpublished_draft_fails() {
        let h = harness();
        let identity = author();
        let draft = seed_draft(&h, &identity).await;

        let err = h.service.unpublish(&identity, draft.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotPublished));
    }

    #[tokio::test]
    async fn update_published_draft_syncs_post() {
        let h = harness();
        let identity = author();
        let draft = seed_draft(&h, &identity).await;
        h.service.publish(&identity, draft.id).await.unwrap();

        let saved = h
            .service
            .update_draft(
                &identity,
                DraftUpdate {
                    id: draft.id,
                    title: "Renamed".into(),
                    slug: "my-post".into(),
                    category_id: None,
                    description: Some("A description".into()),
                    content: Some(r#"{"type":"doc","content":[]}"#.into()),
                    image: Some("cover.png".into()),
                },
            )
            .await
            .unwrap();
        assert_eq!(saved.title, "Renamed");

        let post_id = saved.post_id.unwrap();
        let post = h.posts.find_by_id(post_id).await.unwrap().unwrap();
        assert_eq!(post.title, "Renamed");
    }

    #[tokio::test]
    async fn update_unpublished_draft_touches_no_post() {
        let h = harness();
        let identity = author();
        let draft = seed_draft(&h, &identity).await;

        h.service
            .update_draft(
                &identity,
                DraftUpdate {
                    id: draft.id,
                    title: "Renamed".into(),
                    slug: "renamed".into(),
                    category_id: None,
                    description: None,
                    content: None,
                    image: None,
                },
            )
            .await
            .unwrap();

        assert!(h.posts.items.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_with_invalid_category_falls_back_to_none() {
        let h = harness();
        let identity = author();
        let draft = seed_draft(&h, &identity).await;

        let saved = h
            .service
            .update_draft(
                &identity,
                DraftUpdate {
                    id: draft.id,
                    title: "My Post".into(),
                    slug: "my-post".into(),
                    category_id: Some(Uuid::new_v4()),
                    description: None,
                    content: None,
                    image: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(saved.category_id, None);
    }

    #[tokio::test]
    async fn update_with_known_category_keeps_it() {
        let h = harness();
        let identity = author();
        let draft = seed_draft(&h, &identity).await;

        let category = Category::new("Tech".into(), "tech".into(), true, 0);
        h.categories.insert(category.clone()).await.unwrap();

        let saved = h
            .service
            .update_draft(
                &identity,
                DraftUpdate {
                    id: draft.id,
                    title: "My Post".into(),
                    slug: "my-post".into(),
                    category_id: Some(category.id),
                    description: None,
                    content: None,
                    image: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(saved.category_id, Some(category.id));
    }

    #[tokio::test]
    async fn update_sync_failure_leaves_draft_written() {
        let h = harness();
        let identity = author();
        let draft = seed_draft(&h, &identity).await;
        h.service.publish(&identity, draft.id).await.unwrap();

        // Simulate the partial-failure window: the post row vanishes.
        let post_id = h
            .drafts
            .find_by_id(draft.id)
            .await
            .unwrap()
            .unwrap()
            .post_id
            .unwrap();
        h.posts.delete(post_id).await.unwrap();

        let err = h
            .service
            .update_draft(
                &identity,
                DraftUpdate {
                    id: draft.id,
                    title: "Renamed".into(),
                    slug: "my-post".into(),
                    category_id: None,
                    description: None,
                    content: None,
                    image: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));

        // The draft write is not rolled back.
        let draft = h.drafts.find_by_id(draft.id).await.unwrap().unwrap();
        assert_eq!(draft.title, "Renamed");

        // And the reconciliation check names the gap.
        let report = h.service.check_sync(&identity, draft.id).await.unwrap();
        assert!(report.post_missing);
        assert!(!report.in_sync());
    }

    #[tokio::test]
    async fn create_draft_rejects_bad_slug() {
        let h = harness();
        let err = h
            .service
            .create_draft(
                &author(),
                NewDraft {
                    title: "Ok".into(),
                    slug: "Not A Slug".into(),
                    category_id: None,
                    description: None,
                    content: None,
                    image: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn check_sync_reports_mismatched_fields() {
        let h = harness();
        let identity = author();
        let draft = seed_draft(&h, &identity).await;
        h.service.publish(&identity, draft.id).await.unwrap();

        let report = h.service.check_sync(&identity, draft.id).await.unwrap();
        assert!(report.in_sync());

        // Drift the post behind the service's back.
        let post_id = report.post_id.unwrap();
        let mut post = h.posts.find_by_id(post_id).await.unwrap().unwrap();
        post.title = "Drifted".into();
        h.posts.update(post).await.unwrap();

        let report = h.service.check_sync(&identity, draft.id).await.unwrap();
        assert_eq!(report.mismatched_fields, vec!["title"]);
        assert!(!report.in_sync());
    }

    #[tokio::test]
    async fn set_publish_date_is_admin_only() {
        let h = harness();
        let identity = author();
        let draft = seed_draft(&h, &identity).await;
        h.service.publish(&identity, draft.id).await.unwrap();
        let post_id = h
            .drafts
            .find_by_id(draft.id)
            .await
            .unwrap()
            .unwrap()
            .post_id
            .unwrap();

        let when = chrono::Utc::now() - chrono::Duration::days(7);
        let err = h
            .service
            .set_publish_date(&identity, post_id, when)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Forbidden));

        h.service
            .set_publish_date(&admin(), post_id, when)
            .await
            .unwrap();
        let post = h.posts.find_by_id(post_id).await.unwrap().unwrap();
        assert_eq!(post.published_at, when);
    }

    #[tokio::test]
    async fn list_drafts_is_author_scoped() {
        let h = harness();
        let alice = author();
        let bob = author();
        seed_draft(&h, &alice).await;
        seed_draft(&h, &bob).await;

        let mine = h.service.list_drafts(&alice).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].author_id, alice.user_id);
    }
}
