//! Category administration.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Category, Identity};
use crate::error::{DomainError, RepoError};
use crate::ports::CategoryRepository;
use crate::validation;

/// Input for creating or updating a category.
#[derive(Debug, Clone)]
pub struct CategoryInput {
    pub title: String,
    pub slug: String,
    pub show_in_nav: bool,
    pub sort_order: i32,
}

/// Admin-gated category CRUD.
pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    /// All categories ordered by `sort_order`. Public.
    pub async fn list(&self) -> Result<Vec<Category>, DomainError> {
        self.categories
            .list_all()
            .await
            .map_err(|e| DomainError::store("list_categories", e))
    }

    pub async fn create(
        &self,
        identity: &Identity,
        input: CategoryInput,
    ) -> Result<Category, DomainError> {
        require_admin(identity)?;
        validation::validate_title(&input.title)?;
        validation::validate_slug(&input.slug)?;

        let category = Category::new(input.title, input.slug, input.show_in_nav, input.sort_order);
        let slug = category.slug.clone();
        self.categories
            .insert(category)
            .await
            .map_err(|e| map_category_err("create_category", slug, e))
    }

    pub async fn update(
        &self,
        identity: &Identity,
        id: Uuid,
        input: CategoryInput,
    ) -> Result<Category, DomainError> {
        require_admin(identity)?;
        validation::validate_title(&input.title)?;
        validation::validate_slug(&input.slug)?;

        let category = self
            .categories
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::store("update_category", e))?
            .ok_or_else(|| DomainError::not_found("category", id))?;

        let mut changed = category;
        changed.title = input.title;
        changed.slug = input.slug;
        changed.show_in_nav = input.show_in_nav;
        changed.sort_order = input.sort_order;

        let slug = changed.slug.clone();
        self.categories
            .update(changed)
            .await
            .map_err(|e| map_category_err("update_category", slug, e))
    }

    pub async fn delete(&self, identity: &Identity, id: Uuid) -> Result<(), DomainError> {
        require_admin(identity)?;
        match self.categories.delete(id).await {
            // Deleting an already-gone category is not an error.
            Ok(()) | Err(RepoError::NotFound) => Ok(()),
            Err(e) => Err(DomainError::store("delete_category", e)),
        }
    }
}

fn require_admin(identity: &Identity) -> Result<(), DomainError> {
    if identity.is_admin() {
        Ok(())
    } else {
        Err(DomainError::Forbidden)
    }
}

fn map_category_err(op: &'static str, slug: String, err: RepoError) -> DomainError {
    match err {
        RepoError::UniqueViolation(_) => DomainError::DuplicateSlug {
            entity: "category",
            slug,
        },
        other => DomainError::store(op, other),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::ports::BaseRepository;

    /// Category store that enforces slug uniqueness like the real table.
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
            let mut items = self.items.lock().unwrap();
            if items.values().any(|c| c.slug == entity.slug) {
                return Err(RepoError::UniqueViolation(entity.slug.clone()));
            }
            items.insert(entity.id, entity.clone());
            Ok(entity)
        }

        async fn update(&self, entity: Category) -> Result<Category, RepoError> {
            let mut items = self.items.lock().unwrap();
            if items
                .values()
                .any(|c| c.id != entity.id && c.slug == entity.slug)
            {
                return Err(RepoError::UniqueViolation(entity.slug.clone()));
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
    impl CategoryRepository for FakeCategories {
        async fn list_all(&self) -> Result<Vec<Category>, RepoError> {
            let mut all: Vec<_> = self.items.lock().unwrap().values().cloned().collect();
            all.sort_by_key(|c| c.sort_order);
            Ok(all)
        }
    }

    fn service() -> CategoryService {
        CategoryService::new(Arc::new(FakeCategories::default()))
    }

    fn admin() -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            email: "admin@example.com".into(),
            roles: vec!["admin".into()],
        }
    }

    fn user() -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            email: "user@example.com".into(),
            roles: vec!["user".into()],
        }
    }

    fn input(title: &str, slug: &str) -> CategoryInput {
        CategoryInput {
            title: title.into(),
            slug: slug.into(),
            show_in_nav: true,
            sort_order: 0,
        }
    }

    #[tokio::test]
    async fn mutations_require_admin() {
        let svc = service();
        let err = svc.create(&user(), input("Tech", "tech")).await.unwrap_err();
        assert!(matches!(err, DomainError::Forbidden));

        let err = svc
            .update(&user(), Uuid::new_v4(), input("Tech", "tech"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Forbidden));

        let err = svc.delete(&user(), Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, DomainError::Forbidden));
    }

    #[tokio::test]
    async fn create_and_list_ordered() {
        let svc = service();
        let mut second = input("Second", "second");
        second.sort_order = 2;
        let mut first = input("First", "first");
        first.sort_order = 1;

        svc.create(&admin(), second).await.unwrap();
        svc.create(&admin(), first).await.unwrap();

        let all = svc.list().await.unwrap();
        assert_eq!(
            all.iter().map(|c| c.slug.as_str()).collect::<Vec<_>>(),
            vec!["first", "second"]
        );
    }

    #[tokio::test]
    async fn duplicate_slug_is_distinct() {
        let svc = service();
        svc.create(&admin(), input("Tech", "tech")).await.unwrap();
        let err = svc
            .create(&admin(), input("Tech Two", "tech"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::DuplicateSlug { .. }));
    }

    #[tokio::test]
    async fn invalid_slug_is_rejected() {
        let svc = service();
        let err = svc
            .create(&admin(), input("Tech", "Tech Stuff"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn update_and_delete_round_trip() {
        let svc = service();
        let created = svc.create(&admin(), input("Tech", "tech")).await.unwrap();

        let mut renamed = input("Technology", "technology");
        renamed.sort_order = 5;
        let updated = svc.update(&admin(), created.id, renamed).await.unwrap();
        assert_eq!(updated.title, "Technology");
        assert_eq!(updated.sort_order, 5);

        svc.delete(&admin(), created.id).await.unwrap();
        // Idempotent.
        svc.delete(&admin(), created.id).await.unwrap();
        assert!(svc.list().await.unwrap().is_empty());
    }
}
