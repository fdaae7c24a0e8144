//! Draft entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use quill_core::domain::ContentStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "drafts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub author_id: Uuid,
    pub category_id: Option<Uuid>,
    pub title: String,
    pub slug: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    pub image: Option<String>,
    pub status: String,
    pub post_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Category,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to domain Draft.
impl From<Model> for quill_core::domain::Draft {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            author_id: model.author_id,
            category_id: model.category_id,
            title: model.title,
            slug: model.slug,
            description: model.description,
            content: model.content,
            image: model.image,
            // The migration constrains the column; anything else is treated
            // as unpublished.
            status: model.status.parse().unwrap_or(ContentStatus::Draft),
            post_id: model.post_id,
            created_at: model.created_at.into(),
        }
    }
}

/// Conversion from domain Draft to SeaORM ActiveModel.
impl From<quill_core::domain::Draft> for ActiveModel {
    fn from(draft: quill_core::domain::Draft) -> Self {
        Self {
            id: Set(draft.id),
            author_id: Set(draft.author_id),
            category_id: Set(draft.category_id),
            title: Set(draft.title),
            slug: Set(draft.slug),
            description: Set(draft.description),
            content: Set(draft.content),
            image: Set(draft.image),
            status: Set(draft.status.as_str().to_string()),
            post_id: Set(draft.post_id),
            created_at: Set(draft.created_at.into()),
        }
    }
}
