//! 帖子评论实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "wall_post_comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub post_id: i64,
    pub author_id: i64,
    pub author_role: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::wall_posts::Entity",
        from = "Column::PostId",
        to = "super::wall_posts::Column::Id"
    )]
    Post,
}

impl Related<super::wall_posts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_wall_comment(self) -> crate::models::wall::entities::WallComment {
        use crate::models::wall::entities::{AuthorRole, WallComment};
        use chrono::{DateTime, Utc};

        WallComment {
            id: self.id,
            post_id: self.post_id,
            author_id: self.author_id,
            author_role: AuthorRole::from_str_or_student(&self.author_role),
            content: self.content,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
