//! 班级墙帖子实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "wall_posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub class_id: i64,
    pub author_id: i64,
    pub author_role: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::wall_post_comments::Entity")]
    Comments,
}

impl Related<super::wall_post_comments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_wall_post(self) -> crate::models::wall::entities::WallPost {
        use crate::models::wall::entities::{AuthorRole, WallPost};
        use chrono::{DateTime, Utc};

        WallPost {
            id: self.id,
            class_id: self.class_id,
            author_id: self.author_id,
            author_role: AuthorRole::from_str_or_student(&self.author_role),
            content: self.content,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
