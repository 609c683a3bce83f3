//! 做题记录实体
//!
//! `solved_on` 存储当天 UTC 零点的时间戳，同一学生同一天只有一行。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_solutions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub solved_on: i64,
    pub count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_solution(self) -> crate::models::students::entities::Solution {
        use crate::models::students::entities::Solution;
        use chrono::{DateTime, Utc};

        Solution {
            id: self.id,
            student_id: self.student_id,
            solved_on: DateTime::<Utc>::from_timestamp(self.solved_on, 0)
                .unwrap_or_default()
                .date_naive(),
            count: self.count as i64,
        }
    }
}
