//! 做题记录存储操作
//!
//! 同一学生同一天只保留一行，重复记录覆盖当天计数。

use super::SeaOrmStorage;
use crate::entity::student_solutions::{ActiveModel, Column, Entity as StudentSolutions, Relation};
use crate::entity::students;
use crate::errors::{ClassTrackError, Result};
use crate::models::students::{entities::Solution, requests::RecordSolutionRequest};
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Set,
};

// 做题日期统一存当天 UTC 零点的时间戳
fn date_to_epoch(date: NaiveDate) -> i64 {
    date.and_time(chrono::NaiveTime::MIN).and_utc().timestamp()
}

impl SeaOrmStorage {
    /// 记录某学生某天的做题数（覆盖式 upsert）
    pub async fn record_solution_impl(
        &self,
        student_id: i64,
        record: RecordSolutionRequest,
    ) -> Result<Solution> {
        let solved_on = date_to_epoch(record.solved_on);

        let existing = StudentSolutions::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::SolvedOn.eq(solved_on))
            .one(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("查询做题记录失败: {e}")))?;

        let result = match existing {
            Some(row) => {
                let model = ActiveModel {
                    id: Set(row.id),
                    count: Set(record.count as i32),
                    ..Default::default()
                };
                model.update(&self.db).await.map_err(|e| {
                    ClassTrackError::database_operation(format!("更新做题记录失败: {e}"))
                })?
            }
            None => {
                let model = ActiveModel {
                    student_id: Set(student_id),
                    solved_on: Set(solved_on),
                    count: Set(record.count as i32),
                    ..Default::default()
                };
                model.insert(&self.db).await.map_err(|e| {
                    ClassTrackError::database_operation(format!("创建做题记录失败: {e}"))
                })?
            }
        };

        Ok(result.into_solution())
    }

    /// 列出某班级全部做题记录
    pub async fn list_solutions_by_class_impl(&self, class_id: i64) -> Result<Vec<Solution>> {
        let rows = StudentSolutions::find()
            .join(JoinType::InnerJoin, Relation::Student.def())
            .filter(students::Column::ClassId.eq(class_id))
            .order_by_asc(Column::SolvedOn)
            .all(&self.db)
            .await
            .map_err(|e| {
                ClassTrackError::database_operation(format!("查询班级做题记录失败: {e}"))
            })?;

        Ok(rows.into_iter().map(|m| m.into_solution()).collect())
    }
}
