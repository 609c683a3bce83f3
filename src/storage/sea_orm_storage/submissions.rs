//! 提交记录存储操作

use super::SeaOrmStorage;
use crate::entity::student_assignments::{ActiveModel, Column, Entity as StudentAssignments};
use crate::errors::{ClassTrackError, Result};
use crate::models::assignments::entities::Submission;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 记录学生提交（同一学生重复提交覆盖提交时间）
    pub async fn upsert_submission_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Submission> {
        let now = chrono::Utc::now().timestamp();

        let existing = StudentAssignments::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("查询提交记录失败: {e}")))?;

        let result = match existing {
            Some(row) => {
                let model = ActiveModel {
                    id: Set(row.id),
                    submission_date: Set(now),
                    ..Default::default()
                };
                model.update(&self.db).await.map_err(|e| {
                    ClassTrackError::database_operation(format!("更新提交记录失败: {e}"))
                })?
            }
            None => {
                let model = ActiveModel {
                    assignment_id: Set(assignment_id),
                    student_id: Set(student_id),
                    status: Set("submitted".to_string()),
                    submission_date: Set(now),
                    ..Default::default()
                };
                model.insert(&self.db).await.map_err(|e| {
                    ClassTrackError::database_operation(format!("创建提交记录失败: {e}"))
                })?
            }
        };

        Ok(result.into_submission())
    }

    /// 列出某作业的全部提交
    pub async fn list_submissions_by_assignment_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<Submission>> {
        let rows = StudentAssignments::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .order_by_asc(Column::SubmissionDate)
            .all(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("查询提交列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_submission()).collect())
    }
}
