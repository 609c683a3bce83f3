//! 班级墙存储操作

use super::SeaOrmStorage;
use crate::entity::muted_students::{
    ActiveModel as MutedActiveModel, Column as MutedColumn, Entity as MutedStudents,
};
use crate::entity::wall_post_comments::{
    ActiveModel as CommentActiveModel, Column as CommentColumn, Entity as WallPostComments,
};
use crate::entity::wall_posts::{ActiveModel, Column, Entity as WallPosts};
use crate::errors::{ClassTrackError, Result};
use crate::models::wall::{
    entities::{WallComment, WallPost},
    requests::{CreateWallCommentRequest, CreateWallPostRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 发帖
    pub async fn create_wall_post_impl(
        &self,
        class_id: i64,
        req: CreateWallPostRequest,
    ) -> Result<WallPost> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_id: Set(class_id),
            author_id: Set(req.author_id),
            author_role: Set(req.author_role.as_str().to_string()),
            content: Set(req.content),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("发帖失败: {e}")))?;

        Ok(result.into_wall_post())
    }

    /// 通过 ID 获取帖子
    pub async fn get_wall_post_by_id_impl(&self, id: i64) -> Result<Option<WallPost>> {
        let result = WallPosts::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("查询帖子失败: {e}")))?;

        Ok(result.map(|m| m.into_wall_post()))
    }

    /// 列出某班级的帖子（新帖在前）
    pub async fn list_wall_posts_impl(&self, class_id: i64) -> Result<Vec<WallPost>> {
        let rows = WallPosts::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("查询帖子列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_wall_post()).collect())
    }

    /// 删除帖子（评论由外键级联删除）
    pub async fn delete_wall_post_impl(&self, id: i64) -> Result<bool> {
        let result = WallPosts::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("删除帖子失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 评论
    pub async fn create_wall_comment_impl(
        &self,
        post_id: i64,
        req: CreateWallCommentRequest,
    ) -> Result<WallComment> {
        let now = chrono::Utc::now().timestamp();

        let model = CommentActiveModel {
            post_id: Set(post_id),
            author_id: Set(req.author_id),
            author_role: Set(req.author_role.as_str().to_string()),
            content: Set(req.content),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("评论失败: {e}")))?;

        Ok(result.into_wall_comment())
    }

    /// 列出某帖子的评论（旧评论在前）
    pub async fn list_wall_comments_impl(&self, post_id: i64) -> Result<Vec<WallComment>> {
        let rows = WallPostComments::find()
            .filter(CommentColumn::PostId.eq(post_id))
            .order_by_asc(CommentColumn::CreatedAt)
            .order_by_asc(CommentColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("查询评论列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_wall_comment()).collect())
    }

    /// 禁言（幂等，已禁言时直接返回 false）
    pub async fn mute_student_impl(
        &self,
        class_id: i64,
        student_id: i64,
        muted_by: i64,
    ) -> Result<bool> {
        if self.is_student_muted_impl(class_id, student_id).await? {
            return Ok(false);
        }

        let model = MutedActiveModel {
            class_id: Set(class_id),
            student_id: Set(student_id),
            muted_by: Set(muted_by),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("禁言失败: {e}")))?;

        Ok(true)
    }

    /// 解除禁言（幂等）
    pub async fn unmute_student_impl(&self, class_id: i64, student_id: i64) -> Result<bool> {
        let result = MutedStudents::delete_many()
            .filter(MutedColumn::ClassId.eq(class_id))
            .filter(MutedColumn::StudentId.eq(student_id))
            .exec(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("解除禁言失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 查询是否被禁言
    pub async fn is_student_muted_impl(&self, class_id: i64, student_id: i64) -> Result<bool> {
        let count = MutedStudents::find()
            .filter(MutedColumn::ClassId.eq(class_id))
            .filter(MutedColumn::StudentId.eq(student_id))
            .count(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("查询禁言状态失败: {e}")))?;

        Ok(count > 0)
    }
}
