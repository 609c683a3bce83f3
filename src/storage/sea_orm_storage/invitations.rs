//! 邀请码存储操作
//!
//! 兑换在事务内完成：重读邀请码、递增使用次数、把学生移入班级，
//! 三步要么全部生效要么全部回滚。

use super::SeaOrmStorage;
use crate::entity::class_invitations::{ActiveModel, Column, Entity as ClassInvitations};
use crate::entity::students::{ActiveModel as StudentActiveModel, Entity as Students};
use crate::errors::{ClassTrackError, Result};
use crate::models::invitations::{entities::Invitation, requests::CreateInvitationRequest};
use crate::models::students::entities::Student;
use crate::utils::random_code::generate_invite_code;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建邀请码（自动生成 8 位码）
    pub async fn create_invitation_impl(
        &self,
        req: CreateInvitationRequest,
    ) -> Result<Invitation> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            invitation_code: Set(generate_invite_code()),
            class_id: Set(req.class_id),
            is_active: Set(true),
            expires_at: Set(req.expires_at.map(|t| t.timestamp())),
            max_uses: Set(req.max_uses),
            current_uses: Set(0),
            created_by: Set(req.created_by),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("创建邀请码失败: {e}")))?;

        Ok(result.into_invitation())
    }

    /// 通过邀请码查询
    pub async fn get_invitation_by_code_impl(&self, code: &str) -> Result<Option<Invitation>> {
        let result = ClassInvitations::find()
            .filter(Column::InvitationCode.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("查询邀请码失败: {e}")))?;

        Ok(result.map(|m| m.into_invitation()))
    }

    /// 列出某班级的邀请码
    pub async fn list_invitations_by_class_impl(&self, class_id: i64) -> Result<Vec<Invitation>> {
        let rows = ClassInvitations::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("查询邀请码列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_invitation()).collect())
    }

    /// 启用/停用邀请码
    pub async fn set_invitation_active_impl(
        &self,
        id: i64,
        is_active: bool,
    ) -> Result<Option<Invitation>> {
        let existing = ClassInvitations::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("查询邀请码失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            is_active: Set(is_active),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("更新邀请码失败: {e}")))?;

        Ok(Some(result.into_invitation()))
    }

    /// 在事务内兑换邀请码
    ///
    /// 事务内重读邀请码和学生，任一条件不再满足（并发用尽名额、
    /// 被停用、学生已不存在）时返回 None 并回滚，不留半完成状态。
    pub async fn redeem_invitation_impl(
        &self,
        code: &str,
        student_id: i64,
        now: DateTime<Utc>,
    ) -> Result<Option<Student>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("开启事务失败: {e}")))?;

        // 事务内重读，避免基于过期快照兑换
        let invitation_row = ClassInvitations::find()
            .filter(Column::InvitationCode.eq(code))
            .one(&txn)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("查询邀请码失败: {e}")))?;

        let Some(invitation_row) = invitation_row else {
            txn.rollback()
                .await
                .map_err(|e| ClassTrackError::database_operation(format!("回滚事务失败: {e}")))?;
            return Ok(None);
        };

        let invitation = invitation_row.clone().into_invitation();
        let class_id = invitation.class_id;
        if invitation.check_redeemable(now).is_err() {
            txn.rollback()
                .await
                .map_err(|e| ClassTrackError::database_operation(format!("回滚事务失败: {e}")))?;
            return Ok(None);
        }

        let student_row = Students::find_by_id(student_id)
            .one(&txn)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("查询学生失败: {e}")))?;

        let Some(student_row) = student_row else {
            txn.rollback()
                .await
                .map_err(|e| ClassTrackError::database_operation(format!("回滚事务失败: {e}")))?;
            return Ok(None);
        };

        let invitation_update = ActiveModel {
            id: Set(invitation_row.id),
            current_uses: Set(invitation_row.current_uses + 1),
            ..Default::default()
        };
        invitation_update
            .update(&txn)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("更新邀请码失败: {e}")))?;

        let student_update = StudentActiveModel {
            id: Set(student_row.id),
            class_id: Set(Some(class_id)),
            updated_at: Set(now.timestamp()),
            ..Default::default()
        };
        let updated = student_update
            .update(&txn)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("更新学生班级失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(Some(updated.into_student()))
    }
}
