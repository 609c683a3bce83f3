use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/invitation.ts")]
pub struct Invitation {
    // 唯一 ID
    pub id: i64,
    // 邀请码（8 位大写字母/数字）
    pub invitation_code: String,
    // 目标班级 ID
    pub class_id: i64,
    // 是否启用（教师可随时关闭）
    pub is_active: bool,
    // 过期时间，为空表示永不过期
    pub expires_at: Option<DateTime<Utc>>,
    // 最大使用次数，为空表示不限制
    pub max_uses: Option<i32>,
    // 已使用次数
    pub current_uses: i32,
    // 创建教师 ID
    pub created_by: i64,
    // 创建时间
    pub created_at: DateTime<Utc>,
}

/// 邀请码兑换失败原因
///
/// 校验按固定顺序短路：存在 → 启用 → 未过期 → 有剩余次数 → 未重复加入。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedeemError {
    CodeNotFound,
    CodeInactive,
    CodeExpired,
    CodeExhausted,
    AlreadyEnrolled,
}

impl Invitation {
    /// 检查邀请码当前是否可兑换（不含学生维度的检查）
    pub fn check_redeemable(&self, now: DateTime<Utc>) -> Result<(), RedeemError> {
        if !self.is_active {
            return Err(RedeemError::CodeInactive);
        }
        if let Some(expires_at) = self.expires_at
            && expires_at <= now
        {
            return Err(RedeemError::CodeExpired);
        }
        if let Some(max_uses) = self.max_uses
            && self.current_uses >= max_uses
        {
            return Err(RedeemError::CodeExhausted);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn invitation(
        is_active: bool,
        expires_at: Option<DateTime<Utc>>,
        max_uses: Option<i32>,
        current_uses: i32,
    ) -> Invitation {
        Invitation {
            id: 1,
            invitation_code: "AB12CD34".to_string(),
            class_id: 10,
            is_active,
            expires_at,
            max_uses,
            current_uses,
            created_by: 1,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_open_code_is_redeemable() {
        let inv = invitation(true, None, None, 999);
        assert_eq!(inv.check_redeemable(Utc::now()), Ok(()));
    }

    #[test]
    fn test_inactive_wins_over_everything() {
        let now = Utc::now();
        let inv = invitation(false, Some(now - Duration::days(1)), Some(1), 1);
        assert_eq!(inv.check_redeemable(now), Err(RedeemError::CodeInactive));
    }

    #[test]
    fn test_expired_code_rejected_even_with_uses_left() {
        let now = Utc::now();
        let inv = invitation(true, Some(now - Duration::hours(1)), Some(10), 0);
        assert_eq!(inv.check_redeemable(now), Err(RedeemError::CodeExpired));
    }

    #[test]
    fn test_exhausted_code_rejected_even_if_unexpired_and_active() {
        let now = Utc::now();
        let inv = invitation(true, Some(now + Duration::days(30)), Some(5), 5);
        assert_eq!(inv.check_redeemable(now), Err(RedeemError::CodeExhausted));
    }

    #[test]
    fn test_expiry_boundary_is_exclusive() {
        let now = Utc::now();
        let inv = invitation(true, Some(now), None, 0);
        // expires_at == now 视为已过期
        assert_eq!(inv.check_redeemable(now), Err(RedeemError::CodeExpired));
    }

    #[test]
    fn test_check_does_not_mutate_uses() {
        let now = Utc::now();
        let inv = invitation(true, None, Some(5), 5);
        let _ = inv.check_redeemable(now);
        assert_eq!(inv.current_uses, 5);
    }
}
