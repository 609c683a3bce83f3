use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;

/// 创建邀请码请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/invitation.ts")]
pub struct CreateInvitationRequest {
    pub class_id: i64,
    pub created_by: i64,
    pub expires_at: Option<DateTime<Utc>>,
    pub max_uses: Option<i32>,
}

/// 兑换邀请码请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/invitation.ts")]
pub struct RedeemInvitationRequest {
    pub invitation_code: String,
    pub student_id: i64,
}

/// 启用/停用邀请码请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/invitation.ts")]
pub struct SetInvitationActiveRequest {
    pub is_active: bool,
}

/// 邀请码列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/invitation.ts")]
pub struct InvitationListParams {
    pub class_id: i64,
}
