use serde::Deserialize;
use ts_rs::TS;

use super::entities::AuthorRole;

/// 发帖请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/wall.ts")]
pub struct CreateWallPostRequest {
    pub author_id: i64,
    pub author_role: AuthorRole,
    pub content: String,
}

/// 评论请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/wall.ts")]
pub struct CreateWallCommentRequest {
    pub author_id: i64,
    pub author_role: AuthorRole,
    pub content: String,
}

/// 禁言/解除禁言请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/wall.ts")]
pub struct MuteStudentRequest {
    pub student_id: i64,
    // 仅禁言时需要：操作教师 ID
    pub muted_by: Option<i64>,
}
