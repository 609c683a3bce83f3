use crate::models::assignments::entities::Assignment;
use crate::models::common::pagination::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListResponse {
    pub items: Vec<Assignment>,
    pub pagination: PaginationInfo,
}

/// 提交作业的响应（回执邮件是尽力而为，结果单独说明）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct SubmitAssignmentResponse {
    pub assignment_id: i64,
    pub student_id: i64,
    pub submission_date: chrono::DateTime<chrono::Utc>,
    // 回执邮件状态："sent" / "skipped" / "failed"
    pub receipt_mail: String,
}
