use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;

/// 单次批量通知的汇总
///
/// 不变量：total == sent + failed + skipped。
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct NotifySummary {
    pub total: i64,
    pub sent: i64,
    pub failed: i64,
    pub skipped: i64,
    pub failures: Vec<NotifyFailure>,
}

/// 单个学生发送失败的明细
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct NotifyFailure {
    pub student_id: i64,
    pub error: String,
}

/// 逾期扫描中单个作业的处理结果
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct AssignmentOutcome {
    pub assignment_id: i64,
    pub title: String,
    // 未提交学生总数（含无邮箱被跳过的）
    pub pending_students: i64,
    pub sent: i64,
    pub failed: i64,
    pub skipped: i64,
    // 全员已提交时为 true，此时不产生任何发送
    pub fully_submitted: bool,
}

/// 被整体跳过的作业及原因
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct SkippedAssignment {
    pub assignment_id: i64,
    pub title: String,
    pub reason: String,
}

/// 逾期作业扫描的整体汇总
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct OverdueRunSummary {
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
    pub assignments_scanned: i64,
    pub total_sent: i64,
    pub total_failed: i64,
    pub total_skipped: i64,
    pub outcomes: Vec<AssignmentOutcome>,
    pub skipped_assignments: Vec<SkippedAssignment>,
}
