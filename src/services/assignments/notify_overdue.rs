use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::{DateTime, Days, Utc};
use tracing::{error, info, warn};

use super::AssignmentService;
use crate::config::AppConfig;
use crate::mail::{MailTemplate, notify_recipients};
use crate::models::notifications::responses::{
    AssignmentOutcome, OverdueRunSummary, SkippedAssignment,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::roster::pending_students;

/// 计算逾期扫描窗口 [今天零点 - lookback_days, 今天零点)
///
/// 截止在昨天 00:00:00Z 的作业落在窗口内，今天 00:00:00Z 的不在。
/// lookback_days 大于 1 用于补扫调度器漏跑的天数。
pub fn overdue_window(now: DateTime<Utc>, lookback_days: i64) -> (DateTime<Utc>, DateTime<Utc>) {
    let end = now
        .date_naive()
        .and_time(chrono::NaiveTime::MIN)
        .and_utc();
    let start = end
        .checked_sub_days(Days::new(lookback_days.max(1) as u64))
        .unwrap_or(end);
    (start, end)
}

/// 逾期作业扫描：给窗口内截止且未提交的学生发提醒邮件
///
/// 单个作业处理失败只记入 skipped_assignments，不中断整次扫描。
pub async fn notify_overdue(
    service: &AssignmentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();

    // 配置了共享密钥时校验 x-api-key 头
    if !config.scheduler.api_key.is_empty() {
        let provided = request
            .headers()
            .get("x-api-key")
            .and_then(|v| v.to_str().ok());
        if provided != Some(config.scheduler.api_key.as_str()) {
            warn!("notify-overdue called with missing or invalid x-api-key");
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Invalid or missing x-api-key",
            )));
        }
    }

    let storage = service.get_storage(request);
    let mailer = service.get_mailer(request);

    let (window_start, window_end) = overdue_window(Utc::now(), config.scheduler.lookback_days);

    let assignments = match storage
        .list_assignments_due_between(window_start, window_end)
        .await
    {
        Ok(assignments) => assignments,
        Err(e) => {
            error!("Overdue scan failed to list assignments: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list overdue assignments: {e}"),
                )),
            );
        }
    };

    let mut summary = OverdueRunSummary {
        window_start,
        window_end,
        assignments_scanned: assignments.len() as i64,
        total_sent: 0,
        total_failed: 0,
        total_skipped: 0,
        outcomes: Vec::new(),
        skipped_assignments: Vec::new(),
    };

    for assignment in assignments {
        // 窗口查询只返回有截止时间的作业，这里仍然稳妥处理
        let Some(due_date) = assignment.due_date else {
            summary.skipped_assignments.push(SkippedAssignment {
                assignment_id: assignment.id,
                title: assignment.title.clone(),
                reason: "assignment has no due date".to_string(),
            });
            continue;
        };

        // 出题教师不存在时跳过该作业，继续扫描；提醒以其名义发出
        let teacher = match storage.get_teacher_by_id(assignment.created_by).await {
            Ok(Some(teacher)) => teacher,
            Ok(None) => {
                warn!(
                    "Overdue scan: teacher {} of assignment {} not found",
                    assignment.created_by, assignment.id
                );
                summary.skipped_assignments.push(SkippedAssignment {
                    assignment_id: assignment.id,
                    title: assignment.title.clone(),
                    reason: format!("teacher {} not found", assignment.created_by),
                });
                continue;
            }
            Err(e) => {
                summary.skipped_assignments.push(SkippedAssignment {
                    assignment_id: assignment.id,
                    title: assignment.title.clone(),
                    reason: format!("failed to load teacher: {e}"),
                });
                continue;
            }
        };

        let students = match storage.list_students_by_class(assignment.class_id).await {
            Ok(students) => students,
            Err(e) => {
                summary.skipped_assignments.push(SkippedAssignment {
                    assignment_id: assignment.id,
                    title: assignment.title.clone(),
                    reason: format!("failed to load class students: {e}"),
                });
                continue;
            }
        };

        let submissions = match storage.list_submissions_by_assignment(assignment.id).await {
            Ok(submissions) => submissions,
            Err(e) => {
                summary.skipped_assignments.push(SkippedAssignment {
                    assignment_id: assignment.id,
                    title: assignment.title.clone(),
                    reason: format!("failed to load submissions: {e}"),
                });
                continue;
            }
        };

        let submitted_ids: std::collections::HashSet<i64> =
            submissions.iter().map(|s| s.student_id).collect();
        let pending = pending_students(&students, &submitted_ids);

        if pending.is_empty() {
            summary.outcomes.push(AssignmentOutcome {
                assignment_id: assignment.id,
                title: assignment.title,
                pending_students: 0,
                sent: 0,
                failed: 0,
                skipped: 0,
                fully_submitted: true,
            });
            continue;
        }

        let title = assignment.title.clone();
        let result = notify_recipients(mailer.as_ref(), &pending, |student| {
            MailTemplate::OverdueReminder {
                student_name: student.name.clone(),
                teacher_name: teacher.full_name.clone(),
                assignment_title: title.clone(),
                due_date,
            }
        })
        .await;

        summary.total_sent += result.succeeded.len() as i64;
        summary.total_failed += result.failed.len() as i64;
        summary.total_skipped += result.skipped.len() as i64;
        summary.outcomes.push(AssignmentOutcome {
            assignment_id: assignment.id,
            title: assignment.title,
            pending_students: pending.len() as i64,
            sent: result.succeeded.len() as i64,
            failed: result.failed.len() as i64,
            skipped: result.skipped.len() as i64,
            fully_submitted: false,
        });
    }

    info!(
        "Overdue scan finished: {} assignments, {} sent, {} failed, {} skipped",
        summary.assignments_scanned, summary.total_sent, summary.total_failed, summary.total_skipped
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(summary, "Overdue scan completed")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_window_covers_exactly_yesterday_by_default() {
        let now = Utc.with_ymd_and_hms(2026, 8, 31, 9, 30, 0).unwrap();
        let (start, end) = overdue_window(now, 1);

        assert_eq!(start, Utc.with_ymd_and_hms(2026, 8, 30, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2026, 8, 31, 0, 0, 0).unwrap());

        // 昨天零点在窗口内，今天零点不在（区间左闭右开）
        let yesterday_midnight = Utc.with_ymd_and_hms(2026, 8, 30, 0, 0, 0).unwrap();
        let today_midnight = Utc.with_ymd_and_hms(2026, 8, 31, 0, 0, 0).unwrap();
        assert!(yesterday_midnight >= start && yesterday_midnight < end);
        assert!(!(today_midnight >= start && today_midnight < end));
    }

    #[test]
    fn test_window_lookback_extends_backwards() {
        let now = Utc.with_ymd_and_hms(2026, 8, 31, 23, 59, 59).unwrap();
        let (start, end) = overdue_window(now, 3);

        assert_eq!(start, Utc.with_ymd_and_hms(2026, 8, 28, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2026, 8, 31, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_window_treats_zero_lookback_as_one() {
        let now = Utc.with_ymd_and_hms(2026, 8, 31, 0, 0, 1).unwrap();
        let (start, end) = overdue_window(now, 0);
        assert_eq!(start, Utc.with_ymd_and_hms(2026, 8, 30, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2026, 8, 31, 0, 0, 0).unwrap());
    }
}
