use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AssignmentService;
use crate::mail::{MailTemplate, notify_recipients};
use crate::models::{ApiResponse, ErrorCode};

/// 给作业所在班级的全部学生发送"新作业"通知
///
/// 单个学生发送失败不影响其他人，接口始终返回 200 和分账汇总。
pub async fn notify_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let mailer = service.get_mailer(request);

    let assignment = match storage.get_assignment_by_id(id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "Assignment not found",
            )));
        }
        Err(e) => {
            error!("Failed to get assignment {}: {}", id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get assignment: {e}"),
                )),
            );
        }
    };

    // 通知以出题教师的名义发出
    let teacher = match storage.get_teacher_by_id(assignment.created_by).await {
        Ok(Some(teacher)) => teacher,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TeacherNotFound,
                "Teacher not found",
            )));
        }
        Err(e) => {
            error!(
                "Failed to get teacher {} of assignment {}: {}",
                assignment.created_by, id, e
            );
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get teacher information: {e}"),
                )),
            );
        }
    };

    let students = match storage.list_students_by_class(assignment.class_id).await {
        Ok(students) => students,
        Err(e) => {
            error!(
                "Failed to list students of class {}: {}",
                assignment.class_id, e
            );
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list class students: {e}"),
                )),
            );
        }
    };

    let title = assignment.title.clone();
    let due_date = assignment.due_date;
    let result = notify_recipients(mailer.as_ref(), &students, |student| {
        MailTemplate::AssignmentCreated {
            student_name: student.name.clone(),
            teacher_name: teacher.full_name.clone(),
            assignment_title: title.clone(),
            due_date,
        }
    })
    .await;

    let summary = result.into_summary();
    info!(
        "Assignment {} notification: {} sent, {} failed, {} skipped",
        id, summary.sent, summary.failed, summary.skipped
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(summary, "Notification batch completed")))
}
