use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info, warn};

use super::AssignmentService;
use crate::mail::{MailTemplate, OutgoingMail};
use crate::models::assignments::requests::SubmitAssignmentRequest;
use crate::models::assignments::responses::SubmitAssignmentResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 学生提交作业，随后尽力发送提交回执邮件
///
/// 回执只是锦上添花：发送失败或学生没有邮箱都不影响提交本身，
/// 结果写进响应的 receipt_mail 字段。
pub async fn submit_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    id: i64,
    data: SubmitAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

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

    let student = match storage.get_student_by_id(data.student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            error!("Failed to get student {}: {}", data.student_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get student: {e}"),
                )),
            );
        }
    };

    let submission = match storage.upsert_submission(assignment.id, student.id).await {
        Ok(submission) => submission,
        Err(e) => {
            error!(
                "Failed to record submission of student {} for assignment {}: {}",
                student.id, assignment.id, e
            );
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to record submission: {e}"),
                )),
            );
        }
    };

    info!(
        "Student {} submitted assignment {}",
        student.id, assignment.id
    );

    // 提交回执，尽力而为
    let receipt_mail = match student.email.as_deref().filter(|a| !a.is_empty()) {
        None => "skipped",
        Some(address) => {
            let template = MailTemplate::SubmissionReceived {
                student_name: student.name.clone(),
                assignment_title: assignment.title.clone(),
                submitted_at: submission.submission_date,
            };
            let mail = OutgoingMail {
                to_name: student.name.clone(),
                to_address: address.to_string(),
                subject: template.subject(),
                text_body: template.text_body(),
                html_body: template.html_body(),
            };
            match service.get_mailer(request).send(&mail).await {
                Ok(()) => "sent",
                Err(e) => {
                    warn!(
                        "Submission receipt to student {} failed: {}",
                        student.id, e
                    );
                    "failed"
                }
            }
        }
    };

    let response = SubmitAssignmentResponse {
        assignment_id: assignment.id,
        student_id: student.id,
        submission_date: submission.submission_date,
        receipt_mail: receipt_mail.to_string(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Submission recorded")))
}
