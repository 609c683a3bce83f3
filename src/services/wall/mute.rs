use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::WallService;
use crate::models::wall::requests::MuteStudentRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 禁言班级里的学生，重复禁言不报错
pub async fn mute_student(
    service: &WallService,
    request: &HttpRequest,
    class_id: i64,
    data: MuteStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_student_by_id(data.student_id).await {
        Ok(Some(_)) => {}
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
    }

    let muted_by = data.muted_by.unwrap_or(0);

    match storage
        .mute_student(class_id, data.student_id, muted_by)
        .await
    {
        Ok(newly_muted) => {
            if newly_muted {
                info!("Student {} muted in class {}", data.student_id, class_id);
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Student muted")))
        }
        Err(e) => {
            error!("Mute failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Mute failed: {e}"),
                )),
            )
        }
    }
}

/// 解除禁言，本就未被禁言时也视为成功
pub async fn unmute_student(
    service: &WallService,
    request: &HttpRequest,
    class_id: i64,
    data: MuteStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.unmute_student(class_id, data.student_id).await {
        Ok(removed) => {
            if removed {
                info!("Student {} unmuted in class {}", data.student_id, class_id);
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Student unmuted")))
        }
        Err(e) => {
            error!("Unmute failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Unmute failed: {e}"),
                )),
            )
        }
    }
}
