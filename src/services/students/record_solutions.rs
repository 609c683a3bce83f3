use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::models::students::requests::RecordSolutionRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 记录某学生某天的做题数，同一天重复记录按覆盖处理
pub async fn record_solution(
    service: &StudentService,
    request: &HttpRequest,
    id: i64,
    data: RecordSolutionRequest,
) -> ActixResult<HttpResponse> {
    if !data.count_in_range() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Solved count must be between 0 and 2147483647",
        )));
    }

    let storage = service.get_storage(request);

    match storage.get_student_by_id(id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            error!("Failed to get student {}: {}", id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get student: {e}"),
                )),
            );
        }
    }

    match storage.record_solution(id, data).await {
        Ok(solution) => {
            info!(
                "Solution count recorded for student {} on {}",
                id, solution.solved_on
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(solution, "Solution count recorded")))
        }
        Err(e) => {
            error!("Failed to record solution for student {}: {}", id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to record solution: {e}"),
                )),
            )
        }
    }
}
