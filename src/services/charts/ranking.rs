use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::Utc;
use tracing::error;

use super::ChartService;
use crate::models::charts::responses::RankingResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::charts::rank_students;

pub async fn class_ranking(
    service: &ChartService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_class_by_id(class_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassNotFound,
                "Class not found",
            )));
        }
        Err(e) => {
            error!("Failed to get class {}: {}", class_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get class information: {e}"),
                )),
            );
        }
    }

    let students = match storage.list_students_by_class(class_id).await {
        Ok(students) => students,
        Err(e) => {
            error!("Failed to list students of class {}: {}", class_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list class students: {e}"),
                )),
            );
        }
    };

    let solutions = match storage.list_solutions_by_class(class_id).await {
        Ok(solutions) => solutions,
        Err(e) => {
            error!("Failed to list solutions of class {}: {}", class_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list class solutions: {e}"),
                )),
            );
        }
    };

    let items = rank_students(&students, &solutions, Utc::now().date_naive());

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        RankingResponse { items },
        "Ranking retrieved successfully",
    )))
}
