use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ChartService;
use crate::models::charts::requests::ChartParams;
use crate::models::charts::responses::ChartResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::charts::solution_series;

// 单次查询最多一年，防止误传区间拖垮接口
const MAX_RANGE_DAYS: i64 = 366;

pub async fn class_chart(
    service: &ChartService,
    request: &HttpRequest,
    class_id: i64,
    params: ChartParams,
) -> ActixResult<HttpResponse> {
    if params.from > params.to {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "'from' must not be after 'to'",
        )));
    }

    if (params.to - params.from).num_days() >= MAX_RANGE_DAYS {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Date range must be shorter than one year",
        )));
    }

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

    let rows = solution_series(&students, &solutions, params.from, params.to);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ChartResponse { rows },
        "Chart data retrieved successfully",
    )))
}
