use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use chrono::Utc;

use super::SystemService;
use crate::models::system::responses::SystemStatusResponse;
use crate::models::{ApiResponse, AppStartTime, ErrorCode};

pub async fn get_status(
    service: &SystemService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = service.get_config();

    let Some(start) = request.app_data::<web::Data<AppStartTime>>() else {
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Start time not available",
            )),
        );
    };

    let now = Utc::now();
    let status = SystemStatusResponse {
        name: config.app.system_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: config.app.environment.clone(),
        started_at: start.start_datetime,
        uptime_seconds: now
            .signed_duration_since(start.start_datetime)
            .num_seconds(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(status, "System status")))
}
