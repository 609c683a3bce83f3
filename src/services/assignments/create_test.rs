use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::{Days, Utc};
use tracing::{error, info};

use super::AssignmentService;
use crate::config::AppConfig;
use crate::models::assignments::requests::{CreateAssignmentRequest, CreateTestParams};
use crate::models::{ApiResponse, ErrorCode};

/// 调试用：创建一个截止于昨天的测试作业，便于演练逾期扫描
///
/// 仅开发环境可用，生产环境一律 403。
pub async fn create_test_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    params: CreateTestParams,
) -> ActixResult<HttpResponse> {
    if AppConfig::get().is_production() {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Test helper is disabled in production",
        )));
    }

    let storage = service.get_storage(request);

    let now = Utc::now();
    let due_date = now.checked_sub_days(Days::new(1)).unwrap_or(now);

    let req = CreateAssignmentRequest {
        class_id: params.class_id,
        created_by: params.teacher_id,
        title: format!("测试作业 {}", now.format("%Y-%m-%d %H:%M:%S")),
        description: Some("由 create-test 调试接口生成".to_string()),
        due_date: Some(due_date),
    };

    let assignment = match storage.create_assignment(req).await {
        Ok(assignment) => assignment,
        Err(e) => {
            error!("Test assignment creation failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Test assignment creation failed: {e}"),
                )),
            );
        }
    };

    info!(
        "Test assignment {} created for class {}",
        assignment.id, assignment.class_id
    );

    if params.notify.unwrap_or(false) {
        return super::notify::notify_assignment(service, request, assignment.id).await;
    }

    Ok(HttpResponse::Created().json(ApiResponse::success(
        assignment,
        "Test assignment created",
    )))
}
