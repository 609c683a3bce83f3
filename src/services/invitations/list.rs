use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::InvitationService;
use crate::models::invitations::requests::InvitationListParams;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_invitations(
    service: &InvitationService,
    request: &HttpRequest,
    params: InvitationListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_invitations_by_class(params.class_id).await {
        Ok(invitations) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            invitations,
            "Invitation list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list invitations: {e}"),
            )),
        ),
    }
}
