pub mod create;
pub mod list;
pub mod redeem;
pub mod toggle;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::invitations::requests::{
    CreateInvitationRequest, InvitationListParams, RedeemInvitationRequest,
    SetInvitationActiveRequest,
};
use crate::storage::Storage;

pub struct InvitationService {
    storage: Option<Arc<dyn Storage>>,
}

impl InvitationService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn create_invitation(
        &self,
        req: &HttpRequest,
        data: CreateInvitationRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_invitation(self, req, data).await
    }

    // 学生用邀请码加入班级
    pub async fn redeem_invitation(
        &self,
        req: &HttpRequest,
        data: RedeemInvitationRequest,
    ) -> ActixResult<HttpResponse> {
        redeem::redeem_invitation(self, req, data).await
    }

    // 启用/停用邀请码
    pub async fn set_invitation_active(
        &self,
        req: &HttpRequest,
        id: i64,
        data: SetInvitationActiveRequest,
    ) -> ActixResult<HttpResponse> {
        toggle::set_invitation_active(self, req, id, data).await
    }

    // 列出某班级的邀请码
    pub async fn list_invitations(
        &self,
        req: &HttpRequest,
        params: InvitationListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_invitations(self, req, params).await
    }
}
