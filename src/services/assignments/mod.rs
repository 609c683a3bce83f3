pub mod create;
pub mod create_test;
pub mod delete;
pub mod detail;
pub mod list;
pub mod notify;
pub mod notify_overdue;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::mail::MailSender;
use crate::models::assignments::requests::{
    AssignmentListParams, CreateAssignmentRequest, CreateTestParams, SubmitAssignmentRequest,
};
use crate::storage::Storage;

pub struct AssignmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssignmentService {
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

    pub(crate) fn get_mailer(&self, request: &HttpRequest) -> Arc<dyn MailSender> {
        request
            .app_data::<actix_web::web::Data<Arc<dyn MailSender>>>()
            .expect("MailSender not found in app data")
            .get_ref()
            .clone()
    }

    pub async fn create_assignment(
        &self,
        req: &HttpRequest,
        data: CreateAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_assignment(self, req, data).await
    }

    // 根据作业 ID 获取作业详情
    pub async fn get_assignment(&self, req: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        detail::get_assignment(self, req, id).await
    }

    // 分页列出作业
    pub async fn list_assignments(
        &self,
        req: &HttpRequest,
        params: AssignmentListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_assignments(self, req, params).await
    }

    pub async fn delete_assignment(&self, req: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        delete::delete_assignment(self, req, id).await
    }

    // 给全班学生发送作业发布通知
    pub async fn notify_assignment(&self, req: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        notify::notify_assignment(self, req, id).await
    }

    // 逾期作业扫描（供外部调度器调用）
    pub async fn notify_overdue(&self, req: &HttpRequest) -> ActixResult<HttpResponse> {
        notify_overdue::notify_overdue(self, req).await
    }

    // 学生提交作业
    pub async fn submit_assignment(
        &self,
        req: &HttpRequest,
        id: i64,
        data: SubmitAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_assignment(self, req, id, data).await
    }

    // 调试用：创建测试作业（仅开发环境）
    pub async fn create_test_assignment(
        &self,
        req: &HttpRequest,
        params: CreateTestParams,
    ) -> ActixResult<HttpResponse> {
        create_test::create_test_assignment(self, req, params).await
    }
}
