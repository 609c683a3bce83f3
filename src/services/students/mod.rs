pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod record_solutions;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::students::requests::{
    CreateStudentRequest, RecordSolutionRequest, StudentListParams, UpdateStudentRequest,
};
use crate::storage::Storage;

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
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

    pub async fn create_student(
        &self,
        req: &HttpRequest,
        data: CreateStudentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_student(self, req, data).await
    }

    // 根据学生 ID 获取学生信息
    pub async fn get_student(&self, req: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        get::get_student(self, req, id).await
    }

    // 列出学生（可按班级筛选）
    pub async fn list_students(
        &self,
        req: &HttpRequest,
        params: StudentListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_students(self, req, params).await
    }

    // 更新学生信息
    pub async fn update_student(
        &self,
        req: &HttpRequest,
        id: i64,
        data: UpdateStudentRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_student(self, req, id, data).await
    }

    // 删除学生
    pub async fn delete_student(&self, req: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        delete::delete_student(self, req, id).await
    }

    // 记录某学生某天的做题数
    pub async fn record_solution(
        &self,
        req: &HttpRequest,
        id: i64,
        data: RecordSolutionRequest,
    ) -> ActixResult<HttpResponse> {
        record_solutions::record_solution(self, req, id, data).await
    }
}
