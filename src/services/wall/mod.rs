pub mod create_comment;
pub mod create_post;
pub mod delete_post;
pub mod list_comments;
pub mod list_posts;
pub mod mute;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::wall::requests::{
    CreateWallCommentRequest, CreateWallPostRequest, MuteStudentRequest,
};
use crate::storage::Storage;

pub struct WallService {
    storage: Option<Arc<dyn Storage>>,
}

impl WallService {
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

    // 在班级墙发帖（被禁言的学生会被拒绝）
    pub async fn create_post(
        &self,
        req: &HttpRequest,
        class_id: i64,
        data: CreateWallPostRequest,
    ) -> ActixResult<HttpResponse> {
        create_post::create_post(self, req, class_id, data).await
    }

    // 列出班级墙的帖子
    pub async fn list_posts(&self, req: &HttpRequest, class_id: i64) -> ActixResult<HttpResponse> {
        list_posts::list_posts(self, req, class_id).await
    }

    // 删除帖子
    pub async fn delete_post(&self, req: &HttpRequest, post_id: i64) -> ActixResult<HttpResponse> {
        delete_post::delete_post(self, req, post_id).await
    }

    // 评论帖子（被禁言的学生会被拒绝）
    pub async fn create_comment(
        &self,
        req: &HttpRequest,
        post_id: i64,
        data: CreateWallCommentRequest,
    ) -> ActixResult<HttpResponse> {
        create_comment::create_comment(self, req, post_id, data).await
    }

    // 列出帖子的评论
    pub async fn list_comments(
        &self,
        req: &HttpRequest,
        post_id: i64,
    ) -> ActixResult<HttpResponse> {
        list_comments::list_comments(self, req, post_id).await
    }

    // 禁言学生（幂等）
    pub async fn mute_student(
        &self,
        req: &HttpRequest,
        class_id: i64,
        data: MuteStudentRequest,
    ) -> ActixResult<HttpResponse> {
        mute::mute_student(self, req, class_id, data).await
    }

    // 解除禁言（幂等）
    pub async fn unmute_student(
        &self,
        req: &HttpRequest,
        class_id: i64,
        data: MuteStudentRequest,
    ) -> ActixResult<HttpResponse> {
        mute::unmute_student(self, req, class_id, data).await
    }
}
