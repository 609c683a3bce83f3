pub mod ranking;
pub mod series;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::charts::requests::ChartParams;
use crate::storage::Storage;

pub struct ChartService {
    storage: Option<Arc<dyn Storage>>,
}

impl ChartService {
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

    // 班级做题曲线
    pub async fn class_chart(
        &self,
        req: &HttpRequest,
        class_id: i64,
        params: ChartParams,
    ) -> ActixResult<HttpResponse> {
        series::class_chart(self, req, class_id, params).await
    }

    // 班级排行榜
    pub async fn class_ranking(
        &self,
        req: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        ranking::class_ranking(self, req, class_id).await
    }
}
