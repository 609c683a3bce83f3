//! 路径参数提取器
//!
//! 对路径中的 ID 做基本校验（必须为正整数），校验失败直接返回 400，
//! 避免每个处理函数重复解析。

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, HttpResponse, error::InternalError};
use std::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

fn extract_positive_i64(req: &HttpRequest, name: &str) -> Result<i64, actix_web::Error> {
    let parsed = req
        .match_info()
        .get(name)
        .and_then(|raw| raw.parse::<i64>().ok())
        .filter(|id| *id > 0);

    match parsed {
        Some(id) => Ok(id),
        None => {
            let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                format!("路径参数 {name} 无效，必须为正整数"),
            ));
            Err(InternalError::from_response(format!("invalid path parameter: {name}"), response)
                .into())
        }
    }
}

macro_rules! define_id_extractor {
    ($(
        $name:ident($param:literal)
    ),* $(,)?) => {
        $(
            pub struct $name(pub i64);

            impl FromRequest for $name {
                type Error = actix_web::Error;
                type Future = Ready<Result<Self, Self::Error>>;

                fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                    ready(extract_positive_i64(req, $param).map($name))
                }
            }
        )*
    };
}

define_id_extractor! {
    SafeIDI64("id"),
    SafeClassIdI64("class_id"),
}
