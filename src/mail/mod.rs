//! 邮件发送模块
//!
//! 对外暴露 `MailSender` trait，内部由 lettre 的异步 SMTP 传输实现。
//! 发送失败不会中断批量任务，由 `batch` 模块逐个收敛结果。

pub mod batch;
pub mod templates;
pub mod transport;

use async_trait::async_trait;

use crate::errors::{ClassTrackError, Result};

pub use batch::{notify_recipients, BatchResult};
pub use templates::MailTemplate;
pub use transport::SmtpMailer;

/// 一封待发送的邮件
#[derive(Debug, Clone)]
pub struct OutgoingMail {
    pub to_name: String,
    pub to_address: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

/// 邮件发送接口
///
/// 生产环境由 [`SmtpMailer`] 实现；邮件功能关闭时由 [`DisabledMailer`]
/// 实现，所有发送调用直接失败。
#[async_trait]
pub trait MailSender: Send + Sync {
    /// 发送单封邮件
    async fn send(&self, mail: &OutgoingMail) -> Result<()>;

    /// 校验与 SMTP 服务器的连通性（启动时的非致命检查）
    async fn test_connection(&self) -> Result<bool>;
}

/// 邮件功能关闭时的占位实现
pub struct DisabledMailer;

#[async_trait]
impl MailSender for DisabledMailer {
    async fn send(&self, _mail: &OutgoingMail) -> Result<()> {
        Err(ClassTrackError::mail_config("邮件功能未启用"))
    }

    async fn test_connection(&self) -> Result<bool> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_mailer_rejects_send() {
        let mailer = DisabledMailer;
        let mail = OutgoingMail {
            to_name: "张三".to_string(),
            to_address: "zhangsan@example.com".to_string(),
            subject: "测试".to_string(),
            text_body: "测试".to_string(),
            html_body: "<p>测试</p>".to_string(),
        };
        let err = mailer.send(&mail).await.unwrap_err();
        assert!(err.is_mail_error());
        assert!(!mailer.test_connection().await.unwrap());
    }
}
