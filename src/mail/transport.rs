//! SMTP 传输实现
//!
//! 启动时根据配置中的传输方式构建一次 lettre 异步传输，之后复用连接池。

use async_trait::async_trait;
use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::config::{MailConfig, TransportProfile};
use crate::errors::{ClassTrackError, Result};
use crate::mail::{MailSender, OutgoingMail};

/// 基于 lettre 的 SMTP 发送器
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// 根据邮件配置构建发送器
    ///
    /// 传输方式在配置中显式指定，不做端口探测或逐级降级。
    pub fn from_config(config: &MailConfig) -> Result<Self> {
        let mut builder = match config.profile {
            // SMTPS：连接即 TLS（通常 465 端口）
            TransportProfile::Smtps => {
                AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
                    .map_err(|e| ClassTrackError::mail_config(format!("SMTPS 配置无效: {}", e)))?
                    .port(config.port)
            }
            // STARTTLS：明文连接升级为 TLS（通常 587 端口）
            TransportProfile::Starttls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                    .map_err(|e| {
                        ClassTrackError::mail_config(format!("STARTTLS 配置无效: {}", e))
                    })?
                    .port(config.port)
            }
            // 明文：仅用于本地调试
            TransportProfile::Plain => {
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
                    .port(config.port)
            }
        };

        if let (Some(username), Some(password)) = (&config.username, &config.password)
            && !username.is_empty()
        {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        let from = Mailbox::new(config.from_name.clone(), config.from_address.parse()?);

        Ok(SmtpMailer {
            transport: builder.build(),
            from,
        })
    }
}

#[async_trait]
impl MailSender for SmtpMailer {
    async fn send(&self, mail: &OutgoingMail) -> Result<()> {
        let to = Mailbox::new(Some(mail.to_name.clone()), mail.to_address.parse()?);

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(&mail.subject)
            .multipart(MultiPart::alternative_plain_html(
                mail.text_body.clone(),
                mail.html_body.clone(),
            ))?;

        match self.transport.send(message).await {
            Ok(_) => Ok(()),
            Err(e) => {
                let err = classify_smtp_error(&e);
                tracing::error!(
                    "邮件发送失败 [{}] {}: {}",
                    err.code(),
                    mail.to_address,
                    err.message()
                );
                Err(err)
            }
        }
    }

    async fn test_connection(&self) -> Result<bool> {
        self.transport
            .test_connection()
            .await
            .map_err(|e| classify_smtp_error(&e))
    }
}

/// 把 lettre 的 SMTP 错误归类到业务错误
///
/// 归类只看服务器返回的状态码和超时标记，不解析错误文本。
fn classify_smtp_error(err: &lettre::transport::smtp::Error) -> ClassTrackError {
    if err.is_timeout() {
        return ClassTrackError::mail_timeout(err.to_string());
    }

    match err.status() {
        Some(code) => {
            let code = code.to_string();
            // 530/534/535/538 为认证类状态码
            if matches!(code.as_str(), "530" | "534" | "535" | "538") {
                ClassTrackError::mail_authentication(err.to_string())
            } else if code.starts_with("55") {
                // 550/551/553 收件人不存在或被拒收
                ClassTrackError::mail_recipient(err.to_string())
            } else {
                ClassTrackError::mail_transport(err.to_string())
            }
        }
        // 没有服务器响应：连接层故障
        None => ClassTrackError::mail_connection(err.to_string()),
    }
}
