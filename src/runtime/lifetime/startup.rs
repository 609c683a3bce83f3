use std::sync::Arc;

use tracing::warn;

use crate::config::AppConfig;
use crate::mail::{DisabledMailer, MailSender, SmtpMailer};
use crate::storage::Storage;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub mailer: Arc<dyn MailSender>,
}

/// 创建邮件发送器
///
/// 邮件功能关闭时返回占位实现，所有发送调用直接失败并归入 skipped/failed
/// 的统计口径之外（由业务层在发送前判断）。
fn create_mailer() -> Arc<dyn MailSender> {
    let config = AppConfig::get();

    if !config.mail.enabled {
        warn!("Mail delivery is disabled, notification dispatch will be rejected");
        return Arc::new(DisabledMailer);
    }

    match SmtpMailer::from_config(&config.mail) {
        Ok(mailer) => Arc::new(mailer),
        Err(e) => {
            warn!(
                "Failed to build SMTP transport ({}), falling back to disabled mailer",
                e.message()
            );
            Arc::new(DisabledMailer)
        }
    }
}

/// 准备服务器启动的上下文
/// 包括存储、邮件传输等
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    let mailer = create_mailer();

    // 启动时做一次非致命的 SMTP 连通性检查
    if AppConfig::get().mail.enabled {
        match mailer.test_connection().await {
            Ok(true) => warn!("SMTP connection verified"),
            Ok(false) => warn!("SMTP connection test returned false"),
            Err(e) => warn!("SMTP connection test failed: {}", e.message()),
        }
    }

    StartupContext { storage, mailer }
}
