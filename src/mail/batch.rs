//! 批量通知循环
//!
//! 对一组学生逐个发送，单个失败只记账不中断，最终产出三路分账的结果。

use crate::mail::{MailSender, MailTemplate, OutgoingMail};
use crate::models::notifications::responses::{NotifyFailure, NotifySummary};
use crate::models::students::entities::Student;

/// 一次批量发送的分账结果
///
/// 不变量：succeeded.len() + failed.len() + skipped.len() == 收件人总数。
#[derive(Debug, Default)]
pub struct BatchResult {
    pub succeeded: Vec<i64>,
    pub failed: Vec<(i64, String)>,
    pub skipped: Vec<i64>,
}

impl BatchResult {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len() + self.skipped.len()
    }

    pub fn into_summary(self) -> NotifySummary {
        NotifySummary {
            total: self.total() as i64,
            sent: self.succeeded.len() as i64,
            failed: self.failed.len() as i64,
            skipped: self.skipped.len() as i64,
            failures: self
                .failed
                .into_iter()
                .map(|(student_id, error)| NotifyFailure { student_id, error })
                .collect(),
        }
    }
}

/// 给一组学生逐个发送通知邮件
///
/// 没有邮箱的学生直接计入 skipped；发送失败的学生计入 failed 并继续
/// 处理下一个，不向上传播错误。
pub async fn notify_recipients<F>(
    mailer: &dyn MailSender,
    students: &[Student],
    make_template: F,
) -> BatchResult
where
    F: Fn(&Student) -> MailTemplate,
{
    let mut result = BatchResult::default();

    for student in students {
        let Some(address) = student.email.as_deref().filter(|a| !a.is_empty()) else {
            tracing::debug!("学生 {} 没有邮箱，跳过通知", student.id);
            result.skipped.push(student.id);
            continue;
        };

        let template = make_template(student);
        let mail = OutgoingMail {
            to_name: student.name.clone(),
            to_address: address.to_string(),
            subject: template.subject(),
            text_body: template.text_body(),
            html_body: template.html_body(),
        };

        match mailer.send(&mail).await {
            Ok(()) => result.succeeded.push(student.id),
            Err(e) => {
                tracing::warn!("学生 {} 通知发送失败: {}", student.id, e);
                result.failed.push((student.id, e.message().to_string()));
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ClassTrackError, Result};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;

    /// 按收件地址决定成败的测试发送器
    struct MockMailer {
        fail_addresses: Vec<&'static str>,
        sent: Mutex<Vec<String>>,
    }

    impl MockMailer {
        fn new(fail_addresses: Vec<&'static str>) -> Self {
            MockMailer {
                fail_addresses,
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl MailSender for MockMailer {
        async fn send(&self, mail: &OutgoingMail) -> Result<()> {
            if self.fail_addresses.contains(&mail.to_address.as_str()) {
                return Err(ClassTrackError::mail_transport("450 mailbox busy"));
            }
            self.sent.lock().unwrap().push(mail.to_address.clone());
            Ok(())
        }

        async fn test_connection(&self) -> Result<bool> {
            Ok(true)
        }
    }

    fn student(id: i64, email: Option<&str>) -> Student {
        Student {
            id,
            class_id: Some(1),
            name: format!("学生{}", id),
            email: email.map(str::to_string),
            photo_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn template(s: &Student) -> MailTemplate {
        MailTemplate::AssignmentCreated {
            student_name: s.name.clone(),
            teacher_name: "王".to_string(),
            assignment_title: "周测".to_string(),
            due_date: Some(Utc::now()),
        }
    }

    #[tokio::test]
    async fn test_accounting_covers_every_recipient() {
        let mailer = MockMailer::new(vec!["b@example.com"]);
        let students = vec![
            student(1, Some("a@example.com")),
            student(2, Some("b@example.com")),
            student(3, None),
            student(4, Some("d@example.com")),
        ];

        let result = notify_recipients(&mailer, &students, template).await;
        assert_eq!(result.total(), students.len());
        assert_eq!(result.succeeded, vec![1, 4]);
        assert_eq!(result.failed.len(), 1);
        assert_eq!(result.failed[0].0, 2);
        assert_eq!(result.skipped, vec![3]);
    }

    #[tokio::test]
    async fn test_failure_does_not_stop_later_sends() {
        let mailer = MockMailer::new(vec!["a@example.com"]);
        let students = vec![
            student(1, Some("a@example.com")),
            student(2, Some("b@example.com")),
        ];

        let result = notify_recipients(&mailer, &students, template).await;
        // 第一个失败后第二个仍然送达
        assert_eq!(mailer.sent.lock().unwrap().as_slice(), ["b@example.com"]);
        assert_eq!(result.succeeded, vec![2]);
    }

    #[tokio::test]
    async fn test_missing_or_empty_email_is_skipped_not_failed() {
        let mailer = MockMailer::new(vec![]);
        let students = vec![student(1, None), student(2, Some(""))];

        let result = notify_recipients(&mailer, &students, template).await;
        assert_eq!(result.skipped, vec![1, 2]);
        assert!(result.failed.is_empty());
        assert!(result.succeeded.is_empty());
    }

    #[tokio::test]
    async fn test_empty_roster_yields_zero_summary() {
        let mailer = MockMailer::new(vec![]);
        let result = notify_recipients(&mailer, &[], template).await;
        let summary = result.into_summary();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.sent, 0);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.skipped, 0);
        assert!(summary.failures.is_empty());
    }

    #[tokio::test]
    async fn test_failure_detail_keeps_error_message() {
        let mailer = MockMailer::new(vec!["a@example.com"]);
        let students = vec![student(7, Some("a@example.com"))];

        let summary = notify_recipients(&mailer, &students, template)
            .await
            .into_summary();
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].student_id, 7);
        assert!(summary.failures[0].error.contains("450"));
    }
}
