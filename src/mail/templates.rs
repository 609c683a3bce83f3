//! 邮件模板
//!
//! 每个模板同时渲染纯文本与 HTML 两份正文，发送时组装为 multipart。

use chrono::{DateTime, Utc};

/// 系统发出的几类通知邮件
#[derive(Debug, Clone)]
pub enum MailTemplate {
    /// 新作业发布通知
    AssignmentCreated {
        student_name: String,
        teacher_name: String,
        assignment_title: String,
        due_date: Option<DateTime<Utc>>,
    },
    /// 作业逾期未交提醒
    OverdueReminder {
        student_name: String,
        teacher_name: String,
        assignment_title: String,
        due_date: DateTime<Utc>,
    },
    /// 提交成功回执
    SubmissionReceived {
        student_name: String,
        assignment_title: String,
        submitted_at: DateTime<Utc>,
    },
}

impl MailTemplate {
    pub fn subject(&self) -> String {
        match self {
            MailTemplate::AssignmentCreated { assignment_title, .. } => {
                format!("新作业：{}", assignment_title)
            }
            MailTemplate::OverdueReminder { assignment_title, .. } => {
                format!("作业逾期提醒：{}", assignment_title)
            }
            MailTemplate::SubmissionReceived { assignment_title, .. } => {
                format!("提交成功：{}", assignment_title)
            }
        }
    }

    pub fn text_body(&self) -> String {
        match self {
            MailTemplate::AssignmentCreated {
                student_name,
                teacher_name,
                assignment_title,
                due_date,
            } => format!(
                "{}同学：\n\n{}老师发布了新作业《{}》，{}。\n请及时完成并提交。\n\n——{}老师",
                student_name,
                teacher_name,
                assignment_title,
                describe_due(due_date),
                teacher_name
            ),
            MailTemplate::OverdueReminder {
                student_name,
                teacher_name,
                assignment_title,
                due_date,
            } => format!(
                "{}同学：\n\n作业《{}》已于 {} 截止，系统未收到你的提交。\n请尽快补交或联系{}老师。\n\n——{}老师",
                student_name,
                assignment_title,
                format_utc(due_date),
                teacher_name,
                teacher_name
            ),
            MailTemplate::SubmissionReceived {
                student_name,
                assignment_title,
                submitted_at,
            } => format!(
                "{}同学：\n\n你对作业《{}》的提交已于 {} 收到。",
                student_name,
                assignment_title,
                format_utc(submitted_at)
            ),
        }
    }

    pub fn html_body(&self) -> String {
        let (heading, color, detail) = match self {
            MailTemplate::AssignmentCreated {
                assignment_title,
                due_date,
                ..
            } => (
                format!("新作业：{}", assignment_title),
                "#0088cc",
                format!("{}，请及时完成并提交。", describe_due(due_date)),
            ),
            MailTemplate::OverdueReminder {
                assignment_title,
                due_date,
                ..
            } => (
                format!("作业逾期：{}", assignment_title),
                "#ff0000",
                format!(
                    "该作业已于 {} 截止，系统未收到你的提交，请尽快补交或联系老师。",
                    format_utc(due_date)
                ),
            ),
            MailTemplate::SubmissionReceived {
                assignment_title,
                submitted_at,
                ..
            } => (
                format!("提交成功：{}", assignment_title),
                "#00aa55",
                format!("你的提交已于 {} 收到。", format_utc(submitted_at)),
            ),
        };
        let student_name = match self {
            MailTemplate::AssignmentCreated { student_name, .. }
            | MailTemplate::OverdueReminder { student_name, .. }
            | MailTemplate::SubmissionReceived { student_name, .. } => student_name,
        };
        // 有任课教师的通知在结尾署名
        let signature = match self {
            MailTemplate::AssignmentCreated { teacher_name, .. }
            | MailTemplate::OverdueReminder { teacher_name, .. } => {
                format!(r#"<p style="color: #888888;">——{teacher_name}老师</p>"#)
            }
            MailTemplate::SubmissionReceived { .. } => String::new(),
        };

        format!(
            r#"<div style="font-family: Arial, sans-serif;">
  <div style="border-left: 4px solid {color}; padding-left: 15px;">
    <h2 style="color: {color};">{heading}</h2>
    <p>{student_name}同学：</p>
    <p>{detail}</p>
    {signature}
  </div>
</div>"#
        )
    }
}

fn format_utc(time: &DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M UTC").to_string()
}

fn describe_due(due_date: &Option<DateTime<Utc>>) -> String {
    match due_date {
        Some(t) => format!("截止时间 {}", format_utc(t)),
        None => "未设置截止时间".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_overdue_template_mentions_title_and_due() {
        let tpl = MailTemplate::OverdueReminder {
            student_name: "张三".to_string(),
            teacher_name: "王".to_string(),
            assignment_title: "第 3 章习题".to_string(),
            due_date: Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap(),
        };
        assert_eq!(tpl.subject(), "作业逾期提醒：第 3 章习题");
        assert!(tpl.text_body().contains("2026-08-30 12:00 UTC"));
        assert!(tpl.html_body().contains("第 3 章习题"));
        assert!(tpl.html_body().contains("张三"));
    }

    // 新作业与逾期提醒两类通知必须带上任课教师署名
    #[test]
    fn test_teacher_name_appears_in_both_bodies() {
        let created = MailTemplate::AssignmentCreated {
            student_name: "张三".to_string(),
            teacher_name: "王".to_string(),
            assignment_title: "周测".to_string(),
            due_date: None,
        };
        let overdue = MailTemplate::OverdueReminder {
            student_name: "张三".to_string(),
            teacher_name: "王".to_string(),
            assignment_title: "周测".to_string(),
            due_date: Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap(),
        };
        for tpl in [created, overdue] {
            assert!(tpl.text_body().contains("王老师"));
            assert!(tpl.html_body().contains("——王老师"));
        }
    }

    #[test]
    fn test_each_template_has_both_bodies() {
        let now = Utc::now();
        let templates = [
            MailTemplate::AssignmentCreated {
                student_name: "李四".to_string(),
                teacher_name: "赵".to_string(),
                assignment_title: "期中项目".to_string(),
                due_date: Some(now),
            },
            MailTemplate::SubmissionReceived {
                student_name: "李四".to_string(),
                assignment_title: "期中项目".to_string(),
                submitted_at: now,
            },
        ];
        for tpl in templates {
            assert!(!tpl.text_body().is_empty());
            assert!(tpl.html_body().starts_with("<div"));
        }
    }
}
