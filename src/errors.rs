//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_classtrack_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum ClassTrackError {
            $($variant(String),)*
        }

        impl ClassTrackError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ClassTrackError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ClassTrackError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ClassTrackError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ClassTrackError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ClassTrackError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_classtrack_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    Serialization("E006", "Serialization Error"),
    DateParse("E007", "Date Parse Error"),
    MailConfig("E008", "Mail Configuration Error"),
    MailAuthentication("E009", "Mail Authentication Error"),
    MailConnection("E010", "Mail Connection Error"),
    MailTimeout("E011", "Mail Timeout Error"),
    MailRecipient("E012", "Mail Recipient Error"),
    MailTransport("E013", "Mail Transport Error"),
}

impl ClassTrackError {
    /// 判断是否为邮件发送相关错误
    pub fn is_mail_error(&self) -> bool {
        matches!(
            self,
            ClassTrackError::MailConfig(_)
                | ClassTrackError::MailAuthentication(_)
                | ClassTrackError::MailConnection(_)
                | ClassTrackError::MailTimeout(_)
                | ClassTrackError::MailRecipient(_)
                | ClassTrackError::MailTransport(_)
        )
    }

    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ClassTrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ClassTrackError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for ClassTrackError {
    fn from(err: sea_orm::DbErr) -> Self {
        ClassTrackError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ClassTrackError {
    fn from(err: serde_json::Error) -> Self {
        ClassTrackError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for ClassTrackError {
    fn from(err: chrono::ParseError) -> Self {
        ClassTrackError::DateParse(err.to_string())
    }
}

impl From<lettre::error::Error> for ClassTrackError {
    fn from(err: lettre::error::Error) -> Self {
        ClassTrackError::MailTransport(err.to_string())
    }
}

impl From<lettre::address::AddressError> for ClassTrackError {
    fn from(err: lettre::address::AddressError) -> Self {
        ClassTrackError::MailRecipient(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClassTrackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ClassTrackError::database_config("test").code(), "E001");
        assert_eq!(ClassTrackError::validation("test").code(), "E004");
        assert_eq!(ClassTrackError::mail_authentication("test").code(), "E009");
        assert_eq!(ClassTrackError::mail_recipient("test").code(), "E012");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            ClassTrackError::mail_timeout("test").error_type(),
            "Mail Timeout Error"
        );
        assert_eq!(
            ClassTrackError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = ClassTrackError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_is_mail_error() {
        assert!(ClassTrackError::mail_connection("refused").is_mail_error());
        assert!(!ClassTrackError::database_operation("oops").is_mail_error());
    }

    #[test]
    fn test_format_simple() {
        let err = ClassTrackError::not_found("assignment 42");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("assignment 42"));
    }
}
