use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

static INVITE_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-HJ-NP-Z2-9]{8}$").expect("Invalid invite code regex"));

// 邮箱格式校验
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

// 邀请码格式校验：8 位大写字母或数字（去除易混淆的 0/1/O/I）
pub fn validate_invite_code(code: &str) -> bool {
    INVITE_CODE_RE.is_match(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(validate_email("student@example.com"));
        assert!(validate_email("a.b+c@mail.example.co"));
    }

    #[test]
    fn test_invalid_email() {
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email("missing@tld"));
        assert!(!validate_email("@example.com"));
    }

    #[test]
    fn test_valid_invite_code() {
        assert!(validate_invite_code("AB23CD45"));
    }

    #[test]
    fn test_invalid_invite_code() {
        assert!(!validate_invite_code("abcd1234"));
        assert!(!validate_invite_code("AB01CD")); // 长度不足
        assert!(!validate_invite_code("AB01CD45")); // 不允许 0 和 1
        assert!(!validate_invite_code("ABOICD45")); // 不允许 O 和 I
    }
}
