//! Closed error-kind enumerations for account, credential and token operations
//!
//! Callers branch on these variants, never on message text. Messages carry
//! bilingual content (English and Chinese) for the presentation layer.

use thiserror::Error;

/// Authentication and account lifecycle errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid username or password | 用户名或密码错误")]
    BadCredential,

    #[error("Account not activated, please verify your email | 账号未激活，请先验证邮箱")]
    AccountInactive,

    #[error("Account banned, contact administrator | 账号已被封禁，请联系管理员")]
    AccountBanned,

    #[error("Account deleted | 账号已删除")]
    AccountDeleted,

    #[error("Account not found | 账号不存在")]
    AccountNotFound,

    #[error("Username already exists | 用户名已存在")]
    UsernameTaken,

    #[error("Email already exists | 邮箱已存在")]
    EmailTaken,

    #[error("Old password mismatch | 旧密码错误")]
    OldPasswordMismatch,

    #[error("Email does not match the address on file | 邮箱与账号绑定的地址不一致")]
    EmailMismatch,

    #[error("Registration is currently disabled | 注册功能暂时关闭")]
    RegistrationDisabled,
}

/// Session credential (JWT) errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired | 令牌已过期")]
    TokenExpired,

    #[error("Token not yet valid | 令牌尚未生效")]
    TokenNotYetValid,

    #[error("Invalid token format | 无效的令牌格式")]
    InvalidTokenFormat,

    #[error("Token signature verification failed | 令牌签名验证失败")]
    InvalidSignature,

    #[error("Token generation failed | 令牌生成失败")]
    TokenGenerationFailed,
}

/// Email verification code errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    #[error("Verification code not found | 验证码不存在")]
    NotFound,

    #[error("Verification code does not belong to this user | 验证码与用户不匹配")]
    SubjectMismatch,

    #[error("Invalid verification code | 验证码错误")]
    Mismatch,

    #[error("Verification code already used | 验证码已使用")]
    AlreadyUsed,

    #[error("Verification code expired | 验证码已过期")]
    Expired,
}

/// Password reset token errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResetTokenError {
    #[error("Invalid reset token | 无效的重置Token")]
    Invalid,

    #[error("Reset token already used | 重置Token已使用")]
    AlreadyUsed,

    #[error("Reset token expired | 重置Token已过期")]
    Expired,

    #[error("Reset token not found | 重置Token不存在")]
    NotFound,
}

/// Password policy violations
///
/// One violation per check, reported in the fixed rule order. The strength
/// score is a separate axis and is never derived from these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyViolation {
    #[error("Password must be at least {min} characters | 密码长度不能少于{min}位")]
    TooShort { min: usize },

    #[error("Password must contain an uppercase letter | 密码必须包含大写字母")]
    MissingUppercase,

    #[error("Password must contain a lowercase letter | 密码必须包含小写字母")]
    MissingLowercase,

    #[error("Password must contain a digit | 密码必须包含数字")]
    MissingDigit,

    #[error("Password must contain a special character | 密码必须包含特殊字符")]
    MissingSpecial,

    #[error("Password is too common, choose a less predictable one | 密码过于常见，请使用更复杂的密码")]
    CommonPassword,

    #[error("Password must not contain sequential characters | 密码不能包含连续的字符")]
    SequentialChars,
}
