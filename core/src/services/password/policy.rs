//! Password strength policy: verdict, score and level.
//!
//! The verdict and the score are independent axes: a password can fail the
//! verdict yet still receive a nonzero score, which UI strength meters use.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use qy_shared::config::security::PasswordRuleConfig;

use crate::errors::PolicyViolation;

/// Fixed denylist of common passwords, matched case-insensitively and exactly
static COMMON_PASSWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "password",
        "password123",
        "123456",
        "12345678",
        "123456789",
        "qwerty",
        "abc123",
        "admin",
        "admin123",
        "root",
        "letmein",
        "welcome",
        "monkey",
        "dragon",
        "111111",
        "666666",
        "888888",
        "iloveyou",
        "sunshine",
        "princess",
        "football",
    ]
    .into_iter()
    .collect()
});

/// Stateless password strength evaluator
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    config: PasswordRuleConfig,
}

impl PasswordPolicy {
    /// Create a policy with the default rules
    pub fn new() -> Self {
        Self {
            config: PasswordRuleConfig::default(),
        }
    }

    /// Create a policy with explicit rules
    pub fn with_rules(config: PasswordRuleConfig) -> Self {
        Self { config }
    }

    /// Validate a password against the rule set
    ///
    /// Rules are applied in a fixed order and the first failure wins, so the
    /// reported violation is deterministic for any given password.
    pub fn validate_strength(&self, password: &str) -> Result<(), PolicyViolation> {
        if password.len() < self.config.min_length {
            return Err(PolicyViolation::TooShort {
                min: self.config.min_length,
            });
        }
        if self.config.require_uppercase && !password.chars().any(|c| c.is_uppercase()) {
            return Err(PolicyViolation::MissingUppercase);
        }
        if self.config.require_lowercase && !password.chars().any(|c| c.is_lowercase()) {
            return Err(PolicyViolation::MissingLowercase);
        }
        if self.config.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(PolicyViolation::MissingDigit);
        }
        if self.config.require_special && !password.chars().any(is_special_char) {
            return Err(PolicyViolation::MissingSpecial);
        }
        if self.is_common_password(password) {
            return Err(PolicyViolation::CommonPassword);
        }
        if has_sequential_chars(password) {
            return Err(PolicyViolation::SequentialChars);
        }
        Ok(())
    }

    /// Check the password against the common-password denylist
    pub fn is_common_password(&self, password: &str) -> bool {
        COMMON_PASSWORDS.contains(password.to_lowercase().as_str())
    }

    /// Additive strength score in [0, 100], independent of the verdict
    ///
    /// +10 for each length milestone (8/12/16), +15 for each present
    /// character class, -30 for a denylist hit, -20 for a sequential run.
    pub fn strength_score(&self, password: &str) -> u8 {
        let mut score: i32 = 0;

        let len = password.len();
        if len >= 8 {
            score += 10;
        }
        if len >= 12 {
            score += 10;
        }
        if len >= 16 {
            score += 10;
        }

        if password.chars().any(|c| c.is_uppercase()) {
            score += 15;
        }
        if password.chars().any(|c| c.is_lowercase()) {
            score += 15;
        }
        if password.chars().any(|c| c.is_ascii_digit()) {
            score += 15;
        }
        if password.chars().any(is_special_char) {
            score += 15;
        }

        if self.is_common_password(password) {
            score -= 30;
        }
        if has_sequential_chars(password) {
            score -= 20;
        }

        score.clamp(0, 100) as u8
    }

    /// Qualitative strength level over the score
    pub fn strength_level(&self, password: &str) -> &'static str {
        match self.strength_score(password) {
            80..=u8::MAX => "强",
            60..=79 => "中等",
            40..=59 => "一般",
            _ => "弱",
        }
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::new()
    }
}

fn is_special_char(c: char) -> bool {
    c.is_ascii_punctuation()
}

/// Detect 3+ ascending sequential characters in the digit or letter alphabet
///
/// Case-insensitive for letters; descending runs are not flagged.
fn has_sequential_chars(password: &str) -> bool {
    let chars: Vec<char> = password.to_lowercase().chars().collect();
    chars.windows(3).any(|w| {
        let (a, b, c) = (w[0], w[1], w[2]);
        let all_digits = a.is_ascii_digit() && b.is_ascii_digit() && c.is_ascii_digit();
        let all_letters =
            a.is_ascii_lowercase() && b.is_ascii_lowercase() && c.is_ascii_lowercase();
        if !all_digits && !all_letters {
            return false;
        }
        (b as u32) == (a as u32) + 1 && (c as u32) == (b as u32) + 1
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let policy = PasswordPolicy::new();
        assert_eq!(policy.config.min_length, 8);
        assert!(policy.config.require_uppercase);
        assert!(policy.config.require_lowercase);
        assert!(policy.config.require_digit);
        assert!(!policy.config.require_special);
    }

    #[test]
    fn test_validate_strength_success() {
        let policy = PasswordPolicy::new();
        for password in ["StrongP@ssw0rd", "Test482!@#", "MyVeryStrongPassword482", "T3st9XzV"] {
            assert!(
                policy.validate_strength(password).is_ok(),
                "{} should pass",
                password
            );
        }
    }

    #[test]
    fn test_validate_strength_single_cause_in_rule_order() {
        let policy = PasswordPolicy::new();
        let cases = [
            ("", PolicyViolation::TooShort { min: 8 }),
            ("Abc1234", PolicyViolation::TooShort { min: 8 }),
            ("lowercase123", PolicyViolation::MissingUppercase),
            ("12345678", PolicyViolation::MissingUppercase),
            ("UPPERCASE123", PolicyViolation::MissingLowercase),
            ("NoDigitsHere", PolicyViolation::MissingDigit),
            ("Password123", PolicyViolation::CommonPassword),
            ("Admin123", PolicyViolation::CommonPassword),
            ("Abc12345", PolicyViolation::SequentialChars),
            ("Qwerty123", PolicyViolation::SequentialChars),
            ("Abcdefg1", PolicyViolation::SequentialChars),
            ("AbC12345", PolicyViolation::SequentialChars),
        ];
        for (password, expected) in cases {
            assert_eq!(
                policy.validate_strength(password).unwrap_err(),
                expected,
                "password: {}",
                password
            );
        }
    }

    #[test]
    fn test_validate_strength_edge_inputs() {
        let policy = PasswordPolicy::new();
        // special characters and spaces are allowed, just not required
        assert!(policy.validate_strength("Test9!@#$%^&*()_+").is_ok());
        assert!(policy.validate_strength("Test 482 ACF").is_ok());
        // multibyte characters count by byte length
        assert!(policy.validate_strength("Test482测试").is_ok());
        // descending runs are not sequential
        assert!(policy.validate_strength("Xzy32145").is_ok());
    }

    #[test]
    fn test_require_special_rule() {
        let policy = PasswordPolicy::with_rules(PasswordRuleConfig {
            require_special: true,
            ..Default::default()
        });
        assert_eq!(
            policy.validate_strength("Abx1357Q").unwrap_err(),
            PolicyViolation::MissingSpecial
        );
        assert!(policy.validate_strength("Abx1357Q!").is_ok());
    }

    #[test]
    fn test_is_common_password_case_insensitive() {
        let policy = PasswordPolicy::new();
        assert!(policy.is_common_password("password"));
        assert!(policy.is_common_password("Password"));
        assert!(policy.is_common_password("PASSWORD"));
        assert!(policy.is_common_password("password123"));
        assert!(policy.is_common_password("admin123"));
        assert!(!policy.is_common_password("MyUniquePassword123"));
        assert!(!policy.is_common_password(""));
    }

    #[test]
    fn test_strength_score_length_milestones() {
        let policy = PasswordPolicy::new();
        assert_eq!(policy.strength_score("AbX7mP2q"), 55);
        assert_eq!(policy.strength_score("AbX7mP2qRt9u"), 65);
        assert_eq!(policy.strength_score("AbX7mP2qRt9uKs4v"), 75);
        // length bonus caps at 16
        assert_eq!(policy.strength_score("AbX7mP2qRt9uKs4vJn6w"), 75);
    }

    #[test]
    fn test_strength_score_character_classes() {
        let policy = PasswordPolicy::new();
        assert_eq!(policy.strength_score("AZBYCXDW"), 25);
        assert_eq!(policy.strength_score("azbycxdw"), 25);
        assert_eq!(policy.strength_score("48295173"), 25);
        assert_eq!(policy.strength_score("AzByCxDw"), 40);
        assert_eq!(policy.strength_score("AzByCxD7"), 55);
        assert_eq!(policy.strength_score("AzByCx7!Q"), 70);
    }

    #[test]
    fn test_strength_score_deductions() {
        let policy = PasswordPolicy::new();
        // denylist hit and "123" run
        assert_eq!(policy.strength_score("Password123"), 5);
        // "abc" and "123" count once
        assert_eq!(policy.strength_score("Abc12345"), 35);
    }

    #[test]
    fn test_strength_score_is_clamped() {
        let policy = PasswordPolicy::new();
        assert!(policy.strength_score("VeryStrongP@ssw0rd!With!Many!Chars123456") <= 100);
        assert_eq!(policy.strength_score("password123"), 0);
    }

    #[test]
    fn test_score_independent_of_verdict() {
        let policy = PasswordPolicy::new();
        // fails the verdict (sequential) yet still scores
        assert!(policy.validate_strength("Abc12345").is_err());
        assert_eq!(policy.strength_score("Abc12345"), 35);
    }

    #[test]
    fn test_strength_level_thresholds() {
        let policy = PasswordPolicy::new();
        let cases = [
            ("VeryStrongP@ssw0rd482!@#", "强"),
            ("MySecurePassword482!@#", "强"),
            ("MediumPass482", "中等"),
            ("MyPassword482", "中等"),
            ("Password1", "一般"),
            ("Test4821", "一般"),
            ("weak", "弱"),
            ("abc123", "弱"),
            ("a", "弱"),
        ];
        for (password, expected) in cases {
            assert_eq!(policy.strength_level(password), expected, "password: {}", password);
        }
    }

    #[test]
    fn test_has_sequential_chars() {
        let cases = [
            ("abc123def", true),
            ("abc234def", true),
            ("abc135def", true), // "abc" and "def" runs
            ("123bcd456", true),
            ("123ABC456", true),
            ("123Abc456", true),
            ("123ace456", true), // the "123" run
            ("xyz", true),
            ("abc890", true),
            ("", false),
            ("a", false),
            ("ab", false),
            ("abd", false),
            ("321", false), // descending not flagged
            ("cba", false),
            ("A1b2C3d4", false),
            ("MyPass147", false),
        ];
        for (input, expected) in cases {
            assert_eq!(has_sequential_chars(input), expected, "input: {}", input);
        }
    }
}
