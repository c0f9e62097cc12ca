//! Field validators
//!
//! Implements the username, email and password rules shared by the
//! registration and login flows. Rules run top to bottom and the first
//! failing rule is the one reported.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

use super::credentials::UserRecord;
use crate::error::ValidationError;

const MIN_USERNAME_LENGTH: usize = 4;
const MIN_UNIQUE_USERNAME_CHARS: usize = 2;
const MIN_PASSWORD_LENGTH: usize = 12;
const FORBIDDEN_EMAIL_SUFFIX: &str = "example.com";
const FORBIDDEN_PASSWORD_WORD: &str = "password";
const PASSWORD_SPECIAL_CHARS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', ',', '.', '?', '"', ':', '{', '}', '|', '<',
    '>',
];
const BYTE_ORDER_MARK: char = '\u{FEFF}';

static USERNAME_RE: OnceLock<Regex> = OnceLock::new();
static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn username_regex() -> &'static Regex {
    USERNAME_RE.get_or_init(|| {
        // Length and uniqueness are enforced separately.
        let pattern = "^[a-zA-Z0-9]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("username regex failed to compile: {error}"))
    })
}

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        let pattern = r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,6}$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Strips surrounding whitespace, including a byte order mark, from a form value.
pub fn trim_input(input: &str) -> &str {
    input.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

fn is_blank(input: &str) -> bool {
    trim_input(input).is_empty()
}

/// Length in UTF-16 code units, the unit browsers count form values in.
fn input_length(input: &str) -> usize {
    input.encode_utf16().count()
}

/// Validates a registration username against the format rules and the
/// usernames already registered.
pub fn validate_username(username: &str, users: &[UserRecord]) -> Result<(), ValidationError> {
    if is_blank(username) {
        return Err(ValidationError::UsernameBlank);
    }

    if input_length(username) < MIN_USERNAME_LENGTH {
        return Err(ValidationError::UsernameTooShort);
    }

    if !username_regex().is_match(username) {
        return Err(ValidationError::UsernameSpecialCharacters);
    }

    let unique: HashSet<char> = username.chars().collect();
    if unique.len() < MIN_UNIQUE_USERNAME_CHARS {
        return Err(ValidationError::UsernameNotEnoughUniqueCharacters);
    }

    let folded = username.to_lowercase();
    if users.iter().any(|user| user.username == folded) {
        return Err(ValidationError::UsernameTaken);
    }

    Ok(())
}

/// Validates an email address.
///
/// The forbidden-domain rule is a plain case-sensitive suffix test, so any
/// address ending in `example.com` is rejected, `notexample.com` included.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if is_blank(email) {
        return Err(ValidationError::EmailBlank);
    }

    if !email_regex().is_match(email) {
        return Err(ValidationError::EmailInvalidFormat);
    }

    if email.ends_with(FORBIDDEN_EMAIL_SUFFIX) {
        return Err(ValidationError::EmailForbiddenDomain);
    }

    Ok(())
}

/// Validates a registration password. `username` is the submitted username,
/// which the password may not contain.
pub fn validate_password(password: &str, username: &str) -> Result<(), ValidationError> {
    if input_length(password) < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }

    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    if !has_lower || !has_upper {
        return Err(ValidationError::PasswordMissingMixedCase);
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PasswordMissingDigit);
    }

    if !password.contains(PASSWORD_SPECIAL_CHARS) {
        return Err(ValidationError::PasswordMissingSpecialCharacter);
    }

    let folded = password.to_lowercase();
    if folded.contains(FORBIDDEN_PASSWORD_WORD) {
        return Err(ValidationError::PasswordContainsPasswordWord);
    }

    if folded.contains(&username.to_lowercase()) {
        return Err(ValidationError::PasswordContainsUsername);
    }

    Ok(())
}

/// Checks a login attempt against the record found for `username`, if any.
///
/// Unknown usernames and wrong passwords are reported separately.
pub fn validate_login(
    username: &str,
    password: &str,
    user: Option<UserRecord>,
) -> Result<UserRecord, ValidationError> {
    if is_blank(username) {
        return Err(ValidationError::UsernameBlank);
    }

    let user = user.ok_or(ValidationError::UsernameNotFound)?;

    if password.is_empty() {
        return Err(ValidationError::PasswordBlank);
    }

    if password != user.password {
        return Err(ValidationError::IncorrectPassword);
    }

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(username: &str) -> Vec<UserRecord> {
        vec![UserRecord::new(username, "someone@mail.org", "Sup3r$ecure!!")]
    }

    #[test]
    fn test_username_blank() {
        assert_eq!(validate_username("", &[]), Err(ValidationError::UsernameBlank));
        assert_eq!(
            validate_username("   ", &[]),
            Err(ValidationError::UsernameBlank)
        );
    }

    #[test]
    fn test_username_too_short_wins_over_other_rules() {
        for name in ["a", "ab", "a!", "aaa", "x_y"] {
            assert_eq!(
                validate_username(name, &[]),
                Err(ValidationError::UsernameTooShort),
                "{name}"
            );
        }
    }

    #[test]
    fn test_username_special_characters() {
        assert_eq!(
            validate_username("bob_smith", &[]),
            Err(ValidationError::UsernameSpecialCharacters)
        );
        assert_eq!(
            validate_username("bob smith", &[]),
            Err(ValidationError::UsernameSpecialCharacters)
        );
        assert_eq!(
            validate_username("böbby", &[]),
            Err(ValidationError::UsernameSpecialCharacters)
        );
    }

    #[test]
    fn test_username_needs_two_unique_characters() {
        assert_eq!(
            validate_username("aaaa", &[]),
            Err(ValidationError::UsernameNotEnoughUniqueCharacters)
        );
        assert_eq!(
            validate_username("1111111", &[]),
            Err(ValidationError::UsernameNotEnoughUniqueCharacters)
        );
        // Case differences count as distinct characters.
        assert_eq!(validate_username("aaaA", &[]), Ok(()));
    }

    #[test]
    fn test_username_taken_is_case_insensitive() {
        let users = stored("bob1");
        assert_eq!(
            validate_username("BOB1", &users),
            Err(ValidationError::UsernameTaken)
        );
        assert_eq!(
            validate_username("bob1", &users),
            Err(ValidationError::UsernameTaken)
        );
        assert_eq!(validate_username("bob2", &users), Ok(()));
    }

    #[test]
    fn test_email_blank_and_format() {
        assert_eq!(validate_email(""), Err(ValidationError::EmailBlank));
        for email in [
            "plainaddress",
            "@mail.org",
            "user@",
            "user@mail",
            "user@.org",
            "user@mail.o",
            "user@mail.abcdefg",
            "user@mail.c0m",
            "us er@mail.org",
            "user@@mail.org",
            "user@ma_il.org",
            "user+tag@mail.org",
        ] {
            assert_eq!(
                validate_email(email),
                Err(ValidationError::EmailInvalidFormat),
                "{email}"
            );
        }
    }

    #[test]
    fn test_email_accepts_common_shapes() {
        for email in [
            "a@b.com",
            "first.last@sub.domain.io",
            "under_score-dash@mail-host.museum",
            "x@y..org",
            "USER@MAIL.ORG",
        ] {
            assert_eq!(validate_email(email), Ok(()), "{email}");
        }
    }

    #[test]
    fn test_email_forbidden_suffix() {
        assert_eq!(
            validate_email("user@example.com"),
            Err(ValidationError::EmailForbiddenDomain)
        );
        assert_eq!(
            validate_email("user@notexample.com"),
            Err(ValidationError::EmailForbiddenDomain)
        );
        assert_eq!(validate_email("user@example.org"), Ok(()));
        // The suffix test is case-sensitive.
        assert_eq!(validate_email("user@EXAMPLE.COM"), Ok(()));
    }

    #[test]
    fn test_password_exactly_twelve_characters_passes() {
        assert_eq!(validate_password("Sup3r$ecure!", "alice1"), Ok(()));
        assert_eq!(
            validate_password("Sup3r$ecur!", "alice1"),
            Err(ValidationError::PasswordTooShort)
        );
    }

    #[test]
    fn test_password_missing_classes() {
        assert_eq!(
            validate_password("sup3r$ecure!", "alice1"),
            Err(ValidationError::PasswordMissingMixedCase)
        );
        assert_eq!(
            validate_password("SUP3R$ECURE!", "alice1"),
            Err(ValidationError::PasswordMissingMixedCase)
        );
        assert_eq!(
            validate_password("Super$ecure!", "alice1"),
            Err(ValidationError::PasswordMissingDigit)
        );
        assert_eq!(
            validate_password("Sup3rSecure1", "alice1"),
            Err(ValidationError::PasswordMissingSpecialCharacter)
        );
    }

    #[test]
    fn test_password_forbidden_word_and_username() {
        assert_eq!(
            validate_password("MyPassWord1!x", "alice1"),
            Err(ValidationError::PasswordContainsPasswordWord)
        );
        assert_eq!(
            validate_password("xxALICE1yy$Z", "alice1"),
            Err(ValidationError::PasswordContainsUsername)
        );
    }

    #[test]
    fn test_login_distinguishes_unknown_user_and_bad_password() {
        let alice = stored("alice1").pop();
        assert_eq!(
            validate_login("  ", "x", None),
            Err(ValidationError::UsernameBlank)
        );
        assert_eq!(
            validate_login("mallory", "Sup3r$ecure!!", None),
            Err(ValidationError::UsernameNotFound)
        );
        assert_eq!(
            validate_login("alice1", "", alice.clone()),
            Err(ValidationError::PasswordBlank)
        );
        assert_eq!(
            validate_login("alice1", "sup3r$ecure!!", alice.clone()),
            Err(ValidationError::IncorrectPassword)
        );
        let user = validate_login("ALICE1", "Sup3r$ecure!!", alice).unwrap();
        assert_eq!(user.username, "alice1");
    }

    #[test]
    fn test_lengths_count_utf16_units() {
        // Each emoji is two UTF-16 units, so this is 12 units long.
        assert_eq!(validate_password("Aa1!😀😀😀😀", "alice1"), Ok(()));
        assert_eq!(
            validate_password("Aa1!😀😀😀", "alice1"),
            Err(ValidationError::PasswordTooShort)
        );
        // Four units long, so the character rule is the one that fails.
        assert_eq!(
            validate_username("ab😀", &[]),
            Err(ValidationError::UsernameSpecialCharacters)
        );
        assert_eq!(
            validate_username("a😀", &[]),
            Err(ValidationError::UsernameTooShort)
        );
    }

    #[test]
    fn test_trim_input_strips_byte_order_mark() {
        assert_eq!(trim_input("\u{FEFF} bob1\t\u{FEFF}"), "bob1");
        assert_eq!(validate_username(trim_input("\u{FEFF}bob1"), &[]), Ok(()));
        assert_eq!(
            validate_username("\u{FEFF}\u{FEFF}", &[]),
            Err(ValidationError::UsernameBlank)
        );
    }
}
