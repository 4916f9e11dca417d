// src/utils/username.rs

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Minimum username length after trimming.
pub const USERNAME_MIN_LEN: usize = 2;
/// Maximum username length after trimming.
pub const USERNAME_MAX_LEN: usize = 20;

/// Specific admission failure reasons, checked in order; the first
/// failing rule wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsernameError {
    Empty,
    TooShort,
    TooLong,
    InvalidCharacters,
}

impl fmt::Display for UsernameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            UsernameError::Empty => "Username tidak boleh kosong",
            UsernameError::TooShort => "Username minimal 2 karakter",
            UsernameError::TooLong => "Username maksimal 20 karakter",
            UsernameError::InvalidCharacters => {
                "Username hanya boleh huruf, angka, spasi, dan underscore"
            }
        };
        write!(f, "{}", msg)
    }
}

fn username_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_ ]+$").expect("username regex is valid"))
}

/// Validates and normalizes a raw username.
///
/// Pure: no side effects, safe to call on every keystroke. Returns the
/// trimmed name on success.
pub fn validate_username(raw: &str) -> Result<String, UsernameError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(UsernameError::Empty);
    }

    let len = trimmed.chars().count();
    if len < USERNAME_MIN_LEN {
        return Err(UsernameError::TooShort);
    }
    if len > USERNAME_MAX_LEN {
        return Err(UsernameError::TooLong);
    }

    if !username_regex().is_match(trimmed) {
        return Err(UsernameError::InvalidCharacters);
    }

    Ok(trimmed.to_string())
}
