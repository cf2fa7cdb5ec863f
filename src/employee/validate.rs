//! Field validators
//!
//! Pure functions of the candidate value. None of them consult the store;
//! email uniqueness is a cross-record rule enforced by the store.
//!
//! Every validator takes `Option<&str>` so that "not supplied" and "blank"
//! are both reported as `Missing`. String values are trimmed before any
//! length or format check, and lengths count characters rather than bytes.

use std::sync::OnceLock;

use chrono::{Local, NaiveDate};
use regex::Regex;

use super::errors::{Field, FieldViolation, ViolationReason};

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;
pub const DEPARTMENT_MIN_CHARS: usize = 2;
pub const DEPARTMENT_MAX_CHARS: usize = 50;
pub const ROLE_MIN_CHARS: usize = 2;
pub const ROLE_MAX_CHARS: usize = 50;

/// Textual form accepted for hire dates
pub const HIRE_DATE_FORMAT: &str = "%Y-%m-%d";

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";
const HIRE_DATE_PATTERN: &str = r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

fn hire_date_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(HIRE_DATE_PATTERN).expect("hire date pattern compiles"))
}

/// Earliest accepted hire date (inclusive)
pub fn earliest_hire_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1901, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Today's date in the server's local time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Trims `value`, rejecting absent or blank input.
fn required(field: Field, value: Option<&str>) -> Result<&str, FieldViolation> {
    match value.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed),
        _ => Err(FieldViolation::missing(field)),
    }
}

fn bounded_text(
    field: Field,
    value: Option<&str>,
    min: usize,
    max: usize,
) -> Result<String, FieldViolation> {
    let trimmed = required(field, value)?;
    let len = trimmed.chars().count();

    if len < min {
        return Err(FieldViolation::new(field, ViolationReason::TooShort { min }));
    }
    if len > max {
        return Err(FieldViolation::new(field, ViolationReason::TooLong { max }));
    }

    Ok(trimmed.to_string())
}

/// Validates and normalizes an employee name.
pub fn validate_name(value: Option<&str>) -> Result<String, FieldViolation> {
    bounded_text(Field::Name, value, NAME_MIN_CHARS, NAME_MAX_CHARS)
}

/// Validates and normalizes a department name.
pub fn validate_department(value: Option<&str>) -> Result<String, FieldViolation> {
    bounded_text(
        Field::Department,
        value,
        DEPARTMENT_MIN_CHARS,
        DEPARTMENT_MAX_CHARS,
    )
}

/// Validates and normalizes a job role/title.
pub fn validate_role(value: Option<&str>) -> Result<String, FieldViolation> {
    bounded_text(Field::Role, value, ROLE_MIN_CHARS, ROLE_MAX_CHARS)
}

/// Validates an email address.
///
/// The address is trimmed but its case is preserved.
pub fn validate_email(value: Option<&str>) -> Result<String, FieldViolation> {
    let trimmed = required(Field::Email, value)?;

    if !email_regex().is_match(trimmed) {
        return Err(FieldViolation::new(
            Field::Email,
            ViolationReason::Malformed {
                expected: "a valid email address",
            },
        ));
    }

    Ok(trimmed.to_string())
}

/// Validates a hire date against the current local date.
pub fn validate_hire_date(value: Option<&str>) -> Result<NaiveDate, FieldViolation> {
    validate_hire_date_on(value, today())
}

/// Validates a hire date against an explicit `today`.
///
/// # Errors
///
/// - `Missing` when absent or blank
/// - `Malformed` when not exactly `YYYY-MM-DD` or not a real calendar date
/// - `OutOfRange` when before 1901-01-01 or after `today`
pub fn validate_hire_date_on(
    value: Option<&str>,
    today: NaiveDate,
) -> Result<NaiveDate, FieldViolation> {
    let trimmed = required(Field::HireDate, value)?;
    let malformed = || {
        FieldViolation::new(
            Field::HireDate,
            ViolationReason::Malformed {
                expected: "in YYYY-MM-DD format",
            },
        )
    };

    // chrono alone accepts unpadded months/days, so pin the shape first
    if !hire_date_regex().is_match(trimmed) {
        return Err(malformed());
    }
    let date = NaiveDate::parse_from_str(trimmed, HIRE_DATE_FORMAT).map_err(|_| malformed())?;

    let earliest = earliest_hire_date();
    if date < earliest {
        return Err(FieldViolation::new(
            Field::HireDate,
            ViolationReason::OutOfRange {
                detail: format!("must be on or after {}", earliest.format(HIRE_DATE_FORMAT)),
            },
        ));
    }
    if date > today {
        return Err(FieldViolation::new(
            Field::HireDate,
            ViolationReason::OutOfRange {
                detail: "cannot be in the future".to_string(),
            },
        ));
    }

    Ok(date)
}
