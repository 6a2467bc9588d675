// =====================================================================================
// FORM VALIDATION GATEWAY - RAW INPUT -> TYPED PAYLOAD OR FIELD ERRORS
// =====================================================================================

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::{debug, warn};

use shared_models::error::ValidationErrors;
use shared_models::schedule::{DoseTimes, TimeOfDay, TimeParseError};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern compiles")
});

const MAX_EMAIL_LENGTH: usize = 254;
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A raw form submission that either validates into `Output` or reports every
/// failing field. Validation is synchronous and total.
pub trait FormSchema {
    type Output;

    /// Name used in log lines.
    const FORM_NAME: &'static str;

    fn validate(&self) -> Result<Self::Output, ValidationErrors>;
}

/// Single entry point every submission goes through before it may touch a store.
pub fn validate_form<F: FormSchema>(form: &F) -> Result<F::Output, ValidationErrors> {
    match form.validate() {
        Ok(payload) => {
            debug!("{} accepted", F::FORM_NAME);
            Ok(payload)
        }
        Err(errors) => {
            warn!("{} rejected: {}", F::FORM_NAME, errors);
            Err(errors)
        }
    }
}

/// Trims `value` and maps blank input to `None`.
pub fn normalize_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Accumulates per-field rule failures for one form.
///
/// Each rule returns the parsed value on success and `None` after recording
/// its message. Only the first failing rule per field is kept.
#[derive(Debug, Default)]
pub struct FieldRules {
    errors: ValidationErrors,
}

impl FieldRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(&mut self, field: &str, message: &str) {
        self.errors.add(field, message);
    }

    /// Non-blank after trimming.
    pub fn required(&mut self, field: &str, value: &str, message: &str) -> Option<String> {
        self.min_len(field, value, 1, message)
    }

    /// At least `min` characters after trimming.
    pub fn min_len(&mut self, field: &str, value: &str, min: usize, message: &str) -> Option<String> {
        let trimmed = value.trim();
        if trimmed.chars().count() < min {
            self.fail(field, message);
            return None;
        }
        Some(trimmed.to_string())
    }

    pub fn present<T>(&mut self, field: &str, value: Option<T>, message: &str) -> Option<T> {
        if value.is_none() {
            self.fail(field, message);
        }
        value
    }

    pub fn time_of_day(&mut self, field: &str, value: &str, message: &str) -> Option<TimeOfDay> {
        match value.parse() {
            Ok(time) => Some(time),
            Err(_) => {
                self.fail(field, message);
                None
            }
        }
    }

    /// Comma-separated time list; a missing or blank value is an empty schedule.
    pub fn dose_times(&mut self, field: &str, value: Option<&str>, message: &str) -> Option<DoseTimes> {
        match value.unwrap_or_default().parse::<DoseTimes>() {
            Ok(times) => Some(times),
            Err(TimeParseError::Duplicate(time)) => {
                self.fail(field, &format!("{} is listed more than once.", time));
                None
            }
            Err(TimeParseError::Malformed(_)) => {
                self.fail(field, message);
                None
            }
        }
    }

    pub fn email(&mut self, field: &str, value: &str, message: &str) -> Option<String> {
        let trimmed = value.trim();
        if trimmed.len() > MAX_EMAIL_LENGTH || !EMAIL_RE.is_match(trimmed) {
            self.fail(field, message);
            return None;
        }
        Some(trimmed.to_string())
    }

    /// `YYYY-MM-DD`; blank input is `Some(None)`, unparseable input is `None`.
    pub fn optional_date(
        &mut self,
        field: &str,
        value: Option<&str>,
        message: &str,
    ) -> Option<Option<NaiveDate>> {
        match normalize_optional(value) {
            None => Some(None),
            Some(raw) => match NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
                Ok(date) => Some(Some(date)),
                Err(_) => {
                    self.fail(field, message);
                    None
                }
            },
        }
    }

    /// Cross-field rule: records `message` on `field` when the two values differ.
    pub fn matches(&mut self, field: &str, value: &str, expected: &str, message: &str) {
        if value != expected {
            self.fail(field, message);
        }
    }

    /// Ends the form: any recorded failure wins, otherwise `build` assembles the payload.
    pub fn finish<T>(mut self, build: impl FnOnce() -> Option<T>) -> Result<T, ValidationErrors> {
        if !self.errors.is_empty() {
            return Err(self.errors);
        }
        match build() {
            Some(payload) => Ok(payload),
            None => {
                self.fail("form", "Form is incomplete.");
                Err(self.errors)
            }
        }
    }
}
