//! Field Validation
//!
//! Rules are plain data evaluated against the current field values at submit
//! time. Every failing rule is reported; evaluation never stops early.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Usernames may not start with an underscore, an at-sign or a digit
static USERNAME_REJECT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[_@0-9]").expect("static regex"));

/// Format of `<input type="date">` values
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const MSG_USERNAME: &str = "Username should not start with _, @ or number";
const MSG_MISMATCH: &str = "Passwords do not match";

// ========================
// Form Values
// ========================

/// Ordered name/value pairs of a form, as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormValues {
    fields: Vec<(String, String)>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.set(name, value);
        self
    }

    /// Insert or overwrite a field, keeping first-seen order
    pub fn set(&mut self, name: &str, value: &str) {
        match self.fields.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.fields.push((name.to_string(), value.to_string())),
        }
    }

    /// Value of a field; absent fields read as empty
    pub fn get(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Blank every value but keep the field list
    pub fn clear(&mut self) {
        for (_, v) in self.fields.iter_mut() {
            v.clear();
        }
    }

    /// Fields as a flat JSON object (all values are strings)
    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .fields
            .iter()
            .map(|(n, v)| (n.clone(), serde_json::Value::String(v.clone())))
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(map)
    }
}

// ========================
// Password Policy
// ========================

/// Length bounds for a password field; chosen per endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min: usize,
    pub max: Option<usize>,
}

impl PasswordPolicy {
    /// Admin employee and admin profile forms
    pub const ADMIN: PasswordPolicy = PasswordPolicy { min: 6, max: Some(12) };
    /// Signup, reset-by-token and employee change-password
    pub const ACCOUNT: PasswordPolicy = PasswordPolicy { min: 8, max: None };
    /// Leader change-password
    pub const LEADER: PasswordPolicy = PasswordPolicy { min: 6, max: None };

    pub fn accepts(&self, password: &str) -> bool {
        let len = password.chars().count();
        len >= self.min && self.max.map_or(true, |max| len <= max)
    }

    pub fn message(&self) -> String {
        match self.max {
            Some(max) => format!("Password must be {} to {} characters", self.min, max),
            None => format!("Password must be at least {} characters", self.min),
        }
    }
}

// ========================
// Rules
// ========================

/// One validation rule bound to the field(s) it reads
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// Trimmed value must be non-empty
    Required { field: String, message: String },
    /// Value must not start with `_`, `@` or a digit
    Username { field: String },
    /// Length within the policy bounds
    Password { field: String, policy: PasswordPolicy },
    /// `confirm` must equal `field`
    Confirmation { field: String, confirm: String },
    /// Optional start/end dates, not in the past, end on or after start
    DateRange {
        start: String,
        start_label: String,
        end: String,
        end_label: String,
    },
}

/// A failed rule, attached to the field that should be highlighted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Outcome of running a validator over a form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }

    /// All messages in one string, for a single alert
    pub fn joined(&self, separator: &str) -> String {
        self.messages().join(separator)
    }

    /// Whether the given field should be marked invalid
    pub fn is_invalid(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Distinct invalid field names, in first-failure order
    pub fn invalid_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for e in &self.errors {
            if !fields.contains(&e.field.as_str()) {
                fields.push(&e.field);
            }
        }
        fields
    }
}

/// Live check for a confirm-password input.
///
/// Returns the custom-validity message, or `None` when the inputs agree.
pub fn confirmation_validity(password: &str, confirm: &str) -> Option<&'static str> {
    if password != confirm {
        Some(MSG_MISMATCH)
    } else {
        None
    }
}

/// Ordered rule set for one form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Validator {
    rules: Vec<Rule>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// `<label> is required`
    pub fn required(self, field: &str, label: &str) -> Self {
        self.required_with(field, &format!("{} is required", label))
    }

    pub fn required_with(self, field: &str, message: &str) -> Self {
        self.rule(Rule::Required {
            field: field.to_string(),
            message: message.to_string(),
        })
    }

    pub fn username(self, field: &str) -> Self {
        self.rule(Rule::Username { field: field.to_string() })
    }

    pub fn password(self, field: &str, policy: PasswordPolicy) -> Self {
        self.rule(Rule::Password {
            field: field.to_string(),
            policy,
        })
    }

    pub fn confirmation(self, field: &str, confirm: &str) -> Self {
        self.rule(Rule::Confirmation {
            field: field.to_string(),
            confirm: confirm.to_string(),
        })
    }

    pub fn date_range(self, start: &str, end: &str) -> Self {
        self.date_range_labeled(start, "Start date", end, "End date")
    }

    /// Date range whose messages name the fields, e.g. `Due date cannot be in the past`
    pub fn date_range_labeled(self, start: &str, start_label: &str, end: &str, end_label: &str) -> Self {
        self.rule(Rule::DateRange {
            start: start.to_string(),
            start_label: start_label.to_string(),
            end: end.to_string(),
            end_label: end_label.to_string(),
        })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Run every rule against `values`, with `today` as the date reference
    pub fn validate(&self, values: &FormValues, today: NaiveDate) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            check_rule(rule, values, today, &mut report.errors);
        }
        report
    }

    /// `validate` against the local calendar date
    pub fn validate_now(&self, values: &FormValues) -> ValidationReport {
        self.validate(values, chrono::Local::now().date_naive())
    }
}

fn check_rule(rule: &Rule, values: &FormValues, today: NaiveDate, errors: &mut Vec<FieldError>) {
    match rule {
        Rule::Required { field, message } => {
            if values.get(field).trim().is_empty() {
                errors.push(FieldError::new(field, message.as_str()));
            }
        }
        Rule::Username { field } => {
            let value = values.get(field);
            if !value.is_empty() && USERNAME_REJECT.is_match(value) {
                errors.push(FieldError::new(field, MSG_USERNAME));
            }
        }
        Rule::Password { field, policy } => {
            let value = values.get(field);
            if !value.is_empty() && !policy.accepts(value) {
                errors.push(FieldError::new(field, policy.message()));
            }
        }
        Rule::Confirmation { field, confirm } => {
            if let Some(msg) = confirmation_validity(values.get(field), values.get(confirm)) {
                errors.push(FieldError::new(confirm, msg));
            }
        }
        Rule::DateRange {
            start,
            start_label,
            end,
            end_label,
        } => check_dates((start, start_label), (end, end_label), values, today, errors),
    }
}

fn check_dates(
    (start, start_label): (&str, &str),
    (end, end_label): (&str, &str),
    values: &FormValues,
    today: NaiveDate,
    errors: &mut Vec<FieldError>,
) {
    let start_date = parse_date(start, start_label, values, errors);
    let end_date = parse_date(end, end_label, values, errors);

    if let Some(Some(s)) = start_date {
        if s < today {
            errors.push(FieldError::new(start, format!("{} cannot be in the past", start_label)));
        }
    }
    if let Some(Some(e)) = end_date {
        if e < today {
            errors.push(FieldError::new(end, format!("{} cannot be in the past", end_label)));
        }
    }
    if let (Some(Some(s)), Some(Some(e))) = (start_date, end_date) {
        if e < s {
            errors.push(FieldError::new(
                end,
                format!("{} must be on or after the {}", end_label, start_label.to_lowercase()),
            ));
        }
    }
}

/// `None` = empty field, `Some(None)` = unparsable (already reported)
fn parse_date(field: &str, label: &str, values: &FormValues, errors: &mut Vec<FieldError>) -> Option<Option<NaiveDate>> {
    let raw = values.get(field).trim();
    if raw.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => Some(Some(date)),
        Err(_) => {
            errors.push(FieldError::new(field, format!("{} is not a valid date", label)));
            Some(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    fn ymd(date: NaiveDate) -> String {
        date.format(DATE_FORMAT).to_string()
    }

    fn dates(start: &str, end: &str) -> ValidationReport {
        let values = FormValues::new().with("start_date", start).with("end_date", end);
        Validator::new().date_range("start_date", "end_date").validate(&values, today())
    }

    #[test]
    fn test_required_blank_and_whitespace_fail() {
        let v = Validator::new().required("username", "Username").required("email", "Email");
        let values = FormValues::new().with("username", "   ").with("email", "");
        let report = v.validate(&values, today());
        assert_eq!(report.messages(), vec!["Username is required", "Email is required"]);
        assert_eq!(report.invalid_fields(), vec!["username", "email"]);
    }

    #[test]
    fn test_missing_field_counts_as_blank() {
        let report = Validator::new().required("name", "Name").validate(&FormValues::new(), today());
        assert!(report.is_invalid("name"));
    }

    #[test]
    fn test_username_prefix_rule() {
        let v = Validator::new().username("username");
        for bad in ["_alice", "@bob", "7eleven", "0"] {
            let report = v.validate(&FormValues::new().with("username", bad), today());
            assert_eq!(report.messages(), vec![MSG_USERNAME], "{bad} should be rejected");
        }
        for good in ["alice", "bob_", "a1", "Zed@corp", ""] {
            let report = v.validate(&FormValues::new().with("username", good), today());
            assert!(report.is_ok(), "{good} should pass");
        }
    }

    #[test]
    fn test_password_policies_stay_distinct() {
        assert!(PasswordPolicy::ADMIN.accepts("abcdef"));
        assert!(PasswordPolicy::ADMIN.accepts("abcdefghijkl"));
        assert!(!PasswordPolicy::ADMIN.accepts("abcdefghijklm"));
        assert!(!PasswordPolicy::ADMIN.accepts("abcde"));

        assert!(!PasswordPolicy::ACCOUNT.accepts("abcdefg"));
        assert!(PasswordPolicy::ACCOUNT.accepts("abcdefghijklmnopqrstuvwxyz"));

        assert!(PasswordPolicy::LEADER.accepts("abcdef"));
        assert_eq!(PasswordPolicy::ADMIN.message(), "Password must be 6 to 12 characters");
        assert_eq!(PasswordPolicy::ACCOUNT.message(), "Password must be at least 8 characters");
    }

    #[test]
    fn test_password_length_counts_chars() {
        // six two-byte characters
        assert!(PasswordPolicy::ADMIN.accepts("éééééé"));
    }

    #[test]
    fn test_mismatch_rejected_even_when_both_valid() {
        let v = Validator::new()
            .password("new_password", PasswordPolicy::ACCOUNT)
            .confirmation("new_password", "confirm_password");
        let values = FormValues::new()
            .with("new_password", "correct-horse")
            .with("confirm_password", "correct-horsf");
        let report = v.validate(&values, today());
        assert_eq!(report.messages(), vec![MSG_MISMATCH]);
        assert!(report.is_invalid("confirm_password"));
    }

    #[test]
    fn test_live_confirmation_validity() {
        assert_eq!(confirmation_validity("abc", "ab"), Some(MSG_MISMATCH));
        assert_eq!(confirmation_validity("abc", "abc"), None);
    }

    #[test]
    fn test_errors_are_collected_together() {
        let v = Validator::new()
            .required("email", "Email")
            .username("username")
            .password("password", PasswordPolicy::ADMIN)
            .confirmation("password", "confirm");
        let values = FormValues::new()
            .with("username", "_x")
            .with("password", "123")
            .with("confirm", "1234");
        let report = v.validate(&values, today());
        assert_eq!(report.errors.len(), 4);
    }

    #[test]
    fn test_dates_both_empty_pass() {
        assert!(dates("", "").is_ok());
    }

    #[test]
    fn test_start_yesterday_rejected() {
        let report = dates(&ymd(today() - Duration::days(1)), "");
        assert_eq!(report.messages(), vec!["Start date cannot be in the past"]);
    }

    #[test]
    fn test_today_to_today_accepted() {
        assert!(dates(&ymd(today()), &ymd(today())).is_ok());
    }

    #[test]
    fn test_end_before_start_rejected() {
        let report = dates(&ymd(today() + Duration::days(1)), &ymd(today()));
        assert_eq!(report.messages(), vec!["End date must be on or after the start date"]);
        assert!(report.is_invalid("end_date"));
    }

    #[test]
    fn test_unparsable_date_reported() {
        let report = dates("15/03/2026", "");
        assert_eq!(report.messages(), vec!["Start date is not a valid date"]);
    }

    #[test]
    fn test_labeled_range_names_the_field() {
        let v = Validator::new().date_range_labeled("", "Start date", "due_date", "Due date");
        let past = FormValues::new().with("due_date", &ymd(today() - Duration::days(2)));
        let report = v.validate(&past, today());
        assert_eq!(report.messages(), vec!["Due date cannot be in the past"]);
        assert!(report.is_invalid("due_date"));

        let garbled = FormValues::new().with("due_date", "soon");
        assert_eq!(v.validate(&garbled, today()).messages(), vec!["Due date is not a valid date"]);
    }

    #[test]
    fn test_form_values_overwrite_keeps_order() {
        let mut values = FormValues::new().with("a", "1").with("b", "2");
        values.set("a", "3");
        let pairs: Vec<_> = values.iter().collect();
        assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
        values.clear();
        assert_eq!(values.get("a"), "");
        assert_eq!(values.to_json(), serde_json::json!({"a": "", "b": ""}));
    }
}
