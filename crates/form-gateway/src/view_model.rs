//! Form View-Model
//!
//! The state a form renders from: values, per-field errors, the notice line
//! and the submit control. Nothing here touches the DOM.

use crate::transport::FormPart;
use crate::validation::{confirmation_validity, FieldError, FormValues};

/// Result line shown above/below a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Success(t) | Notice::Error(t) => t,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

/// Submit button: disabled with a busy label while a request is in flight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    idle_label: String,
    busy_label: String,
    busy: bool,
}

impl SubmitControl {
    pub fn new(idle_label: &str, busy_label: &str) -> Self {
        Self {
            idle_label: idle_label.to_string(),
            busy_label: busy_label.to_string(),
            busy: false,
        }
    }

    pub fn label(&self) -> &str {
        if self.busy {
            &self.busy_label
        } else {
            &self.idle_label
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Enter the busy state. False if already busy (double submit).
    pub fn begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    pub fn finish(&mut self) {
        self.busy = false;
    }
}

/// View/edit toggle for inline-editable cards (profile)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Viewing,
    Editing,
}

impl EditMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditMode::Editing)
    }

    pub fn toggled(self) -> Self {
        match self {
            EditMode::Viewing => EditMode::Editing,
            EditMode::Editing => EditMode::Viewing,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormViewModel {
    values: FormValues,
    attachments: Vec<FormPart>,
    errors: Vec<FieldError>,
    notice: Option<Notice>,
    pub(crate) control: SubmitControl,
}

impl FormViewModel {
    /// A form with the given (empty) fields
    pub fn new(fields: &[&str], control: SubmitControl) -> Self {
        let mut values = FormValues::new();
        for name in fields {
            values.set(name, "");
        }
        Self {
            values,
            attachments: Vec::new(),
            errors: Vec::new(),
            notice: None,
            control,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name)
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.values.set(name, value);
    }

    /// Add a file part; replaces an earlier file with the same field name
    pub fn attach(&mut self, part: FormPart) {
        self.attachments.retain(|p| p.name() != part.name());
        self.attachments.push(part);
    }

    pub fn attachments(&self) -> &[FormPart] {
        &self.attachments
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn set_errors(&mut self, errors: Vec<FieldError>) {
        self.errors = errors;
    }

    pub fn is_invalid(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// All error messages as one block
    pub fn error_text(&self, separator: &str) -> String {
        self.errors.iter().map(|e| e.message.as_str()).collect::<Vec<_>>().join(separator)
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn control(&self) -> &SubmitControl {
        &self.control
    }

    pub fn is_busy(&self) -> bool {
        self.control.is_busy()
    }

    /// Live mismatch message for a confirm input
    pub fn confirm_validity(&self, field: &str, confirm: &str) -> Option<&'static str> {
        confirmation_validity(self.values.get(field), self.values.get(confirm))
    }

    /// Drop errors and notice before a new attempt
    pub fn clear_feedback(&mut self) {
        self.errors.clear();
        self.notice = None;
    }

    /// Blank the form after a successful submission; the notice stays
    pub fn reset(&mut self) {
        self.values.clear();
        self.attachments.clear();
        self.errors.clear();
    }
}
