//! Submission Gateway
//!
//! Turns a validated form into one request and reconciles the view-model from
//! the envelope. Split in three steps so a reactive UI can render the busy
//! state while the request is outstanding:
//!
//! 1. [`Gateway::prepare`] validates and marks the control busy
//! 2. [`Gateway::dispatch`] awaits the server
//! 3. [`Gateway::settle`] always releases the control, then applies the outcome

use chrono::NaiveDate;
use serde::de::DeserializeOwned;

use crate::envelope::{Envelope, EnvelopeShape};
use crate::error::{GatewayError, GatewayResult};
use crate::table::TableViewModel;
use crate::transport::{FormPart, Request, RequestBody, Transport};
use crate::validation::{ValidationReport, Validator};
use crate::view_model::{FormViewModel, Notice};

#[cfg(test)]
mod tests;

/// Shown for transport failures and malformed responses
pub const DEFAULT_NETWORK_ERROR: &str = "Network error. Please check your connection and try again.";

// ========================
// Configuration
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Json,
    Multipart,
}

/// Where a form posts and how the server answers
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub path: String,
    pub shape: EnvelopeShape,
    pub encoding: Encoding,
    /// Shown when a failure envelope carries no message
    pub failure_fallback: String,
    /// Shown when a success envelope carries no message
    pub success_fallback: String,
}

impl Endpoint {
    /// JSON endpoint answering `{"status": ...}`
    pub fn status(path: &str) -> Self {
        Self::new(path, EnvelopeShape::Status)
    }

    /// JSON endpoint answering `{"success": ...}`
    pub fn success(path: &str) -> Self {
        Self::new(path, EnvelopeShape::Success)
    }

    /// Classic form post that answers with a redirect to a page
    pub fn redirect(path: &str) -> Self {
        Self::new(path, EnvelopeShape::Redirect)
    }

    fn new(path: &str, shape: EnvelopeShape) -> Self {
        Self {
            path: path.to_string(),
            shape,
            encoding: Encoding::Json,
            failure_fallback: "Something went wrong. Please try again.".to_string(),
            success_fallback: "Saved successfully".to_string(),
        }
    }

    pub fn multipart(mut self) -> Self {
        self.encoding = Encoding::Multipart;
        self
    }

    pub fn on_failure(mut self, message: &str) -> Self {
        self.failure_fallback = message.to_string();
        self
    }

    pub fn on_success(mut self, message: &str) -> Self {
        self.success_fallback = message.to_string();
        self
    }
}

/// What the calling context wants after a success envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuccessAction {
    CloseModal(String),
    ResetForm,
    Reload,
    /// Follow the envelope's `redirect_url`
    Redirect,
}

/// The single action to perform once a submission succeeded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostSuccess {
    CloseModal(String),
    ResetForm,
    Reload,
    Redirect(String),
}

/// Everything one call site needs: rules, endpoint, success behaviour
#[derive(Debug, Clone, PartialEq)]
pub struct FormSpec {
    pub validator: Validator,
    pub endpoint: Endpoint,
    pub on_success: SuccessAction,
}

impl FormSpec {
    pub fn new(validator: Validator, endpoint: Endpoint, on_success: SuccessAction) -> Self {
        Self {
            validator,
            endpoint,
            on_success,
        }
    }
}

/// A row-level action (delete, accept, reject) and its request body
#[derive(Debug, Clone, PartialEq)]
pub struct RowAction {
    pub endpoint: Endpoint,
    pub body: RequestBody,
    /// The record survives a success (status change), so the row stays
    pub keeps_row: bool,
}

impl RowAction {
    pub fn new(endpoint: Endpoint, body: RequestBody) -> Self {
        Self {
            endpoint,
            body,
            keeps_row: false,
        }
    }

    pub fn keeping_row(mut self) -> Self {
        self.keeps_row = true;
        self
    }
}

// ========================
// Outcomes
// ========================

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A request for this form is already in flight
    Ignored,
    /// Client-side validation failed; nothing was sent
    Invalid(ValidationReport),
    Succeeded { message: String, action: PostSuccess },
    /// Server said no; message is the server's
    Declined { message: String },
    /// Transport, status or parse failure; message is the generic one
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// Row missing or already pending
    Ignored,
    Removed { message: String },
    /// Succeeded on a row that stays in the table
    Updated { message: String },
    Declined { message: String },
    Failed { message: String },
}

// ========================
// Gateway
// ========================

pub struct Gateway<T> {
    transport: T,
    network_error: String,
}

impl<T: Transport> Gateway<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            network_error: DEFAULT_NETWORK_ERROR.to_string(),
        }
    }

    /// Localized generic error text
    pub fn with_network_error(mut self, message: &str) -> Self {
        self.network_error = message.to_string();
        self
    }

    pub fn network_error(&self) -> &str {
        &self.network_error
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Validate and mark the control busy; returns the body to send.
    ///
    /// On `Err`, nothing is in flight and the control was not touched.
    pub fn prepare(&self, spec: &FormSpec, vm: &mut FormViewModel, today: NaiveDate) -> Result<RequestBody, SubmitOutcome> {
        if vm.is_busy() {
            return Err(SubmitOutcome::Ignored);
        }
        vm.clear_feedback();

        let report = spec.validator.validate(vm.values(), today);
        if !report.is_ok() {
            log::debug!("[Gateway] {} rejected: {}", spec.endpoint.path, report.joined("; "));
            vm.set_errors(report.errors.clone());
            return Err(SubmitOutcome::Invalid(report));
        }

        vm.control.begin();
        Ok(encode(spec.endpoint.encoding, vm))
    }

    /// POST the body and parse the envelope. Never panics.
    pub async fn dispatch(&self, endpoint: &Endpoint, body: RequestBody) -> GatewayResult<Envelope> {
        let response = self.transport.send(Request::post(&endpoint.path, body)).await?;
        if !response.is_success() {
            return Err(GatewayError::HttpStatus(response.status));
        }
        endpoint.shape.parse(&response.body)
    }

    /// GET a JSON document (list endpoints)
    pub async fn fetch_json<R: DeserializeOwned>(&self, path: &str) -> GatewayResult<R> {
        let response = self.transport.send(Request::get(path)).await?;
        if !response.is_success() {
            return Err(GatewayError::HttpStatus(response.status));
        }
        serde_json::from_str(&response.body).map_err(|e| GatewayError::Malformed(e.to_string()))
    }

    /// Release the control and apply the result to the view-model
    pub fn settle(&self, spec: &FormSpec, vm: &mut FormViewModel, result: GatewayResult<Envelope>) -> SubmitOutcome {
        vm.control.finish();

        match result {
            Ok(envelope) if envelope.ok => {
                let message = or_fallback(envelope.message, &spec.endpoint.success_fallback);
                vm.set_notice(Notice::Success(message.clone()));
                let action = resolve_action(&spec.on_success, envelope.redirect_url);
                if action == PostSuccess::ResetForm {
                    vm.reset();
                }
                log::info!("[Gateway] {} succeeded -> {:?}", spec.endpoint.path, action);
                SubmitOutcome::Succeeded { message, action }
            }
            Ok(envelope) => {
                let message = or_fallback(envelope.message, &spec.endpoint.failure_fallback);
                log::warn!("[Gateway] {} declined: {}", spec.endpoint.path, message);
                vm.set_notice(Notice::Error(message.clone()));
                SubmitOutcome::Declined { message }
            }
            Err(err) => {
                log::error!("[Gateway] {} failed: {}", spec.endpoint.path, err);
                let message = self.network_error.clone();
                vm.set_notice(Notice::Error(message.clone()));
                SubmitOutcome::Failed { message }
            }
        }
    }

    /// prepare + dispatch + settle, with an explicit date reference
    pub async fn submit_on(&self, spec: &FormSpec, vm: &mut FormViewModel, today: NaiveDate) -> SubmitOutcome {
        let body = match self.prepare(spec, vm, today) {
            Ok(body) => body,
            Err(outcome) => return outcome,
        };
        let result = self.dispatch(&spec.endpoint, body).await;
        self.settle(spec, vm, result)
    }

    /// prepare + dispatch + settle against the local date
    pub async fn submit(&self, spec: &FormSpec, vm: &mut FormViewModel) -> SubmitOutcome {
        self.submit_on(spec, vm, chrono::Local::now().date_naive()).await
    }

    /// Optimistic row action: mark pending, send, then remove or flag the row
    pub async fn act_on_row<R>(&self, action: RowAction, table: &mut TableViewModel<R>, key: u32) -> RowOutcome {
        if !table.begin_action(key) {
            return RowOutcome::Ignored;
        }
        let result = self.dispatch(&action.endpoint, action.body.clone()).await;
        self.settle_row(&action, table, key, result)
    }

    /// Second half of [`Gateway::act_on_row`] for callers that own the await
    pub fn settle_row<R>(&self, action: &RowAction, table: &mut TableViewModel<R>, key: u32, result: GatewayResult<Envelope>) -> RowOutcome {
        let endpoint = &action.endpoint;
        match result {
            Ok(envelope) if envelope.ok => {
                let message = or_fallback(envelope.message, &endpoint.success_fallback);
                if action.keeps_row {
                    table.complete_in_place(key);
                    RowOutcome::Updated { message }
                } else {
                    table.complete_success(key);
                    RowOutcome::Removed { message }
                }
            }
            Ok(envelope) => {
                let message = or_fallback(envelope.message, &endpoint.failure_fallback);
                table.complete_failure(key, &message);
                RowOutcome::Declined { message }
            }
            Err(err) => {
                log::error!("[Gateway] {} failed for row {}: {}", endpoint.path, key, err);
                table.complete_failure(key, &self.network_error);
                RowOutcome::Failed {
                    message: self.network_error.clone(),
                }
            }
        }
    }
}

fn encode(encoding: Encoding, vm: &FormViewModel) -> RequestBody {
    match encoding {
        Encoding::Json => RequestBody::Json(vm.values().to_json()),
        Encoding::Multipart => {
            let mut parts: Vec<FormPart> = vm.values().iter().map(|(n, v)| FormPart::text(n, v)).collect();
            parts.extend(vm.attachments().iter().cloned());
            RequestBody::Multipart(parts)
        }
    }
}

fn resolve_action(configured: &SuccessAction, redirect_url: Option<String>) -> PostSuccess {
    match configured {
        SuccessAction::CloseModal(id) => PostSuccess::CloseModal(id.clone()),
        SuccessAction::ResetForm => PostSuccess::ResetForm,
        SuccessAction::Reload => PostSuccess::Reload,
        SuccessAction::Redirect => match redirect_url.filter(|u| !u.trim().is_empty()) {
            Some(url) => PostSuccess::Redirect(url),
            None => PostSuccess::Reload,
        },
    }
}

fn or_fallback(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
