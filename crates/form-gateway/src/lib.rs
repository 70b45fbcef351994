//! Form Gateway
//!
//! DOM-free core of the workforce dashboards:
//! - validation: field rules evaluated at submit time
//! - envelope: the `{status|success, message}` response wrapper, or a followed redirect
//! - transport: HTTP seam (reqwest in production, scripted in tests)
//! - gateway: validate, dispatch, reconcile
//! - view_model / table: state the UI renders
//! - endpoints: per-call-site configuration
//! - storage: non-authoritative local cache

mod error;

pub mod endpoints;
pub mod envelope;
pub mod gateway;
pub mod storage;
pub mod table;
pub mod transport;
pub mod validation;
pub mod view_model;

pub use error::{GatewayError, GatewayResult};
pub use envelope::{Envelope, EnvelopeShape};
pub use gateway::{Endpoint, Encoding, FormSpec, Gateway, PostSuccess, RowAction, RowOutcome, SubmitOutcome, SuccessAction, DEFAULT_NETWORK_ERROR};
pub use storage::{KeyValueStore, MemoryStore, ProfileCache, Theme};
pub use table::{DisplayRow, RowState, RowText, TableRow, TableViewModel, NO_MATCH_MESSAGE};
pub use transport::{FormPart, HttpTransport, Method, Request, RequestBody, Response, Transport};
pub use validation::{FieldError, FormValues, PasswordPolicy, Rule, ValidationReport, Validator};
pub use view_model::{EditMode, FormViewModel, Notice, SubmitControl};
