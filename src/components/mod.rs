//! UI Components
//!
//! Reusable Leptos components.

mod confirm_button;
mod detail_panel;
mod employee_table;
mod gateway_form;
mod profile_card;
mod project_watch;
mod record_table;
mod review_queue;
mod row_action;
mod task_list;
mod theme_toggle;

pub use confirm_button::ConfirmButton;
pub use detail_panel::{EmployeeDetails, ProjectDetails};
pub use employee_table::{EmployeeTable, ROLES};
pub use gateway_form::{form_model, FieldDef, FieldKind, GatewayForm};
pub use profile_card::ProfileCard;
pub use project_watch::{RecentProjects, RiskProjects};
pub use record_table::{Record, RecordTable};
pub use review_queue::{ClosedProjects, ReviewKind, ReviewQueue};
pub use task_list::TaskList;
pub use theme_toggle::ThemeToggle;
