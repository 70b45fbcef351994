//! Employee Dashboard

use form_gateway::endpoints;
use leptos::prelude::*;

use super::DashboardHeader;
use crate::components::{FieldDef, FieldKind, GatewayForm, TaskList};

pub(super) const CHANGE_PASSWORD_FIELDS: &[FieldDef] = &[
    FieldDef::new("current_password", "Current password", FieldKind::Password),
    FieldDef::new("new_password", "New password", FieldKind::Password),
    FieldDef::new("confirm_password", "Confirm new password", FieldKind::Password),
];

#[component]
pub fn EmployeePage() -> impl IntoView {
    view! {
        <DashboardHeader title="My Workspace" />
        <div class="container">
            <div class="row">
                <div class="col-lg-8">
                    <TaskList />
                </div>
                <div class="col-lg-4">
                    <section class="card mb-4">
                        <div class="card-header"><h5 class="mb-0">"Change Password"</h5></div>
                        <div class="card-body">
                            <GatewayForm
                                spec=endpoints::employee_change_password()
                                fields=CHANGE_PASSWORD_FIELDS
                                confirm=("new_password", "confirm_password")
                                submit_label="Change Password"
                                busy_label="Changing..."
                            />
                        </div>
                    </section>
                </div>
            </div>
        </div>
    }
}
