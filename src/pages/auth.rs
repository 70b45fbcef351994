//! Authentication Pages
//!
//! Login, signup and the OTP password-recovery flow share one card with
//! tabs. The emailed reset link lands on `ResetPasswordPage`.

use form_gateway::endpoints;
use leptos::prelude::*;

use crate::components::{FieldDef, FieldKind, GatewayForm};

const LOGIN_FIELDS: &[FieldDef] = &[
    FieldDef::new("email", "Email", FieldKind::Email),
    FieldDef::new("password", "Password", FieldKind::Password),
];

const SIGNUP_FIELDS: &[FieldDef] = &[
    FieldDef::new("username", "Username", FieldKind::Text),
    FieldDef::new("email", "Email", FieldKind::Email),
    FieldDef::new("password", "Password", FieldKind::Password),
    FieldDef::new("confirm_password", "Confirm password", FieldKind::Password),
];

const OTP_REQUEST_FIELDS: &[FieldDef] = &[FieldDef::new("email", "Email", FieldKind::Email)];

const OTP_VERIFY_FIELDS: &[FieldDef] = &[
    FieldDef::new("email", "Email", FieldKind::Email),
    FieldDef::new("otp", "One-time code", FieldKind::Text),
];

const RESET_FIELDS: &[FieldDef] = &[
    FieldDef::new("password", "New password", FieldKind::Password),
    FieldDef::new("confirm_password", "Confirm password", FieldKind::Password),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthTab {
    Login,
    Signup,
    Recover,
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let tab = RwSignal::new(AuthTab::Login);

    let tab_button = move |which: AuthTab, label: &'static str| {
        view! {
            <li class="nav-item">
                <button
                    type="button"
                    class=move || if tab.get() == which { "nav-link active" } else { "nav-link" }
                    on:click=move |_| tab.set(which)
                >
                    {label}
                </button>
            </li>
        }
    };

    view! {
        <div class="container auth-container">
            <div class="card mx-auto mt-5" style="max-width: 28rem">
                <div class="card-header">
                    <ul class="nav nav-tabs card-header-tabs">
                        {tab_button(AuthTab::Login, "Login")}
                        {tab_button(AuthTab::Signup, "Sign up")}
                        {tab_button(AuthTab::Recover, "Forgot password")}
                    </ul>
                </div>
                <div class="card-body">
                    {move || match tab.get() {
                        AuthTab::Login => view! {
                            <GatewayForm
                                spec=endpoints::login()
                                fields=LOGIN_FIELDS
                                submit_label="Login"
                                busy_label="Logging in..."
                            />
                        }
                        .into_any(),
                        AuthTab::Signup => view! {
                            <GatewayForm
                                spec=endpoints::signup()
                                fields=SIGNUP_FIELDS
                                confirm=("password", "confirm_password")
                                submit_label="Create Account"
                                busy_label="Creating..."
                            />
                        }
                        .into_any(),
                        AuthTab::Recover => view! {
                            <GatewayForm
                                spec=endpoints::send_otp()
                                fields=OTP_REQUEST_FIELDS
                                submit_label="Send Code"
                                busy_label="Sending..."
                            />
                            <hr />
                            <GatewayForm
                                spec=endpoints::verify_otp()
                                fields=OTP_VERIFY_FIELDS
                                submit_label="Verify Code"
                                busy_label="Verifying..."
                            />
                        }
                        .into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ResetPasswordPage(token: String) -> impl IntoView {
    view! {
        <div class="container auth-container">
            <div class="card mx-auto mt-5" style="max-width: 28rem">
                <div class="card-header"><h5 class="mb-0">"Reset Password"</h5></div>
                <div class="card-body">
                    <GatewayForm
                        spec=endpoints::reset_password(&token)
                        fields=RESET_FIELDS
                        confirm=("password", "confirm_password")
                        submit_label="Reset Password"
                        busy_label="Resetting..."
                    />
                </div>
            </div>
        </div>
    }
}
