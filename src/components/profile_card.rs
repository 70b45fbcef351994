//! Profile Card Component
//!
//! Admin profile with a Viewing/Editing toggle. The last saved values are
//! cached in local storage so the card renders before the server does.

use form_gateway::{endpoints, EditMode, FormValues, ProfileCache};
use leptos::prelude::*;

use super::gateway_form::{FieldDef, FieldKind, GatewayForm};
use crate::browser::LocalStore;

const PROFILE_FIELDS: &[FieldDef] = &[
    FieldDef::new("name", "Full name", FieldKind::Text),
    FieldDef::new("email", "Email", FieldKind::Email),
    FieldDef::new("phone", "Phone", FieldKind::Text),
    FieldDef::new("bio", "Bio", FieldKind::TextArea),
    FieldDef::new("profile_pic", "Profile picture", FieldKind::File),
];

#[component]
pub fn ProfileCard() -> impl IntoView {
    let mode = RwSignal::new(EditMode::default());
    let profile = RwSignal::new(ProfileCache::load(&LocalStore::open()).unwrap_or_default());

    let on_saved = Callback::new(move |values: FormValues| {
        profile.update(|p| {
            p.full_name = values.get("name").to_string();
            p.email = values.get("email").to_string();
            p.phone = values.get("phone").to_string();
            p.bio = values.get("bio").to_string();
            p.save(&LocalStore::open(), chrono::Utc::now());
        });
        mode.set(EditMode::Viewing);
    });

    view! {
        <section class="profile-card card mb-4">
            <div class="card-header d-flex justify-content-between align-items-center">
                <h5 class="mb-0">"My Profile"</h5>
                <button
                    type="button"
                    class="btn btn-sm btn-outline-primary"
                    on:click=move |_| mode.update(|m| *m = m.toggled())
                >
                    {move || if mode.get().is_editing() { "Cancel" } else { "Edit Profile" }}
                </button>
            </div>
            <div class="card-body">
                {move || {
                    let p = profile.get();
                    if mode.get().is_editing() {
                        let initial = FormValues::new()
                            .with("name", &p.full_name)
                            .with("email", &p.email)
                            .with("phone", &p.phone)
                            .with("bio", &p.bio);
                        view! {
                            <GatewayForm
                                spec=endpoints::admin_profile()
                                fields=PROFILE_FIELDS
                                initial=initial
                                submit_label="Save Profile"
                                busy_label="Saving..."
                                on_success=on_saved
                            />
                        }
                        .into_any()
                    } else {
                        let updated = p
                            .last_updated
                            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                            .unwrap_or_else(|| "never".to_string());
                        view! {
                            <dl class="row mb-0">
                                <dt class="col-sm-3">"Name"</dt>
                                <dd class="col-sm-9">{p.full_name}</dd>
                                <dt class="col-sm-3">"Email"</dt>
                                <dd class="col-sm-9">{p.email}</dd>
                                <dt class="col-sm-3">"Phone"</dt>
                                <dd class="col-sm-9">{p.phone}</dd>
                                <dt class="col-sm-3">"Bio"</dt>
                                <dd class="col-sm-9">{p.bio}</dd>
                            </dl>
                            <small class="text-muted">"Last updated: " {updated}</small>
                        }
                        .into_any()
                    }
                }}
            </div>
        </section>
    }
}
