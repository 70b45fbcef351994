//! Gateway Form Component
//!
//! Renders a field list bound to a `FormViewModel` and submits it through
//! the gateway: validation errors, busy button, result notice, then the
//! post-success action once the notice has been shown.

use form_gateway::{FormPart, FormSpec, FormValues, FormViewModel, SubmitControl, SubmitOutcome};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::browser;
use crate::config::use_config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Date,
    TextArea,
    /// `(value, label)` options
    Select(&'static [(&'static str, &'static str)]),
    /// Options supplied at runtime through the `choices` prop
    Choices,
    /// Sent as a multipart file part
    File,
    /// Carried in the body but not shown (ids the server needs back)
    Hidden,
}

impl FieldKind {
    fn input_type(self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Password => "password",
            FieldKind::Date => "date",
            FieldKind::File => "file",
            FieldKind::Hidden => "hidden",
            _ => "text",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldDef {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind }
    }
}

/// Form bound to one endpoint
///
/// # Arguments
/// * `spec` - Rules, endpoint and post-success action
/// * `fields` - Inputs in display order
/// * `initial` - Pre-filled values (edit modals)
/// * `confirm` - `(password, confirm)` pair checked live while typing
/// * `choices` - `(value, label)` options for `FieldKind::Choices` fields
/// * `on_success` - Receives the submitted values after the follow-up ran
#[component]
pub fn GatewayForm(
    spec: FormSpec,
    fields: &'static [FieldDef],
    #[prop(into)] submit_label: String,
    #[prop(into)] busy_label: String,
    #[prop(optional)] initial: Option<FormValues>,
    #[prop(optional)] confirm: Option<(&'static str, &'static str)>,
    #[prop(optional)] choices: Vec<(String, String)>,
    #[prop(optional, into)] on_success: Option<Callback<FormValues>>,
) -> impl IntoView {
    let config = StoredValue::new(use_config());
    let control = SubmitControl::new(&submit_label, &busy_label);
    let vm = RwSignal::new(form_model(fields, initial.as_ref(), control));
    let spec = StoredValue::new(spec);
    let choices = StoredValue::new(choices);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let config = config.get_value();
        let gateway = config.gateway();
        let today = chrono::Local::now().date_naive();

        let prepared = vm.try_update(|vm| spec.with_value(|spec| gateway.prepare(spec, vm, today)));
        let body = match prepared {
            Some(Ok(body)) => body,
            Some(Err(SubmitOutcome::Invalid(report))) => {
                log::debug!("[Form] invalid: {}", report.joined("; "));
                return;
            }
            _ => return,
        };
        let submitted = vm.with_untracked(|vm| vm.values().clone());
        let endpoint = spec.with_value(|spec| spec.endpoint.clone());

        spawn_local(async move {
            let result = gateway.dispatch(&endpoint, body).await;
            let outcome = vm.try_update(|vm| spec.with_value(|spec| gateway.settle(spec, vm, result)));
            let Some(SubmitOutcome::Succeeded { action, .. }) = outcome else {
                return;
            };
            browser::notice_delay(config.notice_ms).await;
            if action != form_gateway::PostSuccess::ResetForm {
                vm.try_update(|vm| vm.dismiss_notice());
            }
            browser::perform(&action);
            if let Some(on_success) = on_success {
                on_success.run(submitted);
            }
        });
    };

    view! {
        <form class="gateway-form" novalidate=true on:submit=on_submit>
            <Show when=move || vm.with(|vm| !vm.errors().is_empty())>
                <div class="alert alert-danger" role="alert">
                    <ul class="mb-0">
                        {move || vm.with(|vm| {
                            vm.errors()
                                .iter()
                                .map(|e| view! { <li>{e.message.clone()}</li> })
                                .collect_view()
                        })}
                    </ul>
                </div>
            </Show>

            {fields.iter().map(|def| field_view(*def, vm, confirm, choices)).collect_view()}

            {move || vm.with(|vm| vm.notice().cloned()).map(|notice| {
                let class = if notice.is_error() { "alert alert-danger" } else { "alert alert-success" };
                view! { <div class=class role="alert">{notice.text().to_string()}</div> }
            })}

            <button
                type="submit"
                class="btn btn-primary"
                disabled=move || vm.with(|vm| vm.is_busy())
            >
                {move || vm.with(|vm| vm.control().label().to_string())}
            </button>
        </form>
    }
}

/// View-model holding one value per non-file field, pre-filled from `initial`
pub fn form_model(fields: &[FieldDef], initial: Option<&FormValues>, control: SubmitControl) -> FormViewModel {
    let names: Vec<&str> = fields
        .iter()
        .filter(|f| f.kind != FieldKind::File)
        .map(|f| f.name)
        .collect();
    let mut vm = FormViewModel::new(&names, control);
    if let Some(initial) = initial {
        for (name, value) in initial.iter() {
            vm.set(name, value);
        }
    }
    vm
}

fn field_view(
    def: FieldDef,
    vm: RwSignal<FormViewModel>,
    confirm: Option<(&'static str, &'static str)>,
    choices: StoredValue<Vec<(String, String)>>,
) -> AnyView {
    let name = def.name;
    let class = move || {
        if vm.with(|vm| vm.is_invalid(name)) {
            "form-control is-invalid"
        } else {
            "form-control"
        }
    };
    let value = move || vm.with(|vm| vm.value(name).to_string());

    if def.kind == FieldKind::Hidden {
        return view! { <input type="hidden" id=name name=name prop:value=value /> }.into_any();
    }

    let input = match def.kind {
        FieldKind::TextArea => view! {
            <textarea id=name name=name class=class rows="3" prop:value=value on:input=move |ev| vm.update(|vm| vm.set(name, &event_target_value(&ev))) />
        }
        .into_any(),
        FieldKind::Select(options) => view! {
            <select id=name name=name class=class prop:value=value on:change=move |ev| vm.update(|vm| vm.set(name, &event_target_value(&ev)))>
                <option value="">"Select..."</option>
                {options.iter().map(|(value, label)| view! {
                    <option value=*value>{*label}</option>
                }).collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::Choices => view! {
            <select id=name name=name class=class prop:value=value on:change=move |ev| vm.update(|vm| vm.set(name, &event_target_value(&ev)))>
                <option value="">"Select..."</option>
                {choices.get_value().into_iter().map(|(value, label)| view! {
                    <option value=value>{label}</option>
                }).collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::File => view! {
            <input
                type="file"
                id=name
                name=name
                class="form-control"
                on:change=move |ev| attach_file(vm, name, ev)
            />
        }
        .into_any(),
        kind => view! {
            <input
                type=kind.input_type()
                id=name
                name=name
                class=class
                prop:value=value
                on:input=move |ev| vm.update(|vm| vm.set(name, &event_target_value(&ev)))
            />
        }
        .into_any(),
    };

    // live mismatch hint under the confirm input
    let hint = confirm
        .filter(|(_, confirm_field)| *confirm_field == name)
        .map(|(field, confirm_field)| {
            view! {
                <div class="form-text text-danger">
                    {move || vm.with(|vm| vm.confirm_validity(field, confirm_field).unwrap_or_default())}
                </div>
            }
        });

    view! {
        <div class="mb-3">
            <label class="form-label" for=name>{def.label}</label>
            {input}
            {hint}
        </div>
    }
    .into_any()
}

/// Read the selected file and keep it as a multipart part
fn attach_file(vm: RwSignal<FormViewModel>, name: &'static str, ev: web_sys::Event) {
    let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
        return;
    };
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return;
    };
    spawn_local(async move {
        match JsFuture::from(file.array_buffer()).await {
            Ok(buffer) => {
                let part = FormPart::File {
                    name: name.to_string(),
                    file_name: file.name(),
                    mime: file.type_(),
                    bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
                };
                vm.try_update(|vm| vm.attach(part));
            }
            Err(e) => log::warn!("[Form] could not read {}: {:?}", file.name(), e),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[FieldDef] = &[
        FieldDef::new("title", "Title", FieldKind::Text),
        FieldDef::new("profile_pic", "Picture", FieldKind::File),
        FieldDef::new("project_id", "", FieldKind::Hidden),
    ];

    #[test]
    fn test_form_model_skips_files_and_keeps_hidden() {
        let vm = form_model(FIELDS, None, SubmitControl::new("Save", "Saving..."));
        let names: Vec<&str> = vm.values().iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["title", "project_id"]);
    }

    #[test]
    fn test_form_model_prefills_initial_values() {
        let initial = FormValues::new().with("project_id", "7");
        let vm = form_model(FIELDS, Some(&initial), SubmitControl::new("Save", "Saving..."));
        assert_eq!(vm.value("project_id"), "7");
        assert_eq!(vm.value("title"), "");
    }
}
