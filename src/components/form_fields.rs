//! Form Field Components
//!
//! Labelled inputs bound to one field of the open editor form.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::editor::FormField;

fn field_id(field: FormField) -> &'static str {
    match field {
        FormField::Title => "title",
        FormField::Description => "description",
        FormField::AssignedTo => "assignedTo",
        FormField::Priority => "priority",
        FormField::Status => "status",
        FormField::EndDate => "endDate",
    }
}

/// Current value of `field`, empty when the editor is closed
fn bind(field: FormField) -> (impl Fn() -> String + Copy + Send + Sync + 'static, impl Fn(String) + Copy + 'static) {
    let state = use_app_context().editor;
    let read = move || state.with(|s| s.form().map(|f| f.field(field).to_string()).unwrap_or_default());
    let write = move |value: String| {
        state.update(|s| {
            if let Some(form) = s.form_mut() {
                form.set_field(field, value);
            }
        })
    };
    (read, write)
}

/// Text-like input (`text`, `date`, ...)
#[component]
pub fn TextField(
    field: FormField,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let (value, set_value) = bind(field);
    let id = field_id(field);

    view! {
        <div class="field">
            <label class="label" for=id>{label}</label>
            <div class="control">
                <input
                    class="input"
                    type=input_type
                    id=id
                    name=id
                    required={field == FormField::Title}
                    prop:value=value
                    on:input=move |ev| set_value(event_target_value(&ev))
                />
            </div>
        </div>
    }
}

/// Single select over a closed option list
#[component]
pub fn SelectField(
    field: FormField,
    label: &'static str,
    options: Vec<String>,
) -> impl IntoView {
    let (value, set_value) = bind(field);
    let id = field_id(field);

    view! {
        <div class="field">
            <label class="label" for=id>{label}</label>
            <div class="control">
                <div class="select">
                    <select
                        id=id
                        name=id
                        prop:value=value
                        on:change=move |ev| set_value(event_target_value(&ev))
                    >
                        {options.into_iter().map(|option| {
                            let is_selected = {
                                let option = option.clone();
                                move || value() == option
                            };
                            let text = option.clone();
                            view! {
                                <option value=option selected=is_selected>{text}</option>
                            }
                        }).collect_view()}
                    </select>
                </div>
            </div>
        </div>
    }
}
