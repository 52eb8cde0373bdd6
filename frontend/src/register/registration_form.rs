use elysian_shared::{ContactMethod, Field, MAX_FREE_TEXT_CHARS};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::form::{FormErrors, FormInput, FormState, SubmitPhase};
use super::submit::{submit, GlooTransport, SubmitOutcome};
use crate::components::fields::{Checkbox, TextAreaField, TextField};
use crate::content::register as copy;

#[derive(Properties, PartialEq)]
pub struct RegistrationFormProps {
    pub on_success: Callback<()>,
}

#[function_component(RegistrationForm)]
pub fn registration_form(props: &RegistrationFormProps) -> Html {
    let state = use_state(FormState::default);
    let errors = use_state(FormErrors::default);
    let phase = use_state(|| SubmitPhase::Idle);

    let edit = {
        let state = state.clone();
        let errors = errors.clone();
        Callback::from(move |input: FormInput| {
            let mut next = (*state).clone();
            if let Some(field) = next.apply(input) {
                if errors.fields.contains_key(&field) {
                    let mut cleared = (*errors).clone();
                    cleared.clear(field);
                    errors.set(cleared);
                }
            }
            state.set(next);
        })
    };

    let onsubmit = {
        let state = state.clone();
        let errors = errors.clone();
        let phase = phase.clone();
        let on_success = props.on_success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if phase.is_busy() {
                return;
            }

            let snapshot = (*state).clone();
            let validation = snapshot.validate();
            if !validation.is_empty() {
                errors.set(FormErrors::from_fields(validation));
                return;
            }

            errors.set(FormErrors::default());
            phase.set(SubmitPhase::Submitting);

            let errors = errors.clone();
            let phase = phase.clone();
            let on_success = on_success.clone();
            spawn_local(async move {
                match submit(&snapshot, &GlooTransport::new()).await {
                    SubmitOutcome::Confirmed => {
                        phase.set(SubmitPhase::Confirmed);
                        on_success.emit(());
                    }
                    SubmitOutcome::Invalid(fields) => {
                        phase.set(SubmitPhase::Idle);
                        errors.set(FormErrors::from_fields(fields));
                    }
                    SubmitOutcome::Failed => {
                        phase.set(SubmitPhase::Failed);
                        errors.set(FormErrors::generic());
                    }
                }
            });
        })
    };

    let field_error = |field: Field| errors.message(field).map(AttrValue::from);
    let on_text = |to_input: fn(String) -> FormInput| {
        let edit = edit.clone();
        Callback::from(move |value: String| edit.emit(to_input(value)))
    };

    html! {
        <form class="registration-form" novalidate=true {onsubmit}>
            <TextField
                id="name"
                label={copy::NAME_LABEL}
                placeholder={copy::NAME_PLACEHOLDER}
                autocomplete={Some(AttrValue::from("name"))}
                value={state.name.clone()}
                on_input={on_text(FormInput::Name)}
                error={field_error(Field::Name)}
            />
            <TextField
                id="email"
                input_type="email"
                label={copy::EMAIL_LABEL}
                placeholder={copy::EMAIL_PLACEHOLDER}
                autocomplete={Some(AttrValue::from("email"))}
                value={state.email.clone()}
                on_input={on_text(FormInput::Email)}
                error={field_error(Field::Email)}
            />
            <TextField
                id="phone"
                input_type="tel"
                label={copy::PHONE_LABEL}
                placeholder={copy::PHONE_PLACEHOLDER}
                autocomplete={Some(AttrValue::from("tel"))}
                value={state.phone.clone()}
                on_input={on_text(FormInput::Phone)}
                error={field_error(Field::Phone)}
            />
            <TextAreaField
                id="hoping"
                label={copy::HOPING_LABEL}
                placeholder={copy::HOPING_PLACEHOLDER}
                value={state.hoping.clone()}
                on_input={on_text(FormInput::Hoping)}
                max_chars={MAX_FREE_TEXT_CHARS}
            />
            <TextAreaField
                id="anything"
                label={copy::ANYTHING_LABEL}
                placeholder={copy::ANYTHING_PLACEHOLDER}
                value={state.anything.clone()}
                on_input={on_text(FormInput::Anything)}
                max_chars={MAX_FREE_TEXT_CHARS}
            />

            <fieldset class="contact-methods">
                <legend>{ copy::CONTACT_LABEL }</legend>
                { for ContactMethod::ALL.iter().map(|method| {
                    let method = *method;
                    let edit = edit.clone();
                    html! {
                        <Checkbox
                            id={format!("contact-{}", method.as_str())}
                            label={method.external_label()}
                            checked={state.contact_methods.contains(&method)}
                            on_change={Callback::from(move |_| edit.emit(FormInput::ToggleContact(method)))}
                        />
                    }
                }) }
            </fieldset>

            <Checkbox
                id="consent"
                label={copy::CONSENT_LABEL}
                checked={state.consent}
                on_change={{
                    let edit = edit.clone();
                    Callback::from(move |checked| edit.emit(FormInput::Consent(checked)))
                }}
                error={field_error(Field::Consent)}
            />

            if let Some(message) = errors.form {
                <p class="form-error" role="alert">{ message }</p>
            }

            <button type="submit" class="button button-large" disabled={phase.is_busy()}>
                { phase.button_label() }
            </button>
        </form>
    }
}
