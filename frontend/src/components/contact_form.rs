use yew::prelude::*;

use crate::lead::hook::use_lead_form;
use crate::lead::model::FormType;
use crate::lead::state::Phase;

/// Inline question form in the contact section. Always sent as a callback request.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form = use_lead_form(FormType::Callback, String::new());
    let state = &*form.state;

    if state.phase == Phase::Succeeded {
        return html! {
            <div class="contact-done">
                <span class="done-icon">{"✓"}</span>
                <span>{"Сообщение отправлено! Мы ответим в ближайшее время."}</span>
            </div>
        };
    }

    let submitting = state.phase == Phase::Submitting;

    html! {
        <form class="contact-form" onsubmit={form.on_submit.clone()}>
            <input
                required=true
                value={state.draft.name.clone()}
                oninput={form.on_name.clone()}
                placeholder="Ваше имя *"
            />
            <input
                required=true
                type="tel"
                value={state.draft.phone.clone()}
                oninput={form.on_phone.clone()}
                placeholder="Телефон *"
            />
            <button type="submit" class="accent-button" disabled={submitting}>
                { if submitting { "Отправляю..." } else { "Отправить" } }
            </button>
            <textarea
                class="span-all"
                rows="2"
                value={state.draft.message.clone()}
                oninput={form.on_message.clone()}
                placeholder="Ваш вопрос или сообщение"
            />
            if let Some(error) = state.validation_error.as_ref().or(state.error_message.as_ref()) {
                <p class="form-error span-all">{ error }</p>
            }
        </form>
    }
}
