use yew::prelude::*;

use crate::lead::hook::use_lead_form;
use crate::lead::model::FormType;
use crate::lead::state::{FormAction, Phase};

#[derive(Properties, PartialEq)]
pub struct LeadModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub form_type: FormType,
    pub title: String,
    #[prop_or_default]
    pub interest: String,
}

#[function_component(LeadModal)]
pub fn lead_modal(props: &LeadModalProps) -> Html {
    let form = use_lead_form(props.form_type, props.interest.clone());

    // Each opening starts from a clean outcome and the opener's interest; name and
    // phone survive. The modal is shared, so a message typed for one form type
    // must not ride along with the next.
    {
        let dispatcher = form.state.dispatcher();
        use_effect_with_deps(
            move |(open, _, interest): &(bool, FormType, String)| {
                if *open {
                    dispatcher.dispatch(FormAction::Reopen(interest.clone()));
                }
                || ()
            },
            (props.open, props.form_type, props.interest.clone()),
        );
    }

    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let state = &*form.state;
    let submitting = state.phase == Phase::Submitting;

    html! {
        <div class="modal-root">
            <div class="modal-backdrop" onclick={close.clone()} />
            <div class="modal-card">
                <button class="modal-close" onclick={close.clone()} aria-label="Закрыть">{"✕"}</button>
                if state.phase == Phase::Succeeded {
                    <div class="modal-done">
                        <div class="done-icon">{"✓"}</div>
                        <h3>{"Заявка принята!"}</h3>
                        <p>{"Мы перезвоним вам в ближайшее время."}</p>
                        <button class="accent-button" onclick={close}>{"Закрыть"}</button>
                    </div>
                } else {
                    <form class="modal-form" onsubmit={form.on_submit.clone()}>
                        <div>
                            <h3>{ &props.title }</h3>
                            <p class="muted">{"Мы перезвоним в течение 15 минут"}</p>
                        </div>

                        <label class="field">
                            <span>{"Ваше имя *"}</span>
                            <input
                                required=true
                                value={state.draft.name.clone()}
                                oninput={form.on_name.clone()}
                                placeholder="Иван Иванов"
                            />
                        </label>

                        <label class="field">
                            <span>{"Телефон *"}</span>
                            <input
                                required=true
                                type="tel"
                                value={state.draft.phone.clone()}
                                oninput={form.on_phone.clone()}
                                placeholder="+7 900 000-00-00"
                            />
                        </label>

                        if props.form_type == FormType::Lead {
                            <label class="field">
                                <span>{"Что интересует?"}</span>
                                <textarea
                                    rows="3"
                                    value={state.draft.message.clone()}
                                    oninput={form.on_message.clone()}
                                    placeholder="Например: электровелосипед для города..."
                                />
                            </label>
                        }

                        if let Some(error) = state.validation_error.as_ref().or(state.error_message.as_ref()) {
                            <p class="form-error">{ error }</p>
                        }

                        <button type="submit" class="accent-button wide" disabled={submitting}>
                            { if submitting { "Отправляю..." } else { "Отправить заявку" } }
                        </button>
                    </form>
                }
            </div>
        </div>
    }
}
