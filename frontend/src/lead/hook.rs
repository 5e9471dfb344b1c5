use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::lead::client::{GlooTransport, LeadClient};
use crate::lead::error::SubmitError;
use crate::lead::model::{FormType, LeadDraft};
use crate::lead::state::{FormAction, LeadFormState};

pub struct LeadFormHandle {
    pub state: UseReducerHandle<LeadFormState>,
    pub on_name: Callback<InputEvent>,
    pub on_phone: Callback<InputEvent>,
    pub on_message: Callback<InputEvent>,
    pub on_submit: Callback<SubmitEvent>,
}

/// Wires a form to the lead endpoint from the surrounding `SiteConfig`.
///
/// `interest` pre-fills the message and follows prop changes.
#[hook]
pub fn use_lead_form(form_type: FormType, interest: String) -> LeadFormHandle {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let initial = interest.clone();
    let state = use_reducer_eq(move || LeadFormState::with_draft(LeadDraft::with_message(initial)));
    // Render snapshots of `state` can be stale; this flag is the real guard.
    let in_flight = use_mut_ref(|| false);

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |interest: &String| {
                dispatcher.dispatch(FormAction::Prefill(interest.clone()));
                || ()
            },
            interest,
        );
    }

    let on_name = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(FormAction::SetName(input.value()));
        })
    };

    let on_phone = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(FormAction::SetPhone(input.value()));
        })
    };

    let on_message = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            state.dispatch(FormAction::SetMessage(input.value()));
        })
    };

    let on_submit = {
        let state = state.clone();
        let endpoint = config.lead_endpoint;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *in_flight.borrow() {
                info!("Submit ignored, request already in flight");
                return;
            }

            let submission = match state.begin(form_type) {
                Ok(submission) => submission,
                Err(SubmitError::Busy) => {
                    info!("Submit ignored in current phase");
                    return;
                }
                Err(err) => {
                    state.dispatch(FormAction::Invalid(err));
                    return;
                }
            };

            *in_flight.borrow_mut() = true;
            state.dispatch(FormAction::Submit);

            let dispatcher = state.dispatcher();
            let in_flight = in_flight.clone();
            let client = LeadClient::new(GlooTransport::new(endpoint.clone()));
            spawn_local(async move {
                let outcome = client.submit(&submission).await;
                *in_flight.borrow_mut() = false;
                dispatcher.dispatch(FormAction::Resolved(outcome));
            });
        })
    };

    LeadFormHandle {
        state,
        on_name,
        on_phone,
        on_message,
        on_submit,
    }
}
