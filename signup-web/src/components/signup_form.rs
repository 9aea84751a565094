use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::engine::EngineHandle;

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    pub engine: EngineHandle,
    /// Activity names for the select, taken from the latest snapshot.
    pub activities: Vec<String>,
}

/// Enrollment form, rendered only for a signed-in teacher. The engine
/// still gates the mutation itself; hiding the form is UX, not security.
#[function_component(SignupForm)]
pub fn signup_form(props: &SignupFormProps) -> Html {
    let email = use_state(String::new);
    let activity = use_state(String::new);
    let busy = use_state(|| false);

    let onsubmit = {
        let email_handle = email.clone();
        let activity_handle = activity.clone();
        let busy_handle = busy.clone();
        let engine = props.engine.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let email_value = (*email_handle).clone();
            let activity_value = (*activity_handle).clone();
            if email_value.is_empty() || activity_value.is_empty() {
                return;
            }
            busy_handle.set(true);
            let engine = engine.clone();
            let busy_ref = busy_handle.clone();
            let email_reset = email_handle.clone();
            let activity_reset = activity_handle.clone();
            spawn_local(async move {
                // Fields keep their values on failure so a resubmit is
                // one click away.
                if engine.roster.enroll(&activity_value, &email_value).await {
                    email_reset.set(String::new());
                    activity_reset.set(String::new());
                }
                busy_ref.set(false);
            });
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_activity_change = {
        let activity = activity.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                activity.set(select.value());
            }
        })
    };

    html! {
        <div class="card bg-base-200 shadow-xl">
            <form class="card-body" onsubmit={onsubmit}>
                <h2 class="card-title">{"Sign Up a Student"}</h2>
                <div class="form-control">
                    <label class="label" for="email">
                        <span class="label-text">{"Student Email"}</span>
                    </label>
                    <input
                        id="email"
                        class="input input-bordered"
                        type="email"
                        required=true
                        value={(*email).clone()}
                        oninput={on_email_change}
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="activity">
                        <span class="label-text">{"Activity"}</span>
                    </label>
                    <select
                        id="activity"
                        class="select select-bordered"
                        required=true
                        value={(*activity).clone()}
                        onchange={on_activity_change}
                    >
                        <option value="" selected={(*activity).is_empty()}>
                            {"-- Select an activity --"}
                        </option>
                        {
                            for props.activities.iter().map(|name| html! {
                                <option
                                    key={name.clone()}
                                    value={name.clone()}
                                    selected={*activity == *name}
                                >
                                    {name.clone()}
                                </option>
                            })
                        }
                    </select>
                </div>
                <div class="card-actions justify-end mt-4">
                    <button class="btn btn-primary" type="submit" disabled={*busy}>
                        {if *busy { "Signing up..." } else { "Sign Up" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
