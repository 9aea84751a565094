use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::engine::EngineHandle;

#[derive(Properties, PartialEq)]
pub struct LoginModalProps {
    pub engine: EngineHandle,
    pub on_close: Callback<()>,
    pub on_success: Callback<String>,
}

#[function_component(LoginModal)]
pub fn login_modal(props: &LoginModalProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let onsubmit = {
        let username_handle = username.clone();
        let password_handle = password.clone();
        let error_handle = error.clone();
        let busy_handle = busy.clone();
        let engine = props.engine.clone();
        let on_success = props.on_success.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let username_value = (*username_handle).clone();
            let password_value = (*password_handle).clone();
            busy_handle.set(true);
            error_handle.set(None);
            let engine = engine.clone();
            let on_success = on_success.clone();
            let busy_ref = busy_handle.clone();
            let error_ref = error_handle.clone();
            let username_reset = username_handle.clone();
            let password_reset = password_handle.clone();
            spawn_local(async move {
                match engine.session.login(&username_value, &password_value).await {
                    Ok(name) => {
                        username_reset.set(String::new());
                        password_reset.set(String::new());
                        on_success.emit(name);
                    }
                    Err(message) => error_ref.set(Some(message)),
                }
                busy_ref.set(false);
            });
        })
    };

    let on_username_change = {
        let username = username.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                username.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let is_busy = *busy;
    let disable_submit = (*username).is_empty() || (*password).is_empty() || is_busy;

    html! {
        <div class="modal modal-open">
            <div class="modal-box w-full max-w-md">
                <button class="btn btn-sm btn-circle btn-ghost absolute right-2 top-2" onclick={on_close}>
                    {"✕"}
                </button>
                <form onsubmit={onsubmit}>
                    <h2 class="text-2xl font-bold">{"Teacher Login"}</h2>
                    if let Some(message) = &*error {
                        <div class="alert alert-error mt-2">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="username">
                            <span class="label-text">{"Username"}</span>
                        </label>
                        <input
                            id="username"
                            class="input input-bordered"
                            type="text"
                            required=true
                            value={(*username).clone()}
                            oninput={on_username_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{"Password"}</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Signing in..." } else { "Sign in" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
