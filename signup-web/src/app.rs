use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_store;

use crate::components::{Header, LoginModal, MessageBanner, RosterList, SignupForm};
use crate::engine::{Engine, EngineHandle};
use crate::models::app_state::{AppState, RosterPhase};

/// Root component: builds the engine once, runs the startup sequence,
/// and routes user intents into the engine.
#[function_component(App)]
pub fn app() -> Html {
    let (state, dispatch) = use_store::<AppState>();
    let engine = use_memo((), {
        let dispatch = dispatch.clone();
        move |_| EngineHandle::new(Engine::new(dispatch))
    });
    let engine = (*engine).clone();
    let login_open = use_state(|| false);

    // Startup: resolve session validity, then the initial roster fetch.
    // The roster is viewable without a session; restore only decides
    // whether removal affordances and the signup form appear.
    {
        let engine = engine.clone();
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                engine.session.restore().await;
                if let Some(name) = engine.session.display_name() {
                    dispatch.reduce_mut(move |state| state.teacher = Some(name));
                }
                engine.roster.fetch_and_render().await;
            });
            || ()
        });
    }

    let on_login_click = {
        let login_open = login_open.clone();
        Callback::from(move |()| login_open.set(true))
    };

    let on_login_close = {
        let login_open = login_open.clone();
        Callback::from(move |()| login_open.set(false))
    };

    let on_login_success = {
        let engine = engine.clone();
        let dispatch = dispatch.clone();
        let login_open = login_open.clone();
        Callback::from(move |name: String| {
            dispatch.reduce_mut(move |state| state.teacher = Some(name));
            login_open.set(false);
            // Re-project so removal affordances appear without a fetch.
            engine.roster.render_current();
        })
    };

    let on_logout = {
        let engine = engine.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |()| {
            engine.session.logout();
            dispatch.reduce_mut(|state| state.teacher = None);
            engine.roster.render_current();
        })
    };

    let on_withdraw = {
        let engine = engine.clone();
        Callback::from(move |(activity, email): (String, String)| {
            let engine = engine.clone();
            spawn_local(async move {
                engine.roster.withdraw(&activity, &email).await;
            });
        })
    };

    let activity_names: Vec<String> = match &state.roster {
        RosterPhase::Ready(view) => view.iter().map(|activity| activity.name.clone()).collect(),
        RosterPhase::Loading | RosterPhase::Unavailable => Vec::new(),
    };

    html! {
        <>
            <Header
                teacher={state.teacher.clone()}
                on_login_click={on_login_click}
                on_logout={on_logout}
            />
            <main class="p-4 space-y-6 max-w-5xl mx-auto">
                <MessageBanner message={state.message.clone()} />
                if state.teacher.is_some() {
                    <SignupForm engine={engine.clone()} activities={activity_names} />
                }
                <RosterList phase={state.roster.clone()} {on_withdraw} />
            </main>
            if *login_open {
                <LoginModal
                    engine={engine}
                    on_close={on_login_close}
                    on_success={on_login_success}
                />
            }
        </>
    }
}
