use yew::prelude::*;

use crate::components::user_dropdown::UserDropdown;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub teacher: Option<String>,
    pub on_login_click: Callback<()>,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_login = {
        let on_login_click = props.on_login_click.clone();
        Callback::from(move |_: MouseEvent| on_login_click.emit(()))
    };

    html! {
        <nav class="navbar justify-between bg-base-300">
            <span class="btn btn-ghost text-lg">{"Mergington High School Activities"}</span>
            <div class="flex items-center gap-2">
                {
                    props.teacher.as_ref().map_or_else(
                        || html! {
                            <button class="btn btn-primary btn-sm" onclick={on_login.clone()}>
                                {"Teacher Login"}
                            </button>
                        },
                        |name| html! {
                            <UserDropdown name={name.clone()} on_logout={props.on_logout.clone()} />
                        },
                    )
                }
            </div>
        </nav>
    }
}
