use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UserDropdownProps {
    pub name: String,
    pub on_logout: Callback<()>,
}

#[function_component(UserDropdown)]
pub fn user_dropdown(props: &UserDropdownProps) -> Html {
    let logout_button = {
        let on_logout = props.on_logout.clone();
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_logout.emit(());
        });
        html! {
            <li><a {onclick}>{"Logout"}</a></li>
        }
    };

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle mb-1">
                <i class="fa-solid fa-user text-lg"></i>
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                <li class="px-2 py-1 text-left">
                    <div class="text-sm font-semibold text-base-content">{ &props.name }</div>
                </li>
                <div class="divider my-0"></div>
                {logout_button}
            </ul>
        </div>
    }
}
