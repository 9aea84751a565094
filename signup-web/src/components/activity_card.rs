use shared::roster::ActivityView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ActivityCardProps {
    pub activity: ActivityView,
    pub on_withdraw: Callback<(String, String)>,
}

#[function_component(ActivityCard)]
pub fn activity_card(props: &ActivityCardProps) -> Html {
    let activity = &props.activity;

    let participants = if activity.participants.is_empty() {
        html! { <p><em>{"No participants yet"}</em></p> }
    } else {
        html! {
            <div>
                <h5 class="font-semibold mt-2">{"Participants:"}</h5>
                <ul class="mt-1 space-y-1">
                    {
                        for activity.participants.iter().map(|email| {
                            let remove = activity.removable.then(|| {
                                let on_withdraw = props.on_withdraw.clone();
                                let name = activity.name.clone();
                                let email = email.clone();
                                let onclick = Callback::from(move |_: MouseEvent| {
                                    on_withdraw.emit((name.clone(), email.clone()));
                                });
                                html! {
                                    <button class="btn btn-ghost btn-xs" {onclick}>{"❌"}</button>
                                }
                            });
                            html! {
                                <li key={email.clone()} class="flex items-center justify-between">
                                    <span>{email.clone()}</span>
                                    {remove.unwrap_or_default()}
                                </li>
                            }
                        })
                    }
                </ul>
            </div>
        }
    };

    html! {
        <div class="card bg-base-200 shadow-xl">
            <div class="card-body">
                <h2 class="card-title">{ &activity.name }</h2>
                <p>{ &activity.description }</p>
                <p><strong>{"Schedule: "}</strong>{ &activity.schedule }</p>
                <p><strong>{"Availability: "}</strong>{ activity.spots_left }{" spots left"}</p>
                {participants}
            </div>
        </div>
    }
}
