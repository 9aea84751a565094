use shared::roster::ACTIVITIES_UNAVAILABLE;
use yew::prelude::*;

use crate::components::activity_card::ActivityCard;
use crate::models::app_state::RosterPhase;

#[derive(Properties, PartialEq)]
pub struct RosterListProps {
    pub phase: RosterPhase,
    pub on_withdraw: Callback<(String, String)>,
}

#[function_component(RosterList)]
pub fn roster_list(props: &RosterListProps) -> Html {
    match &props.phase {
        RosterPhase::Loading => html! {
            <p>{"Loading activities..."}</p>
        },
        RosterPhase::Unavailable => html! {
            <p>{ACTIVITIES_UNAVAILABLE}</p>
        },
        RosterPhase::Ready(view) => html! {
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {
                    for view.iter().map(|activity| html! {
                        <ActivityCard
                            key={activity.name.clone()}
                            activity={activity.clone()}
                            on_withdraw={props.on_withdraw.clone()}
                        />
                    })
                }
            </div>
        },
    }
}
