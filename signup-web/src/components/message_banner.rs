use shared::message::{MessageKind, TransientMessage};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MessageBannerProps {
    #[prop_or_default]
    pub message: Option<TransientMessage>,
}

#[function_component(MessageBanner)]
pub fn message_banner(props: &MessageBannerProps) -> Html {
    let Some(message) = &props.message else {
        return html! {};
    };

    let class = match message.kind {
        MessageKind::Success => "alert alert-success",
        MessageKind::Error => "alert alert-error",
    };

    html! {
        <div {class}>
            <span>{ &message.text }</span>
        </div>
    }
}
