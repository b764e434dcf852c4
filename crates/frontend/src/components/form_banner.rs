use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct FormBannerProps {
    pub message: AttrValue,
}

#[function_component(FormBanner)]
pub fn form_banner(props: &FormBannerProps) -> Html {
    html! {
        <div class="form-error" role="alert">{props.message.clone()}</div>
    }
}
