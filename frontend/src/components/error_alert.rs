use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorAlertProps {
    pub message: String,
}

#[function_component(ErrorAlert)]
pub fn error_alert(props: &ErrorAlertProps) -> Html {
    html! {
        <div class="error-alert" role="alert">
            <span class="error-icon">{ "!" }</span>
            <span>{ &props.message }</span>
        </div>
    }
}
