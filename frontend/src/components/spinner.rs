use yew::prelude::*;

#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! {
        <div class="loading">
            <div class="spinner"></div>
        </div>
    }
}
