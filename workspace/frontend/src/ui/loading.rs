use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_else(|| "Загрузка панели...".to_string())]
    pub text: String,
}

/// Full-width spinner shown while the dashboard is fetched.
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex flex-col justify-center items-center py-24 gap-4">
            <span class="loading loading-spinner loading-lg text-primary"></span>
            <p class="text-lg font-medium text-gray-500">{&props.text}</p>
        </div>
    }
}
