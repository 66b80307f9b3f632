use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub on_refresh: Option<Callback<()>>,
    #[prop_or_default]
    pub on_reset: Option<Callback<()>>,
    #[prop_or_default]
    pub busy: bool,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let action_button = |callback: &Option<Callback<()>>, class: &'static str, icon: &'static str, label: &'static str| {
        match callback {
            Some(callback) => {
                let callback = callback.clone();
                html! {
                    <button
                        class={classes!("btn", "btn-sm", class)}
                        disabled={props.busy}
                        onclick={Callback::from(move |_| callback.emit(()))}
                    >
                        <i class={icon}></i>
                        {label}
                    </button>
                }
            }
            None => html! {},
        }
    };

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0 px-6">
            <div class="flex-1 flex flex-col items-start">
                <h1 class="text-2xl font-bold text-primary">{"AI Video Studio"}</h1>
                <span class="text-sm text-gray-500">{"Панель администратора"}</span>
            </div>
            <div class="flex-none flex items-center gap-2">
                <div class="hidden md:flex items-center gap-2 px-3 py-1 rounded-full bg-base-200">
                    <span class="w-2 h-2 rounded-full bg-success animate-pulse"></span>
                    <span class="text-sm font-medium">{"Система активна"}</span>
                </div>
                {action_button(&props.on_refresh, "btn-ghost", "fas fa-sync-alt", " Обновить")}
                {action_button(&props.on_reset, "btn-error btn-outline", "fas fa-trash-alt", " Сбросить статистику")}
            </div>
        </div>
    }
}
