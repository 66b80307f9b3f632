use yew::prelude::*;
use super::navbar::Navbar;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    #[prop_or_default]
    pub on_refresh: Option<Callback<()>>,
    #[prop_or_default]
    pub on_reset: Option<Callback<()>>,
    /// Disables the navbar actions while a request is running
    #[prop_or_default]
    pub busy: bool,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="flex flex-col min-h-screen bg-base-200">
            <Navbar
                on_refresh={props.on_refresh.clone()}
                on_reset={props.on_reset.clone()}
                busy={props.busy}
            />
            <main class="flex-1 container mx-auto p-6 space-y-6">
                { for props.children.iter() }
            </main>
        </div>
    }
}
