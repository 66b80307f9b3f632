use studio_admin::CredentialStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CredentialWarningProps {
    pub status: CredentialStatus,
}

/// Standing banner for a build without an admin key. Renders nothing otherwise.
#[function_component(CredentialWarning)]
pub fn credential_warning(props: &CredentialWarningProps) -> Html {
    if !props.status.is_missing() {
        return html! {};
    }

    html! {
        <div class="alert alert-warning shadow" role="alert">
            <i class="fas fa-key text-xl"></i>
            <div class="flex flex-col">
                <span class="font-semibold">{"Ключ администратора не настроен"}</span>
                <span class="text-sm">
                    {"Задайте STUDIO_ADMIN_KEY при сборке. Без ключа сервер отклоняет запросы панели."}
                </span>
            </div>
        </div>
    }
}
