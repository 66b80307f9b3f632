use studio_admin::{ApiError, CredentialStatus};
use yew::prelude::*;

use crate::components::dashboard::CredentialWarning;

#[derive(Properties, PartialEq)]
pub struct LoadFailureProps {
    pub error: ApiError,
    pub credential_status: CredentialStatus,
    pub on_retry: Callback<()>,
}

/// Replaces the dashboard body when a load fails.
///
/// A refused key or a build without one gets the credential banner next to
/// the failure.
#[function_component(LoadFailure)]
pub fn load_failure(props: &LoadFailureProps) -> Html {
    let error = &props.error;
    log::warn!("Dashboard load failed: {}", error);

    let icon = match error {
        ApiError::Transport(_) => "fas fa-plug-circle-xmark",
        _ if error.is_auth_rejection() => "fas fa-lock",
        _ => "fas fa-exclamation-circle",
    };
    let on_click = {
        let on_retry = props.on_retry.clone();
        Callback::from(move |_| on_retry.emit(()))
    };

    html! {
        <div class="flex flex-col items-center py-12 gap-4">
            <div class="alert alert-error max-w-lg">
                <i class={classes!(icon, "text-2xl")}></i>
                <div class="flex flex-col">
                    <span class="font-semibold">{error.title()}</span>
                    <span class="text-sm">{error.user_message()}</span>
                </div>
            </div>
            <CredentialWarning status={props.credential_status} />
            if error.is_auth_rejection() && !props.credential_status.is_missing() {
                <p class="text-sm text-gray-500">{"Проверьте значение STUDIO_ADMIN_KEY."}</p>
            }
            <button class="btn btn-primary btn-sm" onclick={on_click}>
                <i class="fas fa-redo"></i>{" Повторить"}
            </button>
        </div>
    }
}
