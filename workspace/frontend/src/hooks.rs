use std::rc::Rc;
use studio_admin::DashboardController;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api_client::GlooTransport;
use crate::settings;
use crate::ui::notifier::BrowserNotifier;
use crate::ui::toast::ToastContext;

pub type AdminController = DashboardController<GlooTransport, BrowserNotifier>;

/// Binds one dashboard controller to the calling component.
///
/// The controller lives as long as the component; every state change
/// re-renders it. The first load is issued on mount.
#[hook]
pub fn use_dashboard() -> Rc<AdminController> {
    let toasts = use_context::<ToastContext>();
    let update = use_force_update();

    let controller = use_memo((), move |_| {
        let config = settings::get_settings().admin_config();
        log::debug!("Creating dashboard controller: {:?}", config);
        let controller = DashboardController::new(config, GlooTransport, BrowserNotifier::new(toasts));
        controller.set_listener(move || update.force_update());
        controller
    });

    {
        let controller = controller.clone();
        use_effect_with((), move |_| {
            log::trace!("Dashboard mounted, loading data");
            spawn_local(async move {
                controller.load_dashboard().await;
            });
            || ()
        });
    }

    controller
}

/// Callback that reloads the dashboard.
pub fn reload_callback(controller: &Rc<AdminController>) -> Callback<()> {
    let controller = controller.clone();
    Callback::from(move |_| {
        log::debug!("Dashboard refresh requested");
        let controller = controller.clone();
        spawn_local(async move {
            controller.load_dashboard().await;
        });
    })
}
