use common::UserId;
use std::rc::Rc;
use studio_admin::ViewState;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use super::balance_modal::BalanceModal;
use super::credential_warning::CredentialWarning;
use super::daily_revenue::DailyRevenue;
use super::model_stats::ModelStats;
use super::order_stats::OrderStats;
use super::recent_orders::RecentOrders;
use super::recent_users::RecentUsers;
use super::stats_cards::StatsCards;
use crate::components::layout::layout::Layout;
use crate::hooks::{reload_callback, use_dashboard, AdminController};
use crate::router::{DashboardTab, Route};
use crate::settings;
use crate::ui::error::LoadFailure;
use crate::ui::loading::Loading;

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub tab: DashboardTab,
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let controller = use_dashboard();
    let locale = settings::get_settings().locale;
    let credential_status = controller.credential_status();
    let state = controller.state();
    let callbacks = balance_callbacks(&controller);

    let on_refresh = reload_callback(&controller);
    let on_reset = {
        let controller = controller.clone();
        Callback::from(move |_| {
            let controller = controller.clone();
            spawn_local(async move {
                let outcome = controller.reset_stats().await;
                log::info!("Statistics reset finished: {:?}", outcome);
            });
        })
    };

    let content = match &state {
        ViewState::Loading => html! { <Loading /> },
        ViewState::Error(error) => html! {
            <LoadFailure
                error={error.clone()}
                credential_status={credential_status}
                on_retry={on_refresh.clone()}
            />
        },
        ViewState::Loaded(snapshot) => {
            let section = match props.tab {
                DashboardTab::Orders => html! {
                    <RecentOrders orders={snapshot.recent_orders.clone()} locale={locale} />
                },
                DashboardTab::Users => html! {
                    <RecentUsers
                        users={snapshot.recent_users.clone()}
                        locale={locale}
                        on_edit_balance={callbacks.open.clone()}
                    />
                },
                DashboardTab::Analytics => html! {
                    <>
                        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                            <OrderStats stats={snapshot.order_stats.clone()} />
                            <DailyRevenue
                                days={snapshot.daily_revenue_chronological().into_iter().cloned().collect::<Vec<_>>()}
                                locale={locale}
                            />
                        </div>
                        <ModelStats stats={snapshot.model_stats.clone()} />
                    </>
                },
            };

            html! {
                <>
                    <StatsCards stats={snapshot.stats.clone()} />
                    <TabBar active={props.tab} />
                    {section}
                </>
            }
        }
    };

    let dialog = controller.dialog();
    let busy = state.is_loading() || controller.is_resetting();

    html! {
        <Layout on_refresh={Some(on_refresh)} on_reset={Some(on_reset)} busy={busy}>
            // Standing banner; the error view repeats it next to the failure
            if !matches!(state, ViewState::Error(_)) {
                <CredentialWarning status={credential_status} />
            }
            {content}
            <BalanceModal
                dialog={dialog}
                user={controller.selected_user()}
                on_amount={callbacks.amount}
                on_reason={callbacks.reason}
                on_submit={callbacks.submit}
                on_close={callbacks.close}
            />
        </Layout>
    }
}

struct BalanceCallbacks {
    open: Callback<UserId>,
    amount: Callback<String>,
    reason: Callback<String>,
    submit: Callback<()>,
    close: Callback<()>,
}

fn balance_callbacks(controller: &Rc<AdminController>) -> BalanceCallbacks {
    let open = {
        let controller = controller.clone();
        Callback::from(move |user_id: UserId| controller.open_balance_dialog(user_id))
    };
    let amount = {
        let controller = controller.clone();
        Callback::from(move |value: String| controller.set_amount(value))
    };
    let reason = {
        let controller = controller.clone();
        Callback::from(move |value: String| controller.set_reason(value))
    };
    let submit = {
        let controller = controller.clone();
        Callback::from(move |_| {
            let controller = controller.clone();
            spawn_local(async move {
                let outcome = controller.submit_balance_dialog().await;
                log::debug!("Balance dialog submitted: {:?}", outcome);
            });
        })
    };
    let close = {
        let controller = controller.clone();
        Callback::from(move |_| controller.close_balance_dialog())
    };

    BalanceCallbacks {
        open,
        amount,
        reason,
        submit,
        close,
    }
}

#[derive(Properties, PartialEq)]
struct TabBarProps {
    active: DashboardTab,
}

#[function_component(TabBar)]
fn tab_bar(props: &TabBarProps) -> Html {
    html! {
        <div role="tablist" class="tabs tabs-boxed bg-base-100 w-fit">
            { for DashboardTab::ALL.iter().map(|tab| {
                let class = classes!("tab", "gap-2", (*tab == props.active).then_some("tab-active"));
                html! {
                    <Link<Route> to={tab.route()} classes={class}>
                        <i class={tab.icon()}></i>
                        {tab.label()}
                    </Link<Route>>
                }
            }) }
        </div>
    }
}
