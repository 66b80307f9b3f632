use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::dashboard::DashboardPage;
use crate::components::layout::layout::Layout;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/orders")]
    Orders,
    #[at("/users")]
    Users,
    #[at("/analytics")]
    Analytics,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Sections of the dashboard page, one per tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Orders,
    Users,
    Analytics,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [DashboardTab::Orders, DashboardTab::Users, DashboardTab::Analytics];

    pub fn route(self) -> Route {
        match self {
            DashboardTab::Orders => Route::Orders,
            DashboardTab::Users => Route::Users,
            DashboardTab::Analytics => Route::Analytics,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DashboardTab::Orders => "Заказы",
            DashboardTab::Users => "Пользователи",
            DashboardTab::Analytics => "Аналитика",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            DashboardTab::Orders => "fas fa-shopping-bag",
            DashboardTab::Users => "fas fa-users",
            DashboardTab::Analytics => "fas fa-chart-bar",
        }
    }
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    // Tabs must share one page component for the snapshot to survive a switch
    match routes {
        Route::Home | Route::Orders => html! { <DashboardPage tab={DashboardTab::Orders} /> },
        Route::Users => html! { <DashboardPage tab={DashboardTab::Users} /> },
        Route::Analytics => html! { <DashboardPage tab={DashboardTab::Analytics} /> },
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! {
                <Layout>
                    <div class="text-center py-24 space-y-4">
                        <h1 class="text-4xl font-bold">{"404"}</h1>
                        <p class="text-gray-500">{"Страница не найдена"}</p>
                        <Link<Route> to={Route::Orders} classes="btn btn-primary btn-sm">
                            {"К панели"}
                        </Link<Route>>
                    </div>
                </Layout>
            }
        }
    }
}
