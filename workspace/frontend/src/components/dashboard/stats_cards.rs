use common::format::{format_amount, format_currency};
use common::StatsSummary;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatsCardsProps {
    pub stats: StatsSummary,
}

fn stat_card(title: &str, icon: &'static str, value: String, value_class: &'static str, desc: String) -> Html {
    html! {
        <div class="stats shadow bg-base-100">
            <div class="stat">
                <div class="stat-figure opacity-70"><i class={classes!(icon, "text-2xl")}></i></div>
                <div class="stat-title">{title}</div>
                <div class={classes!("stat-value", value_class)}>{value}</div>
                <div class="stat-desc">{desc}</div>
            </div>
        </div>
    }
}

#[function_component(StatsCards)]
pub fn stats_cards(props: &StatsCardsProps) -> Html {
    let stats = &props.stats;

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-5 gap-4">
            {stat_card(
                "Всего пользователей",
                "fas fa-users",
                stats.total_users.to_string(),
                "text-primary",
                format!("{} активных за 24ч", stats.active_users_24h),
            )}
            {stat_card(
                "Всего заказов",
                "fas fa-shopping-cart",
                stats.total_orders.to_string(),
                "text-secondary",
                format!("{} в обработке", stats.processing_orders),
            )}
            {stat_card(
                "Выручка",
                "fas fa-ruble-sign",
                format_currency(&stats.total_revenue),
                "text-accent",
                format!("{} кредитов потрачено", format_amount(&stats.credits_spent)),
            )}
            {stat_card(
                "Конверсия",
                "fas fa-chart-line",
                format_currency(&stats.average_revenue_per_user()),
                "text-info",
                "Средний чек на пользователя".to_string(),
            )}
            {stat_card(
                "Ошибки",
                "fas fa-exclamation-triangle",
                stats.errors_or_zero().to_string(),
                "text-error",
                "Всего за период".to_string(),
            )}
        </div>
    }
}
