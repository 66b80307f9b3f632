use common::format::{format_currency, format_percent};
use common::metrics::{bar_max, relative_width, share_percentage};
use common::OrderTypeStat;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct OrderStatsProps {
    pub stats: Vec<OrderTypeStat>,
}

/// Order counts per type, with bars scaled to the most popular type.
#[function_component(OrderStats)]
pub fn order_stats(props: &OrderStatsProps) -> Html {
    let total: i64 = props.stats.iter().map(|stat| stat.count).sum();
    let max = bar_max(props.stats.iter().map(|stat| stat.count as f64));

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body space-y-4">
                <h2 class="card-title"><i class="fas fa-chart-bar"></i>{" Статистика по типам заказов"}</h2>
                <p class="text-sm text-gray-500">{"Распределение заказов по типам"}</p>
                if props.stats.is_empty() {
                    <p class="text-center text-gray-500 py-8">{"Нет данных"}</p>
                } else {
                    { for props.stats.iter().map(|stat| {
                        let kind = stat.order_type.descriptor();
                        let width = relative_width(stat.count as f64, max);
                        let share = share_percentage(stat.count, total);
                        html! {
                            <div key={stat.order_type.as_str().to_string()} class="space-y-2">
                                <div class="flex items-center justify-between">
                                    <span class="font-medium flex items-center gap-2">
                                        <i class={kind.icon}></i>
                                        {kind.label}
                                    </span>
                                    <span class="text-sm text-gray-500">
                                        {format!(
                                            "{} заказов • {} ({})",
                                            stat.count,
                                            format_currency(&stat.total_cost),
                                            format_percent(share, 0),
                                        )}
                                    </span>
                                </div>
                                <progress class="progress progress-primary w-full h-2" value={format!("{:.1}", width)} max="100"></progress>
                            </div>
                        }
                    }) }
                }
            </div>
        </div>
    }
}
