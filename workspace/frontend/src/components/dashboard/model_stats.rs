use common::format::{format_currency, format_percent};
use common::ModelStat;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModelStatsProps {
    pub stats: Vec<ModelStat>,
}

fn counter(value: i64, label: &'static str, class: &'static str) -> Html {
    html! {
        <div class="text-center">
            <div class={classes!("text-2xl", "font-bold", class)}>{value.to_string()}</div>
            <div class="text-xs text-gray-500">{label}</div>
        </div>
    }
}

/// Success rate and revenue per generation model.
#[function_component(ModelStats)]
pub fn model_stats(props: &ModelStatsProps) -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body space-y-4">
                <h2 class="card-title"><i class="fas fa-heartbeat"></i>{" Статистика моделей"}</h2>
                <p class="text-sm text-gray-500">{"Эффективность каждой модели генерации"}</p>
                if props.stats.is_empty() {
                    <p class="text-center text-gray-500 py-8">{"Нет данных по моделям"}</p>
                } else {
                    { for props.stats.iter().map(|stat| {
                        let kind = stat.order_type.descriptor();
                        let rate = stat.success_rate();
                        html! {
                            <div key={stat.order_type.as_str().to_string()} class="border border-base-300 rounded-lg p-4 space-y-3">
                                <div class="flex items-center justify-between">
                                    <span class="font-semibold flex items-center gap-2">
                                        <i class={classes!(kind.icon, "text-primary")}></i>
                                        {kind.label}
                                    </span>
                                    <span class="badge badge-outline text-success">{format_currency(&stat.total_revenue)}</span>
                                </div>
                                <div class="grid grid-cols-3 gap-3">
                                    {counter(stat.total_count, "Всего", "text-info")}
                                    {counter(stat.completed_count, "Успешно", "text-success")}
                                    {counter(stat.failed_count, "Ошибки", "text-error")}
                                </div>
                                <div class="space-y-1">
                                    <div class="flex items-center justify-between text-sm">
                                        <span class="text-gray-500">{"Успешность"}</span>
                                        <span class="font-medium">{format_percent(rate, 1)}</span>
                                    </div>
                                    <progress class="progress progress-success w-full h-2" value={format!("{:.1}", rate)} max="100"></progress>
                                </div>
                            </div>
                        }
                    }) }
                }
            </div>
        </div>
    }
}
