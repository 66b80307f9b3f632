use common::format::{format_currency, format_day_month};
use common::metrics::{bar_max, decimal_to_f64, relative_width};
use common::{DailyRevenue as DailyRevenueStat, DisplayLocale};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DailyRevenueProps {
    /// Days in ascending date order
    pub days: Vec<DailyRevenueStat>,
    pub locale: DisplayLocale,
}

#[function_component(DailyRevenue)]
pub fn daily_revenue(props: &DailyRevenueProps) -> Html {
    let max = bar_max(props.days.iter().map(|day| decimal_to_f64(day.revenue)));

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title"><i class="fas fa-chart-line"></i>{" Доход по дням"}</h2>
                <p class="text-sm text-gray-500">{"Последние 7 дней"}</p>
                if props.days.is_empty() {
                    <p class="text-center text-gray-500 py-8">{"Нет транзакций"}</p>
                } else {
                    <div class="space-y-3">
                        { for props.days.iter().map(|day| {
                            let width = relative_width(decimal_to_f64(day.revenue), max);
                            // Room for the amount label, but empty days stay empty
                            let style = if width > 0.0 {
                                format!("width: {:.1}%; min-width: 60px", width)
                            } else {
                                "width: 0%".to_string()
                            };
                            html! {
                                <div key={day.date.to_string()} class="flex items-center gap-3">
                                    <div class="text-sm text-gray-500 w-20 text-right">
                                        {format_day_month(&day.date, props.locale)}
                                    </div>
                                    <div class="flex-1 bg-base-200 rounded-full h-8 overflow-hidden">
                                        <div
                                            class="bg-gradient-to-r from-primary to-secondary h-full flex items-center justify-end pr-3 text-white text-sm font-medium"
                                            style={style}
                                        >
                                            {format!("+{}", format_currency(&day.revenue))}
                                        </div>
                                    </div>
                                    <div class="text-sm text-gray-500 w-24">
                                        {format!("{} транз.", day.transaction_count)}
                                    </div>
                                </div>
                            }
                        }) }
                    </div>
                }
            </div>
        </div>
    }
}
