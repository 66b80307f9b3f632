use common::format::{format_currency, format_timestamp};
use common::{DisplayLocale, OrderRecord};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RecentOrdersProps {
    pub orders: Vec<OrderRecord>,
    pub locale: DisplayLocale,
}

#[function_component(RecentOrders)]
pub fn recent_orders(props: &RecentOrdersProps) -> Html {
    let body = if props.orders.is_empty() {
        html! {
            <div class="text-center py-8 text-gray-500">
                <i class="fas fa-inbox text-4xl opacity-50 mb-2"></i>
                <p>{"Заказов пока нет"}</p>
            </div>
        }
    } else {
        html! {
            <div class="overflow-x-auto">
                <table class="table table-zebra w-full">
                    <thead>
                        <tr>
                            <th>{"ID"}</th>
                            <th>{"Пользователь"}</th>
                            <th>{"Тип"}</th>
                            <th>{"Статус"}</th>
                            <th>{"Стоимость"}</th>
                            <th>{"Дата"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for props.orders.iter().map(|order| {
                            let kind = order.order_type.descriptor();
                            let badge = order.status.badge();
                            html! {
                                <tr key={order.order_id.to_string()}>
                                    <td class="font-mono text-sm">{order.order_id.to_string()}</td>
                                    <td>
                                        <div class="font-medium">{&order.first_name}</div>
                                        <div class="text-sm text-gray-500">{order.customer_handle()}</div>
                                    </td>
                                    <td>
                                        <div class="flex items-center gap-2">
                                            <i class={kind.icon}></i>
                                            <span class="text-sm">{kind.label}</span>
                                        </div>
                                    </td>
                                    <td>
                                        <span class={classes!("badge", format!("badge-{}", badge.class))}>{badge.label}</span>
                                    </td>
                                    <td><span class="badge badge-outline">{format_currency(&order.cost)}</span></td>
                                    <td class="text-sm text-gray-500">{format_timestamp(&order.created_at, props.locale)}</td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </div>
        }
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title"><i class="fas fa-shopping-cart"></i>{" Последние заказы"}</h2>
                <p class="text-sm text-gray-500">{"История генераций видео и превью"}</p>
                {body}
            </div>
        </div>
    }
}
