use common::format::{format_currency, format_timestamp};
use common::{DisplayLocale, UserId, UserRecord};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RecentUsersProps {
    pub users: Vec<UserRecord>,
    pub locale: DisplayLocale,
    /// Asks the page to open the balance dialog for a user
    pub on_edit_balance: Callback<UserId>,
}

#[function_component(RecentUsers)]
pub fn recent_users(props: &RecentUsersProps) -> Html {
    let body = if props.users.is_empty() {
        html! {
            <div class="text-center py-8 text-gray-500">
                <i class="fas fa-user-slash text-4xl opacity-50 mb-2"></i>
                <p>{"Пользователей пока нет"}</p>
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
                            <th>{"Баланс"}</th>
                            <th>{"Регистрация"}</th>
                            <th>{"Активность"}</th>
                            <th>{"Статус"}</th>
                            <th>{"Действия"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for props.users.iter().map(|user| user_row(user, props)) }
                    </tbody>
                </table>
            </div>
        }
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title"><i class="fas fa-users"></i>{" Последние пользователи"}</h2>
                <p class="text-sm text-gray-500">{"Недавно зарегистрированные пользователи бота"}</p>
                {body}
            </div>
        </div>
    }
}

fn user_row(user: &UserRecord, props: &RecentUsersProps) -> Html {
    let on_click = {
        let on_edit_balance = props.on_edit_balance.clone();
        let user_id = user.user_id;
        Callback::from(move |_| on_edit_balance.emit(user_id))
    };
    let balance_class = if user.has_positive_balance() { "badge-primary" } else { "badge-outline" };
    let last_activity = user
        .last_activity
        .map(|ts| format_timestamp(&ts, props.locale))
        .unwrap_or_else(|| "—".to_string());

    html! {
        <tr key={user.user_id.to_string()}>
            <td class="font-mono text-sm">{user.user_id.to_string()}</td>
            <td>
                <div class="flex items-center gap-3">
                    <div class="avatar placeholder">
                        <div class="bg-primary text-primary-content rounded-full w-10">
                            <span class="font-bold">{user.initial()}</span>
                        </div>
                    </div>
                    <div>
                        <div class="font-medium">{&user.first_name}</div>
                        <div class="text-sm text-gray-500">
                            {user.handle().unwrap_or_else(|| "Нет username".to_string())}
                        </div>
                    </div>
                </div>
            </td>
            <td><span class={classes!("badge", balance_class)}>{format_currency(&user.balance)}</span></td>
            <td class="text-sm text-gray-500">{format_timestamp(&user.created_at, props.locale)}</td>
            <td class="text-sm text-gray-500">{last_activity}</td>
            <td>
                if user.is_blocked {
                    <span class="badge badge-error">{"Заблокирован"}</span>
                } else {
                    <span class="badge badge-success">{"Активен"}</span>
                }
            </td>
            <td>
                <button class="btn btn-sm btn-outline" onclick={on_click}>
                    <i class="fas fa-wallet"></i>{" Баланс"}
                </button>
            </td>
        </tr>
    }
}
