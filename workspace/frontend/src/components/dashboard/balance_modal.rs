use common::format::format_currency;
use common::UserRecord;
use studio_admin::api::DEFAULT_BALANCE_REASON;
use studio_admin::BalanceDialog;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BalanceModalProps {
    pub dialog: BalanceDialog,
    /// The selected user, if still present in the snapshot
    pub user: Option<UserRecord>,
    pub on_amount: Callback<String>,
    pub on_reason: Callback<String>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
}

fn input_callback(target: &Callback<String>) -> Callback<InputEvent> {
    let target = target.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        target.emit(input.value());
    })
}

#[function_component(BalanceModal)]
pub fn balance_modal(props: &BalanceModalProps) -> Html {
    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    let submitting = props.dialog.submitting;
    let heading = match &props.user {
        Some(user) => format!(
            "{} ({}), баланс {}",
            user.first_name,
            user.handle().unwrap_or_else(|| format!("ID: {}", user.user_id)),
            format_currency(&user.balance)
        ),
        None => props
            .dialog
            .user_id
            .map(|id| format!("ID: {}", id))
            .unwrap_or_default(),
    };

    html! {
        <dialog class={classes!("modal", props.dialog.is_open().then_some("modal-open"))} id="balance_modal">
            <div class="modal-box">
                <h3 class="font-bold text-lg">{"Изменить баланс"}</h3>
                <p class="text-sm text-gray-500">{heading}</p>
                <form onsubmit={on_submit} class="py-4 space-y-4">
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"Сумма"}</span>
                            <span class="label-text-alt">{"Отрицательная сумма списывает кредиты"}</span>
                        </label>
                        <input
                            type="text"
                            inputmode="numeric"
                            name="amount"
                            class="input input-bordered w-full"
                            placeholder="100 или -50"
                            value={props.dialog.amount.clone()}
                            oninput={input_callback(&props.on_amount)}
                            disabled={submitting}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Причина"}</span></label>
                        <input
                            type="text"
                            name="reason"
                            class="input input-bordered w-full"
                            placeholder={DEFAULT_BALANCE_REASON}
                            value={props.dialog.reason.clone()}
                            oninput={input_callback(&props.on_reason)}
                            disabled={submitting}
                        />
                    </div>
                    <div class="modal-action">
                        <button type="button" class="btn" onclick={on_close.clone()} disabled={submitting}>{"Отмена"}</button>
                        <button type="submit" class="btn btn-primary" disabled={submitting}>
                            if submitting {
                                <span class="loading loading-spinner loading-sm"></span>
                            }
                            {"Сохранить"}
                        </button>
                    </div>
                </form>
            </div>
            <div class="modal-backdrop">
                <button onclick={on_close}>{"close"}</button>
            </div>
        </dialog>
    }
}
