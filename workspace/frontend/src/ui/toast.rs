use gloo_timers::callback::Timeout;
use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum ToastType {
    Success,
    Error,
}

impl ToastType {
    fn alert_class(&self) -> &'static str {
        match self {
            ToastType::Success => "alert-success",
            ToastType::Error => "alert-error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Success => "fas fa-check-circle",
            ToastType::Error => "fas fa-exclamation-circle",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub toast_type: ToastType,
}

pub enum ToastAction {
    Push(Toast),
    Remove(usize),
}

#[derive(Default, PartialEq)]
pub struct ToastList {
    toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Remove(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(ToastList { toasts })
    }
}

/// Handle for raising toasts, shared through context.
///
/// Every clone dispatches into the same list, including clones held by the
/// dashboard controller across renders.
#[derive(Clone)]
pub struct ToastContext {
    dispatcher: UseReducerDispatcher<ToastList>,
    next_id: Rc<Cell<usize>>,
    duration_ms: u32,
}

impl PartialEq for ToastContext {
    fn eq(&self, other: &Self) -> bool {
        self.dispatcher == other.dispatcher
            && Rc::ptr_eq(&self.next_id, &other.next_id)
            && self.duration_ms == other.duration_ms
    }
}

impl ToastContext {
    pub fn show(&self, message: String, toast_type: ToastType) {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.dispatcher.dispatch(ToastAction::Push(Toast {
            id,
            message,
            toast_type,
        }));

        let dispatcher = self.dispatcher.clone();
        Timeout::new(self.duration_ms, move || {
            dispatcher.dispatch(ToastAction::Remove(id));
        })
        .forget();
    }

    pub fn dismiss(&self, id: usize) {
        self.dispatcher.dispatch(ToastAction::Remove(id));
    }

    pub fn show_success(&self, message: String) {
        self.show(message, ToastType::Success);
    }

    pub fn show_error(&self, message: String) {
        self.show(message, ToastType::Error);
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
    #[prop_or(5000)]
    pub duration_ms: u32,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let next_id = use_memo((), |_| Cell::new(0usize));

    let context = ToastContext {
        dispatcher: list.dispatcher(),
        next_id,
        duration_ms: props.duration_ms,
    };

    html! {
        <ContextProvider<ToastContext> context={context.clone()}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                {for list.toasts.iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let context = context.clone();
                        Callback::from(move |_| context.dismiss(id))
                    };

                    html! {
                        <div key={id} class={classes!("alert", toast.toast_type.alert_class(), "shadow-lg")}>
                            <i class={toast.toast_type.icon()}></i>
                            <span>{&toast.message}</span>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}
