use std::rc::Rc;

use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

/// What to show; the queue assigns the id.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
    pub action: Option<String>,
}

impl Notice {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant: ToastVariant::Default,
            action: None,
        }
    }

    pub fn destructive(mut self) -> Self {
        self.variant = ToastVariant::Destructive;
        self
    }

    pub fn with_action(mut self, label: &str) -> Self {
        self.action = Some(label.to_string());
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
}

/// Page-owned toasts. Only the newest one is kept on screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u32,
    toasts: Vec<Toast>,
}

const TOAST_LIMIT: usize = 1;

impl ToastQueue {
    pub fn push(&mut self, notice: Notice) -> u32 {
        self.next_id += 1;
        self.toasts.insert(0, Toast { id: self.next_id, notice });
        self.toasts.truncate(TOAST_LIMIT);
        self.next_id
    }

    /// Returns false when the toast was already gone.
    pub fn dismiss(&mut self, id: u32) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }
}

pub enum ToastMsg {
    Show(Notice),
    Dismiss(u32),
}

impl Reducible for ToastQueue {
    type Action = ToastMsg;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastMsg::Show(notice) => {
                log::debug!("Showing toast: {}", notice.title);
                next.push(notice);
            }
            ToastMsg::Dismiss(id) => {
                if !next.dismiss(id) {
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastViewProps {
    pub toast: Toast,
    pub on_dismiss: Callback<u32>,
}

#[function_component(ToastView)]
pub fn toast_view(props: &ToastViewProps) -> Html {
    let id = props.toast.id;

    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(move |id| {
            let id = *id;
            let timeout = Timeout::new(config::TOAST_DISMISS_MS, move || {
                on_dismiss.emit(id);
            });
            move || drop(timeout)
        }, id);
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let variant_class = match props.toast.notice.variant {
        ToastVariant::Default => "toast",
        ToastVariant::Destructive => "toast destructive",
    };

    html! {
        <div class={variant_class} role="status">
            <div class="toast-body">
                <div class="toast-title">{&props.toast.notice.title}</div>
                <div class="toast-description">{&props.toast.notice.description}</div>
            </div>
            if let Some(action) = &props.toast.notice.action {
                <button class="toast-action" aria-label={action.clone()} onclick={close.clone()}>
                    {action}
                </button>
            }
            <button class="toast-close" aria-label="Close" onclick={close}>{"✕"}</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    html! {
        <div class="toaster">
            <style>
                {r#"
                    .toaster {
                        position: fixed;
                        bottom: 16px;
                        right: 16px;
                        z-index: 100;
                        display: flex;
                        flex-direction: column;
                        gap: 8px;
                        max-width: 420px;
                    }
                    @keyframes toastIn {
                        from { transform: translateY(100%); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .toast {
                        display: flex;
                        align-items: flex-start;
                        gap: 12px;
                        padding: 16px 20px;
                        border-radius: 8px;
                        background: #0a3b2c;
                        color: #e8d8b7;
                        border: 1px solid rgba(232, 216, 183, 0.3);
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.35);
                        animation: toastIn 0.3s ease-out;
                    }
                    .toast.destructive {
                        background: #7f1d1d;
                        border-color: #b91c1c;
                        color: #fff;
                    }
                    .toast-body { flex: 1; }
                    .toast-title { font-weight: 600; margin-bottom: 4px; }
                    .toast-description { font-size: 14px; opacity: 0.9; }
                    .toast-action {
                        background: transparent;
                        color: inherit;
                        border: 1px solid currentColor;
                        border-radius: 6px;
                        padding: 4px 10px;
                        font-size: 13px;
                        cursor: pointer;
                    }
                    .toast-close {
                        background: none;
                        border: none;
                        color: inherit;
                        opacity: 0.6;
                        cursor: pointer;
                    }
                "#}
            </style>
            { for props.toasts.iter().map(|toast| html! {
                <ToastView key={toast.id} toast={toast.clone()} on_dismiss={props.on_dismiss.clone()} />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_toast_replaces_the_current_one() {
        let mut queue = ToastQueue::default();
        queue.push(Notice::new("Missing content", "first").destructive());
        let id = queue.push(Notice::new("Story submitted successfully!", "second").with_action("View Status"));

        assert_eq!(queue.visible().len(), 1);
        assert_eq!(queue.visible()[0].id, id);
        assert_eq!(queue.visible()[0].notice.variant, ToastVariant::Default);
        assert_eq!(queue.visible()[0].notice.action.as_deref(), Some("View Status"));
    }

    #[test]
    fn dismiss_removes_by_id() {
        let mut queue = ToastQueue::default();
        let id = queue.push(Notice::new("t", "d"));
        assert!(queue.dismiss(id));
        assert!(queue.visible().is_empty());
    }

    #[test]
    fn dismissing_a_replaced_toast_is_a_no_op() {
        let mut queue = ToastQueue::default();
        let stale = queue.push(Notice::new("a", "a"));
        let current = queue.push(Notice::new("b", "b"));

        assert!(!queue.dismiss(stale));
        assert_eq!(queue.visible()[0].id, current);
    }

    #[test]
    fn reducer_keeps_state_on_stale_dismiss() {
        let queue = Rc::new(ToastQueue::default());
        let shown = queue.reduce(ToastMsg::Show(Notice::new("a", "a")));
        let id = shown.visible()[0].id;

        let unchanged = shown.clone().reduce(ToastMsg::Dismiss(id + 1));
        assert!(Rc::ptr_eq(&shown, &unchanged));

        let cleared = unchanged.reduce(ToastMsg::Dismiss(id));
        assert!(cleared.visible().is_empty());
    }
}
