use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use gloo_timers::future::sleep;
use std::time::Duration;

use crate::{t, use_lang};

/// How long a toast stays up unless dismissed.
const TOAST_LIFETIME: Duration = Duration::from_secs(5);
/// Older notices are dropped once this many are on screen.
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Info => "toast toast_info",
            ToastKind::Success => "toast toast_success",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub body: Option<String>,
}

/// Newest last, capped at `MAX_VISIBLE`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NoticeQueue {
    notices: Vec<Notice>,
    issued: u64,
}

impl NoticeQueue {
    pub fn push(&mut self, kind: ToastKind, title: String, body: Option<String>) -> u64 {
        self.issued += 1;
        let id = self.issued;
        self.notices.push(Notice { id, kind, title, body });
        if self.notices.len() > MAX_VISIBLE {
            let overflow = self.notices.len() - MAX_VISIBLE;
            self.notices.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }
}

/// Handle for raising notices from anywhere under `ToastProvider`.
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    queue: Signal<NoticeQueue>,
}

impl Toasts {
    fn raise(&self, kind: ToastKind, title: String, body: Option<String>) {
        let mut queue = self.queue;
        let id = queue.write().push(kind, title, body);

        // outlives the page that raised it
        let _ = spawn_forever(async move {
            sleep(TOAST_LIFETIME).await;
            queue.write().dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        let mut queue = self.queue;
        queue.write().dismiss(id);
    }

    pub fn info(&self, title: String, body: Option<String>) {
        self.raise(ToastKind::Info, title, body);
    }

    pub fn success(&self, title: String, body: Option<String>) {
        self.raise(ToastKind::Success, title, body);
    }
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let queue = use_signal(NoticeQueue::default);
    let toasts = use_context_provider(|| Toasts { queue });

    rsx! {
        {children}
        NoticeStack { toasts: toasts }
    }
}

#[component]
fn NoticeStack(toasts: Toasts) -> Element {
    let lang = use_lang();
    let notices = toasts.queue.read().notices().to_vec();

    rsx! {
        div { class: "toast_region", role: "status", "aria-live": "polite",
            for notice in notices {
                div { key: "{notice.id}", class: notice.kind.class(),
                    div { class: "toast_content",
                        div { class: "toast_title", "{notice.title}" }
                        if let Some(body) = &notice.body {
                            div { class: "toast_body", "{body}" }
                        }
                    }
                    button {
                        r#type: "button",
                        class: "toast_close",
                        onclick: {
                            let id = notice.id;
                            move |_| toasts.dismiss(id)
                        },
                        {t(lang, "common.dismiss")}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(queue: &NoticeQueue) -> Vec<&str> {
        queue.notices().iter().map(|n| n.title.as_str()).collect()
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut queue = NoticeQueue::default();
        let a = queue.push(ToastKind::Info, "a".into(), None);
        let b = queue.push(ToastKind::Success, "b".into(), Some("body".into()));
        assert!(b > a);
        assert_eq!(titles(&queue), ["a", "b"]);
    }

    #[test]
    fn oldest_notice_gives_way() {
        let mut queue = NoticeQueue::default();
        for title in ["1", "2", "3", "4"] {
            queue.push(ToastKind::Info, title.into(), None);
        }
        assert_eq!(titles(&queue), ["2", "3", "4"]);
    }

    #[test]
    fn dismiss_removes_only_that_notice() {
        let mut queue = NoticeQueue::default();
        let a = queue.push(ToastKind::Info, "a".into(), None);
        queue.push(ToastKind::Info, "b".into(), None);
        queue.dismiss(a);
        queue.dismiss(a);
        assert_eq!(titles(&queue), ["b"]);
    }
}
