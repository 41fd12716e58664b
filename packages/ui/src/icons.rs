use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    ArrowRight,
    Check,
    CheckCircle,
    ChevronDown,
    Clipboard,
    Envelope,
    ExclamationCircle,
    Menu,
    Close,
    XSocial,
    Instagram,
    LinkedIn,
}

impl IconKind {
    fn path(self) -> &'static str {
        match self {
            IconKind::ArrowRight => "M13.5 4.5 21 12m0 0-7.5 7.5M21 12H3",
            IconKind::Check => "m4.5 12.75 6 6 9-13.5",
            IconKind::CheckCircle => "M9 12.75 11.25 15 15 9.75M21 12a9 9 0 1 1-18 0 9 9 0 0 1 18 0Z",
            IconKind::ChevronDown => "m19.5 8.25-7.5 7.5-7.5-7.5",
            IconKind::Clipboard => "M8.25 7.5V6.108c0-1.135.845-2.098 1.976-2.192a48.424 48.424 0 0 1 3.548 0c1.131.094 1.976 1.057 1.976 2.192V7.5M8.25 7.5h7.5M8.25 7.5h-1.5A2.25 2.25 0 0 0 4.5 9.75v9A2.25 2.25 0 0 0 6.75 21h10.5a2.25 2.25 0 0 0 2.25-2.25v-9a2.25 2.25 0 0 0-2.25-2.25h-1.5",
            IconKind::Envelope => "M21.75 6.75v10.5a2.25 2.25 0 0 1-2.25 2.25h-15a2.25 2.25 0 0 1-2.25-2.25V6.75m19.5 0A2.25 2.25 0 0 0 19.5 4.5h-15a2.25 2.25 0 0 0-2.25 2.25m19.5 0-9.75 6.75L2.25 6.75",
            IconKind::ExclamationCircle => "M12 9v3.75m9-.75a9 9 0 1 1-18 0 9 9 0 0 1 18 0Zm-9 3.75h.008v.008H12v-.008Z",
            IconKind::Menu => "M3.75 6.75h16.5M3.75 12h16.5m-16.5 5.25h16.5",
            IconKind::Close => "M6 18 18 6M6 6l12 12",
            IconKind::XSocial => "M4 4l16 16M20 4 4 20",
            IconKind::Instagram => "M7.5 3h9A4.5 4.5 0 0 1 21 7.5v9a4.5 4.5 0 0 1-4.5 4.5h-9A4.5 4.5 0 0 1 3 16.5v-9A4.5 4.5 0 0 1 7.5 3Zm4.5 5.25a3.75 3.75 0 1 0 0 7.5 3.75 3.75 0 0 0 0-7.5ZM17.25 6.75h.008",
            IconKind::LinkedIn => "M4.5 9.75v9.75M4.5 5.25h.008M9 19.5V9.75m0 4.5a3.75 3.75 0 0 1 7.5 0v5.25M3 3h18v18H3Z",
        }
    }
}

#[component]
pub fn Icon(kind: IconKind, #[props(default)] class: String) -> Element {
    rsx! {
        svg {
            class: "icon {class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.5",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            path { d: kind.path() }
        }
    }
}
