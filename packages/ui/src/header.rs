use dioxus::prelude::*;

use crate::browser::{set_body_scroll_locked, use_scrolled_past};
use crate::i18n::use_i18n;
use crate::icons::{Icon, IconKind};
use crate::nav::{is_active, MenuEvent, MobileMenu, NavLink, MAIN_NAV, PARTNERSHIP_CTA, TOP_BAR};
use crate::{t, use_lang, Lang};

const SHELL_CSS: Asset = asset!("/assets/styling/shell.css");

fn link_class(base: &str, active: bool) -> String {
    if active {
        format!("{base} active")
    } else {
        base.to_string()
    }
}

/// A router link, or an inert anchor for pages that are not built yet.
#[component]
fn NavTarget(link: NavLink, class: String, children: Element) -> Element {
    if link.is_placeholder() {
        return rsx! {
            a {
                class: "{class}",
                href: "#",
                onclick: |e: MouseEvent| e.prevent_default(),
                {children}
            }
        };
    }
    rsx! {
        Link { class: class, to: link.path.to_string(), {children} }
    }
}

#[component]
fn LanguageSwitcher() -> Element {
    let i18n = use_i18n();
    let current = i18n.lang();
    rsx! {
        div { class: "lang_switch", role: "group", "aria-label": t(current, "nav.language"),
            for lang in Lang::ALL {
                button {
                    key: "{lang.code()}",
                    class: if lang == current { "lang_btn active" } else { "lang_btn" },
                    disabled: lang == current,
                    "aria-pressed": "{lang == current}",
                    onclick: move |_| i18n.set(lang),
                    "{lang.label()}"
                }
            }
        }
    }
}

#[component]
fn MainNavItem(link: NavLink, path: String) -> Element {
    let lang = use_lang();
    let class = link_class("nav_link", is_active(&link, &path));

    if !link.has_dropdown() {
        return rsx! {
            NavTarget { link: link, class: class, {t(lang, link.key)} }
        };
    }
    rsx! {
        div { class: "nav_item has_dropdown",
            NavTarget { link: link, class: class,
                {t(lang, link.key)}
                Icon { kind: IconKind::ChevronDown, class: "nav_chevron" }
            }
            div { class: "nav_dropdown", role: "menu",
                for sub in link.dropdown.iter().copied() {
                    NavTarget {
                        key: "{sub.key}",
                        link: sub,
                        class: link_class("dropdown_link", is_active(&sub, &path)),
                        {t(lang, sub.key)}
                    }
                }
            }
        }
    }
}

#[component]
fn PartnershipMenu() -> Element {
    let lang = use_lang();
    rsx! {
        div { class: "nav_item has_dropdown partnership_menu",
            button { r#type: "button", class: "btn partnership_btn", "aria-haspopup": "menu",
                {t(lang, "nav.startPartnership")}
                Icon { kind: IconKind::ChevronDown, class: "nav_chevron" }
            }
            div { class: "nav_dropdown align_right", role: "menu",
                for link in PARTNERSHIP_CTA.iter().copied() {
                    NavTarget { key: "{link.key}", link: link, class: "dropdown_link", {t(lang, link.key)} }
                }
            }
        }
    }
}

/// Everything from the desktop header, stacked, with dropdowns expanded.
#[component]
fn MobileNav(path: String) -> Element {
    let lang = use_lang();
    rsx! {
        div { id: "mobile-menu", class: "mobile_menu",
            nav { class: "mobile_nav",
                for link in MAIN_NAV.iter().copied() {
                    div { key: "{link.key}", class: "mobile_group",
                        NavTarget {
                            link: link,
                            class: link_class("mobile_link", is_active(&link, &path)),
                            {t(lang, link.key)}
                        }
                        if link.has_dropdown() {
                            div { class: "mobile_sublinks",
                                for sub in link.dropdown.iter().copied() {
                                    NavTarget {
                                        key: "{sub.key}",
                                        link: sub,
                                        class: link_class("mobile_sublink", is_active(&sub, &path)),
                                        {t(lang, sub.key)}
                                    }
                                }
                            }
                        }
                    }
                }
                div { class: "mobile_section",
                    LanguageSwitcher {}
                    for link in TOP_BAR.iter().copied() {
                        NavTarget {
                            key: "{link.key}",
                            link: link,
                            class: link_class("mobile_link", is_active(&link, &path)),
                            {t(lang, link.key)}
                        }
                    }
                }
                div { class: "mobile_section",
                    div { class: "mobile_caption", {t(lang, "nav.startPartnership")} }
                    for link in PARTNERSHIP_CTA.iter().copied() {
                        NavTarget {
                            key: "{link.key}",
                            link: link,
                            class: link_class("mobile_link", is_active(&link, &path)),
                            {t(lang, link.key)}
                        }
                    }
                }
            }
        }
    }
}

/// Sticky site header. `path` is the current route, used for active
/// highlighting and to close the mobile menu after navigation.
#[component]
pub fn Header(path: String) -> Element {
    let lang = use_lang();
    let mut menu = use_signal(MobileMenu::default);
    let scrolled = use_scrolled_past(10.0);

    use_effect(use_reactive!(|path| {
        tracing::trace!(%path, "route changed, closing mobile menu");
        let next = menu.peek().on(MenuEvent::RouteChanged);
        menu.set(next);
    }));
    use_effect(move || set_body_scroll_locked(menu().locks_scroll()));
    use_drop(|| set_body_scroll_locked(false));

    let open = menu().is_open();
    let toggle_label = if open {
        t(lang, "nav.closeMenu")
    } else {
        t(lang, "nav.openMenu")
    };

    rsx! {
        document::Link { rel: "stylesheet", href: SHELL_CSS }

        header { class: if scrolled() { "site_header scrolled" } else { "site_header" },
            div { class: "top_bar",
                div { class: "container top_bar_inner",
                    LanguageSwitcher {}
                    for link in TOP_BAR.iter().copied() {
                        NavTarget {
                            key: "{link.key}",
                            link: link,
                            class: link_class("top_link", is_active(&link, &path)),
                            {t(lang, link.key)}
                        }
                    }
                }
            }

            div { class: "container header_main",
                Link { class: "brand", to: "/".to_string(), "Glowizon" }

                div { class: "desktop_nav",
                    nav { class: "main_nav", "aria-label": t(lang, "nav.mainNavigation"),
                        for link in MAIN_NAV.iter().copied() {
                            MainNavItem { key: "{link.key}", link: link, path: path.clone() }
                        }
                    }
                    PartnershipMenu {}
                }

                button {
                    r#type: "button",
                    class: "menu_toggle",
                    "aria-label": "{toggle_label}",
                    "aria-expanded": "{open}",
                    "aria-controls": "mobile-menu",
                    onclick: move |_| {
                        let next = menu.peek().on(MenuEvent::Toggle);
                        menu.set(next);
                    },
                    if open {
                        Icon { kind: IconKind::Close }
                    } else {
                        Icon { kind: IconKind::Menu }
                    }
                }
            }

            if open {
                MobileNav { path: path.clone() }
            }
        }

        if open {
            div {
                class: "menu_backdrop",
                "aria-hidden": "true",
                onclick: move |_| {
                    let next = menu.peek().on(MenuEvent::Backdrop);
                    menu.set(next);
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_links_get_the_modifier() {
        assert_eq!(link_class("nav_link", false), "nav_link");
        assert_eq!(link_class("nav_link", true), "nav_link active");
    }
}
