use dioxus::prelude::*;

const THEME_CSS: Asset = asset!("/assets/styling/theme.css");
const FONTS: &str = "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;700&family=Manrope:wght@600;700;800&display=swap";

/// Fonts, palette and base typography shared by every page.
#[component]
pub fn SiteTheme() -> Element {
    rsx! {
        document::Link { rel: "preconnect", href: "https://fonts.gstatic.com" }
        document::Link { rel: "stylesheet", href: FONTS }
        document::Link { rel: "stylesheet", href: THEME_CSS }
    }
}
