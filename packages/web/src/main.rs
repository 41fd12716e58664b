use dioxus::prelude::*;

use ui::browser::{location_hash, scroll_to_top, should_reset_scroll};
use ui::{
    AboutPage, BeautyPage, BlogPage, CareersPage, ConfigProvider, ContactPage, DistributionPage,
    Footer, Header, HomePage, I18nProvider, LoginPage, PrivacyTermsPage, ProductsPage,
    ProfessionalCarePage, RetailApplicationPage, RetailersPage, SiteConfig, SiteTheme, SkincarePage,
    SloganBand, SupplierApplicationPage, SuppliersPage, ToastProvider, WellnessPage,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    HomePage {},
    #[route("/about")]
    AboutPage {},
    #[route("/distribution")]
    DistributionPage {},
    #[route("/suppliers")]
    SuppliersPage {},
    #[route("/supplier-application")]
    SupplierApplicationPage {},
    #[route("/brand-partners")]
    BrandPartners {},
    #[route("/retailers")]
    RetailersPage {},
    #[route("/retail-application")]
    RetailApplicationPage {},
    #[route("/products")]
    ProductsPage {},
    #[route("/products/dermo-cosmetics")]
    SkincarePage {},
    #[route("/products/wellness-nutrition")]
    WellnessPage {},
    #[route("/products/beauty-care")]
    BeautyPage {},
    #[route("/products/professional-salon")]
    ProfessionalCarePage {},
    #[route("/careers")]
    CareersPage {},
    #[route("/contact")]
    ContactPage {},
    #[route("/privacy-terms")]
    PrivacyTermsPage {},
    #[route("/blog")]
    BlogPage {},
    #[route("/login")]
    LoginPage {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    let config = SiteConfig::from_env();
    if let Err(err) = dioxus::logger::init(config.log_level.as_tracing()) {
        eprintln!("logger init failed: {err}");
    }
    install_panic_hook();
    tracing::info!(lang = config.default_lang.code(), "starting site");
    dioxus::launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
    }));
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        ConfigProvider { config: SiteConfig::from_env(),
            I18nProvider {
                ToastProvider {
                    SiteTheme {}
                    Router::<Route> {}
                }
            }
        }
    }
}

/// Brand partners share the suppliers page under a second address.
#[component]
fn BrandPartners() -> Element {
    rsx! { SuppliersPage {} }
}

/// Header, slogan band and footer around every page. Navigation without a
/// fragment starts the new page at the top.
#[component]
fn SiteLayout() -> Element {
    let path = use_route::<Route>().to_string();

    use_effect(use_reactive!(|path| {
        tracing::debug!(%path, "page changed");
        if should_reset_scroll(&location_hash()) {
            scroll_to_top();
        }
    }));

    rsx! {
        Header { path: path }
        main { class: "site_main", Outlet::<Route> {} }
        SloganBand {}
        Footer {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_site_path_parses_to_a_route() {
        for path in ui::nav::SITE_PATHS {
            let route = path.parse::<Route>();
            assert!(route.is_ok(), "{path} has no route");
            assert_eq!(route.ok().map(|r| r.to_string()).as_deref(), Some(*path));
        }
    }

    #[test]
    fn brand_partners_is_its_own_address() {
        assert_eq!(Route::BrandPartners {}.to_string(), "/brand-partners");
        assert_eq!(
            "/brand-partners".parse::<Route>().ok(),
            Some(Route::BrandPartners {})
        );
    }

    #[test]
    fn category_routes_match_category_paths() {
        let routes = [
            Route::SkincarePage {},
            Route::WellnessPage {},
            Route::BeautyPage {},
            Route::ProfessionalCarePage {},
        ];
        for (route, category) in routes.iter().zip(ui::ProductCategory::ALL) {
            assert_eq!(route.to_string(), category.path());
        }
    }
}
