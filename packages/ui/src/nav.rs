//! Static navigation tables and the mobile menu state machine.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    /// Translation key for the label.
    pub key: &'static str,
    pub path: &'static str,
    pub dropdown: &'static [NavLink],
}

impl NavLink {
    const fn leaf(key: &'static str, path: &'static str) -> Self {
        Self {
            key,
            path,
            dropdown: &[],
        }
    }

    const fn parent(key: &'static str, path: &'static str, dropdown: &'static [NavLink]) -> Self {
        Self {
            key,
            path,
            dropdown,
        }
    }

    pub fn has_dropdown(&self) -> bool {
        !self.dropdown.is_empty()
    }

    /// `#` marks a page that does not exist yet.
    pub fn is_placeholder(&self) -> bool {
        self.path == "#"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterColumn {
    pub key: &'static str,
    pub links: &'static [NavLink],
}

pub const TOP_BAR: &[NavLink] = &[
    NavLink::leaf("nav.about", "/about"),
    NavLink::leaf("nav.careers", "/careers"),
    NavLink::leaf("nav.contact", "/contact"),
    NavLink::leaf("nav.login", "/login"),
];

const RETAILER_LINKS: &[NavLink] = &[
    NavLink::leaf("nav.retailerProgram", "/retailers"),
    NavLink::leaf("nav.partnerApplication", "/retail-application"),
];

const SUPPLIER_LINKS: &[NavLink] = &[
    NavLink::leaf("nav.supplierProgram", "/suppliers"),
    NavLink::leaf("nav.brandEnquiry", "/supplier-application"),
    NavLink::leaf("nav.brandPartners", "/brand-partners"),
];

const PRODUCT_LINKS: &[NavLink] = &[
    NavLink::leaf("nav.allProducts", "/products"),
    NavLink::leaf("nav.skincare", "/products/dermo-cosmetics"),
    NavLink::leaf("nav.wellness", "/products/wellness-nutrition"),
    NavLink::leaf("nav.beauty", "/products/beauty-care"),
    NavLink::leaf("nav.professionalCare", "/products/professional-salon"),
];

const NEWS_LINKS: &[NavLink] = &[
    NavLink::leaf("nav.blog", "/blog"),
    NavLink::leaf("nav.events", "#"),
];

pub const MAIN_NAV: &[NavLink] = &[
    NavLink::parent("nav.retailers", "/retailers", RETAILER_LINKS),
    NavLink::parent("nav.suppliers", "/suppliers", SUPPLIER_LINKS),
    NavLink::parent("nav.products", "/products", PRODUCT_LINKS),
    NavLink::leaf("nav.services", "/distribution"),
    NavLink::parent("nav.newsResources", "/blog", NEWS_LINKS),
];

pub const PARTNERSHIP_CTA: &[NavLink] = &[
    NavLink::leaf("nav.becomeRetailer", "/retail-application"),
    NavLink::leaf("nav.becomeSupplier", "/supplier-application"),
];

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        key: "footer.customerService",
        links: &[
            NavLink::leaf("footer.contactUs", "/contact"),
            NavLink::leaf("footer.distribution", "/distribution"),
            NavLink::leaf("footer.helpCenter", "#"),
            NavLink::leaf("footer.returns", "#"),
        ],
    },
    FooterColumn {
        key: "footer.aboutGlowizon",
        links: &[
            NavLink::leaf("footer.aboutUs", "/about"),
            NavLink::leaf("nav.careers", "/careers"),
        ],
    },
    FooterColumn {
        key: "footer.legal",
        links: &[
            NavLink::leaf("footer.privacyTerms", "/privacy-terms"),
            NavLink::leaf("footer.cookiePolicy", "#"),
            NavLink::leaf("footer.accessibility", "#"),
        ],
    },
    FooterColumn {
        key: "footer.findOutMore",
        links: &[
            NavLink::leaf("footer.forRetailers", "/retailers"),
            NavLink::leaf("footer.forSuppliers", "/suppliers"),
            NavLink::leaf("footer.ourProducts", "/products"),
            NavLink::leaf("nav.blog", "/blog"),
        ],
    },
];

/// Every routable path, in navigation order.
pub const SITE_PATHS: &[&str] = &[
    "/",
    "/about",
    "/distribution",
    "/suppliers",
    "/supplier-application",
    "/brand-partners",
    "/retailers",
    "/retail-application",
    "/products",
    "/products/dermo-cosmetics",
    "/products/wellness-nutrition",
    "/products/beauty-care",
    "/products/professional-salon",
    "/careers",
    "/contact",
    "/privacy-terms",
    "/blog",
    "/login",
];

/// Exact match, or prefix match for entries that own a dropdown.
pub fn is_active(link: &NavLink, path: &str) -> bool {
    if link.is_placeholder() {
        return false;
    }
    if link.path == path {
        return true;
    }
    link.has_dropdown() && path.starts_with(link.path)
}

/// Plain-text sitemap, one absolute URL per line.
pub fn sitemap(origin: &str) -> String {
    let origin = origin.trim_end_matches('/');
    SITE_PATHS
        .iter()
        .map(|path| format!("{origin}{path}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MobileMenu {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Toggle,
    Backdrop,
    RouteChanged,
}

impl MobileMenu {
    pub fn on(self, event: MenuEvent) -> Self {
        match (self, event) {
            (MobileMenu::Closed, MenuEvent::Toggle) => MobileMenu::Open,
            (MobileMenu::Open, MenuEvent::Toggle) => MobileMenu::Closed,
            (_, MenuEvent::Backdrop | MenuEvent::RouteChanged) => MobileMenu::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MobileMenu::Open
    }

    /// Body scroll is locked exactly while the menu is open.
    pub fn locks_scroll(self) -> bool {
        self.is_open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn main_nav(key: &str) -> &'static NavLink {
        MAIN_NAV.iter().find(|l| l.key == key).unwrap()
    }

    #[test]
    fn parent_entries_match_by_prefix() {
        let products = main_nav("nav.products");
        assert!(is_active(products, "/products"));
        assert!(is_active(products, "/products/beauty-care"));
        assert!(!is_active(products, "/retailers"));
    }

    #[test]
    fn leaf_entries_match_exactly() {
        let services = main_nav("nav.services");
        assert!(is_active(services, "/distribution"));
        assert!(!is_active(services, "/distribution/extra"));
    }

    #[test]
    fn placeholder_is_never_active() {
        let events = main_nav("nav.newsResources").dropdown[1];
        assert!(events.is_placeholder());
        assert!(!is_active(&events, "#"));
        assert!(!is_active(&events, "/blog"));
    }

    #[test]
    fn menu_transitions() {
        let m = MobileMenu::default();
        assert!(!m.is_open());
        let m = m.on(MenuEvent::Toggle);
        assert!(m.is_open() && m.locks_scroll());
        assert_eq!(m.on(MenuEvent::Toggle), MobileMenu::Closed);
        assert_eq!(m.on(MenuEvent::Backdrop), MobileMenu::Closed);
        assert_eq!(m.on(MenuEvent::RouteChanged), MobileMenu::Closed);
        // only toggle opens
        assert_eq!(MobileMenu::Closed.on(MenuEvent::Backdrop), MobileMenu::Closed);
        assert_eq!(MobileMenu::Closed.on(MenuEvent::RouteChanged), MobileMenu::Closed);
    }

    #[test]
    fn sitemap_lists_every_route() {
        let map = sitemap("https://glowizon.com/");
        let lines: Vec<&str> = map.lines().collect();
        assert_eq!(lines.len(), SITE_PATHS.len());
        assert_eq!(lines[0], "https://glowizon.com/");
        assert!(lines.contains(&"https://glowizon.com/brand-partners"));
    }

    #[test]
    fn nav_targets_are_routes() {
        let all = TOP_BAR
            .iter()
            .chain(MAIN_NAV)
            .chain(MAIN_NAV.iter().flat_map(|l| l.dropdown))
            .chain(PARTNERSHIP_CTA)
            .chain(FOOTER_COLUMNS.iter().flat_map(|c| c.links));
        for link in all {
            assert!(
                link.is_placeholder() || SITE_PATHS.contains(&link.path),
                "{} -> {}",
                link.key,
                link.path
            );
        }
    }
}
