//! Shared UI for the Glowizon site: layout shell, pages, form state and
//! the bilingual dictionaries.

pub mod browser;
pub mod forms;
pub mod i18n;
pub mod nav;

mod accordion;
pub use accordion::Accordion;

mod config;
pub use config::{use_config, ConfigProvider, LogLevel, SiteConfig};

mod counter;
pub use counter::{CountUp, Phase, StatCounter};

mod error;
pub use error::{Result, SiteError};

mod fields;

mod footer;
pub use footer::{Footer, SloganBand};

mod header;
pub use header::Header;

mod hero;
pub use hero::{Cta, HeroMediaFull};

mod icons;

mod newsletter;
pub use newsletter::{Newsletter, SubscribeState};

mod pages;
pub use pages::*;

mod reveal;
pub use reveal::{AnimatedSection, Animation};

mod section;

mod theme;
pub use theme::SiteTheme;

mod toast;
pub use toast::{use_toasts, ToastKind, ToastProvider, Toasts};

pub use i18n::{t, t_list, use_i18n, use_lang, I18nProvider, Lang};
