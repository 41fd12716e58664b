use dioxus::prelude::*;

use crate::section::ContentSection;
use crate::{t, use_lang, HeroMediaFull};

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1589216532372-1c2a36790039?q=80&w=2832&auto=format&fit=crop";
const PRIVACY_EMAIL: &str = "privacy@glowizon.com";
const LEGAL_EMAIL: &str = "legal@glowizon.com";
const PHONE: &str = "+1 (980) 425-1097";

const POLICY_SECTIONS: usize = 4;
const TERMS_SECTIONS: usize = 7;

#[component]
pub fn PrivacyTermsPage() -> Element {
    let lang = use_lang();
    let policy = move |field: String| t(lang, &format!("privacy.policy.{field}"));
    let terms = move |field: String| t(lang, &format!("privacy.terms.{field}"));

    rsx! {
        HeroMediaFull {
            headline: t(lang, "privacy.hero.headline"),
            image_src: HERO_IMAGE.to_string(),
            alt_text: t(lang, "privacy.hero.alt"),
        }

        ContentSection {
            article { class: "legal_prose narrow",
                h2 { {t(lang, "privacy.overview.title")} }
                p { {t(lang, "privacy.overview.body")} }

                h2 { {t(lang, "privacy.policy.title")} }
                for i in 1..=POLICY_SECTIONS {
                    div { key: "policy-{i}",
                        h3 { {policy(format!("h{i}"))} }
                        p {
                            {policy(format!("p{i}"))}
                            if i == POLICY_SECTIONS {
                                " "
                                a { href: "mailto:{PRIVACY_EMAIL}", "{PRIVACY_EMAIL}" }
                                "."
                            }
                        }
                        // the data-use list follows the second section
                        if i == 2 {
                            ul {
                                for j in 1..=3 {
                                    li { key: "{j}", {policy(format!("li{j}"))} }
                                }
                            }
                        }
                    }
                }

                h2 { {t(lang, "privacy.terms.title")} }
                for i in 1..=TERMS_SECTIONS {
                    div { key: "terms-{i}",
                        h3 { {terms(format!("h{i}"))} }
                        p { {terms(format!("p{i}"))} }
                    }
                }

                h2 { {t(lang, "privacy.contact.title")} }
                p { {t(lang, "privacy.contact.body")} }
                ul {
                    li {
                        {t(lang, "privacy.contact.email")}
                        " "
                        a { href: "mailto:{LEGAL_EMAIL}", "{LEGAL_EMAIL}" }
                    }
                    li { {t(lang, "privacy.contact.phone")} " {PHONE}" }
                }
            }
        }
    }
}
