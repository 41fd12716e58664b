use dioxus::prelude::*;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::error::{Result, SiteError};

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Lang {
    En,
    Fr,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Fr];

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Fr => "fr",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Some(Lang::En),
            "fr" | "fr-fr" | "fr-ca" => Some(Lang::Fr),
            _ => None,
        }
    }

    /// Label shown on the language switch.
    pub fn label(self) -> &'static str {
        match self {
            Lang::En => "EN",
            Lang::Fr => "FR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Text(String),
    List(Vec<String>),
}

/// One language's strings, keyed by dotted path (`home.hero.headline`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: BTreeMap<String, Entry>,
}

impl Dictionary {
    /// Parse a nested JSON document. Objects nest, strings become text
    /// entries, arrays of strings become list entries. Anything else is
    /// rejected.
    pub fn from_json(lang: Lang, source: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(source).map_err(|e| SiteError::Dictionary {
            lang,
            reason: e.to_string(),
        })?;
        let Value::Object(map) = root else {
            return Err(SiteError::Dictionary {
                lang,
                reason: "top level must be an object".to_string(),
            });
        };

        let mut entries = BTreeMap::new();
        for (key, value) in map {
            flatten_into(lang, key, value, &mut entries)?;
        }
        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn flatten_into(
    lang: Lang,
    prefix: String,
    value: Value,
    out: &mut BTreeMap<String, Entry>,
) -> Result<()> {
    match value {
        Value::String(text) => {
            out.insert(prefix, Entry::Text(text));
        }
        Value::Array(items) => {
            let mut list = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(s) => list.push(s),
                    other => {
                        return Err(SiteError::Dictionary {
                            lang,
                            reason: format!("`{prefix}` holds a non-string list item: {other}"),
                        })
                    }
                }
            }
            out.insert(prefix, Entry::List(list));
        }
        Value::Object(map) => {
            for (key, child) in map {
                flatten_into(lang, format!("{prefix}.{key}"), child, out)?;
            }
        }
        other => {
            return Err(SiteError::Dictionary {
                lang,
                reason: format!("`{prefix}` is neither text nor a list: {other}"),
            })
        }
    }
    Ok(())
}

/// Both dictionaries.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    en: Dictionary,
    fr: Dictionary,
}

impl Catalog {
    pub fn new(en: Dictionary, fr: Dictionary) -> Self {
        Self { en, fr }
    }

    pub fn dictionary(&self, lang: Lang) -> &Dictionary {
        match lang {
            Lang::En => &self.en,
            Lang::Fr => &self.fr,
        }
    }
}

const EN_JSON: &str = include_str!("../i18n/en.json");
const FR_JSON: &str = include_str!("../i18n/fr.json");

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::new(load(Lang::En, EN_JSON), load(Lang::Fr, FR_JSON))
});

fn load(lang: Lang, source: &str) -> Dictionary {
    match Dictionary::from_json(lang, source) {
        Ok(dict) => dict,
        Err(e) => {
            tracing::error!("{e}");
            Dictionary::default()
        }
    }
}

/// The embedded dictionaries, parsed on first use.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Text(&'a str),
    List(&'a [String]),
}

/// Resolve `key` for `lang`. A missing key resolves to itself.
pub fn lookup<'a>(catalog: &'a Catalog, lang: Lang, key: &'a str) -> Lookup<'a> {
    match catalog.dictionary(lang).get(key) {
        Some(Entry::Text(text)) => Lookup::Text(text),
        Some(Entry::List(items)) => Lookup::List(items),
        None => {
            tracing::debug!(lang = lang.code(), key, "missing translation");
            Lookup::Text(key)
        }
    }
}

/// Translate a key to text.
pub fn t(lang: Lang, key: &str) -> String {
    match lookup(catalog(), lang, key) {
        Lookup::Text(text) => text.to_string(),
        Lookup::List(items) => items.join(" "),
    }
}

/// Translate a key to a list of strings.
pub fn t_list(lang: Lang, key: &str) -> Vec<String> {
    match lookup(catalog(), lang, key) {
        Lookup::Text(text) => vec![text.to_string()],
        Lookup::List(items) => items.to_vec(),
    }
}

const LANG_STORAGE_KEY: &str = "glowizon_lang";

/// Handle on the active language. Every consumer re-renders on `set`.
#[derive(Clone, Copy, PartialEq)]
pub struct I18n {
    lang: Signal<Lang>,
}

impl I18n {
    pub fn lang(&self) -> Lang {
        (self.lang)()
    }

    pub fn set(&self, next: Lang) {
        let mut lang = self.lang;
        if *lang.peek() == next {
            return;
        }
        tracing::info!(lang = next.code(), "language switched");
        lang.set(next);
        crate::browser::storage_set(LANG_STORAGE_KEY, next.code());
    }
}

/// Provide the active language, restoring the saved choice (or the
/// browser's language) after mount.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let fallback = crate::use_config().default_lang;
    let lang = use_signal(move || fallback);
    let i18n = use_context_provider(|| I18n { lang });

    use_effect(move || {
        let saved = crate::browser::storage_get(LANG_STORAGE_KEY)
            .or_else(crate::browser::navigator_language)
            .and_then(|code| preferred_lang(&code));
        if let Some(next) = saved {
            let mut lang = i18n.lang;
            lang.set(next);
        }
    });

    rsx! { {children} }
}

/// Map a stored code or a browser locale such as `fr-BE` to a language.
fn preferred_lang(code: &str) -> Option<Lang> {
    Lang::from_code(code).or_else(|| {
        let primary = code.split(['-', '_']).next()?;
        Lang::from_code(primary)
    })
}

pub fn use_i18n() -> I18n {
    if let Some(ctx) = try_use_context::<I18n>() {
        return ctx;
    }

    tracing::warn!("missing I18nProvider context, using a local English signal");
    let lang = use_signal(|| Lang::En);
    I18n { lang }
}

/// Current language, subscribing the caller to changes.
pub fn use_lang() -> Lang {
    use_i18n().lang()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        let en = Dictionary::from_json(
            Lang::En,
            r#"{"nav": {"about": "About Us"}, "home": {"points": ["One", "Two"]}}"#,
        )
        .unwrap();
        let fr = Dictionary::from_json(Lang::Fr, r#"{"nav": {"about": "À propos"}}"#).unwrap();
        Catalog::new(en, fr)
    }

    #[test]
    fn flattens_nested_keys() {
        let en = sample().dictionary(Lang::En).clone();
        assert_eq!(en.get("nav.about"), Some(&Entry::Text("About Us".into())));
        assert_eq!(
            en.get("home.points"),
            Some(&Entry::List(vec!["One".into(), "Two".into()]))
        );
        assert_eq!(en.len(), 2);
    }

    #[test]
    fn lookup_text_and_list() {
        let c = sample();
        assert_eq!(lookup(&c, Lang::Fr, "nav.about"), Lookup::Text("À propos"));
        assert!(matches!(lookup(&c, Lang::En, "home.points"), Lookup::List(items) if items.len() == 2));
    }

    #[test]
    fn missing_key_falls_back_to_key_without_crossing_languages() {
        let c = sample();
        assert_eq!(lookup(&c, Lang::En, "no.such.key"), Lookup::Text("no.such.key"));
        // present in English only
        assert_eq!(lookup(&c, Lang::Fr, "home.points"), Lookup::Text("home.points"));
    }

    #[test]
    fn rejects_numbers_and_nested_lists() {
        assert!(Dictionary::from_json(Lang::En, r#"{"a": 1}"#).is_err());
        assert!(Dictionary::from_json(Lang::En, r#"{"a": [["x"]]}"#).is_err());
        assert!(Dictionary::from_json(Lang::En, r#"["x"]"#).is_err());
        assert!(Dictionary::from_json(Lang::En, "{").is_err());
    }

    #[test]
    fn lang_codes() {
        assert_eq!(Lang::from_code("FR-fr"), Some(Lang::Fr));
        assert_eq!(Lang::from_code("en-GB"), Some(Lang::En));
        assert_eq!(Lang::from_code("de"), None);
        assert_eq!(preferred_lang("fr-BE"), Some(Lang::Fr));
        assert_eq!(preferred_lang("en_AU"), Some(Lang::En));
        assert_eq!(preferred_lang("es-ES"), None);
    }

    #[test]
    fn embedded_dictionaries_translate() {
        assert_eq!(t(Lang::En, "nav.about"), "About Us");
        assert_eq!(t(Lang::Fr, "nav.about"), "À propos");
        assert_eq!(t(Lang::En, "missing.key"), "missing.key");
        assert_eq!(t_list(Lang::En, "missing.key"), vec!["missing.key".to_string()]);
    }
}
