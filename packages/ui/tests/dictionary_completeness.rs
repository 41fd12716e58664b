use std::collections::BTreeSet;

use ui::forms::{Check, ALL_SCHEMAS};
use ui::i18n::{catalog, Entry};
use ui::nav::{NavLink, FOOTER_COLUMNS, MAIN_NAV, PARTNERSHIP_CTA, TOP_BAR};
use ui::{Lang, ProductCategory};

fn assert_present(key: &str) {
    for lang in Lang::ALL {
        assert!(
            catalog().dictionary(lang).get(key).is_some(),
            "`{key}` missing from {}",
            lang.code()
        );
    }
}

fn nav_keys(links: &[NavLink], out: &mut Vec<&'static str>) {
    for link in links {
        out.push(link.key);
        nav_keys(link.dropdown, out);
    }
}

#[test]
fn dictionaries_load_and_are_not_empty() {
    for lang in Lang::ALL {
        assert!(catalog().dictionary(lang).len() > 100, "{}", lang.code());
    }
}

#[test]
fn languages_share_keys_and_shapes() {
    let en = catalog().dictionary(Lang::En);
    let fr = catalog().dictionary(Lang::Fr);

    let en_keys: BTreeSet<_> = en.iter().map(|(k, _)| k).collect();
    let fr_keys: BTreeSet<_> = fr.iter().map(|(k, _)| k).collect();
    let only_en: Vec<_> = en_keys.difference(&fr_keys).collect();
    let only_fr: Vec<_> = fr_keys.difference(&en_keys).collect();
    assert!(only_en.is_empty(), "missing in fr: {only_en:?}");
    assert!(only_fr.is_empty(), "missing in en: {only_fr:?}");

    for (key, entry) in en.iter() {
        match (entry, fr.get(key)) {
            (Entry::Text(_), Some(Entry::Text(_))) => {}
            (Entry::List(a), Some(Entry::List(b))) => {
                assert_eq!(a.len(), b.len(), "`{key}` option counts differ");
            }
            _ => panic!("`{key}` is text in one language and a list in the other"),
        }
    }
}

#[test]
fn every_validation_message_is_translated() {
    for schema in ALL_SCHEMAS {
        for rule in schema.rules {
            assert_present(rule.message);
            if let Check::Email { invalid } = rule.check {
                assert_present(invalid);
            }
        }
    }
}

#[test]
fn every_navigation_label_is_translated() {
    let mut keys = Vec::new();
    nav_keys(TOP_BAR, &mut keys);
    nav_keys(MAIN_NAV, &mut keys);
    nav_keys(PARTNERSHIP_CTA, &mut keys);
    for column in FOOTER_COLUMNS {
        keys.push(column.key);
        nav_keys(column.links, &mut keys);
    }
    for key in keys {
        assert_present(key);
    }
}

#[test]
fn every_category_page_is_translated() {
    for category in ProductCategory::ALL {
        for key in category.content().keys() {
            assert_present(&key);
        }
    }
}

#[test]
fn option_lists_are_lists() {
    let en = catalog().dictionary(Lang::En);
    for (key, entry) in en.iter() {
        if key.ends_with("Options") || key.ends_with("checks") {
            assert!(matches!(entry, Entry::List(items) if !items.is_empty()), "{key}");
        }
    }
}
