//! Thin bridge to the browser: storage, scrolling, clipboard and the
//! observers behind reveal-on-scroll. Native builds get inert fallbacks.

use dioxus::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{Result, SiteError};

/// Minimal JS string escape for embedding into a double-quoted string.
pub(crate) fn js_escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

/// Scroll to top on navigation unless the target carries a fragment.
pub fn should_reset_scroll(hash: &str) -> bool {
    hash.trim_start_matches('#').is_empty()
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn storage_get(key: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        local_storage()?.get_item(key).ok().flatten().filter(|v| !v.is_empty())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
        None
    }
}

pub fn storage_set(key: &str, value: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let stored = local_storage().map(|s| s.set_item(key, value));
        if !matches!(stored, Some(Ok(()))) {
            tracing::debug!(key, "localStorage write skipped");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (key, value);
    }
}

pub fn navigator_language() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?.navigator().language()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

pub fn location_hash() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

pub fn scroll_to_top() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// Lock or release page scrolling behind an overlay.
pub fn set_body_scroll_locked(locked: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            tracing::debug!("no document body, scroll lock skipped");
            return;
        };
        let style = body.style();
        let applied = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if applied.is_err() {
            tracing::debug!(locked, "body overflow update failed");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = locked;
    }
}

/// Smooth-scroll the element with `id` to the top of the viewport.
pub fn scroll_into_view(id: &str) {
    let js = format!(
        r#"document.getElementById("{}")?.scrollIntoView({{ behavior: "smooth", block: "start" }});"#,
        js_escape(id)
    );
    let _ = document::eval(&js);
}

/// Write `text` to the clipboard.
pub async fn copy_text(text: &str) -> Result<()> {
    let js = format!(
        r#"
        try {{
          await navigator.clipboard.writeText("{}");
          return "";
        }} catch (e) {{
          return String(e || "denied");
        }}
        "#,
        js_escape(text)
    );
    let outcome = document::eval(&js).await?;
    match outcome.as_str() {
        Some("") => Ok(()),
        Some(reason) => Err(SiteError::Clipboard(reason.to_string())),
        None => Err(SiteError::Clipboard(outcome.to_string())),
    }
}

/// Blocking browser alert.
pub async fn alert(message: &str) {
    let js = format!(r#"window.alert("{}"); return "";"#, js_escape(message));
    if let Err(e) = document::eval(&js).await {
        tracing::debug!("alert failed: {e}");
    }
}

pub async fn current_year() -> Option<i64> {
    document::eval("return new Date().getFullYear();")
        .await
        .ok()
        .and_then(|v| v.as_i64())
}

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

/// A DOM id stable for the lifetime of the calling component.
pub fn use_element_id(prefix: &str) -> String {
    let prefix = prefix.to_string();
    use_hook(move || {
        let n = NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed);
        format!("{prefix}-{n}")
    })
}

/// Tracks `prefers-reduced-motion: reduce`, following live changes.
pub fn use_prefers_reduced_motion() -> Signal<bool> {
    let mut reduced = use_signal(|| false);

    use_effect(move || {
        spawn(async move {
            let mut eval = document::eval(
                r#"
                if (!window.matchMedia) { dioxus.send(false); return; }
                const mq = window.matchMedia("(prefers-reduced-motion: reduce)");
                dioxus.send(mq.matches);
                mq.addEventListener("change", (e) => dioxus.send(e.matches));
                await new Promise(() => {});
                "#,
            );
            while let Ok(matches) = eval.recv::<bool>().await {
                reduced.set(matches);
            }
        });
    });

    reduced
}

/// Flips to `true` the first time the element with `id` has at least
/// `threshold` of its area in the viewport, then stops observing.
pub fn use_first_visible(id: String, threshold: f64) -> Signal<bool> {
    let mut visible = use_signal(|| false);

    use_effect(move || {
        let id = id.clone();
        spawn(async move {
            let js = format!(
                r#"
                const el = document.getElementById("{}");
                if (!el || !("IntersectionObserver" in window)) {{ dioxus.send(true); return; }}
                const obs = new IntersectionObserver((entries) => {{
                  if (entries.some((e) => e.isIntersecting)) {{
                    obs.disconnect();
                    dioxus.send(true);
                  }}
                }}, {{ threshold: {} }});
                obs.observe(el);
                await new Promise(() => {{}});
                "#,
                js_escape(&id),
                threshold
            );
            let mut eval = document::eval(&js);
            if let Ok(true) = eval.recv::<bool>().await {
                visible.set(true);
            }
        });
    });

    visible
}

/// `true` while the page is scrolled past `offset` pixels.
pub fn use_scrolled_past(offset: f64) -> Signal<bool> {
    let mut scrolled = use_signal(|| false);

    use_effect(move || {
        spawn(async move {
            let js = format!(
                r#"
                let last = null;
                const report = () => {{
                  const now = window.scrollY > {offset};
                  if (now !== last) {{ last = now; dioxus.send(now); }}
                }};
                window.addEventListener("scroll", report, {{ passive: true }});
                report();
                await new Promise(() => {{}});
                "#
            );
            let mut eval = document::eval(&js);
            while let Ok(now) = eval.recv::<bool>().await {
                scrolled.set(now);
            }
        });
    });

    scrolled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_escape_quotes_and_backslashes() {
        let s = r#"a"b\c"#;
        assert_eq!(js_escape(s), r#"a\"b\\c"#);
    }

    #[test]
    fn js_escape_newlines() {
        assert_eq!(js_escape("a\nb\r"), "a\\nb\\r");
    }

    #[test]
    fn scroll_reset_only_without_fragment() {
        assert!(should_reset_scroll(""));
        assert!(should_reset_scroll("#"));
        assert!(!should_reset_scroll("#contact-form"));
    }

    #[test]
    fn native_storage_is_inert() {
        storage_set("k", "v");
        assert_eq!(storage_get("k"), None);
        assert_eq!(location_hash(), "");
    }
}
