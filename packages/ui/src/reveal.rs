use dioxus::prelude::*;

use crate::browser::{use_element_id, use_first_visible};

/// Entrance styles for `AnimatedSection`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Animation {
    #[default]
    FadeInUp,
    SlideInLeft,
    SlideInRight,
    ZoomIn,
}

impl Animation {
    pub fn class(self) -> &'static str {
        match self {
            Animation::FadeInUp => "fade_in_up",
            Animation::SlideInLeft => "slide_in_left",
            Animation::SlideInRight => "slide_in_right",
            Animation::ZoomIn => "zoom_in",
        }
    }

    /// Mirror image of this animation, for content beside a picture.
    pub fn opposite(self) -> Self {
        match self {
            Animation::SlideInLeft => Animation::SlideInRight,
            Animation::SlideInRight => Animation::SlideInLeft,
            other => other,
        }
    }
}

pub fn reveal_class(animation: Animation, visible: bool, extra: &str) -> String {
    let state = if visible { "revealed" } else { "concealed" };
    let mut class = format!("reveal {} {state}", animation.class());
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

pub fn delay_style(delay_ms: u32) -> String {
    if delay_ms == 0 {
        String::new()
    } else {
        format!("transition-delay: {delay_ms}ms;")
    }
}

/// Plays its entrance animation the first time a tenth of it is on screen.
#[component]
pub fn AnimatedSection(
    #[props(default)] animation: Animation,
    #[props(default)] delay: u32,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let id = use_element_id("reveal");
    let visible = use_first_visible(id.clone(), 0.1);

    rsx! {
        div {
            id: "{id}",
            class: reveal_class(animation, visible(), &class),
            style: delay_style(delay),
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_follow_visibility() {
        assert_eq!(
            reveal_class(Animation::ZoomIn, false, ""),
            "reveal zoom_in concealed"
        );
        assert_eq!(
            reveal_class(Animation::FadeInUp, true, "card"),
            "reveal fade_in_up revealed card"
        );
    }

    #[test]
    fn delay_is_optional() {
        assert_eq!(delay_style(0), "");
        assert_eq!(delay_style(200), "transition-delay: 200ms;");
    }

    #[test]
    fn opposite_swaps_slides_only() {
        assert_eq!(Animation::SlideInLeft.opposite(), Animation::SlideInRight);
        assert_eq!(Animation::ZoomIn.opposite(), Animation::ZoomIn);
    }
}
