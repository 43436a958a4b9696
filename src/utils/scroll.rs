use log::warn;
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::NodeRef;

/// Smooth-scroll the window so that the section behind `node` sits at the top.
pub fn scroll_to_section(node: &NodeRef) {
    match node.cast::<HtmlElement>() {
        Some(element) => smooth_scroll_to(f64::from(element.offset_top())),
        None => warn!("scroll target is not mounted"),
    }
}

pub fn scroll_to_top() {
    smooth_scroll_to(0.0);
}

fn smooth_scroll_to(top: f64) {
    if let Some(window) = window() {
        let mut options = ScrollToOptions::new();
        options.top(top);
        options.behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Share of an element's height that is inside the viewport, in `0.0..=1.0`.
pub fn visible_fraction(top: f64, bottom: f64, viewport_height: f64) -> f64 {
    let height = bottom - top;
    if height <= 0.0 {
        return 0.0;
    }
    let visible = bottom.min(viewport_height) - top.max(0.0);
    (visible / height).clamp(0.0, 1.0)
}

/// Whether at least `threshold` of the element behind `node` is on screen.
pub fn is_in_view(node: &NodeRef, threshold: f64) -> bool {
    let Some(element) = node.cast::<HtmlElement>() else {
        return false;
    };
    let viewport_height = window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let rect = element.get_bounding_client_rect();
    visible_fraction(rect.top(), rect.bottom(), viewport_height) >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fully_visible_element() {
        assert_eq!(visible_fraction(100.0, 300.0, 800.0), 1.0);
    }

    #[test]
    fn element_below_the_fold() {
        assert_eq!(visible_fraction(900.0, 1200.0, 800.0), 0.0);
    }

    #[test]
    fn element_scrolled_past() {
        assert_eq!(visible_fraction(-500.0, -100.0, 800.0), 0.0);
    }

    #[test]
    fn partially_visible_element() {
        // 1000px tall, top 300px on screen
        assert!((visible_fraction(500.0, 1500.0, 800.0) - 0.3).abs() < 1e-9);
        // taller than the viewport, straddling both edges
        assert!((visible_fraction(-100.0, 1900.0, 800.0) - 0.4).abs() < 1e-9);
    }

    #[test]
    fn degenerate_rect() {
        assert_eq!(visible_fraction(200.0, 200.0, 800.0), 0.0);
    }
}
