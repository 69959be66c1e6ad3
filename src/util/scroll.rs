//! Smooth scrolling for elements held by `NodeRef`.

/// Scroll `el` into view with smooth behavior.
#[cfg(feature = "csr")]
pub fn scroll_into_view_smooth(el: &web_sys::Element) {
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}
