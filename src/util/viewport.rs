//! Viewport containment test.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Client-space bounding box, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

/// Whether `rect` lies fully inside the viewport grown by `offset` on every
/// side.
#[must_use]
pub fn is_in_viewport(rect: Rect, viewport_width: f64, viewport_height: f64, offset: f64) -> bool {
    rect.top >= -offset
        && rect.left >= -offset
        && rect.bottom <= viewport_height + offset
        && rect.right <= viewport_width + offset
}

/// Browser half of [`is_in_viewport`] for a live element.
#[cfg(feature = "hydrate")]
pub fn element_in_viewport(element: &web_sys::Element, offset: f64) -> bool {
    let bounds = element.get_bounding_client_rect();
    let rect = Rect { top: bounds.top(), left: bounds.left(), bottom: bounds.bottom(), right: bounds.right() };
    let (width, height) = crate::util::dom::viewport_size();
    is_in_viewport(rect, width, height, offset)
}
