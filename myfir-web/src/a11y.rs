// Accessibility helpers

/// Update the live region status for screen readers.
///
/// Writes the text content of the `#player-status` element if present so
/// level-up announcements reach assistive technology without stealing focus
/// from the game a child is playing.
pub fn set_status(msg: &str) {
    if let Some(node) = crate::dom::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id("player-status"))
    {
        node.set_text_content(Some(msg));
    }
}
