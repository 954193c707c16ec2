//! Full-page navigation.

/// Send the browser to `url`, leaving the application.
///
/// Returns `false` when the page stays where it is, in which case the caller
/// still owns the form.
#[cfg(target_arch = "wasm32")]
pub fn set_location(url: &str) -> bool {
    let Some(window) = web_sys::window() else {
        crate::log_error!("No window to navigate to {}", url);
        return false;
    };
    if let Err(e) = window.location().set_href(url) {
        crate::log_error!("Navigation to {} failed: {:?}", url, e);
        return false;
    }
    true
}

/// Desktop builds have no page to leave.
#[cfg(not(target_arch = "wasm32"))]
pub fn set_location(url: &str) -> bool {
    crate::log_warn!("Cannot navigate to {} outside a browser", url);
    false
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn desktop_reports_that_it_stayed() {
        assert!(!set_location("/g/abc/foo"));
    }
}
