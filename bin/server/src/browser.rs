//! Access to the browser location.
//!
//! The only place that reads or writes `window.location`. Without the
//! `hydrate` feature there is no window: reads return `None` and navigation
//! does nothing.

use pista_bridge_core::NavigationTarget;

/// Returns `location.hash`, including its leading `#`, or `None` if there is
/// no window or the hash cannot be read.
#[cfg(feature = "hydrate")]
pub fn current_hash() -> Option<String> {
    let window = web_sys::window()?;
    match window.location().hash() {
        Ok(hash) => Some(hash),
        Err(e) => {
            leptos::logging::warn!("[oauth-callback] failed to read location hash: {e:?}");
            None
        }
    }
}

#[cfg(not(feature = "hydrate"))]
pub fn current_hash() -> Option<String> {
    None
}

/// Performs a full-document navigation to `target`, leaving the client-side
/// router behind.
#[cfg(feature = "hydrate")]
pub fn navigate(target: &NavigationTarget) {
    let Some(window) = web_sys::window() else {
        leptos::logging::warn!("[oauth-callback] no window, cannot navigate");
        return;
    };
    if let Err(e) = window.location().set_href(target.href()) {
        // Deep links carry the token, so only the kind of target is logged.
        leptos::logging::error!(
            "[oauth-callback] navigation failed (to_app={}): {e:?}",
            target.is_app()
        );
    }
}

#[cfg(not(feature = "hydrate"))]
pub fn navigate(_target: &NavigationTarget) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "hydrate"))]
    #[test]
    fn host_build_has_no_location() {
        assert_eq!(current_hash(), None);
        navigate(&NavigationTarget::Login("/login".to_string()));
    }
}
