//! OAuth callback page.
//!
//! The authorization server redirects here with its response in the URL
//! fragment. On mount the page decides where to send the browser and
//! performs one full-document navigation, either into the Pista app or to
//! `/login`. Until the navigation happens it shows a fixed placeholder.

use crate::browser;
use leptos::logging::log;
use leptos::prelude::*;
use pista_bridge_core::Redirector;

/// First line of the placeholder.
pub const PROCESSING_TITLE: &str = "Processing sign-in...";

/// Second line of the placeholder.
pub const PROCESSING_DETAIL: &str = "You will be redirected in a moment.";

/// Callback page - forwards the fragment to the app or to login.
#[component]
pub fn OAuthCallbackPage() -> impl IntoView {
    // No reactive reads, so this runs once, and only in the browser.
    Effect::new(move || {
        let hash = browser::current_hash();
        let decision = Redirector::default().decide(hash.as_deref());
        log!(
            "[oauth-callback] outcome={} to_app={}",
            decision.outcome,
            decision.target.is_app()
        );
        browser::navigate(&decision.target);
    });

    view! {
        <div class="oauth-callback-page">
            <div class="processing-box">
                <p class="processing-title">{PROCESSING_TITLE}</p>
                <p class="processing-detail">{PROCESSING_DETAIL}</p>
            </div>
        </div>
    }
}
