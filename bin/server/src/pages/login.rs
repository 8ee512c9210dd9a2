//! Login page component.

use leptos::prelude::*;

/// Login page - reached when a callback carried no authorization response.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-box">
                <h1>"Sign in to Pista"</h1>
                <p>"Sign-in did not complete. Open the Pista app and start again."</p>
            </div>
        </div>
    }
}
