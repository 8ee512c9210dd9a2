//! Page components for the application.
//!
//! Each page is a Leptos component that renders a specific route.

pub mod login;
pub mod oauth_callback;

pub use login::LoginPage;
pub use oauth_callback::OAuthCallbackPage;
