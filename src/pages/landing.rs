//! Landing page with the product blurb and login entry point.

use leptos::prelude::*;

use crate::state::view::View;

/// Landing page — clicking the button switches to the auth view.
#[component]
pub fn LandingPage() -> impl IntoView {
    let view = expect_context::<RwSignal<View>>();

    view! {
        <div class="landing-page">
            <h1>"AgroVault"</h1>
            <p>
                "Manage digital warehouse receipts for farmers and streamline credit \
                 against stored crops. Operators create receipts, bankers pledge loans, \
                 and farmers track everything in one place."
            </p>
            <button class="btn btn--primary" on:click=move |_| view.set(View::Authenticating)>
                "Login"
            </button>
        </div>
    }
}
