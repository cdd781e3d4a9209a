//! Top navigation bar shown on every dashboard.

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::state::session::{Session, SessionStore};
use crate::state::view::View;

/// Brand, current role, and logout. Logout clears the persisted session and
/// returns to the landing view.
#[component]
pub fn Topbar(role: Role) -> impl IntoView {
    let store = expect_context::<Arc<dyn SessionStore>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let view = expect_context::<RwSignal<View>>();

    let on_logout = move |_| {
        store.clear();
        auth.update(|a| a.session = Session::default());
        view.set(View::Landing);
    };

    view! {
        <div class="topbar">
            <div class="topbar__brand">"AgroVault"</div>
            <div class="topbar__role">{role.label()}</div>
            <button class="topbar__logout" on:click=on_logout>
                "Logout"
            </button>
        </div>
    }
}
