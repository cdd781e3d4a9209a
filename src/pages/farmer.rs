//! Farmer dashboard: the authenticated farmer's receipts with a status
//! filter.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::ReceiptStatus;
use crate::state::auth::AuthState;

/// Receipt list for the logged-in farmer. The initial fetch is best-effort;
/// on failure the table simply stays empty.
#[component]
pub fn FarmerDashboard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let receipts = LocalResource::new(move || {
        let token = auth.get().session.token.unwrap_or_default();
        async move {
            match api::farmer_receipts(&token).await {
                Ok(rows) => rows,
                Err(e) => {
                    leptos::logging::warn!("receipt fetch failed: {e}");
                    Vec::new()
                }
            }
        }
    });

    let filter = RwSignal::new(String::new());

    view! {
        <div class="farmer-page">
            <div class="farmer-page__header">
                <h2>"My Receipts"</h2>
                <select
                    class="farmer-page__filter"
                    prop:value=move || filter.get()
                    on:change=move |ev| filter.set(event_target_value(&ev))
                >
                    <option value="">"All"</option>
                    {ReceiptStatus::FILTERS
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </div>

            <Suspense fallback=move || view! { <p>"Loading receipts..."</p> }>
                <table class="receipt-table">
                    <thead>
                        <tr>
                            <th>"Receipt Code"</th>
                            <th>"Crop"</th>
                            <th>"Quantity"</th>
                            <th>"Status"</th>
                            <th>"Linked Loan"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            receipts
                                .get()
                                .map(|rows| {
                                    let wanted = filter.get();
                                    rows.into_iter()
                                        .filter(|r| r.status.matches(&wanted))
                                        .map(|r| {
                                            view! {
                                                <tr>
                                                    <td>{r.receipt_code}</td>
                                                    <td>{r.crop.unwrap_or_default()}</td>
                                                    <td>{r.quantity.map(|q| q.to_string()).unwrap_or_default()}</td>
                                                    <td>{r.status.as_str()}</td>
                                                    <td>{if r.linked_loan { "Yes" } else { "No" }}</td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                })
                        }}
                    </tbody>
                </table>
            </Suspense>
        </div>
    }
}
