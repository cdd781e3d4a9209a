//! Operator dashboard: receipt creation and status transitions.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{CreateReceiptRequest, Receipt, ReceiptStatus, Role};
use crate::state::auth::AuthState;

/// Create-receipt form plus the warehouse receipt list with per-receipt
/// status transition buttons. Reference data loads are best-effort.
#[component]
pub fn OperatorDashboard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let token = move || auth.get().session.token.unwrap_or_default();

    let crops = LocalResource::new(move || {
        let token = token();
        async move {
            match api::crops(&token).await {
                Ok(list) => list,
                Err(e) => {
                    leptos::logging::warn!("crop fetch failed: {e}");
                    Vec::new()
                }
            }
        }
    });
    let warehouses = LocalResource::new(move || {
        let token = token();
        async move {
            match api::warehouses(&token).await {
                Ok(list) => list,
                Err(e) => {
                    leptos::logging::warn!("warehouse fetch failed: {e}");
                    Vec::new()
                }
            }
        }
    });
    let farmers = LocalResource::new(move || {
        let token = token();
        async move {
            match api::users(&token).await {
                Ok(list) => list
                    .into_iter()
                    .filter(|u| u.role == Some(Role::Farmer))
                    .collect(),
                Err(e) => {
                    leptos::logging::warn!("user fetch failed: {e}");
                    Vec::new()
                }
            }
        }
    });
    let receipts = LocalResource::new(move || {
        let token = token();
        async move {
            match api::operator_receipts(&token).await {
                Ok(list) => list,
                Err(e) => {
                    leptos::logging::warn!("receipt fetch failed: {e}");
                    Vec::new()
                }
            }
        }
    });

    let farmer_id = RwSignal::new(String::new());
    let crop_type_id = RwSignal::new(String::new());
    let warehouse_id = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::new());
    let grade = RwSignal::new("A".to_owned());
    let created = RwSignal::new(None::<Receipt>);
    let error = RwSignal::new(String::new());

    let on_submit = {
        let receipts = receipts.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            error.set(String::new());
            let Ok(amount) = quantity.get().trim().parse::<f64>() else {
                error.set("Quantity must be a number".to_owned());
                return;
            };
            let receipt = CreateReceiptRequest {
                farmer_id: farmer_id.get(),
                crop_type_id: crop_type_id.get(),
                warehouse_id: warehouse_id.get(),
                quantity: amount,
                grade: grade.get(),
            };
            let token = token();
            let receipts = receipts.clone();
            leptos::task::spawn_local(async move {
                match api::create_receipt(&receipt, &token).await {
                    Ok(new_receipt) => {
                        created.set(Some(new_receipt));
                        receipts.refetch();
                    }
                    Err(e) => error.set(e.to_string()),
                }
            });
        }
    };

    let set_status = {
        let receipts = receipts.clone();
        Callback::new(move |(id, status): (String, ReceiptStatus)| {
            let token = token();
            let receipts = receipts.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = api::update_receipt_status(&id, status, &token).await {
                    error.set(e.to_string());
                }
                receipts.refetch();
            });
        })
    };

    view! {
        <div class="operator-page">
            <div class="operator-page__create">
                <h2>"Create new receipt"</h2>
                <form class="operator-page__form" on:submit=on_submit>
                    <select
                        prop:value=move || farmer_id.get()
                        on:change=move |ev| farmer_id.set(event_target_value(&ev))
                    >
                        <option value="">"Select Farmer"</option>
                        {move || {
                            farmers
                                .get()
                                .map(|list| {
                                    list.into_iter()
                                        .map(|f| {
                                            view! {
                                                <option value=f.id.clone()>
                                                    {format!("{} ({})", f.name, f.phone)}
                                                </option>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                })
                        }}
                    </select>
                    <select
                        prop:value=move || crop_type_id.get()
                        on:change=move |ev| crop_type_id.set(event_target_value(&ev))
                    >
                        <option value="">"Crop"</option>
                        {move || {
                            crops
                                .get()
                                .map(|list| {
                                    list.into_iter()
                                        .map(|c| view! { <option value=c.id.clone()>{c.name}</option> })
                                        .collect::<Vec<_>>()
                                })
                        }}
                    </select>
                    <select
                        prop:value=move || warehouse_id.get()
                        on:change=move |ev| warehouse_id.set(event_target_value(&ev))
                    >
                        <option value="">"Warehouse"</option>
                        {move || {
                            warehouses
                                .get()
                                .map(|list| {
                                    list.into_iter()
                                        .map(|w| view! { <option value=w.id.clone()>{w.name}</option> })
                                        .collect::<Vec<_>>()
                                })
                        }}
                    </select>
                    <input
                        placeholder="Quantity"
                        prop:value=move || quantity.get()
                        on:input=move |ev| quantity.set(event_target_value(&ev))
                    />
                    <input
                        placeholder="Grade"
                        prop:value=move || grade.get()
                        on:input=move |ev| grade.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit">
                        "Create"
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <div class="operator-page__error">{move || error.get()}</div>
                </Show>
                {move || {
                    created
                        .get()
                        .map(|r| {
                            view! {
                                <div class="operator-page__created">
                                    <div class="operator-page__created-title">"Receipt created"</div>
                                    <div>{format!("Code: {}", r.receipt_code)}</div>
                                    {r.qr.map(|qr| view! { <img alt="QR" src=qr class="operator-page__qr"/> })}
                                </div>
                            }
                        })
                }}
            </div>

            <div class="operator-page__list">
                <h2>"Warehouse receipts"</h2>
                <Suspense fallback=move || view! { <p>"Loading receipts..."</p> }>
                    {move || {
                        receipts
                            .get()
                            .map(|rows| {
                                rows.into_iter()
                                    .map(|r| {
                                        let id = r.id.clone();
                                        view! {
                                            <div class="receipt-card">
                                                <div class="receipt-card__head">
                                                    <span class="receipt-card__code">{r.receipt_code.clone()}</span>
                                                    <span class="receipt-card__status">{r.status.as_str()}</span>
                                                </div>
                                                <div class="receipt-card__actions">
                                                    {ReceiptStatus::TRANSITIONS
                                                        .into_iter()
                                                        .map(|s| {
                                                            let id = id.clone();
                                                            view! {
                                                                <button
                                                                    class="btn btn--small"
                                                                    on:click=move |_| set_status.run((id.clone(), s))
                                                                >
                                                                    {s.as_str()}
                                                                </button>
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            })
                    }}
                </Suspense>
            </div>
        </div>
    }
}
