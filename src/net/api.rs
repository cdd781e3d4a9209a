//! JSON request gateway and typed endpoint wrappers.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the
//! configured backend origin. Server-side (SSR): stubs returning a network
//! error since these endpoints are only meaningful in the browser.
//!
//! The gateway itself never touches session state; callers pass the bearer
//! token explicitly.

#![allow(clippy::unused_async)]

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::error::decode_response;
use super::types::{
    Analytics, CreateReceiptRequest, CropType, LoanRequest, LoginRequest, LoginResponse, NewCrop,
    NewWarehouse, Receipt, ReceiptStatus, RegisterRequest, StatusUpdate, User, Warehouse,
};

/// Backend origin baked in at build time. Empty means requests stay relative
/// to the serving origin.
const API_BASE: &str = match option_env!("AGROVAULT_BACKEND_URL") {
    Some(url) => url,
    None => "",
};

/// HTTP methods the backend actually uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
}

#[cfg(feature = "hydrate")]
impl From<Method> for gloo_net::http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
        }
    }
}

/// Perform one backend call and normalize the outcome.
///
/// Always sends a JSON content type; attaches `Authorization: Bearer <token>`
/// only when a token is supplied; serializes `body` to JSON text when
/// present and omits it otherwise.
///
/// # Errors
///
/// `Network` for transport failures, `MalformedResponse` for non-JSON
/// bodies, `RequestFailed` for non-2xx statuses.
pub async fn request(
    path: &str,
    method: Method,
    query: &[(&str, &str)],
    body: Option<Value>,
    token: Option<&str>,
) -> Result<Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE}{path}");
        let mut builder = gloo_net::http::RequestBuilder::new(&url)
            .method(method.into())
            .query(query.iter().copied())
            .header("Content-Type", "application/json");
        if let Some(token) = token {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }

        let request = match body {
            Some(value) => builder.body(value.to_string()),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_response(status, &text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, method, query, body, token);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

fn to_body<T: Serialize>(payload: &T) -> Result<Value, ApiError> {
    serde_json::to_value(payload).map_err(|e| ApiError::Decode(e.to_string()))
}

fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Authenticate and return the bearer token.
///
/// # Errors
///
/// Gateway errors, plus `Decode` when no token field is present.
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let body = to_body(&LoginRequest { username, password })?;
    from_value(request("/auth/login", Method::Post, &[], Some(body), None).await?)
}

/// Create an account; the caller follows up with a normal login.
///
/// # Errors
///
/// Gateway errors.
pub async fn register(account: &RegisterRequest) -> Result<(), ApiError> {
    let body = to_body(account)?;
    request("/auth/register", Method::Post, &[], Some(body), None).await?;
    Ok(())
}

/// Receipts owned by the authenticated farmer.
///
/// # Errors
///
/// Gateway errors, plus `Decode` for an unexpected payload shape.
pub async fn farmer_receipts(token: &str) -> Result<Vec<Receipt>, ApiError> {
    from_value(request("/farmer/receipts", Method::Get, &[], None, Some(token)).await?)
}

/// All receipts visible to the operator.
///
/// # Errors
///
/// Gateway errors, plus `Decode` for an unexpected payload shape.
pub async fn operator_receipts(token: &str) -> Result<Vec<Receipt>, ApiError> {
    from_value(request("/operator/receipts", Method::Get, &[], None, Some(token)).await?)
}

/// Create a receipt; the response includes the generated code and QR image.
///
/// # Errors
///
/// Gateway errors, plus `Decode` for an unexpected payload shape.
pub async fn create_receipt(
    receipt: &CreateReceiptRequest,
    token: &str,
) -> Result<Receipt, ApiError> {
    let body = to_body(receipt)?;
    from_value(request("/operator/receipts", Method::Post, &[], Some(body), Some(token)).await?)
}

/// Transition a receipt into a new lifecycle status.
///
/// # Errors
///
/// Gateway errors.
pub async fn update_receipt_status(
    id: &str,
    status: ReceiptStatus,
    token: &str,
) -> Result<(), ApiError> {
    let path = format!("/operator/receipts/{id}/status");
    let body = to_body(&StatusUpdate { status })?;
    request(&path, Method::Post, &[], Some(body), Some(token)).await?;
    Ok(())
}

/// Search pledgeable receipts by code and/or farmer phone. Both parameters
/// are always sent, empty or not, matching what the backend expects.
///
/// # Errors
///
/// Gateway errors, plus `Decode` for an unexpected payload shape.
pub async fn search_receipts(
    receipt_code: &str,
    farmer_phone: &str,
    token: &str,
) -> Result<Vec<Receipt>, ApiError> {
    let query = [("receiptCode", receipt_code), ("farmerPhone", farmer_phone)];
    from_value(
        request(
            "/banker/receipts/search",
            Method::Get,
            &query,
            None,
            Some(token),
        )
        .await?,
    )
}

/// Pledge a receipt against a new loan.
///
/// # Errors
///
/// Gateway errors.
pub async fn create_loan(
    id: &str,
    principal_amount: f64,
    interest_rate: f64,
    token: &str,
) -> Result<(), ApiError> {
    let path = format!("/banker/receipts/{id}/loan");
    let body = to_body(&LoanRequest {
        principal_amount,
        interest_rate,
    })?;
    request(&path, Method::Post, &[], Some(body), Some(token)).await?;
    Ok(())
}

/// Aggregate counts for the admin dashboard.
///
/// # Errors
///
/// Gateway errors, plus `Decode` for an unexpected payload shape.
pub async fn analytics(token: &str) -> Result<Analytics, ApiError> {
    from_value(request("/admin/analytics", Method::Get, &[], None, Some(token)).await?)
}

/// Crop type reference data.
///
/// # Errors
///
/// Gateway errors, plus `Decode` for an unexpected payload shape.
pub async fn crops(token: &str) -> Result<Vec<CropType>, ApiError> {
    from_value(request("/admin/crops", Method::Get, &[], None, Some(token)).await?)
}

/// Add a crop type.
///
/// # Errors
///
/// Gateway errors.
pub async fn create_crop(name: &str, token: &str) -> Result<(), ApiError> {
    let body = to_body(&NewCrop { name })?;
    request("/admin/crops", Method::Post, &[], Some(body), Some(token)).await?;
    Ok(())
}

/// Warehouse reference data.
///
/// # Errors
///
/// Gateway errors, plus `Decode` for an unexpected payload shape.
pub async fn warehouses(token: &str) -> Result<Vec<Warehouse>, ApiError> {
    from_value(request("/admin/warehouses", Method::Get, &[], None, Some(token)).await?)
}

/// Add a warehouse.
///
/// # Errors
///
/// Gateway errors.
pub async fn create_warehouse(warehouse: &NewWarehouse, token: &str) -> Result<(), ApiError> {
    let body = to_body(warehouse)?;
    request("/admin/warehouses", Method::Post, &[], Some(body), Some(token)).await?;
    Ok(())
}

/// All user accounts; callers filter by role.
///
/// # Errors
///
/// Gateway errors, plus `Decode` for an unexpected payload shape.
pub async fn users(token: &str) -> Result<Vec<User>, ApiError> {
    from_value(request("/admin/users", Method::Get, &[], None, Some(token)).await?)
}
