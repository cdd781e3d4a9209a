use serde_json::json;

use super::*;

// =============================================================
// Login token field spellings
// =============================================================

#[test]
fn login_token_decodes_from_access_token() {
    let resp: LoginResponse = serde_json::from_value(json!({"access_token": "T1"})).unwrap();
    assert_eq!(resp.access_token, "T1");
}

#[test]
fn login_token_decodes_from_token() {
    let resp: LoginResponse = serde_json::from_value(json!({"token": "T2"})).unwrap();
    assert_eq!(resp.access_token, "T2");
}

#[test]
fn login_token_decodes_from_camel_case_access_token() {
    let resp: LoginResponse = serde_json::from_value(json!({"accessToken": "T3"})).unwrap();
    assert_eq!(resp.access_token, "T3");
}

#[test]
fn login_without_any_token_field_is_an_error() {
    let result = serde_json::from_value::<LoginResponse>(json!({"user": "a@b.com"}));
    assert!(result.is_err());
}

// =============================================================
// Request serialization shapes
// =============================================================

#[test]
fn create_receipt_sends_quantity_as_number() {
    let value = serde_json::to_value(CreateReceiptRequest {
        farmer_id: "1".to_owned(),
        crop_type_id: "2".to_owned(),
        warehouse_id: "3".to_owned(),
        quantity: 50.0,
        grade: "A".to_owned(),
    })
    .unwrap();
    assert!(value["quantity"].is_number());
    assert_eq!(
        value,
        json!({
            "farmerId": "1",
            "cropTypeId": "2",
            "warehouseId": "3",
            "quantity": 50.0,
            "grade": "A",
        })
    );
}

#[test]
fn loan_request_uses_camel_case_numeric_fields() {
    let value = serde_json::to_value(LoanRequest {
        principal_amount: 10_000.0,
        interest_rate: 8.5,
    })
    .unwrap();
    assert_eq!(
        value,
        json!({"principalAmount": 10_000.0, "interestRate": 8.5})
    );
}

#[test]
fn register_request_serializes_role_lowercase() {
    let value = serde_json::to_value(RegisterRequest {
        name: "A".to_owned(),
        email: "a@b.com".to_owned(),
        phone: "123".to_owned(),
        password: "x".to_owned(),
        role: Role::Banker,
    })
    .unwrap();
    assert_eq!(value["role"], json!("banker"));
}

#[test]
fn status_update_serializes_wire_spelling() {
    let value = serde_json::to_value(StatusUpdate {
        status: ReceiptStatus::PartiallySold,
    })
    .unwrap();
    assert_eq!(value, json!({"status": "partially_sold"}));
}

// =============================================================
// Receipt decoding
// =============================================================

#[test]
fn receipt_decodes_with_minimal_fields() {
    let receipt: Receipt =
        serde_json::from_value(json!({"id": "7", "receiptCode": "WR-7", "status": "stored"}))
            .unwrap();
    assert_eq!(receipt.id, "7");
    assert_eq!(receipt.receipt_code, "WR-7");
    assert_eq!(receipt.status, ReceiptStatus::Stored);
    assert!(receipt.crop.is_none());
    assert!(!receipt.pledged);
    assert!(!receipt.linked_loan);
}

#[test]
fn receipt_accepts_numeric_id() {
    let receipt: Receipt =
        serde_json::from_value(json!({"id": 42, "status": "pledged"})).unwrap();
    assert_eq!(receipt.id, "42");
}

#[test]
fn unknown_status_decodes_to_unknown_instead_of_failing() {
    let receipt: Receipt =
        serde_json::from_value(json!({"id": "1", "status": "in_transit"})).unwrap();
    assert_eq!(receipt.status, ReceiptStatus::Unknown);
}

#[test]
fn receipt_status_wire_spellings_round_trip() {
    for status in ReceiptStatus::FILTERS {
        let value = serde_json::to_value(status).unwrap();
        assert_eq!(value, json!(status.as_str()));
        let back: ReceiptStatus = serde_json::from_value(value).unwrap();
        assert_eq!(back, status);
    }
}

#[test]
fn status_filter_empty_matches_everything() {
    for status in ReceiptStatus::FILTERS {
        assert!(status.matches(""));
    }
}

#[test]
fn status_filter_matches_exact_spelling_only() {
    assert!(ReceiptStatus::PartiallySold.matches("partially_sold"));
    assert!(!ReceiptStatus::PartiallySold.matches("sold"));
}

// =============================================================
// Roles and reference data
// =============================================================

#[test]
fn role_round_trips_lowercase() {
    for role in Role::ALL {
        let value = serde_json::to_value(role).unwrap();
        assert_eq!(value, json!(role.label().to_lowercase()));
        let back: Role = serde_json::from_value(value).unwrap();
        assert_eq!(back, role);
    }
}

#[test]
fn user_without_role_decodes_with_none() {
    let user: User = serde_json::from_value(json!({"id": 1, "name": "R"})).unwrap();
    assert_eq!(user.role, None);
}

#[test]
fn warehouse_decodes_camel_case_fields() {
    let warehouse: Warehouse = serde_json::from_value(json!({
        "id": "w1",
        "name": "Central",
        "locationText": "Pune",
        "contactPerson": "S",
        "phone": "99",
    }))
    .unwrap();
    assert_eq!(warehouse.location_text, "Pune");
    assert_eq!(warehouse.contact_person, "S");
}

#[test]
fn analytics_defaults_to_zero_for_missing_fields() {
    let totals: Analytics = serde_json::from_value(json!({})).unwrap();
    assert_eq!(totals, Analytics::default());
    assert_eq!(totals.total_receipts, 0);
}

#[test]
fn analytics_decodes_camel_case_totals() {
    let totals: Analytics = serde_json::from_value(json!({
        "totalReceipts": 12,
        "totalPledged": 3,
        "totalLoanAmount": 55_000.0,
    }))
    .unwrap();
    assert_eq!(totals.total_receipts, 12);
    assert_eq!(totals.total_pledged, 3);
    assert!((totals.total_loan_amount - 55_000.0).abs() < f64::EPSILON);
}
