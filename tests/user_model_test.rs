use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{TimeZone, Utc};

use accounts_backend::dto::user_dto::{CreateUserPayload, UserResponse};
use accounts_backend::error::Error;
use accounts_backend::models::audit::AuditFields;
use accounts_backend::models::user::User;

fn ada() -> User {
    User {
        id: None,
        mail: "a@b.com".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        middle_name: "Byron".to_string(),
        is_active: true,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn audit_fields_round_trip_their_values() {
    let created = Utc.with_ymd_and_hms(2024, 6, 12, 9, 0, 0).unwrap();
    let updated = Utc.with_ymd_and_hms(2024, 6, 13, 10, 30, 0).unwrap();

    let audit = AuditFields {
        created_at: Some(created),
        updated_at: Some(updated),
    };

    assert_eq!(Some(created), audit.created_at);
    assert_eq!(Some(updated), audit.updated_at);
}

#[test]
fn audit_fields_compare_by_value() {
    let created = Utc.with_ymd_and_hms(2024, 6, 12, 9, 0, 0).unwrap();

    let a = AuditFields {
        created_at: Some(created),
        updated_at: None,
    };
    let b = AuditFields {
        created_at: Some(created),
        updated_at: None,
    };
    let c = AuditFields {
        created_at: Some(created),
        updated_at: Some(created),
    };

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn a_new_user_reports_an_absent_id() {
    let user = ada();

    assert_eq!("Ada", user.first_name);
    assert_eq!(None, user.id);
}

#[test]
fn a_persisted_user_round_trips_its_assigned_id() {
    let user = User {
        id: Some(42),
        ..ada()
    };

    assert_eq!(Some(42), user.id);
}

#[test]
fn users_with_identical_fields_compare_equal() {
    assert_eq!(ada(), ada());
    assert_ne!(
        ada(),
        User {
            middle_name: "King".to_string(),
            ..ada()
        }
    );
}

#[test]
fn the_audit_accessor_returns_the_row_timestamps() {
    let created = Utc.with_ymd_and_hms(2024, 6, 12, 9, 0, 0).unwrap();
    let user = User {
        id: Some(1),
        created_at: Some(created),
        ..ada()
    };

    assert_eq!(
        AuditFields {
            created_at: Some(created),
            updated_at: None,
        },
        user.audit()
    );
}

#[test]
fn the_user_response_drops_the_id_and_flattens_the_audit_pair() {
    let created = Utc.with_ymd_and_hms(2024, 6, 12, 9, 0, 0).unwrap();
    let user = User {
        id: Some(1),
        created_at: Some(created),
        ..ada()
    };

    let response = UserResponse::from(user);
    let value = serde_json::to_value(&response).expect("serialize response");

    assert_eq!("a@b.com", value["mail"]);
    assert!(value.get("id").is_none());
    assert!(value.get("created_at").is_some());
    assert!(value.get("audit").is_none());
}

#[test]
fn the_create_payload_requires_every_string_field() {
    let missing_middle_name = serde_json::json!({
        "mail": "a@b.com",
        "first_name": "Ada",
        "last_name": "Lovelace",
    });

    let parsed = serde_json::from_value::<CreateUserPayload>(missing_middle_name);

    assert!(parsed.is_err());
}

#[test]
fn not_found_maps_to_404() {
    let response = Error::NotFound("user not found for id: 1".to_string()).into_response();
    assert_eq!(StatusCode::NOT_FOUND, response.status());
}

#[test]
fn conflict_maps_to_409() {
    let response = Error::Conflict("user is not active: a@b.com".to_string()).into_response();
    assert_eq!(StatusCode::CONFLICT, response.status());
}

#[test]
fn a_missing_row_folds_into_not_found() {
    let err = Error::from(sqlx::Error::RowNotFound);
    assert!(matches!(err, Error::NotFound(_)));
}
