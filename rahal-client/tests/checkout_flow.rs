// Checkout flow against a stubbed API.

use httpmock::Method::POST;
use httpmock::MockServer;
use serde_json::json;
use tempfile::TempDir;

use rahal_client::{
    ClientConfig, ClientStorage, ReservationDraft, ReservationKind, complete_reservation_flow,
};
use shared::types::ReservationType;

fn hotel_draft() -> ReservationDraft {
    ReservationDraft::new(
        ReservationKind::Hotel {
            hotel_id: "12".into(),
            room_type: "Double".into(),
            hotel_name: Some("Babylon Rotana".into()),
            city: Some("Baghdad".into()),
            country: Some("Iraq".into()),
        },
        150_000,
        "Zahra Kareem",
        "+9647701234567",
        "zahra@example.com",
    )
}

struct Env {
    server: MockServer,
    config: ClientConfig,
    storage: ClientStorage,
    _dir: TempDir,
}

async fn env() -> Env {
    let server = MockServer::start_async().await;
    let config = ClientConfig::new(server.url("")).with_return_url_base("https://www.example.com");
    let dir = TempDir::new().unwrap();
    let storage = ClientStorage::new(dir.path());
    Env {
        server,
        config,
        storage,
        _dir: dir,
    }
}

#[tokio::test]
async fn full_success_makes_exactly_three_calls_and_returns_form_url() {
    let env = env().await;

    let limit = env.server.mock(|when, then| {
        when.method(POST).path("/payment/check-reservation-limit");
        then.status(200).json_body(json!({"allowed": true}));
    });
    let create = env.server.mock(|when, then| {
        when.method(POST)
            .path("/payment/create-hotel-reservation")
            .json_body_partial(r#"{"reservationType": "Hotel", "hotelId": "12"}"#);
        then.status(200).json_body(json!({
            "success": true,
            "invoiceId": "INV-100",
            "paymentId": "PAY-7"
        }));
    });
    let pay = env.server.mock(|when, then| {
        when.method(POST)
            .path("/payment/create-payment")
            .json_body_partial(
                r#"{"currency": "IQD", "locale": "ar_IQ", "invoiceId": "INV-100"}"#,
            );
        then.status(200).json_body(json!({
            "success": true,
            "formUrl": "https://gateway.example.com/form/abc"
        }));
    });

    let http = env.config.build_http_client();
    let outcome = complete_reservation_flow(&http, &env.storage, &env.config, &hotel_draft())
        .await
        .unwrap();

    assert_eq!(outcome.form_url, "https://gateway.example.com/form/abc");
    assert_eq!(outcome.invoice_id, "INV-100");
    assert_eq!(outcome.payment_id.as_deref(), Some("PAY-7"));

    limit.assert();
    create.assert();
    pay.assert();

    // The pending snapshot carries the original type and both gateway ids.
    let snap = env.storage.last_reservation().expect("snapshot written");
    assert_eq!(snap.reservation_type, ReservationType::Hotel);
    assert_eq!(snap.invoice_id, "INV-100");
    assert_eq!(snap.payment_id.as_deref(), Some("PAY-7"));
}

#[tokio::test]
async fn limit_denial_aborts_with_server_message_before_creation() {
    let env = env().await;

    let limit = env.server.mock(|when, then| {
        when.method(POST).path("/payment/check-reservation-limit");
        then.status(200)
            .json_body(json!({"allowed": false, "message": "X"}));
    });
    let create = env.server.mock(|when, then| {
        when.method(POST).path("/payment/create-hotel-reservation");
        then.status(200).json_body(json!({"success": true}));
    });

    let http = env.config.build_http_client();
    let err = complete_reservation_flow(&http, &env.storage, &env.config, &hotel_draft())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "X");
    limit.assert();
    assert_eq!(create.hits(), 0);
    assert!(env.storage.last_reservation().is_none());
}

#[tokio::test]
async fn limit_endpoint_failure_fails_open() {
    let env = env().await;

    env.server.mock(|when, then| {
        when.method(POST).path("/payment/check-reservation-limit");
        then.status(500).body("internal server error");
    });
    let create = env.server.mock(|when, then| {
        when.method(POST).path("/payment/create-hotel-reservation");
        then.status(200)
            .json_body(json!({"success": true, "invoiceId": "INV-1", "paymentId": "P-1"}));
    });
    env.server.mock(|when, then| {
        when.method(POST).path("/payment/create-payment");
        then.status(200)
            .json_body(json!({"success": true, "formUrl": "https://g.example/f"}));
    });

    let http = env.config.build_http_client();
    let outcome = complete_reservation_flow(&http, &env.storage, &env.config, &hotel_draft())
        .await
        .unwrap();

    assert_eq!(outcome.invoice_id, "INV-1");
    create.assert();
}

#[tokio::test]
async fn limit_error_with_denial_phrase_still_aborts() {
    let env = env().await;

    env.server.mock(|when, then| {
        when.method(POST).path("/payment/check-reservation-limit");
        then.status(400)
            .json_body(json!({"message": "Daily limit exceeded for today"}));
    });
    let create = env.server.mock(|when, then| {
        when.method(POST).path("/payment/create-hotel-reservation");
        then.status(200).json_body(json!({"success": true}));
    });

    let http = env.config.build_http_client();
    let err = complete_reservation_flow(&http, &env.storage, &env.config, &hotel_draft())
        .await
        .unwrap_err();

    assert!(err.to_string().to_lowercase().contains("limit"));
    assert_eq!(create.hits(), 0);
}

#[tokio::test]
async fn creation_rejection_surfaces_server_message() {
    let env = env().await;

    env.server.mock(|when, then| {
        when.method(POST).path("/payment/check-reservation-limit");
        then.status(200).json_body(json!({"allowed": true}));
    });
    env.server.mock(|when, then| {
        when.method(POST).path("/payment/create-hotel-reservation");
        then.status(200)
            .json_body(json!({"success": false, "Message": "room type sold out"}));
    });
    let pay = env.server.mock(|when, then| {
        when.method(POST).path("/payment/create-payment");
        then.status(200).json_body(json!({"success": true}));
    });

    let http = env.config.build_http_client();
    let err = complete_reservation_flow(&http, &env.storage, &env.config, &hotel_draft())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "room type sold out");
    assert_eq!(pay.hits(), 0);
    assert!(env.storage.last_reservation().is_none());
}

#[tokio::test]
async fn missing_form_url_aborts_after_snapshot() {
    let env = env().await;

    env.server.mock(|when, then| {
        when.method(POST).path("/payment/check-reservation-limit");
        then.status(200).json_body(json!({"allowed": true}));
    });
    env.server.mock(|when, then| {
        when.method(POST).path("/payment/create-hotel-reservation");
        then.status(200)
            .json_body(json!({"success": true, "invoiceId": "INV-2"}));
    });
    env.server.mock(|when, then| {
        when.method(POST).path("/payment/create-payment");
        then.status(200).json_body(json!({"success": true}));
    });

    let http = env.config.build_http_client();
    let err = complete_reservation_flow(&http, &env.storage, &env.config, &hotel_draft())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("form URL"));
    // Snapshot was written before step 3; the return page can still show it.
    assert_eq!(env.storage.last_reservation().unwrap().invoice_id, "INV-2");
}

#[tokio::test]
async fn group_program_books_through_flight_package_wire_type() {
    let env = env().await;

    env.server.mock(|when, then| {
        when.method(POST).path("/payment/check-reservation-limit");
        then.status(200).json_body(json!({"allowed": true}));
    });
    let create = env.server.mock(|when, then| {
        when.method(POST)
            .path("/payment/create-hotel-reservation")
            .json_body_partial(
                r#"{"reservationType": "FlightPackage", "flightPackageId": "gp-9"}"#,
            );
        then.status(200)
            .json_body(json!({"success": true, "invoiceId": "INV-3", "paymentId": "P-3"}));
    });
    env.server.mock(|when, then| {
        when.method(POST).path("/payment/create-payment");
        then.status(200)
            .json_body(json!({"success": true, "formUrl": "https://g.example/f3"}));
    });

    let draft = ReservationDraft::new(
        ReservationKind::GroupProgram {
            group_program_id: "gp-9".into(),
        },
        80_000,
        "Sara",
        "07790000",
        "sara@example.com",
    );

    let http = env.config.build_http_client();
    complete_reservation_flow(&http, &env.storage, &env.config, &draft)
        .await
        .unwrap();

    create.assert();
    // Snapshot keeps the original type, not the wire remap.
    let snap = env.storage.last_reservation().unwrap();
    assert_eq!(snap.reservation_type, ReservationType::GroupProgram);
}

#[tokio::test]
async fn validation_failures_issue_zero_http_calls() {
    let env = env().await;

    let limit = env.server.mock(|when, then| {
        when.method(POST).path("/payment/check-reservation-limit");
        then.status(200).json_body(json!({"allowed": true}));
    });

    let http = env.config.build_http_client();

    let mut bad_name = hotel_draft();
    bad_name.customer_name = "Guest".into();
    let mut bad_phone = hotel_draft();
    bad_phone.customer_phone = "abc".into();
    let mut bad_email = hotel_draft();
    bad_email.customer_email = "not-an-email".into();

    for draft in [bad_name, bad_phone, bad_email] {
        let err = complete_reservation_flow(&http, &env.storage, &env.config, &draft)
            .await
            .unwrap_err();
        assert!(matches!(err, rahal_client::ClientError::Validation(_)));
    }

    assert_eq!(limit.hits(), 0);
    assert!(env.storage.last_reservation().is_none());
}
