use conecta_login::error::LoginServiceError;
use conecta_login::usecase::request_code::{
    RequestLoginInput, RequestLoginOutcome, RequestLoginUseCase,
};

use crate::helpers::{MockCodeDelivery, MockLoginCodeRepo, test_row, test_user_id};

fn input(phone: &str) -> RequestLoginInput {
    RequestLoginInput {
        phone: Some(phone.to_owned()),
    }
}

#[tokio::test]
async fn should_dispatch_code_for_known_phone() {
    let delivery = MockCodeDelivery::new();
    let dispatched = delivery.dispatched_handle();

    let uc = RequestLoginUseCase {
        codes: MockLoginCodeRepo::new(vec![test_row("5511999998888", "4521")]),
        delivery,
    };

    let outcome = uc.execute(input("+55 11 99999-8888")).await.unwrap();
    match outcome {
        RequestLoginOutcome::Dispatched { user_id } => assert_eq!(user_id, test_user_id()),
        other => panic!("expected Dispatched, got {other:?}"),
    }

    // The collaborator always receives the canonical +55 form.
    let dispatched = dispatched.lock().unwrap();
    assert_eq!(
        *dispatched,
        vec![("+5511999998888".to_owned(), test_user_id())]
    );
}

#[tokio::test]
async fn should_match_rows_stored_in_any_format() {
    for stored in ["11999998888", "5511999998888", "+5511999998888"] {
        let delivery = MockCodeDelivery::new();
        let dispatched = delivery.dispatched_handle();

        let uc = RequestLoginUseCase {
            codes: MockLoginCodeRepo::new(vec![test_row(stored, "4521")]),
            delivery,
        };

        let outcome = uc.execute(input("11 99999 8888")).await.unwrap();
        assert!(
            matches!(outcome, RequestLoginOutcome::Dispatched { .. }),
            "row stored as {stored:?} should match"
        );
        assert_eq!(dispatched.lock().unwrap().len(), 1);
    }
}

#[tokio::test]
async fn should_report_unknown_phone_without_error() {
    let delivery = MockCodeDelivery::new();
    let dispatched = delivery.dispatched_handle();

    let uc = RequestLoginUseCase {
        codes: MockLoginCodeRepo::empty(),
        delivery,
    };

    let outcome = uc.execute(input("11999998888")).await.unwrap();
    assert!(matches!(outcome, RequestLoginOutcome::Unknown));
    assert!(
        dispatched.lock().unwrap().is_empty(),
        "nothing should be dispatched for an unknown phone"
    );
}

#[tokio::test]
async fn should_require_phone() {
    let uc = RequestLoginUseCase {
        codes: MockLoginCodeRepo::empty(),
        delivery: MockCodeDelivery::new(),
    };

    let result = uc.execute(RequestLoginInput { phone: None }).await;
    assert!(matches!(
        result,
        Err(LoginServiceError::MissingField("phone"))
    ));

    let result = uc.execute(input("   ")).await;
    assert!(matches!(
        result,
        Err(LoginServiceError::MissingField("phone"))
    ));
}

#[tokio::test]
async fn should_surface_delivery_failure() {
    let uc = RequestLoginUseCase {
        codes: MockLoginCodeRepo::new(vec![test_row("11999998888", "4521")]),
        delivery: MockCodeDelivery::failing(),
    };

    let result = uc.execute(input("11999998888")).await;
    assert!(
        matches!(result, Err(LoginServiceError::Delivery(_))),
        "expected Delivery error, got {result:?}"
    );
}
