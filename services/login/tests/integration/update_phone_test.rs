use conecta_login::error::LoginServiceError;
use conecta_login::usecase::update_phone::{UpdatePhoneInput, UpdatePhoneUseCase};

use crate::helpers::{
    AccountUpdate, MockIdentityProvider, MockLoginCodeRepo, test_identity, test_row,
    test_user_id,
};

#[tokio::test]
async fn should_update_identity_and_code_row() {
    let repo = MockLoginCodeRepo::new(vec![test_row("5511999998888", "4521")]);
    let rows = repo.rows_handle();

    let identity =
        MockIdentityProvider::new(vec![test_identity()]).with_token("valid-token", test_user_id());
    let updates = identity.updates_handle();

    let uc = UpdatePhoneUseCase {
        codes: repo,
        identity,
    };

    uc.execute(UpdatePhoneInput {
        bearer: Some("valid-token".to_owned()),
        phone: Some("(11) 98888-7777".to_owned()),
        full_name: Some("Maria Souza".to_owned()),
    })
    .await
    .unwrap();

    // Identity provider and code store must agree on the new number.
    assert_eq!(
        *updates.lock().unwrap(),
        vec![AccountUpdate {
            user_id: test_user_id(),
            phone: "+5511988887777".to_owned(),
            full_name: Some("Maria Souza".to_owned()),
        }]
    );
    assert_eq!(rows.lock().unwrap()[0].phone, "+5511988887777");
}

#[tokio::test]
async fn should_reject_missing_or_unknown_token() {
    let uc = UpdatePhoneUseCase {
        codes: MockLoginCodeRepo::empty(),
        identity: MockIdentityProvider::new(vec![test_identity()]),
    };

    let result = uc
        .execute(UpdatePhoneInput {
            bearer: None,
            phone: Some("11988887777".to_owned()),
            full_name: None,
        })
        .await;
    assert!(matches!(result, Err(LoginServiceError::Unauthorized)));

    let result = uc
        .execute(UpdatePhoneInput {
            bearer: Some("forged-token".to_owned()),
            phone: Some("11988887777".to_owned()),
            full_name: None,
        })
        .await;
    assert!(matches!(result, Err(LoginServiceError::Unauthorized)));
}

#[tokio::test]
async fn should_require_phone() {
    let uc = UpdatePhoneUseCase {
        codes: MockLoginCodeRepo::empty(),
        identity: MockIdentityProvider::new(vec![test_identity()])
            .with_token("valid-token", test_user_id()),
    };

    let result = uc
        .execute(UpdatePhoneInput {
            bearer: Some("valid-token".to_owned()),
            phone: None,
            full_name: None,
        })
        .await;
    assert!(matches!(
        result,
        Err(LoginServiceError::MissingField("phone"))
    ));
}
