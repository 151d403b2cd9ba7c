use super::*;
use actix_rt::System;
use rstest::rstest;

use crate::domain::records::{NewUser, User};
use crate::test_support::fixed_record_ports;

#[rstest]
#[case(
    RecordRepositoryError::connection("refused"),
    "record repository connection failed: refused"
)]
#[case(
    RecordRepositoryError::query("syntax error"),
    "record repository query failed: syntax error"
)]
fn record_repository_errors_format_messages(
    #[case] error: RecordRepositoryError,
    #[case] expected: &str,
) {
    assert_eq!(error.to_string(), expected);
}

#[rstest]
fn relation_and_seed_errors_name_their_port() {
    assert_eq!(
        RelationQueryError::query("boom").to_string(),
        "relation query failed: boom"
    );
    assert_eq!(
        SampleDataSeedRepositoryError::connection("down").to_string(),
        "sample data seeding connection failed: down"
    );
}

#[rstest]
fn registered_repository_round_trip() {
    let ports = fixed_record_ports();
    let users = ports.get::<User>().expect("users registered");

    System::new().block_on(async move {
        let stored = users
            .insert(NewUser {
                username: "ada".to_owned(),
                email: "ada@example.com".to_owned(),
                full_name: "Ada Lovelace".to_owned(),
                role: "client".to_owned(),
                phone: None,
            })
            .await
            .expect("insert succeeds");
        let fetched = users.find(stored.id).await.expect("find succeeds");

        assert_eq!(fetched, Some(stored));
    });
}

#[rstest]
fn mock_responder_returns_configured_reply() {
    let mut responder = MockMessageResponder::new();
    responder
        .expect_respond()
        .withf(|text| text == "hi")
        .times(1)
        .return_const("Echo: hi".to_owned());

    assert_eq!(responder.respond("hi"), "Echo: hi");
}

#[rstest]
fn mock_relation_query_surfaces_errors() {
    let mut query = MockRelationQuery::new();
    query
        .expect_catalogue()
        .times(1)
        .return_once(|| Err(RelationQueryError::connection("refused")));

    System::new().block_on(async move {
        let err = query.catalogue().await.expect_err("catalogue fails");
        assert!(matches!(err, RelationQueryError::Connection { .. }));
    });
}
