//! End-to-end command tests against a mock TBA server

use frc_cli::{
    commands::{
        handle_event_matches, handle_match, handle_team, EventMatchesParams, MatchParams,
        TeamParams,
    },
    render::Palette,
    tba::{LazyClient, TbaClient},
    FrcError, Year,
};
use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

fn playoff_match() -> serde_json::Value {
    json!({
        "key": "2024mo_qf3m1",
        "comp_level": "qf",
        "set_number": 3,
        "match_number": 1,
        "alliances": {
            "red": { "score": 30, "team_keys": ["frc1986", "frc1939", "frc4522"] },
            "blue": { "score": 20, "team_keys": ["frc2259", "frc3284", "frc6391"] }
        },
        "event_key": "2024mo",
        "time": 1709931600
    })
}

#[tokio::test]
async fn test_match_report_from_descriptor() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/match/2024mo_qf3m1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(playoff_match()))
        .expect(1)
        .mount(&server)
        .await;

    let client = TbaClient::with_base_url("key", server.uri()).unwrap();
    let params = MatchParams {
        key: None,
        year: Year::new(2024),
        event: "mo".to_string(),
        level: "qf".to_string(),
        number: 3,
        round: 1,
        datum: None,
        as_json: false,
    };
    let mut out = Vec::new();

    handle_match(&client, params, &Palette::plain(), &mut out)
        .await
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text,
        "\n    2024MO Quarterfinal #3, Round 1 (2024mo_qf3m1):\n\
         \tDate/Time: 2024/03/08 at 21:00 UTC\n\
         \t 🏆  1986 | 1939 | 4522 => 30 points\n\
         \t    2259 | 3284 | 6391 => 20 points\n\n"
    );
}

#[tokio::test]
async fn test_missing_match_is_remote_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = TbaClient::with_base_url("key", server.uri()).unwrap();
    let params = MatchParams {
        key: Some("2024mo_qm999".to_string()),
        year: Year::new(2024),
        event: String::new(),
        level: "qm".to_string(),
        number: 0,
        round: 0,
        datum: None,
        as_json: false,
    };
    let mut out = Vec::new();

    let err = handle_match(&client, params, &Palette::plain(), &mut out)
        .await
        .unwrap_err();

    assert!(matches!(err, FrcError::Remote(_)));
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_empty_event_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/event/2024mo/matches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = TbaClient::with_base_url("key", server.uri()).unwrap();
    let params = EventMatchesParams {
        code: "mo".to_string(),
        year: Some(Year::new(2024)),
        team: None,
    };
    let mut out = Vec::new();

    let err = handle_event_matches(&client, params, &Palette::plain(), &mut out)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "No matches found for event '2024mo'");
}

#[tokio::test]
async fn test_bad_input_reported_before_settings() {
    let connects = std::cell::Cell::new(0);
    let client = LazyClient::new(|| {
        connects.set(connects.get() + 1);
        Err(FrcError::MissingAuthKey {
            env_var: "TBA_AUTH_KEY".to_string(),
        })
    });
    let mut out = Vec::new();

    let bad_team = TeamParams {
        number: 0,
        datum: None,
        as_json: false,
    };
    let err = handle_team(&client, bad_team, &Palette::plain(), &mut out)
        .await
        .unwrap_err();
    assert!(matches!(err, FrcError::InvalidInput { .. }));

    let bad_datum = TeamParams {
        number: 254,
        datum: Some("bogusfield".to_string()),
        as_json: false,
    };
    let err = handle_team(&client, bad_datum, &Palette::plain(), &mut out)
        .await
        .unwrap_err();
    assert!(matches!(err, FrcError::UnknownField { .. }));

    assert_eq!(connects.get(), 0);

    let valid = TeamParams {
        number: 254,
        datum: None,
        as_json: false,
    };
    let err = handle_team(&client, valid, &Palette::plain(), &mut out)
        .await
        .unwrap_err();
    assert!(matches!(err, FrcError::MissingAuthKey { .. }));
    assert_eq!(connects.get(), 1);
    assert!(out.is_empty());
}
