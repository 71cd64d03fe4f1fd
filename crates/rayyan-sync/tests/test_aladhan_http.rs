//! `AladhanAuthority` against a local HTTP server.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rayyan_core::Error;
use rayyan_sync::{detect_offset, AladhanAuthority, AuthorityConfig, LunarAuthority, OfficialLunarDate};
use rayyan_time::{Date, LunarCalendar, TabularIslamic};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn authority(server: &MockServer, timeout_secs: u64) -> AladhanAuthority {
    AladhanAuthority::new(&AuthorityConfig {
        base_url: format!("{}/v1", server.uri()),
        timeout_secs,
    })
    .unwrap()
}

fn gtoh_body(day: &str, month: u8, year: &str) -> serde_json::Value {
    json!({
        "code": 200,
        "status": "OK",
        "data": {
            "hijri": {
                "day": day,
                "month": {"number": month, "en": "Ḏū al-Ḥijjah"},
                "year": year
            }
        }
    })
}

#[tokio::test]
async fn official_date_from_gtoh() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/gToH"))
        .and(query_param("date", "15-06-2024"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gtoh_body("09", 12, "1445")))
        .expect(1)
        .mount(&server)
        .await;

    let got = authority(&server, 5)
        .official_date(date(2024, 6, 15))
        .await
        .unwrap();
    assert_eq!(
        got,
        OfficialLunarDate {
            day: 9,
            month: 12,
            year: 1445
        }
    );
}

#[tokio::test]
async fn error_status_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/gToH"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = authority(&server, 5)
        .official_date(date(2024, 6, 15))
        .await
        .unwrap_err();
    assert!(matches!(&err, Error::Network(m) if m.contains("503")), "{err}");
}

#[tokio::test]
async fn malformed_body_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/gToH"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"))
        .mount(&server)
        .await;

    let err = authority(&server, 5)
        .official_date(date(2024, 6, 15))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Network(_)), "{err}");
}

#[tokio::test]
async fn slow_answer_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/gToH"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(gtoh_body("09", 12, "1445"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let err = authority(&server, 1)
        .official_date(date(2024, 6, 15))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Network(_)), "{err}");
}

#[tokio::test]
async fn unreachable_host_is_network_error() {
    let authority = AladhanAuthority::new(&AuthorityConfig {
        base_url: "http://127.0.0.1:1/v1".into(),
        timeout_secs: 1,
    })
    .unwrap();
    let err = authority.official_date(date(2024, 6, 15)).await.unwrap_err();
    assert!(matches!(err, Error::Network(_)), "{err}");
}

#[tokio::test]
async fn detect_offset_over_http() {
    let server = MockServer::start().await;
    let today = date(2024, 6, 15);
    // the official date is the tabular date one day later
    let shifted = TabularIslamic.to_lunar(today, 1).unwrap();
    Mock::given(method("GET"))
        .and(path("/v1/gToH"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gtoh_body(
            &shifted.day().to_string(),
            shifted.month(),
            &shifted.year().to_string(),
        )))
        .mount(&server)
        .await;

    let offset = detect_offset(&authority(&server, 5), &TabularIslamic, today)
        .await
        .unwrap();
    assert_eq!(offset, 1);
}
