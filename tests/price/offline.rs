use std::str::FromStr;

use btc_fund_radar::RadarError;
use chrono::Utc;
use rust_decimal::Decimal;

use crate::common::{client_for, mock_price, price_body, setup_server};

#[tokio::test]
async fn offline_price_parses_both_currencies() {
    let server = setup_server();
    let mock = mock_price(&server, 200, &price_body());
    let client = client_for(&server);

    let before = Utc::now();
    let quote = btc_fund_radar::fetch_price(&client).await.unwrap();
    let after = Utc::now();

    mock.assert();
    assert_eq!(quote.usd, Decimal::from(65_000));
    assert_eq!(quote.jpy, Decimal::from(9_800_000));
    assert_eq!(quote.usd_display(), "$65,000");
    assert_eq!(quote.jpy_display(), "¥9,800,000");
    assert!(before <= quote.fetched_at && quote.fetched_at <= after);
}

#[tokio::test]
async fn offline_price_keeps_fractional_digits() {
    let server = setup_server();
    let _mock = mock_price(
        &server,
        200,
        r#"{"bitcoin":{"usd":65123.45,"jpy":10234567.8}}"#,
    );
    let client = client_for(&server);

    let quote = btc_fund_radar::fetch_price(&client).await.unwrap();

    assert_eq!(quote.usd, Decimal::from_str("65123.45").unwrap());
    assert_eq!(quote.usd_display(), "$65,123.45");
    assert_eq!(quote.jpy_display(), "¥10,234,567.8");
}

#[tokio::test]
async fn price_non_2xx_maps_to_status_error() {
    let server = setup_server();
    let mock = mock_price(&server, 429, r#"{"status":{"error_code":429}}"#);
    let client = client_for(&server);

    let err = btc_fund_radar::fetch_price(&client).await.unwrap_err();

    mock.assert();
    match err {
        RadarError::Status { status, url } => {
            assert_eq!(status, 429);
            assert!(url.contains("/simple/price"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn price_missing_asset_is_a_data_error() {
    let server = setup_server();
    let _mock = mock_price(&server, 200, r#"{"ethereum":{"usd":3000,"jpy":450000}}"#);
    let client = client_for(&server);

    let err = btc_fund_radar::fetch_price(&client).await.unwrap_err();
    assert!(matches!(err, RadarError::Data(_)), "got {err:?}");
}

#[tokio::test]
async fn price_missing_currency_is_a_data_error() {
    let server = setup_server();
    let _mock = mock_price(&server, 200, r#"{"bitcoin":{"usd":65000}}"#);
    let client = client_for(&server);

    let err = btc_fund_radar::fetch_price(&client).await.unwrap_err();
    match err {
        RadarError::Data(msg) => assert!(msg.contains("jpy"), "{msg}"),
        other => panic!("expected Data error, got {other:?}"),
    }
}

#[tokio::test]
async fn price_garbage_body_is_a_json_error() {
    let server = setup_server();
    let _mock = mock_price(&server, 200, "<html>maintenance</html>");
    let client = client_for(&server);

    let err = btc_fund_radar::fetch_price(&client).await.unwrap_err();
    assert!(matches!(err, RadarError::Json(_)), "got {err:?}");
}
