use btc_fund_radar::{Band, RadarError};

use crate::common::{client_for, mock_sentiment, sentiment_body, setup_server};

#[tokio::test]
async fn offline_extreme_fear_reading() {
    let server = setup_server();
    let mock = mock_sentiment(
        &server,
        200,
        r#"{"data":[{"value":"18","value_classification":"Extreme Fear"}]}"#,
    );
    let client = client_for(&server);

    let reading = btc_fund_radar::fetch_sentiment(&client).await.unwrap();

    mock.assert();
    assert_eq!(reading.score, 18);
    assert_eq!(reading.classification, "Extreme Fear");
    assert_eq!(reading.band, Band::Fear);
    assert_eq!(
        reading.advice,
        "現在は市場に恐怖が広がっています。買いのチャンスかもしれません。"
    );
}

#[tokio::test]
async fn offline_bands_follow_thresholds() {
    for (value, band) in [
        ("24", Band::Fear),
        ("25", Band::Fear),
        ("26", Band::Neutral),
        ("74", Band::Neutral),
        ("75", Band::Greed),
        ("76", Band::Greed),
    ] {
        let server = setup_server();
        let _mock = mock_sentiment(&server, 200, &sentiment_body(value, "whatever"));
        let client = client_for(&server);

        let reading = btc_fund_radar::fetch_sentiment(&client).await.unwrap();
        assert_eq!(reading.band, band, "value {value}");
        assert_eq!(reading.advice, band.advice());
    }
}

#[tokio::test]
async fn only_the_first_record_is_used() {
    let server = setup_server();
    let _mock = mock_sentiment(
        &server,
        200,
        r#"{"data":[{"value":"80","value_classification":"Extreme Greed"},{"value":"10","value_classification":"Extreme Fear"}]}"#,
    );
    let client = client_for(&server);

    let reading = btc_fund_radar::fetch_sentiment(&client).await.unwrap();
    assert_eq!(reading.score, 80);
    assert_eq!(reading.band, Band::Greed);
}

#[tokio::test]
async fn numeric_value_is_accepted() {
    let server = setup_server();
    let _mock = mock_sentiment(
        &server,
        200,
        r#"{"data":[{"value":50,"value_classification":"Neutral"}]}"#,
    );
    let client = client_for(&server);

    let reading = btc_fund_radar::fetch_sentiment(&client).await.unwrap();
    assert_eq!(reading.score, 50);
    assert_eq!(reading.band, Band::Neutral);
}

#[tokio::test]
async fn empty_data_is_a_data_error() {
    let server = setup_server();
    let _mock = mock_sentiment(&server, 200, r#"{"data":[]}"#);
    let client = client_for(&server);

    let err = btc_fund_radar::fetch_sentiment(&client).await.unwrap_err();
    assert!(matches!(err, RadarError::Data(_)), "got {err:?}");
}

#[tokio::test]
async fn out_of_range_and_non_numeric_values_are_rejected() {
    for value in ["101", "-1", "abc"] {
        let server = setup_server();
        let _mock = mock_sentiment(&server, 200, &sentiment_body(value, "Broken"));
        let client = client_for(&server);

        let err = btc_fund_radar::fetch_sentiment(&client).await.unwrap_err();
        assert!(matches!(err, RadarError::Data(_)), "value {value}: got {err:?}");
    }
}

#[tokio::test]
async fn sentiment_non_2xx_maps_to_status_error() {
    let server = setup_server();
    let _mock = mock_sentiment(&server, 503, "{}");
    let client = client_for(&server);

    let err = btc_fund_radar::fetch_sentiment(&client).await.unwrap_err();
    assert_eq!(err.status(), Some(503));
}
