use btc_fund_radar::{Band, Dashboard};
use httpmock::MockServer;

use crate::common::{
    client_for, mock_news, mock_price, mock_sentiment, mock_translation, options, price_body,
    setup_server,
};

fn mock_quiet_sections(server: &MockServer) {
    mock_price(server, 200, &price_body());
    mock_sentiment(
        server,
        200,
        r#"{"data":[{"value":"18","value_classification":"Extreme Fear"}]}"#,
    );
}

#[tokio::test]
async fn price_section_shows_grouped_values_and_capture_time() {
    let server = setup_server();
    mock_quiet_sections(&server);
    mock_news(&server, 200, r#"{"results":[]}"#);
    let client = client_for(&server);

    let page = Dashboard::new(&client, options()).build().await;

    let price = page.price.as_ref().unwrap();
    assert_eq!(price.usd, "$65,000");
    assert_eq!(price.jpy, "¥9,800,000");
    assert_eq!(
        price.captured_at,
        price.quote.fetched_at.format("%Y-%m-%d %H:%M:%S").to_string()
    );

    let html = page.to_html().unwrap();
    assert!(html.contains("$65,000"));
    assert!(html.contains("¥9,800,000"));
    assert!(html.contains(&format!("※ データ取得時刻：{}（ローカル時間）", price.captured_at)));
}

#[tokio::test]
async fn sentiment_section_shows_fear_band_and_buying_advice() {
    let server = setup_server();
    mock_quiet_sections(&server);
    mock_news(&server, 200, r#"{"results":[]}"#);
    let client = client_for(&server);

    let page = Dashboard::new(&client, options()).build().await;

    let reading = page.sentiment.as_ref().unwrap();
    assert_eq!(reading.band, Band::Fear);
    assert!(reading.advice.contains("買いのチャンス"));

    let html = page.to_html().unwrap();
    assert!(html.contains("現在の指数：18（🟢 恐怖（買い傾向））"));
    assert!(html.contains("Extreme Fear"));
    assert!(html.contains("買いのチャンスかもしれません。"));
    assert!(html.contains("🔎 Fear &amp; Greed Indexとは？"));
}

#[tokio::test]
async fn second_translation_failure_only_affects_second_item() {
    let server = setup_server();
    mock_quiet_sections(&server);
    mock_news(
        &server,
        200,
        r#"{"results":[
            {"published_at":"2024-05-20T09:15:00Z","title":"Bitcoin ETF inflows surge","url":"https://news.example.com/etf"},
            {"published_at":"2024-05-19T22:40:00Z","title":"Miners sell reserves","url":""}
        ]}"#,
    );
    let ok = mock_translation(&server, "Bitcoin ETF inflows surge", 200, "ビットコインETFへの資金流入が急増");
    let failed = mock_translation(&server, "Miners sell reserves", 500, "unused");
    let client = client_for(&server);

    let page = Dashboard::new(&client, options()).build().await;

    ok.assert();
    failed.assert();
    assert!(page.news.banner.is_none());
    let items = &page.news.items;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].published_date, "2024-05-20");
    assert_eq!(items[0].title_translated, "ビットコインETFへの資金流入が急増");
    assert_eq!(items[1].title_translated, "Miners sell reserves（翻訳失敗）");
    assert_eq!(items[1].title_original, "Miners sell reserves");
    assert_eq!(items[1].url, None);

    let html = page.to_html().unwrap();
    assert!(html.contains("📅 2024-05-20"));
    assert!(html.contains("<strong>ビットコインETFへの資金流入が急増</strong>"));
    assert!(html.contains("<strong>Miners sell reserves（翻訳失敗）</strong>"));
    assert!(html.contains("情報元リンクはこちら"));
    assert!(html.contains("（リンクなし）"));
}

#[tokio::test]
async fn page_always_ends_with_legal_panels() {
    let server = setup_server();
    mock_quiet_sections(&server);
    mock_news(&server, 200, r#"{"results":[]}"#);
    let client = client_for(&server);

    let html = Dashboard::new(&client, options())
        .build()
        .await
        .to_html()
        .unwrap();

    assert!(html.contains("BTCファンダレーダー"));
    assert!(html.contains("data:image/png;base64,"));
    assert!(html.contains("📄 ご利用にあたって"));
    assert!(html.contains("🔐 利用規約（Terms of Use）"));
    assert!(html.contains("⚠️ 免責事項（Disclaimer）"));
    let price_at = html.find("💰 BTC価格").unwrap();
    let sentiment_at = html.find("🚦 売買判断の目安").unwrap();
    let news_at = html.find("📰 BTC関連ニュース・イベント").unwrap();
    let footer_at = html.find("📄 ご利用にあたって").unwrap();
    assert!(price_at < sentiment_at && sentiment_at < news_at && news_at < footer_at);
}

#[tokio::test]
async fn remote_text_is_html_escaped() {
    let server = setup_server();
    mock_quiet_sections(&server);
    mock_news(
        &server,
        200,
        r#"{"results":[{"published_at":"2024-05-20T00:00:00Z","title":"<script>alert(1)</script>","url":null}]}"#,
    );
    mock_translation(&server, "<script>alert(1)</script>", 200, "<script>alert(2)</script>");
    let client = client_for(&server);

    let html = Dashboard::new(&client, options())
        .build()
        .await
        .to_html()
        .unwrap();

    assert!(!html.contains("<script>alert(2)</script>"));
    assert!(html.contains("&lt;script&gt;alert(2)&lt;"));
}
