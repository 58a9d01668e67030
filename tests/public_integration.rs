use rust_decimal::Decimal;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gemini_api_client::error::GeminiError;
use gemini_api_client::rest::GeminiRestClient;
use gemini_api_client::rest::public::{
    AuctionHistoryRequest, OrderBookRequest, TradeType, TradesRequest,
};

fn build_public_client(server: &MockServer) -> GeminiRestClient {
    GeminiRestClient::builder().base_url(server.uri()).build()
}

#[tokio::test]
async fn test_get_symbols() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/symbols"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!(["btcusd", "ethbtc"])),
        )
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let symbols = client.get_symbols().await.unwrap();
    assert_eq!(symbols, vec!["btcusd", "ethbtc"]);
}

#[tokio::test]
async fn test_get_ticker() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "bid": "977.59",
        "ask": "977.35",
        "last": "977.65",
        "volume": {
            "BTC": "2210.505328803",
            "USD": "2135477.463379586263",
            "timestamp": 1483018200000i64
        }
    });

    Mock::given(method("GET"))
        .and(path("/v1/pubticker/btcusd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let ticker = client.get_ticker("btcusd").await.unwrap();
    assert_eq!(ticker.last, "977.65".parse::<Decimal>().unwrap());
    assert_eq!(
        ticker.volume.in_currency("USD"),
        Some("2135477.463379586263".parse().unwrap())
    );
}

#[tokio::test]
async fn test_get_order_book_with_limits() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "bids": [{ "price": "3607.85", "amount": "6.643373", "timestamp": "1547147541" }],
        "asks": [{ "price": "3607.86", "amount": "14.68205084", "timestamp": "1547147541" }]
    });

    Mock::given(method("GET"))
        .and(path("/v1/book/btcusd"))
        .and(query_param("limit_bids", "1"))
        .and(query_param("limit_asks", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let request = OrderBookRequest {
        limit_bids: Some(1),
        limit_asks: Some(1),
    };
    let book = client
        .get_order_book("btcusd", Some(&request))
        .await
        .unwrap();
    assert_eq!(book.best_bid(), Some("3607.85".parse().unwrap()));
    assert_eq!(book.best_ask(), Some("3607.86".parse().unwrap()));
}

#[tokio::test]
async fn test_get_trades_with_params() {
    let server = MockServer::start().await;
    let response = serde_json::json!([{
        "timestamp": 1547146811,
        "timestampms": 1547146811357i64,
        "tid": 5335307668i64,
        "price": "3610.85",
        "amount": "0.27413495",
        "exchange": "gemini",
        "type": "auction"
    }]);

    Mock::given(method("GET"))
        .and(path("/v1/trades/btcusd"))
        .and(query_param("since", "1547146800"))
        .and(query_param("include_breaks", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let request = TradesRequest {
        since: Some(1547146800),
        include_breaks: Some(true),
        ..Default::default()
    };
    let trades = client.get_trades("btcusd", Some(&request)).await.unwrap();
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].side, TradeType::Auction);
    assert!(trades[0].side.side().is_none());
}

#[tokio::test]
async fn test_get_auction_and_history() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/auction/btcusd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "last_auction_eid": 109929,
            "last_auction_price": "629.92",
            "last_auction_quantity": "430.12917506",
            "next_auction_ms": 1474567200000i64,
            "next_update_ms": 1474567020000i64
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/auction/btcusd/history"))
        .and(query_param("limit_auction_results", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "auction_id": 3,
            "auction_price": "628.775",
            "auction_quantity": "66.32225622",
            "eid": 4066,
            "highest_bid_price": "628.82",
            "lowest_ask_price": "629.48",
            "auction_result": "success",
            "timestamp": 1471902531,
            "timestampms": 1471902531225i64,
            "event_type": "auction"
        }])))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let auction = client.get_auction("btcusd").await.unwrap();
    assert_eq!(auction.last_auction_eid, Some(109929));
    assert!(auction.most_recent_indicative_price.is_none());

    let request = AuctionHistoryRequest {
        limit_auction_results: Some(1),
        ..Default::default()
    };
    let history = client
        .get_auction_history("btcusd", Some(&request))
        .await
        .unwrap();
    assert_eq!(history[0].auction_result, "success");
}

#[tokio::test]
async fn test_public_error_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/pubticker/nosuch"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "result": "error",
            "reason": "InvalidSymbol",
            "message": "Supplied value 'nosuch' is not a valid symbol."
        })))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let err = client.get_ticker("nosuch").await.unwrap_err();
    match err {
        GeminiError::Api(api_error) => assert_eq!(api_error.reason, "InvalidSymbol"),
        other => panic!("unexpected error: {other:?}"),
    }
}
