/// Tests for client construction, configuration, request validation,
/// and the boundary enums' wire mappings.
///
/// Network-facing assertions point the client at a closed local port:
/// a connection-refused `Http` error proves the call passed validation
/// and reached the transport, with nothing listening to answer.
use std::time::Duration;

use bitstamp_sdk::models::{
    CandleStep, OrderSide, SortDirection, TransactionInterval, UserTransactionType,
    WithdrawalStatus, WithdrawalType,
};
use bitstamp_sdk::{BitstampClient, BitstampError, ClientConfig, Credentials, DEFAULT_BASE_URL};

fn closed_port_client() -> BitstampClient {
    let config = ClientConfig::new()
        .with_base_url("http://127.0.0.1:9/api/v2/")
        .with_timeout(Duration::from_secs(2));
    BitstampClient::with_config(config)
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn test_config_defaults() {
    let config = ClientConfig::new();
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.user_agent, None);
}

#[test]
fn test_config_base_url_gains_a_trailing_slash() {
    let config = ClientConfig::new().with_base_url("http://localhost:8080/api");
    assert_eq!(config.base_url, "http://localhost:8080/api/");

    let config = ClientConfig::new().with_base_url("http://localhost:8080/api/");
    assert_eq!(config.base_url, "http://localhost:8080/api/");
}

#[test]
fn test_client_keeps_its_configuration() {
    let config = ClientConfig::new()
        .with_base_url("http://localhost:8080/api")
        .with_timeout(Duration::from_secs(5))
        .with_user_agent("bitstamp-sdk-tests/1.0");
    let client = BitstampClient::with_config(config);
    assert_eq!(client.config().base_url, "http://localhost:8080/api/");
    assert_eq!(client.config().timeout, Duration::from_secs(5));
    assert_eq!(
        client.config().user_agent.as_deref(),
        Some("bitstamp-sdk-tests/1.0")
    );
}

#[test]
fn test_default_client_points_at_production() {
    let client = BitstampClient::default();
    assert_eq!(client.config().base_url, DEFAULT_BASE_URL);
}

// ---------------------------------------------------------------------------
// Boundary enums
// ---------------------------------------------------------------------------

#[test]
fn test_candle_steps_cover_the_documented_widths() {
    let seconds: Vec<u32> = CandleStep::ALL.iter().map(|step| step.seconds()).collect();
    assert_eq!(
        seconds,
        vec![60, 180, 300, 900, 1800, 3600, 7200, 14400, 21600, 43200, 86400, 259200]
    );
}

#[test]
fn test_order_side_codes_round_trip() {
    for side in [OrderSide::Buy, OrderSide::Sell] {
        assert_eq!(OrderSide::from_code(side.code()), Some(side));
    }
    assert_eq!(OrderSide::from_code(2), None);
    assert_eq!(OrderSide::from_code(-1), None);
}

#[test]
fn test_user_transaction_type_codes_round_trip() {
    let kinds = [
        UserTransactionType::Deposit,
        UserTransactionType::Withdrawal,
        UserTransactionType::MarketTrade,
    ];
    for kind in kinds {
        assert_eq!(UserTransactionType::from_code(kind.code()), Some(kind));
    }
    assert_eq!(UserTransactionType::from_code(3), None);
}

#[test]
fn test_withdrawal_type_codes_round_trip() {
    let kinds = [
        WithdrawalType::Sepa,
        WithdrawalType::Bitcoin,
        WithdrawalType::Wire,
        WithdrawalType::BitstampCode1,
        WithdrawalType::BitstampCode2,
        WithdrawalType::MtGox,
    ];
    for kind in kinds {
        assert_eq!(WithdrawalType::from_code(kind.code()), Some(kind));
    }
    assert_eq!(WithdrawalType::from_code(6), None);
}

#[test]
fn test_withdrawal_status_codes_round_trip() {
    let statuses = [
        WithdrawalStatus::Open,
        WithdrawalStatus::InProcess,
        WithdrawalStatus::Finished,
        WithdrawalStatus::Cancelled,
        WithdrawalStatus::Failed,
    ];
    for status in statuses {
        assert_eq!(WithdrawalStatus::from_code(status.code()), Some(status));
    }
    assert_eq!(WithdrawalStatus::from_code(5), None);
}

#[test]
fn test_sort_and_interval_wire_forms() {
    assert_eq!(SortDirection::Ascending.as_str(), "asc");
    assert_eq!(SortDirection::Descending.as_str(), "desc");
    assert_eq!(TransactionInterval::Minute.as_str(), "minute");
    assert_eq!(TransactionInterval::Hour.as_str(), "hour");
    assert_eq!(TransactionInterval::Day.as_str(), "day");
}

// ---------------------------------------------------------------------------
// Candle limit validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_ohlc_limit_zero_fails_before_any_request() {
    let client = closed_port_client();
    match client.ohlc("btceur", CandleStep::OneHour, 0).await {
        Err(BitstampError::InvalidParameter(message)) => {
            assert!(message.contains("limit"), "unexpected message: {message}");
        }
        other => panic!("expected InvalidParameter, got {other:?}"),
    }
}

#[tokio::test]
async fn test_ohlc_limit_above_1000_fails_before_any_request() {
    let client = closed_port_client();
    match client.ohlc("btceur", CandleStep::OneHour, 1001).await {
        Err(BitstampError::InvalidParameter(message)) => {
            assert!(message.contains("1001"), "unexpected message: {message}");
        }
        other => panic!("expected InvalidParameter, got {other:?}"),
    }
}

#[tokio::test]
async fn test_ohlc_boundary_limits_reach_the_transport() {
    let client = closed_port_client();
    for limit in [1, 500, 1000] {
        match client.ohlc("btceur", CandleStep::OneHour, limit).await {
            Err(BitstampError::Http(_)) => {}
            other => panic!("limit {limit}: expected Http, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_every_candle_step_passes_validation() {
    let client = closed_port_client();
    for step in CandleStep::ALL {
        match client.ohlc("btceur", step, 1).await {
            Err(BitstampError::Http(_)) => {}
            other => panic!("step {}: expected Http, got {other:?}", step.seconds()),
        }
    }
}

// ---------------------------------------------------------------------------
// Call paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_public_calls_surface_transport_failures_as_http() {
    let client = closed_port_client();
    match client.ticker("btceur").await {
        Err(BitstampError::Http(_)) => {}
        other => panic!("expected Http, got {other:?}"),
    }
}

#[tokio::test]
async fn test_signed_calls_surface_transport_failures_as_http() {
    let client = closed_port_client();
    let credentials = Credentials::new("123456", "api-key", "api-secret");
    match client.account_balances(&credentials).await {
        Err(BitstampError::Http(_)) => {}
        other => panic!("expected Http, got {other:?}"),
    }
}
