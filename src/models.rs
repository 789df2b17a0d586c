//! Typed responses and boundary enums for the endpoint catalog.
//!
//! Each response type carries a `from_value` rule that converts the raw
//! JSON payload into the normalized form: [`Decimal`] for monetary and
//! amount fields, UTC date-times for timestamps. The service's integer
//! codes become the enums below. Array payloads add `list_from_value`.
//! Models hold the normalized form, not the wire shape, and serialize
//! accordingly.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::NormalizeError;
use crate::normalize;

// ---------------------------------------------------------------------------
// Request-side enums
// ---------------------------------------------------------------------------

/// Candle width for [`ohlc`](crate::BitstampClient::ohlc) queries.
/// The service accepts exactly these twelve widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandleStep {
    OneMinute,
    ThreeMinutes,
    FiveMinutes,
    FifteenMinutes,
    ThirtyMinutes,
    OneHour,
    TwoHours,
    FourHours,
    SixHours,
    TwelveHours,
    OneDay,
    ThreeDays,
}

impl CandleStep {
    /// Every legal step, smallest to largest.
    pub const ALL: [CandleStep; 12] = [
        CandleStep::OneMinute,
        CandleStep::ThreeMinutes,
        CandleStep::FiveMinutes,
        CandleStep::FifteenMinutes,
        CandleStep::ThirtyMinutes,
        CandleStep::OneHour,
        CandleStep::TwoHours,
        CandleStep::FourHours,
        CandleStep::SixHours,
        CandleStep::TwelveHours,
        CandleStep::OneDay,
        CandleStep::ThreeDays,
    ];

    /// The step width in seconds, as the `step` request parameter expects it.
    pub fn seconds(self) -> u32 {
        match self {
            CandleStep::OneMinute => 60,
            CandleStep::ThreeMinutes => 180,
            CandleStep::FiveMinutes => 300,
            CandleStep::FifteenMinutes => 900,
            CandleStep::ThirtyMinutes => 1800,
            CandleStep::OneHour => 3600,
            CandleStep::TwoHours => 7200,
            CandleStep::FourHours => 14400,
            CandleStep::SixHours => 21600,
            CandleStep::TwelveHours => 43200,
            CandleStep::OneDay => 86400,
            CandleStep::ThreeDays => 259200,
        }
    }
}

/// Sort direction for user-transaction history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// The wire form of the `sort` parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// Aggregation window for the public transactions endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionInterval {
    Minute,
    Hour,
    Day,
}

impl TransactionInterval {
    /// The wire form of the `time` parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionInterval::Minute => "minute",
            TransactionInterval::Hour => "hour",
            TransactionInterval::Day => "day",
        }
    }
}

// ---------------------------------------------------------------------------
// Wire code enums
// ---------------------------------------------------------------------------

/// Order side as the service codes it in `type` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    /// The wire code: 0 for buy, 1 for sell.
    pub fn code(self) -> i64 {
        match self {
            OrderSide::Buy => 0,
            OrderSide::Sell => 1,
        }
    }

    /// Decode a wire code; codes outside the documented set are `None`.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(OrderSide::Buy),
            1 => Some(OrderSide::Sell),
            _ => None,
        }
    }
}

/// Kind of an account history row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserTransactionType {
    Deposit,
    Withdrawal,
    MarketTrade,
}

impl UserTransactionType {
    /// The wire code: 0 deposit, 1 withdrawal, 2 market trade.
    pub fn code(self) -> i64 {
        match self {
            UserTransactionType::Deposit => 0,
            UserTransactionType::Withdrawal => 1,
            UserTransactionType::MarketTrade => 2,
        }
    }

    /// Decode a wire code; codes outside the documented set are `None`.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(UserTransactionType::Deposit),
            1 => Some(UserTransactionType::Withdrawal),
            2 => Some(UserTransactionType::MarketTrade),
            _ => None,
        }
    }
}

/// Channel a withdrawal goes out on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WithdrawalType {
    Sepa,
    Bitcoin,
    Wire,
    BitstampCode1,
    BitstampCode2,
    MtGox,
}

impl WithdrawalType {
    /// The wire code, 0 through 5 in declaration order.
    pub fn code(self) -> i64 {
        match self {
            WithdrawalType::Sepa => 0,
            WithdrawalType::Bitcoin => 1,
            WithdrawalType::Wire => 2,
            WithdrawalType::BitstampCode1 => 3,
            WithdrawalType::BitstampCode2 => 4,
            WithdrawalType::MtGox => 5,
        }
    }

    /// Decode a wire code; codes outside the documented set are `None`.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(WithdrawalType::Sepa),
            1 => Some(WithdrawalType::Bitcoin),
            2 => Some(WithdrawalType::Wire),
            3 => Some(WithdrawalType::BitstampCode1),
            4 => Some(WithdrawalType::BitstampCode2),
            5 => Some(WithdrawalType::MtGox),
            _ => None,
        }
    }
}

/// Lifecycle state of a withdrawal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WithdrawalStatus {
    Open,
    InProcess,
    Finished,
    Cancelled,
    Failed,
}

impl WithdrawalStatus {
    /// The wire code, 0 through 4 in declaration order.
    pub fn code(self) -> i64 {
        match self {
            WithdrawalStatus::Open => 0,
            WithdrawalStatus::InProcess => 1,
            WithdrawalStatus::Finished => 2,
            WithdrawalStatus::Cancelled => 3,
            WithdrawalStatus::Failed => 4,
        }
    }

    /// Decode a wire code; codes outside the documented set are `None`.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(WithdrawalStatus::Open),
            1 => Some(WithdrawalStatus::InProcess),
            2 => Some(WithdrawalStatus::Finished),
            3 => Some(WithdrawalStatus::Cancelled),
            4 => Some(WithdrawalStatus::Failed),
            _ => None,
        }
    }
}

/// Decode an optional wire code through an enum's `from_code`, failing
/// loudly on codes outside the documented set.
fn coded<T>(
    object: &Map<String, Value>,
    name: &'static str,
    expected: &'static str,
    from_code: fn(i64) -> Option<T>,
) -> Result<Option<T>, NormalizeError> {
    match normalize::optional_code(object, name)? {
        None => Ok(None),
        Some(code) => from_code(code).map(Some).ok_or(NormalizeError::Field {
            field: name,
            expected,
            found: format!("code {code}"),
        }),
    }
}

// ---------------------------------------------------------------------------
// Tickers
// ---------------------------------------------------------------------------

/// A ticker snapshot, over the daily or hourly window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    /// Pair name, present only in the all-pairs listing.
    pub pair: Option<String>,
    pub last: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub vwap: Decimal,
    pub volume: Decimal,
    pub bid: Decimal,
    pub ask: Decimal,
    pub timestamp: Option<DateTime<Utc>>,
    pub open: Decimal,
    pub open_24: Decimal,
    /// Null until the pair has a full 24-hour window.
    pub percent_change_24: Option<Decimal>,
}

impl Ticker {
    /// Rule for a single ticker payload.
    pub fn from_value(value: Value) -> Result<Self, NormalizeError> {
        let object = normalize::object(&value)?;
        Ok(Self {
            pair: normalize::optional_string(object, "pair")?,
            last: normalize::decimal(object, "last")?,
            high: normalize::decimal(object, "high")?,
            low: normalize::decimal(object, "low")?,
            vwap: normalize::decimal(object, "vwap")?,
            volume: normalize::decimal(object, "volume")?,
            bid: normalize::decimal(object, "bid")?,
            ask: normalize::decimal(object, "ask")?,
            timestamp: normalize::datetime(object, "timestamp")?,
            open: normalize::decimal(object, "open")?,
            open_24: normalize::decimal(object, "open_24")?,
            percent_change_24: normalize::nullable_decimal(object, "percent_change_24")?,
        })
    }

    /// Rule for the all-pairs listing.
    pub fn list_from_value(value: Value) -> Result<Vec<Self>, NormalizeError> {
        normalize::list(value, Self::from_value)
    }
}

// ---------------------------------------------------------------------------
// Order book
// ---------------------------------------------------------------------------

/// One price level of the order book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntry {
    pub price: Decimal,
    pub amount: Decimal,
}

/// Order book snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    pub timestamp: Option<DateTime<Utc>>,
    pub bids: Vec<BookEntry>,
    pub asks: Vec<BookEntry>,
}

impl OrderBook {
    /// Rule reshaping the wire's `[price, amount]` pair arrays into records.
    pub fn from_value(value: Value) -> Result<Self, NormalizeError> {
        let object = normalize::object(&value)?;
        Ok(Self {
            timestamp: normalize::datetime(object, "timestamp")?,
            bids: book_side(object, "bids")?,
            asks: book_side(object, "asks")?,
        })
    }
}

fn book_side(
    object: &Map<String, Value>,
    name: &'static str,
) -> Result<Vec<BookEntry>, NormalizeError> {
    let levels = match object.get(name) {
        Some(Value::Array(levels)) => levels,
        Some(other) => {
            return Err(NormalizeError::Shape(format!(
                "{name} is not an array of levels: {other}"
            )))
        }
        None => {
            return Err(NormalizeError::Field {
                field: name,
                expected: "an array of [price, amount] pairs",
                found: "missing field".to_string(),
            })
        }
    };
    levels.iter().map(|level| book_entry(level, name)).collect()
}

fn book_entry(level: &Value, side: &'static str) -> Result<BookEntry, NormalizeError> {
    let pair = level
        .as_array()
        .filter(|pair| pair.len() == 2)
        .ok_or_else(|| {
            NormalizeError::Shape(format!(
                "{side} level is not a [price, amount] pair: {level}"
            ))
        })?;
    Ok(BookEntry {
        price: normalize::decimal_value(&pair[0], side)?,
        amount: normalize::decimal_value(&pair[1], side)?,
    })
}

// ---------------------------------------------------------------------------
// Public transactions
// ---------------------------------------------------------------------------

/// A public market trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: Option<DateTime<Utc>>,
    pub tid: Option<String>,
    pub price: Decimal,
    pub amount: Decimal,
    /// Taker side, when the service includes the `type` code.
    pub side: Option<OrderSide>,
}

impl Transaction {
    /// Rule for one trade in the transactions listing.
    pub fn from_value(value: Value) -> Result<Self, NormalizeError> {
        let object = normalize::object(&value)?;
        Ok(Self {
            date: normalize::datetime(object, "date")?,
            tid: normalize::id_string(object, "tid")?,
            price: normalize::decimal(object, "price")?,
            amount: normalize::decimal(object, "amount")?,
            side: coded(object, "type", "order side code 0 or 1", OrderSide::from_code)?,
        })
    }

    /// Rule for the whole listing.
    pub fn list_from_value(value: Value) -> Result<Vec<Self>, NormalizeError> {
        normalize::list(value, Self::from_value)
    }
}

// ---------------------------------------------------------------------------
// Conversion rate
// ---------------------------------------------------------------------------

/// EUR/USD rate the service applies to fiat bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRate {
    pub buy: Decimal,
    pub sell: Decimal,
}

impl ConversionRate {
    pub fn from_value(value: Value) -> Result<Self, NormalizeError> {
        let object = normalize::object(&value)?;
        Ok(Self {
            buy: normalize::decimal(object, "buy")?,
            sell: normalize::decimal(object, "sell")?,
        })
    }
}

// ---------------------------------------------------------------------------
// Account balances
// ---------------------------------------------------------------------------

/// Balance of one currency: total held, available for trading, and
/// reserved in open orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountBalance {
    pub currency: Option<String>,
    pub total: Decimal,
    pub available: Decimal,
    pub reserved: Decimal,
}

impl AccountBalance {
    /// Rule for one currency row.
    pub fn from_value(value: Value) -> Result<Self, NormalizeError> {
        let object = normalize::object(&value)?;
        Ok(Self {
            currency: normalize::optional_string(object, "currency")?,
            total: normalize::decimal(object, "total")?,
            available: normalize::decimal(object, "available")?,
            reserved: normalize::decimal(object, "reserved")?,
        })
    }

    /// Rule for the all-currencies listing.
    pub fn list_from_value(value: Value) -> Result<Vec<Self>, NormalizeError> {
        normalize::list(value, Self::from_value)
    }
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

/// Receipt for a freshly placed limit order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedOrder {
    pub id: Option<String>,
    pub datetime: Option<DateTime<Utc>>,
    pub side: Option<OrderSide>,
    pub price: Decimal,
    pub amount: Decimal,
}

impl PlacedOrder {
    pub fn from_value(value: Value) -> Result<Self, NormalizeError> {
        let object = normalize::object(&value)?;
        Ok(Self {
            id: normalize::id_string(object, "id")?,
            datetime: normalize::datetime(object, "datetime")?,
            side: coded(object, "type", "order side code 0 or 1", OrderSide::from_code)?,
            price: normalize::decimal(object, "price")?,
            amount: normalize::decimal(object, "amount")?,
        })
    }
}

/// An order still resting on the book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenOrder {
    pub id: Option<String>,
    pub datetime: Option<DateTime<Utc>>,
    pub side: Option<OrderSide>,
    pub price: Decimal,
    pub amount: Decimal,
    pub currency_pair: Option<String>,
}

impl OpenOrder {
    /// Rule for one open order.
    pub fn from_value(value: Value) -> Result<Self, NormalizeError> {
        let object = normalize::object(&value)?;
        Ok(Self {
            id: normalize::id_string(object, "id")?,
            datetime: normalize::datetime(object, "datetime")?,
            side: coded(object, "type", "order side code 0 or 1", OrderSide::from_code)?,
            price: normalize::decimal(object, "price")?,
            amount: normalize::decimal(object, "amount")?,
            currency_pair: normalize::optional_string(object, "currency_pair")?,
        })
    }

    /// Rule for the open-orders listing.
    pub fn list_from_value(value: Value) -> Result<Vec<Self>, NormalizeError> {
        normalize::list(value, Self::from_value)
    }
}

// ---------------------------------------------------------------------------
// User transactions
// ---------------------------------------------------------------------------

/// One account history row: a deposit, a withdrawal, or a trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTransaction {
    pub id: Option<String>,
    pub datetime: Option<DateTime<Utc>>,
    pub kind: Option<UserTransactionType>,
    pub usd: Decimal,
    pub btc: Decimal,
    pub fee: Decimal,
    pub order_id: Option<String>,
}

impl UserTransaction {
    /// Rule for one history row.
    pub fn from_value(value: Value) -> Result<Self, NormalizeError> {
        let object = normalize::object(&value)?;
        Ok(Self {
            id: normalize::id_string(object, "id")?,
            datetime: normalize::datetime(object, "datetime")?,
            kind: coded(
                object,
                "type",
                "transaction type code 0, 1 or 2",
                UserTransactionType::from_code,
            )?,
            usd: normalize::decimal(object, "usd")?,
            btc: normalize::decimal(object, "btc")?,
            fee: normalize::decimal(object, "fee")?,
            order_id: normalize::id_string(object, "order_id")?,
        })
    }

    /// Rule for the paginated listing.
    pub fn list_from_value(value: Value) -> Result<Vec<Self>, NormalizeError> {
        normalize::list(value, Self::from_value)
    }
}

// ---------------------------------------------------------------------------
// Deposits
// ---------------------------------------------------------------------------

/// A bitcoin deposit the network has seen but not yet confirmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnconfirmedDeposit {
    pub amount: Decimal,
    pub address: String,
    pub confirmations: i64,
}

impl UnconfirmedDeposit {
    /// Rule for one pending deposit.
    pub fn from_value(value: Value) -> Result<Self, NormalizeError> {
        let object = normalize::object(&value)?;
        Ok(Self {
            amount: normalize::decimal(object, "amount")?,
            address: normalize::string(object, "address")?,
            confirmations: normalize::integer(object, "confirmations")?,
        })
    }

    /// Rule for the pending-deposits listing.
    pub fn list_from_value(value: Value) -> Result<Vec<Self>, NormalizeError> {
        normalize::list(value, Self::from_value)
    }
}

// ---------------------------------------------------------------------------
// Withdrawals
// ---------------------------------------------------------------------------

/// A withdrawal request and its current lifecycle state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalRequest {
    pub id: Option<String>,
    pub datetime: Option<DateTime<Utc>>,
    pub kind: Option<WithdrawalType>,
    pub amount: Decimal,
    pub status: Option<WithdrawalStatus>,
    pub address: Option<String>,
    pub transaction_id: Option<String>,
}

impl WithdrawalRequest {
    /// Rule for one withdrawal request.
    pub fn from_value(value: Value) -> Result<Self, NormalizeError> {
        let object = normalize::object(&value)?;
        Ok(Self {
            id: normalize::id_string(object, "id")?,
            datetime: normalize::datetime(object, "datetime")?,
            kind: coded(
                object,
                "type",
                "withdrawal type code 0 through 5",
                WithdrawalType::from_code,
            )?,
            amount: normalize::decimal(object, "amount")?,
            status: coded(
                object,
                "status",
                "withdrawal status code 0 through 4",
                WithdrawalStatus::from_code,
            )?,
            address: normalize::optional_string(object, "address")?,
            transaction_id: normalize::optional_string(object, "transaction_id")?,
        })
    }

    /// Rule for the withdrawal-requests listing.
    pub fn list_from_value(value: Value) -> Result<Vec<Self>, NormalizeError> {
        normalize::list(value, Self::from_value)
    }
}
