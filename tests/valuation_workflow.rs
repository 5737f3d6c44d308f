//! End-to-end workflow: resolve market data, price, and serialize results.

use approx::assert_abs_diff_eq;
use phoenixnote::core::serialization::{
    from_json, to_json_pretty, Trade, TradeMetadata, TradeProduct, ValuationPayload,
    ValuationRecord,
};
use phoenixnote::prelude::*;
use phoenixnote::pricing::phoenix;

fn market_data() -> StaticMarketData {
    StaticMarketData::new()
        .with_spot("ACME", 100.0)
        .with_vol("ACME", 0.2)
        .with_rate("USD", 0.05)
}

#[test]
fn vanilla_valuation_from_resolved_market_data() {
    let source = market_data();
    let market = Market::builder()
        .spot(source.spot("ACME").unwrap())
        .rate(source.risk_free_rate("USD").unwrap())
        .vol(source.historical_vol("ACME", 252).unwrap())
        .build()
        .unwrap();

    let option = VanillaOption::european_call(100.0, 1.0);
    let result = BlackScholesEngine::new().price(&option, &market).unwrap();
    assert_abs_diff_eq!(result.price, 10.45, epsilon = 0.01);
}

#[test]
fn missing_ticker_surfaces_as_market_data_error() {
    let err = market_data().spot("NOPE").unwrap_err();
    assert!(matches!(err, PricingError::MarketDataMissing(_)));
}

#[test]
fn note_valuation_record_roundtrip() {
    let note = PhoenixNote {
        notional: 1_000.0,
        put_strike: 0.7,
        autocall_barrier: 1.0,
        coupon_barrier: 0.8,
        observation_dates: vec![0.5, 1.0],
        tenor: 1.0,
        barrier_mode: BarrierMode::WorstOf,
        strike_basis: StrikeBasis::PercentOfInitial,
    };
    let acme = Underlying {
        id: "ACME".to_string(),
        initial_spot: 100.0,
        vol: 0.2,
        fixings: vec![104.0, 99.0],
    };

    let trade = Trade {
        metadata: TradeMetadata {
            trade_id: "TRD-PHX-1".to_string(),
            version: 1,
            timestamp: "2026-08-06T09:00:00Z".to_string(),
        },
        product: TradeProduct::PhoenixNote(note.clone()),
    };
    let decoded: Trade = from_json(&to_json_pretty(&trade).unwrap()).unwrap();
    assert_eq!(decoded, trade);

    let result = phoenix::evaluate(&note, &[acme], 0.05).unwrap();
    assert_eq!(result.settlement, SettlementType::AutocalledAt(0.5));

    let record = ValuationRecord {
        trade_id: trade.metadata.trade_id.clone(),
        as_of: "2026-08-06T09:05:00Z".to_string(),
        result: ValuationPayload::Phoenix(result),
    };
    let decoded: ValuationRecord = from_json(&to_json_pretty(&record).unwrap()).unwrap();
    assert_eq!(decoded, record);
}
