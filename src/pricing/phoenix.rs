//! Phoenix memory autocallable payoff resolution.
//!
//! [`evaluate`] walks the observation schedule in chronological order and
//! resolves three behaviors a single-snapshot check cannot separate: early
//! redemption (autocall), memory-coupon accrual, and the terminal knock-in.
//! Each observation date is settled from that date's fixings before the next
//! date is considered; once the note autocalls, later dates are never
//! evaluated.
//!
//! The coupon value at a date is option-based rather than a fixed rate: per
//! underlying, a put struck at the put strike plus a call struck at the
//! autocall barrier, valued at the date's fixing with the remaining time to
//! tenor, then averaged across underlyings. A date whose coupon barrier
//! fails banks that value in the memory buffer; the first later date that
//! clears the barrier (or triggers the autocall) pays the buffer in full.

use std::collections::HashMap;

use crate::core::{BarrierMode, OptionType, PricingError, StrikeBasis};
use crate::instruments::{PhoenixNote, Underlying};
use crate::pricing::european;

/// How the note ultimately settled.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementType {
    /// Early redemption at the contained observation date (years).
    AutocalledAt(f64),
    /// No autocall and the terminal check held above the put strike.
    SurvivedToMaturity,
    /// Terminal check breached the put strike; principal is reduced.
    KnockedIn,
}

/// Aggregate outcome of one note evaluation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CouponResult {
    /// Sum of all coupons actually paid, memory included.
    pub total_coupon: f64,
    /// Settlement outcome.
    pub settlement: SettlementType,
    /// Principal repayment amount (notional, or proportionally reduced when
    /// knocked in).
    pub redemption: f64,
    /// Paid coupon value attributed to each underlying by id.
    pub per_underlying_contribution: HashMap<String, f64>,
}

impl CouponResult {
    /// Total cash returned to the holder: principal plus coupons.
    pub fn total_payoff(&self) -> f64 {
        self.redemption + self.total_coupon
    }
}

/// Barrier outcome for one underlying at one observation date. Derived
/// during an evaluation and not retained afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservationOutcome {
    /// Performance at or above the autocall barrier.
    pub autocall_triggered: bool,
    /// Performance at or above the coupon barrier.
    pub coupon_barrier_met: bool,
    /// Performance below the put strike.
    pub put_barrier_breached: bool,
}

/// One observation date, fully resolved for every underlying.
struct Observation {
    /// Per-underlying outcomes, in input order.
    outcomes: Vec<ObservationOutcome>,
    /// Per-underlying performance ratio `fixing / initial_spot`.
    ratios: Vec<f64>,
    /// Basket-average performance in the note's quoting basis.
    mean_performance: f64,
    /// Per-underlying coupon components (put leg + call leg).
    coupon_components: Vec<f64>,
}

/// Evaluates a Phoenix memory autocallable note against per-underlying
/// fixings.
///
/// Walks `note.observation_dates` chronologically; at each date the fixings
/// are checked against the autocall and coupon barriers under
/// `note.barrier_mode`, memory coupons accrue or pay out, and an autocall
/// stops the walk. The terminal knock-in check runs only when no autocall
/// triggered.
///
/// # Errors
/// - [`PricingError::EmptySchedule`] / [`PricingError::UnorderedSchedule`]
///   for a malformed schedule.
/// - [`PricingError::InvalidInput`] for malformed contract or market fields,
///   a fixings/schedule length mismatch, duplicate underlying ids, or a
///   pricing failure on any coupon leg. Evaluation aborts atomically; no
///   partial result is returned.
///
/// # Examples
/// ```
/// use phoenixnote::core::{BarrierMode, StrikeBasis};
/// use phoenixnote::instruments::{PhoenixNote, Underlying};
/// use phoenixnote::pricing::phoenix::{self, SettlementType};
///
/// let note = PhoenixNote {
///     notional: 1_000.0,
///     put_strike: 0.7,
///     autocall_barrier: 1.0,
///     coupon_barrier: 0.8,
///     observation_dates: vec![0.5, 1.0],
///     tenor: 1.0,
///     barrier_mode: BarrierMode::WorstOf,
///     strike_basis: StrikeBasis::PercentOfInitial,
/// };
/// let underlying = Underlying {
///     id: "ACME".to_string(),
///     initial_spot: 100.0,
///     vol: 0.2,
///     fixings: vec![104.0, 99.0],
/// };
///
/// let result = phoenix::evaluate(&note, &[underlying], 0.03).unwrap();
/// assert_eq!(result.settlement, SettlementType::AutocalledAt(0.5));
/// assert_eq!(result.redemption, 1_000.0);
/// ```
pub fn evaluate(
    note: &PhoenixNote,
    underlyings: &[Underlying],
    rate: f64,
) -> Result<CouponResult, PricingError> {
    note.validate()?;
    validate_market(note, underlyings, rate)?;

    let n = underlyings.len();
    let weight = 1.0 / n as f64;

    let mut memory = 0.0_f64;
    let mut pending = vec![0.0_f64; n];
    let mut total_coupon = 0.0_f64;
    let mut paid = vec![0.0_f64; n];

    let mut settlement = None;
    let mut terminal: Option<Observation> = None;

    for (idx, &date) in note.observation_dates.iter().enumerate() {
        let obs = resolve_observation(note, underlyings, rate, idx)?;

        let autocalled = trigger(&obs, note.barrier_mode, note.autocall_barrier, |o| {
            o.autocall_triggered
        });
        let coupon_met = trigger(&obs, note.barrier_mode, note.coupon_barrier, |o| {
            o.coupon_barrier_met
        });

        let coupon_due = weight * obs.coupon_components.iter().sum::<f64>();
        if autocalled || coupon_met {
            // Pay this date and everything memorized so far.
            total_coupon += memory + coupon_due;
            for i in 0..n {
                paid[i] += pending[i] + weight * obs.coupon_components[i];
                pending[i] = 0.0;
            }
            memory = 0.0;
        } else {
            memory += coupon_due;
            for i in 0..n {
                pending[i] += weight * obs.coupon_components[i];
            }
        }

        if autocalled {
            settlement = Some(SettlementType::AutocalledAt(date));
            break;
        }
        terminal = Some(obs);
    }

    let (settlement, redemption) = match settlement {
        Some(settled) => (settled, note.notional),
        // No autocall: the knock-in check runs on the final observation.
        None => {
            let obs = terminal.expect("schedule validated non-empty");
            if knocked_in(note, &obs) {
                let performance = aggregate(&obs.ratios, note.barrier_mode);
                (SettlementType::KnockedIn, note.notional * performance)
            } else {
                (SettlementType::SurvivedToMaturity, note.notional)
            }
        }
    };

    let per_underlying_contribution = underlyings
        .iter()
        .zip(paid)
        .map(|(u, amount)| (u.id.clone(), amount))
        .collect();

    Ok(CouponResult {
        total_coupon,
        settlement,
        redemption,
        per_underlying_contribution,
    })
}

fn validate_market(
    note: &PhoenixNote,
    underlyings: &[Underlying],
    rate: f64,
) -> Result<(), PricingError> {
    if underlyings.is_empty() {
        return Err(PricingError::InvalidInput(
            "phoenix underlyings cannot be empty".to_string(),
        ));
    }
    if !rate.is_finite() {
        return Err(PricingError::InvalidInput(
            "phoenix rate must be finite".to_string(),
        ));
    }

    let mut seen = std::collections::BTreeSet::new();
    for u in underlyings {
        u.validate()?;
        if u.fixings.len() != note.observation_dates.len() {
            return Err(PricingError::InvalidInput(format!(
                "underlying {} has {} fixings for {} observation dates",
                u.id,
                u.fixings.len(),
                note.observation_dates.len()
            )));
        }
        if !seen.insert(u.id.as_str()) {
            return Err(PricingError::InvalidInput(format!(
                "duplicate underlying id {}",
                u.id
            )));
        }
    }
    Ok(())
}

fn resolve_observation(
    note: &PhoenixNote,
    underlyings: &[Underlying],
    rate: f64,
    idx: usize,
) -> Result<Observation, PricingError> {
    let date = note.observation_dates[idx];
    let remaining = (note.tenor - date).max(0.0);
    let n = underlyings.len();

    let mut outcomes = Vec::with_capacity(n);
    let mut ratios = Vec::with_capacity(n);
    let mut coupon_components = Vec::with_capacity(n);
    let mut performance_sum = 0.0;

    for u in underlyings {
        let fixing = u.fixings[idx];
        let performance = match note.strike_basis {
            StrikeBasis::PercentOfInitial => fixing / u.initial_spot,
            StrikeBasis::Absolute => fixing,
        };
        performance_sum += performance;
        ratios.push(fixing / u.initial_spot);
        outcomes.push(ObservationOutcome {
            autocall_triggered: performance >= note.autocall_barrier,
            coupon_barrier_met: performance >= note.coupon_barrier,
            put_barrier_breached: performance < note.put_strike,
        });

        let (put_strike, call_strike) = match note.strike_basis {
            StrikeBasis::PercentOfInitial => (
                note.put_strike * u.initial_spot,
                note.autocall_barrier * u.initial_spot,
            ),
            StrikeBasis::Absolute => (note.put_strike, note.autocall_barrier),
        };
        let put_leg = european::price(OptionType::Put, fixing, put_strike, rate, u.vol, remaining)?;
        let call_leg =
            european::price(OptionType::Call, fixing, call_strike, rate, u.vol, remaining)?;
        coupon_components.push(put_leg + call_leg);
    }

    Ok(Observation {
        outcomes,
        ratios,
        mean_performance: performance_sum / n as f64,
        coupon_components,
    })
}

/// Whether a barrier is triggered at an observation under the configured
/// aggregation: worst-of requires every underlying above the level, basket
/// compares the average performance.
fn trigger(
    obs: &Observation,
    mode: BarrierMode,
    level: f64,
    outcome: impl Fn(&ObservationOutcome) -> bool,
) -> bool {
    match mode {
        BarrierMode::WorstOf => obs.outcomes.iter().all(outcome),
        BarrierMode::BasketAverage => obs.mean_performance >= level,
    }
}

fn knocked_in(note: &PhoenixNote, obs: &Observation) -> bool {
    match note.barrier_mode {
        BarrierMode::WorstOf => obs.outcomes.iter().any(|o| o.put_barrier_breached),
        BarrierMode::BasketAverage => obs.mean_performance < note.put_strike,
    }
}

fn aggregate(ratios: &[f64], mode: BarrierMode) -> f64 {
    match mode {
        BarrierMode::WorstOf => ratios.iter().copied().fold(f64::INFINITY, f64::min),
        BarrierMode::BasketAverage => ratios.iter().sum::<f64>() / ratios.len() as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn single(fixings: Vec<f64>) -> Underlying {
        Underlying {
            id: "ACME".to_string(),
            initial_spot: 100.0,
            vol: 0.25,
            fixings,
        }
    }

    fn note(dates: Vec<f64>, tenor: f64) -> PhoenixNote {
        PhoenixNote {
            notional: 1_000.0,
            put_strike: 0.7,
            autocall_barrier: 1.2,
            coupon_barrier: 0.9,
            observation_dates: dates,
            tenor,
            barrier_mode: BarrierMode::WorstOf,
            strike_basis: StrikeBasis::PercentOfInitial,
        }
    }

    #[test]
    fn fixings_must_match_schedule() {
        let n = note(vec![0.5, 1.0], 1.0);
        let err = evaluate(&n, &[single(vec![100.0])], 0.02).unwrap_err();
        assert!(matches!(err, PricingError::InvalidInput(_)));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let n = note(vec![1.0], 1.0);
        let twice = [single(vec![100.0]), single(vec![110.0])];
        let err = evaluate(&n, &twice, 0.02).unwrap_err();
        assert!(matches!(err, PricingError::InvalidInput(_)));
    }

    #[test]
    fn autocall_pays_memory_in_full() {
        // Date 1 misses the coupon barrier, date 2 autocalls: the payment at
        // date 2 carries the banked date-1 coupon.
        let n = note(vec![0.5, 1.0], 2.0);
        let u = single(vec![85.0, 125.0]);
        let result = evaluate(&n, &[u.clone()], 0.02).unwrap();
        assert_eq!(result.settlement, SettlementType::AutocalledAt(1.0));
        assert_eq!(result.redemption, n.notional);

        let leg = |ty, spot: f64, strike: f64, t: f64| {
            european::price(ty, spot, strike, 0.02, u.vol, t).unwrap()
        };
        let c1 = leg(OptionType::Put, 85.0, 70.0, 1.5) + leg(OptionType::Call, 85.0, 120.0, 1.5);
        let c2 = leg(OptionType::Put, 125.0, 70.0, 1.0) + leg(OptionType::Call, 125.0, 120.0, 1.0);
        assert_relative_eq!(result.total_coupon, c1 + c2, epsilon = 1e-12);
        assert_relative_eq!(
            result.per_underlying_contribution["ACME"],
            c1 + c2,
            epsilon = 1e-12
        );
    }

    #[test]
    fn basket_average_can_trigger_where_worst_of_does_not() {
        // Mean performance 1.25 clears the autocall barrier, the worst
        // underlying (0.9) does not.
        let mut n = note(vec![1.0], 1.0);
        n.barrier_mode = BarrierMode::BasketAverage;
        let strong = Underlying {
            id: "UP".to_string(),
            initial_spot: 100.0,
            vol: 0.2,
            fixings: vec![160.0],
        };
        let weak = Underlying {
            id: "DOWN".to_string(),
            initial_spot: 100.0,
            vol: 0.2,
            fixings: vec![90.0],
        };

        let basket = evaluate(&n, &[strong.clone(), weak.clone()], 0.02).unwrap();
        assert_eq!(basket.settlement, SettlementType::AutocalledAt(1.0));

        n.barrier_mode = BarrierMode::WorstOf;
        let worst = evaluate(&n, &[strong, weak], 0.02).unwrap();
        assert_ne!(worst.settlement, SettlementType::AutocalledAt(1.0));
    }

    #[test]
    fn worst_of_knock_in_uses_worst_performance() {
        let mut n = note(vec![1.0], 1.0);
        n.barrier_mode = BarrierMode::WorstOf;
        let strong = Underlying {
            id: "UP".to_string(),
            initial_spot: 100.0,
            vol: 0.2,
            fixings: vec![110.0],
        };
        let weak = Underlying {
            id: "DOWN".to_string(),
            initial_spot: 100.0,
            vol: 0.2,
            fixings: vec![60.0],
        };

        let result = evaluate(&n, &[strong, weak], 0.02).unwrap();
        assert_eq!(result.settlement, SettlementType::KnockedIn);
        assert_relative_eq!(result.redemption, 1_000.0 * 0.6, epsilon = 1e-12);
    }

    #[test]
    fn absolute_basis_compares_raw_spot_levels() {
        let n = PhoenixNote {
            notional: 100.0,
            put_strike: 90.0,
            autocall_barrier: 110.0,
            coupon_barrier: 100.0,
            observation_dates: vec![1.0],
            tenor: 1.0,
            barrier_mode: BarrierMode::WorstOf,
            strike_basis: StrikeBasis::Absolute,
        };
        let result = evaluate(&n, &[single(vec![115.0])], 0.02).unwrap();
        assert_eq!(result.settlement, SettlementType::AutocalledAt(1.0));
    }

    #[test]
    fn schedule_errors_pass_through() {
        let mut n = note(vec![], 1.0);
        assert_eq!(
            evaluate(&n, &[single(vec![])], 0.02),
            Err(PricingError::EmptySchedule)
        );
        n.observation_dates = vec![1.0, 0.5];
        assert_eq!(
            evaluate(&n, &[single(vec![100.0, 100.0])], 0.02),
            Err(PricingError::UnorderedSchedule)
        );
    }
}
