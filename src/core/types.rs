/// Plain-vanilla option side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionType {
    /// Call option payoff profile.
    Call,
    /// Put option payoff profile.
    Put,
}

impl OptionType {
    /// Returns +1.0 for calls and -1.0 for puts.
    pub fn sign(self) -> f64 {
        match self {
            Self::Call => 1.0,
            Self::Put => -1.0,
        }
    }
}

/// Aggregation rule applied across underlyings for barrier checks.
///
/// Term sheets differ on this point, so it is a configuration flag on the
/// note rather than a fixed convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarrierMode {
    /// The least favorable underlying drives every check; an autocall or
    /// coupon trigger requires all underlyings above the barrier.
    WorstOf,
    /// The equally-weighted average performance drives every check.
    BasketAverage,
}

/// How the put strike and barrier levels of a note are quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrikeBasis {
    /// Levels are ratios of each underlying's initial spot (1.0 = 100%).
    PercentOfInitial,
    /// Levels are absolute spot-unit prices shared by all underlyings.
    Absolute,
}
