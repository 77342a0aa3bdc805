//! Ranking configuration

/// Linear weights applied to the (4, 14, 54) horizon scores.
pub struct MomentumWeights {
    pub short: f64,
    pub medium: f64,
    pub long: f64,
}

/// Favours the shortest horizon. Weights sum to 1.0.
pub const MOMENTUM_WEIGHTS: MomentumWeights = MomentumWeights {
    short: 0.50,
    medium: 0.33,
    long: 0.17,
};
