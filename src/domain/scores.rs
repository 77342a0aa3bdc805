use crate::config::MOMENTUM_WEIGHTS;

/// Momentum at three lookback horizons (4 / 14 / 54).
/// Values are nominally 0-100 but are stored as given; only display clamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreTriple {
    pub s4: f64,
    pub s14: f64,
    pub s54: f64,
}

impl ScoreTriple {
    pub const fn new(s4: f64, s14: f64, s54: f64) -> Self {
        Self { s4, s14, s54 }
    }

    /// Same value at every horizon.
    pub const fn uniform(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Weighted linear momentum favouring the shortest horizon.
    pub fn momentum(&self) -> f64 {
        self.s4 * MOMENTUM_WEIGHTS.short
            + self.s14 * MOMENTUM_WEIGHTS.medium
            + self.s54 * MOMENTUM_WEIGHTS.long
    }

    /// (label, value) per horizon, shortest first.
    pub fn horizons(&self) -> [(&'static str, f64); 3] {
        [("4", self.s4), ("14", self.s14), ("54", self.s54)]
    }
}

/// Fraction of a full bar for a 0-100 score, clamped to [0, 1].
pub fn bar_fraction(score: f64) -> f32 {
    (score / 100.0).clamp(0.0, 1.0) as f32
}

/// Percentage text for a score bar, e.g. "72%". Out of range scores clamp.
pub fn score_to_pct(score: f64) -> String {
    format!("{}%", ((score / 100.0).clamp(0.0, 1.0) * 100.0).round() as i64)
}

/// Integers render bare, fractional values (from an override) keep one decimal.
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{}", score as i64)
    } else {
        format!("{:.1}", score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn momentum_matches_reference_example() {
        let s = ScoreTriple::new(86.0, 61.0, 49.0);
        assert!((s.momentum() - 71.46).abs() < 1e-9);
    }

    #[test]
    fn uniform_momentum_is_the_value() {
        assert!((ScoreTriple::uniform(90.0).momentum() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn display_clamps_but_storage_does_not() {
        let s = ScoreTriple::new(140.0, -5.0, 50.0);
        assert_eq!(s.s4, 140.0);
        assert_eq!(score_to_pct(s.s4), "100%");
        assert_eq!(score_to_pct(s.s14), "0%");
        assert_eq!(score_to_pct(s.s54), "50%");
        assert!((bar_fraction(72.0) - 0.72).abs() < 1e-6);
    }

    #[test]
    fn score_formatting() {
        assert_eq!(format_score(72.0), "72");
        assert_eq!(format_score(71.46), "71.5");
    }
}
