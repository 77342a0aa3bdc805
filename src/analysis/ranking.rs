use std::cmp::Ordering;

#[cfg(debug_assertions)]
use crate::config::DF;
use crate::{
    config::LABS_STORE,
    domain::{Mode, ModeView, RoadStatus, ScoreTriple, SectorRecord},
};

/// Weighted momentum of a score triple (secondary sort key).
pub fn momentum(scores: &ScoreTriple) -> f64 {
    scores.momentum()
}

/// Copies `sectors`, replacing the designated sector's every mode with
/// `(Express, (v, v, v))` when an override is present.
pub fn apply_override(sectors: &[SectorRecord], score_override: Option<f64>) -> Vec<SectorRecord> {
    apply_override_to(sectors, LABS_STORE.designated_sector, score_override)
}

/// Same as `apply_override` with an explicit target id.
/// Only the first record with `target_id` is replaced. A missing id leaves the
/// table untouched.
pub fn apply_override_to(
    sectors: &[SectorRecord],
    target_id: &str,
    score_override: Option<f64>,
) -> Vec<SectorRecord> {
    let mut out = sectors.to_vec();
    let Some(value) = score_override else {
        return out;
    };

    match out.iter_mut().find(|s| s.id == target_id) {
        Some(record) => {
            *record = record.with_uniform_view(ModeView::new(
                RoadStatus::TOP,
                ScoreTriple::uniform(value),
            ));
        }
        None => {
            log::debug!(
                "Override {} ignored: sector '{}' not in table",
                value,
                target_id
            );
        }
    }
    out
}

// `+ 0.0` folds -0.0 into +0.0 so numerically equal momenta tie under `total_cmp`.
fn sort_key(view: &ModeView) -> f64 {
    view.scores.momentum() + 0.0
}

/// Descending by (status rank, momentum) for `mode`.
pub fn compare_for_mode(a: &SectorRecord, b: &SectorRecord, mode: Mode) -> Ordering {
    let (va, vb) = (a.view(mode), b.view(mode));
    vb.status
        .rank()
        .cmp(&va.status.rank())
        .then_with(|| sort_key(vb).total_cmp(&sort_key(va)))
}

/// Ordered view of the board for `mode`.
/// Stable: exact ties keep table order.
pub fn rank(sectors: &[SectorRecord], mode: Mode, score_override: Option<f64>) -> Vec<SectorRecord> {
    let mut ordered = apply_override(sectors, score_override);
    ordered.sort_by(|a, b| compare_for_mode(a, b, mode));

    #[cfg(debug_assertions)]
    if DF.log_ranking {
        log::info!(
            "RANK [{}] override={:?}: {}",
            mode,
            score_override,
            ordered.iter().map(|s| s.id).collect::<Vec<_>>().join(" > ")
        );
    }

    ordered
}
