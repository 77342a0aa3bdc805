use coin_labs::analysis::{apply_override, apply_override_to, momentum, rank};
use coin_labs::domain::{
    Mode, ModeTable, ModeView, RoadStatus, ScoreTriple, SectorIcon, SectorRecord,
};
use coin_labs::models::SECTORS;
use proptest::prelude::*;
use rstest::rstest;
use strum::IntoEnumIterator;

// --- FIXTURES ---

fn by_id(id: &str) -> SectorRecord {
    *SECTORS
        .iter()
        .find(|s| s.id == id)
        .unwrap_or_else(|| panic!("sector {} missing from table", id))
}

fn three_sectors() -> Vec<SectorRecord> {
    vec![by_id("bitcoin"), by_id("semiconductor"), by_id("ethereum")]
}

fn ids(records: &[SectorRecord]) -> Vec<&'static str> {
    records.iter().map(|r| r.id).collect()
}

// --- WEIGHTED SCORE ---

#[rstest]
#[case(86.0, 61.0, 49.0, 71.46)]
#[case(62.0, 72.0, 67.0, 66.15)]
#[case(60.0, 58.0, 55.0, 58.49)]
#[case(0.0, 0.0, 0.0, 0.0)]
#[case(90.0, 90.0, 90.0, 90.0)]
fn test_weighted_score(#[case] s4: f64, #[case] s14: f64, #[case] s54: f64, #[case] expected: f64) {
    let got = momentum(&ScoreTriple::new(s4, s14, s54));
    assert!(
        (got - expected).abs() < 1e-9,
        "momentum({}, {}, {}) = {}, expected {}",
        s4,
        s14,
        s54,
        got,
        expected
    );
}

// --- END TO END ---

#[rstest]
#[case(Mode::Fast, None, &["bitcoin", "semiconductor", "ethereum"])]
#[case(Mode::Fast, Some(90.0), &["semiconductor", "bitcoin", "ethereum"])]
#[case(Mode::Normal, None, &["semiconductor", "bitcoin", "ethereum"])]
#[case(Mode::Stable, None, &["semiconductor", "ethereum", "bitcoin"])]
#[case(Mode::Stable, Some(10.0), &["ethereum", "semiconductor", "bitcoin"])]
fn test_three_sector_order(
    #[case] mode: Mode,
    #[case] score_override: Option<f64>,
    #[case] expected: &[&str],
) {
    let ranked = rank(&three_sectors(), mode, score_override);
    assert_eq!(ids(&ranked), expected);
}

#[test]
fn test_full_table_fast_order() {
    let ranked = rank(SECTORS, Mode::Fast, None);
    assert_eq!(
        ids(&ranked),
        [
            "ai",
            "bitcoin",
            "nasdaq",
            "semiconductor",
            "defense",
            "ethereum",
            "emerging",
            "energy",
            "finance",
            "green",
        ]
    );
}

#[test]
fn test_override_marks_designated_express_in_every_mode() {
    let out = apply_override(SECTORS, Some(90.0));
    let semi = out.iter().find(|s| s.id == "semiconductor").copied();
    let semi = semi.expect("designated sector present");
    for mode in Mode::iter() {
        let v = semi.view(mode);
        assert_eq!(v.status, RoadStatus::Express);
        assert_eq!(v.scores, ScoreTriple::uniform(90.0));
    }
}

#[test]
fn test_override_keeps_fraction() {
    let ranked = rank(&three_sectors(), Mode::Fast, Some(75.5));
    assert_eq!(ranked[0].id, "semiconductor");
    assert_eq!(ranked[0].view(Mode::Fast).scores.s4, 75.5);
}

#[test]
fn test_none_override_is_identity() {
    assert_eq!(apply_override(SECTORS, None), SECTORS.to_vec());
}

// --- PROPERTIES ---

const ID_POOL: [&str; 8] = [
    "alpha",
    "bravo",
    "charlie",
    "delta",
    "echo",
    "foxtrot",
    "golf",
    "semiconductor",
];

fn arb_status() -> impl Strategy<Value = RoadStatus> {
    prop_oneof![
        Just(RoadStatus::Express),
        Just(RoadStatus::National),
        Just(RoadStatus::Construction),
    ]
}

fn arb_mode() -> impl Strategy<Value = Mode> {
    prop_oneof![Just(Mode::Fast), Just(Mode::Normal), Just(Mode::Stable)]
}

// Integral scores keep exact ties reachable.
prop_compose! {
    fn arb_view()(
        status in arb_status(),
        s4 in 0u8..=100,
        s14 in 0u8..=100,
        s54 in 0u8..=100
    ) -> ModeView {
        ModeView::new(status, ScoreTriple::new(s4 as f64, s14 as f64, s54 as f64))
    }
}

prop_compose! {
    fn arb_record(id: &'static str)(
        fast in arb_view(),
        normal in arb_view(),
        stable in arb_view()
    ) -> SectorRecord {
        SectorRecord {
            id,
            name_ko: id,
            name_en: id,
            icon: SectorIcon::Chart,
            by_mode: ModeTable { fast, normal, stable },
        }
    }
}

/// Distinct ids drawn from the pool, in random order.
fn arb_sectors() -> impl Strategy<Value = Vec<SectorRecord>> {
    proptest::sample::subsequence(ID_POOL.to_vec(), 0..=ID_POOL.len())
        .prop_shuffle()
        .prop_flat_map(|ids| ids.into_iter().map(arb_record).collect::<Vec<_>>())
}

fn sorted_ids(records: &[SectorRecord]) -> Vec<&'static str> {
    let mut out = ids(records);
    out.sort_unstable();
    out
}

proptest! {
    #[test]
    fn prop_rank_is_permutation(
        sectors in arb_sectors(),
        mode in arb_mode(),
        score_override in proptest::option::of(0.0..100.0f64)
    ) {
        let ranked = rank(&sectors, mode, score_override);
        prop_assert_eq!(ranked.len(), sectors.len());
        prop_assert_eq!(sorted_ids(&ranked), sorted_ids(&sectors));
    }

    #[test]
    fn prop_status_then_momentum_order(
        sectors in arb_sectors(),
        mode in arb_mode(),
        score_override in proptest::option::of(0.0..100.0f64)
    ) {
        let ranked = rank(&sectors, mode, score_override);
        for pair in ranked.windows(2) {
            let (a, b) = (pair[0].view(mode), pair[1].view(mode));
            prop_assert!(a.status.rank() >= b.status.rank());
            if a.status == b.status {
                prop_assert!(a.scores.momentum() >= b.scores.momentum());
            }
        }
    }

    #[test]
    fn prop_exact_ties_keep_source_order(
        sectors in arb_sectors(),
        mode in arb_mode()
    ) {
        let ranked = rank(&sectors, mode, None);
        let position = |id: &str| sectors.iter().position(|s| s.id == id);
        for pair in ranked.windows(2) {
            let (a, b) = (pair[0].view(mode), pair[1].view(mode));
            if a.status == b.status && a.scores.momentum() == b.scores.momentum() {
                prop_assert!(position(pair[0].id) < position(pair[1].id));
            }
        }
    }

    #[test]
    fn prop_override_touches_only_designated(
        sectors in arb_sectors(),
        v in 0.0..100.0f64
    ) {
        let out = apply_override(&sectors, Some(v));
        prop_assert_eq!(out.len(), sectors.len());
        for (before, after) in sectors.iter().zip(&out) {
            prop_assert_eq!(before.id, after.id);
            if before.id == "semiconductor" {
                for mode in Mode::iter() {
                    prop_assert_eq!(
                        *after.view(mode),
                        ModeView::new(RoadStatus::Express, ScoreTriple::uniform(v))
                    );
                }
            } else {
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn prop_override_absent_target_is_noop(
        sectors in arb_sectors(),
        v in 0.0..100.0f64
    ) {
        let out = apply_override_to(&sectors, "not-a-sector", Some(v));
        prop_assert_eq!(out, sectors);
    }
}
