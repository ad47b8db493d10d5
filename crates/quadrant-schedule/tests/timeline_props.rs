//! Property tests for timeline building and reconciliation.
//!
//! The builder must be total over arbitrary well-formed analyses: one
//! feature per epic, resolved fields always concrete, defaulted start
//! months never decreasing across phases, and the whole pipeline
//! deterministic and replayable.

use proptest::prelude::*;
use quadrant_model::{Epic, Phase, Project, RoadmapAnalysis};
use quadrant_schedule::{build_timeline, parse_duration, reconcile};

fn arb_duration_text() -> impl Strategy<Value = String> {
    prop_oneof![
        (1u32..20).prop_map(|n| format!("{n} weeks")),
        (1u32..12).prop_map(|n| format!("{n} months")),
        Just(String::new()),
        Just("a few weeks".to_string()),
        Just("ongoing".to_string()),
    ]
}

fn arb_epic() -> impl Strategy<Value = Epic> {
    (
        "[A-Za-z ]{1,24}",
        "[A-Za-z ]{0,40}",
        prop_oneof![
            Just(String::new()),
            Just("high".to_string()),
            Just("Medium".to_string()),
            Just("low".to_string()),
            Just("someday".to_string()),
        ],
    )
        .prop_map(|(title, description, priority)| {
            Epic::new(title, description).with_priority(priority)
        })
}

fn arb_analysis() -> impl Strategy<Value = RoadmapAnalysis> {
    prop::collection::vec(
        (arb_duration_text(), prop::collection::vec(arb_epic(), 0..5)),
        0..6,
    )
    .prop_map(|phases| {
        let mut analysis = RoadmapAnalysis::new("generated");
        for (i, (duration, epics)) in phases.into_iter().enumerate() {
            let mut phase = Phase::new(format!("Phase {i}"), duration);
            for epic in epics {
                phase = phase.with_epic(epic);
            }
            analysis = analysis.with_phase(phase);
        }
        analysis
    })
}

fn project() -> Project {
    Project::new("Atlas", "web application")
}

proptest! {
    #[test]
    fn prop_parse_duration_is_positive(text in ".{0,32}") {
        prop_assert!(parse_duration(&text) >= 1);
    }

    #[test]
    fn prop_one_feature_per_epic(analysis in arb_analysis()) {
        let features = build_timeline(&analysis, &project());
        prop_assert_eq!(features.len(), analysis.epic_count());
    }

    #[test]
    fn prop_resolved_durations_at_least_one_month(analysis in arb_analysis()) {
        for feature in build_timeline(&analysis, &project()) {
            prop_assert!(feature.duration_months >= 1);
        }
    }

    #[test]
    fn prop_default_start_months_monotone_across_phases(analysis in arb_analysis()) {
        // No epic carries an explicit start month here, so every start
        // month is the phase cursor; it must never decrease.
        let features = build_timeline(&analysis, &project());
        for pair in features.windows(2) {
            prop_assert!(pair[0].start_month <= pair[1].start_month);
        }
    }

    #[test]
    fn prop_build_is_deterministic(analysis in arb_analysis()) {
        let first = build_timeline(&analysis, &project());
        let second = build_timeline(&analysis, &project());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_reconcile_twice_equals_once(analysis in arb_analysis()) {
        let features = build_timeline(&analysis, &project());

        let mut once = analysis.clone();
        reconcile(&mut once, &features);

        let mut twice = analysis;
        reconcile(&mut twice, &features);
        reconcile(&mut twice, &features);

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_reconcile_of_built_timeline_matches_everything(analysis in arb_analysis()) {
        let features = build_timeline(&analysis, &project());
        let mut target = analysis;
        let outcome = reconcile(&mut target, &features);
        prop_assert!(outcome.is_complete());
        prop_assert_eq!(outcome.matched, features.len());
    }
}
