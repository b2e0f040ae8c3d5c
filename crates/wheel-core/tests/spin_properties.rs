//! Property tests for spinning, option editing and session documents.

use chrono::Utc;
use proptest::prelude::*;

use wheel_core::{Collaborators, DecisionSession, SessionConfig, SpinSpeed, SpinState};

fn session(seed: u64, labels: &[String]) -> DecisionSession {
    let mut s = DecisionSession::new(
        SessionConfig::default().with_seed(seed),
        Collaborators::default(),
    );
    s.clear();
    for label in labels {
        s.add_option(label);
    }
    s
}

fn label() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,11}".prop_map(|s| s.trim().to_string())
}

fn speed() -> impl Strategy<Value = SpinSpeed> {
    prop::sample::select(SpinSpeed::ALL.to_vec())
}

proptest! {
    #[test]
    fn spin_resolves_to_index_fixed_at_start(
        labels in prop::collection::vec(label(), 2..12),
        seed in any::<u64>(),
    ) {
        let mut s = session(seed, &labels);
        let index = s.spin().expect("two or more options always spin");
        prop_assert!(index < labels.len());

        let winner = s.complete_spin().map(str::to_string);
        prop_assert_eq!(winner.as_deref(), Some(labels[index].as_str()));
        prop_assert_eq!(s.state(), SpinState::Resolved { winner_index: index });
        prop_assert_eq!(s.history().len(), 1);
        prop_assert_eq!(s.spin_count(), 1);
    }

    #[test]
    fn spin_is_noop_below_two_options(
        labels in prop::collection::vec(label(), 0..2),
        seed in any::<u64>(),
    ) {
        let mut s = session(seed, &labels);
        prop_assert!(s.spin().is_none());
        prop_assert_eq!(s.state(), SpinState::Idle);
        prop_assert_eq!(s.spin_count(), 0);
        prop_assert!(s.history().is_empty());
    }

    #[test]
    fn blank_labels_never_added(blank in "[ \t]{0,8}") {
        let mut s = session(0, &[]);
        prop_assert!(!s.add_option(&blank));
        prop_assert!(s.options().is_empty());
    }

    #[test]
    fn export_import_restores_items_and_speed(
        labels in prop::collection::vec(label(), 0..10),
        speed in speed(),
    ) {
        let mut source = session(1, &labels);
        source.set_speed(speed);
        let json = source.export_document(Utc::now()).to_json().unwrap();

        let mut target = session(2, &[]);
        prop_assert!(target.import_session(&json).unwrap());
        prop_assert_eq!(target.options(), source.options());
        prop_assert_eq!(target.speed(), speed);
    }

    #[test]
    fn spin_count_never_decreases(
        labels in prop::collection::vec(label(), 2..6),
        spins in 1usize..20,
    ) {
        let mut s = session(9, &labels);
        let mut last = 0;
        for _ in 0..spins {
            s.spin();
            s.complete_spin();
            prop_assert!(s.spin_count() >= last);
            last = s.spin_count();
        }
        prop_assert_eq!(s.history().len(), spins);
    }
}
