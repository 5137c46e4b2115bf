//! Invariants of the alert registry over arbitrary seed sets and operations.

use alert_registry::{Alert, AlertId, AlertRegistry, AlertStatus, Severity};
use proptest::prelude::*;

fn arb_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![Just(Severity::High), Just(Severity::Medium), Just(Severity::Low)]
}

fn arb_status() -> impl Strategy<Value = AlertStatus> {
    prop_oneof![Just(AlertStatus::Active), Just(AlertStatus::Resolved)]
}

/// Seed sets with unique ids drawn from a small range so lookups hit often.
fn arb_registry() -> impl Strategy<Value = AlertRegistry> {
    proptest::collection::btree_map(0u32..16, (arb_severity(), arb_status()), 0..10).prop_map(
        |entries| {
            let alerts = entries
                .into_iter()
                .map(|(id, (severity, status))| Alert {
                    id: AlertId(id),
                    kind: "Accident".into(),
                    severity,
                    location: format!("Junction {id}"),
                    time: "1 min ago".into(),
                    description: "collision".into(),
                    status,
                    responders: "Police".into(),
                    eta: "5 mins".into(),
                })
                .collect();
            AlertRegistry::new(alerts).expect("unique ids")
        },
    )
}

#[derive(Clone, Debug)]
enum Op {
    Resolve(u32),
    Dismiss(u32),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u32..20).prop_map(Op::Resolve),
        (0u32..20).prop_map(Op::Dismiss),
    ]
}

proptest! {
    /// Resolving touches exactly the target alert.
    #[test]
    fn resolve_only_changes_target(reg in arb_registry(), id in 0u32..20) {
        let before = reg.clone();
        let mut after = reg;
        after.resolve(AlertId(id));

        prop_assert_eq!(before.len(), after.len());
        for (old, new) in before.iter().zip(after.iter()) {
            prop_assert_eq!(old.id, new.id);
            if old.id == AlertId(id) {
                prop_assert_eq!(new.status, AlertStatus::Resolved);
            } else {
                prop_assert_eq!(old.status, new.status);
            }
        }
    }

    /// Dismiss removes the id and shrinks the set by one only if it was there.
    #[test]
    fn dismiss_removes_at_most_one(reg in arb_registry(), id in 0u32..20) {
        let was_present = reg.contains(AlertId(id));
        let before = reg.clone();
        let mut after = reg;
        after.dismiss(AlertId(id));

        prop_assert!(!after.contains(AlertId(id)));
        let expected = if was_present { before.len() - 1 } else { before.len() };
        prop_assert_eq!(after.len(), expected);

        // Survivors keep their order and status.
        let survivors: Vec<(AlertId, AlertStatus)> = before
            .iter()
            .filter(|a| a.id != AlertId(id))
            .map(|a| (a.id, a.status))
            .collect();
        let remaining: Vec<(AlertId, AlertStatus)> =
            after.iter().map(|a| (a.id, a.status)).collect();
        prop_assert_eq!(remaining, survivors);
    }

    /// The active view and the status count never disagree.
    #[test]
    fn active_view_matches_count(reg in arb_registry(), ops in proptest::collection::vec(arb_op(), 0..12)) {
        let mut reg = reg;
        for op in ops {
            match op {
                Op::Resolve(id) => reg.resolve(AlertId(id)),
                Op::Dismiss(id) => reg.dismiss(AlertId(id)),
            }
            prop_assert_eq!(reg.active_alerts().len(), reg.count_by_status(AlertStatus::Active));
            let summary = reg.summary();
            prop_assert_eq!(summary.active + summary.resolved, summary.total);
        }
    }

    /// A second resolve of the same id changes nothing.
    #[test]
    fn resolve_is_idempotent(reg in arb_registry(), id in 0u32..20) {
        let mut once = reg.clone();
        once.resolve(AlertId(id));
        let mut twice = reg;
        twice.resolve(AlertId(id));
        twice.resolve(AlertId(id));
        prop_assert_eq!(once, twice);
    }
}
