use crate::domain::{AttemptState, Mode, Tier};

/// Decide which hints the assistant may see.
///
/// Rules, first match wins:
/// 1. hints are only visible during an active attempt;
/// 2. contest and elite tiers never get hints;
/// 3. mock sessions in contest/elite never get hints (subsumed by rule 2, kept explicit);
/// 4. otherwise all hints pass through in their original order.
pub fn gate_hints(
    tier: Tier,
    mode: Mode,
    attempt_state: AttemptState,
    hints: &[String],
) -> Vec<String> {
    if attempt_state != AttemptState::Active {
        return Vec::new();
    }

    if tier.withholds_hints() {
        return Vec::new();
    }

    if mode == Mode::Mock && tier.withholds_hints() {
        return Vec::new();
    }

    hints.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn hints() -> Vec<String> {
        vec!["first".into(), "second".into(), "third".into()]
    }

    #[test]
    fn active_standard_passes_hints_through_in_order() {
        assert_eq!(gate_hints(Tier::Standard, Mode::Mixed, AttemptState::Active, &hints()), hints());
    }

    #[test]
    fn contest_mock_active_gets_nothing() {
        assert!(gate_hints(Tier::Contest, Mode::Mock, AttemptState::Active, &hints()).is_empty());
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(gate_hints(Tier::Warmup, Mode::Bootcamp, AttemptState::Active, &[]).is_empty());
    }

    fn tier_strategy() -> impl Strategy<Value = Tier> {
        prop::sample::select(Tier::ALL.to_vec())
    }

    fn mode_strategy() -> impl Strategy<Value = Mode> {
        prop::sample::select(Mode::ALL.to_vec())
    }

    fn hints_strategy() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-zA-Z ?]{1,40}", 0..6)
    }

    proptest! {
        #[test]
        fn withholding_tiers_never_see_hints(
            tier in prop::sample::select(vec![Tier::Contest, Tier::Elite]),
            mode in mode_strategy(),
            hints in hints_strategy(),
        ) {
            prop_assert!(gate_hints(tier, mode, AttemptState::Active, &hints).is_empty());
        }

        #[test]
        fn inactive_attempts_never_see_hints(
            tier in tier_strategy(),
            mode in mode_strategy(),
            state in prop::sample::select(vec![AttemptState::Submitted, AttemptState::Review]),
            hints in hints_strategy(),
        ) {
            prop_assert!(gate_hints(tier, mode, state, &hints).is_empty());
        }

        #[test]
        fn open_tiers_get_identity_while_active(
            tier in prop::sample::select(vec![Tier::Warmup, Tier::Standard, Tier::Challenge]),
            mode in mode_strategy(),
            hints in hints_strategy(),
        ) {
            prop_assert_eq!(gate_hints(tier, mode, AttemptState::Active, &hints), hints);
        }
    }
}
