//! Tests for session transitions, payment gating and the usage reset loop

#[cfg(test)]
mod tests {
    use chromacube::Result;
    use chromacube::channel::buffer::ColorBuffer;
    use chromacube::channel::face::{CompositeKind, Face};
    use chromacube::channel::permutation::ChannelTables;
    use chromacube::compose::intensity::{Coordinate, compose};
    use chromacube::compose::rotation::RotationAngle;
    use chromacube::io::error::computation_error;
    use chromacube::session::machine::{
        CycleInput, Notice, Operator, PuzzleStateMachine, State, Viewer,
    };
    use chromacube::session::payment::PaymentOutcome;
    use chromacube::session::usage::RowUsageValidator;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::VecDeque;

    struct ScriptedOperator {
        coordinates: VecDeque<(usize, usize, usize)>,
        payments: VecDeque<u32>,
        selections: VecDeque<Vec<CompositeKind>>,
        angles: [RotationAngle; 3],
        quoted_costs: Vec<u32>,
    }

    impl ScriptedOperator {
        fn new(coordinates: &[(usize, usize, usize)], payments: &[u32]) -> Self {
            Self {
                coordinates: coordinates.iter().copied().collect(),
                payments: payments.iter().copied().collect(),
                selections: VecDeque::new(),
                angles: [RotationAngle::ZERO; 3],
                quoted_costs: Vec::new(),
            }
        }
    }

    impl Operator for ScriptedOperator {
        fn coordinate(&mut self) -> Result<Coordinate> {
            let (x, y, z) = self
                .coordinates
                .pop_front()
                .ok_or_else(|| computation_error("script", &"no coordinate left"))?;
            Coordinate::new(x, y, z)
        }

        fn rotation_angles(&mut self) -> Result<[RotationAngle; 3]> {
            Ok(self.angles)
        }

        fn payment(&mut self, total_cost: u32) -> Result<u32> {
            self.quoted_costs.push(total_cost);
            self.payments
                .pop_front()
                .ok_or_else(|| computation_error("script", &"no payment left"))
        }

        fn composite_selection(&mut self) -> Result<Vec<CompositeKind>> {
            Ok(self.selections.pop_front().unwrap_or_default())
        }
    }

    #[derive(Default)]
    struct RecordingViewer {
        shown: Vec<String>,
        notices: Vec<Notice>,
    }

    impl Viewer for RecordingViewer {
        fn show(&mut self, name: &str, image: &ColorBuffer) -> Result<()> {
            assert_eq!(image.dim(), (16, 16, 3));
            self.shown.push(name.to_string());
            Ok(())
        }

        fn notify(&mut self, notice: &Notice) -> Result<()> {
            self.notices.push(notice.clone());
            Ok(())
        }
    }

    fn tables() -> ChannelTables {
        ChannelTables::generate(&mut StdRng::seed_from_u64(11)).expect("generation")
    }

    // Tests a single accepted cycle walks every state once
    // Verified by skipping Payment when the display is empty
    #[test]
    fn test_single_cycle_transition_order() {
        let mut machine = PuzzleStateMachine::new(tables());
        let mut operator = ScriptedOperator::new(&[(2, 5, 9)], &[60]);
        let mut viewer = RecordingViewer::default();

        let mut state = State::Start;
        let mut visited = vec![state.name()];
        while !state.is_terminal() {
            state = machine
                .step(state, &mut operator, &mut viewer)
                .expect("step succeeds");
            visited.push(state.name());
        }

        assert_eq!(
            visited,
            vec!["Start", "Input", "Processing", "Payment", "Validation", "End"]
        );
        assert_eq!(machine.cycles(), 1);
        assert_eq!(machine.resets(), 0);
        assert_eq!(operator.quoted_costs, vec![60]);
    }

    // Tests Processing builds rotated composites from the cycle input
    // Verified by rotating with the RG angle for every composite
    #[test]
    fn test_processing_rotates_each_composite() {
        let tables = tables();
        let mut machine = PuzzleStateMachine::new(tables.clone());
        let mut operator = ScriptedOperator::new(&[], &[]);
        let mut viewer = RecordingViewer::default();

        let coordinate = Coordinate::new(3, 4, 5).expect("in range");
        let angles = [
            RotationAngle::new(90),
            RotationAngle::ZERO,
            RotationAngle::new(180),
        ];
        let next = machine
            .step(
                State::Processing(CycleInput { coordinate, angles }),
                &mut operator,
                &mut viewer,
            )
            .expect("processing succeeds");

        let expected = compose(coordinate, &tables).expect("compose").rotated(angles);
        assert_eq!(
            next,
            State::Payment {
                coordinate,
                composites: expected
            }
        );
    }

    // Tests full payment shows three tables then three composites
    // Verified by showing composites before tables
    #[test]
    fn test_full_payment_shows_all_six() {
        let mut machine = PuzzleStateMachine::new(tables());
        let mut operator = ScriptedOperator::new(&[(0, 0, 0)], &[60]);
        let mut viewer = RecordingViewer::default();

        let summary = machine.run(&mut operator, &mut viewer).expect("run succeeds");

        assert_eq!(viewer.shown, vec!["R", "G", "B", "RG", "GB", "BR"]);
        assert_eq!(summary.outcome, PaymentOutcome::Full);
        assert_eq!(viewer.notices.first(), Some(&Notice::ShowingAll));
    }

    // Tests partial payment shows only the selected composites
    // Verified by showing every composite on partial payment
    #[test]
    fn test_partial_payment_shows_selection() {
        let mut machine = PuzzleStateMachine::new(tables());
        let mut operator = ScriptedOperator::new(&[(1, 1, 1)], &[59]);
        operator
            .selections
            .push_back(vec![CompositeKind::Br, CompositeKind::Rg]);
        let mut viewer = RecordingViewer::default();

        let summary = machine.run(&mut operator, &mut viewer).expect("run succeeds");

        assert_eq!(viewer.shown, vec!["BR", "RG"]);
        assert_eq!(
            summary.outcome,
            PaymentOutcome::Partial {
                shown: vec![CompositeKind::Br, CompositeKind::Rg]
            }
        );
        assert_eq!(summary.outcome.change(), None);
    }

    // Tests a short payment shows nothing and returns it as change
    // Verified by displaying composites below the partial threshold
    #[test]
    fn test_insufficient_payment_returns_change() {
        let mut machine = PuzzleStateMachine::new(tables());
        let mut operator = ScriptedOperator::new(&[(4, 4, 4)], &[19]);
        let mut viewer = RecordingViewer::default();

        let summary = machine.run(&mut operator, &mut viewer).expect("run succeeds");

        assert!(viewer.shown.is_empty());
        assert_eq!(summary.outcome.change(), Some(19));
        assert_eq!(
            viewer.notices,
            vec![
                Notice::PaymentInsufficient,
                Notice::ChangeReturned(19),
                Notice::Completed { cycles: 1 },
            ]
        );
    }

    // Tests a zero payment announces no change
    // Verified by announcing change unconditionally
    #[test]
    fn test_zero_payment_has_no_change_notice() {
        let mut machine = PuzzleStateMachine::new(tables());
        let mut operator = ScriptedOperator::new(&[(4, 4, 4)], &[0]);
        let mut viewer = RecordingViewer::default();

        let summary = machine.run(&mut operator, &mut viewer).expect("run succeeds");

        assert_eq!(summary.outcome, PaymentOutcome::Insufficient { change: 0 });
        assert!(!viewer
            .notices
            .iter()
            .any(|notice| matches!(notice, Notice::ChangeReturned(_))));
    }

    // Tests an exhausted face resets usage and restarts from Input
    // Verified by ending the session on invalid usage
    #[test]
    fn test_invalid_usage_resets_and_loops() {
        let mut usage = RowUsageValidator::new();
        for row in 1..=3 {
            usage.record_usage(Face::Red, row).expect("row in range");
        }
        let mut machine = PuzzleStateMachine::with_usage(tables(), usage);
        let mut operator = ScriptedOperator::new(&[(4, 0, 0), (4, 0, 0)], &[60, 25]);
        let mut viewer = RecordingViewer::default();

        let summary = machine.run(&mut operator, &mut viewer).expect("run succeeds");

        assert_eq!(summary.cycles, 2);
        assert_eq!(summary.resets, 1);
        assert_eq!(
            summary.outcome,
            PaymentOutcome::Partial { shown: Vec::new() }
        );
        assert!(viewer.notices.contains(&Notice::RowUsageInvalid(Face::Red)));
        assert_eq!(machine.usage().rows(Face::Red), vec![4]);
        assert_eq!(machine.usage().rows(Face::Green), vec![0]);
    }

    // Tests End is absorbing
    // Verified by returning Input from End
    #[test]
    fn test_end_is_terminal() {
        let mut machine = PuzzleStateMachine::new(tables());
        let mut operator = ScriptedOperator::new(&[], &[]);
        let mut viewer = RecordingViewer::default();

        let end = State::End {
            outcome: PaymentOutcome::Full,
        };
        let next = machine
            .step(end.clone(), &mut operator, &mut viewer)
            .expect("end step succeeds");
        assert_eq!(next, end);
        assert!(next.is_terminal());
        assert_eq!(machine.cycles(), 0);
    }

    // Tests operator failures abort the session
    // Verified by swallowing operator errors
    #[test]
    fn test_operator_failure_propagates() {
        let mut machine = PuzzleStateMachine::new(tables());
        let mut operator = ScriptedOperator::new(&[], &[]);
        let mut viewer = RecordingViewer::default();

        assert!(machine.run(&mut operator, &mut viewer).is_err());
        assert!(viewer.notices.is_empty());
    }

    // Tests notice wording shown to the operator
    // Verified by dropping the face label from the usage notice
    #[test]
    fn test_notice_messages() {
        assert_eq!(Notice::ShowingAll.to_string(), "Showing all images.");
        assert_eq!(Notice::ChangeReturned(7).to_string(), "Change returned: 7");
        assert_eq!(
            Notice::RowUsageInvalid(Face::Blue).to_string(),
            "Row usage for B-face is invalid. Please choose different rows."
        );
    }
}
