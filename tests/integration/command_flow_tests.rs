use super::build_integration_test;
use progress_mvu::{Command, GoalType, Increment, ProgressEvent, ResetFlowState};

#[test]
fn given_a_fresh_session_should_render_defaults_on_start() {
    let test = build_integration_test().build();

    assert_eq!(test.renders.count(), 1);
    test.renders.with_renders(|renders| {
        let first = &renders[0];
        assert_eq!(first.goal, 100.0);
        assert_eq!(first.current, 0.0);
        assert_eq!(first.goal_type, GoalType::Currency);
        assert_eq!(first.percent, 0);
        assert_eq!(first.pending_amount, 0.0);
        assert_eq!(first.reset_flow, ResetFlowState::Idle);
        assert!(!first.animation.entry_revealed);
    });
}

#[test]
fn given_a_controller_not_started_should_not_render_until_start() {
    let mut test = build_integration_test().given_not_started().build();
    assert_eq!(test.renders.count(), 0);
    assert_eq!(test.clock.pending(), 0);

    test.controller.start();
    test.controller.start();

    assert_eq!(test.renders.count(), 1);
    assert_eq!(test.clock.pending(), 1);
}

#[test]
fn given_ninety_of_a_hundred_when_committing_fifty_should_clamp_to_goal() {
    let mut test = build_integration_test()
        .given_progress(100.0, 90.0, GoalType::Currency)
        .build();

    test.controller.set_pending_amount(50.0);
    let events = test.controller.commit_increment();

    assert_eq!(test.current(), 100.0);
    assert_eq!(
        events[0],
        ProgressEvent::Incremented(Increment {
            requested: 50.0,
            applied: 10.0
        })
    );
    assert_eq!(events[1], ProgressEvent::Completed);
    assert_eq!(test.snapshot().pending_amount, 0.0);
}

#[test]
fn given_a_zero_pending_amount_when_committing_should_not_change_current() {
    let mut test = build_integration_test()
        .given_progress(100.0, 42.0, GoalType::Currency)
        .build();

    test.controller.set_pending_amount(0.0);
    let events = test.controller.commit_increment();

    assert!(events.is_empty());
    assert_eq!(test.current(), 42.0);
}

#[test]
fn given_invalid_pending_input_should_stage_nothing() {
    let mut test = build_integration_test().build();

    for raw in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -5.0] {
        test.controller.set_pending_amount(raw);
        assert_eq!(test.snapshot().pending_amount, 0.0);
        assert!(test.controller.commit_increment().is_empty());
    }
    assert_eq!(test.current(), 0.0);
}

#[test]
fn given_an_empty_goal_when_committing_the_full_goal_should_complete_exactly_once() {
    let mut test = build_integration_test().build();

    test.controller.set_pending_amount(100.0);
    let events = test.controller.commit_increment();

    assert!(test.snapshot().complete);
    assert_eq!(
        events
            .iter()
            .filter(|event| **event == ProgressEvent::Completed)
            .count(),
        1
    );

    test.controller.set_pending_amount(0.0);
    assert!(test.controller.commit_increment().is_empty());

    test.controller.set_pending_amount(5.0);
    let events = test.controller.commit_increment();
    assert_eq!(
        events,
        vec![ProgressEvent::Incremented(Increment {
            requested: 5.0,
            applied: 0.0
        })]
    );
}

#[test]
fn given_an_idle_reset_flow_when_confirming_should_do_nothing() {
    let mut test = build_integration_test()
        .given_progress(100.0, 30.0, GoalType::Currency)
        .build();

    let events = test.controller.confirm_reset();

    assert!(events.is_empty());
    assert_eq!(test.current(), 30.0);
    assert_eq!(test.snapshot().reset_flow, ResetFlowState::Idle);
}

#[test]
fn given_a_reset_request_when_cancelled_should_keep_progress() {
    let mut test = build_integration_test()
        .given_progress(100.0, 30.0, GoalType::Currency)
        .build();

    assert_eq!(
        test.controller.request_reset(),
        vec![ProgressEvent::ResetRequested]
    );
    assert_eq!(
        test.snapshot().reset_flow,
        ResetFlowState::AwaitingConfirmation
    );
    assert!(test.controller.request_reset().is_empty());

    assert_eq!(
        test.controller.cancel_reset(),
        vec![ProgressEvent::ResetCancelled]
    );
    assert_eq!(test.current(), 30.0);
    assert_eq!(test.snapshot().reset_flow, ResetFlowState::Idle);
}

#[test]
fn given_a_reset_request_when_confirmed_should_zero_progress() {
    let mut test = build_integration_test()
        .given_progress(100.0, 100.0, GoalType::Currency)
        .build();

    test.controller.request_reset();
    let events = test.controller.confirm_reset();

    assert_eq!(events, vec![ProgressEvent::Reset { previous: 100.0 }]);
    let snapshot = test.snapshot();
    assert_eq!(snapshot.current, 0.0);
    assert_eq!(snapshot.percent, 0);
    assert_eq!(snapshot.reset_flow, ResetFlowState::Idle);

    // A second confirm needs a second request.
    assert!(test.controller.confirm_reset().is_empty());
}

#[test]
fn given_a_half_cent_tail_when_committing_should_round_to_cents() {
    let mut test = build_integration_test()
        .given_progress(100.0, 10.005, GoalType::Currency)
        .build();

    test.controller.set_pending_amount(0.005);
    test.controller.commit_increment();

    assert_eq!(test.current(), 10.01);
}

#[test]
fn given_repeated_small_currency_commits_should_never_grow_a_float_tail() {
    let mut test = build_integration_test().given_goal(1.0).build();

    for _ in 0..10 {
        test.controller.set_pending_amount(0.1);
        test.controller.commit_increment();
        let current = test.current();
        assert_eq!(current, (current * 100.0).round() / 100.0);
    }
    assert_eq!(test.current(), 1.0);
}

#[test]
fn given_any_sequence_of_commits_should_keep_current_within_goal_and_percent_monotonic() {
    let mut test = build_integration_test().given_goal(250.0).build();
    let inputs = [
        12.345,
        -3.0,
        f64::NAN,
        0.004,
        99.999,
        1e12,
        0.01,
        f64::INFINITY,
        7.0,
    ];

    let mut last_percent = 0;
    for raw in inputs {
        test.controller.set_pending_amount(raw);
        test.controller.commit_increment();

        let snapshot = test.snapshot();
        assert!(snapshot.current >= 0.0);
        assert!(snapshot.current <= snapshot.goal);
        assert!(snapshot.percent >= last_percent);
        last_percent = snapshot.percent;
    }
    assert_eq!(last_percent, 100);
}

#[test]
fn given_non_positive_goal_input_should_normalize_goal_to_one() {
    let mut test = build_integration_test().build();

    for raw in [0.0, -10.0, f64::NAN, f64::NEG_INFINITY] {
        test.controller.set_goal(raw);
        assert_eq!(test.snapshot().goal, 1.0);
        test.controller.set_goal(100.0);
    }
}

#[test]
fn given_a_goal_lowered_below_current_should_keep_current_and_cap_percent() {
    let mut test = build_integration_test()
        .given_progress(100.0, 60.0, GoalType::Currency)
        .build();

    let events = test.controller.set_goal(50.0);

    assert_eq!(events, vec![ProgressEvent::Completed]);
    let snapshot = test.snapshot();
    assert_eq!(snapshot.current, 60.0);
    assert_eq!(snapshot.percent, 100);
    assert_eq!(snapshot.input_bounds.max, 0.0);

    // Committing more must not pull current down to the lowered goal.
    test.controller.set_pending_amount(5.0);
    test.controller.commit_increment();
    assert_eq!(test.current(), 60.0);
}

#[test]
fn given_a_staged_amount_when_changing_type_should_clear_it() {
    let mut test = build_integration_test()
        .given_progress(100.0, 20.0, GoalType::Currency)
        .build();

    test.controller.set_pending_amount(12.5);
    test.controller.set_type(GoalType::Elements);

    let snapshot = test.snapshot();
    assert_eq!(snapshot.pending_amount, 0.0);
    assert_eq!(snapshot.goal_type, GoalType::Elements);
    assert_eq!(snapshot.current, 20.0);
    assert_eq!(snapshot.goal, 100.0);
}

#[test]
fn given_an_elements_goal_should_stage_whole_items() {
    let mut test = build_integration_test()
        .given_goal_type(GoalType::Elements)
        .given_goal(10.0)
        .build();

    test.controller.set_pending_amount(2.6);
    assert_eq!(test.snapshot().pending_amount, 3.0);

    test.controller.commit_increment();
    assert_eq!(test.current(), 3.0);
    assert_eq!(test.snapshot().percent, 30);
}

#[test]
fn given_commands_through_the_emitter_should_apply_them_in_order() {
    let mut test = build_integration_test().build();
    let emitter = test.controller.emitter();

    emitter.emit(Command::SetPendingAmount(30.0));
    emitter.emit(Command::CommitIncrement);
    emitter.emit(Command::SetPendingAmount(15.0));
    emitter.emit(Command::CommitIncrement);
    assert_eq!(test.current(), 0.0);

    assert_eq!(test.controller.process_queued(), 4);

    assert_eq!(test.current(), 45.0);
    // One render per command on top of the initial one.
    assert_eq!(test.renders.count(), 5);
}

#[test]
fn given_every_command_should_render_a_consistent_snapshot() {
    let mut test = build_integration_test().build();

    test.controller.set_pending_amount(100.0);
    test.controller.commit_increment();

    let last = test.renders.last().unwrap();
    assert_eq!(last.current, 100.0);
    assert_eq!(last.percent, 100);
    assert!(last.complete);
    assert!(last.animation.add_pulse_active);
    assert!(last.animation.complete_pulse_active);
    assert_eq!(last, test.snapshot());
}
