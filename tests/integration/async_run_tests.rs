use std::time::Duration;

use progress_mvu::{AppController, Command, Config, ManualScheduler, TestRenderer, TokioScheduler};

#[test]
fn given_queued_commands_ending_in_shutdown_should_return_from_run() {
    let renderer = TestRenderer::new();
    let clock = ManualScheduler::new();
    let mut controller = AppController::new(Config::default(), renderer.clone(), clock.clone());
    let emitter = controller.emitter();

    emitter.emit(Command::SetPendingAmount(12.5));
    emitter.emit(Command::CommitIncrement);
    emitter.emit(Command::Shutdown);
    emitter.emit(Command::SetPendingAmount(99.0));

    futures::executor::block_on(controller.run());

    assert!(controller.is_shut_down());
    assert_eq!(controller.snapshot().current, 12.5);
    assert_eq!(controller.snapshot().pending_amount, 0.0);
    assert_eq!(clock.pending(), 0);
    // start, two commands, shutdown
    assert_eq!(renderer.count(), 4);
}

#[test]
fn given_a_shut_down_controller_should_return_from_run_immediately() {
    let renderer = TestRenderer::new();
    let clock = ManualScheduler::new();
    let mut controller = AppController::new(Config::default(), renderer.clone(), clock.clone());
    controller.shutdown();

    // Nothing is queued, so this would wait forever if run kept listening.
    futures::executor::block_on(controller.run());

    assert_eq!(clock.pending(), 0);
    assert_eq!(renderer.count(), 1);
}

#[tokio::test(start_paused = true)]
async fn given_a_tokio_scheduler_should_expire_flags_while_running() {
    let renderer = TestRenderer::new();
    let scheduler = TokioScheduler::from_current().unwrap();
    let mut controller = AppController::new(Config::default(), renderer.clone(), scheduler);
    let emitter = controller.emitter();

    emitter.emit(Command::SetPendingAmount(25.0));
    emitter.emit(Command::CommitIncrement);
    let stopper = controller.emitter();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(700)).await;
        stopper.emit(Command::Shutdown);
    });

    controller.run().await;

    // start, stage, commit, entry reveal at 200ms, pulse end at 600ms, shutdown
    assert_eq!(renderer.count(), 6);
    renderer.with_renders(|renders| {
        assert!(renders[2].animation.add_pulse_active);
        assert!(!renders[2].animation.entry_revealed);
        assert!(renders[3].animation.entry_revealed);
        assert!(renders[3].animation.add_pulse_active);
        assert!(renders[4].animation.entry_revealed);
        assert!(!renders[4].animation.add_pulse_active);
        assert_eq!(renders[5].current, 25.0);
    });
    assert_eq!(controller.scheduler().pending(), 0);
}
