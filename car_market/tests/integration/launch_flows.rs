use std::sync::Arc;

use car_market::{
    BiometricPrompt, GateOutcome, LaunchState, NavigationMode, Notice, Route, ScreenTasks,
    SessionStateMachine,
};

use crate::common::MockOracle;

#[tokio::test(start_paused = true)]
async fn test_launch_with_accepted_biometrics_lands_home() {
    // Given a device with enrolled biometrics that the user passes
    let oracle = MockOracle::accepting();
    let mut machine = SessionStateMachine::default();

    // When the app launches
    let outcome = machine.launch(&oracle).await.unwrap();

    // Then the home screen replaces the biometric screen without a notice
    let GateOutcome::Proceed(transition) = outcome else {
        panic!("expected Proceed, got {outcome:?}");
    };
    assert_eq!(transition.route, Route::Home);
    assert_eq!(transition.mode, NavigationMode::Replace);
    assert!(transition.notice.is_none());
    assert_eq!(oracle.prompt_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_launch_without_biometrics_notifies_once() {
    for (has_hardware, enrolled) in [(false, false), (false, true), (true, false)] {
        let oracle = MockOracle::new(has_hardware, enrolled, true);
        let mut machine = SessionStateMachine::default();

        let outcome = machine.launch(&oracle).await.unwrap();

        let GateOutcome::Proceed(transition) = outcome else {
            panic!("expected Proceed");
        };
        assert_eq!(transition.route, Route::Home);
        assert_eq!(
            transition.notice,
            Some(Notice::new("Biometrics Unavailable", "Use password instead."))
        );
        assert_eq!(oracle.prompt_count(), 0);
    }
}

#[tokio::test(start_paused = true)]
async fn test_launch_rejected_stays_stopped() {
    let oracle = MockOracle::rejecting();
    let mut machine = SessionStateMachine::default();

    let outcome = machine.launch(&oracle).await.unwrap();

    assert!(matches!(outcome, GateOutcome::Stopped(_)));
    assert_eq!(machine.state(), LaunchState::Stopped);
}

#[tokio::test(start_paused = true)]
async fn test_prompt_failure_is_logged_only() {
    let mut oracle = MockOracle::accepting();
    oracle.fail_prompt = true;
    let mut machine = SessionStateMachine::new(BiometricPrompt {
        prompt_message: "Unlock Car Marketplace".to_string(),
        fallback_label: "Use PIN".to_string(),
    });

    let outcome = machine.launch(&oracle).await.unwrap();

    assert_eq!(outcome, GateOutcome::Faulted);
    assert_eq!(machine.state(), LaunchState::Authenticating);
}

#[tokio::test(start_paused = true)]
async fn test_leaving_splash_early_discards_launch() {
    // Given a launch running as a task of the splash screen
    let tasks = ScreenTasks::new("splash");
    let oracle = Arc::new(MockOracle::accepting());
    let task_oracle = oracle.clone();
    let handle = tasks.spawn(async move {
        let mut machine = SessionStateMachine::default();
        machine.launch(task_oracle.as_ref()).await
    });

    // When the screen goes away before the splash delay is over
    tasks.teardown();

    // Then the launch result is discarded and no prompt was shown
    assert!(handle.join().await.is_none());
    assert_eq!(oracle.prompt_count(), 0);
}
