use crate::{ParseSignalError, ShutdownSignal};

use googletest::assert_that;
use googletest::prelude::{eq, err, ok};

#[test]
fn given_signal_names_when_parsed_then_variants_match() {
    assert_that!("interrupt".parse::<ShutdownSignal>(), ok(eq(&ShutdownSignal::Interrupt)));
    assert_that!("SIGTERM".parse::<ShutdownSignal>(), ok(eq(&ShutdownSignal::Terminate)));
    assert_that!(" quit ".parse::<ShutdownSignal>(), ok(eq(&ShutdownSignal::Quit)));
    assert_that!("hup".parse::<ShutdownSignal>(), ok(eq(&ShutdownSignal::Hangup)));
}

#[test]
fn given_unknown_name_when_parsed_then_error_names_input() {
    assert_that!(
        "sigkill".parse::<ShutdownSignal>(),
        err(eq(&ParseSignalError("sigkill".to_string())))
    );
}

#[test]
fn given_signal_when_displayed_then_uses_unix_name() {
    assert_that!(ShutdownSignal::Interrupt.to_string(), eq("SIGINT"));
    assert_that!(ShutdownSignal::Terminate.to_string(), eq("SIGTERM"));
}

#[cfg(unix)]
mod unix {
    use crate::tests::{CountingDrain, counters};
    use crate::{
        CancelReason, Coordinator, Drainable, ShutdownCause, ShutdownSignal, ShutdownTrigger,
        SignalSubscription,
    };

    use std::sync::Arc;
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    use googletest::assert_that;
    use googletest::prelude::{eq, len};
    use nix::sys::signal::{Signal, raise};
    use serial_test::serial;
    use tokio::time::timeout;

    #[tokio::test]
    #[serial]
    async fn given_subscription_when_sigterm_raised_then_recv_returns_terminate() {
        // Given
        let mut subscription =
            SignalSubscription::register(&[ShutdownSignal::Interrupt, ShutdownSignal::Terminate])
                .unwrap();

        // When
        raise(Signal::SIGTERM).unwrap();
        let received = timeout(Duration::from_secs(5), subscription.recv())
            .await
            .unwrap();

        // Then
        assert_that!(received, eq(ShutdownSignal::Terminate));
    }

    #[tokio::test]
    #[serial]
    async fn given_duplicate_signals_when_registered_then_one_stream_each() {
        let subscription = SignalSubscription::register(&[
            ShutdownSignal::Hangup,
            ShutdownSignal::Hangup,
            ShutdownSignal::Quit,
        ])
        .unwrap();

        assert_that!(subscription.len(), eq(2));
    }

    #[tokio::test]
    #[serial]
    async fn given_empty_subscription_when_recv_then_never_resolves() {
        let mut subscription = SignalSubscription::register(&[]).unwrap();

        assert!(subscription.is_empty());
        let received = timeout(Duration::from_millis(20), subscription.recv()).await;
        assert!(received.is_err());
    }

    #[tokio::test]
    #[serial]
    async fn given_coordinator_when_sighup_raised_then_cause_is_signal_and_drains_run() {
        // Given
        // Keeps a SIGHUP handler installed so a raise before the coordinator
        // registers cannot take the test process down.
        let _guard = SignalSubscription::register(&[ShutdownSignal::Hangup]).unwrap();
        let coordinator =
            Coordinator::new(Duration::from_secs(5)).with_signals([ShutdownSignal::Hangup]);
        let (started, finished) = counters();
        let drainables: Vec<Arc<dyn Drainable>> =
            vec![Arc::new(CountingDrain::new("http", &started, &finished))];
        let trigger = ShutdownTrigger::new();

        // When
        let run = tokio::spawn(async move { coordinator.run(&trigger, &drainables).await });
        let report = timeout(Duration::from_secs(5), async {
            loop {
                raise(Signal::SIGHUP).unwrap();
                tokio::time::sleep(Duration::from_millis(20)).await;
                if run.is_finished() {
                    break run.await.unwrap();
                }
            }
        })
        .await
        .unwrap()
        .unwrap();

        // Then
        assert_that!(report.cause(), eq(&ShutdownCause::Signal(ShutdownSignal::Hangup)));
        assert_that!(report.outcomes(), len(eq(1)));
        assert_that!(finished.load(Ordering::SeqCst), eq(1));
    }

    #[tokio::test]
    #[serial]
    async fn given_default_signal_set_when_trigger_fires_then_cause_is_cancellation() {
        // Given
        let coordinator = Coordinator::new(Duration::from_secs(5));
        assert_that!(coordinator.signals().len(), eq(2));
        let (started, finished) = counters();
        let drainables: Vec<Arc<dyn Drainable>> =
            vec![Arc::new(CountingDrain::new("http", &started, &finished))];
        let trigger = ShutdownTrigger::new();

        // When
        let run = {
            let trigger = trigger.clone();
            tokio::spawn(async move { coordinator.run(&trigger, &drainables).await })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        trigger.cancel_with("deploy");
        let report = timeout(Duration::from_secs(5), run)
            .await
            .unwrap()
            .unwrap()
            .unwrap();

        // Then
        assert_that!(
            report.cause(),
            eq(&ShutdownCause::Cancelled(CancelReason::Requested("deploy".to_string())))
        );
        assert!(report.cause().signal().is_none());
        assert_that!(finished.load(Ordering::SeqCst), eq(1));
    }

    #[tokio::test]
    #[serial]
    async fn given_dropped_subscription_when_signal_raised_then_absorbed_by_process_handler() {
        // Given
        let subscription = SignalSubscription::register(&[ShutdownSignal::Hangup]).unwrap();
        drop(subscription);

        // When
        raise(Signal::SIGHUP).unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;

        // Then
        let mut next = SignalSubscription::register(&[ShutdownSignal::Hangup]).unwrap();
        raise(Signal::SIGHUP).unwrap();
        let received = timeout(Duration::from_secs(5), next.recv()).await.unwrap();
        assert_that!(received, eq(ShutdownSignal::Hangup));
    }

    #[tokio::test]
    #[serial]
    async fn given_repeated_registrations_when_each_dropped_then_new_ones_still_receive() {
        for _ in 0..3 {
            let mut subscription = SignalSubscription::register(&[ShutdownSignal::Quit]).unwrap();
            raise(Signal::SIGQUIT).unwrap();
            let received = timeout(Duration::from_secs(5), subscription.recv())
                .await
                .unwrap();
            assert_that!(received, eq(ShutdownSignal::Quit));
        }
    }
}
