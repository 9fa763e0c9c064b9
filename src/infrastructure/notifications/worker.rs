use std::{sync::Arc, time::Duration};

use tokio::{sync::watch, task::JoinHandle, time::MissedTickBehavior};

use crate::application::notifications::NotificationDispatcher;

/// Requeues jobs an earlier process left running, then runs the dispatcher
/// on every wake-up and on a fixed interval until
/// `shutdown` flips to true or its sender is dropped.
pub fn spawn_outbox_worker(
    dispatcher: Arc<NotificationDispatcher>,
    poll_interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    let signal = dispatcher.signal();
    tokio::spawn(async move {
        if let Err(err) = dispatcher.recover().await {
            tracing::error!(error = %err, "failed to requeue interrupted notification jobs");
        }

        let mut ticker = tokio::time::interval(poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = signal.notified() => {}
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                    continue;
                }
            }

            match dispatcher.run_pending().await {
                Ok(0) => {}
                Ok(handled) => tracing::info!(jobs = handled, "notification jobs processed"),
                Err(err) => tracing::error!(error = %err, "outbox poll failed"),
            }
        }
        tracing::info!("outbox worker stopped");
    })
}
