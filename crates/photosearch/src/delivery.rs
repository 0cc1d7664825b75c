use std::panic::AssertUnwindSafe;
use std::sync::OnceLock;
use tokio::sync::{mpsc, oneshot};
use tracing::{error, warn};

type Job = Box<dyn FnOnce() + Send>;

/// Single delivery context for search completions.
///
/// Every job handed to [`Delivery::deliver`] runs on one long-lived task, one
/// after another in arrival order, so two completions never run at the same
/// time. The task is spawned on first use and ends once every sender is gone.
#[derive(Default)]
pub(crate) struct Delivery {
    sender: OnceLock<mpsc::UnboundedSender<Job>>,
}

impl Delivery {
    /// Queue `job` and wait until it has run.
    pub(crate) async fn deliver<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let (done_tx, done_rx) = oneshot::channel();
        let job: Job = Box::new(move || {
            job();
            let _ = done_tx.send(());
        });

        if self.sender().send(job).is_err() {
            warn!("Completion dropped: delivery task is no longer running");
            return;
        }
        // Err only when the job panicked, which run_deliveries already logged
        let _ = done_rx.await;
    }

    fn sender(&self) -> &mpsc::UnboundedSender<Job> {
        self.sender.get_or_init(|| {
            let (tx, rx) = mpsc::unbounded_channel();
            tokio::spawn(run_deliveries(rx));
            tx
        })
    }
}

async fn run_deliveries(mut rx: mpsc::UnboundedReceiver<Job>) {
    while let Some(job) = rx.recv().await {
        // 1つの completion の panic で後続の配送を止めない
        if std::panic::catch_unwind(AssertUnwindSafe(job)).is_err() {
            error!("Search completion panicked");
        }
    }
}
