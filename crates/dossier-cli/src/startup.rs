//! The one-shot startup delay behind the loading screen.

use std::{
  sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
  },
  time::Duration,
};

use tokio::task::JoinHandle;

/// A spawned task that sleeps once and then marks loading as finished.
///
/// Aborted by [`Startup::cancel`] or on drop; an aborted task never flips
/// the flag.
#[derive(Debug)]
pub struct Startup {
  done: Arc<AtomicBool>,
  task: JoinHandle<()>,
}

impl Startup {
  /// Must be called from inside a tokio runtime.
  pub fn spawn(delay: Duration) -> Self {
    let done = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&done);
    let task = tokio::spawn(async move {
      tokio::time::sleep(delay).await;
      flag.store(true, Ordering::Release);
      tracing::debug!(?delay, "startup finished");
    });
    Self { done, task }
  }

  pub fn is_loading(&self) -> bool { !self.done.load(Ordering::Acquire) }

  pub fn cancel(&self) {
    if !self.task.is_finished() {
      tracing::debug!("startup cancelled");
    }
    self.task.abort();
  }
}

impl Drop for Startup {
  fn drop(&mut self) { self.task.abort(); }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn flag_flips_after_delay() {
    let startup = Startup::spawn(Duration::from_millis(10));
    assert!(startup.is_loading());

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(!startup.is_loading());
  }

  #[tokio::test]
  async fn cancelled_startup_never_finishes() {
    let startup = Startup::spawn(Duration::from_millis(50));
    startup.cancel();

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(startup.is_loading());
  }

  #[tokio::test]
  async fn cancel_after_finish_keeps_flag() {
    let startup = Startup::spawn(Duration::ZERO);
    tokio::time::sleep(Duration::from_millis(100)).await;
    startup.cancel();
    assert!(!startup.is_loading());
  }

  #[tokio::test]
  async fn huge_delay_stays_loading_until_cancelled() {
    let startup = Startup::spawn(Duration::from_secs(u64::MAX));
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(startup.is_loading());

    startup.cancel();
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(startup.is_loading());
    assert!(startup.task.is_finished());
  }

  #[tokio::test]
  async fn drop_aborts_the_task() {
    let startup = Startup::spawn(Duration::from_millis(50));
    let flag = Arc::clone(&startup.done);
    drop(startup);

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(!flag.load(Ordering::Acquire));
  }
}
