use std::sync::Arc;
use std::time::{Duration, SystemTime};

use serde::Serialize;
use tokio::sync::{Mutex, Notify};
use tokio::time::timeout;

use crate::enrichment::enrich;
use crate::models::{CoreError, FormState, NewTask, Task, TaskId};
use crate::store::{InMemoryTaskStore, TaskStore};

pub type SessionResult<T> = Result<T, CoreError>;

pub const ENRICHMENT_DELAY: Duration = Duration::from_millis(1200);

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub tasks: Vec<Task>,
    pub creating: bool,
}

#[derive(Clone)]
pub struct PlaygroundSession {
    store: Arc<dyn TaskStore>,
    state: Arc<Mutex<SessionState>>,
    commit_notify: Arc<Notify>,
    delay: Duration,
}

#[derive(Default)]
struct SessionState {
    form: FormState,
    last_commit: Option<Task>,
}

impl PlaygroundSession {
    pub fn new() -> Self {
        Self::with_store(Arc::new(InMemoryTaskStore::seeded()))
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self::with_store_and_delay(Arc::new(InMemoryTaskStore::seeded()), delay)
    }

    pub fn with_store(store: Arc<dyn TaskStore>) -> Self {
        Self::with_store_and_delay(store, ENRICHMENT_DELAY)
    }

    pub fn with_store_and_delay(store: Arc<dyn TaskStore>, delay: Duration) -> Self {
        Self {
            store,
            state: Arc::new(Mutex::new(SessionState::default())),
            commit_notify: Arc::new(Notify::new()),
            delay,
        }
    }

    /// Starts a create: validates input, claims the busy window, and
    /// schedules the delayed commit. The new record is not visible until
    /// the delay elapses. Rejected with `Busy` while a create is pending.
    pub async fn submit_create(&self, title: &str, content: &str) -> SessionResult<()> {
        if title.trim().is_empty() || content.trim().is_empty() {
            return Err(CoreError::invalid_input(
                "title and content must be non-empty",
            ));
        }

        {
            let mut state = self.state.lock().await;
            if state.form == FormState::Pending {
                return Err(CoreError::busy("a create is already pending"));
            }
            state.form = FormState::Pending;
        }

        let store = self.store.clone();
        let state = self.state.clone();
        let notify = self.commit_notify.clone();
        let delay = self.delay;
        let title = title.to_string();
        let content = content.to_string();

        tokio::spawn(async move {
            tracing::debug!(
                delay_ms = delay.as_millis() as u64,
                "simulated enrichment call starting"
            );
            tokio::time::sleep(delay).await;

            let enrichment = enrich(&content);
            let committed = store.insert(NewTask {
                title,
                content,
                summary: enrichment.summary,
                category: enrichment.category,
                created_at: SystemTime::now(),
            });

            let mut state = state.lock().await;
            match committed {
                Ok(task) => {
                    tracing::info!(
                        id = task.id.0,
                        category = task.category.as_str(),
                        "task committed"
                    );
                    state.last_commit = Some(task);
                }
                Err(error) => {
                    tracing::error!(error = %error, "task insert failed");
                    state.last_commit = None;
                }
            }
            state.form = FormState::Idle;
            drop(state);
            notify.notify_waiters();
        });

        Ok(())
    }

    /// Blocks until the pending create commits and returns the committed
    /// record. Errors only on timeout or when no commit has ever happened.
    pub async fn wait_for_commit(
        &self,
        timeout_duration: Option<Duration>,
    ) -> SessionResult<Task> {
        loop {
            let notified = self.commit_notify.notified();
            tokio::pin!(notified);
            // Register before re-checking state so a commit between the
            // check and the await is not lost.
            notified.as_mut().enable();

            {
                let state = self.state.lock().await;
                if state.form == FormState::Idle {
                    return state
                        .last_commit
                        .clone()
                        .ok_or_else(|| CoreError::internal("no committed task to report"));
                }
            }

            if let Some(duration) = timeout_duration {
                timeout(duration, notified).await.map_err(|_| {
                    CoreError::internal("timed out waiting for the pending create to commit")
                })?;
            } else {
                notified.await;
            }
        }
    }

    pub async fn create(&self, title: &str, content: &str) -> SessionResult<Task> {
        self.submit_create(title, content).await?;
        self.wait_for_commit(None).await
    }

    pub fn delete(&self, task_id: TaskId) -> SessionResult<()> {
        self.store.delete(task_id)
    }

    pub async fn snapshot(&self) -> SessionResult<RenderSnapshot> {
        let creating = {
            let state = self.state.lock().await;
            state.form == FormState::Pending
        };
        Ok(RenderSnapshot {
            tasks: self.store.list()?,
            creating,
        })
    }
}

impl Default for PlaygroundSession {
    fn default() -> Self {
        Self::new()
    }
}
