use std::sync::{Mutex, MutexGuard};
use std::time::SystemTime;

use crate::models::{Category, CoreError, NewTask, Task, TaskId};
use crate::store::{StoreResult, TaskStore};

const SEED_TITLE: &str = "Complete Project Documentation";
const SEED_CONTENT: &str = "Write the README for the assessment and check for typos.";
const SEED_SUMMARY: &str = "Finalize and proofread documentation.";
const SEED_CATEGORY: Category = Category::Work;

pub struct InMemoryTaskStore {
    state: Mutex<StoreState>,
}

struct StoreState {
    next_id: u64,
    // Front of the vec is the newest record.
    tasks: Vec<Task>,
}

impl InMemoryTaskStore {
    /// A fresh store holds exactly one example task so the first render is
    /// never an ambiguous empty state.
    pub fn seeded() -> Self {
        let seed = Task {
            id: TaskId(1),
            title: SEED_TITLE.to_string(),
            content: SEED_CONTENT.to_string(),
            summary: SEED_SUMMARY.to_string(),
            category: SEED_CATEGORY,
            created_at: SystemTime::now(),
        };
        Self {
            state: Mutex::new(StoreState {
                next_id: seed.id.0.saturating_add(1),
                tasks: vec![seed],
            }),
        }
    }

    fn lock_state(&self) -> StoreResult<MutexGuard<'_, StoreState>> {
        self.state
            .lock()
            .map_err(|_| CoreError::internal("task store mutex poisoned"))
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl TaskStore for InMemoryTaskStore {
    fn insert(&self, new_task: NewTask) -> StoreResult<Task> {
        let mut state = self.lock_state()?;

        let task_id = TaskId(state.next_id);
        state.next_id = state.next_id.saturating_add(1);

        let record = Task {
            id: task_id,
            title: new_task.title,
            content: new_task.content,
            summary: new_task.summary,
            category: new_task.category,
            created_at: new_task.created_at,
        };
        state.tasks.insert(0, record.clone());

        Ok(record)
    }

    fn list(&self) -> StoreResult<Vec<Task>> {
        Ok(self.lock_state()?.tasks.clone())
    }

    fn delete(&self, task_id: TaskId) -> StoreResult<()> {
        let mut state = self.lock_state()?;
        state.tasks.retain(|task| task.id != task_id);
        Ok(())
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.lock_state()?.tasks.len())
    }
}
