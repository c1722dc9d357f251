pub mod in_memory;

pub use in_memory::InMemoryTaskStore;

use crate::models::{CoreError, NewTask, Task, TaskId};

pub type StoreResult<T> = Result<T, CoreError>;

pub trait TaskStore: Send + Sync {
    /// Assigns the next id and inserts the record at the front of the
    /// display order. Ids advance monotonically and are never reused.
    fn insert(&self, new_task: NewTask) -> StoreResult<Task>;

    /// Newest first.
    fn list(&self) -> StoreResult<Vec<Task>>;

    /// Removes the record if present; unknown ids are a no-op, not an error.
    fn delete(&self, task_id: TaskId) -> StoreResult<()>;

    fn len(&self) -> StoreResult<usize>;
}
