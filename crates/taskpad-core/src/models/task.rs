use serde::{Deserialize, Serialize};
use std::time::SystemTime;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u64);

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Category {
    Work,
    Personal,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Personal => "Personal",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormState {
    #[default]
    Idle,
    Pending,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub content: String,
    pub summary: String,
    pub category: Category,
    pub created_at: SystemTime,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub content: String,
    pub summary: String,
    pub category: Category,
    pub created_at: SystemTime,
}
