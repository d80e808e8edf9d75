//! Status helper enum mapping to the `task_statuses` lookup table.
//!
//! Variant discriminants match the seed data order (1-based) in the
//! migration that creates the lookup table.

/// Status ID type matching SMALLINT/SMALLSERIAL in the database.
pub type StatusId = i16;

/// Background task execution status.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Pending = 1,
    Running = 2,
    Completed = 3,
    Failed = 4,
}

impl TaskStatus {
    /// Return the database status ID.
    pub fn id(self) -> StatusId {
        self as StatusId
    }
}

impl From<TaskStatus> for StatusId {
    fn from(value: TaskStatus) -> Self {
        value as StatusId
    }
}
