//! Background task worker for the Hyperion backend.
//!
//! Claims queued tasks from the shared `tasks` table and executes them.
//! Claiming goes through `SELECT FOR UPDATE SKIP LOCKED`, so several worker
//! processes can share one queue without double-execution.

pub mod executor;
pub mod runner;
