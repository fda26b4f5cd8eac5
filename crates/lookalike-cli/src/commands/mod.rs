pub mod policy;
pub mod reconcile;
pub mod shared;
pub mod task;
