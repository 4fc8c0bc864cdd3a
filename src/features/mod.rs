//! Feature modules for postpone.

pub mod postpone;
