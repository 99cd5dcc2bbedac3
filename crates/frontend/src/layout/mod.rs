pub mod contents;
pub mod global_context;
pub mod mount_targets;
