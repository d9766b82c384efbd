//! Control law: the empty-source detector and the output decision table.

pub mod empty_source;
pub mod policy;
