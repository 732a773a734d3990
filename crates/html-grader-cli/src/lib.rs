//! html-grader CLI — grade a fetched or local HTML page against a checks file.

pub mod command;
pub mod config;

pub use command::{run, GradeArgs, Target};
pub use config::{resolve_checks_path, resolve_output_path};
