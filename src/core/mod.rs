//! 核心框架模块
//!
//! - Command: 语义命令与 shell 语法解析

pub mod command;

pub use command::{Command, CommandParseError, HELP};
