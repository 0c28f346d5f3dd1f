//! zpad - 多标签、可分屏的文本编辑器内核
//!
//! 模块结构：
//! - core: 命令（Command）与命令行解析
//! - models: 数据模型（TextBuffer, EditHistory, FileTree）
//! - kernel: 状态、Store、编辑器布局、主题、资源管理器与 IO 适配器
//! - app: 应用层（Workbench）

pub mod app;
pub mod core;
pub mod kernel;
pub mod models;
