//! 文件服务模块
//!
//! 提供文件系统抽象；默认注册本地 Provider

pub mod local;
pub mod service;

pub use local::LocalFileProvider;
pub use service::FileService;
