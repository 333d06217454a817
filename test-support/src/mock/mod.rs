//! Mock 实现模块
//!
//! 提供架构操作、用户空间访问与主机信息的 Mock 实现，用于测试。
//!
//! 注意：这里不依赖使用这些 Mock 的 crate（避免循环依赖）。
//! 各 crate 在 `cfg(test)` 下为这些类型实现自己的 trait。

pub mod arch;
pub mod host;
pub mod uaccess;
