//! kfetch 系统信息设备
//!
//! 一个只允许独占打开的字符设备：调用者先写入 4 字节的信息掩码选择要显示的字段，
//! 再读取设备，得到一段左侧是 8 行 ASCII 企鹅、右侧是主机信息的文本报告。
//!
//! # 组件
//!
//! - [`ConfigMask`] - 当前的字段选择，只由 write 修改
//! - [`SnapshotCollector`] - 通过 [`HostFacts`] 采集一次主机信息快照
//! - [`ReportFormatter`] - 把快照与掩码渲染为有界的文本报告
//! - [`AccessGate`] - 保证同一时刻最多一个打开者
//! - [`KfetchDevice`] / [`KfetchFile`] - open / read / write / release 的分发
//! - [`KfetchModule`] - 模块加载时向 [`vfs::DeviceRegistry`] 注册设备，卸载时注销
//!
//! # 读语义
//!
//! 设备不维护读偏移：每次 read 都重新采集、重新渲染，并从报告开头拷贝
//! `min(请求长度, 报告长度)` 字节。连续的短读不会翻页。

#![no_std]

extern crate alloc;

pub mod config;
mod device;
mod format;
mod gate;
mod host;
mod mask;
mod module;
mod snapshot;

#[cfg(test)]
mod tests;

pub use config::{INFO_FIELD_CAP, KfetchConfig, LOGO_ROWS, LOGO_WIDTH};
pub use device::{KfetchDevice, KfetchFile};
pub use format::{InfoLine, LOGO, ReportFormatter};
pub use gate::{AccessGate, GateState};
pub use host::HostFacts;
pub use mask::ConfigMask;
pub use module::KfetchModule;
pub use snapshot::{HOSTNAME_PLACEHOLDER, SnapshotCollector, SystemSnapshot, UNKNOWN_PLACEHOLDER};

// Re-export uapi types for convenience
pub use uapi::kfetch::{InfoMask, KFETCH_BUF_SIZE, KFETCH_DEV_NAME, KFETCH_FULL_INFO};
