//! 与用户空间共用定义和声明
//!
//! 包含常量、类型和函数声明，确保 kfetch 设备与用户空间程序的一致性

#![no_std]
#![allow(dead_code)]
// uapi 中包含大量与 Linux 兼容的常量/结构体字段定义；逐项补 `///` 噪声较大。
#![allow(missing_docs)]

pub mod errno;
pub mod fcntl;
pub mod kfetch;
pub mod sysinfo;
pub mod uts_namespace;
