//! 测试支持 crate
//!
//! 提供外部协作者的 Mock 实现，供各 crate 的单元测试使用

#![no_std]

extern crate alloc;

pub mod mock;
