//! 设备文件层
//!
//! 此 crate 为字符设备驱动提供类文件的访问接口，包括：
//!
//! - [`File`] trait - 打开后的会话接口（read / write / release）
//! - [`FsError`] - 与 POSIX 兼容的错误码
//! - [`UserSliceReader`] / [`UserSliceWriter`] - 跨越用户空间边界的字节拷贝
//! - [`CharDriver`] / [`DeviceRegistry`] - 字符设备的注册与打开分发
//! - [`ChrdevTable`] - 动态分配主设备号的内存注册表

#![no_std]

extern crate alloc;

pub mod chrdev;
pub mod dev;
pub mod devno;
pub mod error;
mod file;
pub mod uaccess;

// Re-export error
pub use error::FsError;

// Re-export dev
pub use dev::{major, makedev, minor};

// Re-export devno
pub use devno::chrdev_major;

// Re-export file
pub use file::File;

// Re-export chrdev
pub use chrdev::{CharDriver, ChrdevTable, DeviceHandle, DeviceRegistry};

// Re-export uaccess
pub use uaccess::{
    UserAccessGuard, UserAccessOps, UserPtrReader, UserPtrWriter, UserSliceReader,
    UserSliceWriter, register_user_access_ops, user_access_ops,
};

// Re-export uapi types for convenience
pub use uapi::fcntl::{OpenFlags, SeekWhence};
