//! 设备文件错误类型
//!
//! 定义了与 POSIX 兼容的错误码，可通过 [`FsError::to_errno()`] 转换为系统调用错误码。

use uapi::errno::{EBADF, EBUSY, EEXIST, EFAULT, EINVAL, ENODEV, ENOENT, EOPNOTSUPP};

/// 设备文件错误类型
///
/// 各错误码对应标准 POSIX errno 值。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsError {
    /// 名称不存在 (-ENOENT)
    NotFound,
    /// 名称已存在 (-EEXIST)
    AlreadyExists,

    /// 文件未以所需的模式打开 (-EBADF)
    BadFileDescriptor,

    /// 无效参数 (-EINVAL)
    InvalidArgument,

    /// 设备不存在 (-ENODEV)
    NoDevice,
    /// 设备或资源忙 (-EBUSY)
    Busy,

    /// 用户空间地址无效，拷贝失败 (-EFAULT)
    BadAddress,

    /// 操作不支持 (-EOPNOTSUPP)
    NotSupported,
}

impl FsError {
    /// 转换为系统调用错误码（负数）
    pub fn to_errno(&self) -> isize {
        let errno = match self {
            FsError::NotFound => ENOENT,
            FsError::AlreadyExists => EEXIST,
            FsError::BadFileDescriptor => EBADF,
            FsError::InvalidArgument => EINVAL,
            FsError::NoDevice => ENODEV,
            FsError::Busy => EBUSY,
            FsError::BadAddress => EFAULT,
            FsError::NotSupported => EOPNOTSUPP,
        };
        -(errno as isize)
    }
}
