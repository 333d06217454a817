//! 文件抽象层 - 打开后的会话接口
//!
//! 该模块定义了统一的文件操作接口 [`File`] trait。字符设备在 `open` 时返回一个
//! `Arc<dyn File>`，之后的 read / write 都经由它分发；最后一个引用被释放即为 `release`。
//!
//! 数据经由 [`UserSliceReader`] / [`UserSliceWriter`] 跨越用户空间边界，
//! 拷贝失败以 [`FsError::BadAddress`] 报告。

use uapi::fcntl::{OpenFlags, SeekWhence};

use crate::{FsError, UserSliceReader, UserSliceWriter};

/// 文件操作的统一接口
pub trait File: Send + Sync {
    /// 检查文件是否可读
    fn readable(&self) -> bool;

    /// 检查文件是否可写
    fn writable(&self) -> bool;

    /// 从文件读取数据，最多写满 `buf`，返回实际读取的字节数
    fn read(&self, buf: &mut dyn UserSliceWriter) -> Result<usize, FsError>;

    /// 向文件写入 `buf` 中的数据，返回被消费的字节数
    fn write(&self, buf: &mut dyn UserSliceReader) -> Result<usize, FsError>;

    /// 设置文件偏移量（可选方法）
    fn lseek(&self, _offset: isize, _whence: SeekWhence) -> Result<usize, FsError> {
        Err(FsError::NotSupported)
    }

    /// 获取当前偏移量（可选方法）
    fn offset(&self) -> usize {
        0
    }

    /// 获取打开标志（可选方法）
    fn flags(&self) -> OpenFlags {
        OpenFlags::empty()
    }

    /// 执行设备特定的控制操作（可选方法，用于 ioctl）
    fn ioctl(&self, _request: u32, _arg: usize) -> Result<isize, FsError> {
        Err(FsError::NotSupported)
    }

    /// 获取 Any trait 引用，用于安全的类型转换
    fn as_any(&self) -> &dyn core::any::Any;
}
