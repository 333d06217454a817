//! 文件打开标志

use bitflags::bitflags;

bitflags! {
    /// `open(2)` 标志位
    ///
    /// 访问模式占用低两位（`O_ACCMODE`），不是独立的位，
    /// 因此判断读写权限时应使用 [`OpenFlags::readable`] / [`OpenFlags::writable`]。
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct OpenFlags: u32 {
        const O_RDONLY = 0o0;
        const O_WRONLY = 0o1;
        const O_RDWR = 0o2;
        const O_ACCMODE = 0o3;
        const O_NONBLOCK = 0o4000;
        const O_CLOEXEC = 0o2000000;
    }
}

impl OpenFlags {
    /// 访问模式是否允许读
    pub fn readable(&self) -> bool {
        let mode = self.bits() & Self::O_ACCMODE.bits();
        mode == Self::O_RDONLY.bits() || mode == Self::O_RDWR.bits()
    }

    /// 访问模式是否允许写
    pub fn writable(&self) -> bool {
        let mode = self.bits() & Self::O_ACCMODE.bits();
        mode == Self::O_WRONLY.bits() || mode == Self::O_RDWR.bits()
    }
}

/// `lseek(2)` 的 whence 参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum SeekWhence {
    /// 从文件开头计算
    Set = 0,
    /// 从当前位置计算
    Cur = 1,
    /// 从文件末尾计算
    End = 2,
}
