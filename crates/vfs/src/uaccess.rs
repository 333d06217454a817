//! 用户空间访问
//!
//! 设备的 read / write 需要在内核缓冲区与调用者的地址空间之间拷贝数据，
//! 这一步可能因为地址无效而失败（对应 Linux 的 `copy_to_user` / `copy_from_user`）。
//!
//! - [`UserSliceWriter`]：内核 → 用户（read 方向）
//! - [`UserSliceReader`]：用户 → 内核（write 方向）
//!
//! [`UserPtrWriter`] / [`UserPtrReader`] 基于裸用户指针实现，地址检查与访问开关
//! 通过 [`UserAccessOps`] 委托给宿主内核；内核内部调用者可以直接使用 `&mut [u8]` / `&[u8]`。

use core::sync::atomic::{AtomicUsize, Ordering};

use crate::FsError;

/// 用户空间访问操作
///
/// 宿主内核需要实现此 trait 并在启动时注册。
pub trait UserAccessOps: Send + Sync {
    /// 检查 `[addr, addr + len)` 是否是当前任务可访问的用户地址
    fn access_ok(&self, addr: usize, len: usize) -> bool;

    /// 进入用户空间访问模式（例如 RISC-V 置位 SUM）
    fn enter_user_access(&self);

    /// 退出用户空间访问模式
    fn exit_user_access(&self);
}

static USER_ACCESS_OPS_DATA: AtomicUsize = AtomicUsize::new(0);
static USER_ACCESS_OPS_VTABLE: AtomicUsize = AtomicUsize::new(0);

/// 注册用户空间访问操作实现
///
/// # Safety
/// 必须在单线程环境下调用，且只能调用一次
pub unsafe fn register_user_access_ops(ops: &'static dyn UserAccessOps) {
    let ptr = ops as *const dyn UserAccessOps;
    // SAFETY: 将 fat pointer 拆分为 data 和 vtable 两部分存储
    let (data, vtable) =
        unsafe { core::mem::transmute::<*const dyn UserAccessOps, (usize, usize)>(ptr) };
    USER_ACCESS_OPS_DATA.store(data, Ordering::Release);
    USER_ACCESS_OPS_VTABLE.store(vtable, Ordering::Release);
}

/// 获取已注册的用户空间访问操作实现
///
/// # Panics
/// 如果尚未调用 [`register_user_access_ops`] 注册实现，则 panic
#[inline]
pub fn user_access_ops() -> &'static dyn UserAccessOps {
    let data = USER_ACCESS_OPS_DATA.load(Ordering::Acquire);
    let vtable = USER_ACCESS_OPS_VTABLE.load(Ordering::Acquire);
    if data == 0 {
        panic!("vfs: UserAccessOps not registered");
    }
    // SAFETY: 重组 fat pointer
    unsafe { &*core::mem::transmute::<(usize, usize), *const dyn UserAccessOps>((data, vtable)) }
}

/// 用户空间访问保护 guard
///
/// 在作用域结束时自动退出用户空间访问模式
pub struct UserAccessGuard;

impl UserAccessGuard {
    /// 创建新的用户空间访问保护
    #[inline]
    pub fn new() -> Self {
        user_access_ops().enter_user_access();
        Self
    }
}

impl Drop for UserAccessGuard {
    #[inline]
    fn drop(&mut self) {
        user_access_ops().exit_user_access();
    }
}

impl Default for UserAccessGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// 可写入的调用者缓冲区（read 方向）
pub trait UserSliceWriter {
    /// 剩余可写字节数
    fn len(&self) -> usize;

    /// 是否已写满
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 把 `data` 全部写入缓冲区当前位置并前移
    ///
    /// `data` 超出剩余长度或目标地址不可访问时返回 [`FsError::BadAddress`]。
    fn write_slice(&mut self, data: &[u8]) -> Result<(), FsError>;
}

/// 可读取的调用者缓冲区（write 方向）
pub trait UserSliceReader {
    /// 剩余可读字节数
    fn len(&self) -> usize;

    /// 是否已读完
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 从缓冲区当前位置读满 `out` 并前移
    ///
    /// 剩余数据不足或源地址不可访问时返回 [`FsError::BadAddress`]。
    fn read_slice(&mut self, out: &mut [u8]) -> Result<(), FsError>;
}

impl UserSliceWriter for &mut [u8] {
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    fn write_slice(&mut self, data: &[u8]) -> Result<(), FsError> {
        if data.len() > <[u8]>::len(self) {
            return Err(FsError::BadAddress);
        }
        let (head, tail) = core::mem::take(self).split_at_mut(data.len());
        head.copy_from_slice(data);
        *self = tail;
        Ok(())
    }
}

impl UserSliceReader for &[u8] {
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    fn read_slice(&mut self, out: &mut [u8]) -> Result<(), FsError> {
        if out.len() > <[u8]>::len(self) {
            return Err(FsError::BadAddress);
        }
        let src = *self;
        let (head, tail) = src.split_at(out.len());
        out.copy_from_slice(head);
        *self = tail;
        Ok(())
    }
}

/// 基于用户指针的写入端
pub struct UserPtrWriter {
    addr: usize,
    len: usize,
}

impl UserPtrWriter {
    /// 以用户地址和长度创建写入端
    ///
    /// # Safety
    /// `addr` 必须属于当前任务的地址空间；有效性仍会在每次拷贝前由
    /// [`UserAccessOps::access_ok`] 检查。
    pub unsafe fn new(addr: usize, len: usize) -> Self {
        Self { addr, len }
    }
}

impl UserSliceWriter for UserPtrWriter {
    fn len(&self) -> usize {
        self.len
    }

    fn write_slice(&mut self, data: &[u8]) -> Result<(), FsError> {
        if data.len() > self.len || !user_access_ops().access_ok(self.addr, data.len()) {
            return Err(FsError::BadAddress);
        }
        {
            let _guard = UserAccessGuard::new();
            // SAFETY: 目标区间已通过 access_ok 检查，且处于用户访问模式
            unsafe {
                core::ptr::copy_nonoverlapping(data.as_ptr(), self.addr as *mut u8, data.len());
            }
        }
        self.addr += data.len();
        self.len -= data.len();
        Ok(())
    }
}

/// 基于用户指针的读取端
pub struct UserPtrReader {
    addr: usize,
    len: usize,
}

impl UserPtrReader {
    /// 以用户地址和长度创建读取端
    ///
    /// # Safety
    /// 同 [`UserPtrWriter::new`]。
    pub unsafe fn new(addr: usize, len: usize) -> Self {
        Self { addr, len }
    }
}

impl UserSliceReader for UserPtrReader {
    fn len(&self) -> usize {
        self.len
    }

    fn read_slice(&mut self, out: &mut [u8]) -> Result<(), FsError> {
        if out.len() > self.len || !user_access_ops().access_ok(self.addr, out.len()) {
            return Err(FsError::BadAddress);
        }
        {
            let _guard = UserAccessGuard::new();
            // SAFETY: 源区间已通过 access_ok 检查，且处于用户访问模式
            unsafe {
                core::ptr::copy_nonoverlapping(self.addr as *const u8, out.as_mut_ptr(), out.len());
            }
        }
        self.addr += out.len();
        self.len -= out.len();
        Ok(())
    }
}
