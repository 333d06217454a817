//! 单槽独占标志
//!
//! 与 [`crate::SpinLock`] 不同，独占标志从不自旋等待：第二个获取者立即失败。
//! 持有期间不关闭中断，因此可以跨越多次系统调用持有（例如从 `open` 到 `release`）。

use core::sync::atomic::{AtomicBool, Ordering};

/// 单槽独占标志
///
/// 只有两个状态：空闲与被持有。不是计数信号量，也没有等待队列。
///
/// # 示例
/// ```ignore
/// static OPENED: ExclusiveFlag = ExclusiveFlag::new();
/// if !OPENED.try_acquire() {
///     return Err(FsError::Busy);
/// }
/// // ...
/// OPENED.release();
/// ```
#[derive(Debug, Default)]
pub struct ExclusiveFlag {
    held: AtomicBool,
}

impl ExclusiveFlag {
    /// 创建一个空闲的独占标志
    pub const fn new() -> Self {
        Self {
            held: AtomicBool::new(false),
        }
    }

    /// 尝试获取标志
    ///
    /// 原子地完成“空闲 → 被持有”的转换；已被持有时立即返回 `false`。
    pub fn try_acquire(&self) -> bool {
        self.held
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
    }

    /// 释放标志
    ///
    /// 无条件回到空闲状态，对空闲的标志调用也是安全的。
    pub fn release(&self) {
        self.held.store(false, Ordering::Release);
    }

    /// 标志当前是否被持有
    pub fn is_held(&self) -> bool {
        self.held.load(Ordering::Acquire)
    }
}
