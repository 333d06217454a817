//! 自旋锁实现
//!
//! 基于原子操作实现自旋锁机制，并在持锁期间关闭本地中断。

use core::{
    hint,
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};

use crate::arch_ops;

/// 原始自旋锁，实现 `lock_api::RawMutex`。
///
/// 获取锁之前先关闭本地中断，并把之前的中断状态保存在锁内部；
/// 释放锁之后再恢复。不可重入。
///
/// 注意：关中断只能阻止**本地 CPU** 的“任务 vs 本地中断”并发，
/// 其他 CPU 的并行访问由原子标志保证互斥。
#[derive(Debug)]
pub struct RawSpinLock {
    lock: AtomicBool,
    /// 持锁者保存的中断状态，只在持锁期间有意义
    saved_flags: AtomicUsize,
}

impl RawSpinLock {
    /// 创建一个新的 RawSpinLock 实例。
    pub const fn new() -> Self {
        RawSpinLock {
            lock: AtomicBool::new(false),
            saved_flags: AtomicUsize::new(0),
        }
    }
}

impl Default for RawSpinLock {
    fn default() -> Self {
        Self::new()
    }
}

// SAFETY: lock/try_lock 通过 Acquire 的 CAS 建立互斥，unlock 使用 Release 释放，
// 满足 lock_api 对 RawMutex 的要求。
unsafe impl lock_api::RawMutex for RawSpinLock {
    #[allow(clippy::declare_interior_mutable_const)]
    const INIT: Self = RawSpinLock::new();

    // 中断状态属于当前 CPU，guard 不能跨线程移动
    type GuardMarker = lock_api::GuardNoSend;

    fn lock(&self) {
        // SAFETY: 返回的状态在 unlock 中恢复
        let flags = unsafe { arch_ops().read_and_disable_interrupts() };

        while self
            .lock
            .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            hint::spin_loop();
        }

        self.saved_flags.store(flags, Ordering::Relaxed);
    }

    fn try_lock(&self) -> bool {
        // SAFETY: 失败时立即恢复，成功时在 unlock 中恢复
        let flags = unsafe { arch_ops().read_and_disable_interrupts() };

        if self
            .lock
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
        {
            self.saved_flags.store(flags, Ordering::Relaxed);
            true
        } else {
            unsafe { arch_ops().restore_interrupts(flags) };
            false
        }
    }

    unsafe fn unlock(&self) {
        let flags = self.saved_flags.load(Ordering::Relaxed);
        self.lock.store(false, Ordering::Release);
        // SAFETY: flags 是持锁时保存的状态
        unsafe { arch_ops().restore_interrupts(flags) };
    }

    fn is_locked(&self) -> bool {
        self.lock.load(Ordering::Relaxed)
    }
}
