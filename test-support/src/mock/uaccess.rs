//! 用户空间访问的 Mock 实现

use core::sync::atomic::{AtomicUsize, Ordering};

/// 低于此地址的访问视为缺页（模拟空指针页）
pub const MOCK_USER_FAULT_BELOW: usize = 0x1000;

/// Mock 的用户空间访问操作
///
/// 除了空指针页和会溢出的区间外，所有地址都视为可访问。
pub struct MockUserAccess {
    pub enter_count: AtomicUsize,
    pub exit_count: AtomicUsize,
}

impl MockUserAccess {
    pub const fn new() -> Self {
        Self {
            enter_count: AtomicUsize::new(0),
            exit_count: AtomicUsize::new(0),
        }
    }

    pub fn access_ok(&self, addr: usize, len: usize) -> bool {
        addr >= MOCK_USER_FAULT_BELOW && addr.checked_add(len).is_some()
    }

    pub fn enter_user_access(&self) {
        self.enter_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn exit_user_access(&self) {
        self.exit_count.fetch_add(1, Ordering::Relaxed);
    }
}

/// 全局 Mock 实例
pub static MOCK_USER_ACCESS: MockUserAccess = MockUserAccess::new();
