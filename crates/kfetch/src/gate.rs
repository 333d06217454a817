//! 独占打开

use sync::ExclusiveFlag;
use vfs::FsError;

/// 设备的打开状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// 空闲（初始状态）
    Closed,
    /// 已被某个调用者打开
    Opened,
}

/// 独占打开门
///
/// 同一时刻最多一个打开者。第二次 [`acquire`](Self::acquire) 立即以
/// [`FsError::Busy`] 失败，不排队也不阻塞。
#[derive(Debug, Default)]
pub struct AccessGate {
    flag: ExclusiveFlag,
}

impl AccessGate {
    /// 创建处于 [`GateState::Closed`] 的门
    pub const fn new() -> Self {
        Self {
            flag: ExclusiveFlag::new(),
        }
    }

    /// Closed → Opened；已打开时返回 [`FsError::Busy`]
    pub fn acquire(&self) -> Result<(), FsError> {
        if self.flag.try_acquire() {
            Ok(())
        } else {
            Err(FsError::Busy)
        }
    }

    /// 无条件回到 Closed
    pub fn release(&self) {
        self.flag.release();
    }

    /// 当前状态
    pub fn state(&self) -> GateState {
        if self.flag.is_held() {
            GateState::Opened
        } else {
            GateState::Closed
        }
    }
}
