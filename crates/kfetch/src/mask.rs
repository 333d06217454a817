//! 信息掩码

use core::sync::atomic::{AtomicI32, Ordering};

use uapi::kfetch::InfoMask;

/// 当前生效的信息掩码
///
/// 保存调用者写入的原始 32 位值，未定义的位原样保留但不产生任何输出。
/// 掩码跨越 open / release 保持不变，直到下一次 write 覆盖。
#[derive(Debug)]
pub struct ConfigMask {
    raw: AtomicI32,
}

impl ConfigMask {
    /// 以给定的原始值创建
    pub const fn new(raw: i32) -> Self {
        Self {
            raw: AtomicI32::new(raw),
        }
    }

    /// 当前的原始值
    pub fn get(&self) -> i32 {
        self.raw.load(Ordering::Acquire)
    }

    /// 当前选择的已定义字段
    pub fn selected(&self) -> InfoMask {
        InfoMask::from_bits_truncate(self.get())
    }

    /// 整体替换掩码，返回旧值
    pub fn set(&self, raw: i32) -> i32 {
        self.raw.swap(raw, Ordering::AcqRel)
    }

    /// 用本机字节序的前缀字节覆盖掩码，返回 `(旧值, 新值)`
    ///
    /// 只使用前 4 个字节，多余的忽略。不足 4 个字节时只覆盖对应的前导字节，
    /// 其余字节保持旧值（不会补零）。空前缀不改变掩码。
    pub fn store_prefix(&self, prefix: &[u8]) -> (i32, i32) {
        let count = prefix.len().min(size_of::<i32>());
        let merge = |old: i32| {
            let mut bytes = old.to_ne_bytes();
            bytes[..count].copy_from_slice(&prefix[..count]);
            i32::from_ne_bytes(bytes)
        };
        match self
            .raw
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |old| Some(merge(old)))
        {
            Ok(old) | Err(old) => (old, merge(old)),
        }
    }
}

impl Default for ConfigMask {
    /// 默认选择全部字段（所有位均置 1）
    fn default() -> Self {
        Self::new(-1)
    }
}
