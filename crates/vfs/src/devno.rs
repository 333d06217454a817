//! 主设备号分配规则

/// 字符设备主设备号
pub mod chrdev_major {
    /// /dev/console
    pub const CONSOLE: u32 = 5;
    /// /dev/misc/*
    pub const MISC: u32 = 10;

    /// 动态分配的起点（包含），从高到低分配
    pub const DYN_START: u32 = 254;
    /// 动态分配的终点（包含）
    pub const DYN_END: u32 = 234;

    /// 是否属于动态分配区间
    pub const fn is_dynamic(major: u32) -> bool {
        major >= DYN_END && major <= DYN_START
    }
}
