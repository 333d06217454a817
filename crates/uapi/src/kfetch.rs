//! kfetch 设备的用户空间接口
//!
//! 用户程序先向 `/dev/kfetch` 写入一个 4 字节（本机字节序）的信息掩码，
//! 再读取设备获得渲染好的系统信息报告。

use bitflags::bitflags;

/// 设备节点名称（`/dev/kfetch`）
pub const KFETCH_DEV_NAME: &str = "kfetch";

/// 一次读取返回的报告的最大字节数
pub const KFETCH_BUF_SIZE: usize = 1024;

/// 可选信息字段的数量
pub const KFETCH_NUM_INFO: usize = 6;

pub const KFETCH_RELEASE: i32 = 1 << 0;
pub const KFETCH_NUM_CPUS: i32 = 1 << 1;
pub const KFETCH_CPU_MODEL: i32 = 1 << 2;
pub const KFETCH_MEM: i32 = 1 << 3;
pub const KFETCH_UPTIME: i32 = 1 << 4;
pub const KFETCH_NUM_PROCS: i32 = 1 << 5;

/// 全部已定义字段
pub const KFETCH_FULL_INFO: i32 = (1 << KFETCH_NUM_INFO) - 1;

bitflags! {
    /// 报告字段选择掩码
    ///
    /// 写入设备的原始值是有符号 32 位整数，未定义的位会被忽略；
    /// 使用 [`InfoMask::from_bits_truncate`] 从原始值得到已定义的部分。
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct InfoMask: i32 {
        /// 内核版本
        const RELEASE = KFETCH_RELEASE;
        /// 在线 / 存在的 CPU 核数
        const NUM_CPUS = KFETCH_NUM_CPUS;
        /// CPU 型号
        const CPU_MODEL = KFETCH_CPU_MODEL;
        /// 空闲 / 总内存
        const MEM = KFETCH_MEM;
        /// 运行时间
        const UPTIME = KFETCH_UPTIME;
        /// 进程数
        const NUM_PROCS = KFETCH_NUM_PROCS;
    }
}

impl InfoMask {
    /// 编码为写入设备的 4 字节载荷
    pub fn to_payload(self) -> [u8; 4] {
        self.bits().to_ne_bytes()
    }
}
