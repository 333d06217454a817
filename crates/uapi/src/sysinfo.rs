use core::ffi::{c_long, c_uint, c_ulong};
use core::mem::size_of;

/// 系统信息结构体
/// 对应 Linux 的 `struct sysinfo`，kfetch 只使用其中的内存字段（`si_meminfo` 填充的部分）
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SysInfo {
    /// 系统启动后经过的时间，单位为秒
    pub uptime: c_long,
    /// 1 分钟、5 分钟和 15 分钟的平均负载
    pub loads: [c_ulong; 3],
    /// 总内存大小，单位为 `mem_unit`
    pub totalram: c_ulong,
    /// 空闲内存大小，单位为 `mem_unit`
    pub freeram: c_ulong,
    /// 共享内存大小，单位为 `mem_unit`
    pub sharedram: c_ulong,
    /// 用作缓冲区的内存大小，单位为 `mem_unit`
    pub bufferram: c_ulong,
    /// 总交换空间大小，单位为 `mem_unit`
    pub totalswap: c_ulong,
    /// 可用交换空间大小，单位为 `mem_unit`
    pub freeswap: c_ulong,
    /// 当前进程数
    pub procs: u16,
    /// 显式 padding（与 Linux UAPI 一致）
    pub pad: u16,
    /// 高端内存总大小，单位为 `mem_unit`
    pub totalhigh: c_ulong,
    /// 高端可用内存大小，单位为 `mem_unit`
    pub freehigh: c_ulong,
    /// 内存单位大小，单位为字节
    pub mem_unit: c_uint,
    /// Padding: libc5 uses this. See `include/uapi/linux/sysinfo.h`.
    pub _f: [u8; Self::F_LEN],
}

impl SysInfo {
    // `include/uapi/linux/sysinfo.h`:
    //   char _f[20-2*sizeof(__kernel_ulong_t)-sizeof(__u32)];
    const F_LEN: usize = 20 - 2 * size_of::<c_ulong>() - size_of::<c_uint>();

    /// 创建一个新的 SysInfo 实例，所有字段（包括 padding）初始化为零
    pub fn new() -> Self {
        // SAFETY: all-zero is a valid bit-pattern for SysInfo.
        unsafe { core::mem::zeroed() }
    }

    /// 以页帧计数构造内存信息（`mem_unit` 为页大小）
    pub fn from_frames(total_frames: usize, free_frames: usize, page_size: usize) -> Self {
        let mut info = Self::new();
        info.totalram = total_frames as c_ulong;
        info.freeram = free_frames as c_ulong;
        info.mem_unit = page_size as c_uint;
        info
    }

    /// 总内存字节数
    pub fn total_bytes(&self) -> u64 {
        self.scale(self.totalram)
    }

    /// 空闲内存字节数
    pub fn free_bytes(&self) -> u64 {
        self.scale(self.freeram)
    }

    /// `mem_unit` 为 0 时按 1 字节处理（旧内核的语义）
    fn scale(&self, count: c_ulong) -> u64 {
        let unit = if self.mem_unit == 0 { 1 } else { self.mem_unit as u64 };
        (count as u64).saturating_mul(unit)
    }
}

impl Default for SysInfo {
    fn default() -> Self {
        Self::new()
    }
}
