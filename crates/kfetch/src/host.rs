//! 主机信息提供者
//!
//! 此模块定义了 kfetch 采集快照时需要的外部接口，由宿主内核实现。

use alloc::string::String;
use alloc::vec::Vec;

use uapi::sysinfo::SysInfo;
use uapi::uts_namespace::UtsNamespace;

/// 主机信息提供者
///
/// 每个方法都返回调用时刻的实时值；kfetch 不缓存任何结果。
pub trait HostFacts: Send + Sync {
    /// 当前的 UTS 信息（主机名与内核版本）
    fn utsname(&self) -> UtsNamespace;

    /// 启动 CPU 的型号字符串，无法获取时返回 `None`
    fn cpu_model(&self) -> Option<String>;

    /// 在线的 CPU 核数
    fn num_online_cpus(&self) -> usize;

    /// 存在的 CPU 核数
    fn num_present_cpus(&self) -> usize;

    /// 内存信息，只使用 `totalram` / `freeram` / `mem_unit`
    fn meminfo(&self) -> SysInfo;

    /// 遍历进程表，列出所有进程 PID
    fn list_process_pids(&self) -> Vec<u32>;

    /// 自启动以来经过的时间（纳秒，包含挂起时间）
    fn boottime_ns(&self) -> u64;
}
