//! 系统信息快照
//!
//! [`SnapshotCollector::capture`] 每次调用都向 [`HostFacts`] 查询一遍，
//! 得到某一时刻的 [`SystemSnapshot`]。快照不会被缓存。

use alloc::string::{String, ToString};
use alloc::sync::Arc;

use crate::HostFacts;

/// 主机名为空时使用的占位符（与 Linux 启动时的默认主机名一致）
pub const HOSTNAME_PLACEHOLDER: &str = "(none)";

/// 内核版本或 CPU 型号无法获取时使用的占位符
pub const UNKNOWN_PLACEHOLDER: &str = "unknown";

const BYTES_PER_MB: u64 = 1024 * 1024;
const NSEC_PER_SEC: u64 = 1_000_000_000;

/// 某一时刻的系统信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemSnapshot {
    /// 主机名
    pub hostname: String,
    /// 内核版本
    pub release: String,
    /// CPU 型号
    pub cpu_model: String,
    /// 在线 CPU 核数
    pub online_cpus: usize,
    /// 存在的 CPU 核数
    pub present_cpus: usize,
    /// 空闲内存（MB）
    pub free_mem_mb: u64,
    /// 总内存（MB）
    pub total_mem_mb: u64,
    /// 进程数
    pub num_procs: usize,
    /// 运行时间（分钟）
    pub uptime_mins: u64,
}

/// 快照采集器
pub struct SnapshotCollector {
    host: Arc<dyn HostFacts>,
}

impl SnapshotCollector {
    /// 以给定的主机信息提供者创建采集器
    pub fn new(host: Arc<dyn HostFacts>) -> Self {
        Self { host }
    }

    /// 采集一次快照
    ///
    /// 不会失败：无法获取的字符串字段以占位符代替，保证每一行都有内容。
    /// 耗时与进程数成正比（需要遍历一遍进程表）。
    pub fn capture(&self) -> SystemSnapshot {
        let uts = self.host.utsname();
        let hostname = text_or(uts.nodename_bytes(), HOSTNAME_PLACEHOLDER, "hostname");
        let release = text_or(uts.release_bytes(), UNKNOWN_PLACEHOLDER, "release");

        let cpu_model = match self.host.cpu_model() {
            Some(model) if !model.trim().is_empty() => model.trim().to_string(),
            _ => {
                log::debug!("kfetch: cpu model unavailable, using {:?}", UNKNOWN_PLACEHOLDER);
                UNKNOWN_PLACEHOLDER.to_string()
            }
        };

        let mem = self.host.meminfo();

        SystemSnapshot {
            hostname,
            release,
            cpu_model,
            online_cpus: self.host.num_online_cpus(),
            present_cpus: self.host.num_present_cpus(),
            free_mem_mb: mem.free_bytes() / BYTES_PER_MB,
            total_mem_mb: mem.total_bytes() / BYTES_PER_MB,
            num_procs: self.host.list_process_pids().len(),
            uptime_mins: self.host.boottime_ns() / NSEC_PER_SEC / 60,
        }
    }
}

/// 把 UTS 字段解码为字符串，空字段以占位符代替
fn text_or(bytes: &[u8], placeholder: &str, what: &str) -> String {
    if bytes.is_empty() {
        log::debug!("kfetch: empty {}, using {:?}", what, placeholder);
        return placeholder.to_string();
    }
    String::from_utf8_lossy(bytes).into_owned()
}
