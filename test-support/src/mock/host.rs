//! 主机信息提供者的 Mock 实现
//!
//! 默认值描述一台固定的测试机器；数值类字段可以在运行中修改，用于验证
//! 每次读取都重新采集。

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use uapi::sysinfo::SysInfo;
use uapi::uts_namespace::UtsNamespace;

/// 1 MiB 的页帧数（4 KiB 页）
pub const FRAMES_PER_MB: usize = 256;
/// 每分钟的纳秒数
pub const NSEC_PER_MIN: u64 = 60 * 1_000_000_000;

/// Mock 的主机信息
pub struct MockHostFacts {
    nodename: String,
    release: String,
    cpu_model: Option<String>,
    online_cpus: AtomicUsize,
    present_cpus: usize,
    total_frames: usize,
    free_frames: AtomicUsize,
    procs: AtomicUsize,
    boottime_ns: AtomicU64,
}

impl MockHostFacts {
    /// 默认测试机器：node1 / 6.1.0 / 4 of 8 CPUs / 1024 of 4096 MB / 120 procs / 90 mins
    pub fn new() -> Self {
        Self {
            nodename: "node1".to_string(),
            release: "6.1.0-kfetch".to_string(),
            cpu_model: Some("QEMU Virtual CPU version 2.5+".to_string()),
            online_cpus: AtomicUsize::new(4),
            present_cpus: 8,
            total_frames: 4096 * FRAMES_PER_MB,
            free_frames: AtomicUsize::new(1024 * FRAMES_PER_MB),
            procs: AtomicUsize::new(120),
            boottime_ns: AtomicU64::new(90 * NSEC_PER_MIN + 59_000_000_000),
        }
    }

    pub fn with_nodename(mut self, nodename: &str) -> Self {
        self.nodename = nodename.to_string();
        self
    }

    pub fn with_release(mut self, release: &str) -> Self {
        self.release = release.to_string();
        self
    }

    pub fn with_cpu_model(mut self, model: Option<&str>) -> Self {
        self.cpu_model = model.map(|m| m.to_string());
        self
    }

    pub fn with_cpus(mut self, online: usize, present: usize) -> Self {
        self.online_cpus = AtomicUsize::new(online);
        self.present_cpus = present;
        self
    }

    pub fn with_memory_mb(mut self, free_mb: usize, total_mb: usize) -> Self {
        self.free_frames = AtomicUsize::new(free_mb * FRAMES_PER_MB);
        self.total_frames = total_mb * FRAMES_PER_MB;
        self
    }

    pub fn set_procs(&self, count: usize) {
        self.procs.store(count, Ordering::SeqCst);
    }

    pub fn set_boottime_ns(&self, ns: u64) {
        self.boottime_ns.store(ns, Ordering::SeqCst);
    }

    pub fn set_online_cpus(&self, count: usize) {
        self.online_cpus.store(count, Ordering::SeqCst);
    }

    pub fn utsname(&self) -> UtsNamespace {
        UtsNamespace::new(&self.nodename, &self.release)
    }

    pub fn cpu_model(&self) -> Option<String> {
        self.cpu_model.clone()
    }

    pub fn num_online_cpus(&self) -> usize {
        self.online_cpus.load(Ordering::SeqCst)
    }

    pub fn num_present_cpus(&self) -> usize {
        self.present_cpus
    }

    pub fn meminfo(&self) -> SysInfo {
        SysInfo::from_frames(
            self.total_frames,
            self.free_frames.load(Ordering::SeqCst),
            4096,
        )
    }

    pub fn list_process_pids(&self) -> Vec<u32> {
        (1..=self.procs.load(Ordering::SeqCst) as u32).collect()
    }

    pub fn boottime_ns(&self) -> u64 {
        self.boottime_ns.load(Ordering::SeqCst)
    }
}

impl Default for MockHostFacts {
    fn default() -> Self {
        Self::new()
    }
}
