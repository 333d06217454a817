//! 设备与会话
//!
//! [`KfetchDevice`] 持有设备的全部状态：打开门、信息掩码和快照采集器。
//! 只有通过 [`KfetchDevice::open_session`] 得到的 [`KfetchFile`] 才能读写设备，
//! 会话被丢弃时自动释放打开门，因此“未打开就读写”无法表达。

use alloc::sync::Arc;
use alloc::vec::Vec;

use uapi::fcntl::OpenFlags;
use vfs::{CharDriver, File, FsError, UserSliceReader, UserSliceWriter};

use crate::format::ReportFormatter;
use crate::gate::{AccessGate, GateState};
use crate::host::HostFacts;
use crate::mask::ConfigMask;
use crate::snapshot::SnapshotCollector;

/// kfetch 设备
pub struct KfetchDevice {
    gate: AccessGate,
    mask: ConfigMask,
    collector: SnapshotCollector,
}

impl KfetchDevice {
    /// 创建设备，初始掩码为 `initial_mask`
    pub fn new(host: Arc<dyn HostFacts>, initial_mask: i32) -> Arc<Self> {
        Arc::new(Self {
            gate: AccessGate::new(),
            mask: ConfigMask::new(initial_mask),
            collector: SnapshotCollector::new(host),
        })
    }

    /// 打开设备
    ///
    /// 已被打开时返回 [`FsError::Busy`]，已有的会话不受影响。
    pub fn open_session(self: &Arc<Self>, flags: OpenFlags) -> Result<KfetchFile, FsError> {
        if let Err(e) = self.gate.acquire() {
            log::warn!("kfetch: device is busy");
            return Err(e);
        }
        Ok(KfetchFile {
            device: self.clone(),
            flags,
        })
    }

    /// 设备当前是否被打开
    pub fn is_open(&self) -> bool {
        self.gate.state() == GateState::Opened
    }

    /// 当前掩码的原始值
    pub fn mask(&self) -> i32 {
        self.mask.get()
    }

    /// 采集快照并按当前掩码渲染一份完整报告
    pub fn render(&self) -> Vec<u8> {
        let snapshot = self.collector.capture();
        ReportFormatter::render(&snapshot, self.mask.get())
    }

    pub(crate) fn gate(&self) -> &AccessGate {
        &self.gate
    }

    /// 每次都从报告开头拷贝 `min(buf.len(), 报告长度)` 字节
    fn read_report(&self, buf: &mut dyn UserSliceWriter) -> Result<usize, FsError> {
        let report = self.render();
        let count = buf.len().min(report.len());
        if let Err(e) = buf.write_slice(&report[..count]) {
            log::error!("kfetch: failed to copy data to user");
            return Err(e);
        }
        Ok(count)
    }

    /// 用缓冲区的前 4 个字节覆盖掩码，返回整个缓冲区的长度
    fn write_mask(&self, buf: &mut dyn UserSliceReader) -> Result<usize, FsError> {
        let len = buf.len();
        if len == 0 {
            return Ok(0);
        }

        let mut scratch = [0u8; size_of::<i32>()];
        let count = len.min(scratch.len());
        if let Err(e) = buf.read_slice(&mut scratch[..count]) {
            log::error!("kfetch: failed to copy data from user");
            return Err(e);
        }

        let (old, new) = self.mask.store_prefix(&scratch[..count]);
        log::debug!("kfetch: mask {:#x} -> {:#x}", old, new);
        Ok(len)
    }
}

impl CharDriver for KfetchDevice {
    fn open(self: Arc<Self>, flags: OpenFlags) -> Result<Arc<dyn File>, FsError> {
        let file = self.open_session(flags)?;
        Ok(Arc::new(file))
    }
}

/// 一次打开会话
///
/// 丢弃会话即为 release。
pub struct KfetchFile {
    device: Arc<KfetchDevice>,
    flags: OpenFlags,
}

impl KfetchFile {
    /// 所属设备
    pub fn device(&self) -> &Arc<KfetchDevice> {
        &self.device
    }

    /// 显式关闭会话
    pub fn release(self) {
        drop(self);
    }
}

impl File for KfetchFile {
    fn readable(&self) -> bool {
        self.flags.readable()
    }

    fn writable(&self) -> bool {
        self.flags.writable()
    }

    fn read(&self, buf: &mut dyn UserSliceWriter) -> Result<usize, FsError> {
        if !self.readable() {
            return Err(FsError::BadFileDescriptor);
        }
        self.device.read_report(buf)
    }

    fn write(&self, buf: &mut dyn UserSliceReader) -> Result<usize, FsError> {
        if !self.writable() {
            return Err(FsError::BadFileDescriptor);
        }
        self.device.write_mask(buf)
    }

    fn flags(&self) -> OpenFlags {
        self.flags
    }

    fn as_any(&self) -> &dyn core::any::Any {
        self
    }
}

impl Drop for KfetchFile {
    fn drop(&mut self) {
        self.device.gate.release();
    }
}
