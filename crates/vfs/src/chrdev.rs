//! 字符设备注册表
//!
//! 驱动通过 [`DeviceRegistry`] 注册自己并得到一个 [`DeviceHandle`]，卸载时交还句柄。
//! [`ChrdevTable`] 是一个内存实现：按 `alloc_chrdev_region` 的规则从
//! [`chrdev_major::DYN_START`] 向下动态分配主设备号，次设备号固定为 0。

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::sync::Arc;

use sync::SpinLock;
use uapi::fcntl::OpenFlags;

use crate::dev::{major, makedev, minor};
use crate::devno::chrdev_major;
use crate::{File, FsError};

/// 字符设备驱动接口
///
/// 注册表在 `open` 时调用驱动，驱动返回一个新的会话。
pub trait CharDriver: Send + Sync {
    /// 打开设备，返回会话对象
    fn open(self: Arc<Self>, flags: OpenFlags) -> Result<Arc<dyn File>, FsError>;
}

/// 已注册设备的句柄
///
/// 不可复制：注销时按值交还，保证同一次注册只被注销一次。
#[derive(Debug, PartialEq, Eq)]
pub struct DeviceHandle {
    dev: u64,
    name: String,
}

impl DeviceHandle {
    /// 设备号
    pub fn dev(&self) -> u64 {
        self.dev
    }

    /// 主设备号
    pub fn major(&self) -> u32 {
        major(self.dev)
    }

    /// 次设备号
    pub fn minor(&self) -> u32 {
        minor(self.dev)
    }

    /// 设备节点名
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// 设备注册表
///
/// 负责设备号分配和设备节点的创建与销毁。
pub trait DeviceRegistry: Send + Sync {
    /// 注册字符设备，成功时返回句柄
    fn register(&self, name: &str, driver: Arc<dyn CharDriver>) -> Result<DeviceHandle, FsError>;

    /// 注销字符设备并释放设备号
    fn unregister(&self, handle: DeviceHandle);
}

struct ChrdevEntry {
    name: String,
    driver: Arc<dyn CharDriver>,
}

/// 内存中的字符设备表
pub struct ChrdevTable {
    devices: SpinLock<BTreeMap<u64, ChrdevEntry>>,
}

impl ChrdevTable {
    /// 创建空的设备表
    pub fn new() -> Self {
        Self {
            devices: SpinLock::new(BTreeMap::new()),
        }
    }

    /// 打开设备号对应的设备
    ///
    /// 驱动的 `open` 在锁外调用，驱动内部可以自由地访问注册表。
    pub fn open(&self, dev: u64, flags: OpenFlags) -> Result<Arc<dyn File>, FsError> {
        let driver = self
            .devices
            .lock()
            .get(&dev)
            .map(|entry| entry.driver.clone())
            .ok_or(FsError::NoDevice)?;
        driver.open(flags)
    }

    /// 按名称查找设备号
    pub fn lookup(&self, name: &str) -> Result<u64, FsError> {
        self.devices
            .lock()
            .iter()
            .find(|(_, entry)| entry.name == name)
            .map(|(&dev, _)| dev)
            .ok_or(FsError::NotFound)
    }

    /// 已注册的设备数量
    pub fn len(&self) -> usize {
        self.devices.lock().len()
    }

    /// 是否没有已注册的设备
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 从高到低寻找未使用的动态主设备号
    fn alloc_major(devices: &BTreeMap<u64, ChrdevEntry>) -> Option<u32> {
        (chrdev_major::DYN_END..=chrdev_major::DYN_START)
            .rev()
            .find(|&maj| !devices.keys().any(|&dev| major(dev) == maj))
    }
}

impl Default for ChrdevTable {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceRegistry for ChrdevTable {
    fn register(&self, name: &str, driver: Arc<dyn CharDriver>) -> Result<DeviceHandle, FsError> {
        if name.is_empty() || name.contains('/') {
            return Err(FsError::InvalidArgument);
        }

        let mut devices = self.devices.lock();
        if devices.values().any(|entry| entry.name == name) {
            return Err(FsError::AlreadyExists);
        }

        let Some(maj) = Self::alloc_major(&devices) else {
            log::warn!("chrdev: no free dynamic major for {}", name);
            return Err(FsError::Busy);
        };
        let dev = makedev(maj, 0);
        devices.insert(
            dev,
            ChrdevEntry {
                name: name.to_string(),
                driver,
            },
        );

        log::debug!("chrdev: /dev/{} -> {}:0", name, maj);
        Ok(DeviceHandle {
            dev,
            name: name.to_string(),
        })
    }

    fn unregister(&self, handle: DeviceHandle) {
        let mut devices = self.devices.lock();
        let matches = devices
            .get(&handle.dev)
            .is_some_and(|entry| entry.name == handle.name);
        if matches {
            devices.remove(&handle.dev);
            log::debug!("chrdev: removed /dev/{}", handle.name);
        }
    }
}
