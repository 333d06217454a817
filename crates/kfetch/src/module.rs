//! 模块加载与卸载

use alloc::sync::Arc;

use vfs::{DeviceHandle, DeviceRegistry, FsError};

use crate::config::KfetchConfig;
use crate::device::KfetchDevice;
use crate::host::HostFacts;

/// 已加载的 kfetch 模块
///
/// 加载时创建设备并注册设备节点，卸载时注销。设备被打开期间不能卸载。
pub struct KfetchModule {
    device: Arc<KfetchDevice>,
    registry: Arc<dyn DeviceRegistry>,
    handle: Option<DeviceHandle>,
}

impl KfetchModule {
    /// 加载模块
    pub fn load(
        registry: Arc<dyn DeviceRegistry>,
        host: Arc<dyn HostFacts>,
        config: &KfetchConfig,
    ) -> Result<Self, FsError> {
        let device = KfetchDevice::new(host, config.initial_mask);
        let handle = registry.register(&config.device_name, device.clone())?;
        log::info!(
            "kfetch: /dev/{} registered as {}:{}",
            handle.name(),
            handle.major(),
            handle.minor()
        );
        Ok(Self {
            device,
            registry,
            handle: Some(handle),
        })
    }

    /// 设备
    pub fn device(&self) -> &Arc<KfetchDevice> {
        &self.device
    }

    /// 设备节点句柄，卸载后为 `None`
    pub fn handle(&self) -> Option<&DeviceHandle> {
        self.handle.as_ref()
    }

    /// 卸载模块
    ///
    /// 设备仍被打开时返回 [`FsError::Busy`]，模块保持加载。成功后打开门保持占用，
    /// 残留的设备引用也无法再打开设备。重复卸载直接返回 `Ok`。
    pub fn unload(&mut self) -> Result<(), FsError> {
        let Some(handle) = self.handle.take() else {
            return Ok(());
        };
        if let Err(e) = self.device.gate().acquire() {
            log::warn!("kfetch: /dev/{} is still open", handle.name());
            self.handle = Some(handle);
            return Err(e);
        }
        log::info!("kfetch: /dev/{} unregistered", handle.name());
        self.registry.unregister(handle);
        Ok(())
    }
}

impl Drop for KfetchModule {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            if self.device.is_open() {
                log::warn!("kfetch: /dev/{} dropped while open", handle.name());
            }
            self.registry.unregister(handle);
        }
    }
}
