//! kfetch 配置
//!
//! 报告布局的常量，以及模块加载时的参数块 [`KfetchConfig`]。

use alloc::string::{String, ToString};

use uapi::kfetch::KFETCH_DEV_NAME;

/// logo 的行数，也是报告的行数
pub const LOGO_ROWS: usize = 8;

/// 每行 logo 的字符宽度
pub const LOGO_WIDTH: usize = 20;

/// 单行信息的字节上限，超出部分在字符边界处截断
pub const INFO_FIELD_CAP: usize = 64;

/// 模块加载参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KfetchConfig {
    /// 设备节点名
    pub device_name: String,
    /// 加载时的信息掩码，默认选择全部字段
    pub initial_mask: i32,
}

impl KfetchConfig {
    /// 指定设备节点名
    pub fn with_device_name(mut self, name: &str) -> Self {
        self.device_name = name.to_string();
        self
    }

    /// 指定初始掩码
    pub fn with_initial_mask(mut self, mask: i32) -> Self {
        self.initial_mask = mask;
        self
    }
}

impl Default for KfetchConfig {
    fn default() -> Self {
        Self {
            device_name: KFETCH_DEV_NAME.to_string(),
            initial_mask: -1,
        }
    }
}
