//! UTS 命名空间

/// UTS 名称最大长度（含结尾的 NUL）
pub const UTS_NAME_LEN: usize = 65;

/// UTS 命名空间结构体
/// 保存主机名、内核版本等 `uname(2)` 信息，每个字段都是以 NUL 结尾的定长数组
#[repr(C)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtsNamespace {
    /// 系统名称
    pub sysname: [u8; UTS_NAME_LEN],
    /// 主机名
    pub nodename: [u8; UTS_NAME_LEN],
    /// 发行版版本
    pub release: [u8; UTS_NAME_LEN],
    /// 版本信息
    pub version: [u8; UTS_NAME_LEN],
    /// 机器类型
    pub machine: [u8; UTS_NAME_LEN],
    /// 域名
    pub domainname: [u8; UTS_NAME_LEN],
}

/// 将字符串写入定长字段，超长部分截断，始终保留结尾的 NUL
fn fill_field(field: &mut [u8; UTS_NAME_LEN], value: &str) {
    let bytes = value.as_bytes();
    let len = bytes.len().min(UTS_NAME_LEN - 1);
    field.fill(0);
    field[..len].copy_from_slice(&bytes[..len]);
}

/// 取定长字段中 NUL 之前的部分
fn field_bytes(field: &[u8; UTS_NAME_LEN]) -> &[u8] {
    let len = field.iter().position(|&b| b == 0).unwrap_or(UTS_NAME_LEN);
    &field[..len]
}

impl UtsNamespace {
    /// 以给定的主机名和内核版本创建 UTS 命名空间
    pub fn new(nodename: &str, release: &str) -> Self {
        let mut uts = Self::default();
        uts.set_nodename(nodename);
        uts.set_release(release);
        uts
    }

    /// 设置主机名（对应 `sethostname(2)`，超过 64 字节的部分被截断）
    pub fn set_nodename(&mut self, name: &str) {
        fill_field(&mut self.nodename, name);
    }

    /// 设置内核版本
    pub fn set_release(&mut self, release: &str) {
        fill_field(&mut self.release, release);
    }

    /// 主机名的原始字节（不含 NUL）
    pub fn nodename_bytes(&self) -> &[u8] {
        field_bytes(&self.nodename)
    }

    /// 内核版本的原始字节（不含 NUL）
    pub fn release_bytes(&self) -> &[u8] {
        field_bytes(&self.release)
    }
}

impl Default for UtsNamespace {
    /// 创建一个默认的 UTS 命名空间实例
    ///
    /// 默认值与 Linux 启动时一致：
    /// - sysname: "Linux"
    /// - nodename: "(none)"
    /// - release / version / machine: 空
    /// - domainname: "(none)"
    fn default() -> Self {
        let mut uts = Self {
            sysname: [0; UTS_NAME_LEN],
            nodename: [0; UTS_NAME_LEN],
            release: [0; UTS_NAME_LEN],
            version: [0; UTS_NAME_LEN],
            machine: [0; UTS_NAME_LEN],
            domainname: [0; UTS_NAME_LEN],
        };
        fill_field(&mut uts.sysname, "Linux");
        fill_field(&mut uts.nodename, "(none)");
        fill_field(&mut uts.domainname, "(none)");
        uts
    }
}
