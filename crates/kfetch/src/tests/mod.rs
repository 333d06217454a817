// Unit tests for kfetch.
//
// The host side is played by `test_support::mock::host::MockHostFacts`; the
// in-memory `ChrdevTable` needs `sync::ArchOps`, which is registered once here.

extern crate alloc;
extern crate std;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

use test_support::mock::host::MockHostFacts;
use uapi::sysinfo::SysInfo;
use uapi::uts_namespace::UtsNamespace;
use vfs::{FsError, UserAccessOps, UserSliceReader, UserSliceWriter};

use crate::HostFacts;

impl HostFacts for MockHostFacts {
    fn utsname(&self) -> UtsNamespace {
        MockHostFacts::utsname(self)
    }

    fn cpu_model(&self) -> Option<String> {
        MockHostFacts::cpu_model(self)
    }

    fn num_online_cpus(&self) -> usize {
        MockHostFacts::num_online_cpus(self)
    }

    fn num_present_cpus(&self) -> usize {
        MockHostFacts::num_present_cpus(self)
    }

    fn meminfo(&self) -> SysInfo {
        MockHostFacts::meminfo(self)
    }

    fn list_process_pids(&self) -> Vec<u32> {
        MockHostFacts::list_process_pids(self)
    }

    fn boottime_ns(&self) -> u64 {
        MockHostFacts::boottime_ns(self)
    }
}

struct TestArchOps;

impl sync::ArchOps for TestArchOps {
    unsafe fn read_and_disable_interrupts(&self) -> usize {
        0
    }

    unsafe fn restore_interrupts(&self, _flags: usize) {}
}

/// 低于 0x1000 的用户地址视为缺页
struct TestUserAccess;

impl UserAccessOps for TestUserAccess {
    fn access_ok(&self, addr: usize, len: usize) -> bool {
        addr >= 0x1000 && addr.checked_add(len).is_some()
    }

    fn enter_user_access(&self) {}

    fn exit_user_access(&self) {}
}

static TEST_ARCH_OPS: TestArchOps = TestArchOps;
static TEST_USER_ACCESS: TestUserAccess = TestUserAccess;

// 0 = uninit, 1 = initializing, 2 = ready
static KFETCH_INIT: AtomicUsize = AtomicUsize::new(0);

pub(crate) fn init() {
    match KFETCH_INIT.compare_exchange(0, 1, Ordering::AcqRel, Ordering::Acquire) {
        Ok(_) => {
            // Safety: tests share one set of global collaborators.
            unsafe {
                sync::register_arch_ops(&TEST_ARCH_OPS);
                vfs::register_user_access_ops(&TEST_USER_ACCESS);
            }
            KFETCH_INIT.store(2, Ordering::Release);
        }
        Err(_) => {
            while KFETCH_INIT.load(Ordering::Acquire) != 2 {
                core::hint::spin_loop();
            }
        }
    }
}

/// 默认的测试机器
fn host() -> Arc<MockHostFacts> {
    Arc::new(MockHostFacts::new())
}

/// 报告按行拆分
fn lines(report: &[u8]) -> Vec<String> {
    core::str::from_utf8(report)
        .unwrap()
        .split('\n')
        .map(String::from)
        .collect()
}

/// 去掉 logo 后的信息部分
fn info_part(line: &str) -> &str {
    &line[crate::LOGO_WIDTH..]
}

/// 拷贝总是失败的调用者缓冲区
struct FaultyBuffer {
    len: usize,
}

impl UserSliceWriter for FaultyBuffer {
    fn len(&self) -> usize {
        self.len
    }

    fn write_slice(&mut self, _data: &[u8]) -> Result<(), FsError> {
        Err(FsError::BadAddress)
    }
}

impl UserSliceReader for FaultyBuffer {
    fn len(&self) -> usize {
        self.len
    }

    fn read_slice(&mut self, _out: &mut [u8]) -> Result<(), FsError> {
        Err(FsError::BadAddress)
    }
}

mod device;
mod mask;
mod snapshot;
