use super::*;
use crate::{HOSTNAME_PLACEHOLDER, SnapshotCollector, UNKNOWN_PLACEHOLDER};
use test_support::mock::host::NSEC_PER_MIN;

#[test]
fn test_capture_default_machine() {
    let collector = SnapshotCollector::new(host());
    let snap = collector.capture();

    assert_eq!(snap.hostname, "node1");
    assert_eq!(snap.release, "6.1.0-kfetch");
    assert_eq!(snap.cpu_model, "QEMU Virtual CPU version 2.5+");
    assert_eq!((snap.online_cpus, snap.present_cpus), (4, 8));
    assert_eq!((snap.free_mem_mb, snap.total_mem_mb), (1024, 4096));
    assert_eq!(snap.num_procs, 120);
    // 90 分 59 秒向下取整
    assert_eq!(snap.uptime_mins, 90);
}

#[test]
fn test_capture_is_live() {
    let host = host();
    let collector = SnapshotCollector::new(host.clone());
    let before = collector.capture();

    host.set_procs(3);
    host.set_online_cpus(1);
    host.set_boottime_ns(5 * NSEC_PER_MIN);
    let after = collector.capture();

    assert_eq!(before.num_procs, 120);
    assert_eq!(after.num_procs, 3);
    assert_eq!(after.online_cpus, 1);
    assert_eq!(after.uptime_mins, 5);
}

#[test]
fn test_placeholders() {
    let host = MockHostFacts::new()
        .with_nodename("")
        .with_release("")
        .with_cpu_model(None);
    let snap = SnapshotCollector::new(Arc::new(host)).capture();

    assert_eq!(snap.hostname, HOSTNAME_PLACEHOLDER);
    assert_eq!(snap.release, UNKNOWN_PLACEHOLDER);
    assert_eq!(snap.cpu_model, UNKNOWN_PLACEHOLDER);
}

#[test]
fn test_blank_cpu_model_uses_placeholder() {
    let host = MockHostFacts::new().with_cpu_model(Some("   "));
    let snap = SnapshotCollector::new(Arc::new(host)).capture();
    assert_eq!(snap.cpu_model, UNKNOWN_PLACEHOLDER);
}

#[test]
fn test_cpu_model_is_trimmed() {
    let host = MockHostFacts::new().with_cpu_model(Some("  AMD EPYC 7B13\n"));
    let snap = SnapshotCollector::new(Arc::new(host)).capture();
    assert_eq!(snap.cpu_model, "AMD EPYC 7B13");
}

#[test]
fn test_zero_memory() {
    let host = MockHostFacts::new().with_memory_mb(0, 0);
    let snap = SnapshotCollector::new(Arc::new(host)).capture();
    assert_eq!((snap.free_mem_mb, snap.total_mem_mb), (0, 0));
}

#[test]
fn test_no_processes() {
    let host = host();
    host.set_procs(0);
    let snap = SnapshotCollector::new(host).capture();
    assert_eq!(snap.num_procs, 0);
}
