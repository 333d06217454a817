use super::*;
use crate::{KfetchDevice, KfetchFile};
use test_support::mock::host::NSEC_PER_MIN;
use uapi::fcntl::OpenFlags;
use uapi::kfetch::InfoMask;
use vfs::{File, UserPtrReader, UserPtrWriter};

fn device() -> Arc<KfetchDevice> {
    KfetchDevice::new(host(), -1)
}

fn read_all(file: &KfetchFile, len: usize) -> Vec<u8> {
    let mut buf = alloc::vec![0u8; len];
    let n = file.read(&mut buf.as_mut_slice()).unwrap();
    buf.truncate(n);
    buf
}

fn write_mask(file: &KfetchFile, mask: i32) {
    let payload = mask.to_ne_bytes();
    assert_eq!(file.write(&mut &payload[..]), Ok(4));
}

#[test]
fn test_second_open_is_busy() {
    let dev = device();
    let first = dev.open_session(OpenFlags::O_RDWR).unwrap();
    assert!(dev.is_open());
    assert!(matches!(dev.open_session(OpenFlags::O_RDWR), Err(FsError::Busy)));

    // 已有会话不受影响
    assert!(!read_all(&first, 1024).is_empty());

    first.release();
    assert!(!dev.is_open());
    assert!(dev.open_session(OpenFlags::O_RDONLY).is_ok());
}

#[test]
fn test_default_read_is_full_report() {
    let dev = device();
    let file = dev.open_session(OpenFlags::O_RDONLY).unwrap();
    let report = read_all(&file, 1024);

    let lines = lines(&report);
    assert_eq!(lines.len(), 8);
    assert_eq!(info_part(&lines[0]), "node1");
    assert_eq!(info_part(&lines[7]), "Uptime:   90 mins");
}

#[test]
fn test_mask_persists_across_sessions() {
    let dev = device();

    let file = dev.open_session(OpenFlags::O_RDWR).unwrap();
    write_mask(&file, 0);
    drop(file);

    let file = dev.open_session(OpenFlags::O_RDONLY).unwrap();
    let report = read_all(&file, 1024);
    let rows = lines(&report);
    let info: Vec<&str> = rows
        .iter()
        .map(|l| info_part(l))
        .filter(|s| !s.is_empty())
        .collect();
    assert_eq!(info, ["node1", "-----"]);
    drop(file);

    let file = dev.open_session(OpenFlags::O_RDWR).unwrap();
    write_mask(&file, -1);
    let report = read_all(&file, 1024);
    assert!(lines(&report).iter().all(|l| !info_part(l).is_empty()));
}

#[test]
fn test_short_read_is_prefix() {
    let dev = device();
    let file = dev.open_session(OpenFlags::O_RDONLY).unwrap();
    let full = read_all(&file, 1024);

    for n in [0, 1, 19, 20, 21, 100, full.len() - 1] {
        assert_eq!(read_all(&file, n), &full[..n]);
    }
    assert_eq!(read_all(&file, 4096), full);
}

#[test]
fn test_no_read_cursor() {
    let dev = device();
    let file = dev.open_session(OpenFlags::O_RDONLY).unwrap();
    let a = read_all(&file, 10);
    let b = read_all(&file, 10);
    assert_eq!(a, b);
    assert_eq!(file.offset(), 0);
}

#[test]
fn test_every_read_takes_new_snapshot() {
    let host = host();
    let dev = KfetchDevice::new(host.clone(), InfoMask::NUM_PROCS.bits());
    let file = dev.open_session(OpenFlags::O_RDONLY).unwrap();

    let before = read_all(&file, 1024);
    host.set_procs(7);
    host.set_boottime_ns(2 * NSEC_PER_MIN);
    let after = read_all(&file, 1024);

    assert_eq!(info_part(&lines(&before)[2]), "Procs:    120");
    assert_eq!(info_part(&lines(&after)[2]), "Procs:    7");
}

#[test]
fn test_write_returns_full_length() {
    let dev = device();
    let file = dev.open_session(OpenFlags::O_WRONLY).unwrap();
    let mut payload = InfoMask::MEM.to_payload().to_vec();
    payload.extend_from_slice(&[0; 8]);

    assert_eq!(file.write(&mut payload.as_slice()), Ok(12));
    assert_eq!(dev.mask(), InfoMask::MEM.bits());
}

#[test]
fn test_empty_write_keeps_mask() {
    let dev = KfetchDevice::new(host(), 9);
    let file = dev.open_session(OpenFlags::O_WRONLY).unwrap();
    assert_eq!(file.write(&mut &[0u8; 0][..]), Ok(0));
    assert_eq!(dev.mask(), 9);
}

#[test]
fn test_write_fault_keeps_mask() {
    let dev = KfetchDevice::new(host(), 0b11);
    let file = dev.open_session(OpenFlags::O_WRONLY).unwrap();
    let mut faulty = FaultyBuffer { len: 4 };

    assert_eq!(file.write(&mut faulty), Err(FsError::BadAddress));
    assert_eq!(dev.mask(), 0b11);
    assert!(dev.is_open());
}

#[test]
fn test_read_fault() {
    let dev = device();
    let file = dev.open_session(OpenFlags::O_RDONLY).unwrap();
    let mut faulty = FaultyBuffer { len: 1024 };

    assert_eq!(file.read(&mut faulty), Err(FsError::BadAddress));
    assert!(dev.is_open());
    assert!(!read_all(&file, 8).is_empty());
}

#[test]
fn test_user_pointer_copy() {
    init();
    let dev = device();
    let file = dev.open_session(OpenFlags::O_RDWR).unwrap();

    let payload = 0i32.to_ne_bytes();
    let mut reader = unsafe { UserPtrReader::new(payload.as_ptr() as usize, payload.len()) };
    assert_eq!(file.write(&mut reader), Ok(4));
    assert_eq!(dev.mask(), 0);

    let mut out = [0u8; 1024];
    let mut writer = unsafe { UserPtrWriter::new(out.as_mut_ptr() as usize, out.len()) };
    let n = file.read(&mut writer).unwrap();
    assert_eq!(&out[..n], dev.render().as_slice());
}

#[test]
fn test_bad_user_pointer() {
    init();
    let dev = device();
    let file = dev.open_session(OpenFlags::O_RDWR).unwrap();

    let mut reader = unsafe { UserPtrReader::new(0x10, 4) };
    assert_eq!(file.write(&mut reader), Err(FsError::BadAddress));
    assert_eq!(dev.mask(), -1);

    let mut writer = unsafe { UserPtrWriter::new(0x10, 64) };
    assert_eq!(file.read(&mut writer), Err(FsError::BadAddress));
}

#[test]
fn test_access_mode_is_enforced() {
    let dev = KfetchDevice::new(host(), 5);

    let file = dev.open_session(OpenFlags::O_RDONLY).unwrap();
    assert!(file.readable() && !file.writable());
    assert_eq!(file.write(&mut &[0u8; 4][..]), Err(FsError::BadFileDescriptor));
    assert_eq!(dev.mask(), 5);
    drop(file);

    let file = dev.open_session(OpenFlags::O_WRONLY).unwrap();
    let mut buf = [0u8; 16];
    assert_eq!(file.read(&mut &mut buf[..]), Err(FsError::BadFileDescriptor));
}

#[test]
fn test_seek_and_ioctl_unsupported() {
    let dev = device();
    let file = dev.open_session(OpenFlags::O_RDONLY).unwrap();
    assert_eq!(
        file.lseek(10, uapi::fcntl::SeekWhence::Set),
        Err(FsError::NotSupported)
    );
    assert_eq!(file.ioctl(0, 0), Err(FsError::NotSupported));
    assert_eq!(file.flags(), OpenFlags::O_RDONLY);
}

#[test]
fn test_char_driver_open() {
    use vfs::CharDriver;

    let dev = device();
    let file = dev.clone().open(OpenFlags::O_RDONLY).unwrap();
    let session = file.as_any().downcast_ref::<KfetchFile>().unwrap();
    assert!(Arc::ptr_eq(session.device(), &dev));
    assert!(matches!(dev.clone().open(OpenFlags::O_RDONLY), Err(FsError::Busy)));

    drop(file);
    assert!(!dev.is_open());
}

#[test]
fn test_host_facts_with_newlines_keep_eight_lines() {
    let host = MockHostFacts::new()
        .with_nodename("edge\nnode")
        .with_cpu_model(Some("Intel\nXeon"));
    let dev = KfetchDevice::new(Arc::new(host), -1);
    let file = dev.open_session(OpenFlags::O_RDONLY).unwrap();

    let report = read_all(&file, 1024);
    let rows = lines(&report);
    assert_eq!(rows.len(), 8);
    assert_eq!(info_part(&rows[0]), "edge?node");
    assert_eq!(info_part(&rows[3]), "CPU:      Intel?Xeon");
}
