//! # Host Console Tests

use rvmini_core::soc::{BufferHost, HostIo, StdoutHost};

#[test]
fn test_buffer_host_accumulates() {
    let mut host = BufferHost::new();
    host.write(1, b"Hello ").unwrap();
    host.write(1, b"World!\n").unwrap();
    assert_eq!(host.bytes(), b"Hello World!\n");
    assert_eq!(host.text(), "Hello World!\n");
    assert_eq!(host.writes(), 2);
    assert_eq!(host.into_inner(), b"Hello World!\n".to_vec());
}

#[test]
fn test_buffer_host_keeps_raw_bytes() {
    let mut host = BufferHost::new();
    host.write(1, &[0xFF, 0x00, b'a']).unwrap();
    assert_eq!(host.bytes(), &[0xFF, 0x00, b'a']);
    assert_eq!(host.text(), "\u{FFFD}\u{0}a");
}

#[test]
fn test_host_through_reference_and_box() {
    let mut host = BufferHost::new();
    {
        let mut by_ref: &mut BufferHost = &mut host;
        HostIo::write(&mut by_ref, 1, b"a").unwrap();
    }
    let mut boxed: Box<dyn HostIo> = Box::new(BufferHost::new());
    boxed.write(1, b"b").unwrap();
    assert_eq!(host.bytes(), b"a");
}

#[test]
fn test_stdout_host_writes() {
    let mut host = StdoutHost::new();
    host.write(1, b"").unwrap();
    host.write(2, b"").unwrap();
}
