//! # System-Call Numbering Tests

use rvmini_core::isa::system::syscall::{SYS_EXIT, SYS_WRITE, Syscall};

#[test]
fn test_linux_numbering() {
    assert_eq!(SYS_WRITE, 64);
    assert_eq!(SYS_EXIT, 93);
    assert_eq!(Syscall::from_number(64), Some(Syscall::Write));
    assert_eq!(Syscall::from_number(93), Some(Syscall::Exit));
}

#[test]
fn test_unknown_numbers() {
    for number in [0, 1, 10, 63, 94, u64::MAX] {
        assert_eq!(Syscall::from_number(number), None);
    }
}

#[test]
fn test_names() {
    assert_eq!(Syscall::Write.name(), "write");
    assert_eq!(Syscall::Exit.name(), "exit");
}
