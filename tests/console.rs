use std::io::{self, Write};

use tfquiz::console::{BellNotifier, Notifier};

struct BrokenTerminal;

impl Write for BrokenTerminal {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
}

#[test]
fn test_bell_rings_only_on_success() {
    let mut out = Vec::new();
    {
        let mut bell = BellNotifier::new(&mut out);
        bell.notify(false);
        bell.notify(true);
        bell.notify(true);
    }
    assert_eq!(out, b"\x07\x07");
}

#[test]
fn test_bell_write_failure_is_swallowed() {
    let mut bell = BellNotifier::new(BrokenTerminal);
    bell.notify(true);
    bell.notify(false);
}
