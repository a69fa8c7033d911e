//! Scoped raw-mode access to the controlling terminal.

use crate::paths;
use crossterm::terminal;
use std::fs::{File, OpenOptions};
use std::io::{self, Read};

/// Source of single keystrokes.
pub trait KeySource {
    /// Block until a key is pressed and read at most `buf.len()` bytes of it.
    fn read_key(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

/// Switches the terminal line discipline in and out of raw mode.
pub trait RawMode {
    fn enable(&self) -> io::Result<()>;
    fn disable(&self) -> io::Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermRawMode;

impl RawMode for CrosstermRawMode {
    fn enable(&self) -> io::Result<()> {
        terminal::enable_raw_mode()
    }

    fn disable(&self) -> io::Result<()> {
        terminal::disable_raw_mode()
    }
}

/// Terminal device held in raw mode for the lifetime of the value.
///
/// Dropping it restores the previous mode, then closes the device.
pub struct RawTty<M: RawMode, R: Read> {
    mode: M,
    device: R,
}

impl<M: RawMode, R: Read> RawTty<M, R> {
    /// Enter raw mode on `device`. If that fails the device is closed and
    /// the mode is left untouched.
    pub fn acquire(mode: M, device: R) -> io::Result<Self> {
        mode.enable()?;
        Ok(Self { mode, device })
    }
}

impl RawTty<CrosstermRawMode, File> {
    pub fn open() -> io::Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(paths::TTY_PATH)?;
        Self::acquire(CrosstermRawMode, file)
    }
}

impl<M: RawMode, R: Read> Read for RawTty<M, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.device.read(buf)
    }
}

impl<M: RawMode, R: Read> Drop for RawTty<M, R> {
    fn drop(&mut self) {
        if let Err(e) = self.mode.disable() {
            tracing::warn!("failed to restore terminal mode: {e}");
        }
    }
}

/// Reads each key through a fresh [`RawTty`].
///
/// The terminal is only in raw mode while a read is in flight, so prompts
/// shown between reads behave like normal line-buffered input.
#[derive(Debug, Default)]
pub struct TtyKeys;

impl KeySource for TtyKeys {
    fn read_key(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        read_once(RawTty::open()?, buf)
    }
}

/// One read through `tty`, which is released before returning.
fn read_once<M: RawMode, R: Read>(mut tty: RawTty<M, R>, buf: &mut [u8]) -> io::Result<usize> {
    tty.read(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Calls {
        enabled: Cell<usize>,
        disabled: Cell<usize>,
        reads: Cell<usize>,
    }

    struct CountingMode {
        calls: Rc<Calls>,
        fail_enable: bool,
    }

    impl RawMode for CountingMode {
        fn enable(&self) -> io::Result<()> {
            if self.fail_enable {
                return Err(io::Error::new(io::ErrorKind::Unsupported, "not a tty"));
            }
            self.calls.enabled.set(self.calls.enabled.get() + 1);
            Ok(())
        }

        fn disable(&self) -> io::Result<()> {
            self.calls.disabled.set(self.calls.disabled.get() + 1);
            Ok(())
        }
    }

    struct Device {
        calls: Rc<Calls>,
        bytes: io::Result<Vec<u8>>,
    }

    impl Read for Device {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.calls.reads.set(self.calls.reads.get() + 1);
            // Raw mode must still be on while reading.
            assert_eq!(self.calls.disabled.get(), 0);
            match &self.bytes {
                Ok(b) => {
                    let n = b.len().min(buf.len());
                    buf[..n].copy_from_slice(&b[..n]);
                    Ok(n)
                }
                Err(e) => Err(io::Error::new(e.kind(), e.to_string())),
            }
        }
    }

    fn tty(
        calls: &Rc<Calls>,
        fail_enable: bool,
        bytes: io::Result<Vec<u8>>,
    ) -> io::Result<RawTty<CountingMode, Device>> {
        RawTty::acquire(
            CountingMode {
                calls: Rc::clone(calls),
                fail_enable,
            },
            Device {
                calls: Rc::clone(calls),
                bytes,
            },
        )
    }

    #[test]
    fn mode_restored_once_after_read() {
        let calls = Rc::new(Calls::default());
        let mut buf = [0u8; 3];
        let n = read_once(tty(&calls, false, Ok(vec![27, b'[', b'A'])).unwrap(), &mut buf).unwrap();

        assert_eq!(n, 3);
        assert_eq!(buf, [27, b'[', b'A']);
        assert_eq!(calls.enabled.get(), 1);
        assert_eq!(calls.disabled.get(), 1);
    }

    #[test]
    fn mode_restored_once_when_read_fails() {
        let calls = Rc::new(Calls::default());
        let mut buf = [0u8; 3];
        let err = read_once(
            tty(&calls, false, Err(io::Error::new(io::ErrorKind::Other, "hangup"))).unwrap(),
            &mut buf,
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "hangup");
        assert_eq!(calls.reads.get(), 1);
        assert_eq!(calls.disabled.get(), 1);
    }

    #[test]
    fn failed_enable_reads_nothing_and_restores_nothing() {
        let calls = Rc::new(Calls::default());
        let err = tty(&calls, true, Ok(vec![13])).err().unwrap();

        assert_eq!(err.kind(), io::ErrorKind::Unsupported);
        assert_eq!(calls.enabled.get(), 0);
        assert_eq!(calls.reads.get(), 0);
        assert_eq!(calls.disabled.get(), 0);
    }

    #[test]
    fn restore_failure_does_not_panic() {
        struct BrokenRestore;
        impl RawMode for BrokenRestore {
            fn enable(&self) -> io::Result<()> {
                Ok(())
            }
            fn disable(&self) -> io::Result<()> {
                Err(io::Error::new(io::ErrorKind::Other, "ioctl failed"))
            }
        }

        let mut buf = [0u8; 3];
        let tty = RawTty::acquire(BrokenRestore, &[13u8][..]).unwrap();
        assert_eq!(read_once(tty, &mut buf).unwrap(), 1);
        assert_eq!(buf[0], 13);
    }
}
