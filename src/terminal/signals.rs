use signal_hook::SigId;
use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
use signal_hook::low_level::{pipe, unregister};
use std::io::{self, Read};
use std::os::fd::{AsRawFd, RawFd};
use std::os::unix::net::UnixStream;

/// Signals that end a session as a cancel instead of killing the process
/// with the terminal still in raw mode.
pub const CANCEL_SIGNALS: [libc::c_int; 3] = [SIGINT, SIGTERM, SIGHUP];

/// Self-pipe for signal delivery. Handlers only write a byte; readers wait
/// on their input and the pipe together, so a blocked read wakes up.
#[derive(Debug)]
pub struct SignalWatch {
    wake: UnixStream,
    // Held so `wake` never reads end-of-file.
    _notify: UnixStream,
    ids: Vec<SigId>,
    raised: bool,
}

impl SignalWatch {
    pub fn register(signals: &[libc::c_int]) -> io::Result<Self> {
        let (wake, notify) = UnixStream::pair()?;
        wake.set_nonblocking(true)?;

        let mut watch = Self {
            wake,
            _notify: notify.try_clone()?,
            ids: Vec::with_capacity(signals.len()),
            raised: false,
        };
        for &signal in signals {
            // On failure `watch` drops and unregisters what was added so far.
            let id = pipe::register(signal, notify.try_clone()?)?;
            watch.ids.push(id);
        }
        tracing::debug!(signals = ?signals, "signal handlers installed");
        Ok(watch)
    }

    /// Blocks until `fd` is readable. Fails with `ErrorKind::Interrupted`
    /// once a watched signal has arrived.
    pub fn wait_readable(&mut self, fd: RawFd) -> io::Result<()> {
        loop {
            if self.raised || self.drain()? {
                self.raised = true;
                return Err(io::Error::new(
                    io::ErrorKind::Interrupted,
                    "interrupted by signal",
                ));
            }

            let mut fds = [
                libc::pollfd {
                    fd,
                    events: libc::POLLIN,
                    revents: 0,
                },
                libc::pollfd {
                    fd: self.wake.as_raw_fd(),
                    events: libc::POLLIN,
                    revents: 0,
                },
            ];
            // SAFETY: `fds` is a live array of initialised pollfd entries.
            let ready = unsafe { libc::poll(fds.as_mut_ptr(), fds.len() as libc::nfds_t, -1) };
            if ready < 0 {
                let err = io::Error::last_os_error();
                // The handler has already written to the pipe; poll again to see it.
                if err.kind() == io::ErrorKind::Interrupted {
                    continue;
                }
                return Err(err);
            }
            if fds[1].revents != 0 {
                continue;
            }
            if fds[0].revents != 0 {
                return Ok(());
            }
        }
    }

    fn drain(&mut self) -> io::Result<bool> {
        let mut buf = [0u8; 16];
        let mut seen = false;
        loop {
            match self.wake.read(&mut buf) {
                Ok(0) => return Ok(seen),
                Ok(_) => seen = true,
                Err(err) if err.kind() == io::ErrorKind::WouldBlock => return Ok(seen),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
    }
}

impl Drop for SignalWatch {
    fn drop(&mut self) {
        for id in self.ids.drain(..) {
            unregister(id);
        }
    }
}
