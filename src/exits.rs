//! Exit handling: signal handlers and terminal restore.

const SIGNALS: [libc::c_int; 3] = [libc::SIGINT, libc::SIGTERM, libc::SIGHUP];

/// Put the tty back into canonical, echoing mode.
fn restore_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit; also runs after a signal exit.
extern "C" fn cleanup_on_exit() {
    restore_termios();
    // Reset colors and show the cursor the form hid, only on a tty.
    const RESTORE: &[u8] = b"\x1b[0m\x1b[?25h";
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(1, RESTORE.as_ptr() as *const libc::c_void, RESTORE.len());
        }
    }
}

extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers and register atexit cleanup.
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in SIGNALS {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep generated passwords out of core dumps.
#[cfg(target_os = "linux")]
pub fn disable_core_dumps() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
pub fn disable_core_dumps() {}

pub fn reset_terminal() {
    restore_termios();
}
