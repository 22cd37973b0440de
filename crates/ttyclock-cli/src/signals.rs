//! Termination signals.
//!
//! SIGINT, SIGTERM and SIGHUP only raise a flag. The control loop checks it
//! once per iteration and returns normally, so `ConsoleScreen` is dropped and
//! the terminal restored. A second signal while the flag is already up exits
//! at once.

use std::{
    io,
    sync::{atomic::AtomicBool, Arc},
};

#[cfg(unix)]
pub fn stop_flag() -> io::Result<Arc<AtomicBool>> {
    use signal_hook::{
        consts::{SIGHUP, SIGINT, SIGTERM},
        flag,
    };

    let stop = Arc::new(AtomicBool::new(false));
    for sig in [SIGINT, SIGTERM, SIGHUP] {
        flag::register_conditional_shutdown(sig, 1, Arc::clone(&stop))?;
        flag::register(sig, Arc::clone(&stop))?;
    }
    Ok(stop)
}

#[cfg(not(unix))]
pub fn stop_flag() -> io::Result<Arc<AtomicBool>> {
    Ok(Arc::new(AtomicBool::new(false)))
}

#[cfg(all(test, unix))]
mod tests {
    use std::sync::atomic::Ordering;

    use signal_hook::{consts::SIGHUP, low_level};

    use super::*;

    #[test]
    fn hangup_raises_the_flag_instead_of_killing() {
        let stop = stop_flag().unwrap();
        assert!(!stop.load(Ordering::SeqCst));
        low_level::raise(SIGHUP).unwrap();
        assert!(stop.load(Ordering::SeqCst));
    }
}
