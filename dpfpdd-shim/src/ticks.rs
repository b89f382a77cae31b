//! Milliseconds since boot, the clock the simulated capture stamps its
//! response with (Win32 `GetTickCount64` semantics).

#[cfg(windows)]
pub fn tick_count_ms() -> u64 {
    unsafe { windows::Win32::System::SystemInformation::GetTickCount64() }
}

#[cfg(unix)]
pub fn tick_count_ms() -> u64 {
    let mut ts = libc::timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };
    // CLOCK_MONOTONIC cannot fail with a valid timespec pointer.
    unsafe { libc::clock_gettime(libc::CLOCK_MONOTONIC, &mut ts) };

    ts.tv_sec as u64 * 1000 + ts.tv_nsec as u64 / 1_000_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_count_does_not_go_backwards() {
        let first = tick_count_ms();
        let second = tick_count_ms();

        assert!(first > 0);
        assert!(second >= first);
    }
}
