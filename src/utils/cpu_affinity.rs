//! Thread pinning for the timed passes.
//!
//! Only Linux has a real implementation (`sched_setaffinity` through libc).
//! Elsewhere pinning reports failure and the guard does nothing.

#[cfg(target_os = "linux")]
mod platform {
    use std::cell::RefCell;

    thread_local! {
        static ORIGINAL_AFFINITY: RefCell<Option<libc::cpu_set_t>> = const { RefCell::new(None) };
    }

    pub fn current_cpu() -> Option<usize> {
        let cpu = unsafe { libc::sched_getcpu() };
        (cpu >= 0).then_some(cpu as usize)
    }

    pub fn pin(core_id: usize) -> bool {
        unsafe {
            let mut original: libc::cpu_set_t = std::mem::zeroed();
            if libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut original) != 0 {
                return false;
            }

            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core_id, &mut set);
            if libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) != 0 {
                return false;
            }

            ORIGINAL_AFFINITY.with(|cell| *cell.borrow_mut() = Some(original));
            true
        }
    }

    pub fn restore() -> bool {
        ORIGINAL_AFFINITY.with(|cell| match cell.borrow_mut().take() {
            Some(set) => unsafe {
                libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
            },
            None => false,
        })
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub fn current_cpu() -> Option<usize> {
        None
    }
    pub fn pin(_core_id: usize) -> bool {
        false
    }
    pub fn restore() -> bool {
        true
    }
}

/// Pin the current thread to the core it is running on, falling back to core 0.
///
/// Returns the pinned core, or `None` if pinning is unsupported or refused.
pub fn pin_to_current_core() -> Option<usize> {
    let core = platform::current_cpu().unwrap_or(0);
    platform::pin(core).then_some(core)
}

/// Restore the affinity saved by the last successful pin.
pub fn unpin() -> bool {
    platform::restore()
}

/// RAII guard for CPU pinning: pins on creation, unpins on drop.
///
/// ```ignore
/// {
///     let _pin = CpuPinGuard::new();
///     // ... timed pass ...
/// }
/// ```
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
}

impl CpuPinGuard {
    pub fn new() -> Self {
        Self {
            pinned_core: pin_to_current_core(),
        }
    }

    pub fn core_id(&self) -> Option<usize> {
        self.pinned_core
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned_core.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if self.pinned_core.is_some() {
            unpin();
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_guard() {
        let guard = CpuPinGuard::new();
        if guard.is_pinned() {
            assert!(guard.core_id().is_some());
        }
        drop(guard);
    }

    #[test]
    fn test_pin_unpin_cycle() {
        if pin_to_current_core().is_some() {
            assert!(unpin(), "Unpin should succeed after pin");
        }
    }

    #[test]
    fn test_unpin_without_pin() {
        // Nothing saved on this thread yet.
        let restored = std::thread::spawn(unpin).join().unwrap();
        assert_eq!(restored, !cfg!(target_os = "linux"));
    }
}
