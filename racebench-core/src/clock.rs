//! Elapsed-Time Measurement
//!
//! Every operation is timed through the `Clock` trait so tests can
//! substitute deterministic implementations for the wall clock. Readings
//! are whole microseconds and never negative.

use std::cell::Cell;
use std::time::Instant;

use crate::meter::allocation_snapshot;

/// Runs a closure and reports its elapsed time in whole microseconds.
pub trait Clock {
    /// Execute `op` and return the elapsed time attributed to it.
    fn measure(&self, op: &mut dyn FnMut()) -> u64;
}

/// Monotonic wall clock backed by `std::time::Instant`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallClock;

impl Clock for WallClock {
    fn measure(&self, op: &mut dyn FnMut()) -> u64 {
        let start = Instant::now();
        op();
        start.elapsed().as_micros() as u64
    }
}

/// Deterministic clock that replays a programmed sequence of readings.
///
/// The closure still runs (its side effects are part of the harness
/// contract); only the reported elapsed time is scripted. The script cycles
/// once exhausted, so a single-value script yields a constant clock.
#[derive(Debug)]
pub struct ScriptedClock {
    script: Vec<u64>,
    cursor: Cell<usize>,
}

impl ScriptedClock {
    /// Clock replaying `script` in order. An empty script reads as constant 0.
    pub fn new(script: Vec<u64>) -> Self {
        let script = if script.is_empty() { vec![0] } else { script };
        Self {
            script,
            cursor: Cell::new(0),
        }
    }

    /// Clock that reports `micros` for every measurement.
    pub fn constant(micros: u64) -> Self {
        Self::new(vec![micros])
    }
}

impl Clock for ScriptedClock {
    fn measure(&self, op: &mut dyn FnMut()) -> u64 {
        op();
        let at = self.cursor.get();
        self.cursor.set(at + 1);
        self.script[at % self.script.len()]
    }
}

/// Deterministic clock that reports heap bytes allocated by the closure.
///
/// Allocation volume is a reproducible, work-proportional proxy for elapsed
/// time, which makes scaling properties checkable without wall-clock noise.
/// Requires [`crate::CountingAllocator`] to be installed as the global
/// allocator in the running binary; otherwise every reading is 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllocClock;

impl Clock for AllocClock {
    fn measure(&self, op: &mut dyn FnMut()) -> u64 {
        let (before, _) = allocation_snapshot();
        op();
        let (after, _) = allocation_snapshot();
        after.saturating_sub(before)
    }
}

/// Pin the current thread to a specific CPU core.
///
/// Reduces scheduler-migration noise in wall-clock readings.
#[cfg(target_os = "linux")]
pub fn pin_to_cpu(cpu: usize) -> Result<(), std::io::Error> {
    use std::mem::MaybeUninit;

    unsafe {
        let mut set = MaybeUninit::<libc::cpu_set_t>::zeroed();
        let set_ref = set.assume_init_mut();

        libc::CPU_ZERO(set_ref);
        libc::CPU_SET(cpu, set_ref);

        let result = libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), set_ref);

        if result == 0 {
            Ok(())
        } else {
            Err(std::io::Error::last_os_error())
        }
    }
}

#[cfg(not(target_os = "linux"))]
pub fn pin_to_cpu(_cpu: usize) -> Result<(), std::io::Error> {
    // CPU pinning not supported on this platform
    Ok(())
}
