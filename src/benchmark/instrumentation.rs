//! Timing and heap measurement
//!
//! The runner never touches clocks or allocator counters directly; it goes
//! through [`Instrumentation`] so tests can substitute fixed readings.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{compiler_fence, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use crate::models::bytes_to_mb;

/// Live heap bytes as seen by [`TrackingAllocator`]
static ALLOCATED_BYTES: AtomicUsize = AtomicUsize::new(0);

/// Measurement capability used by the benchmark runner
#[cfg_attr(test, mockall::automock)]
pub trait Instrumentation {
    /// Bring the heap to a quiet state before a snapshot
    fn quiesce(&mut self);

    /// Current heap usage in megabytes
    fn memory_mb(&mut self) -> f64;

    /// Record the start timestamp
    fn start_timer(&mut self);

    /// Time elapsed since the matching `start_timer`
    fn stop_timer(&mut self) -> Duration;
}

/// Counting wrapper around the system allocator
///
/// Install it in the binary with `#[global_allocator]`. Until it is
/// installed, [`TrackingAllocator::allocated_bytes`] stays at zero.
pub struct TrackingAllocator;

impl TrackingAllocator {
    /// Bytes currently allocated through this allocator
    pub fn allocated_bytes() -> usize {
        ALLOCATED_BYTES.load(Ordering::Relaxed)
    }
}

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            ALLOCATED_BYTES.fetch_add(layout.size(), Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            ALLOCATED_BYTES.fetch_add(layout.size(), Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        ALLOCATED_BYTES.fetch_sub(layout.size(), Ordering::Relaxed);
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            // The old block is only released when the reallocation succeeds
            ALLOCATED_BYTES.fetch_add(new_size, Ordering::Relaxed);
            ALLOCATED_BYTES.fetch_sub(layout.size(), Ordering::Relaxed);
        }
        new_ptr
    }
}

/// Wall clock plus the tracking allocator's live byte count
#[derive(Debug, Default)]
pub struct SystemProbe {
    started: Option<Instant>,
}

impl SystemProbe {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Instrumentation for SystemProbe {
    fn quiesce(&mut self) {
        // Frees happen at drop, so there is nothing to collect; only keep the
        // compiler from moving allocations across the snapshot.
        compiler_fence(Ordering::SeqCst);
    }

    fn memory_mb(&mut self) -> f64 {
        bytes_to_mb(TrackingAllocator::allocated_bytes())
    }

    fn start_timer(&mut self) {
        self.started = Some(Instant::now());
    }

    fn stop_timer(&mut self) -> Duration {
        match self.started.take() {
            Some(start) => start.elapsed(),
            None => {
                tracing::warn!("stop_timer called without start_timer");
                Duration::ZERO
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_probe_timer() {
        let mut probe = SystemProbe::new();
        probe.start_timer();
        std::thread::sleep(Duration::from_millis(5));
        let elapsed = probe.stop_timer();
        assert!(elapsed >= Duration::from_millis(5));
    }

    #[test]
    fn test_stop_without_start_is_zero() {
        let mut probe = SystemProbe::new();
        assert_eq!(probe.stop_timer(), Duration::ZERO);
    }

    #[test]
    fn test_memory_is_non_negative() {
        // Not installed as the global allocator in unit tests
        let mut probe = SystemProbe::new();
        probe.quiesce();
        assert!(probe.memory_mb() >= 0.0);
    }

    #[test]
    fn test_tracking_allocator_counts_live_bytes() {
        let allocator = TrackingAllocator;
        let layout = Layout::from_size_align(4096, 8).unwrap();
        let before = TrackingAllocator::allocated_bytes();

        unsafe {
            let ptr = allocator.alloc(layout);
            assert!(!ptr.is_null());
            assert_eq!(TrackingAllocator::allocated_bytes(), before + 4096);

            let grown = allocator.realloc(ptr, layout, 8192);
            assert!(!grown.is_null());
            assert_eq!(TrackingAllocator::allocated_bytes(), before + 8192);

            allocator.dealloc(grown, Layout::from_size_align(8192, 8).unwrap());
        }
        assert_eq!(TrackingAllocator::allocated_bytes(), before);
    }
}
