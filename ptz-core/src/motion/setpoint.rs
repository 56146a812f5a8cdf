//! Single-writer setpoint slot
//!
//! Latest write wins; there is no queue. Readers always observe a complete
//! setpoint: the three fields are guarded by a sequence counter that is odd
//! while a write is in progress.

use portable_atomic::{fence, AtomicI32, AtomicU32, Ordering};
use ptz_protocol::MovementSetpoint;

/// Shared pan/tilt speed setpoint
#[derive(Debug, Default)]
pub struct SetpointSlot {
    sequence: AtomicU32,
    pan_speed: AtomicI32,
    pan_accel: AtomicI32,
    tilt_speed: AtomicI32,
}

impl SetpointSlot {
    /// Create a slot holding a stopped setpoint
    pub const fn new() -> Self {
        Self {
            sequence: AtomicU32::new(0),
            pan_speed: AtomicI32::new(0),
            pan_accel: AtomicI32::new(0),
            tilt_speed: AtomicI32::new(0),
        }
    }

    /// Replace the current setpoint
    ///
    /// Must only be called from one context.
    pub fn publish(&self, setpoint: MovementSetpoint) {
        let seq = self.sequence.load(Ordering::Relaxed);
        self.sequence.store(seq.wrapping_add(1), Ordering::Relaxed);
        fence(Ordering::Release);

        self.pan_speed.store(setpoint.pan_speed, Ordering::Relaxed);
        self.pan_accel.store(setpoint.pan_accel, Ordering::Relaxed);
        self.tilt_speed.store(setpoint.tilt_speed, Ordering::Relaxed);

        self.sequence.store(seq.wrapping_add(2), Ordering::Release);
    }

    /// Read the latest complete setpoint
    pub fn snapshot(&self) -> MovementSetpoint {
        loop {
            let before = self.sequence.load(Ordering::Acquire);
            if before % 2 == 1 {
                core::hint::spin_loop();
                continue;
            }

            let setpoint = MovementSetpoint {
                pan_speed: self.pan_speed.load(Ordering::Relaxed),
                pan_accel: self.pan_accel.load(Ordering::Relaxed),
                tilt_speed: self.tilt_speed.load(Ordering::Relaxed),
            };

            fence(Ordering::Acquire);
            if self.sequence.load(Ordering::Relaxed) == before {
                return setpoint;
            }
        }
    }

    /// Number of completed writes
    pub fn revision(&self) -> u32 {
        self.sequence.load(Ordering::Acquire) / 2
    }
}
