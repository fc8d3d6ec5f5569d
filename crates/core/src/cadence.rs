/// Fixed-interval deadline tracker driven by a caller-supplied clock.
///
/// The main loop keeps one `Cadence` for simulation updates and one for
/// redraws, so both run on a single thread against the same board.
#[derive(Debug, Clone)]
pub struct Cadence {
    interval_ms: u64,
    next_due_ms: u64,
    started: bool,
}

impl Cadence {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            next_due_ms: 0,
            started: false,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Decide whether the cadence fires at `now_ms`.
    ///
    /// - The first poll always fires.
    /// - Afterwards it fires once `interval_ms` has passed since the last firing.
    ///   A late poll fires once and schedules from `now_ms`; missed slots are
    ///   not replayed.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if !self.started || now_ms >= self.next_due_ms {
            self.started = true;
            self.next_due_ms = now_ms.saturating_add(self.interval_ms);
            return true;
        }
        false
    }

    /// Milliseconds until the next firing (0 if already due).
    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        if !self.started {
            return 0;
        }
        self.next_due_ms.saturating_sub(now_ms)
    }

    /// Make the next poll fire regardless of time.
    pub fn reset(&mut self) {
        self.started = false;
    }
}
