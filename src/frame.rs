/// Frame metadata - carries frame number and timing info.
///
/// Passed explicitly into per-frame update calls; there is no hidden static
/// frame counter anywhere in the core.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

impl FrameContext {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self {
            number,
            time,
            delta,
        }
    }
}

/// Infinite iterator that yields one [`FrameContext`] per loop turn.
/// Use in a frame loop: `for frame in FrameClock::new().take(n) { ... }`
pub struct FrameClock {
    frame_number: u64,
    start_time: std::time::Instant,
    last_frame_time: std::time::Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = std::time::Instant::now();
        Self {
            frame_number: 0,
            start_time: now,
            last_frame_time: now,
        }
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FrameClock {
    type Item = FrameContext;

    fn next(&mut self) -> Option<FrameContext> {
        let now = std::time::Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        let time = now.duration_since(self.start_time).as_secs_f32();

        let ctx = FrameContext::new(self.frame_number, time, delta);

        self.frame_number += 1;
        self.last_frame_time = now;

        Some(ctx)
    }
}
