use crate::input::InputSnapshot;

/// Source of per-frame input samples.
///
/// Implemented outside the core by whatever owns the real device state
/// (a windowing event loop, a replay script, a test fixture). Called exactly
/// once per frame; the returned snapshot is immutable for that frame.
pub trait InputProvider {
    fn sample(&mut self) -> InputSnapshot;
}
