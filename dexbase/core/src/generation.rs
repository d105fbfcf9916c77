/// A monotonic stamp attached to an in-flight request or a pending timer.
///
/// A completion is only applied if its [`Generation`] is still the latest one
/// handed out by the [`Tracker`] that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

#[derive(Debug, Clone, Default)]
pub struct Tracker {
    latest: Generation,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self) -> Generation {
        self.latest.0 += 1;
        self.latest
    }

    /// The most recent generation handed out.
    pub fn latest(&self) -> Generation {
        self.latest
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.latest == generation
    }
}
