/// Identifies one arming of a [`DebounceTimer`].
///
/// Hosts that schedule real timers hand the token back through [`DebounceTimer::fire`]; only the
/// token from the most recent [`DebounceTimer::restart`] is live.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimerToken(u64);

/// A cancellable debounce timer handle.
///
/// Every `restart` supersedes the previous arming. The timer can be driven two ways:
/// - polling: call `poll(now_ms)` from a frame/tick loop; it fires once the deadline passes
/// - host timers: schedule `delay_ms` yourself and call `fire(token)` when it elapses
///
/// Superseded or cancelled tokens are inert: firing them is a no-op that returns `false`.
#[derive(Clone, Debug)]
pub struct DebounceTimer {
    delay_ms: u64,
    generation: u64,
    deadline_ms: Option<u64>,
}

impl DebounceTimer {
    pub const DEFAULT_DELAY_MS: u64 = 150;

    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            generation: 0,
            deadline_ms: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Changes the delay for future arms. A pending deadline is left as is.
    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.delay_ms = delay_ms;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    /// Arms the timer at `now_ms + delay_ms`, superseding any pending arming.
    pub fn restart(&mut self, now_ms: u64) -> TimerToken {
        self.generation = self.generation.wrapping_add(1);
        self.deadline_ms = Some(now_ms.saturating_add(self.delay_ms));
        TimerToken(self.generation)
    }

    /// Disarms the timer. Returns `true` if an arming was pending.
    pub fn cancel(&mut self) -> bool {
        self.generation = self.generation.wrapping_add(1);
        self.deadline_ms.take().is_some()
    }

    /// Fires the arming identified by `token`. Returns `false` for stale tokens.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.deadline_ms.is_none() || token.0 != self.generation {
            return false;
        }
        self.deadline_ms = None;
        true
    }

    /// Fires the pending arming if its deadline has passed.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for DebounceTimer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY_MS)
    }
}
