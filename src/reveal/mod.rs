//! Timed reveal of a computed draft order.
//!
//! The order is final before the reveal starts. A [`RevealSequence`] is only a
//! schedule of events over it; a [`Clock`] decides when they fire.

use std::time::Duration;

use crate::config::{RevealConfig, MAX_COUNTDOWN_FROM};

mod clock;

pub use clock::{Clock, ManualClock, SystemClock};

/// Something the view should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealEvent {
    /// Countdown number before the first pick.
    Countdown(u32),
    /// Pick `index` (0-based) is `name`.
    Reveal { index: usize, name: String },
    /// Enough picks are out for skipping the rest to make sense.
    FastForwardAvailable,
    /// Every pick is out.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Running,
    Finished,
    Cancelled,
}

#[derive(Debug, Clone)]
struct Step {
    /// Since start.
    offset: Duration,
    event: RevealEvent,
}

/// Cancelable schedule of reveal events.
#[derive(Debug, Clone)]
pub struct RevealSequence {
    steps: Vec<Step>,
    next: usize,
    started_at: Option<Duration>,
    state: RevealState,
}

impl RevealSequence {
    /// Build the schedule for `order`.
    ///
    /// With `countdown`, the picks start after `countdown_from` ticks, capped
    /// at [`MAX_COUNTDOWN_FROM`].
    pub fn new(order: &[String], config: &RevealConfig, countdown: bool) -> Self {
        let countdown_from = if countdown {
            config.countdown_from.min(MAX_COUNTDOWN_FROM)
        } else {
            0
        };
        let mut steps = Vec::with_capacity(order.len() + countdown_from as usize + 2);

        let mut reveal_start = Duration::ZERO;
        if countdown_from > 0 {
            let tick = config.countdown_tick();
            for (i, n) in (1..=countdown_from).rev().enumerate() {
                steps.push(Step {
                    offset: tick * i as u32,
                    event: RevealEvent::Countdown(n),
                });
            }
            reveal_start = tick * countdown_from;
        }

        let step = config.step();
        let mut finished_at = reveal_start;
        for (index, name) in order.iter().enumerate() {
            let offset = reveal_start + step * index as u32;
            steps.push(Step {
                offset,
                event: RevealEvent::Reveal {
                    index,
                    name: name.clone(),
                },
            });
            if index + 1 == config.fast_forward_after {
                steps.push(Step {
                    offset,
                    event: RevealEvent::FastForwardAvailable,
                });
            }
            finished_at = offset + config.finish_delay();
        }
        steps.push(Step {
            offset: finished_at,
            event: RevealEvent::Finished,
        });

        Self {
            steps,
            next: 0,
            started_at: None,
            state: RevealState::Pending,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, RevealState::Finished | RevealState::Cancelled)
    }

    /// Number of picks shown so far.
    pub fn revealed(&self) -> usize {
        self.steps[..self.next]
            .iter()
            .filter(|s| matches!(s.event, RevealEvent::Reveal { .. }))
            .count()
    }

    /// Anchor the schedule at `now`. No-op unless pending.
    pub fn start(&mut self, now: Duration) {
        if self.state == RevealState::Pending {
            self.started_at = Some(now);
            self.state = RevealState::Running;
        }
    }

    /// Events due at `now`, in schedule order. Starts a pending sequence.
    pub fn poll(&mut self, now: Duration) -> Vec<RevealEvent> {
        self.start(now);
        let Some(started_at) = self.started_at else {
            return Vec::new();
        };
        if self.state != RevealState::Running {
            return Vec::new();
        }

        let elapsed = now.saturating_sub(started_at);
        let due = self.steps[self.next..]
            .iter()
            .take_while(|s| s.offset <= elapsed)
            .count();
        let events = self.steps[self.next..self.next + due]
            .iter()
            .map(|s| s.event.clone())
            .collect();
        self.next += due;
        if self.next == self.steps.len() {
            self.state = RevealState::Finished;
        }
        events
    }

    /// Absolute time the next event is due, while running.
    pub fn next_due(&self) -> Option<Duration> {
        if self.state != RevealState::Running {
            return None;
        }
        let started_at = self.started_at?;
        self.steps.get(self.next).map(|s| started_at + s.offset)
    }

    /// Skip ahead: every pick not yet shown, then `Finished`.
    pub fn fast_forward(&mut self) -> Vec<RevealEvent> {
        if self.is_finished() {
            return Vec::new();
        }
        let events = self.steps[self.next..]
            .iter()
            .filter(|s| {
                matches!(
                    s.event,
                    RevealEvent::Reveal { .. } | RevealEvent::Finished
                )
            })
            .map(|s| s.event.clone())
            .collect();
        self.next = self.steps.len();
        self.state = RevealState::Finished;
        events
    }

    /// Stop without emitting anything else.
    pub fn cancel(&mut self) {
        if !self.is_finished() {
            tracing::debug!(revealed = self.revealed(), "reveal cancelled");
            self.state = RevealState::Cancelled;
        }
    }
}

/// Run `sequence` to the end on `clock`, handing every event to `on_event`.
pub fn play<C: Clock>(
    sequence: &mut RevealSequence,
    clock: &C,
    mut on_event: impl FnMut(RevealEvent),
) {
    loop {
        for event in sequence.poll(clock.now()) {
            on_event(event);
        }
        match sequence.next_due() {
            Some(deadline) => clock.sleep_until(deadline),
            None => break,
        }
    }
}
