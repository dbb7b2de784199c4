//! Count-up animation for dashboard statistic tiles.

use std::time::Duration;

use gloo_timers::future::sleep;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use crate::consts::{STAT_TICK_MS, STAT_TICKS};
use crate::dom;

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

/// Stepping state for one stat tile's count-up.
///
/// Separated from the DOM driver so the sequence is testable without a
/// browser. The increment is `ceil(target / STAT_TICKS)`, so any target is
/// reached in at most [`STAT_TICKS`] ticks; a zero target is done before
/// the first tick.
#[derive(Debug, Clone, Copy)]
pub struct Countup {
    current: u64,
    target: u64,
    increment: u64,
}

impl Countup {
    #[must_use]
    pub fn new(target: u64) -> Self {
        Self { current: 0, target, increment: target.div_ceil(STAT_TICKS) }
    }

    /// Advance one tick and return the value to display, clamped to the
    /// target.
    pub fn tick(&mut self) -> u64 {
        self.current = self.current.saturating_add(self.increment).min(self.target);
        self.current
    }

    /// Whether the target has been reached.
    #[must_use]
    pub fn done(&self) -> bool {
        self.current >= self.target
    }

    /// The value currently displayed.
    #[must_use]
    pub fn current(&self) -> u64 {
        self.current
    }
}

/// Animate every `.stats-card h3` whose text is a non-negative integer
/// from 0 up to that value. Tiles with any other content are skipped and
/// their text left untouched.
pub fn animate(doc: &Document) {
    for stat in dom::select_all(doc, ".stats-card h3") {
        let Some(target) = stat
            .text_content()
            .and_then(|text| text.trim().parse::<u64>().ok())
        else {
            continue;
        };
        spawn_local(async move {
            let mut countup = Countup::new(target);
            stat.set_text_content(Some("0"));
            while !countup.done() {
                sleep(Duration::from_millis(STAT_TICK_MS)).await;
                let shown = countup.tick();
                stat.set_text_content(Some(&shown.to_string()));
            }
        });
    }
}
