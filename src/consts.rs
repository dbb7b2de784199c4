//! Timing and layout constants shared across the enhancement behaviors.

// ── Timers ──────────────────────────────────────────────────────

/// How long server-rendered alerts stay on screen before auto-dismissal,
/// in milliseconds.
pub const ALERT_DISMISS_MS: u64 = 5_000;

/// Fallback delay before a busy submit button is re-enabled, in
/// milliseconds. Fires unconditionally; see [`crate::enhance::forms`].
pub const SUBMIT_RESET_MS: u64 = 5_000;

/// How long a toast stays on screen, in milliseconds.
pub const TOAST_DISMISS_MS: u64 = 4_000;

/// Tick interval for the dashboard stat counters, in milliseconds.
pub const STAT_TICK_MS: u64 = 50;

/// Number of ticks a stat counter takes to reach its target, at most.
pub const STAT_TICKS: u64 = 20;

// ── Animation ───────────────────────────────────────────────────

/// Entrance-animation stagger between consecutive cards, in seconds.
pub const CARD_STAGGER_SECS: f64 = 0.1;
