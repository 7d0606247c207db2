//! Page Configuration
//!
//! Tunable constants for the interactivity layer. Defaults reproduce the
//! production page exactly; tests override the seed and occasionally the
//! selectors.

use alloc::string::String;

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Smoothing factor for the glow and dot followers, in (0, 1].
    pub follower_smoothing: f64,
    /// Smoothing factor for the ring follower. Must stay strictly below
    /// `follower_smoothing` so the ring trails the dot.
    pub ring_smoothing: f64,
    /// Sparkle lifetime before removal, in ms.
    pub sparkle_lifetime_ms: u64,
    /// Every n-th raw pointer move spawns one ambient sparkle.
    pub sparkle_move_interval: u32,
    /// Number of sparkles in a click burst.
    pub burst_count: u32,
    /// Stagger between burst sparkles, in ms.
    pub burst_stagger_ms: u64,
    /// Maximum per-axis jitter applied to burst sparkles, in px.
    pub burst_jitter_px: f64,
    /// Counter animation duration, in ms.
    pub counter_duration_ms: u64,
    /// Bottom-edge shrink of the observation region, in px.
    pub observer_bottom_margin_px: f64,
    /// Fraction of an element's area that must intersect the region.
    pub observer_threshold: f64,
    /// Scroll offset past which the navbar is marked `scrolled`.
    pub navbar_scroll_threshold: f64,
    /// Scroll offset past which the back-to-top control is `visible`.
    pub back_to_top_threshold: f64,
    /// Class naming the entrance-reveal targets.
    pub reveal_class: String,
    /// Id of the distinguished highlights container that triggers counters.
    pub highlights_id: String,
    /// Year stamped into the footer.
    pub current_year: i32,
    /// RNG seed for sparkle jitter and color choice.
    pub rng_seed: u64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            follower_smoothing: 0.15,
            ring_smoothing: 0.08,
            sparkle_lifetime_ms: 600,
            sparkle_move_interval: 5,
            burst_count: 5,
            burst_stagger_ms: 30,
            burst_jitter_px: 15.0,
            counter_duration_ms: 2000,
            observer_bottom_margin_px: 50.0,
            observer_threshold: 0.10,
            navbar_scroll_threshold: 50.0,
            back_to_top_threshold: 300.0,
            reveal_class: String::from("reveal"),
            highlights_id: String::from("highlights"),
            current_year: 2026,
            rng_seed: 0x1234_5678_9ABC_DEF0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_trails_dot() {
        let config = PageConfig::default();
        assert!(config.ring_smoothing < config.follower_smoothing);
    }
}
