//! Shared utilities for the frame loop.

/// Frame delta timing and FPS smoothing.
pub mod frame_clock;
