//! # Introduction
//!
//! sortty animates sorting algorithms in the terminal. Each algorithm runs as
//! an explicit state machine that performs one atomic step per call, so the
//! render loop can interleave sorting progress with drawing and input.
//!
//! ## Pipeline
//!
//! ```text
//! Permutation → Session (array + counters + algorithm) → Playback → TUI
//! ```
//!
//! 1. [`sort`] — the five step-producing algorithms, the comparison/access
//!    counters, highlights, and the [`sort::Session`] that ties them together.
//! 2. [`playback`] — frame-paced draining of steps and the user commands
//!    (switch, reset, pause, speed).
//! 3. [`config`] — command-line options parsed with clap.
//! 4. [`report`] — headless comparison of all algorithms on one input.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Algorithms
//!
//! Quick sort (iterative, Lomuto partition), heap sort, bubble sort with
//! early exit, insertion sort, selection sort.

pub mod config;
pub mod playback;
pub mod report;
pub mod sort;
pub mod ui;
