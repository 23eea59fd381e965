//! String Calculator: sums delimited integers, with an egui form on top.
//!
//! The [`calculator`] module is the whole of the arithmetic; [`state`], [`app`]
//! and [`ui`] only drive it from a desktop window.

pub mod app;
pub mod calculator;
pub mod state;
pub mod ui;
