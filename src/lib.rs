//! # Expansion Tank Models
//!
//! [Twine](https://github.com/isentropic-dev/twine) models for sizing
//! expansion tanks in closed-loop hydronic systems.
//!
//! The result of a sizing is the minimum tank acceptance volume: the smallest
//! diaphragm tank that absorbs the expansion of system water between fill and
//! operating conditions without exceeding the allowed tank pressure.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`calculator`]: A stateless form front end that parses raw field text,
//!   runs both sizing methods, and renders a report.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events at `debug` level and never installs a
//! subscriber.

pub mod calculator;
pub mod models;
pub mod support;
