//! Hydronic system models.
//!
//! Closed-loop hot water heating and chilled water systems and their
//! components.

pub mod expansion_tank;
