//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser and markup concerns from components and
//! drivers so those stay testable natively.

pub mod dom;
pub mod markup;
