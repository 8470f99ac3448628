//! Cross-cutting helpers shared by the indicator modules.

pub mod math;
