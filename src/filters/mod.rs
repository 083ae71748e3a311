//! Filter modules for the Laplace edge filter.
//!
//! ## Supported Format
//!
//! | Format | Shape | Type | Description |
//! |--------|-------|------|-------------|
//! | RGB8 | (H, W, 3) | u8 | Red, green, blue, 0-255, interleaved, no row padding |
//!
//! Every channel byte is filtered independently against the same channel of
//! its neighbors. There is no alpha and no float variant.
//!
//! ## Modules
//!
//! - **laplace** - the 5-point kernel, span and whole-image sweeps
//! - **partition** - splitting interior rows between workers
//! - **parallel** - rayon sweep over a partition plan

pub mod laplace;
pub mod partition;
pub mod parallel;
