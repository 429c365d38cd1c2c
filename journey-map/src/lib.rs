//! Transit journey map renderer.
//!
//! Draws a computed public-transit journey onto an interactive map: the
//! route as a progressively revealed line, markers for every stop and
//! transfer, and a camera framed around the whole route.

pub mod domain;
pub mod preview;
pub mod render;
pub mod wire;
