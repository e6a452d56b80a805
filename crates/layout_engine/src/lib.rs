//! Layout Engine - Line wrapping, pagination, and footer stamping
//!
//! Converts sanitized header and content lines into positioned pages for the
//! PDF renderer. Layout runs in two passes: the first flows lines onto pages,
//! the second stamps "Page K of N" footers once N is known.

mod engine;
mod error;
mod footer;
mod geometry;
mod layout_tree;
mod line_breaker;
mod metrics;
mod paginator;

pub use engine::*;
pub use error::*;
pub use footer::*;
pub use geometry::*;
pub use layout_tree::*;
pub use line_breaker::*;
pub use metrics::*;
pub use paginator::*;
