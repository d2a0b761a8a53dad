//! Streaming primitives for shell-first SSR.
//!
//! This crate enforces shell-first streaming patterns:
//! - `StreamingSink` - Shell-then-sections delivery order over any byte sink,
//!   with flush offsets recorded for the delivery log
//! - `SectionTask` / `ProgressiveRenderer` - Skeleton-then-result sections
//!   that resolve independently of their siblings
//! - `SectionKey` - Latest-query-wins guard for keyed sections
//!
//! Shell markup itself belongs to the workload; the sink only cares that it
//! goes out first.

mod keyed;
mod progressive;
mod section;
mod sink;

pub use keyed::*;
pub use progressive::*;
pub use section::*;
pub use sink::*;
