//! CPU scheduling domain models.
//!
//! Provides the passive data types shared by every policy: the process
//! record, the execution timeline and the per-policy result bundle.
//!
//! # Domain Mappings
//!
//! | u-cpusched | OS textbook | Gantt chart |
//! |------------|-------------|-------------|
//! | Process | PCB / job | Row label |
//! | TimelineSegment | Dispatch | Bar |
//! | SimulationResult | Policy run | One chart |

mod process;
mod result;
mod timeline;

pub use process::{Pid, Process};
pub use result::{Algorithm, SimulationResult};
pub use timeline::{Timeline, TimelineSegment};
