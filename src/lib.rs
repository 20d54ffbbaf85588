//! Deterministic CPU scheduling simulator.
//!
//! Simulates a single CPU under four classical policies and reports, per
//! policy, the per-process timing breakdown, aggregate metrics and the
//! ordered execution timeline (Gantt data).
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Timeline`, `SimulationResult`, `Algorithm`
//! - **`validation`**: Boundary checks (negative arrivals, empty bursts, bad quantum)
//! - **`dispatching`**: Ready-queue selection rules with pid tie-breaking
//! - **`scheduler`**: FCFS, SJF, Round Robin, Priority, metrics, and the `Simulator`
//! - **`report`**: Rounded boundary records and cross-policy comparison
//! - **`config`**: Engine settings and caller requests
//!
//! # Example
//!
//! ```
//! use u_cpusched::{Algorithm, SimulationRequest, Simulator};
//!
//! let report = Simulator::new().run_request(&SimulationRequest::demo()).unwrap();
//! let sjf = report.get(Algorithm::Sjf).unwrap();
//! assert_eq!(sjf.completion_order(), vec![1, 5, 2, 4, 3]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;

pub use config::{ProcessSpec, SimulationConfig, SimulationRequest};
pub use error::{Result, SimulationError};
pub use models::{Algorithm, Pid, Process, SimulationResult, Timeline, TimelineSegment};
pub use report::{Comparison, ResultRecord, SimulationReport};
pub use scheduler::{PerformanceMetrics, SchedulingPolicy, Simulator};
