//! Concurrent streaming character/word frequency analysis
//!
//! This crate implements a three-stage streaming pipeline: a text source is
//! pumped into a bounded character queue by a feeder thread, an analyzer
//! thread reconstructs words at space/period boundaries while maintaining
//! running frequency statistics, and any number of observer threads read
//! consistent snapshots of those statistics while the run is in flight.
//!
//! # Architecture
//!
//! - [`queue`]: the bounded single-producer/single-consumer hand-off
//! - [`source`]: the [`TextSource`] collaborator and synthetic generators
//! - [`tally`]: the pure word-boundary state machine
//! - [`feeder`] / [`analyzer`]: the two pipeline threads
//! - [`stats`]: shared counters, completion flags, and snapshots
//! - [`pipeline`]: orchestration and the public entry points
//!
//! # Example
//!
//! ```rust
//! use lexstat_core::{Pipeline, StrSource};
//!
//! let pipeline = Pipeline::with_defaults();
//! let outcome = pipeline.run(Box::new(StrSource::new("cat cat dog."))).unwrap();
//!
//! assert_eq!(outcome.snapshot.word_freq.get("cat"), Some(&2));
//! assert_eq!(outcome.snapshot.word_freq.get("dog"), Some(&1));
//! ```

pub mod analyzer;
pub mod config;
pub mod error;
pub mod feeder;
pub mod pipeline;
pub mod queue;
pub mod source;
pub mod stats;
pub mod tally;

pub use analyzer::FrequencyAnalyzer;
pub use config::{PipelineConfig, PipelineConfigBuilder};
pub use error::{Error, Result};
pub use feeder::StreamFeeder;
pub use pipeline::{Pipeline, PipelineHandle, PipelineOutcome};
pub use queue::{char_queue, CharReceiver, CharSender, Popped};
pub use source::{LoremIpsumSource, StrSource, TextSource};
pub use stats::{PipelineStats, StatsSnapshot};
pub use tally::{cleanup, is_delimiter, FrequencyTally};
