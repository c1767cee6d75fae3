//! Group, split and inspect labeled classification samples.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use sample_lens::{Bunch, RecordingRenderer, Samples};
//!
//! let bunch = Bunch::from_file(Path::new("iris.json"))?;
//! let samples = Samples::load_from_bunch(&bunch)?;
//! samples.print_details();
//!
//! let (test, validation) = samples.get_default_test_data();
//! println!("{} test / {} validation", test.len(), validation.len());
//!
//! let mut renderer = RecordingRenderer::default();
//! samples.visualize(&mut renderer)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod color;
pub mod data;
pub mod error;
pub mod geometry;
pub mod plot;

pub use color::{ClassColors, generate_spaced_colors};
pub use data::bunch::Bunch;
pub use data::sample::Sample;
pub use data::samples::{DEFAULT_TEST_RATIO, Samples};
pub use error::SamplesError;
pub use geometry::{angle_between_vectors, normalize_vector};
pub use plot::{RecordingRenderer, ScatterPoints, ScatterRenderer};
