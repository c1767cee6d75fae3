use std::path::Path;

use anyhow::Context;
use log::{info, warn};

use sample_lens::{Bunch, DEFAULT_TEST_RATIO, Samples};

use crate::ui::plot::ScatterSeries;

// ---------------------------------------------------------------------------
// Per-class split summary
// ---------------------------------------------------------------------------

/// One row of the split table in the side panel.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitRow {
    pub class_name: String,
    pub color: String,
    pub total: usize,
    pub test: usize,
    pub validation: usize,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded collection (None until user loads a file).
    pub samples: Option<Samples>,

    /// Projected points, one series per class.
    pub series: ScatterSeries,

    /// Share of every class that goes to the test split.
    pub test_ratio: f64,

    /// Cached split summary for `test_ratio`.
    pub split_rows: Vec<SplitRow>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            samples: None,
            series: ScatterSeries::default(),
            test_ratio: DEFAULT_TEST_RATIO,
            split_rows: Vec::new(),
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Load a bunch file and replace the current collection.
    pub fn load_path(&mut self, path: &Path) {
        self.loading = true;
        let result = Bunch::from_file(path).and_then(|bunch| {
            Samples::load_from_bunch(&bunch)
                .with_context(|| format!("building samples from {}", path.display()))
        });
        match result {
            Ok(samples) => {
                info!("Loaded {}", path.display());
                self.set_samples(samples);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
                self.loading = false;
            }
        }
    }

    /// Ingest a newly loaded collection, project it and split it.
    pub fn set_samples(&mut self, samples: Samples) {
        samples.print_details();

        let mut series = ScatterSeries::default();
        self.status_message = match samples.visualize(&mut series) {
            Ok(()) => None,
            Err(e) => {
                warn!("Cannot project samples: {e:#}");
                Some(format!("Cannot plot: {e:#}"))
            }
        };
        series.name_by_class(&samples);
        self.series = series;

        self.samples = Some(samples);
        self.resplit();
        self.loading = false;
    }

    /// Recompute `split_rows` after a ratio change.
    pub fn resplit(&mut self) {
        self.split_rows = match &self.samples {
            Some(samples) => split_rows(samples, self.test_ratio),
            None => Vec::new(),
        };
    }

    /// Set the test ratio and recompute the split.
    pub fn set_test_ratio(&mut self, ratio: f64) {
        self.test_ratio = ratio.clamp(0.0, 1.0);
        self.resplit();
    }
}

/// Count test / validation samples of every class for `ratio`.
pub fn split_rows(samples: &Samples, ratio: f64) -> Vec<SplitRow> {
    let (test, _) = samples.get_test_data(ratio);
    samples
        .get_classes()
        .into_iter()
        .map(|class| {
            let total = samples
                .get_samples_for_class(class)
                .map(<[_]>::len)
                .unwrap_or(0);
            let test = test.iter().filter(|s| s.class_name() == class).count();
            SplitRow {
                class_name: class.to_string(),
                color: samples.get_color_for_class(class),
                total,
                test,
                validation: total - test,
            }
        })
        .collect()
}
