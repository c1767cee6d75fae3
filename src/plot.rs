use anyhow::{Result, bail};

// ---------------------------------------------------------------------------
// ScatterPoints – parallel x / y / colour sequences
// ---------------------------------------------------------------------------

/// Points of a coloured scatter plot, stored as parallel sequences.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScatterPoints {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    /// `#rrggbb` colour of each point.
    pub colors: Vec<String>,
}

impl ScatterPoints {
    pub fn with_capacity(n: usize) -> Self {
        ScatterPoints {
            xs: Vec::with_capacity(n),
            ys: Vec::with_capacity(n),
            colors: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, x: f64, y: f64, color: String) {
        self.xs.push(x);
        self.ys.push(y);
        self.colors.push(color);
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Iterate over `(x, y, colour)` triples.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64, &str)> + '_ {
        self.xs
            .iter()
            .zip(&self.ys)
            .zip(&self.colors)
            .map(|((&x, &y), c)| (x, y, c.as_str()))
    }
}

// ---------------------------------------------------------------------------
// Renderer seam
// ---------------------------------------------------------------------------

/// Anything that can display a coloured scatter plot.
pub trait ScatterRenderer {
    /// Render one point per index of the three parallel slices.
    fn scatter(&mut self, xs: &[f64], ys: &[f64], colors: &[String]) -> Result<()>;
}

/// Keeps the last scatter call in memory instead of drawing it.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub points: ScatterPoints,
    pub calls: usize,
}

impl ScatterRenderer for RecordingRenderer {
    fn scatter(&mut self, xs: &[f64], ys: &[f64], colors: &[String]) -> Result<()> {
        if xs.len() != ys.len() || xs.len() != colors.len() {
            bail!(
                "scatter sequences differ in length: {} x, {} y, {} colours",
                xs.len(),
                ys.len(),
                colors.len()
            );
        }
        self.points = ScatterPoints {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            colors: colors.to_vec(),
        };
        self.calls += 1;
        Ok(())
    }
}
