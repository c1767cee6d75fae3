use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Plot, PlotPoints, Points};

use sample_lens::color::parse_hex_color;
use sample_lens::{Samples, ScatterRenderer};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// ScatterSeries – renderer that buckets points by colour
// ---------------------------------------------------------------------------

/// Points of one colour, i.e. one class.
#[derive(Debug, Clone)]
pub struct ClassSeries {
    pub name: String,
    pub hex: String,
    pub color: Color32,
    pub points: Vec<[f64; 2]>,
}

/// Collects a scatter call into per-colour series that egui_plot can draw
/// with a legend.
#[derive(Debug, Clone, Default)]
pub struct ScatterSeries {
    pub classes: Vec<ClassSeries>,
}

impl ScatterSeries {
    /// Replace colour labels with the class names that own those colours.
    pub fn name_by_class(&mut self, samples: &Samples) {
        for class in samples.get_classes() {
            let hex = samples.get_color_for_class(class);
            if let Some(series) = self.classes.iter_mut().find(|s| s.hex == hex) {
                series.name = class.to_string();
            }
        }
    }
}

impl ScatterRenderer for ScatterSeries {
    fn scatter(&mut self, xs: &[f64], ys: &[f64], colors: &[String]) -> anyhow::Result<()> {
        self.classes.clear();
        for ((&x, &y), hex) in xs.iter().zip(ys).zip(colors) {
            let slot = match self.classes.iter().position(|s| &s.hex == hex) {
                Some(slot) => slot,
                None => {
                    let color = parse_hex_color(hex)
                        .map(|c| Color32::from_rgb(c.red, c.green, c.blue))
                        .ok_or_else(|| anyhow::anyhow!("invalid colour '{hex}'"))?;
                    self.classes.push(ClassSeries {
                        name: hex.clone(),
                        hex: hex.clone(),
                        color,
                        points: Vec::new(),
                    });
                    self.classes.len() - 1
                }
            };
            self.classes[slot].points.push([x, y]);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Projection plot (central panel)
// ---------------------------------------------------------------------------

/// Render the magnitude / angle scatter in the central panel.
pub fn scatter_plot(ui: &mut Ui, state: &AppState) {
    if state.samples.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a bunch to view samples  (File → Open…)");
        });
        return;
    }

    Plot::new("projection_plot")
        .legend(Legend::default())
        .x_axis_label("Magnitude")
        .y_axis_label("Angle to (1, …, 1) [rad]")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &state.series.classes {
                let points: PlotPoints = series.points.iter().copied().collect();
                plot_ui.points(
                    Points::new(points)
                        .name(&series.name)
                        .color(series.color)
                        .radius(3.0),
                );
            }
        });
}
