use std::collections::HashMap;

use log::{debug, info};

use super::bunch::Bunch;
use super::sample::Sample;
use crate::color::ClassColors;
use crate::error::SamplesError;
use crate::geometry;
use crate::plot::{ScatterPoints, ScatterRenderer};

/// Share of each class that [`Samples::get_default_test_data`] puts in the
/// test split.
pub const DEFAULT_TEST_RATIO: f64 = 0.2;

// ---------------------------------------------------------------------------
// Samples – samples grouped by class
// ---------------------------------------------------------------------------

/// A read-only collection of [`Sample`]s grouped by class name.
///
/// Classes keep the order in which they were first seen, samples keep their
/// insertion order within a class. Every class gets one display colour.
#[derive(Debug, Clone)]
pub struct Samples {
    /// Class names in first-seen order; index into `groups`.
    classes: Vec<String>,
    groups: Vec<Vec<Sample>>,
    index: HashMap<String, usize>,
    colors: ClassColors,
}

impl Samples {
    /// Group `samples` by class.
    ///
    /// Fails when fewer than two samples are given or when a sample's
    /// attribute count differs from the first sample's.
    pub fn new(samples: Vec<Sample>) -> Result<Self, SamplesError> {
        if samples.len() < 2 {
            return Err(SamplesError::TooFewSamples {
                count: samples.len(),
            });
        }
        let expected = samples[0].len();
        if let Some((index, sample)) = samples
            .iter()
            .enumerate()
            .find(|(_, s)| s.len() != expected)
        {
            return Err(SamplesError::AttributeCountMismatch {
                index,
                expected,
                found: sample.len(),
            });
        }

        let total = samples.len();
        let mut classes: Vec<String> = Vec::new();
        let mut groups: Vec<Vec<Sample>> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for sample in samples {
            let slot = match index.get(sample.class_name()) {
                Some(&slot) => slot,
                None => {
                    let slot = classes.len();
                    classes.push(sample.class_name().to_string());
                    index.insert(sample.class_name().to_string(), slot);
                    groups.push(Vec::new());
                    slot
                }
            };
            groups[slot].push(sample);
        }

        let colors = ClassColors::new(&classes[..])?;
        debug!(
            "Grouped {total} samples into {} classes with {expected} attributes each",
            classes.len()
        );

        Ok(Samples {
            classes,
            groups,
            index,
            colors,
        })
    }

    /// Build a collection from a [`Bunch`], one sample per target entry.
    ///
    /// Class names come from `target_names` when the class index falls inside
    /// them, otherwise the index itself is used as the name.
    pub fn load_from_bunch(bunch: &Bunch) -> Result<Self, SamplesError> {
        Samples::new(bunch.to_samples()?)
    }

    // -- queries --

    /// Samples of `class_name` in insertion order.
    pub fn get_samples_for_class(&self, class_name: &str) -> Result<&[Sample], SamplesError> {
        self.index
            .get(class_name)
            .map(|&slot| self.groups[slot].as_slice())
            .ok_or_else(|| SamplesError::ClassNotFound(class_name.to_string()))
    }

    /// Every sample, class by class.
    pub fn get_all_samples(&self) -> Vec<&Sample> {
        self.groups.iter().flatten().collect()
    }

    /// Class names in first-seen order.
    pub fn get_classes(&self) -> Vec<&str> {
        self.classes.iter().map(String::as_str).collect()
    }

    /// Split every class into a test head and a validation tail.
    ///
    /// The first `floor(count * ratio)` samples of each class go to the test
    /// list, the rest to the validation list. `ratio` is clamped to `[0, 1]`.
    pub fn get_test_data(&self, ratio: f64) -> (Vec<&Sample>, Vec<&Sample>) {
        let mut test = Vec::new();
        let mut validation = Vec::new();
        for group in &self.groups {
            let cut = split_point(group.len(), ratio);
            test.extend(&group[..cut]);
            validation.extend(&group[cut..]);
        }
        (test, validation)
    }

    /// [`get_test_data`](Self::get_test_data) with [`DEFAULT_TEST_RATIO`].
    pub fn get_default_test_data(&self) -> (Vec<&Sample>, Vec<&Sample>) {
        self.get_test_data(DEFAULT_TEST_RATIO)
    }

    /// Colour of `class_name` as `#rrggbb`, black for unknown classes.
    pub fn get_color_for_class(&self, class_name: &str) -> String {
        self.colors.hex_for(class_name)
    }

    pub fn colors(&self) -> &ClassColors {
        &self.colors
    }

    /// Total number of samples.
    pub fn len(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Always false for a constructed collection; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    // -- diagnostics --

    pub fn print_details(&self) {
        info!(
            "Has {} classes, with total of {} samples",
            self.class_count(),
            self.len()
        );
    }

    pub fn print_class_details(&self, class_name: &str) -> Result<(), SamplesError> {
        let count = self.get_samples_for_class(class_name)?.len();
        info!("Class {class_name} has {count} samples");
        Ok(())
    }

    // -- projection --

    /// Magnitude / angle-to-ones point of every sample, coloured by class.
    pub fn projection(&self) -> Result<ScatterPoints, SamplesError> {
        let mut points = ScatterPoints::with_capacity(self.len());
        for (class, group) in self.classes.iter().zip(&self.groups) {
            let color = self.colors.hex_for(class);
            for sample in group {
                let (x, y) = geometry::project(sample.attributes())?;
                points.push(x, y, color.clone());
            }
        }
        Ok(points)
    }

    /// Hand the projection of every sample to `renderer`.
    pub fn visualize<R: ScatterRenderer + ?Sized>(&self, renderer: &mut R) -> anyhow::Result<()> {
        let points = self.projection()?;
        debug!("Rendering {} projected samples", points.len());
        renderer.scatter(&points.xs, &points.ys, &points.colors)
    }
}

/// `floor(count * ratio)`, kept inside `[0, count]`.
fn split_point(count: usize, ratio: f64) -> usize {
    let cut = (count as f64 * ratio).floor();
    if cut.is_nan() || cut <= 0.0 {
        0
    } else {
        (cut as usize).min(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(class: &str, values: &[f64]) -> Sample {
        Sample::new(class, Vec::new(), values.to_vec())
    }

    fn mixed() -> Samples {
        Samples::new(vec![
            sample("b", &[1.0, 0.0]),
            sample("a", &[2.0, 0.0]),
            sample("b", &[3.0, 0.0]),
            sample("a", &[4.0, 0.0]),
            sample("c", &[5.0, 0.0]),
        ])
        .unwrap()
    }

    fn firsts(list: &[&Sample]) -> Vec<f64> {
        list.iter().map(|s| s.attributes()[0]).collect()
    }

    #[test]
    fn groups_in_first_seen_order() {
        let samples = mixed();
        assert_eq!(samples.get_classes(), vec!["b", "a", "c"]);
        assert_eq!(firsts(&samples.get_all_samples()), vec![1.0, 3.0, 2.0, 4.0, 5.0]);
        assert_eq!(samples.len(), 5);
        assert_eq!(samples.class_count(), 3);
    }

    #[test]
    fn samples_for_class() {
        let samples = mixed();
        let a = samples.get_samples_for_class("a").unwrap();
        assert_eq!(a.len(), 2);
        assert!(a.iter().all(|s| s.class_name() == "a"));
        assert_eq!(
            samples.get_samples_for_class("z"),
            Err(SamplesError::ClassNotFound("z".into()))
        );
        assert!(samples.print_class_details("z").is_err());
        assert!(samples.print_class_details("a").is_ok());
    }

    #[test]
    fn rejects_too_few_samples() {
        assert_eq!(
            Samples::new(vec![sample("a", &[1.0])]).unwrap_err(),
            SamplesError::TooFewSamples { count: 1 }
        );
        assert_eq!(
            Samples::new(Vec::new()).unwrap_err(),
            SamplesError::TooFewSamples { count: 0 }
        );
    }

    #[test]
    fn rejects_ragged_attributes() {
        let err = Samples::new(vec![
            sample("a", &[1.0, 2.0]),
            sample("a", &[1.0, 2.0]),
            sample("b", &[1.0]),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            SamplesError::AttributeCountMismatch {
                index: 2,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_split_is_per_class() {
        let mut list = Vec::new();
        for i in 0..10 {
            list.push(sample("x", &[i as f64]));
        }
        for i in 0..3 {
            list.push(sample("y", &[100.0 + i as f64]));
        }
        let samples = Samples::new(list).unwrap();

        let (test, validation) = samples.get_default_test_data();
        // x: floor(10 * 0.2) = 2, y: floor(3 * 0.2) = 0
        assert_eq!(firsts(&test), vec![0.0, 1.0]);
        assert_eq!(validation.len(), 11);
        assert_eq!(validation[0].attributes()[0], 2.0);
        assert_eq!(validation[8].attributes()[0], 100.0);

        let (test, validation) = samples.get_test_data(0.5);
        assert_eq!(firsts(&test), vec![0.0, 1.0, 2.0, 3.0, 4.0, 100.0]);
        assert_eq!(validation.len(), 7);
    }

    #[test]
    fn split_ratio_is_clamped() {
        let samples = mixed();
        let (test, validation) = samples.get_test_data(-1.0);
        assert!(test.is_empty());
        assert_eq!(validation.len(), 5);

        let (test, validation) = samples.get_test_data(3.0);
        assert_eq!(test.len(), 5);
        assert!(validation.is_empty());

        let (test, _) = samples.get_test_data(f64::NAN);
        assert!(test.is_empty());
    }

    #[test]
    fn one_color_per_class() {
        let samples = mixed();
        assert_eq!(samples.get_color_for_class("b"), "#000000");
        assert_eq!(samples.get_color_for_class("a"), "#545655");
        assert_eq!(samples.get_color_for_class("c"), "#a8acaa");
        assert_eq!(samples.get_color_for_class("nope"), "#000000");
        assert_eq!(samples.colors().len(), 3);
    }

    #[test]
    fn projection_follows_all_samples_order() {
        let samples = mixed();
        let points = samples.projection().unwrap();
        assert_eq!(points.xs, vec![1.0, 3.0, 2.0, 4.0, 5.0]);
        assert!(points
            .ys
            .iter()
            .all(|y| (y - std::f64::consts::FRAC_PI_4).abs() < 1e-12));
        assert_eq!(points.colors[2], "#545655");
    }

    #[test]
    fn projection_rejects_zero_vectors() {
        let samples = Samples::new(vec![sample("a", &[1.0]), sample("a", &[0.0])]).unwrap();
        assert_eq!(samples.projection(), Err(SamplesError::ZeroVector));
    }
}
