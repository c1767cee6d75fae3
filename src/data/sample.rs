use std::fmt;

// ---------------------------------------------------------------------------
// Sample – one labeled feature vector
// ---------------------------------------------------------------------------

/// A single labeled row of a classification dataset.
///
/// `attribute_names` may be shorter than `attributes` (or empty); unnamed
/// attributes are still part of the vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    class_name: String,
    attribute_names: Vec<String>,
    attributes: Vec<f64>,
}

impl Sample {
    pub fn new(
        class_name: impl Into<String>,
        attribute_names: Vec<String>,
        attributes: Vec<f64>,
    ) -> Self {
        Sample {
            class_name: class_name.into(),
            attribute_names,
            attributes,
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn attributes(&self) -> &[f64] {
        &self.attributes
    }

    pub fn attribute_names(&self) -> &[String] {
        &self.attribute_names
    }

    /// Number of attribute values.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// `"<class> - <name>: <value>, <name>: <value>"`, diagnostics only.
impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = format!("{} -", self.class_name);
        for (index, value) in self.attributes.iter().enumerate() {
            match self.attribute_names.get(index) {
                Some(name) => out.push_str(&format!(" {name}: {value},")),
                None => out.push_str(&format!(" {value},")),
            }
        }
        // Drop the trailing separator.
        out.pop();
        f.write_str(&out)
    }
}
