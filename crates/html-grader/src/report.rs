//! The selector → presence mapping and its rendering.

use std::io::Write;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::checks::selector_order;
use crate::evaluator::CheckResult;

/// Indentation used when rendering a report.
const INDENT: &[u8] = b"    ";

/// Presence of each checked selector, keyed in selector order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    entries: Vec<(String, bool)>,
}

impl Report {
    /// Assemble a report from evaluator output. A repeated selector keeps
    /// the last value recorded for it.
    pub fn from_results(results: impl IntoIterator<Item = CheckResult>) -> Self {
        let mut entries: Vec<(String, bool)> = results
            .into_iter()
            .map(|r| (r.selector, r.present))
            .collect();
        entries.sort_by(|a, b| selector_order(&a.0, &b.0));
        entries.dedup_by(|later, kept| {
            if later.0 == kept.0 {
                kept.1 = later.1;
                true
            } else {
                false
            }
        });
        Self { entries }
    }

    pub fn get(&self, selector: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|(k, _)| k == selector)
            .map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of selectors found in the document.
    pub fn passed(&self) -> usize {
        self.entries.iter().filter(|(_, v)| *v).count()
    }

    /// Render as JSON with four-space indentation, no trailing newline.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Write the rendered report followed by a newline.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let json = self.to_pretty_json()?;
        writeln!(writer, "{json}")
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (selector, present) in &self.entries {
            map.serialize_entry(selector, present)?;
        }
        map.end()
    }
}
