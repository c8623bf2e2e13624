use super::ErrorKind;

pub use self::indexing::index_labels;

/// Find all labels in the source and record their addresses (pass 1).
mod indexing;

/// Resolving of labels to addresses and branch offsets.
pub mod resolve;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    /// Name of the label, case-sensitive
    pub name: String,
    /// Absolute address the label points to
    pub address: u16,
    /// Line where the label is defined
    pub line: usize,
}

/// The label table maps label names to addresses.
///
/// Labels are kept in the order they were defined. The table is filled during pass 1 and only
/// read during pass 2.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTable {
    labels: Vec<Label>,
}

impl LabelTable {
    pub fn new() -> LabelTable {
        LabelTable { labels: Vec::new() }
    }

    pub fn find_label(&self, name: &str) -> Option<&Label> {
        self.labels.iter().find(|label| label.name == name)
    }

    /// Address of a label, if defined.
    pub fn address(&self, name: &str) -> Option<u16> {
        self.find_label(name).map(|label| label.address)
    }

    /// Define a new label. A label can only be defined once.
    pub fn define(&mut self, name: &str, address: u16, line: usize) -> Result<(), ErrorKind> {
        if let Some(existing) = self.find_label(name) {
            return Err(ErrorKind::DuplicateLabel {
                label: name.to_string(),
                first_line: existing.line,
            });
        }

        tracing::debug!("Label {} = ${:04X}", name, address);
        self.labels.push(Label {
            name: name.to_string(),
            address,
            line,
        });
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Label> {
        self.labels.iter()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_define_and_find() -> Result<(), ErrorKind> {
        let mut labels = LabelTable::new();
        labels.define("zeta", 0x1010, 3)?;
        labels.define("alpha", 0x1000, 1)?;
        labels.define("Alpha", 0x1004, 2)?;

        assert_eq!(labels.address("alpha"), Some(0x1000));
        assert_eq!(labels.address("Alpha"), Some(0x1004));
        assert_eq!(labels.address("beta"), None);

        let names: Vec<&str> = labels.iter().map(|label| label.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "Alpha"]);

        Ok(())
    }

    #[test]
    fn test_duplicate_label() {
        let mut labels = LabelTable::new();
        labels.define("loop", 0x1000, 4).unwrap();

        assert_eq!(
            labels.define("loop", 0x1008, 9),
            Err(ErrorKind::DuplicateLabel {
                label: "loop".to_string(),
                first_line: 4,
            })
        );
        assert_eq!(labels.address("loop"), Some(0x1000));
        assert_eq!(labels.len(), 1);
    }
}
