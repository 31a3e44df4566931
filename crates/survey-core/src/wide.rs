//! Wide-format tables: one row per respondent, one column per question

use crate::{Error, Result, RespondentId};

/// A named column of raw answers
#[derive(Debug, Clone, PartialEq)]
pub struct WideColumn {
    pub name: String,
    pub values: Vec<Option<String>>,
}

impl WideColumn {
    /// Create a column from optional answer cells
    pub fn new(name: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Create a fully populated column from text cells
    pub fn from_strs<S: AsRef<str>>(name: impl Into<String>, values: &[S]) -> Self {
        Self::new(
            name,
            values.iter().map(|v| Some(v.as_ref().to_string())).collect(),
        )
    }

    /// Create a fully populated column from numbers, stored as their text
    pub fn from_numbers(name: impl Into<String>, values: &[f64]) -> Self {
        Self::new(name, values.iter().map(|v| Some(v.to_string())).collect())
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the column has no cells
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over cells as `Option<&str>`
    pub fn iter(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.values.iter().map(|v| v.as_deref())
    }
}

/// One row per respondent, one column per question/feature
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WideTable {
    index: Vec<RespondentId>,
    columns: Vec<WideColumn>,
}

impl WideTable {
    /// Build a wide table, checking every column matches the index length
    /// and that column names are unique
    pub fn new(index: Vec<RespondentId>, columns: Vec<WideColumn>) -> Result<Self> {
        for (i, column) in columns.iter().enumerate() {
            if column.len() != index.len() {
                return Err(Error::size_mismatch(
                    index.len(),
                    column.len(),
                    &format!("wide column '{}'", column.name),
                ));
            }
            if columns[..i].iter().any(|c| c.name == column.name) {
                return Err(Error::InvalidInput(format!(
                    "Duplicate column name '{}'",
                    column.name
                )));
            }
        }
        Ok(Self { index, columns })
    }

    /// Build a wide table with a positional index ("0", "1", ...)
    pub fn from_columns(columns: Vec<WideColumn>) -> Result<Self> {
        let rows = columns.first().map_or(0, WideColumn::len);
        let index = (0..rows).map(|i| i.to_string()).collect();
        Self::new(index, columns)
    }

    /// Respondent identifiers, one per row
    pub fn index(&self) -> &[RespondentId] {
        &self.index
    }

    /// All columns in insertion order
    pub fn columns(&self) -> &[WideColumn] {
        &self.columns
    }

    /// Column names in insertion order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&WideColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.index.len()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.columns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_rejected() {
        let result = WideTable::new(
            vec!["a".into(), "b".into()],
            vec![WideColumn::from_strs("q1", &["Yes"])],
        );
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = WideTable::from_columns(vec![
            WideColumn::from_strs("q1", &["Yes"]),
            WideColumn::from_strs("q1", &["No"]),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_positional_index_and_lookup() {
        let table = WideTable::from_columns(vec![
            WideColumn::from_numbers("age", &[30.0, 41.0, 25.0]),
            WideColumn::from_strs("q2", &["Yes", "No", "Maybe"]),
        ])
        .unwrap();

        assert_eq!(table.index(), &["0", "1", "2"]);
        assert_eq!(table.height(), 3);
        assert_eq!(table.width(), 2);
        assert_eq!(table.column_names(), vec!["age", "q2"]);
        assert!(table.column("missing").is_none());
        let q2: Vec<_> = table.column("q2").unwrap().iter().collect();
        assert_eq!(q2, vec![Some("Yes"), Some("No"), Some("Maybe")]);
    }
}
