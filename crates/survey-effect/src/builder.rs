//! Correlation matrix over a wide respondent × feature table

use crate::correlation::{has_variance, pairwise_complete};
use crate::{CorrelationMatrix, TriangleMask};
use survey_core::{AnswerCoercer, Result, WideTable};
use tracing::{debug, instrument};

/// A correlation matrix and the mask a heatmap renderer should apply
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationResult {
    pub matrix: CorrelationMatrix,
    pub mask: TriangleMask,
}

/// Coerces each column to numbers and correlates every pair
#[derive(Debug, Clone, Default)]
pub struct CorrelationBuilder {
    coercer: AnswerCoercer,
}

impl CorrelationBuilder {
    pub fn new(coercer: AnswerCoercer) -> Self {
        Self { coercer }
    }

    pub fn coercer(&self) -> &AnswerCoercer {
        &self.coercer
    }

    /// Each column of `table` passed through the coercion strategy
    pub fn coerce_columns(&self, table: &WideTable) -> Vec<(String, Vec<Option<f64>>)> {
        table
            .columns()
            .iter()
            .map(|column| (column.name.clone(), self.coercer.coerce_all(column.iter())))
            .collect()
    }

    /// Pairwise-complete Pearson matrix with an upper-triangle mask
    ///
    /// Columns with no numeric content produce `None` for every pair they
    /// take part in.
    #[instrument(skip_all, fields(features = table.width(), respondents = table.height()))]
    pub fn build(&self, table: &WideTable) -> Result<CorrelationResult> {
        let columns = self.coerce_columns(table);
        let n = columns.len();

        let mut cells = vec![vec![None; n]; n];
        for i in 0..n {
            if has_variance(&columns[i].1) {
                cells[i][i] = Some(1.0);
            }
            for j in 0..i {
                let r = pairwise_complete(&columns[i].1, &columns[j].1);
                cells[i][j] = r;
                cells[j][i] = r;
            }
        }

        let undefined = cells.iter().flatten().filter(|c| c.is_none()).count();
        debug!(undefined, "correlation matrix built");

        let names = columns.into_iter().map(|(name, _)| name).collect();
        Ok(CorrelationResult {
            matrix: CorrelationMatrix::new(names, cells)?,
            mask: TriangleMask::upper(n),
        })
    }
}
