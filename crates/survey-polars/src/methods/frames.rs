//! DataFrame renderings of computed survey tables

use crate::traits::{ANSWER_TEXT, SURVEY_ID};
use crate::{IntoFrame, Result};
use polars::prelude::*;
use survey_confidence::PrevalenceEstimate;
use survey_effect::CorrelationMatrix;
use survey_histogram::{DistributionTable, PivotedTrendTable};

impl IntoFrame for &DistributionTable {
    fn into_frame(self) -> Result<DataFrame> {
        let rows = self.rows();
        let columns = vec![
            Column::new(SURVEY_ID.into(), rows.iter().map(|r| r.partition).collect::<Vec<i64>>()),
            Column::new(
                ANSWER_TEXT.into(),
                rows.iter().map(|r| r.category.as_str()).collect::<Vec<&str>>(),
            ),
            Column::new("Count".into(), rows.iter().map(|r| r.count as u64).collect::<Vec<u64>>()),
            Column::new("Percentage".into(), rows.iter().map(|r| r.percentage).collect::<Vec<f64>>()),
        ];
        Ok(DataFrame::new(columns)?)
    }
}

impl IntoFrame for &PivotedTrendTable {
    fn into_frame(self) -> Result<DataFrame> {
        let mut columns = Vec::with_capacity(self.categories().len() + 1);
        columns.push(Column::new(SURVEY_ID.into(), self.partitions().to_vec()));
        for (j, category) in self.categories().iter().enumerate() {
            let values: Vec<f64> = self.cells().iter().map(|row| row[j]).collect();
            columns.push(Column::new(category.as_str().into(), values));
        }
        Ok(DataFrame::new(columns)?)
    }
}

impl IntoFrame for &[PrevalenceEstimate] {
    fn into_frame(self) -> Result<DataFrame> {
        let columns = vec![
            Column::new(
                ANSWER_TEXT.into(),
                self.iter().map(|e| e.category.as_str()).collect::<Vec<&str>>(),
            ),
            Column::new("Count".into(), self.iter().map(|e| e.count as u64).collect::<Vec<u64>>()),
            Column::new("PrevalenceRate".into(), self.iter().map(|e| e.rate).collect::<Vec<f64>>()),
            Column::new("Percentage".into(), self.iter().map(|e| e.percentage).collect::<Vec<f64>>()),
            Column::new("CI%".into(), self.iter().map(|e| e.half_width).collect::<Vec<f64>>()),
        ];
        Ok(DataFrame::new(columns)?)
    }
}

impl IntoFrame for &CorrelationMatrix {
    fn into_frame(self) -> Result<DataFrame> {
        let mut columns = Vec::with_capacity(self.dim() + 1);
        columns.push(Column::new(
            "Feature".into(),
            self.names().iter().map(String::as_str).collect::<Vec<&str>>(),
        ));
        for (j, name) in self.names().iter().enumerate() {
            let values: Vec<Option<f64>> = (0..self.dim()).map(|i| self.get(i, j)).collect();
            columns.push(Column::new(name.as_str().into(), values));
        }
        Ok(DataFrame::new(columns)?)
    }
}
