//! Reading Polars frames into survey tables

use crate::traits::{ANSWER_TEXT, QUESTION_ID, SURVEY_ID, USER_ID};
use crate::{Error, Result};
use polars::prelude::*;
use survey_core::{SurveyRecord, SurveyTable, WideColumn, WideTable};
use tracing::debug;

pub(super) fn survey_table(df: &DataFrame) -> Result<SurveyTable> {
    let user_ids = text_column(df, USER_ID)?;
    let questions = id_column(df, QUESTION_ID)?;
    let answers = text_column(df, ANSWER_TEXT)?;
    let surveys = id_column(df, SURVEY_ID)?;

    let records = user_ids
        .into_iter()
        .zip(questions)
        .zip(answers)
        .zip(surveys)
        .enumerate()
        .map(|(row, (((user_id, question_id), answer), survey_id))| {
            let user_id = user_id
                .ok_or_else(|| Error::InvalidInput(format!("Row {row}: null {USER_ID}")))?;
            Ok(SurveyRecord {
                user_id,
                question_id,
                answer,
                survey_id,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(records = records.len(), "read long survey frame");
    Ok(SurveyTable::new(records))
}

pub(super) fn wide_table(df: &DataFrame, index_column: Option<&str>) -> Result<WideTable> {
    let index = match index_column {
        Some(name) => text_column(df, name)?
            .into_iter()
            .enumerate()
            .map(|(row, id)| id.unwrap_or_else(|| row.to_string()))
            .collect(),
        None => (0..df.height()).map(|row| row.to_string()).collect(),
    };

    let columns = df
        .get_columns()
        .iter()
        .filter(|column| Some(column.name().as_str()) != index_column)
        .map(|column| {
            let name = column.name().to_string();
            Ok(WideColumn::new(name.clone(), text_column(df, &name)?))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(WideTable::new(index, columns)?)
}

/// A column as optional text, casting non-string dtypes
fn text_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df
        .column(name)
        .map_err(|_| Error::InvalidColumn(name.to_string()))?;
    let column = column.cast(&DataType::String)?;
    Ok(column
        .str()?
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect())
}

/// A column of integer ids; nulls and values that do not cast are rejected
fn id_column(df: &DataFrame, name: &str) -> Result<Vec<i64>> {
    let column = df
        .column(name)
        .map_err(|_| Error::InvalidColumn(name.to_string()))?;
    let got = column.dtype().to_string();
    let cast = column.cast(&DataType::Int64)?;
    cast.i64()?
        .into_iter()
        .map(|v| {
            v.ok_or_else(|| Error::TypeMismatch {
                column: name.to_string(),
                expected: "integer ids".to_string(),
                got: got.clone(),
            })
        })
        .collect()
}
