//! Long-format survey tables

use crate::{QuestionId, Result, SurveyId, SurveyRecord, WideColumn, WideTable};
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// An ordered collection of survey records
///
/// Row order only matters where first-seen order is used to break ties.
/// Analyses borrow the table and never mutate it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SurveyTable {
    records: Vec<SurveyRecord>,
}

impl SurveyTable {
    /// Wrap a list of records
    pub fn new(records: Vec<SurveyRecord>) -> Self {
        Self { records }
    }

    /// All records in input order
    pub fn records(&self) -> &[SurveyRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the table holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records answering `question`, in input order
    pub fn question(&self, question: QuestionId) -> impl Iterator<Item = &SurveyRecord> + '_ {
        self.records.iter().filter(move |r| r.question_id == question)
    }

    /// Records answering `question` in survey wave `wave`
    pub fn question_in_wave(
        &self,
        question: QuestionId,
        wave: SurveyId,
    ) -> impl Iterator<Item = &SurveyRecord> + '_ {
        self.question(question).filter(move |r| r.survey_id == wave)
    }

    /// True when at least one record answers `question`
    pub fn contains_question(&self, question: QuestionId) -> bool {
        self.question(question).next().is_some()
    }

    /// Distinct survey waves, ascending
    pub fn waves(&self) -> Vec<SurveyId> {
        self.records
            .iter()
            .map(|r| r.survey_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct question ids, ascending
    pub fn questions(&self) -> Vec<QuestionId> {
        self.records
            .iter()
            .map(|r| r.question_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Reshape to one row per respondent and one column per question
    ///
    /// Respondents appear in first-seen order among the selected records.
    /// Columns are named by question id. When a respondent answered a
    /// question more than once the last answer wins. `wave` restricts the
    /// reshape to a single survey. Repeating a question id in `questions`
    /// is an [`Error::InvalidInput`](crate::Error::InvalidInput).
    pub fn to_wide(&self, questions: &[QuestionId], wave: Option<SurveyId>) -> Result<WideTable> {
        let mut row_of: HashMap<&str, usize> = HashMap::new();
        let mut index = Vec::new();
        let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); questions.len()];

        let selected = self.records.iter().filter(|r| {
            questions.contains(&r.question_id) && wave.map_or(true, |w| r.survey_id == w)
        });

        for record in selected {
            let row = *row_of.entry(record.user_id.as_str()).or_insert_with(|| {
                index.push(record.user_id.clone());
                for column in cells.iter_mut() {
                    column.push(None);
                }
                index.len() - 1
            });
            if let Some(col) = questions.iter().position(|q| *q == record.question_id) {
                cells[col][row] = record.answer.clone();
            }
        }

        debug!(
            respondents = index.len(),
            questions = questions.len(),
            "reshaped survey table to wide format"
        );

        let columns = questions
            .iter()
            .zip(cells)
            .map(|(q, values)| WideColumn::new(q.to_string(), values))
            .collect();
        WideTable::new(index, columns)
    }
}

impl From<Vec<SurveyRecord>> for SurveyTable {
    fn from(records: Vec<SurveyRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<SurveyRecord> for SurveyTable {
    fn from_iter<I: IntoIterator<Item = SurveyRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SurveyTable {
        SurveyTable::new(vec![
            SurveyRecord::new("u1", 1, "34", 2016),
            SurveyRecord::new("u1", 2, "Male", 2016),
            SurveyRecord::new("u2", 1, "29", 2016),
            SurveyRecord::unanswered("u2", 2, 2016),
            SurveyRecord::new("u3", 1, "51", 2017),
            SurveyRecord::new("u3", 2, "Female", 2017),
        ])
    }

    #[test]
    fn test_filters() {
        let table = sample();
        assert_eq!(table.question(1).count(), 3);
        assert_eq!(table.question_in_wave(2, 2016).count(), 2);
        assert!(table.contains_question(2));
        assert!(!table.contains_question(99));
        assert_eq!(table.waves(), vec![2016, 2017]);
        assert_eq!(table.questions(), vec![1, 2]);
    }

    #[test]
    fn test_to_wide_keeps_respondent_order() {
        let wide = sample().to_wide(&[1, 2], None).unwrap();
        assert_eq!(wide.index(), &["u1", "u2", "u3"]);
        assert_eq!(wide.column_names(), vec!["1", "2"]);
        let genders: Vec<_> = wide.column("2").unwrap().iter().collect();
        assert_eq!(genders, vec![Some("Male"), None, Some("Female")]);
    }

    #[test]
    fn test_to_wide_single_wave() {
        let wide = sample().to_wide(&[1], Some(2017)).unwrap();
        assert_eq!(wide.index(), &["u3"]);
        assert_eq!(wide.column("1").unwrap().values, vec![Some("51".to_string())]);
    }

    #[test]
    fn test_to_wide_last_answer_wins() {
        let table = SurveyTable::new(vec![
            SurveyRecord::new("u1", 5, "No", 2016),
            SurveyRecord::new("u1", 5, "Yes", 2017),
        ]);
        let wide = table.to_wide(&[5], None).unwrap();
        assert_eq!(wide.height(), 1);
        assert_eq!(wide.column("5").unwrap().values, vec![Some("Yes".to_string())]);
    }
}
