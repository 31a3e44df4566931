//! Shared fixtures for survey-histogram integration tests

use survey_core::{SurveyRecord, SurveyTable};

/// Employer-support questions (current 10, previous 11) and ages (1)
/// across the 2016 and 2017 waves
pub fn employer_survey() -> SurveyTable {
    let answers = [
        ("a", 2016, "Yes", "No", "34"),
        ("b", 2016, "No", "No", "27"),
        ("c", 2016, "I don't know", "Some did", "45"),
        ("d", 2016, "Yes", "None did", "17"),
        ("e", 2017, "Yes", "Yes, they all did", "52"),
        ("f", 2017, "No", "Some did", "64"),
        ("g", 2017, "Yes", "No", "65"),
    ];
    let mut records = Vec::new();
    for (user, wave, current, previous, age) in answers {
        records.push(SurveyRecord::new(user, 10, current, wave));
        records.push(SurveyRecord::new(user, 11, previous, wave));
        records.push(SurveyRecord::new(user, 1, age, wave));
    }
    records.push(SurveyRecord::unanswered("h", 10, 2018));
    SurveyTable::new(records)
}
