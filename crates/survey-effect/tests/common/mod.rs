//! Shared fixtures for survey-effect integration tests

use survey_core::{SurveyRecord, SurveyTable};

/// Three waves of a yes/no question, an ordinal question and an age question
pub fn mental_health_survey() -> SurveyTable {
    let rows = [
        ("u1", "Yes", "Yes, all of them", "34"),
        ("u2", "No", "None of them", "25"),
        ("u3", "Yes", "Some did", "41"),
        ("u4", "Maybe", "Some of them", "38"),
        ("u5", "No", "None of them", "22"),
        ("u6", "Yes", "I don't know", "30"),
    ];
    let mut records = Vec::new();
    for (user, treatment, coworkers, age) in rows {
        records.push(SurveyRecord::new(user, 7, treatment, 2016));
        records.push(SurveyRecord::new(user, 18, coworkers, 2016));
        records.push(SurveyRecord::new(user, 1, age, 2016));
    }
    records.push(SurveyRecord::unanswered("u7", 7, 2016));
    records.push(SurveyRecord::new("u7", 1, "29", 2016));
    SurveyTable::new(records)
}
