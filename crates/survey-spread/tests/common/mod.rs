//! Shared fixtures for survey-spread integration tests

use survey_core::{SurveyRecord, SurveyTable};

/// Ages and company sizes with a few implausible entries
pub fn demographics() -> SurveyTable {
    let ages = ["34", "29", "41", "38", "25", "31", "-29", "329", "35", "33", "329"];
    let employees = ["26-100", "6-25", "100-500", "6-25", "1-5", "26-100", "6-25", "More than 1000", "1-5", "6-25", "26-100"];
    let mut records = Vec::new();
    for (i, (age, size)) in ages.iter().zip(employees).enumerate() {
        let user = format!("u{i}");
        records.push(SurveyRecord::new(user.clone(), 1, *age, 2016));
        records.push(SurveyRecord::new(user, 8, size, 2016));
    }
    SurveyTable::new(records)
}
