//! Common test utilities for survey-polars tests

use polars::prelude::*;

/// Long survey frame: age (Q1), gender (Q2) and diagnosis (Q115) over two waves
pub fn create_survey_df() -> DataFrame {
    let mut users = Vec::new();
    let mut questions = Vec::new();
    let mut answers: Vec<Option<&str>> = Vec::new();
    let mut surveys = Vec::new();

    let respondents = [
        ("u1", "34", "Male", Some("Mood Disorder"), 2016),
        ("u2", "29", "Female", Some("Anxiety Disorder"), 2016),
        ("u3", "41", "Male", Some("Mood Disorder"), 2016),
        ("u4", "38", "Male", None, 2016),
        ("u5", "25", "Female", Some("ADHD"), 2017),
        ("u6", "31", "Male", Some("Mood Disorder"), 2017),
    ];
    for (user, age, gender, diagnosis, wave) in respondents {
        for (question, answer) in [(1i64, Some(age)), (2, Some(gender)), (115, diagnosis)] {
            users.push(user);
            questions.push(question);
            answers.push(answer);
            surveys.push(wave as i64);
        }
    }

    df![
        "UserID" => users,
        "QuestionID" => questions,
        "AnswerText" => answers,
        "SurveyID" => surveys,
    ]
    .unwrap()
}

/// Extract one Float64 cell
pub fn extract_f64(df: &DataFrame, col_name: &str, row: usize) -> Option<f64> {
    df.column(col_name).unwrap().f64().unwrap().get(row)
}
