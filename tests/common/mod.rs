//! Synthetic survey data shared by the integration tests

#![allow(dead_code)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use survey_stats::prelude::*;

pub const AGE: QuestionId = 1;
pub const GENDER: QuestionId = 2;
pub const FAMILY_HISTORY: QuestionId = 6;
pub const TREATMENT: QuestionId = 7;
pub const DIAGNOSIS: QuestionId = 115;

pub const WAVES: [SurveyId; 3] = [2016, 2017, 2018];

const GENDERS: [&str; 3] = ["Male", "Female", "Non-binary"];
const YES_NO: [&str; 3] = ["Yes", "No", "Maybe"];
const DIAGNOSES: [&str; 4] = ["Mood Disorder", "Anxiety Disorder", "ADHD", "PTSD"];

/// A seeded survey with `respondents_per_wave` respondents in every wave
///
/// Every respondent answers age, gender, family history and treatment.
/// Roughly half report a diagnosis. One respondent per wave gives an
/// implausible age of 329.
pub fn synthetic_survey(respondents_per_wave: usize, seed: u64) -> SurveyTable {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut records = Vec::with_capacity(respondents_per_wave * WAVES.len() * 5);

    for wave in WAVES {
        for i in 0..respondents_per_wave {
            let user = format!("{wave}-{i}");
            let age = if i == 0 { 329 } else { rng.gen_range(18..65) };
            records.push(SurveyRecord::new(user.clone(), AGE, age.to_string(), wave));
            records.push(SurveyRecord::new(
                user.clone(),
                GENDER,
                *GENDERS.choose(&mut rng).unwrap(),
                wave,
            ));

            let history = *YES_NO.choose(&mut rng).unwrap();
            records.push(SurveyRecord::new(user.clone(), FAMILY_HISTORY, history, wave));
            // Treatment follows family history most of the time
            let treatment = if rng.gen_bool(0.8) {
                history
            } else {
                *YES_NO.choose(&mut rng).unwrap()
            };
            records.push(SurveyRecord::new(user.clone(), TREATMENT, treatment, wave));

            if rng.gen_bool(0.5) {
                let diagnosis = *DIAGNOSES.choose(&mut rng).unwrap();
                records.push(SurveyRecord::new(user, DIAGNOSIS, diagnosis, wave));
            } else {
                records.push(SurveyRecord::unanswered(user, DIAGNOSIS, wave));
            }
        }
    }

    SurveyTable::new(records)
}
