use serde::Serialize;

use crate::UselessnessLevel;

const OVERALL_RATING: &str = "Another successful session of achieving nothing";
const RECOMMENDATION: &str =
    "Try talking to an actual therapist... or a houseplant. Both might be more helpful.";
const BILL: &str = "$0.00 (you get what you pay for)";

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub session_length: usize,
    pub average_uselessness: f64,
    pub overall_rating: &'static str,
    pub recommendation: &'static str,
    pub bill: &'static str,
}

impl SessionSummary {
    pub fn from_levels(levels: &[UselessnessLevel]) -> Self {
        let session_length = levels.len();
        let average_uselessness = if session_length == 0 {
            0.0
        } else {
            let total: u32 = levels.iter().map(|l| u32::from(l.value())).sum();
            f64::from(total) / session_length as f64
        };
        SessionSummary {
            session_length,
            average_uselessness,
            overall_rating: OVERALL_RATING,
            recommendation: RECOMMENDATION,
            bill: BILL,
        }
    }
}
