use std::fmt::Display;

use serde::Serialize;

const CLICHES: [&str; 6] = ["just", "try", "maybe", "simply", "obviously", "clearly"];

/// Text heuristic on top of the persona level: cliches, rhetorical questions and
/// sarcasm markers, normalized to `0.0..=1.0`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UselessMeter {
    pub score: f64,
    pub rating: Rating,
    pub breakdown: MeterBreakdown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterBreakdown {
    pub cliches: u32,
    pub rhetorical_questions: u32,
    pub sarcasm_level: u32,
}

impl UselessMeter {
    pub fn measure(text: &str) -> Self {
        let lower = text.to_lowercase();
        let breakdown = MeterBreakdown {
            cliches: CLICHES.iter().filter(|c| lower.contains(*c)).count() as u32,
            rhetorical_questions: text.matches('?').count() as u32,
            sarcasm_level: (text.matches("...").count() + text.matches("Really?").count()) as u32,
        };
        // Weights in tenths: cliche 0.2, question 0.3, sarcasm 0.4.
        let tenths = (breakdown.cliches * 2
            + breakdown.rhetorical_questions * 3
            + breakdown.sarcasm_level * 4)
            .min(10);
        UselessMeter {
            score: f64::from(tenths) / 10.0,
            rating: Rating::from_tenths(tenths),
            breakdown,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Rating {
    #[serde(rename = "🔥 Maximum Uselessness Achieved")]
    MaximumUselessness,
    #[serde(rename = "🍕 Pizza-tier Advice")]
    PizzaTier,
    #[serde(rename = "🤷 Mildly Unhelpful")]
    MildlyUnhelpful,
    #[serde(rename = "😴 Surprisingly Reasonable")]
    SurprisinglyReasonable,
}

impl Rating {
    pub const ALL: [Rating; 4] = [
        Rating::MaximumUselessness,
        Rating::PizzaTier,
        Rating::MildlyUnhelpful,
        Rating::SurprisinglyReasonable,
    ];

    fn from_tenths(tenths: u32) -> Self {
        match tenths {
            8.. => Rating::MaximumUselessness,
            6..=7 => Rating::PizzaTier,
            4..=5 => Rating::MildlyUnhelpful,
            _ => Rating::SurprisinglyReasonable,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Rating::MaximumUselessness => "🔥 Maximum Uselessness Achieved",
            Rating::PizzaTier => "🍕 Pizza-tier Advice",
            Rating::MildlyUnhelpful => "🤷 Mildly Unhelpful",
            Rating::SurprisinglyReasonable => "😴 Surprisingly Reasonable",
        }
    }

    pub fn score_range(&self) -> &'static str {
        match self {
            Rating::MaximumUselessness => "0.8 - 1.0",
            Rating::PizzaTier => "0.6 - 0.8",
            Rating::MildlyUnhelpful => "0.4 - 0.6",
            Rating::SurprisinglyReasonable => "0.0 - 0.4",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Rating::MaximumUselessness => "Advice so bad it's performance art",
            Rating::PizzaTier => "Barely qualifies as advice",
            Rating::MildlyUnhelpful => "Could be worse, but probably won't help",
            Rating::SurprisinglyReasonable => "Accidentally helpful (system malfunction)",
        }
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingTier {
    pub rating: Rating,
    pub score_range: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSystem {
    pub tiers: Vec<RatingTier>,
    pub factors: [&'static str; 4],
}

impl RatingSystem {
    pub fn describe() -> Self {
        RatingSystem {
            tiers: Rating::ALL
                .into_iter()
                .map(|rating| RatingTier {
                    rating,
                    score_range: rating.score_range(),
                    description: rating.description(),
                })
                .collect(),
            factors: [
                "Number of therapy clichés used",
                "Rhetorical questions asked",
                "Level of sarcasm detected",
                "Amount of circular reasoning",
            ],
        }
    }
}

/// What kind of "help" a reply offers. First matching rule wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum AdviceType {
    #[serde(rename = "Backhanded Suggestion")]
    BackhandedSuggestion,
    #[serde(rename = "Stating the Obvious")]
    StatingTheObvious,
    #[serde(rename = "Rhetorical Questioning")]
    RhetoricalQuestioning,
    #[serde(rename = "Emotional Invalidation")]
    EmotionalInvalidation,
    #[serde(rename = "General Roasting")]
    GeneralRoasting,
}

impl AdviceType {
    pub fn classify(text: &str) -> Self {
        let lower = text.to_lowercase();
        let has_any = |words: &[&str]| words.iter().any(|w| lower.contains(w));
        if has_any(&["try", "maybe", "consider"]) {
            AdviceType::BackhandedSuggestion
        } else if has_any(&["obvious", "clearly"]) {
            AdviceType::StatingTheObvious
        } else if text.contains('?') {
            AdviceType::RhetoricalQuestioning
        } else if has_any(&["feel", "emotion"]) {
            AdviceType::EmotionalInvalidation
        } else {
            AdviceType::GeneralRoasting
        }
    }
}
