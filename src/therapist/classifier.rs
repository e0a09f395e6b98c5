use mirror_model::{Context, Mood};

// Checked in order, first hit wins.
const CONTEXT_KEYWORDS: [(Context, &[&str]); 5] = [
    (Context::Work, &["work", "job", "boss", "career"]),
    (
        Context::Relationship,
        &["girlfriend", "boyfriend", "dating", "love"],
    ),
    (Context::Family, &["family", "mom", "dad", "parents"]),
    (Context::Money, &["money", "broke", "expensive", "bill"]),
    (Context::Health, &["tired", "sick", "health", "pain"]),
];

const MOOD_KEYWORDS: [(Mood, &[&str]); 4] = [
    (Mood::Frustrated, &["angry", "mad", "furious", "annoyed"]),
    (Mood::Confused, &["confused", "lost", "understand", "help"]),
    (Mood::Sad, &["sad", "depressed", "down", "cry"]),
    (Mood::Anxious, &["anxious", "worried", "scared", "nervous"]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub context: Context,
    pub mood: Mood,
}

/// Plain substring matching. "I am not angry" is still frustrated.
pub fn classify(text: &str) -> Classification {
    let text = text.to_lowercase();
    Classification {
        context: first_match(&text, &CONTEXT_KEYWORDS).unwrap_or(Context::General),
        mood: first_match(&text, &MOOD_KEYWORDS).unwrap_or(Mood::Frustrated),
    }
}

fn first_match<T: Copy>(text: &str, groups: &[(T, &[&str])]) -> Option<T> {
    groups
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(category, _)| *category)
}
