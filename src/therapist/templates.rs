use mirror_model::{Context, Mood, PersonaId};
use serde::Serialize;

/// Level drawn for a persona: `high` when the roll beats `threshold`, `low` otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UselessnessDraw {
    pub low: u8,
    pub high: u8,
    pub threshold: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersonaTemplate {
    pub openers: &'static [&'static str],
    pub connectors: &'static [&'static str],
    pub closers: &'static [&'static str],
    pub uselessness: UselessnessDraw,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaStyle {
    pub id: PersonaId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub personality: &'static str,
}

const ZEN: PersonaTemplate = PersonaTemplate {
    openers: &[
        "Have you considered that",
        "Perhaps the universe is telling you",
        "In my infinite wisdom, I sense that",
        "The chakras whisper to me that",
        "Ancient wisdom suggests",
    ],
    connectors: &[
        "your problems stem from your inability to breathe.",
        "you're overthinking this.",
        "the root cause is obviously you.",
        "you keep making the same mistake.",
        "your energy is blocked.",
    ],
    closers: &[
        "Maybe try meditation... or not. 🧘‍♀️",
        "Namaste... away from your problems. ✨",
        "Inner peace requires outer effort, which you clearly lack. 🕉️",
        "The answer was inside you all along (unfortunately). 🌸",
        "Balance is key... unlike your life choices. ⚖️",
    ],
    uselessness: UselessnessDraw {
        low: 2,
        high: 3,
        threshold: 0.6,
    },
};

const ANGRY: PersonaTemplate = PersonaTemplate {
    openers: &[
        "ARE YOU KIDDING ME?!",
        "Seriously, AGAIN with this?!",
        "I can't believe I have to explain this.",
        "Oh for crying out loud!",
        "WHAT is wrong with you?!",
    ],
    connectors: &[
        "you KEEP doing the same stupid thing!",
        "how many times do I have to tell you?!",
        "it's like talking to a brick wall!",
        "you never listen to yourself!",
        "this is SO obvious it hurts!",
    ],
    closers: &[
        "GET IT TOGETHER! 😤",
        "Do better! I'm literally you! 🔥",
        "Stop being such a disappointment! 💢",
        "Figure it out already! ⚡",
        "I'm done with this nonsense! 🤬",
    ],
    uselessness: UselessnessDraw {
        low: 3,
        high: 4,
        threshold: 0.4,
    },
};

const CONDESCENDING: PersonaTemplate = PersonaTemplate {
    openers: &[
        "Oh, how... quaint.",
        "Well, obviously",
        "Let me explain this slowly:",
        "Since you clearly don't understand,",
        "How adorable that you think",
    ],
    connectors: &[
        "the real issue is that you haven't noticed.",
        "what you should be doing is literally anything else.",
        "any reasonable person would have moved on.",
        "you insist on continuing anyway.",
        "this is an embarrassing display.",
    ],
    closers: &[
        "You're welcome for this free education. 🤓",
        "Try to keep up next time. 📚",
        "I hope that wasn't too complicated for you. 🎓",
        "Maybe write this down so you don't forget. ✏️",
        "This should be obvious, but here we are. 🤷‍♀️",
    ],
    uselessness: UselessnessDraw {
        low: 3,
        high: 4,
        threshold: 0.5,
    },
};

const CHAOTIC: PersonaTemplate = PersonaTemplate {
    openers: &[
        "PLOT TWIST!",
        "What if... hear me out...",
        "Random thought:",
        "The voices in my head say",
        "I had a vision and",
    ],
    connectors: &[
        "you should become a professional llama trainer.",
        "the solution involves interpretive dance.",
        "your problems are actually a cry for glitter.",
        "you haven't tried yelling into a bucket.",
        "we could just ignore everything.",
    ],
    closers: &[
        "Trust the process! 🤪",
        "Chaos is a ladder! 🌪️",
        "Why be normal when you can be legendary? 🦄",
        "Life's too short for logic! 🎭",
        "Embrace the madness! 🎪",
    ],
    uselessness: UselessnessDraw {
        low: 4,
        high: 5,
        threshold: 0.3,
    },
};

pub fn persona_template(id: PersonaId) -> PersonaTemplate {
    match id {
        PersonaId::Zen => ZEN,
        PersonaId::Angry => ANGRY,
        PersonaId::Condescending => CONDESCENDING,
        PersonaId::Chaotic => CHAOTIC,
    }
}

pub fn persona_style(id: PersonaId) -> PersonaStyle {
    let (name, description, icon, personality) = match id {
        PersonaId::Zen => (
            "Zen You",
            "Passive-aggressive spiritual wisdom",
            "🧘‍♀️",
            "Calm but judgmental, speaks in spiritual platitudes while being subtly critical",
        ),
        PersonaId::Angry => (
            "Angry You",
            "Brutally honest tough love",
            "😤",
            "Frustrated and direct, tells you exactly what you need to hear (loudly)",
        ),
        PersonaId::Condescending => (
            "Condescending You",
            "Intellectually superior attitude",
            "🤓",
            "Acts like they know everything, explains obvious solutions patronizingly",
        ),
        PersonaId::Chaotic => (
            "Chaotic You",
            "Unhinged but oddly insightful",
            "🤪",
            "Completely random advice that somehow makes sense in a twisted way",
        ),
    };
    PersonaStyle {
        id,
        name,
        description,
        icon,
        personality,
    }
}

pub fn context_phrases(context: Context) -> &'static [&'static str] {
    match context {
        Context::Work => &[
            "your job",
            "that workplace",
            "your boss",
            "career choices",
            "professional life",
        ],
        Context::Relationship => &[
            "that person",
            "your dating life",
            "relationships",
            "your romantic disasters",
            "love life",
        ],
        Context::Family => &[
            "your family",
            "family drama",
            "relatives",
            "family dynamics",
            "childhood issues",
        ],
        Context::Money => &[
            "your finances",
            "money problems",
            "spending habits",
            "financial decisions",
            "budget",
        ],
        Context::Health => &[
            "your health",
            "wellness journey",
            "self-care",
            "fitness goals",
            "mental health",
        ],
        Context::General => &[
            "life in general",
            "existence",
            "your choices",
            "this situation",
            "everything",
        ],
    }
}

pub fn mood_phrases(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Frustrated => &[
            "clearly frustrated",
            "obviously overwhelmed",
            "apparently stressed",
        ],
        Mood::Confused => &[
            "hopelessly lost",
            "completely confused",
            "utterly bewildered",
        ],
        Mood::Sad => &[
            "feeling sorry for yourself",
            "wallowing in self-pity",
            "being dramatic",
        ],
        Mood::Anxious => &[
            "spiraling into anxiety",
            "overthinking everything",
            "catastrophizing",
        ],
    }
}
