use mirror_model::{Context, Mood, Reply, UselessnessLevel};
use rand::seq::SliceRandom;
use rand::RngCore;

#[derive(Clone)]
pub struct FallbackResponder(Vec<&'static str>);

impl FallbackResponder {
    pub fn new() -> Self {
        FallbackResponder(make_fallback_responses())
    }

    pub fn respond(&self, rng: &mut dyn RngCore) -> Reply {
        let text = self.0.choose(rng).copied().unwrap_or(FALLBACK_OF_FALLBACK);
        Reply::new(
            text.to_string(),
            UselessnessLevel::MAX,
            Context::General,
            Mood::Frustrated,
        )
    }

    #[cfg(test)]
    pub fn contains(&self, text: &str) -> bool {
        self.0.contains(&text)
    }
}

const FALLBACK_OF_FALLBACK: &str = "...";

fn make_fallback_responses() -> Vec<&'static str> {
    vec![
        "Even my AI brain is broken. That's... concerning.",
        "Error 404: Helpful advice not found. Have you tried crying?",
        "System malfunction. Please try being less complicated.",
        "My circuits are fried. Probably your fault somehow.",
    ]
}
