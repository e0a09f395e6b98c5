use std::collections::HashMap;

use anyhow::{format_err, Context as _, Result};
use log::debug;
use mirror_model::{PersonaId, Reply, UselessnessLevel};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use super::classifier::classify;
use super::templates::{context_phrases, mood_phrases, persona_template, PersonaTemplate};
use super::usage::UsageTracker;
use super::{ReplyProvider, ReplyRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhraseForm {
    FirstTime,
    Repeated,
}

/// Builds replies out of persona templates and keyword lexicons.
pub struct TemplateComposer {
    templates: HashMap<PersonaId, PersonaTemplate>,
    usage: UsageTracker,
    repeat_threshold: u32,
}

impl TemplateComposer {
    pub fn new(usage: UsageTracker, repeat_threshold: u32) -> Self {
        let templates = PersonaId::ALL
            .into_iter()
            .map(|id| (id, persona_template(id)))
            .collect();
        TemplateComposer {
            templates,
            usage,
            repeat_threshold,
        }
    }

    #[cfg(test)]
    pub fn with_templates(
        templates: HashMap<PersonaId, PersonaTemplate>,
        usage: UsageTracker,
        repeat_threshold: u32,
    ) -> Self {
        TemplateComposer {
            templates,
            usage,
            repeat_threshold,
        }
    }

    fn template(&self, persona: PersonaId) -> Result<&PersonaTemplate> {
        self.templates
            .get(&persona)
            .or_else(|| self.templates.get(&PersonaId::default()))
            .ok_or_else(|| format_err!("No template for {persona} nor the default persona"))
    }

    fn phrase_form(&self, identifier: Option<&str>) -> Result<PhraseForm> {
        let count = match identifier {
            Some(identifier) => self.usage.record(identifier)?,
            None => 0,
        };
        if count > self.repeat_threshold {
            debug!("{identifier:?} came back {count} times");
            Ok(PhraseForm::Repeated)
        } else {
            Ok(PhraseForm::FirstTime)
        }
    }
}

impl ReplyProvider for TemplateComposer {
    fn reply(&self, request: &ReplyRequest, rng: &mut dyn RngCore) -> Result<Reply> {
        let template = self.template(request.persona)?;
        let classification = classify(request.text);
        let form = self.phrase_form(request.identifier)?;

        let opener = pick(template.openers, rng).context("opener")?;
        let closer = pick(template.closers, rng).context("closer")?;
        let context_phrase = pick(context_phrases(classification.context), rng)
            .with_context(|| format!("{} phrase", classification.context))?;
        let mood_phrase = pick(mood_phrases(classification.mood), rng)
            .with_context(|| format!("{} phrase", classification.mood))?;
        let middle = match form {
            PhraseForm::FirstTime => {
                let connector = pick(template.connectors, rng).context("connector")?;
                first_time_clause(mood_phrase, context_phrase, connector)
            }
            PhraseForm::Repeated => repeated_clause(mood_phrase, context_phrase),
        };

        let draw = template.uselessness;
        let level = if rng.gen::<f64>() > draw.threshold {
            draw.high
        } else {
            draw.low
        };
        let level = UselessnessLevel::try_from(level)?;

        Ok(Reply::new(
            format!("{opener} {middle} {closer}"),
            level,
            classification.context,
            classification.mood,
        ))
    }
}

fn pick(phrases: &'static [&'static str], rng: &mut dyn RngCore) -> Result<&'static str> {
    phrases
        .choose(rng)
        .copied()
        .ok_or_else(|| format_err!("Empty phrase set"))
}

fn first_time_clause(mood: &str, context: &str, connector: &str) -> String {
    format!("you're {mood} about {context}, and {connector}")
}

fn repeated_clause(mood: &str, context: &str) -> String {
    format!("AGAIN with {context}? You're {mood} about the same things over and over!")
}

#[cfg(test)]
mod tests {
    use mirror_model::Context;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    const REPEATED_MARKER: &str = "over and over!";

    fn composer() -> TemplateComposer {
        TemplateComposer::new(UsageTracker::new(64), 3)
    }

    fn request<'a>(text: &'a str, persona: PersonaId, identifier: Option<&'a str>) -> ReplyRequest<'a> {
        ReplyRequest {
            text,
            persona,
            identifier,
        }
    }

    #[test]
    fn every_persona_gives_text_and_level() -> Result<()> {
        let composer = composer();
        let mut rng = StdRng::seed_from_u64(1);
        for persona in PersonaId::ALL {
            for _ in 0..20 {
                let reply = composer.reply(&request("meh", persona, None), &mut rng)?;
                assert!(!reply.text.is_empty());
                let draw = persona_template(persona).uselessness;
                let level = reply.uselessness_level.value();
                assert!(level == draw.low || level == draw.high, "{persona}: {level}");
            }
        }
        Ok(())
    }

    #[test]
    fn repeated_form_from_fourth_call() -> Result<()> {
        let composer = composer();
        let mut rng = StdRng::seed_from_u64(2);
        for call in 1..=6 {
            let reply = composer.reply(
                &request("work is fine", PersonaId::Zen, Some("u1")),
                &mut rng,
            )?;
            assert_eq!(reply.text.contains(REPEATED_MARKER), call >= 4, "call {call}");
        }
        Ok(())
    }

    #[test]
    fn anonymous_requests_never_repeat() -> Result<()> {
        let composer = composer();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10 {
            let reply = composer.reply(&request("hello", PersonaId::Zen, None), &mut rng)?;
            assert!(!reply.text.contains(REPEATED_MARKER));
        }
        assert_eq!(composer.usage.peek(""), None);
        Ok(())
    }

    #[test]
    fn identifiers_do_not_interfere() -> Result<()> {
        let composer = composer();
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..5 {
            composer.reply(&request("x", PersonaId::Angry, Some("loud")), &mut rng)?;
        }
        let reply = composer.reply(&request("x", PersonaId::Angry, Some("quiet")), &mut rng)?;
        assert!(!reply.text.contains(REPEATED_MARKER));
        assert_eq!(composer.usage.peek("loud"), Some(5));
        assert_eq!(composer.usage.peek("quiet"), Some(1));
        Ok(())
    }

    #[test]
    fn same_seed_same_reply() -> Result<()> {
        let text = "My boyfriend is lost";
        let a = composer().reply(
            &request(text, PersonaId::Chaotic, Some("s")),
            &mut StdRng::seed_from_u64(42),
        )?;
        let b = composer().reply(
            &request(text, PersonaId::Chaotic, Some("s")),
            &mut StdRng::seed_from_u64(42),
        )?;
        assert_eq!(a, b);
        assert_eq!(a.context, Context::Relationship);
        Ok(())
    }

    #[test]
    fn reply_is_opener_middle_closer() -> Result<()> {
        let composer = composer();
        let mut rng = StdRng::seed_from_u64(5);
        let template = persona_template(PersonaId::Condescending);
        let reply = composer.reply(
            &request("money money", PersonaId::Condescending, None),
            &mut rng,
        )?;
        assert!(template.openers.iter().any(|o| reply.text.starts_with(&format!("{o} you're "))));
        assert!(template.closers.iter().any(|c| reply.text.ends_with(&format!(" {c}"))));
        assert!(context_phrases(Context::Money)
            .iter()
            .any(|p| reply.text.contains(&format!("about {p}, and "))));
        Ok(())
    }

    #[test]
    fn missing_persona_uses_default_template() -> Result<()> {
        let templates = HashMap::from([(PersonaId::Zen, persona_template(PersonaId::Zen))]);
        let composer = TemplateComposer::with_templates(templates, UsageTracker::new(4), 3);
        let mut rng = StdRng::seed_from_u64(6);
        let reply = composer.reply(&request("x", PersonaId::Chaotic, None), &mut rng)?;
        let zen = persona_template(PersonaId::Zen);
        assert!(zen.openers.iter().any(|o| reply.text.starts_with(o)));
        Ok(())
    }

    #[test]
    fn empty_phrase_set_is_an_error() {
        let broken = PersonaTemplate {
            openers: &[],
            ..persona_template(PersonaId::Zen)
        };
        let templates = HashMap::from([(PersonaId::Zen, broken)]);
        let composer = TemplateComposer::with_templates(templates, UsageTracker::new(4), 3);
        let mut rng = StdRng::seed_from_u64(7);
        assert!(composer
            .reply(&request("x", PersonaId::Zen, None), &mut rng)
            .is_err());
    }

    #[test]
    fn out_of_range_level_is_an_error() {
        let mut broken = persona_template(PersonaId::Zen);
        broken.uselessness.low = 0;
        broken.uselessness.high = 9;
        let templates = HashMap::from([(PersonaId::Zen, broken)]);
        let composer = TemplateComposer::with_templates(templates, UsageTracker::new(4), 3);
        let mut rng = StdRng::seed_from_u64(8);
        assert!(composer
            .reply(&request("x", PersonaId::Zen, None), &mut rng)
            .is_err());
    }
}
