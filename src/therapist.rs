use anyhow::Result;
use composer::TemplateComposer;
use config::Config;
use fallback::FallbackResponder;
use log::{debug, error};
use mirror_model::{PersonaId, Reply};
use rand::RngCore;
use templates::{persona_style, PersonaStyle};
use usage::UsageTracker;

mod classifier;
mod composer;
pub(crate) mod config;
mod fallback;
pub(crate) mod store;
mod templates;
mod usage;

pub struct ReplyRequest<'a> {
    pub text: &'a str,
    pub persona: PersonaId,
    /// Untracked when absent.
    pub identifier: Option<&'a str>,
}

pub trait ReplyProvider: Send + Sync {
    fn reply(&self, request: &ReplyRequest, rng: &mut dyn RngCore) -> Result<Reply>;
}

/// Sarcastic reflection of the user. Never fails: errors of the primary provider
/// are logged and answered with a canned apology.
pub struct Therapist {
    primary: Box<dyn ReplyProvider>,
    fallback: FallbackResponder,
}

impl Therapist {
    pub fn new(config: &Config) -> Self {
        let usage = UsageTracker::new(config.usage_cache_capacity);
        Self::with_provider(Box::new(TemplateComposer::new(
            usage,
            config.repeat_threshold,
        )))
    }

    pub fn with_provider(primary: Box<dyn ReplyProvider>) -> Self {
        Therapist {
            primary,
            fallback: FallbackResponder::new(),
        }
    }

    pub fn generate_reply(
        &self,
        text: &str,
        persona_id: Option<&str>,
        identifier: Option<&str>,
        rng: &mut dyn RngCore,
    ) -> Reply {
        let request = ReplyRequest {
            text,
            persona: PersonaId::from_id_or_default(persona_id),
            identifier: identifier.filter(|i| !i.trim().is_empty()),
        };
        debug!(
            "generate_reply(persona: {}, identifier: {:?})",
            request.persona, request.identifier
        );
        match self.primary.reply(&request, rng) {
            Ok(reply) => reply,
            Err(e) => {
                error!("Reply composition failed: {e:#}");
                self.fallback.respond(rng)
            }
        }
    }

    pub fn styles(&self) -> Vec<PersonaStyle> {
        PersonaId::ALL.into_iter().map(persona_style).collect()
    }
}

#[cfg(test)]
mod tests {
    use anyhow::format_err;
    use mirror_model::{Context, UselessnessLevel};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::templates::persona_template;
    use super::*;

    struct BrokenProvider;

    impl ReplyProvider for BrokenProvider {
        fn reply(&self, _request: &ReplyRequest, _rng: &mut dyn RngCore) -> Result<Reply> {
            Err(format_err!("composition exploded"))
        }
    }

    fn therapist() -> Therapist {
        Therapist::new(&Config::default())
    }

    #[test]
    fn every_persona_answers() {
        let therapist = therapist();
        let mut rng = StdRng::seed_from_u64(11);
        for persona in PersonaId::ALL {
            let reply = therapist.generate_reply("hi", Some(persona.as_str()), Some("p"), &mut rng);
            assert!(!reply.text.is_empty());
            assert!((1..=5).contains(&reply.uselessness_level.value()));
        }
    }

    #[test]
    fn unknown_persona_behaves_like_zen() {
        let therapist = therapist();
        let zen = persona_template(PersonaId::Zen);
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..20 {
            let reply = therapist.generate_reply("hi", Some("nonexistent"), None, &mut rng);
            assert!(zen.openers.iter().any(|o| reply.text.starts_with(o)));
            assert!(zen.closers.iter().any(|c| reply.text.ends_with(c)));
        }
        let unknown = therapist.generate_reply(
            "hi",
            Some("nonexistent"),
            None,
            &mut StdRng::seed_from_u64(13),
        );
        let default = therapist.generate_reply("hi", None, None, &mut StdRng::seed_from_u64(13));
        let explicit = therapist.generate_reply("hi", Some("zen"), None, &mut StdRng::seed_from_u64(13));
        assert_eq!(unknown, default);
        assert_eq!(unknown, explicit);
    }

    #[test]
    fn provider_failure_falls_back() {
        let therapist = Therapist::with_provider(Box::new(BrokenProvider));
        let mut rng = StdRng::seed_from_u64(14);
        let reply = therapist.generate_reply("anything", Some("chaotic"), Some("u"), &mut rng);
        assert_eq!(reply.uselessness_level, UselessnessLevel::MAX);
        assert_eq!(reply.uselessness_label, "Completely Useless");
        assert!(therapist.fallback.contains(&reply.text));
    }

    #[test]
    fn overwhelmed_with_work_condescending() {
        let therapist = therapist();
        let condescending = persona_template(PersonaId::Condescending);
        let reply = therapist.generate_reply(
            "I feel overwhelmed with work",
            Some("condescending"),
            Some("u1"),
            &mut StdRng::seed_from_u64(15),
        );
        assert_eq!(reply.context, Context::Work);
        assert!(condescending
            .openers
            .iter()
            .any(|o| reply.text.starts_with(o)));
        assert!((3..=4).contains(&reply.uselessness_level.value()));
        assert!(!reply.text.contains("over and over!"));
    }

    #[test]
    fn blank_identifier_is_not_tracked() {
        let therapist = therapist();
        let mut rng = StdRng::seed_from_u64(16);
        for _ in 0..6 {
            let reply = therapist.generate_reply("hi", None, Some("  "), &mut rng);
            assert!(!reply.text.contains("over and over!"));
        }
    }

    #[test]
    fn styles_list_all_personas() {
        let ids: Vec<_> = therapist().styles().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, PersonaId::ALL.to_vec());
    }
}
