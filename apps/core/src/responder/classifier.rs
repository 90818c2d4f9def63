//! Ordered rule evaluation.
//!
//! Special cases (greetings, contact channels, page-driven answers) are checked
//! first, then the knowledge base, then a randomized fallback. Every non-empty
//! input gets exactly one reply.

use super::knowledge::KnowledgeBase;
use super::matcher::Matcher;
use super::normalize::normalize;
use super::page::{certificates_html, specialization_text, PageContent};
use super::random::RandomSource;
use super::reply::{Reply, Suggestions};
use crate::config::ContactLinks;
use std::sync::Arc;
use tracing::debug;

const SESSION_GREETING: &str = "¡Hola! Soy el asistente virtual de Ricardo Alexis. Puedo contarte sobre su experiencia, proyectos, habilidades o cómo contactarlo. ¿Qué te gustaría saber?";
const GREETING_REPLY: &str = "¡Hola! Estoy listo para ayudarte con la información del portafolio: experiencia, proyectos, habilidades y contacto.";
const STATUS_REPLY: &str = "¡Todo bien! Este asistente responde con base en el contenido del portafolio de Ricardo. Pregúntame sobre proyectos, habilidades o formas de contacto.";
const THANKS_REPLY: &str = "¡Con gusto! Si quieres saber más sobre proyectos, habilidades o cómo contactarlo, sólo dime.";
const PHONE_REPLY: &str = "Por ahora no tengo un número telefónico disponible. Prefiero coordinar por correo y agendamos con gusto.";

/// Replies for input nothing else recognizes; one is picked uniformly.
pub const FALLBACK_REPLIES: [&str; 3] = [
    "Mi conocimiento se centra en la información del portafolio: experiencia, proyectos, habilidades y formas de contacto. ¿Qué tema quieres explorar?",
    "No tengo datos de ese tema fuera del sitio, pero sí puedo contarte sobre proyectos destacados, habilidades, logros y contacto.",
    "La página resume proyectos, stack tecnológico, logros y cómo contactar a Ricardo. ¿Te gustaría profundizar en alguno?",
];

/// Special-case topics checked before the knowledge base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Greeting,
    Status,
    Thanks,
    Farewell,
    Phone,
    Email,
    Cv,
    Certificates,
    Specialization,
}

struct Rule {
    topic: Topic,
    matcher: Matcher,
}

// Evaluated top to bottom; first match wins.
const RULES: &[Rule] = &[
    Rule {
        topic: Topic::Greeting,
        matcher: Matcher::Exact(&[
            "hola", "buenos dias", "buen dia", "buenas tardes", "buenas noches", "hey", "que tal",
            "saludos",
        ]),
    },
    Rule {
        topic: Topic::Status,
        matcher: Matcher::Exact(&["como estas", "que tal estas", "todo bien"]),
    },
    Rule {
        topic: Topic::Thanks,
        matcher: Matcher::Exact(&["gracias", "muchas gracias", "mil gracias", "thank you", "thanks"]),
    },
    Rule {
        topic: Topic::Farewell,
        matcher: Matcher::Exact(&["adios", "hasta luego", "nos vemos", "bye", "hasta pronto"]),
    },
    Rule {
        topic: Topic::Phone,
        matcher: Matcher::Contains(&["tel", "phone", "cel", "numero"]),
    },
    Rule {
        topic: Topic::Email,
        matcher: Matcher::Contains(&["correo", "mail", "email"]),
    },
    Rule {
        topic: Topic::Cv,
        matcher: Matcher::Contains(&["cv", "curriculum", "hoja de vida", "resume"]),
    },
    Rule {
        topic: Topic::Certificates,
        matcher: Matcher::Contains(&["certificado", "certificacion", "diploma"]),
    },
    Rule {
        topic: Topic::Specialization,
        matcher: Matcher::Contains(&[
            "especialidad",
            "especializacion",
            "en que te especializas",
            "cual es tu especialidad",
        ]),
    },
];

/// Per-page-load chat state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatSession {
    /// The session-init greeting has been queued.
    pub initialized: bool,
    /// The contact email was already given in this session.
    pub email_shared: bool,
}

/// Maps user utterances to replies.
pub struct ChatResponder {
    knowledge: KnowledgeBase,
    page: Arc<dyn PageContent>,
    random: Box<dyn RandomSource>,
    contact: ContactLinks,
}

impl ChatResponder {
    pub fn new(
        contact: ContactLinks,
        page: Arc<dyn PageContent>,
        random: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            knowledge: KnowledgeBase::portfolio(&contact),
            page,
            random,
            contact,
        }
    }

    /// Normalizes `raw` and classifies it. `None` when nothing is left after normalization.
    pub fn respond(&mut self, session: &mut ChatSession, raw: &str) -> Option<Reply> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return None;
        }
        Some(self.classify(session, &normalized))
    }

    /// Reply for already-normalized input.
    pub fn classify(&mut self, session: &mut ChatSession, normalized: &str) -> Reply {
        if let Some(rule) = RULES.iter().find(|r| r.matcher.matches(normalized)) {
            debug!(topic = ?rule.topic, "Matched special rule");
            return self.topic_reply(rule.topic, session);
        }

        if let Some(entry) = self.knowledge.find(normalized) {
            debug!(entry = entry.id, "Matched knowledge entry");
            return entry.reply();
        }

        let index = self.random.pick(FALLBACK_REPLIES.len());
        debug!(index, "No rule matched, using fallback");
        Reply::plain(FALLBACK_REPLIES[index], Suggestions::UseDefault)
    }

    /// Unsolicited greeting sent when the widget opens for the first time.
    pub fn session_greeting(&self) -> Reply {
        Reply::plain(SESSION_GREETING, Suggestions::UseDefault)
    }

    fn topic_reply(&self, topic: Topic, session: &mut ChatSession) -> Reply {
        match topic {
            Topic::Greeting => Reply::plain(GREETING_REPLY, Suggestions::UseDefault),
            Topic::Status => Reply::plain(STATUS_REPLY, Suggestions::UseDefault),
            Topic::Thanks => Reply::plain(THANKS_REPLY, Suggestions::UseDefault),
            Topic::Farewell => Reply::markup(
                format!(
                    "¡Hasta luego! Si necesitas retomar la conversación puedes escribirme a {}.",
                    self.contact.email_anchor()
                ),
                Suggestions::Suppress,
            ),
            Topic::Phone => Reply::plain(
                PHONE_REPLY,
                Suggestions::explicit(&["¿Cuál es tu correo?", "¿Qué proyectos tienes?"]),
            ),
            Topic::Email => {
                let anchor = self.contact.email_anchor();
                let text = if session.email_shared {
                    format!("Ya te había compartido mi correo: {}.", anchor)
                } else {
                    format!("Puedes escribirme directamente a {} y coordinamos detalles.", anchor)
                };
                session.email_shared = true;
                Reply::markup(
                    text,
                    Suggestions::explicit(&[
                        "¿Cómo agendamos un proyecto?",
                        "Muéstrame tus proyectos destacados",
                        "¿Qué habilidades tienes?",
                    ]),
                )
            }
            Topic::Cv => Reply::markup(
                format!(
                    "Puedes {} desde esta página para revisar la trayectoria completa.",
                    self.contact.cv_anchor()
                ),
                Suggestions::explicit(&[
                    "¿Qué habilidades dominas?",
                    "¿Cómo te contacto?",
                    "Muéstrame tus proyectos destacados",
                ]),
            ),
            Topic::Certificates => Reply::markup(
                certificates_html(self.page.as_ref()),
                Suggestions::explicit(&["Tu especializacion", "Mostrar proyectos", "Contacto"]),
            ),
            Topic::Specialization => Reply::plain(
                specialization_text(self.page.as_ref()),
                Suggestions::explicit(&["Ver certificados", "Mostrar proyectos", "Contacto"]),
            ),
        }
    }
}
