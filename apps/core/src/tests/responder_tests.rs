//! Responder Tests
//!
//! Tests for the rule-based chat responder: rule order, normalization,
//! per-session email memory, fallbacks and page-driven answers.

use crate::config::ContactLinks;
use crate::responder::classifier::FALLBACK_REPLIES;
use crate::responder::{
    default_suggestions, CertificateCard, ChatResponder, ChatSession, FixedIndex, PageSnapshot,
    SeededRandom, StaticPageContent, Suggestions,
};
use std::sync::Arc;

fn responder() -> ChatResponder {
    ChatResponder::new(
        ContactLinks::default(),
        Arc::new(StaticPageContent),
        Box::new(FixedIndex(0)),
    )
}

fn responder_with_page(page: PageSnapshot) -> ChatResponder {
    ChatResponder::new(ContactLinks::default(), Arc::new(page), Box::new(FixedIndex(0)))
}

#[cfg(test)]
mod special_rules {
    use super::*;

    #[test]
    fn test_greetings_use_extended_defaults() {
        let mut r = responder();
        let mut session = ChatSession::default();

        for input in ["hola", "  HOLA  ", "hóla", "Qué tal", "SALUDOS"] {
            let reply = r.respond(&mut session, input).unwrap();
            assert!(reply.text.starts_with("¡Hola! Estoy listo"), "input {:?}", input);
            assert!(!reply.allow_markup);
            let chips = reply.suggestions.resolve();
            assert_eq!(chips, default_suggestions());
            assert!(chips.contains(&"Ver certificados".to_string()));
            assert!(chips.contains(&"Tu especialización".to_string()));
        }
    }

    #[test]
    fn test_status_and_thanks() {
        let mut r = responder();
        let mut session = ChatSession::default();

        let status = r.respond(&mut session, "Cómo estás").unwrap();
        assert!(status.text.starts_with("¡Todo bien!"));

        let thanks = r.respond(&mut session, "Muchas gracias").unwrap();
        assert!(thanks.text.starts_with("¡Con gusto!"));
        assert_eq!(thanks.suggestions, Suggestions::UseDefault);
    }

    #[test]
    fn test_farewell_suppresses_suggestions() {
        let mut r = responder();
        let mut session = ChatSession::default();

        let reply = r.respond(&mut session, "Adiós").unwrap();

        assert!(reply.allow_markup);
        assert!(reply.text.contains("mailto:ricardo.alexis031299@gmail.com"));
        assert_eq!(reply.suggestions, Suggestions::Suppress);
        assert!(reply.suggestions.resolve().is_empty());
    }

    #[test]
    fn test_email_is_remembered_per_session() {
        let mut r = responder();
        let mut session = ChatSession::default();

        let first = r.respond(&mut session, "¿Cuál es tu correo?").unwrap();
        assert!(first.text.starts_with("Puedes escribirme directamente a <a href=\"mailto:"));
        assert!(first.allow_markup);
        assert!(session.email_shared);

        let second = r.respond(&mut session, "pásame tu email").unwrap();
        assert!(second.text.starts_with("Ya te había compartido mi correo: <a href="));
        assert_eq!(
            second.suggestions.resolve(),
            vec![
                "¿Cómo agendamos un proyecto?",
                "Muéstrame tus proyectos destacados",
                "¿Qué habilidades tienes?",
            ]
        );

        // A fresh session starts over.
        let mut other = ChatSession::default();
        let third = r.respond(&mut other, "correo").unwrap();
        assert!(third.text.starts_with("Puedes escribirme"));
    }

    #[test]
    fn test_phone_has_fixed_suggestions() {
        let mut r = responder();
        let mut session = ChatSession::default();

        let reply = r.respond(&mut session, "¿Tienes número de celular?").unwrap();

        assert!(reply.text.starts_with("Por ahora no tengo un número telefónico"));
        assert_eq!(
            reply.suggestions.resolve(),
            vec!["¿Cuál es tu correo?", "¿Qué proyectos tienes?"]
        );
    }

    #[test]
    fn test_cv_reply_links_pdf() {
        let contact = ContactLinks {
            email: "yo@example.com".to_string(),
            cv_link: "/cv.pdf".to_string(),
        };
        let mut r = ChatResponder::new(contact, Arc::new(StaticPageContent), Box::new(FixedIndex(0)));
        let mut session = ChatSession::default();

        let reply = r.respond(&mut session, "¿Dónde puedo descargar tu CV?").unwrap();

        assert!(reply.allow_markup);
        assert!(reply
            .text
            .contains("<a href=\"/cv.pdf\" target=\"_blank\" rel=\"noopener\">descargar el CV en PDF</a>"));
    }

    #[test]
    fn test_resume_prompt_hits_cv_rule() {
        let mut r = responder();
        let mut session = ChatSession::default();

        let reply = r.respond(&mut session, "Resúmeme tu experiencia").unwrap();

        assert!(reply.text.contains("descargar el CV en PDF"));
    }
}

#[cfg(test)]
mod page_rules {
    use super::*;

    #[test]
    fn test_certificates_fall_back_to_fixed_list() {
        let mut r = responder();
        let mut session = ChatSession::default();

        let reply = r.respond(&mut session, "Ver certificados").unwrap();

        assert!(reply.allow_markup);
        assert!(reply.text.starts_with("<div><strong>Certificados:</strong><ul>"));
        assert_eq!(reply.text.matches("<li>").count(), 4);
        assert_eq!(
            reply.suggestions.resolve(),
            vec!["Tu especializacion", "Mostrar proyectos", "Contacto"]
        );
    }

    #[test]
    fn test_certificates_from_page_are_escaped() {
        let page = PageSnapshot {
            certificates: vec![CertificateCard::new("SQL <Avanzado>", "/c/sql.png")],
            specialization: None,
        };
        let mut r = responder_with_page(page);
        let mut session = ChatSession::default();

        let reply = r.respond(&mut session, "tus diplomas").unwrap();

        assert_eq!(reply.text.matches("<li>").count(), 1);
        assert!(reply.text.contains("SQL &lt;Avanzado&gt;"));
        assert!(reply.text.contains("href=\"/c/sql.png\""));
    }

    #[test]
    fn test_specialization_reads_page_text() {
        let page = PageSnapshot {
            certificates: Vec::new(),
            specialization: Some("  Backend y automatización  ".to_string()),
        };
        let mut r = responder_with_page(page);
        let mut session = ChatSession::default();

        let reply = r.respond(&mut session, "Tu especialización").unwrap();

        assert_eq!(reply.text, "Backend y automatización");
        assert!(!reply.allow_markup);
        assert_eq!(
            reply.suggestions.resolve(),
            vec!["Ver certificados", "Mostrar proyectos", "Contacto"]
        );
    }
}

#[cfg(test)]
mod knowledge_and_fallback {
    use super::*;

    #[test]
    fn test_default_prompts_reach_topics() {
        let mut r = responder();
        let mut session = ChatSession::default();

        let projects = r.respond(&mut session, "Muéstrame tus proyectos").unwrap();
        assert!(projects.text.starts_with("Los proyectos destacados"));

        let skills = r.respond(&mut session, "¿Cuáles son tus habilidades?").unwrap();
        assert!(skills.text.starts_with("Las habilidades incluyen"));

        let contact = r.respond(&mut session, "¿Cómo te contacto?").unwrap();
        assert!(contact.allow_markup);
        assert!(contact.text.contains("mailto:"));
        // The knowledge answer does not mark the email as shared.
        assert!(!session.email_shared);
    }

    #[test]
    fn test_knowledge_suggestions_are_explicit() {
        let mut r = responder();
        let mut session = ChatSession::default();

        let reply = r.respond(&mut session, "¿Dónde radicas?").unwrap();

        assert!(reply.text.contains("México"));
        assert_eq!(
            reply.suggestions.resolve(),
            vec![
                "¿Cómo te contacto?",
                "Muéstrame tus proyectos destacados",
                "¿Qué logros recientes tienes?",
            ]
        );
    }

    #[test]
    fn test_fallback_uses_random_index() {
        for index in 0..FALLBACK_REPLIES.len() {
            let mut r = ChatResponder::new(
                ContactLinks::default(),
                Arc::new(StaticPageContent),
                Box::new(FixedIndex(index)),
            );
            let mut session = ChatSession::default();

            let reply = r.respond(&mut session, "qwerty").unwrap();

            assert_eq!(reply.text, FALLBACK_REPLIES[index]);
            assert_eq!(reply.suggestions.resolve(), default_suggestions());
        }
    }

    #[test]
    fn test_seeded_fallback_stays_in_pool() {
        let mut r = ChatResponder::new(
            ContactLinks::default(),
            Arc::new(StaticPageContent),
            Box::new(SeededRandom::new(7)),
        );
        let mut session = ChatSession::default();

        for _ in 0..20 {
            let reply = r.respond(&mut session, "zzz").unwrap();
            assert!(FALLBACK_REPLIES.contains(&reply.text.as_str()));
        }
    }

    #[test]
    fn test_every_nonempty_input_gets_a_reply() {
        let mut r = responder();
        let mut session = ChatSession::default();

        for input in ["?", "1234", "ñandú", "¿¿¿", "a"] {
            let reply = r.respond(&mut session, input);
            assert!(reply.is_some(), "input {:?}", input);
            assert!(!reply.unwrap().text.is_empty());
        }
    }
}
