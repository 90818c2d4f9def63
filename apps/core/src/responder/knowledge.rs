//! Static knowledge base about the portfolio.
//!
//! Entries are evaluated in declaration order and the first match wins, so
//! broad topics (e.g. `skills` matching "stack") shadow narrower ones declared
//! later.

use super::matcher::Matcher;
use super::reply::{Reply, Suggestions};
use crate::config::ContactLinks;

/// One topic rule.
#[derive(Debug, Clone)]
pub struct KnowledgeEntry {
    pub id: &'static str,
    pub matcher: Matcher,
    pub answer: String,
    pub allow_markup: bool,
    pub suggestions: Vec<String>,
}

impl KnowledgeEntry {
    fn new(id: &'static str, matcher: Matcher, answer: &str, suggestions: &[&str]) -> Self {
        Self {
            id,
            matcher,
            answer: answer.to_string(),
            allow_markup: false,
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn with_markup(mut self) -> Self {
        self.allow_markup = true;
        self
    }

    pub fn reply(&self) -> Reply {
        Reply {
            text: self.answer.clone(),
            allow_markup: self.allow_markup,
            suggestions: Suggestions::Explicit(self.suggestions.clone()),
        }
    }
}

/// Ordered, immutable list of topic rules.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
}

impl KnowledgeBase {
    pub fn new(entries: Vec<KnowledgeEntry>) -> Self {
        Self { entries }
    }

    /// First entry whose matcher accepts `normalized`.
    pub fn find(&self, normalized: &str) -> Option<&KnowledgeEntry> {
        self.entries.iter().find(|e| e.matcher.matches(normalized))
    }

    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    /// The portfolio's topics. `contact` is embedded in the contact answer.
    pub fn portfolio(contact: &ContactLinks) -> Self {
        let contact_answer = format!(
            "Puedes contactarlo por correo en {} y, en la sección de contacto del sitio, se invita a agendar una llamada para nuevos proyectos.",
            contact.email_anchor()
        );

        Self::new(vec![
            KnowledgeEntry::new(
                "overview",
                Matcher::Contains(&[
                    "quien eres", "quien es ricardo", "sobre ti", "sobre mi", "presentate",
                    "presentacion", "descripcion general", "que haces", "resumen general",
                ]),
                "Ricardo Alexis es un desarrollador de software full stack con foco en Node.js, Angular, automatización de procesos y bases de datos SQL/NoSQL. Disfruta diseñar arquitecturas modulares, documentar buenas prácticas y acompañar la adopción tecnológica con equipos multidisciplinarios.",
                &["Resúmeme tu experiencia", "Muéstrame tus proyectos", "¿Cuáles son tus habilidades?"],
            ),
            KnowledgeEntry::new(
                "experience",
                Matcher::Contains(&[
                    "experiencia", "trayectoria", "perfil profesional", "anos de experiencia",
                    "senioridad", "full stack jr",
                ]),
                "El portafolio destaca 1+ año de experiencia con más de 20 proyectos entregados como Full Stack Jr. Está disponible para proyectos y combina un enfoque tranquilo con pensamiento sistémico para resolver problemas reales.",
                &["¿Qué logros recientes tienes?", "Muéstrame tus proyectos destacados", "¿Cómo te contacto?"],
            ),
            KnowledgeEntry::new(
                "skills",
                Matcher::Contains(&[
                    "habilidad", "skills", "stack", "tecnolog", "lenguaj", "herramient",
                    "framework", "tool", "capacidades",
                ]),
                "Las habilidades incluyen lenguajes y core como Java, Python, PHP, JavaScript, HTML, CSS y Node.js; bases de datos MySQL, MariaDB, SQL Server, MongoDB y Cassandra; frameworks y herramientas como Angular, Bootstrap, Express, XAMPP, Postman y Git; además de metodologías REST, Clean Code, Scrum, Testing y CI/CD.",
                &["¿Qué tecnologías base usas?", "Muéstrame tus proyectos destacados", "¿Dónde puedo descargar tu CV?"],
            ),
            KnowledgeEntry::new(
                "stack-base",
                Matcher::Contains(&["tecnologias base", "stack base", "base tecnologica", "tech base", "chips"]),
                "Las tecnologías base resaltadas son Node.js, Angular, SQL Server, MongoDB, AWS S3, Linux Ubuntu y automatización, tal como se muestra en las chips del portafolio.",
                &["¿Qué habilidades tienes?", "Cuéntame de tus proyectos destacados", "¿Cómo te contacto?"],
            ),
            KnowledgeEntry::new(
                "services",
                Matcher::Contains(&[
                    "servicio", "que ofreces", "en que ayudas", "servicios clave", "ofreces",
                    "tipo de trabajo",
                ]),
                "Los servicios clave incluyen diseño de plataformas web corporativas, APIs e integraciones y microservicios en Node.js, automatización de flujos y orquestación de datos, además de seguridad, monitoreo y documentación técnica.",
                &["Muéstrame tus proyectos destacados", "¿Qué logros recientes tienes?", "¿Cómo te contacto?"],
            ),
            KnowledgeEntry::new(
                "highlights",
                Matcher::Contains(&["logro", "reciente", "ultimos hitos", "timeline", "novedades", "actualmente"]),
                "Los logros recientes incluyen la migración de datos automatizada con SFTP y scripts Node.js en 2025, un dashboard analítico para inventarios en 2024 y la autenticación 2FA corporativa en Angular también en 2024.",
                &["Muéstrame tus proyectos destacados", "¿Qué habilidades tienes?", "¿Cómo te contacto?"],
            ),
            KnowledgeEntry::new(
                "projects-multi",
                Matcher::Contains(&["multi inventario", "inventario", "insumos", "tickets", "uniparts", "compras"]),
                "El Sistema Multi-Inventario (junio–octubre 2024, UNIPARTS S.A. de C.V.) ofrece consultas en tiempo real para tickets, compras, usuarios y equipos asignados. Incluye dashboards mensuales, control de accesos y automatización de workflows con Node.js, MySQL, Bootstrap y XAMPP.",
                &["¿Tienes proyectos de seguridad?", "Cuéntame de la automatización de archivos", "¿Cómo te contacto?"],
            ),
            KnowledgeEntry::new(
                "projects-2fa",
                Matcher::Contains(&["2fa", "doble factor", "seguridad", "token", "autenticacion"]),
                "La implementación de autenticación 2FA en Angular (julio–agosto 2025, Grupo GABSSA) gestiona registro y validación con doble factor, tokens enviados por SMS y correo, un módulo de recuperación y auditoría de accesos. El backend usa Node.js y SQL Server con almacenamiento seguro.",
                &["Cuéntame del Sistema Multi-Inventario", "¿Qué habilidades tienes?", "¿Cómo te contacto?"],
            ),
            KnowledgeEntry::new(
                "projects-automation",
                Matcher::Contains(&[
                    "automatizacion", "sftp", "transferencia de archivos", "csv", "orquestacion",
                    "pipeline",
                ]),
                "La Transferencia y Automatización de archivos (2025, Grupo GABSSA) mueve grandes volúmenes de información en entornos Linux con pipelines en Node.js y SFTP. Automatiza descargas, unzip, conversión a CSV, cargas a bases corporativas e integra Amazon S3 con monitoreo y alertas.",
                &["¿Tienes proyectos de seguridad?", "Muéstrame otra solución destacada", "¿Cómo te contacto?"],
            ),
            KnowledgeEntry::new(
                "projects-social",
                Matcher::Contains(&["red social", "twitter", "seguidores", "timeline", "udemy"]),
                "El Proyecto Red Social (agosto–noviembre 2024, curso Udemy) replica una plataforma tipo Twitter con autenticación, timeline y gestión de seguidores. El backend usa Node.js y MongoDB, con pruebas de endpoints realizadas en Postman.",
                &["¿Qué habilidades tienes?", "Cuéntame del Sistema Multi-Inventario", "¿Cómo te contacto?"],
            ),
            KnowledgeEntry::new(
                "projects-bitacora",
                Matcher::Contains(&["bitacora", "prestaciones", "recursos humanos", "rh"]),
                "La Bitácora de prestaciones (enero–marzo 2025, UNIPARTS) es una aplicación web para Recursos Humanos orientada a registrar y seguir prestaciones de ley, con UI responsiva, reportes de auditoría, recuperación de datos e integración mediante XAMPP.",
                &["¿Tienes más proyectos?", "¿Qué habilidades tienes?", "¿Cómo te contacto?"],
            ),
            KnowledgeEntry::new(
                "projects-arcade",
                Matcher::Contains(&["shark", "arcade", "cassandra", "maquina"]),
                "El juego de arcade Shark (2023) gestiona registro, consulta y validación de puntos de jugadores con Node.js y Cassandra. Incluye validaciones por IP local, respaldos ante pérdida de datos y un panel administrativo accesible y seguro.",
                &["¿Qué otras soluciones has creado?", "¿Qué habilidades tienes?", "¿Cómo te contacto?"],
            ),
            KnowledgeEntry::new(
                "projects-general",
                Matcher::Contains(&["proyecto", "portafolio", "caso de exito", "trabajos realizados", "soluciones"]),
                "Los proyectos destacados abarcan inventarios corporativos, autenticación 2FA, automatización de archivos en Linux, una red social estilo Twitter, una bitácora de prestaciones para RH y un juego arcade con Cassandra. Puedo darte detalles de cualquiera.",
                &["Cuéntame del Sistema Multi-Inventario", "¿Tienes proyectos de seguridad?", "¿Cómo te contacto?"],
            ),
            KnowledgeEntry::new(
                "feed",
                Matcher::Contains(&[
                    "feed", "timeline", "publicacion", "posts", "historias", "story", "blog",
                    "red social interna",
                ]),
                "El feed simula una red social con historias destacadas, publicaciones con métricas, etiquetas y acciones como me gusta, compartir y un compositor con contador de caracteres e inserción de imágenes.",
                &["¿Qué proyectos destacas?", "¿Qué habilidades tienes?", "¿Cómo te contacto?"],
            ),
            KnowledgeEntry::new(
                "contact",
                Matcher::Contains(&[
                    "contacto", "comunicarnos", "escribirte", "hablar contigo", "agend",
                    "coordinemos", "mandarte mensaje",
                ]),
                &contact_answer,
                &["¿Cómo agendamos un proyecto?", "Muéstrame tus proyectos destacados", "¿Qué habilidades tienes?"],
            )
            .with_markup(),
            KnowledgeEntry::new(
                "availability",
                Matcher::Contains(&["disponible", "contratar", "colaborar", "trabajo contigo", "sumarte", "agenda"]),
                "Ricardo está disponible para proyectos, especialmente con equipos que valoran la documentación, tienen impacto en operaciones o inteligencia de negocio y trabajan de forma remota o híbrida.",
                &["¿Cómo te contacto?", "Muéstrame tus proyectos destacados", "¿Qué habilidades tienes?"],
            ),
            KnowledgeEntry::new(
                "resources",
                Matcher::Contains(&["recursos", "github", "linkedin", "enlaces", "links"]),
                "En la tarjeta de recursos puedes acceder a sus perfiles de GitHub y LinkedIn, además del enlace directo al correo electrónico.",
                &["¿Cómo te contacto?", "¿Qué habilidades tienes?", "Muéstrame tus proyectos destacados"],
            ),
            KnowledgeEntry::new(
                "location",
                Matcher::Contains(&["donde estas", "ubicacion", "pais", "mexico", "radicas", "resides"]),
                "Actualmente opera desde México y está abierto a colaboraciones remotas o híbridas, según se menciona en el portafolio.",
                &["¿Cómo te contacto?", "Muéstrame tus proyectos destacados", "¿Qué logros recientes tienes?"],
            ),
        ])
    }
}
