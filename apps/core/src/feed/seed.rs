//! Fixed posts: the first-run seed and the two "load more" posts.

use crate::models::{Author, Post};
use uuid::Uuid;

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;

struct FixedPost {
    age_ms: i64,
    text: &'static str,
    likes: u32,
    comments: u32,
    liked: bool,
    tags: &'static [&'static str],
}

const SEED_POSTS: &[FixedPost] = &[
    FixedPost {
        age_ms: 12 * HOUR_MS,
        text: "Refactor del Sistema Multi-Inventario: endpoints más limpios, nuevos índices en MySQL y dashboard con gráficos mensuales.",
        likes: 14,
        comments: 3,
        liked: false,
        tags: &["#Node", "#MySQL", "#CleanCode"],
    },
    FixedPost {
        age_ms: 36 * HOUR_MS,
        text: "Implementé 2FA en Angular con envío de tokens por SMS/Email + módulo de reset. Backend Node y SQL Server.",
        likes: 23,
        comments: 5,
        liked: true,
        tags: &["#Angular", "#2FA", "#Node", "#SQLServer"],
    },
    FixedPost {
        age_ms: 72 * HOUR_MS,
        text: "Pipeline de automatización: descarga SFTP, unzip, conversión a CSV y carga a DB. Scripts en Node + Linux Ubuntu.",
        likes: 19,
        comments: 2,
        liked: false,
        tags: &["#Automatización", "#SFTP", "#CSV", "#Linux"],
    },
    FixedPost {
        age_ms: 96 * HOUR_MS,
        text: "Proyecto tipo Twitter (Udemy): auth, timeline y seguidores con Node + MongoDB. Tests de endpoints con Postman.",
        likes: 31,
        comments: 6,
        liked: false,
        tags: &["#MongoDB", "#Node", "#Postman"],
    },
];

const MORE_POSTS: &[FixedPost] = &[
    FixedPost {
        age_ms: 15 * MINUTE_MS,
        text: "Pequeña mejora de performance: cache selectiva y compresión de respuestas en Node.",
        likes: 5,
        comments: 0,
        liked: false,
        tags: &["#Performance", "#Node"],
    },
    FixedPost {
        age_ms: 50 * MINUTE_MS,
        text: "Snippet CSS: skeleton loaders accesibles y con prefers-reduced-motion.",
        likes: 8,
        comments: 1,
        liked: false,
        tags: &["#CSS", "#A11y"],
    },
];

fn materialize(fixed: &[FixedPost], author: &Author, now: i64) -> Vec<Post> {
    fixed
        .iter()
        .map(|p| Post {
            id: Uuid::new_v4().to_string(),
            author: author.clone(),
            created_at: now - p.age_ms,
            text: p.text.to_string(),
            like_count: p.likes,
            comment_count: p.comments,
            liked: p.liked,
            tags: p.tags.iter().map(|t| t.to_string()).collect(),
            image: None,
        })
        .collect()
}

/// The four posts installed when no snapshot exists, newest first.
pub fn seed_posts(author: &Author, now: i64) -> Vec<Post> {
    materialize(SEED_POSTS, author, now)
}

/// The two posts prepended by "load more", newest first.
pub fn more_posts(author: &Author, now: i64) -> Vec<Post> {
    materialize(MORE_POSTS, author, now)
}
