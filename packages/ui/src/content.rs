//! Static, compile-time page content. Nothing here changes at runtime.

use crate::i18n::{Text, TextList};

pub const OWNER_NAME: &str = "Landry Tido";

pub const CONTACT_EMAIL: &str = "landrytido727@gmail.com";
pub const CONTACT_PHONE: &str = "+32465362609";

pub const CV_PATH: &str = "/CV.pdf";
pub const CV_FILENAME: &str = "Landry-Tido-CV-Developpeur-Fullstack.pdf";

/// Portrait variants swapped by the about section.
pub const PORTRAITS: [&str; 2] = [
    "/images/placeholder-profile.jpg",
    "/images/placeholder-profile-alt.jpg",
];

/// The phone number as shown on the page: country code kept, digits masked.
pub fn redacted_phone() -> String {
    let (prefix, rest) = CONTACT_PHONE.split_at(3.min(CONTACT_PHONE.len()));
    format!("{prefix}{}", "*".repeat(rest.chars().count()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    WhatsApp,
    Email,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: &'static str,
    pub href: &'static str,
}

impl SocialLink {
    /// `mailto:` links open in place; everything else in a new tab.
    pub fn external(&self) -> bool {
        self.kind != SocialKind::Email
    }
}

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        kind: SocialKind::GitHub,
        label: "GitHub",
        href: "https://github.com/Landrytido",
    },
    SocialLink {
        kind: SocialKind::LinkedIn,
        label: "LinkedIn",
        href: "https://linkedin.com/in/landry-tido-atikeng",
    },
    SocialLink {
        kind: SocialKind::WhatsApp,
        label: "WhatsApp",
        href: "https://wa.me/32465362609",
    },
    SocialLink {
        kind: SocialKind::Email,
        label: "Email",
        href: "mailto:landrytido727@gmail.com",
    },
];

pub fn social(kind: SocialKind) -> Option<&'static SocialLink> {
    SOCIAL_LINKS.iter().find(|link| link.kind == kind)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: Text,
}

pub static NAV_ITEMS: &[NavItem] = &[
    NavItem { id: "about", label: Text::new("À propos", "About") },
    NavItem { id: "skills", label: Text::new("Compétences", "Skills") },
    NavItem { id: "projects", label: Text::new("Projets", "Projects") },
    NavItem { id: "experience", label: Text::new("Expérience", "Experience") },
    NavItem { id: "education", label: Text::new("Formation", "Education") },
    NavItem { id: "contact", label: Text::same("Contact") },
];

pub static ABOUT_HIGHLIGHTS: &[Text] = &[
    Text::new("Basé à Bruxelles, Belgique", "Based in Brussels, Belgium"),
    Text::new("Disponible pour des projets freelance", "Available for freelance projects"),
    Text::new("Amateur de nouvelles technologies", "Technology enthusiast"),
    Text::new("Apprentissage continu", "Continuous learning"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    Internship,
    University,
    Personal,
}

impl ProjectKind {
    pub fn label(self) -> Text {
        match self {
            ProjectKind::Internship => Text::new("Stage en entreprise", "Company internship"),
            ProjectKind::University => Text::new("Projet universitaire", "University project"),
            ProjectKind::Personal => Text::new("Projet personnel", "Personal project"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub kind: ProjectKind,
    pub title: Text,
    pub description: Text,
    pub features: Option<TextList>,
    pub technologies: &'static [&'static str],
    pub image: &'static str,
    pub github: Option<&'static str>,
    pub demo: Option<&'static str>,
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: "web-companion",
        kind: ProjectKind::Internship,
        title: Text::same("My Web Companion"),
        description: Text::new(
            "Application web et mobile pour optimiser la gestion du quotidien numérique (bloc-notes, agenda, météo connectée, etc.).",
            "Web and mobile application to optimize daily digital management (notepad, calendar, connected weather, etc.).",
        ),
        features: Some(TextList::new(
            &[
                "Chronomètre interactif avec notifications",
                "Widget météo connecté à une API externe",
                "Interface fluide et responsive",
            ],
            &[
                "Interactive timer with notifications",
                "Weather widget connected to an external API",
                "Fluid and responsive interface",
            ],
        )),
        technologies: &["React", "NestJS", "GraphQL", "Prisma", "TypeScript"],
        image: "/images/project-1.jpg",
        github: Some("https://github.com/Landrytido"),
        demo: None,
    },
    Project {
        id: "ecommerce",
        kind: ProjectKind::University,
        title: Text::new("Site e-commerce de vente de t-shirts", "T-shirt e-commerce website"),
        description: Text::new(
            "Un site de commerce en ligne permettant la gestion de produits, commandes et paiements.",
            "An online commerce site allowing product, order and payment management.",
        ),
        features: Some(TextList::new(
            &[
                "Gestion des utilisateurs (inscription, connexion sécurisée)",
                "Panier dynamique et commandes",
                "Interface moderne avec animations",
            ],
            &[
                "User management (registration, secure login)",
                "Dynamic cart and orders",
                "Modern interface with animations",
            ],
        )),
        technologies: &["React", "Spring Boot", "MySQL", "JWT"],
        image: "/images/project-2.jpg",
        github: Some("https://github.com/Landrytido"),
        demo: None,
    },
    Project {
        id: "tennis-reservation",
        kind: ProjectKind::University,
        title: Text::new(
            "Réservation de terrains de tennis",
            "Tennis court reservation",
        ),
        description: Text::new(
            "Plateforme de réservation de terrains pour un club de tennis, avec gestion des membres et des créneaux.",
            "Court booking platform for a tennis club, with member and time-slot management.",
        ),
        features: Some(TextList::new(
            &[
                "Calendrier des créneaux disponibles",
                "Réservation et annulation en ligne",
                "Espace d'administration du club",
            ],
            &[
                "Calendar of available slots",
                "Online booking and cancellation",
                "Club administration area",
            ],
        )),
        technologies: &["React", "Spring Boot", "PostgreSQL", "Docker"],
        image: "/images/project-4.jpg",
        github: Some("https://github.com/Landrytido"),
        demo: None,
    },
    Project {
        id: "task-app",
        kind: ProjectKind::Personal,
        title: Text::new("Application de gestion des tâches", "Task management application"),
        description: Text::new(
            "Une application web pour organiser les tâches quotidiennes avec un système de rappels.",
            "A web application to organize daily tasks with a reminder system.",
        ),
        features: None,
        technologies: &["React", "NestJS", "GraphQL", "PostgreSQL"],
        image: "/images/project-3.jpg",
        github: Some("https://github.com/Landrytido"),
        demo: None,
    },
];

/// Weak lookup by id. Stale or unknown ids simply find nothing.
pub fn find_project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub id: &'static str,
    pub title: Text,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, color: &'static str) -> Skill {
    Skill { name, color }
}

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        id: "frontend",
        title: Text::same("Frontend"),
        skills: &[
            skill("JavaScript", "#F7DF1E"),
            skill("TypeScript", "#3178C6"),
            skill("React", "#61DAFB"),
            skill("Next.js", "#000000"),
            skill("Tailwind CSS", "#06B6D4"),
        ],
    },
    SkillCategory {
        id: "backend",
        title: Text::same("Backend"),
        skills: &[
            skill("Java", "#007396"),
            skill("Spring Boot", "#6DB33F"),
            skill("NestJS", "#E0234E"),
            skill("GraphQL", "#E10098"),
            skill("Prisma", "#2D3748"),
        ],
    },
    SkillCategory {
        id: "database",
        title: Text::new("Bases de données", "Databases"),
        skills: &[
            skill("MySQL", "#4479A1"),
            skill("PostgreSQL", "#336791"),
            skill("MongoDB", "#47A248"),
        ],
    },
    SkillCategory {
        id: "tools",
        title: Text::new("Outils & Technologies", "Tools & Technologies"),
        skills: &[
            skill("GitHub", "#181717"),
            skill("Docker", "#2496ED"),
            skill("Postman", "#FF6C37"),
            skill("Jira", "#0052CC"),
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub id: &'static str,
    pub title: Text,
    pub company: &'static str,
    pub date: Text,
    pub tasks: TextList,
}

pub static EXPERIENCES: &[Experience] = &[Experience {
    id: "hdm",
    title: Text::new("Stagiaire Développeur Full-stack", "Full-stack Developer Intern"),
    company: "hdm network",
    date: Text::new("03-02-25 au 25-04-25", "02/03/25 to 04/25/25"),
    tasks: TextList::new(
        &[
            "Développement de nouvelles fonctionnalités sur My Web Companion",
            "Implémentation d'un chronomètre avec notifications",
            "Création d'un outil météo intégré à une API externe",
            "Correction de bugs, optimisation des performances",
            "Participation aux code reviews et mises en production",
        ],
        &[
            "Development of new features on My Web Companion",
            "Implementation of a timer with notifications",
            "Creation of a weather tool integrated with an external API",
            "Bug fixes, performance optimization",
            "Participation in code reviews and production deployments",
        ],
    ),
}];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub id: &'static str,
    pub degree: Text,
    pub institution: &'static str,
    pub date: Text,
    pub description: Option<Text>,
}

pub static EDUCATIONS: &[Education] = &[Education {
    id: "bachelor",
    degree: Text::new("Bachelier en Informatique de gestion", "Bachelor in Business Computing"),
    institution: "EAFC UCCLE",
    date: Text::same("2022-2025"),
    description: Some(Text::new(
        "Formation complète en développement web, programmation orientée objet, bases de données et gestion de projets informatiques.",
        "Comprehensive training in web development, object-oriented programming, databases, and IT project management.",
    )),
}];

/// Every displayable text of the content store, labelled for diagnostics.
#[cfg(test)]
pub fn all_texts() -> Vec<(String, Text)> {
    let mut out = Vec::new();
    for item in NAV_ITEMS {
        out.push((format!("nav:{}", item.id), item.label));
    }
    for (i, text) in ABOUT_HIGHLIGHTS.iter().enumerate() {
        out.push((format!("about:{i}"), *text));
    }
    for p in PROJECTS {
        out.push((format!("project:{}:title", p.id), p.title));
        out.push((format!("project:{}:description", p.id), p.description));
        out.push((format!("project:{}:kind", p.id), p.kind.label()));
    }
    for c in SKILL_CATEGORIES {
        out.push((format!("skills:{}", c.id), c.title));
    }
    for e in EXPERIENCES {
        out.push((format!("experience:{}:title", e.id), e.title));
        out.push((format!("experience:{}:date", e.id), e.date));
    }
    for e in EDUCATIONS {
        out.push((format!("education:{}:degree", e.id), e.degree));
        out.push((format!("education:{}:date", e.id), e.date));
        if let Some(d) = e.description {
            out.push((format!("education:{}:description", e.id), d));
        }
    }
    out
}

/// Every bullet list of the content store.
#[cfg(test)]
pub fn all_lists() -> Vec<(String, TextList)> {
    let mut out = Vec::new();
    for p in PROJECTS {
        if let Some(features) = p.features {
            out.push((format!("project:{}:features", p.id), features));
        }
    }
    for e in EXPERIENCES {
        out.push((format!("experience:{}:tasks", e.id), e.tasks));
    }
    out
}
