use dioxus::prelude::*;

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    Fr,
    En,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::Fr, Lang::En];

    pub fn code(self) -> &'static str {
        match self {
            Lang::Fr => "fr",
            Lang::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "fr" | "fr-fr" | "fr-be" => Some(Lang::Fr),
            "en" | "en-us" | "en-gb" => Some(Lang::En),
            _ => None,
        }
    }

    /// Like `from_code`, but anything unrecognised is French.
    pub fn resolve_code(code: &str) -> Self {
        Self::from_code(code).unwrap_or_default()
    }
}

/// A value carried in both languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bilingual<T> {
    pub fr: T,
    pub en: T,
}

impl<T> Bilingual<T> {
    pub const fn new(fr: T, en: T) -> Self {
        Self { fr, en }
    }

    pub fn get(&self, lang: Lang) -> &T {
        match lang {
            Lang::Fr => &self.fr,
            Lang::En => &self.en,
        }
    }
}

impl<T: Copy> Bilingual<T> {
    /// Same language and text in both slots.
    pub const fn same(value: T) -> Self {
        Self {
            fr: value,
            en: value,
        }
    }
}

pub type Text = Bilingual<&'static str>;
pub type TextList = Bilingual<&'static [&'static str]>;

pub fn resolve<T: Copy>(record: &Bilingual<T>, lang: Lang) -> T {
    *record.get(lang)
}

/// Provide `Signal<Lang>` to the component tree.
#[component]
pub fn I18nProvider(#[props(default)] initial: Lang, children: Element) -> Element {
    let lang = use_signal(move || initial);
    use_context_provider(|| lang);

    rsx! { {children} }
}

pub fn use_lang() -> Signal<Lang> {
    if let Some(sig) = try_use_context::<Signal<Lang>>() {
        return sig;
    }

    // Fallback for SSR or mis-ordered providers to avoid panics in production.
    tracing::warn!("i18n: missing I18nProvider context, using local Lang::Fr signal");
    use_signal(|| Lang::Fr)
}

pub fn set_lang(mut lang_sig: Signal<Lang>, lang: Lang) {
    if lang_sig() != lang {
        tracing::debug!("i18n: switching locale to {}", lang.code());
        lang_sig.set(lang);
    }
}

/// Every label key the interface uses.
pub const KEYS: &[&str] = &[
    "nav.toggle_menu",
    "nav.toggle_theme",
    "loading.name",
    "hero.role",
    "hero.greeting",
    "hero.cta.projects",
    "hero.cta.cv",
    "about.title",
    "about.heading",
    "about.p1",
    "about.p2",
    "about.portrait_alt",
    "skills.title",
    "skills.subtitle",
    "projects.title",
    "projects.subtitle",
    "projects.close",
    "projects.tab.features",
    "projects.tab.tech",
    "projects.no_features",
    "projects.github",
    "projects.demo",
    "experience.title",
    "experience.subtitle",
    "education.title",
    "contact.title",
    "contact.subtitle",
    "contact.info",
    "contact.phone",
    "contact.social",
    "contact.form.title",
    "contact.form.name",
    "contact.form.name_ph",
    "contact.form.email",
    "contact.form.email_ph",
    "contact.form.subject",
    "contact.form.subject_ph",
    "contact.form.message",
    "contact.form.message_ph",
    "contact.form.send",
    "contact.form.sending",
    "contact.status.required",
    "contact.status.invalid_email",
    "contact.status.sent",
    "contact.status.failed",
    "footer.credit",
    "footer.rights",
];

fn entry(key: &str) -> Option<Text> {
    let text = match key {
        // Nav / common
        "nav.toggle_menu" => Text::new("Ouvrir le menu", "Toggle menu"),
        "nav.toggle_theme" => Text::new("Changer de thème", "Toggle theme"),
        "loading.name" => Text::same("Landry Tido"),

        // Hero / about
        "hero.role" => Text::new(
            "Développeur Full-stack | Spécialiste React & Spring Boot",
            "Full-stack Developer | React & Spring Boot Specialist",
        ),
        "hero.greeting" => Text::new("Bonjour, je suis", "Hi, I'm"),
        "hero.cta.projects" => Text::new("Voir mes projets", "View my projects"),
        "hero.cta.cv" => Text::new("Télécharger mon CV", "Download my resume"),
        "about.title" => Text::new("À Propos", "About Me"),
        "about.heading" => Text::new(
            "Passionné par le développement web et l'innovation",
            "Passionate about web development and innovation",
        ),
        "about.p1" => Text::new(
            "Passionné par le développement web et l'innovation technologique, je conçois des applications performantes et ergonomiques en utilisant les dernières technologies. Avec une expertise en React, Spring Boot, TypeScript et GraphQL, je crée des solutions robustes et scalables.",
            "Passionate about web development and technological innovation, I design high-performance and ergonomic applications using the latest technologies. With expertise in React, Spring Boot, TypeScript, and GraphQL, I create robust and scalable solutions.",
        ),
        "about.p2" => Text::new(
            "Actuellement, je travaille en entreprise sur des outils numériques avancés, tout en poursuivant mon bachelier en informatique de gestion.",
            "Currently, I work in a company on advanced digital tools, while pursuing my bachelor's degree in business computing.",
        ),
        "about.portrait_alt" => Text::new("Portrait de Landry Tido", "Portrait of Landry Tido"),

        // Skills / projects
        "skills.title" => Text::new("Compétences", "Skills"),
        "skills.subtitle" => Text::new(
            "Mon expertise technique couvre différents domaines du développement web, du frontend au backend.",
            "My technical expertise covers different areas of web development, from frontend to backend.",
        ),
        "projects.title" => Text::new("Projets", "Projects"),
        "projects.subtitle" => Text::new(
            "Une sélection de mes projets récents réalisés en stage, à l'université et par passion personnelle.",
            "A selection of my recent projects carried out during internships, at university, and through personal passion.",
        ),
        "projects.close" => Text::new("Fermer", "Close"),
        "projects.tab.features" => Text::new("Fonctionnalités clés", "Key features"),
        "projects.tab.tech" => Text::new("Technologies utilisées", "Technologies used"),
        "projects.no_features" => Text::new(
            "Pas encore de fonctionnalités détaillées pour ce projet.",
            "No detailed features for this project yet.",
        ),
        "projects.github" => Text::same("GitHub"),
        "projects.demo" => Text::new("Démo", "Demo"),

        // Experience / education
        "experience.title" => Text::new("Expérience", "Experience"),
        "experience.subtitle" => Text::new(
            "Mon parcours professionnel et mes expériences en développement.",
            "My professional journey and experiences in development.",
        ),
        "education.title" => Text::new("Formation", "Education"),

        // Contact
        "contact.title" => Text::same("Contact"),
        "contact.subtitle" => Text::new(
            "Vous avez un projet en tête ou une proposition ? N'hésitez pas à me contacter !",
            "Do you have a project in mind or a proposal? Feel free to contact me!",
        ),
        "contact.info" => Text::new("Informations de contact", "Contact Information"),
        "contact.phone" => Text::new("Téléphone", "Phone"),
        "contact.social" => Text::new("Réseaux sociaux", "Social Media"),
        "contact.form.title" => Text::new("Envoyez-moi un message", "Send me a message"),
        "contact.form.name" => Text::new("Nom", "Name"),
        "contact.form.name_ph" => Text::new("Votre nom", "Your name"),
        "contact.form.email" => Text::same("Email"),
        "contact.form.email_ph" => Text::new("Votre email", "Your email"),
        "contact.form.subject" => Text::new("Sujet", "Subject"),
        "contact.form.subject_ph" => Text::new(
            "Exemple : Demande de collaboration",
            "Example: Collaboration request",
        ),
        "contact.form.message" => Text::same("Message"),
        "contact.form.message_ph" => Text::new("Votre message...", "Your message..."),
        "contact.form.send" => Text::new("Envoyer le message", "Send message"),
        "contact.form.sending" => Text::new("Envoi…", "Sending…"),
        "contact.status.required" => Text::new(
            "Veuillez remplir tous les champs obligatoires.",
            "Please fill in all required fields.",
        ),
        "contact.status.invalid_email" => Text::new(
            "Veuillez entrer une adresse email valide.",
            "Please enter a valid email address.",
        ),
        "contact.status.sent" => Text::new(
            "Votre message a été envoyé avec succès !",
            "Your message has been sent successfully!",
        ),
        "contact.status.failed" => Text::new(
            "Une erreur est survenue lors de l'envoi du message. Veuillez réessayer.",
            "An error occurred while sending the message. Please try again.",
        ),

        // Footer
        "footer.credit" => Text::new(
            "Développé avec passion par Landry Tido",
            "Developed with passion by Landry Tido",
        ),
        "footer.rights" => Text::new("Tous droits réservés", "All rights reserved"),

        _ => return None,
    };
    Some(text)
}

/// Translate a label key. Unknown keys render as the key itself.
pub fn t(lang: Lang, key: &str) -> String {
    match entry(key) {
        Some(text) => resolve(&text, lang).to_string(),
        None => key.to_string(),
    }
}
