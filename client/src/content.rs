//! Static portfolio content rendered by the page.
//!
//! Everything here is read-only presentation data. Order in each slice is
//! render order.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Tint family used for badges, bullets, and highlighted values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Green,
    Indigo,
    Orange,
    Purple,
    Yellow,
}

impl Accent {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Indigo => "indigo",
            Self::Orange => "orange",
            Self::Purple => "purple",
            Self::Yellow => "yellow",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub generator: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub role: &'static str,
    /// Biography paragraph, rendered after the bold name.
    pub bio: &'static str,
    pub photo_src: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
    pub title: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub detail: &'static str,
    pub score: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub accent: Accent,
    pub link: Link,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AwardRank {
    FirstPlace,
    GlobalContributor,
    Finalist,
}

impl AwardRank {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstPlace => "1st Place",
            Self::GlobalContributor => "Global Contributor",
            Self::Finalist => "Finalist",
        }
    }

    #[must_use]
    pub fn accent(self) -> Accent {
        match self {
            Self::FirstPlace => Accent::Yellow,
            Self::GlobalContributor => Accent::Blue,
            Self::Finalist => Accent::Green,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Award {
    pub rank: AwardRank,
    pub title: &'static str,
    pub note: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    Location,
    Email,
    Phone,
    Github,
    Linkedin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contact {
    pub kind: ContactKind,
    pub label: &'static str,
    /// External profile URL; plain-text rows have none.
    pub href: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillGroup {
    pub heading: &'static str,
    pub accent: Accent,
    pub skills: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickFact {
    pub label: &'static str,
    pub value: &'static str,
    /// Highlight tint; `None` renders in the body text color.
    pub accent: Option<Accent>,
}

/// The full content set, in render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Portfolio {
    pub meta: SiteMeta,
    pub profile: Profile,
    pub experience: &'static [Experience],
    pub education: &'static [Education],
    pub projects: &'static [Project],
    pub awards: &'static [Award],
    pub contacts: &'static [Contact],
    pub skills: &'static [SkillGroup],
    pub quick_facts: &'static [QuickFact],
}

pub static PORTFOLIO: Portfolio = Portfolio {
    meta: SiteMeta { title: "Yash Portfolio", description: "Created by Yash", generator: "Yash.Singh" },
    profile: Profile {
        name: "Yash Singh",
        tagline: "Creating Human-Centric AI for Real-World Impact",
        role: "AI Engineer & Researcher",
        bio: "is an Indian software engineer and artificial intelligence researcher currently pursuing a \
              Bachelor of Engineering in Information Science and Engineering at B.M.S College of \
              Engineering, Bengaluru. He is recognized for his contributions to AI-powered civic \
              technology and emotion detection systems, with multiple hackathon victories and \
              open-source contributions to the machine learning community.",
        photo_src: "/yashpp.jpg",
    },
    experience: &[Experience {
        title: "AI Intern",
        organization: "Next Oar",
        period: "May 2025",
        description: "As an AI Intern at Next Oar, I developed a multi-layered relevance framework on top \
                      of vector databases to improve semantic retrieval precision in RAG systems. This \
                      involved designing relevance scoring logic that combines dense and sparse embeddings \
                      for context-aware results. I also contributed to the architecture of MCP (Model \
                      Control Protocol) servers, enabling modular, scalable deployment of AI services \
                      across distributed environments.",
    }],
    education: &[
        Education {
            degree: "Bachelor of Engineering",
            institution: "B.M.S College of Engineering",
            detail: "Information Science and Engineering \u{2022} Nov 2022 \u{2013} Present",
            score: "GPA: 9.45/10.0",
        },
        Education {
            degree: "Higher Secondary Certificate",
            institution: "DAV Public School, CBSE",
            detail: "2019 \u{2013} 2021",
            score: "Percentage: 94.4%",
        },
        Education {
            degree: "Secondary School Certificate",
            institution: "De Nobili School, CISCE",
            detail: "2019",
            score: "Percentage: 94%",
        },
    ],
    projects: &[
        Project {
            title: "AI-Powered Civic Issue Mapper",
            description: "A comprehensive multilingual data ingestion pipeline for real-time social media \
                          scraping and civic issue analysis. The system employs fine-tuned RoBERTa models \
                          for cross-lingual sentiment classification and integrates voice-based emotion \
                          detection. Features geospatial visualization using Folium with 2-level nested \
                          clustering (DBSCAN and K-Means) and a custom RAG pipeline for contextualized \
                          administrative summaries.",
            tags: &["Python", "RoBERTa", "DBSCAN", "K-Means", "RAG", "Folium"],
            accent: Accent::Indigo,
            link: Link { label: "civicIssue.app", href: "https://vikasya-codehers.vercel.app/" },
        },
        Project {
            title: "VibeSense \u{2013} AI-Driven Emotion Detection",
            description: "An advanced emotion detection system utilizing custom LSTM networks trained on \
                          diverse Indian accent datasets. Features intelligent voice assistance with \
                          context-aware responses, RAG framework integration, and XTTS-based voice cloning. \
                          Built with Next.js and FastAPI, deployed on AWS with reverse proxy and dynamic DNS.",
            tags: &["LSTM", "Next.js", "FastAPI", "AWS", "XTTS", "RAG"],
            accent: Accent::Purple,
            link: Link { label: "vibesense.app", href: "https://final-frontend-chi.vercel.app/" },
        },
        Project {
            title: "Quizzer \u{2013} Smart Quiz Platform",
            description: "A full-stack quiz system built with React and Flask REST API, featuring role-based \
                          dashboards, OTP authentication, and academic integrity monitoring through \
                          tab-switch detection. Includes intelligent question shuffling and dynamic \
                          leaderboards with CSV/PDF export capabilities.",
            tags: &["React", "Flask", "OTP Auth", "REST API", "PDF Export"],
            accent: Accent::Green,
            link: Link { label: "quizzer.site", href: "https://quizzer.site/" },
        },
    ],
    awards: &[
        Award {
            rank: AwardRank::FirstPlace,
            title: "AI Verse All-India Hackathon 2025",
            note: "72-hour national AI challenge",
        },
        Award {
            rank: AwardRank::FirstPlace,
            title: "Impact 2.0 Hackathon by Augment AI 2025",
            note: "24-hour social impact hackathon",
        },
        Award {
            rank: AwardRank::FirstPlace,
            title: "Rotech Hackathon by Rotract Club 2025",
            note: "12-hour social impact hackathon",
        },
        Award {
            rank: AwardRank::GlobalContributor,
            title: "First and only contributor on Kaggle to publish Indian Emotion Speech Dataset",
            note: "Groundbreaking resource for emotion recognition",
        },
        Award {
            rank: AwardRank::Finalist,
            title: "Techathon Gen AI Hackathon 2024",
            note: "Generative AI expertise showcase",
        },
    ],
    contacts: &[
        Contact { kind: ContactKind::Location, label: "Bengaluru, India", href: None },
        Contact { kind: ContactKind::Email, label: "er.yshsingh@gmail.com", href: None },
        Contact { kind: ContactKind::Phone, label: "+91 700 400 1927", href: None },
        Contact { kind: ContactKind::Github, label: "yash-github", href: Some("https://github.com/include-yash") },
        Contact {
            kind: ContactKind::Linkedin,
            label: "yash-linkedin",
            href: Some("https://www.linkedin.com/in/yash-singh-988aa525a/"),
        },
    ],
    skills: &[
        SkillGroup {
            heading: "Programming Languages",
            accent: Accent::Blue,
            skills: &["Java", "Python", "C++", "JavaScript", "SQL", "TypeScript"],
        },
        SkillGroup {
            heading: "Web Technologies",
            accent: Accent::Purple,
            skills: &["React", "Next.js", "Tailwind CSS", "Flask", "REST APIs", "FastAPI"],
        },
        SkillGroup {
            heading: "Tools & Databases",
            accent: Accent::Green,
            skills: &["Git", "Docker", "MongoDB", "PostgreSQL", "Redis", "VS Code"],
        },
        SkillGroup {
            heading: "AI/ML",
            accent: Accent::Orange,
            skills: &["TensorFlow", "PyTorch", "Scikit-learn", "Wav2Vec2", "Transformers"],
        },
    ],
    quick_facts: &[
        QuickFact { label: "Current Role:", value: "AI Intern at Next Oar", accent: Some(Accent::Blue) },
        QuickFact { label: "Education:", value: "B.E. Student", accent: None },
        QuickFact { label: "GPA:", value: "9.45/10.0", accent: Some(Accent::Green) },
        QuickFact { label: "Hackathon Wins:", value: "3 First Places", accent: Some(Accent::Yellow) },
    ],
};
