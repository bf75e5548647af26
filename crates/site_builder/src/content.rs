//! The static data the pages render. Everything here is presentational;
//! nothing is fetched or computed at runtime except the footer year.

pub struct Profile {
    pub name: &'static str,
    pub title_line: &'static str,
    pub tagline: &'static str,
    pub about: [&'static str; 2],
    pub email: &'static str,
    pub office: &'static str,
    pub publication_index_url: &'static str,
    pub university: &'static str,
    pub university_url: &'static str,
}

pub struct ResearchArea {
    pub glyph: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

pub struct Publication {
    pub title: &'static str,
    pub venue: &'static str,
    pub year: u16,
    pub citations: u32,
}

pub const PROFILE: Profile = Profile {
    name: "Dra. Mariana Costa",
    title_line: "Professor of Computer Science",
    tagline: "I study how adaptive systems can make learning technologies aware of \
              their context, their users, and the networks they run on.",
    about: [
        "I am a full professor at the Institute of Informatics of the Universidade \
         Federal do Vale do Sul, where I lead the Adaptive Systems Group. My work \
         sits at the intersection of ubiquitous computing and technology-enhanced \
         learning, with a focus on systems that adapt content and infrastructure \
         to the learner's context.",
        "Over the last two decades I have supervised more than forty graduate \
         students and coordinated national research projects on context-aware \
         learning environments, network management for campus-scale deployments, \
         and accessible interfaces for distance education.",
    ],
    email: "mariana.costa@ufvs.edu.br",
    office: "Room 334, Institute of Informatics",
    publication_index_url: "https://orcid.org/0000-0002-1825-0097",
    university: "Universidade Federal do Vale do Sul",
    university_url: "https://www.ufvs.edu.br/",
};

pub const RESEARCH_AREAS: &[ResearchArea] = &[
    ResearchArea {
        glyph: "🎓",
        title: "Technology-Enhanced Learning",
        description: "Adaptive learning platforms that tailor content, pacing and \
                      assessment to each student's profile.",
    },
    ResearchArea {
        glyph: "🌐",
        title: "Ubiquitous Computing",
        description: "Context-aware services that follow users across devices, \
                      networks and physical spaces.",
    },
    ResearchArea {
        glyph: "📡",
        title: "Computer Networks",
        description: "Management and monitoring of campus-scale infrastructure, \
                      from wireless coverage to traffic policy.",
    },
    ResearchArea {
        glyph: "🧩",
        title: "Adaptive Hypermedia",
        description: "Content models that reorganize themselves around the \
                      reader's goals and prior knowledge.",
    },
    ResearchArea {
        glyph: "♿",
        title: "Accessible Interfaces",
        description: "Interaction design that keeps distance education usable for \
                      students with sensory impairments.",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "ContextCampus",
        description: "A campus-wide testbed that adapts study material delivery to \
                      the student's location, device and connectivity.",
        tags: &["ubiquitous computing", "mobile learning", "testbed"],
    },
    Project {
        title: "TutorWeave",
        description: "An adaptive tutoring engine that weaves open educational \
                      resources into personalized study plans.",
        tags: &["adaptive hypermedia", "recommender systems"],
    },
    Project {
        title: "NetSense",
        description: "Monitoring tooling that surfaces classroom network health to \
                      instructors in real time.",
        tags: &["network management", "visualization"],
    },
];

pub const PUBLICATIONS: &[Publication] = &[
    Publication {
        title: "Context-Aware Delivery of Study Material in Campus Networks",
        venue: "Computers & Education",
        year: 2021,
        citations: 87,
    },
    Publication {
        title: "A Model for Adaptive Hypermedia in Distance Education",
        venue: "IEEE Transactions on Learning Technologies",
        year: 2019,
        citations: 134,
    },
    Publication {
        title: "Accessibility Patterns for Mobile Learning Interfaces",
        venue: "Universal Access in the Information Society",
        year: 2023,
        citations: 29,
    },
];

// Strings of the assistant shell page. The interactive terminal front end
// shows the same texts; this page is the inert rendering of that chrome.
pub const ASSISTANT_NAME: &str = "Aurora";
pub const MODEL_LABEL: &str = "Flash";
pub const BANNER_TEXT: &str = "Meet Aurora Pro. Our most capable model is now available to try.";
pub const WELCOME_GREETING: &str = "Hello, Daniel";
pub const INPUT_PLACEHOLDER: &str = "Ask Aurora";
pub const DISCLAIMER: &str = "Aurora can make mistakes, so double-check it.";

pub const SIDEBAR_ENTRIES: &[(&str, &str)] = &[
    ("☰", "Menu"),
    ("✚", "New chat"),
    ("🕘", "History"),
    ("⚙", "Settings"),
];
