//! Hard-coded display content: identity, work history, projects and skills.
//! Render-only; nothing here changes at runtime.

pub const FULL_NAME: &str = "Koshal Kumar";
pub const FIRST_NAME: &str = "Koshal";
pub const LAST_NAME: &str = "Kumar";
pub const TAGLINE: &str = "Developer & AI Developer";
pub const FOOTER_TAGLINE: &str = "Developer & Data Scientist";
pub const SUMMARY: &str = "Passionate AI/ML Developer with expertise in designing and \
deploying scalable machine learning solutions, hands-on experience in computer vision, \
natural language processing, LLM and end-to-end ML deployment.";

pub const EMAIL: &str = "koshalkumar0304@gmail.com";
pub const PHONE: &str = "+91 8218806349";
pub const PHONE_HREF: &str = "tel:+918218806349";
pub const GITHUB_URL: &str = "https://github.com/koshal0304";
pub const GITHUB_LABEL: &str = "github.com/koshal0304";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/koshal-kumar-970233240";
pub const LINKEDIN_LABEL: &str = "linkedin.com/in/koshal-kumar-970233240";

pub struct ExperienceEntry {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub duration: &'static str,
    pub achievements: &'static [&'static str],
    pub skills: &'static [&'static str],
}

pub const EXPERIENCES: &[ExperienceEntry] = &[ExperienceEntry {
    title: "Engineering Intern",
    company: "Ripik.ai",
    location: "Noida",
    duration: "Present",
    achievements: &[
        "AI-Powered Detection: Engineered a Python system using Google Gemini API and \
         multithreading to automate analysis of 100+ images/day, compressing files (10% JPEG \
         quality) and parallelizing uploads (150 threads) for 80% faster manual review. \
         Structured JSON outputs with AI explanations enabled rapid auditing.",
        "Cost-Optimized Cloud Storage: Designed an AWS S3 image compression pipeline with \
         Boto3 and PIL, reducing storage costs by 60% via metadata-preserving compression \
         (40% quality) and parallel processing (150 workers). Tracked 10K+ files via \
         automated logs.",
        "Container Health Monitoring System: Developed and implemented an AWS Lambda \
         monitoring solution that checks critical container health status and automatically \
         sends alerts through Slack and SNS channels, improving system reliability and \
         reducing downtime through proactive monitoring.",
        "Automated data pipelines for preprocessing and transforming raw data, reducing \
         manual effort by 30% and improving workflow efficiency.",
    ],
    skills: &["Python", "Computer Vision", "Streamlit", "PyTorch", "Git"],
}];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub live_url: &'static str,
    pub code_url: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Personal Knowledge Assistant",
        description: "AI-powered knowledge management system that helps users organize, \
                      retrieve, and generate insights from their personal documents and notes.",
        image: "https://images.pexels.com/photos/7567434/pexels-photo-7567434.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        technologies: &["Python", "Streamlit", "LangChain", "OpenAI", "Vector DB"],
        live_url: "https://personal-knowledge-assistant-g.streamlit.app/",
        code_url: Some("https://github.com/koshal0304/personal-knowledge-assistant"),
    },
    Project {
        title: "Webcam YOLO Object Detector",
        description: "Real-time object detection application using YOLO algorithm to identify \
                      objects through webcam feed with high accuracy and performance.",
        image: "https://images.pexels.com/photos/5483077/pexels-photo-5483077.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        technologies: &["Python", "Streamlit", "OpenCV", "YOLO", "Computer Vision"],
        live_url: "https://webcamyolodetector-l.streamlit.app/",
        code_url: Some("https://github.com/koshal0304/webcamyolodetector"),
    },
    Project {
        title: "Talent Scout AI Hiring Assistant",
        description: "AI-powered application that helps recruiters identify potential \
                      candidates based on resume analysis and job descriptions, streamlining \
                      the hiring process.",
        image: "https://images.pexels.com/photos/3184405/pexels-photo-3184405.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        technologies: &["Python", "Streamlit", "NLP", "Machine Learning", "Document Processing"],
        live_url: "https://talentscoutaihiringassistant.streamlit.app/",
        code_url: Some("https://github.com/koshal0304/talent-scout-ai"),
    },
];

pub struct SkillCategory {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        category: "Languages",
        skills: &["Python", "JavaScript", "TypeScript", "SQL", "HTML", "CSS", "Java", "C++"],
    },
    SkillCategory {
        category: "Frameworks & Libraries",
        skills: &[
            "React", "Next.js", "Node.js", "Express", "Streamlit", "Flask", "Django",
            "Tailwind CSS", "Bootstrap",
        ],
    },
    SkillCategory {
        category: "Data Science & ML",
        skills: &[
            "Pandas", "NumPy", "scikit-learn", "TensorFlow", "PyTorch", "Matplotlib",
            "Seaborn", "LangChain", "Hugging Face",
        ],
    },
    SkillCategory {
        category: "Databases",
        skills: &[
            "PostgreSQL", "MySQL", "MongoDB", "Redis", "SQLite", "Supabase", "Firebase",
            "Vector Databases",
        ],
    },
    SkillCategory {
        category: "AI & Machine Learning",
        skills: &[
            "Computer Vision", "Natural Language Processing", "Generative AI",
            "Large Language Models", "YOLO", "OpenCV", "Transformers",
            "Reinforcement Learning",
        ],
    },
    SkillCategory {
        category: "Cloud & DevOps",
        skills: &[
            "AWS", "Google Cloud", "Docker", "Kubernetes", "CI/CD", "GitHub Actions",
            "Vercel", "Netlify",
        ],
    },
    SkillCategory {
        category: "Tools & Platforms",
        skills: &[
            "Git", "GitHub", "Jupyter", "VS Code", "Postman", "Figma", "Notion", "Jira",
            "Slack",
        ],
    },
];

/// Accent palette used by the hero tech cards.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Accent {
    Blue,
    Purple,
    Cyan,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Self::Blue => "accent-blue",
            Self::Purple => "accent-purple",
            Self::Cyan => "accent-cyan",
        }
    }

    pub fn glow_rgb(self) -> &'static str {
        match self {
            Self::Blue => "59, 130, 246",
            Self::Purple => "147, 51, 234",
            Self::Cyan => "6, 182, 212",
        }
    }
}

pub struct TechHighlight {
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

pub const TECH_HIGHLIGHTS: &[TechHighlight] = &[
    TechHighlight {
        title: "Web Development",
        description: "Building modern, responsive web applications with cutting-edge technologies.",
        accent: Accent::Blue,
    },
    TechHighlight {
        title: "Data Science",
        description: "Extracting insights and building models from complex datasets.",
        accent: Accent::Purple,
    },
    TechHighlight {
        title: "AI & ML",
        description: "Creating intelligent solutions with machine learning algorithms.",
        accent: Accent::Cyan,
    },
];

pub const PROFILE_IMAGE: &str = "/assets/profile.png";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_project_links_somewhere_live() {
        assert_eq!(PROJECTS.len(), 3);
        for project in PROJECTS {
            assert!(project.live_url.starts_with("https://"));
            assert!(!project.technologies.is_empty());
        }
    }

    #[test]
    fn skill_categories_are_non_empty() {
        assert_eq!(SKILL_CATEGORIES.len(), 7);
        for category in SKILL_CATEGORIES {
            assert!(!category.skills.is_empty());
        }
    }
}
