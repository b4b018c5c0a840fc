//! Hard-coded profile tables.

use super::ExperiencePreview;
use crate::model::experience::{ExperienceEntry, ExperienceSection};

pub const OWNER_NAME: &str = "Johannes Johnson";
pub const TAGLINE: &str = "A dashboard view of my work: projects, measurable impact, and the tools I use to build data-driven solutions.";
pub const STATUS: &str = "Open to opportunities";
pub const STATUS_DETAIL: &str = "Data Analyst / Data Science / BI roles";

pub const EMAIL: &str = "johannes.shelson12@gmail.com";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/johannes-johnson-882636257/";
pub const GITHUB_URL: &str = "https://github.com/JOHANNES-SHELSON-J";
pub const RESUME_HREF: &str = "/resume/johannes-johnson-data-analyst.pdf";

pub const FOCUS: &[&str] = &["SQL Analytics", "Dashboards", "ML Basics", "Data Modeling"];
pub const HOME_STACK: &[&str] = &["Python", "PostgreSQL", "Power BI", "Pandas", "Scikit-learn"];

pub const KPIS: &[(&str, &str)] = &[
    ("50K+", "Records Processed"),
    ("5+", "Projects Built"),
    ("10+", "Tools & Technologies"),
];

pub const SKILL_GROUPS: &[(&str, &str, &[&str])] = &[
    (
        "Programming & Frontend",
        "Languages and UI technologies",
        &["Python", "SQL", "R", "HTML", "CSS", "Bootstrap", "Tailwind CSS"],
    ),
    (
        "Data Analysis",
        "Cleaning, EDA, modeling foundations",
        &[
            "Pandas",
            "NumPy",
            "SciPy",
            "Scikit-learn",
            "EDA",
            "Data Cleaning",
            "Statistical Analysis",
            "Matplotlib",
            "Seaborn",
        ],
    ),
    (
        "Visualization & BI",
        "Dashboards and reporting tools",
        &["Power BI", "Tableau", "Excel", "Power Query", "DAX"],
    ),
    (
        "Databases & Big Data",
        "Storage and distributed systems",
        &[
            "PostgreSQL",
            "MySQL",
            "Snowflake",
            "Apache Spark (PySpark)",
            "Hadoop (HDFS / MapReduce)",
        ],
    ),
    ("Cloud", "Cloud data services", &["AWS S3", "AWS EC2"]),
    (
        "Concepts",
        "Architectural and data engineering concepts",
        &[
            "ETL Pipelines",
            "Data Modeling (Star Schema)",
            "Data Warehousing",
            "Batch Processing",
        ],
    ),
    (
        "Tools",
        "Daily workflow tools",
        &["Git", "Jupyter Notebook", "VS Code", "Google Colab"],
    ),
    (
        "Project Management",
        "Collaboration and delivery systems",
        &["Jira", "Confluence", "Agile / Scrum"],
    ),
    (
        "Soft Skills",
        "Professional strengths",
        &[
            "Analytical Thinking",
            "Problem Solving",
            "Stakeholder Communication",
            "Team Collaboration",
        ],
    ),
];

pub struct ExperienceRow {
    pub section: ExperienceSection,
    pub org: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub dates: &'static str,
    pub bullets: &'static [&'static str],
}

impl ExperienceRow {
    pub fn to_entry(&self) -> ExperienceEntry {
        ExperienceEntry {
            section: self.section,
            org: self.org.to_string(),
            role: self.role.to_string(),
            location: self.location.to_string(),
            dates: self.dates.to_string(),
            bullets: self.bullets.iter().map(|b| (*b).to_string()).collect(),
        }
    }
}

pub const EXPERIENCE: &[ExperienceRow] = &[
    ExperienceRow {
        section: ExperienceSection::Professional,
        org: "University of Houston–Clear Lake",
        role: "Graduate Teaching Assistant",
        location: "Houston, TX",
        dates: "Jan 2026 – May 2026",
        bullets: &[
            "Supported 60+ students in analytical coursework by clarifying business requirements and evaluation criteria.",
            "Reviewed 100+ submissions and implemented structured feedback frameworks, improving reporting clarity by ~20%.",
            "Facilitated communication between faculty and students to align expectations and resolve requirement gaps.",
        ],
    },
    ExperienceRow {
        section: ExperienceSection::Professional,
        org: "University of Houston–Clear Lake (Neumann Library)",
        role: "Student Assistant, Circulation Desk",
        location: "Houston, TX",
        dates: "Oct 2024 – Dec 2025",
        bullets: &[
            "Managed 200+ daily service transactions while assisting 100+ patrons weekly in resolving service requests.",
            "Identified workflow inefficiencies and contributed to process adjustments that reduced wait time by ~15%.",
            "Supported campus initiatives contributing to a 20% increase in student engagement.",
        ],
    },
    ExperienceRow {
        section: ExperienceSection::Professional,
        org: "University of Houston",
        role: "Data Science Intern",
        location: "Houston, TX",
        dates: "Apr 2025 – Jun 2025",
        bullets: &[
            "Analyzed 20,000+ records to identify performance trends and support data-driven decision-making.",
            "Collaborated with stakeholders to translate business objectives into analytical requirements.",
            "Improved data consistency by ~30% through validation and structured data governance practices.",
            "Delivered executive-ready visual reports summarizing insights and actionable recommendations.",
        ],
    },
    ExperienceRow {
        section: ExperienceSection::Professional,
        org: "PwC India",
        role: "Technology Consulting Trainee (Business & Data)",
        location: "Chennai, India",
        dates: "Jan 2023 – Dec 2023",
        bullets: &[
            "Completed 12-month structured training in SDLC, Agile/Scrum, and business systems analysis methodologies.",
            "Developed SQL-based reports from 5,000+ row datasets to support simulated client decision-making.",
            "Solved 10+ consulting case scenarios involving process analysis, gap identification, and improvement recommendations.",
            "Participated in requirement elicitation and documentation aligned with stakeholder objectives.",
        ],
    },
    ExperienceRow {
        section: ExperienceSection::Volunteering,
        org: "St. John's Church, New Perungalathur",
        role: "Outreach Duties and Volunteer",
        location: "Chennai, India",
        dates: "05/2021 – 04/2023",
        bullets: &[
            "Engaged community in outreach, boosting participation by 30% and enhancing volunteer execution.",
            "Coordinated with a volunteer team of 8–10 members to streamline event logistics and communication.",
        ],
    },
    ExperienceRow {
        section: ExperienceSection::Volunteering,
        org: "LEO Club of Rajalakshmi Engineering College",
        role: "Volunteer",
        location: "Chennai, India",
        dates: "12/2020 – 11/2023",
        bullets: &[
            "Coordinated and participated in 12+ community outreach events, increasing student involvement by over 25%.",
            "Collaborated with 20+ volunteers to organize workshops, charity drives, and leadership initiatives.",
            "Played a key role in event planning and logistics, resulting in smoother execution and higher attendance.",
        ],
    },
];

pub const EXPERIENCE_PREVIEW: &[ExperiencePreview] = &[
    ExperiencePreview {
        role: "Graduate Teaching Assistant",
        org: "University of Houston–Clear Lake",
        location: "Houston, TX",
        dates: "Jan 2026 – May 2026",
        bullets: &[
            "Supported 60+ students by clarifying requirements and evaluation criteria for analytical coursework.",
            "Reviewed 100+ submissions and applied structured feedback, improving reporting clarity by ~20%.",
            "Facilitated communication between faculty and students to align expectations and resolve gaps.",
        ],
    },
    ExperiencePreview {
        role: "Student Assistant, Circulation Desk",
        org: "UHCL Neumann Library",
        location: "Houston, TX",
        dates: "Oct 2024 – Dec 2025",
        bullets: &[
            "Managed 200+ daily service transactions and assisted 100+ patrons weekly with service requests.",
            "Identified workflow inefficiencies and supported process improvements that reduced wait time by ~15%.",
            "Contributed to campus initiatives that helped improve student engagement by ~20%.",
        ],
    },
];
