use chrono::NaiveDate;

use crate::modules::experience::application::domain::entities::{ExperienceType, NewExperience};
use crate::modules::personal_info::application::domain::entities::NewPersonalInfo;
use crate::modules::project::application::domain::entities::{
    NewProject, DEFAULT_PROJECT_IMAGE, DEFAULT_PROJECT_URL,
};
use crate::modules::skill::application::domain::entities::{NewSkill, SkillCategory};
use crate::modules::technology::application::domain::entities::{
    NewTechnology, TechnologyCategory,
};
use crate::shared::domain::{Icon, DEFAULT_COLOR};

use super::entities::PortfolioSeed;

pub fn demo_portfolio() -> PortfolioSeed {
    PortfolioSeed {
        skills: demo_skills(),
        projects: demo_projects(),
        experiences: demo_experiences(),
        technologies: demo_technologies(),
        personal_info: NewPersonalInfo::placeholder(),
    }
}

fn skill(name: &str, level: u8, category: SkillCategory, icon: Icon, order: i32) -> NewSkill {
    NewSkill {
        name: name.to_string(),
        level,
        category,
        icon,
        image: None,
        color: DEFAULT_COLOR.to_string(),
        status: true,
        order,
    }
}

fn demo_skills() -> Vec<NewSkill> {
    use SkillCategory::*;

    vec![
        skill("React.js", 95, Frontend, Icon::Code, 1),
        skill("Node.js", 90, Backend, Icon::Server, 2),
        skill("MongoDB", 85, Database, Icon::Database, 3),
        skill("Express.js", 88, Backend, Icon::Server, 4),
        skill("TypeScript", 82, Frontend, Icon::Code, 5),
        skill("Next.js", 88, Frontend, Icon::Code, 6),
        skill("React Native", 75, Mobile, Icon::Smartphone, 7),
        skill("PostgreSQL", 80, Database, Icon::Database, 8),
    ]
}

fn project(
    title: &str,
    description: &str,
    technologies: &[&str],
    featured: bool,
    top_priority: i32,
) -> NewProject {
    NewProject {
        title: title.to_string(),
        description: description.to_string(),
        image: DEFAULT_PROJECT_IMAGE.to_string(),
        technologies: strings(technologies),
        live_url: DEFAULT_PROJECT_URL.to_string(),
        github_url: DEFAULT_PROJECT_URL.to_string(),
        featured,
        status: true,
        top_priority,
    }
}

fn demo_projects() -> Vec<NewProject> {
    vec![
        project(
            "E-Commerce Platform",
            "Full-stack e-commerce solution with React, Node.js, and MongoDB. Features include user authentication, payment integration, and admin dashboard.",
            &["React", "Node.js", "MongoDB", "Stripe"],
            true,
            3,
        ),
        project(
            "Task Management App",
            "Collaborative task management application with real-time updates using Socket.io and React.",
            &["React", "Socket.io", "Express", "PostgreSQL"],
            true,
            2,
        ),
        project(
            "Social Media Dashboard",
            "Analytics dashboard for social media management with data visualization and reporting features.",
            &["Next.js", "TypeScript", "Chart.js", "MongoDB"],
            false,
            1,
        ),
    ]
}

fn demo_experiences() -> Vec<NewExperience> {
    vec![
        NewExperience {
            company: "ts4u".to_string(),
            position: "MERN Stack Developer Intern".to_string(),
            kind: ExperienceType::Internship,
            start_date: date(2024, 3, 1),
            end_date: Some(date(2024, 9, 1)),
            current: false,
            description: "Started my journey as a MERN stack developer intern, learning and contributing to various web development projects.".to_string(),
            achievements: strings(&[
                "Learned full-stack development with MERN stack",
                "Contributed to multiple client projects",
                "Gained experience in modern web technologies",
                "Worked in an agile development environment",
            ]),
            technologies: strings(&["React", "Node.js", "MongoDB", "Express.js", "JavaScript"]),
            team_size: Some("5-8 developers".to_string()),
            location: Some("Remote".to_string()),
            company_website: None,
            order: 2,
        },
        NewExperience {
            company: "sdb it".to_string(),
            position: "Full Stack Developer".to_string(),
            kind: ExperienceType::FullTime,
            start_date: date(2024, 9, 1),
            end_date: None,
            current: true,
            description: "Working as a full-time MERN stack developer, collaborating with a team of 10-12 developers on various enterprise projects.".to_string(),
            achievements: strings(&[
                "Contributing to large-scale web applications",
                "Collaborating with 10-12 developers in cross-functional teams",
                "Implementing modern development practices",
                "Mentoring junior developers",
                "Leading feature development initiatives",
            ]),
            technologies: strings(&[
                "React",
                "Next.js",
                "Node.js",
                "MongoDB",
                "TypeScript",
                "Express.js",
            ]),
            team_size: Some("10-12 developers".to_string()),
            location: Some("Remote".to_string()),
            company_website: None,
            order: 1,
        },
    ]
}

fn technology(
    name: &str,
    category: TechnologyCategory,
    icon: Icon,
    color: &str,
    order: i32,
) -> NewTechnology {
    NewTechnology {
        name: name.to_string(),
        category,
        icon,
        color: color.to_string(),
        description: None,
        order,
    }
}

fn demo_technologies() -> Vec<NewTechnology> {
    use TechnologyCategory::*;

    vec![
        technology("React", Frontend, Icon::Code, "#61DAFB", 1),
        technology("Next.js", Frontend, Icon::Code, "#000000", 2),
        technology("TypeScript", Frontend, Icon::Code, "#3178C6", 3),
        technology("JavaScript", Frontend, Icon::Code, "#F7DF1E", 4),
        technology("Node.js", Backend, Icon::Server, "#339933", 5),
        technology("Express.js", Backend, Icon::Server, "#000000", 6),
        technology("MongoDB", Database, Icon::Database, "#47A248", 7),
        technology("PostgreSQL", Database, Icon::Database, "#336791", 8),
        technology("React Native", Mobile, Icon::Smartphone, "#61DAFB", 9),
        technology("Tailwind CSS", Frontend, Icon::Code, "#06B6D4", 10),
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}
