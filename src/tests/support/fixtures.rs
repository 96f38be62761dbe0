//! Sample records and drafts shared by service, route and client tests.

use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::{
    ContactDraft, ContactMessage, ContactStatus,
};
use crate::modules::experience::application::domain::entities::{
    Experience, ExperienceDraft, ExperienceType,
};
use crate::modules::personal_info::application::domain::entities::{
    PersonalInfo, PersonalInfoDraft, SocialLinks,
};
use crate::modules::project::application::domain::entities::{Project, ProjectDraft};
use crate::modules::skill::application::domain::entities::{Skill, SkillCategory, SkillDraft};
use crate::modules::technology::application::domain::entities::{
    Technology, TechnologyCategory, TechnologyDraft,
};
use crate::shared::domain::Icon;

fn timestamp() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap()
}

pub fn sample_project(title: &str, status: bool) -> Project {
    Project {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: format!("{title} description"),
        image: "/placeholder.svg?height=300&width=500".to_string(),
        technologies: vec!["React".to_string(), "Node.js".to_string()],
        live_url: "#".to_string(),
        github_url: "#".to_string(),
        featured: false,
        status,
        top_priority: 0,
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn project_draft(title: &str) -> ProjectDraft {
    ProjectDraft {
        title: title.to_string(),
        description: "Full-stack shop with payments".to_string(),
        image: "/placeholder.svg?height=300&width=500".to_string(),
        technologies: vec![
            "React".to_string(),
            "Node.js".to_string(),
            "MongoDB".to_string(),
            "Stripe".to_string(),
        ],
        live_url: "#".to_string(),
        github_url: "#".to_string(),
        featured: true,
        status: true,
        top_priority: 1,
    }
}

pub fn sample_skill(name: &str, order: i32) -> Skill {
    Skill {
        id: Uuid::new_v4(),
        name: name.to_string(),
        level: 80,
        category: SkillCategory::Frontend,
        icon: Icon::Code,
        image: None,
        color: "#3B82F6".to_string(),
        status: true,
        order,
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn skill_draft(name: &str, level: i64) -> SkillDraft {
    SkillDraft {
        name: name.to_string(),
        level,
        category: SkillCategory::Backend,
        icon: Icon::Server,
        image: None,
        color: "#DEA584".to_string(),
        status: true,
        order: 1,
    }
}

pub fn sample_technology(name: &str, order: i32) -> Technology {
    Technology {
        id: Uuid::new_v4(),
        name: name.to_string(),
        category: TechnologyCategory::Frontend,
        icon: Icon::Code,
        color: "#61DAFB".to_string(),
        description: None,
        order,
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn technology_draft(name: &str) -> TechnologyDraft {
    TechnologyDraft {
        name: name.to_string(),
        category: TechnologyCategory::Frontend,
        icon: Icon::Code,
        color: "#61DAFB".to_string(),
        description: None,
        order: 0,
    }
}

pub fn sample_experience(company: &str, order: i32) -> Experience {
    Experience {
        id: Uuid::new_v4(),
        company: company.to_string(),
        position: "Software Engineer".to_string(),
        kind: ExperienceType::FullTime,
        start_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
        end_date: None,
        current: true,
        description: "Builds internal tools".to_string(),
        achievements: vec!["Shipped the billing service".to_string()],
        technologies: vec!["Rust".to_string()],
        team_size: None,
        location: Some("Remote".to_string()),
        company_website: None,
        order,
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn experience_draft(company: &str) -> ExperienceDraft {
    ExperienceDraft {
        company: company.to_string(),
        position: "Software Engineer".to_string(),
        kind: ExperienceType::Internship,
        start_date: NaiveDate::from_ymd_opt(2022, 2, 1).unwrap(),
        end_date: None,
        current: false,
        description: "Worked on the public website".to_string(),
        achievements: vec!["Cut page load time in half".to_string()],
        technologies: vec!["React".to_string(), "Laravel".to_string()],
        team_size: Some("5".to_string()),
        location: None,
        company_website: None,
        order: 1,
    }
}

pub fn sample_contact(first_name: &str, status: ContactStatus) -> ContactMessage {
    ContactMessage {
        id: Uuid::new_v4(),
        first_name: first_name.to_string(),
        last_name: "Tester".to_string(),
        email: "visitor@example.com".to_string(),
        subject: "Hello".to_string(),
        message: "I would like to talk about a project.".to_string(),
        status,
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn contact_draft(email: &str) -> ContactDraft {
    ContactDraft {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: email.to_string(),
        subject: "Collaboration".to_string(),
        message: "Are you available next month?".to_string(),
    }
}

pub fn sample_personal_info(name: &str) -> PersonalInfo {
    PersonalInfo {
        id: Uuid::new_v4(),
        name: name.to_string(),
        title: "Full Stack Developer".to_string(),
        bio: "Builds web applications.".to_string(),
        email: "owner@example.com".to_string(),
        phone: None,
        location: Some("Jakarta".to_string()),
        company: None,
        join_date: NaiveDate::from_ymd_opt(2024, 3, 1),
        avatar: "👨‍💻".to_string(),
        social_links: SocialLinks {
            github: Some("https://github.com/example".to_string()),
            ..SocialLinks::default()
        },
        resume_url: None,
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn personal_info_draft(name: &str) -> PersonalInfoDraft {
    PersonalInfoDraft {
        name: name.to_string(),
        title: "Full Stack Developer".to_string(),
        bio: "Builds web applications.".to_string(),
        email: "owner@example.com".to_string(),
        phone: None,
        location: Some("Jakarta".to_string()),
        company: None,
        join_date: NaiveDate::from_ymd_opt(2024, 3, 1),
        avatar: "👨‍💻".to_string(),
        social_links: SocialLinks::default(),
        resume_url: None,
    }
}
