use std::collections::HashSet;

use crate::modules::contact::application::domain::entities::{ContactMessage, ContactStatus};
use crate::modules::project::application::domain::entities::Project;

/// Figures shown on the dashboard cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_projects: usize,
    pub featured_projects: usize,
    /// Distinct technology names used across all projects.
    pub technologies: usize,
    pub unread_messages: usize,
}

impl DashboardStats {
    pub fn compute(projects: &[Project], messages: &[ContactMessage]) -> Self {
        let technologies: HashSet<&str> = projects
            .iter()
            .flat_map(|p| p.technologies.iter().map(String::as_str))
            .collect();

        Self {
            total_projects: projects.len(),
            featured_projects: projects.iter().filter(|p| p.featured).count(),
            technologies: technologies.len(),
            unread_messages: messages
                .iter()
                .filter(|m| m.status == ContactStatus::Unread)
                .count(),
        }
    }
}
