use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

use crate::gallery::ALL_LABEL;

const PROFILE_FILE: &str = "profile.json";

pub static PROFILE: LazyLock<Profile> =
    LazyLock::new(|| load_profile().expect("embedded profile should be valid"));

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub title: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub bio: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub url: String,
}

impl Project {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub user: User,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
}

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Profile data not found: {0}")]
    NotFound(&'static str),
    #[error("Couldn't parse profile data")]
    ParseError(#[from] serde_json::Error),
    #[error("Duplicate project id: {0}")]
    DuplicateProject(u32),
    #[error("Project {0} uses the reserved tag 'All'")]
    ReservedTag(u32),
}

impl Profile {
    pub fn from_json(data: &[u8]) -> Result<Self, ProfileError> {
        let profile: Profile = serde_json::from_slice(data)?;
        let mut seen = HashSet::with_capacity(profile.projects.len());
        for project in &profile.projects {
            if !seen.insert(project.id) {
                return Err(ProfileError::DuplicateProject(project.id));
            }
            // would collide with the gallery's "show all" button
            if project.has_tag(ALL_LABEL) {
                return Err(ProfileError::ReservedTag(project.id));
            }
        }
        Ok(profile)
    }
}

/// Parses the profile bundled into the binary from `content/profile.json`.
pub fn load_profile() -> Result<Profile, ProfileError> {
    let file = Content::get(PROFILE_FILE).ok_or(ProfileError::NotFound(PROFILE_FILE))?;
    Profile::from_json(&file.data)
}

pub fn profile() -> &'static Profile {
    &PROFILE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_profile_loads() {
        let profile = load_profile().expect("embedded profile should parse");
        assert!(!profile.user.name.is_empty());
        assert!(!profile.skills.is_empty());
        assert!(!profile.projects.is_empty());

        // Every category lists at least one skill
        assert!(profile.skills.iter().all(|c| !c.skills.is_empty()));
    }

    #[test]
    fn test_embedded_project_ids_unique() {
        let profile = profile();
        let ids = profile.projects.iter().map(|p| p.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), profile.projects.len());
    }

    #[test]
    fn test_duplicate_project_rejected() {
        let json = br##"{
            "user": {"name": "n", "title": "t", "email": "e@x.io", "linkedin": "l",
                     "github": "g", "bio": "b", "avatar": "a"},
            "skills": [],
            "projects": [
                {"id": 7, "title": "a", "description": "", "tags": [], "url": "#"},
                {"id": 7, "title": "b", "description": "", "tags": [], "url": "#"}
            ]
        }"##;
        let err = Profile::from_json(json).unwrap_err();
        assert!(matches!(err, ProfileError::DuplicateProject(7)));
    }

    #[test]
    fn test_reserved_tag_rejected() {
        let json = br##"{
            "user": {"name": "n", "title": "t", "email": "e@x.io", "linkedin": "l",
                     "github": "g", "bio": "b", "avatar": "a"},
            "skills": [],
            "projects": [
                {"id": 1, "title": "a", "description": "", "tags": ["Rust"], "url": "#"},
                {"id": 2, "title": "b", "description": "", "tags": ["WASM", "All"], "url": "#"}
            ]
        }"##;
        let err = Profile::from_json(json).unwrap_err();
        assert!(matches!(err, ProfileError::ReservedTag(2)));
        assert_eq!(err.to_string(), "Project 2 uses the reserved tag 'All'");
    }

    #[test]
    fn test_embedded_vocabulary_labels_unique() {
        let vocab = crate::gallery::vocabulary(&profile().projects);
        let labels = vocab.iter().map(|f| f.label()).collect::<HashSet<_>>();
        assert_eq!(labels.len(), vocab.len());
    }

    #[test]
    fn test_malformed_profile_rejected() {
        let err = Profile::from_json(b"{ \"user\": 3 }").unwrap_err();
        assert!(matches!(err, ProfileError::ParseError(_)));
    }

    #[test]
    fn test_has_tag() {
        let project = Project {
            id: 1,
            title: "t".to_string(),
            description: String::new(),
            tags: vec!["Rust".to_string(), "WASM".to_string()],
            url: "#".to_string(),
        };
        assert!(project.has_tag("WASM"));
        assert!(!project.has_tag("wasm"));
    }
}
