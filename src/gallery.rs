use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

use crate::profile::Project;

pub const ALL_LABEL: &str = "All";

/// A project gallery selection: the "show all" sentinel or one concrete tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    pub fn label(&self) -> &str {
        match self {
            TagFilter::All => ALL_LABEL,
            TagFilter::Tag(tag) => tag,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Tag(tag) => project.has_tag(tag),
        }
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    #[error("No project is tagged '{0}'")]
    UnknownTag(String),
}

/// The sentinel followed by every distinct tag in first-seen order.
pub fn vocabulary(projects: &[Project]) -> Vec<TagFilter> {
    let mut seen = HashSet::new();
    let tags = projects
        .iter()
        .flat_map(|p| p.tags.iter())
        .filter(|tag| seen.insert(*tag))
        .map(|tag| TagFilter::Tag(tag.clone()));
    std::iter::once(TagFilter::All).chain(tags).collect()
}

/// Projects matching `filter`, in their original order.
pub fn filter_projects<'a>(projects: &'a [Project], filter: &TagFilter) -> Vec<&'a Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

/// Holds the active selection over an immutable project list. Vocabulary and
/// visible projects are derived on every call.
#[derive(Debug, Clone)]
pub struct ProjectGallery<'a> {
    projects: &'a [Project],
    selection: TagFilter,
}

impl<'a> ProjectGallery<'a> {
    pub fn new(projects: &'a [Project]) -> Self {
        Self {
            projects,
            selection: TagFilter::All,
        }
    }

    pub fn selection(&self) -> &TagFilter {
        &self.selection
    }

    pub fn is_selected(&self, filter: &TagFilter) -> bool {
        &self.selection == filter
    }

    pub fn vocabulary(&self) -> Vec<TagFilter> {
        vocabulary(self.projects)
    }

    pub fn visible(&self) -> Vec<&'a Project> {
        filter_projects(self.projects, &self.selection)
    }

    pub fn select(&mut self, filter: TagFilter) -> Result<(), GalleryError> {
        if let TagFilter::Tag(tag) = &filter {
            if !self.projects.iter().any(|p| p.has_tag(tag)) {
                return Err(GalleryError::UnknownTag(tag.clone()));
            }
        }
        self.selection = filter;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u32, tags: &[&str]) -> Project {
        Project {
            id,
            title: format!("project {id}"),
            description: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            url: "#".to_string(),
        }
    }

    fn tag(s: &str) -> TagFilter {
        TagFilter::Tag(s.to_string())
    }

    fn sample() -> Vec<Project> {
        vec![project(1, &["A", "B"]), project(2, &["B"]), project(3, &["C"])]
    }

    fn ids(projects: &[&Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_vocabulary_first_seen_order() {
        let projects = sample();
        assert_eq!(
            vocabulary(&projects),
            vec![TagFilter::All, tag("A"), tag("B"), tag("C")]
        );
    }

    #[test]
    fn test_vocabulary_no_duplicates() {
        let projects = vec![
            project(1, &["Rust", "WASM"]),
            project(2, &["WASM", "Rust", "Leptos"]),
            project(3, &["Leptos"]),
        ];
        let vocab = vocabulary(&projects);
        assert_eq!(vocab[0], TagFilter::All);
        let unique = vocab.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), vocab.len());
        assert_eq!(vocab.len(), 4);
    }

    #[test]
    fn test_empty_project_list() {
        let projects: Vec<Project> = Vec::new();
        assert_eq!(vocabulary(&projects), vec![TagFilter::All]);
        assert!(filter_projects(&projects, &TagFilter::All).is_empty());
    }

    #[test]
    fn test_sentinel_yields_everything() {
        let projects = sample();
        let all = filter_projects(&projects, &TagFilter::All);
        assert_eq!(ids(&all), vec![1, 2, 3]);
    }

    #[test]
    fn test_filter_preserves_order() {
        let projects = sample();
        assert_eq!(ids(&filter_projects(&projects, &tag("B"))), vec![1, 2]);
        assert_eq!(ids(&filter_projects(&projects, &tag("C"))), vec![3]);
    }

    #[test]
    fn test_filter_count_matches_tag_frequency() {
        let projects = crate::profile::profile().projects.clone();
        for filter in vocabulary(&projects).iter().skip(1) {
            let expected = projects.iter().filter(|p| p.has_tag(filter.label())).count();
            let filtered = filter_projects(&projects, filter);
            assert_eq!(filtered.len(), expected, "tag {filter}");

            // Subsequence of the full list
            let mut positions = filtered
                .iter()
                .map(|f| projects.iter().position(|p| p.id == f.id).unwrap());
            let mut last = positions.next().unwrap();
            for pos in positions {
                assert!(pos > last);
                last = pos;
            }
        }
    }

    #[test]
    fn test_zero_match_tag() {
        let projects = sample();
        assert!(filter_projects(&projects, &tag("Z")).is_empty());
    }

    #[test]
    fn test_gallery_select_and_restore() {
        let projects = sample();
        let mut gallery = ProjectGallery::new(&projects);
        assert_eq!(gallery.selection(), &TagFilter::All);
        assert_eq!(ids(&gallery.visible()), vec![1, 2, 3]);

        gallery.select(tag("B")).unwrap();
        assert!(gallery.is_selected(&tag("B")));
        assert_eq!(ids(&gallery.visible()), vec![1, 2]);

        gallery.select(tag("C")).unwrap();
        assert_eq!(ids(&gallery.visible()), vec![3]);

        gallery.select(TagFilter::All).unwrap();
        assert_eq!(ids(&gallery.visible()), vec![1, 2, 3]);
    }

    #[test]
    fn test_gallery_rejects_unknown_tag() {
        let projects = sample();
        let mut gallery = ProjectGallery::new(&projects);
        gallery.select(tag("A")).unwrap();

        let err = gallery.select(tag("nope")).unwrap_err();
        assert_eq!(err, GalleryError::UnknownTag("nope".to_string()));
        // selection is untouched
        assert!(gallery.is_selected(&tag("A")));
    }

    #[test]
    fn test_vocabulary_independent_of_selection() {
        let projects = sample();
        let mut gallery = ProjectGallery::new(&projects);
        let before = gallery.vocabulary();
        gallery.select(tag("C")).unwrap();
        assert_eq!(gallery.vocabulary(), before);
        assert_eq!(before, vocabulary(&projects));
    }

    #[test]
    fn test_labels() {
        assert_eq!(TagFilter::All.to_string(), "All");
        assert_eq!(tag("Python").label(), "Python");
    }
}
