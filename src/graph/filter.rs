//! Glob-based model selection applied before collection.

use crate::error::VizError;
use crate::model::ModelDescriptor;
use glob::Pattern;

/// Include/exclude patterns matched against raw (unsanitized) model names
#[derive(Debug, Clone, Default)]
pub struct ModelFilter {
    only: Vec<Pattern>,
    exclude: Vec<Pattern>,
}

fn compile(globs: &[String]) -> Result<Vec<Pattern>, VizError> {
    globs
        .iter()
        .map(|g| g.trim())
        .filter(|g| !g.is_empty())
        .map(|g| {
            Pattern::new(g).map_err(|e| VizError::InvalidPattern {
                pattern: g.to_string(),
                message: e.msg.to_string(),
            })
        })
        .collect()
}

impl ModelFilter {
    pub fn new(only: &[String], exclude: &[String]) -> Result<Self, VizError> {
        Ok(Self {
            only: compile(only)?,
            exclude: compile(exclude)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.only.is_empty() && self.exclude.is_empty()
    }

    pub fn matches(&self, name: &str) -> bool {
        let included = self.only.is_empty() || self.only.iter().any(|p| p.matches(name));
        included && !self.exclude.iter().any(|p| p.matches(name))
    }

    /// Keep matching models, preserving input order
    pub fn apply(&self, models: Vec<ModelDescriptor>) -> Vec<ModelDescriptor> {
        if self.is_empty() {
            return models;
        }
        models.into_iter().filter(|m| self.matches(&m.name)).collect()
    }
}

/// Split a comma-separated CLI value into trimmed globs
pub fn split_globs(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(models: &[ModelDescriptor]) -> Vec<&str> {
        models.iter().map(|m| m.name.as_str()).collect()
    }

    fn sample() -> Vec<ModelDescriptor> {
        ["User", "Billing::Invoice", "Billing::Payment", "Post"]
            .into_iter()
            .map(ModelDescriptor::new)
            .collect()
    }

    #[test]
    fn test_empty_filter_keeps_all() {
        let filter = ModelFilter::default();
        assert_eq!(filter.apply(sample()).len(), 4);
    }

    #[test]
    fn test_only_namespace() {
        let filter = ModelFilter::new(&["Billing::*".to_string()], &[]).unwrap();
        assert_eq!(
            names(&filter.apply(sample())),
            vec!["Billing::Invoice", "Billing::Payment"]
        );
    }

    #[test]
    fn test_exclude_wins_over_only() {
        let filter = ModelFilter::new(
            &["Billing::*".to_string()],
            &["*Payment".to_string()],
        )
        .unwrap();
        assert_eq!(names(&filter.apply(sample())), vec!["Billing::Invoice"]);
    }

    #[test]
    fn test_invalid_pattern() {
        let err = ModelFilter::new(&["[".to_string()], &[]).unwrap_err();
        assert!(matches!(err, VizError::InvalidPattern { .. }));
    }

    #[test]
    fn test_split_globs() {
        assert_eq!(split_globs("User, Post,,"), vec!["User", "Post"]);
    }
}
