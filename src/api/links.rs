//! Resource URI construction.

use crate::model::TalkId;

/// Builds the URIs returned in `Location` headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLinks {
    base_path: String,
}

impl Default for ResourceLinks {
    fn default() -> Self {
        Self::new("/api")
    }
}

impl ResourceLinks {
    /// `base_path` is the prefix every route is mounted under (e.g. `/api`).
    pub fn new(base_path: &str) -> Self {
        let trimmed = base_path.trim().trim_end_matches('/');
        let base_path = if trimmed.is_empty() || trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };
        Self { base_path }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// URI of a camp, or `None` when the moniker cannot be used as a path segment.
    pub fn camp(&self, moniker: &str) -> Option<String> {
        is_path_segment(moniker).then(|| format!("{}/camps/{moniker}", self.base_path))
    }

    /// URI of a camp's talk collection.
    pub fn talks(&self, moniker: &str) -> Option<String> {
        self.camp(moniker).map(|camp| format!("{camp}/talks"))
    }

    pub fn talk(&self, moniker: &str, talk_id: TalkId) -> Option<String> {
        self.talks(moniker).map(|talks| format!("{talks}/{}", talk_id.0))
    }
}

fn is_path_segment(value: &str) -> bool {
    !value.trim().is_empty()
        && value
            .chars()
            .all(|c| !c.is_whitespace() && !c.is_control() && !matches!(c, '/' | '?' | '#' | '%'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camp_and_talk_uris() {
        let links = ResourceLinks::default();
        assert_eq!(links.camp("C1").as_deref(), Some("/api/camps/C1"));
        assert_eq!(links.talk("C1", TalkId(4)).as_deref(), Some("/api/camps/C1/talks/4"));
    }

    #[test]
    fn test_unusable_monikers() {
        let links = ResourceLinks::default();
        for moniker in ["", "  ", "a/b", "a b", "a?b", "a#b", "50%"] {
            assert_eq!(links.camp(moniker), None, "{moniker:?}");
        }
    }

    #[test]
    fn test_base_path_normalization() {
        assert_eq!(ResourceLinks::new("api/").camp("X").as_deref(), Some("/api/camps/X"));
        assert_eq!(ResourceLinks::new("").camp("X").as_deref(), Some("/camps/X"));
    }
}
