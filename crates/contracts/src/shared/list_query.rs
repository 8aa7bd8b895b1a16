use serde::{Deserialize, Serialize};

/// Параметры фильтрации списков (`?search=...&status=...`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Пустая строка поиска не отправляется
    pub fn with_search(mut self, search: &str) -> Self {
        let trimmed = search.trim();
        self.search = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    pub fn with_status(mut self, status: Option<&str>) -> Self {
        self.status = status.map(str::to_string);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_search_is_dropped() {
        let q = ListQuery::new().with_search("   ").with_status(None);
        assert!(q.is_empty());

        let q = ListQuery::new().with_search(" Maria ").with_status(Some("Entregue"));
        assert_eq!(q.search.as_deref(), Some("Maria"));
        assert_eq!(q.status.as_deref(), Some("Entregue"));
    }
}
