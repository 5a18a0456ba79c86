// Request Types (one per RPC operation)

/// List projects owned by a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub user_name: String,
}

impl ListRequest {
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
        }
    }
}

/// Fetch detail of a single project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub user_name: String,
    pub project_name: String,
}

impl DetailRequest {
    pub fn new(user_name: impl Into<String>, project_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            project_name: project_name.into(),
        }
    }
}

/// List playground projects (no parameters)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaygroundListRequest {}

impl PlaygroundListRequest {
    pub fn new() -> Self {
        Self {}
    }
}

/// Submit a build of one or more source RPMs
///
/// Source RPM URLs form an ordered set: insertion order is kept and
/// duplicates are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildRequest {
    pub user_name: String,
    pub project_name: String,
    source_rpms: Vec<String>,
    pub memory: Option<String>,
    pub timeout: Option<String>,
}

impl BuildRequest {
    pub fn new(user_name: impl Into<String>, project_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            project_name: project_name.into(),
            ..Default::default()
        }
    }

    /// Add a source RPM URL; returns false if it was already present
    pub fn add_source_rpm(&mut self, url: impl Into<String>) -> bool {
        let url = url.into();
        if self.source_rpms.contains(&url) {
            return false;
        }
        self.source_rpms.push(url);
        true
    }

    /// Remove a source RPM URL; returns false if it was not present
    pub fn remove_source_rpm(&mut self, url: &str) -> bool {
        let before = self.source_rpms.len();
        self.source_rpms.retain(|u| u != url);
        self.source_rpms.len() != before
    }

    pub fn source_rpms(&self) -> &[String] {
        &self.source_rpms
    }

    pub fn with_source_rpm(mut self, url: impl Into<String>) -> Self {
        self.add_source_rpm(url);
        self
    }

    pub fn with_memory(mut self, memory: impl Into<String>) -> Self {
        self.memory = Some(memory.into());
        self
    }

    pub fn with_timeout(mut self, timeout: impl Into<String>) -> Self {
        self.timeout = Some(timeout.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_rpms_keep_insertion_order_without_duplicates() {
        let mut request = BuildRequest::new("john", "toy");
        assert!(request.add_source_rpm("b.src.rpm"));
        assert!(request.add_source_rpm("a.src.rpm"));
        assert!(!request.add_source_rpm("b.src.rpm"));

        assert_eq!(request.source_rpms(), ["b.src.rpm", "a.src.rpm"]);
    }

    #[test]
    fn test_remove_source_rpm() {
        let mut request = BuildRequest::new("john", "toy")
            .with_source_rpm("a")
            .with_source_rpm("b");

        assert!(request.remove_source_rpm("a"));
        assert!(!request.remove_source_rpm("a"));
        assert_eq!(request.source_rpms(), ["b"]);

        // Re-adding goes to the end
        request.add_source_rpm("a");
        assert_eq!(request.source_rpms(), ["b", "a"]);
    }

    #[test]
    fn test_build_request_optional_fields() {
        let request = BuildRequest::new("john", "toy");
        assert!(request.memory.is_none());
        assert!(request.timeout.is_none());
        assert!(request.source_rpms().is_empty());

        let request = request.with_memory("2048").with_timeout("3600");
        assert_eq!(request.memory.as_deref(), Some("2048"));
        assert_eq!(request.timeout.as_deref(), Some("3600"));
    }
}
