use serde::{Deserialize, Serialize};

/// Values offered by the selection widgets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetOptions {
    pub categories: Vec<String>,
    pub sizes: Vec<String>,
    pub seasons: Vec<String>,
    /// Sorted locations preceded by the `ALL` sentinel
    pub locations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let options = WidgetOptions::default();
        assert!(options.categories.is_empty());
        assert!(options.locations.is_empty());
    }
}
