use serde::{Deserialize, Serialize};

/// Pages the storefront header can send the shopper to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    Home,
    Login,
    Collection,
}

impl Destination {
    /// Router path for this destination
    pub fn path(&self) -> &'static str {
        match self {
            Destination::Home => "/",
            Destination::Login => "/Login",
            Destination::Collection => "/collection",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Destination::Home => "Home",
            Destination::Login => "Login",
            Destination::Collection => "Collection",
        }
    }
}

/// One entry of the category row under the main header bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLink {
    pub label: String,
    pub destination: Destination,
}

impl CategoryLink {
    pub fn new(label: impl Into<String>, destination: Destination) -> Self {
        Self {
            label: label.into(),
            destination,
        }
    }
}

/// Category row shown by default.
///
/// Every label currently lands on the collection page; there are no
/// per-category pages yet.
pub fn default_categories() -> Vec<CategoryLink> {
    ["Collection", "Oversize", "Round Neck", "Polo", "Knitted"]
        .into_iter()
        .map(|label| CategoryLink::new(label, Destination::Collection))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_paths() {
        assert_eq!(Destination::Home.path(), "/");
        assert_eq!(Destination::Login.path(), "/Login");
        assert_eq!(Destination::Collection.path(), "/collection");
    }

    #[test]
    fn test_default_categories_order_and_target() {
        let categories = default_categories();
        let labels: Vec<&str> = categories.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["Collection", "Oversize", "Round Neck", "Polo", "Knitted"]);
        assert!(categories.iter().all(|c| c.destination == Destination::Collection));
    }

    #[test]
    fn test_destination_serde_is_lowercase() {
        let json = serde_json::to_string(&Destination::Collection).unwrap();
        assert_eq!(json, "\"collection\"");
        let parsed: Destination = serde_json::from_str("\"login\"").unwrap();
        assert_eq!(parsed, Destination::Login);
    }
}
