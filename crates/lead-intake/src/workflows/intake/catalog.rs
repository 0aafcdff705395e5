/// One downloadable resource offered on the marketing site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    pub title: &'static str,
    pub filename: &'static str,
}

/// Immutable mapping from a resource's exact title to its PDF attachment.
///
/// A title missing from the catalog silently disables the attachment email;
/// the lead record still captures whatever title the form sent.
#[derive(Debug, Clone)]
pub struct ResourceCatalog {
    entries: Vec<ResourceEntry>,
}

impl ResourceCatalog {
    /// The resources currently published on the site.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                ResourceEntry {
                    title: "C12's Strategic Planning Guide",
                    filename: "strategic-planning-guide.pdf",
                },
                ResourceEntry {
                    title: "From Survival to Sustainability",
                    filename: "survival-to-sustainability.pdf",
                },
                ResourceEntry {
                    title: "Customer Loyalty & Referrals",
                    filename: "customer-loyalty-referrals.pdf",
                },
            ],
        }
    }

    /// Exact-match lookup; case differences and near-misses return `None`.
    pub fn attachment_for(&self, title: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.title == title)
            .map(|entry| entry.filename)
    }

    pub fn entries(&self) -> &[ResourceEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_maps_published_titles() {
        let catalog = ResourceCatalog::standard();
        assert_eq!(catalog.entries().len(), 3);
        assert_eq!(
            catalog.attachment_for("From Survival to Sustainability"),
            Some("survival-to-sustainability.pdf")
        );
    }

    #[test]
    fn lookup_requires_exact_title() {
        let catalog = ResourceCatalog::standard();
        assert_eq!(catalog.attachment_for("from survival to sustainability"), None);
        assert_eq!(catalog.attachment_for("Customer Loyalty"), None);
        assert_eq!(catalog.attachment_for(""), None);
    }
}
