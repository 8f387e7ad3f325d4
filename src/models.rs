//! Frontend Models
//!
//! Data structures matching the UMKM API payloads.

use serde::{Deserialize, Serialize};

/// UMKM record as returned by `/api/umkms`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Umkm {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub status: String,
}

/// Body of a create request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUmkm {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub status: String,
}

impl Default for NewUmkm {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: String::new(),
            location: String::new(),
            status: STATUS_OPTIONS[1].to_string(),
        }
    }
}

impl NewUmkm {
    /// Trim fields and reject a draft without a name
    pub fn validate(mut self) -> Result<Self, String> {
        self.name = self.name.trim().to_string();
        self.kind = self.kind.trim().to_string();
        self.location = self.location.trim().to_string();
        if self.name.is_empty() {
            return Err("Name is required".to_string());
        }
        Ok(self)
    }
}

/// Status values offered by the create form
pub const STATUS_OPTIONS: &[&str] = &["Active", "Pending", "Inactive"];

/// Visual emphasis of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
}

impl BadgeVariant {
    /// Unknown statuses fall into the destructive bucket
    pub fn for_status(status: &str) -> Self {
        match status {
            "Active" => BadgeVariant::Default,
            "Pending" => BadgeVariant::Secondary,
            _ => BadgeVariant::Destructive,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge",
            BadgeVariant::Secondary => "badge badge-secondary",
            BadgeVariant::Destructive => "badge badge-destructive",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_umkm_from_api_json() {
        let value = json!({
            "id": 42,
            "name": "Warung Sari",
            "type": "Kuliner",
            "location": "Bandung",
            "status": "Active"
        });
        let umkm: Umkm = serde_json::from_value(value).unwrap();
        assert_eq!(umkm.id, 42);
        assert_eq!(umkm.kind, "Kuliner");
        assert_eq!(umkm.status, "Active");
    }

    #[test]
    fn test_missing_status_is_destructive() {
        let umkm: Umkm = serde_json::from_value(json!({
            "id": 1,
            "name": "Batik Lestari",
            "type": "Kerajinan"
        }))
        .unwrap();
        assert_eq!(umkm.status, "");
        assert_eq!(BadgeVariant::for_status(&umkm.status), BadgeVariant::Destructive);
    }

    #[test]
    fn test_status_classification() {
        assert_eq!(BadgeVariant::for_status("Active"), BadgeVariant::Default);
        assert_eq!(BadgeVariant::for_status("Pending"), BadgeVariant::Secondary);
        assert_eq!(BadgeVariant::for_status("Archived"), BadgeVariant::Destructive);
        // Case-sensitive
        assert_eq!(BadgeVariant::for_status("active"), BadgeVariant::Destructive);
        assert_eq!(BadgeVariant::Secondary.class(), "badge badge-secondary");
    }

    #[test]
    fn test_new_umkm_serializes_type_field() {
        let draft = NewUmkm {
            name: "Kopi Nusantara".to_string(),
            kind: "Kuliner".to_string(),
            location: "Medan".to_string(),
            status: "Pending".to_string(),
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["type"], "Kuliner");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_validate_draft() {
        let draft = NewUmkm { name: "  Toko Maju ".to_string(), ..Default::default() };
        let draft = draft.validate().unwrap();
        assert_eq!(draft.name, "Toko Maju");
        assert_eq!(draft.status, "Pending");

        let blank = NewUmkm { name: "   ".to_string(), ..Default::default() };
        assert!(blank.validate().is_err());
    }
}
