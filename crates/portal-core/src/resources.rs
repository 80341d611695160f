//! Reference data: additional resources, trainer contact, student identity

use serde::{Deserialize, Serialize};

/// Kind of an additional course resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Pdf,
    Video,
    Link,
    Lab,
}

/// A downloadable/linkable resource attached to the course.
/// Pure reference data, no lifecycle.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalResource {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Static trainer profile shown in the trainer tab
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerContact {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    pub specialization: String,
    pub has_unread_messages: bool,
    pub message_count: u32,
}

/// Current student identity, supplied at session start
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub visible_name: String,
    pub learner_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_kind_wire_names() {
        let kind: ResourceKind = serde_json::from_str("\"pdf\"").unwrap();
        assert_eq!(kind, ResourceKind::Pdf);
        assert_eq!(serde_json::to_string(&ResourceKind::Lab).unwrap(), "\"lab\"");
    }

    #[test]
    fn test_resource_optional_fields_default() {
        let json = r#"{
            "id": "r1",
            "title": "Exam guide",
            "type": "link",
            "url": "https://example.com/guide"
        }"#;
        let r: AdditionalResource = serde_json::from_str(json).unwrap();
        assert!(r.description.is_none());
        assert!(r.icon.is_none());
    }
}
