use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyField {
    Title,
    Author,
    Project,
    Notes,
}

impl PropertyField {
    pub const ALL: [PropertyField; 4] = [
        PropertyField::Title,
        PropertyField::Author,
        PropertyField::Project,
        PropertyField::Notes,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PropertyField::Title => "Title",
            PropertyField::Author => "Author",
            PropertyField::Project => "Project",
            PropertyField::Notes => "Notes",
        }
    }

    /// Longest value a field accepts, in chars.
    pub fn max_len(self) -> usize {
        match self {
            PropertyField::Notes => 200,
            _ => 80,
        }
    }
}

/// Header metadata stored with the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentProperties {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub project: String,
    #[serde(default)]
    pub notes: String,
}

impl DocumentProperties {
    pub fn get(&self, field: PropertyField) -> &str {
        match field {
            PropertyField::Title => &self.title,
            PropertyField::Author => &self.author,
            PropertyField::Project => &self.project,
            PropertyField::Notes => &self.notes,
        }
    }

    pub fn get_mut(&mut self, field: PropertyField) -> &mut String {
        match field {
            PropertyField::Title => &mut self.title,
            PropertyField::Author => &mut self.author,
            PropertyField::Project => &mut self.project,
            PropertyField::Notes => &mut self.notes,
        }
    }
}
