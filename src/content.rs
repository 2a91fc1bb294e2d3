//! Section documents, as served next to each page.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::card::{Photo, StaffMember, Video};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSection {
    #[serde(default)]
    pub section_title: String,
    #[serde(default)]
    pub section_description: String,
    #[serde(default)]
    pub videos: Vec<Video>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GallerySection {
    #[serde(default)]
    pub page_title: String,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultySection {
    #[serde(default)]
    pub page_title: String,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub staff: Vec<StaffMember>,
}

pub fn load_section<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::error::Error;

    #[test]
    fn test_load_video_section() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "sectionTitle": "Campus Life",
                "sectionDescription": "Moments",
                "videos": [
                    {{ "title": "Sports Day", "videoUrl": "https://example.org/1", "thumbnail": "a.jpg", "duration": "2:10" }},
                    {{ "title": "Science Fair", "videoUrl": "https://example.org/2" }}
                ]
            }}"#
        )
        .unwrap();

        let section: VideoSection = load_section(file.path()).unwrap();
        assert_eq!(section.section_title, "Campus Life");
        assert_eq!(section.videos.len(), 2);
        assert_eq!(section.videos[1].duration, "");
    }

    #[test]
    fn test_load_missing_fields_default() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();
        let section: GallerySection = load_section(file.path()).unwrap();
        assert!(section.photos.is_empty());
    }

    #[test]
    fn test_load_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "staff": "nobody" }}"#).unwrap();
        let result: Result<FacultySection> = load_section(file.path());
        assert!(matches!(result, Err(Error::Json(_))));
    }
}
