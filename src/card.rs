//! Card view models.
//!
//! Turning a content record into what a card shows is a pure function, so it
//! is tested here without any view attached.

use serde::{Deserialize, Serialize};

use crate::constants::PLACEHOLDER_IMAGE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Url(String),
    /// The URL was unusable, the placeholder image is shown instead.
    Placeholder,
    /// No image at all, a letter stands in for it.
    Initial(char),
}

impl ImageSource {
    pub fn resolve(url: &str) -> Self {
        let url = url.trim();
        if url.is_empty() || url.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return ImageSource::Placeholder;
        }
        ImageSource::Url(url.to_string())
    }

    pub fn src(&self) -> Option<&str> {
        match self {
            ImageSource::Url(url) => Some(url),
            ImageSource::Placeholder => Some(PLACEHOLDER_IMAGE),
            ImageSource::Initial(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub title: String,
    pub subtitle: Option<String>,
    pub body: Vec<String>,
    pub image: ImageSource,
    pub link: Option<String>,
    pub badge: Option<String>,
}

pub trait Card {
    fn view(&self) -> CardView;
}

pub fn render_card<C: Card + ?Sized>(item: &C) -> CardView {
    item.view()
}

/// Items that can be filtered by a category tab.
pub trait Categorized {
    fn category(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: String,
    pub video_url: String,
    #[serde(default)]
    pub duration: String,
}

impl Card for Video {
    fn view(&self) -> CardView {
        CardView {
            title: self.title.clone(),
            subtitle: None,
            body: vec![self.description.clone()],
            image: ImageSource::resolve(&self.thumbnail),
            link: Some(self.video_url.clone()),
            badge: (!self.duration.is_empty()).then(|| self.duration.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub title: String,
    pub thumbnail: String,
    pub full_image: String,
    pub category: String,
}

impl Card for Photo {
    fn view(&self) -> CardView {
        CardView {
            title: self.title.clone(),
            subtitle: None,
            body: Vec::new(),
            image: ImageSource::resolve(&self.thumbnail),
            link: Some(self.full_image.clone()),
            badge: None,
        }
    }
}

impl Categorized for Photo {
    fn category(&self) -> &str {
        &self.category
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub name: String,
    pub designation: String,
    #[serde(default)]
    pub qualification: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub photo: String,
    pub category: String,
}

impl Card for StaffMember {
    fn view(&self) -> CardView {
        let mut body = Vec::new();
        if !self.qualification.is_empty() {
            body.push(format!("Edu: {}", self.qualification));
        }
        if !self.phone.is_empty() {
            body.push(self.phone.clone());
        }

        CardView {
            title: self.name.clone(),
            subtitle: Some(self.designation.clone()),
            body,
            image: ImageSource::resolve(&self.photo),
            link: (!self.phone.is_empty()).then(|| format!("tel:{}", self.phone)),
            badge: None,
        }
    }
}

impl Categorized for StaffMember {
    fn category(&self) -> &str {
        &self.category
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub year: String,
    pub medal: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Card for Achievement {
    fn view(&self) -> CardView {
        let image = match self.image.as_deref() {
            Some(url) if !url.trim().is_empty() => ImageSource::resolve(url),
            // no picture: the first letter of the title
            _ => ImageSource::Initial(self.title.chars().next().unwrap_or('?')),
        };

        CardView {
            title: self.title.clone(),
            subtitle: Some(self.year.clone()),
            body: vec![self.description.clone()],
            image,
            link: None,
            badge: Some(self.medal.to_lowercase()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_fallback() {
        assert_eq!(ImageSource::resolve(""), ImageSource::Placeholder);
        assert_eq!(ImageSource::resolve("   "), ImageSource::Placeholder);
        assert_eq!(ImageSource::resolve("images/a b.jpg"), ImageSource::Placeholder);
        assert_eq!(
            ImageSource::resolve(" images/a.jpg "),
            ImageSource::Url("images/a.jpg".to_string())
        );
        assert_eq!(ImageSource::Placeholder.src(), Some(PLACEHOLDER_IMAGE));
        assert_eq!(ImageSource::Initial('G').src(), None);
    }

    #[test]
    fn test_video_card() {
        let video = Video {
            title: "Annual Day".to_string(),
            description: "Highlights".to_string(),
            thumbnail: "thumbs/annual.jpg".to_string(),
            video_url: "https://example.org/v/1".to_string(),
            duration: "3:45".to_string(),
        };
        let view = render_card(&video);
        assert_eq!(view.title, "Annual Day");
        assert_eq!(view.link.as_deref(), Some("https://example.org/v/1"));
        assert_eq!(view.badge.as_deref(), Some("3:45"));
        assert_eq!(view.image.src(), Some("thumbs/annual.jpg"));
    }

    #[test]
    fn test_staff_card() {
        let member = StaffMember {
            name: "R. Iyer".to_string(),
            designation: "PGT Physics".to_string(),
            qualification: "M.Sc".to_string(),
            phone: "98765".to_string(),
            photo: String::new(),
            category: "senior".to_string(),
        };
        let view = member.view();
        assert_eq!(view.subtitle.as_deref(), Some("PGT Physics"));
        assert_eq!(view.body, vec!["Edu: M.Sc".to_string(), "98765".to_string()]);
        assert_eq!(view.link.as_deref(), Some("tel:98765"));
        assert_eq!(view.image, ImageSource::Placeholder);
    }

    #[test]
    fn test_achievement_without_image() {
        let achievement = Achievement {
            title: "Gold in Relay".to_string(),
            description: String::new(),
            year: "2024".to_string(),
            medal: "Gold".to_string(),
            image: None,
        };
        let view = achievement.view();
        assert_eq!(view.image, ImageSource::Initial('G'));
        assert_eq!(view.badge.as_deref(), Some("gold"));
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{ "title": "Lab", "thumbnail": "t.jpg", "fullImage": "f.jpg", "category": "labs" }"#;
        let photo: Photo = serde_json::from_str(json).unwrap();
        assert_eq!(photo.full_image, "f.jpg");
        assert_eq!(photo.category(), "labs");
    }
}
