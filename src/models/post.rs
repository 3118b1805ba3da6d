use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::collections::HashSet;

/// File extensions (lowercase, without the dot) treated as direct image links.
pub const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

/// A single social-media post as served by the data pool endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Post {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Title")]
    pub title: String,
    /// Identity key of the post within a collection
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Keywords")]
    pub keywords: String,
    #[serde(rename = "Description")]
    pub description: String,
}

impl Post {
    /// Case-insensitive substring match against the title only.
    pub fn matches(&self, search_term: &str) -> bool {
        search_term.is_empty() || self.title.to_lowercase().contains(&search_term.to_lowercase())
    }

    pub fn has_image(&self) -> bool {
        is_image_url(&self.url)
    }

    /// Date formatted for display, or the raw value if it cannot be parsed.
    pub fn display_date(&self) -> String {
        parse_date(&self.date).map_or_else(
            || self.date.clone(),
            |date| date.format("%b %-d, %Y").to_string(),
        )
    }
}

/// Returns true if `url` ends in one of [`IMAGE_EXTENSIONS`], ignoring case.
pub fn is_image_url(url: &str) -> bool {
    let lower = url.to_lowercase();
    IMAGE_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(&format!(".{ext}")))
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
}

/// The post collection, in the order the server returned it.
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct Posts {
    data: Vec<Post>,
}

impl Posts {
    pub fn new(data: Vec<Post>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Post> {
        self.data.iter()
    }

    /// Posts whose title contains `search_term`, preserving fetch order.
    pub fn filter(&self, search_term: &str) -> Vec<Post> {
        self.data
            .iter()
            .filter(|p| p.matches(search_term))
            .cloned()
            .collect()
    }

    /// Notice shown in place of the grid when a filter leaves no posts.
    pub fn empty_notice(&self) -> &'static str {
        if self.data.is_empty() {
            "No posts available."
        } else {
            "No posts match your search."
        }
    }

    /// First URL appearing more than once, if the identity-key invariant is broken.
    pub fn first_duplicate_url(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.data
            .iter()
            .map(|p| p.url.as_str())
            .find(|url| !seen.insert(*url))
    }
}
