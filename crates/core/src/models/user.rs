//! User profile model
//!
//! Identity itself (login, sessions) is an external collaborator; the core
//! only needs enough of a profile to attribute hangouts and requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user as seen by the participation model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub bio: String,
    pub interests: Vec<String>,
    pub vibe: Vec<String>,
    pub languages: Vec<String>,
    pub joined_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            bio: String::new(),
            interests: Vec::new(),
            vibe: Vec::new(),
            languages: Vec::new(),
            joined_at: Utc::now(),
        }
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    pub fn with_interests(mut self, interests: Vec<String>) -> Self {
        self.interests = interests;
        self
    }

    pub fn with_vibe(mut self, vibe: Vec<String>) -> Self {
        self.vibe = vibe;
        self
    }

    pub fn with_languages(mut self, languages: Vec<String>) -> Self {
        self.languages = languages;
        self
    }
}
