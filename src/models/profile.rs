use crate::models::PostAuthor;
use crate::store::StoreError;
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub email: String,
    pub name: String,
    pub year: String,
    pub department: String,
    pub bio: String,
    pub interests: Vec<String>,
    pub location: String,
    pub joined_at: i64,
}

/// Partial edit of the profile fields a user controls.
#[derive(Debug, Default, Clone)]
pub struct ProfileEdit {
    pub name: Option<String>,
    pub year: Option<String>,
    pub department: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
}

impl Profile {
    /// Fresh profile for a signed-in identity. The display name is derived
    /// from the local part of the email, e.g. `jane.doe@x.edu` -> `Jane Doe`.
    pub fn for_identity(email: &str) -> Self {
        let local = email.split('@').next().unwrap_or(email);
        let name = local
            .split(['.', '_', '-', '+'])
            .filter(|part| !part.is_empty())
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            email: email.to_string(),
            name: if name.is_empty() { email.to_string() } else { name },
            year: String::new(),
            department: String::new(),
            bio: String::new(),
            interests: Vec::new(),
            location: String::new(),
            joined_at: Utc::now().timestamp(),
        }
    }

    pub fn post_author(&self) -> PostAuthor {
        PostAuthor {
            name: self.name.clone(),
            year: self.year.clone(),
            department: self.department.clone(),
        }
    }

    /// Apply every provided field, or none of them if the name is blank.
    pub fn apply(&mut self, edit: ProfileEdit) -> Result<(), StoreError> {
        if edit.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(StoreError::Validation("name: must not be blank".into()));
        }

        if let Some(name) = edit.name {
            self.name = name.trim().to_string();
        }
        if let Some(year) = edit.year {
            self.year = year.trim().to_string();
        }
        if let Some(department) = edit.department {
            self.department = department.trim().to_string();
        }
        if let Some(bio) = edit.bio {
            self.bio = bio;
        }
        if let Some(location) = edit.location {
            self.location = location.trim().to_string();
        }
        Ok(())
    }

    /// Returns `true` if the interest was added, `false` if already present.
    pub fn add_interest(&mut self, interest: &str) -> Result<bool, StoreError> {
        let interest = interest.trim();
        if interest.is_empty() {
            return Err(StoreError::Validation("interest: must not be blank".into()));
        }
        if self.interests.iter().any(|i| i == interest) {
            return Ok(false);
        }
        self.interests.push(interest.to_string());
        Ok(true)
    }

    /// Returns `true` if the interest was present.
    pub fn remove_interest(&mut self, interest: &str) -> bool {
        let before = self.interests.len();
        self.interests.retain(|i| i != interest);
        self.interests.len() != before
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_comes_from_email_local_part() {
        assert_eq!(Profile::for_identity("jane.doe@state.edu").name, "Jane Doe");
        assert_eq!(Profile::for_identity("student@college.edu").name, "Student");
        assert_eq!(Profile::for_identity("@odd.edu").name, "@odd.edu");
    }

    #[test]
    fn blank_name_rejects_the_whole_edit() {
        let mut profile = Profile::for_identity("student@college.edu");
        let before = profile.clone();

        let edit = ProfileEdit {
            name: Some("  ".into()),
            bio: Some("New bio".into()),
            ..Default::default()
        };
        assert!(profile.apply(edit).is_err());
        assert_eq!(profile, before);

        let edit = ProfileEdit {
            name: Some("Alex Johnson".into()),
            department: Some("Computer Science".into()),
            ..Default::default()
        };
        profile.apply(edit).unwrap();
        assert_eq!(profile.name, "Alex Johnson");
        assert_eq!(profile.department, "Computer Science");
        assert_eq!(profile.bio, "");
    }

    #[test]
    fn interests_are_unique_and_removable() {
        let mut profile = Profile::for_identity("student@college.edu");

        assert_eq!(profile.add_interest(" Photography "), Ok(true));
        assert_eq!(profile.add_interest("Photography"), Ok(false));
        assert!(profile.add_interest("   ").is_err());
        assert_eq!(profile.interests, vec!["Photography".to_string()]);

        assert!(profile.remove_interest("Photography"));
        assert!(!profile.remove_interest("Photography"));
        assert!(profile.interests.is_empty());
    }
}
