use crate::collection::{Searchable, Unfiltered};
use crate::dto::CreatePostRequest;
use crate::models::Profile;
use crate::store::{Draft, Engagement, Record, StoreError};
use serde::Serialize;
use uuid::Uuid;

/// Tag given to posts created without any.
pub const DEFAULT_POST_TAG: &str = "personal";

string_enum! {
    /// Feed filter chips. A post belongs to a topic when it carries the tag.
    FeedTopic {
        Trending => "trending",
        Events => "events",
        Marketplace => "marketplace",
        Academic => "academic",
        Social => "social",
    }
}

string_enum! {
    PostFlag {
        Like => "like",
        Save => "save",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostAuthor {
    pub name: String,
    pub year: String,
    pub department: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: Uuid,
    pub author: PostAuthor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub created_at: i64,
    pub likes: Engagement,
    pub comments: u32,
    pub shares: u32,
    pub saved: bool,
    pub tags: Vec<String>,
}

impl Searchable for Post {
    type Category = FeedTopic;
    type Status = Unfiltered;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.content.as_str(), self.author.name.as_str()]
    }

    fn in_category(&self, topic: &FeedTopic) -> bool {
        self.tags.iter().any(|tag| tag == topic.as_str())
    }

    fn has_status(&self, status: &Unfiltered) -> bool {
        match *status {}
    }

    fn owner(&self) -> Option<&str> {
        self.created_by.as_deref()
    }
}

impl Record for Post {
    type Flag = PostFlag;

    fn id(&self) -> Uuid {
        self.id
    }

    fn toggle(&mut self, flag: PostFlag) -> Result<(), StoreError> {
        match flag {
            PostFlag::Like => self.likes.toggle(),
            PostFlag::Save => self.saved = !self.saved,
        }
        Ok(())
    }
}

impl Draft for CreatePostRequest {
    type Record = Post;

    fn into_record(self, id: Uuid, author: &Profile, created_at: i64) -> Post {
        let mut tags: Vec<String> = Vec::new();
        for tag in self.tags.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
            if !tags.iter().any(|seen| seen == tag) {
                tags.push(tag.to_string());
            }
        }
        if tags.is_empty() {
            tags.push(DEFAULT_POST_TAG.to_string());
        }

        Post {
            id,
            author: author.post_author(),
            created_by: Some(author.email.clone()),
            content: self.content.trim().to_string(),
            image: None,
            created_at,
            likes: Engagement::new(false, 0),
            comments: 0,
            shares: 0,
            saved: false,
            tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::{Filter, Selection};
    use crate::store::ItemStore;

    fn post(content: &str, tags: &[&str], likes: u32, liked: bool) -> Post {
        Post {
            id: Uuid::new_v4(),
            author: PostAuthor {
                name: "Alex Rodriguez".into(),
                year: "2nd Year".into(),
                department: "Business Administration".into(),
            },
            created_by: None,
            content: content.into(),
            image: None,
            created_at: 0,
            likes: Engagement::new(liked, likes),
            comments: 0,
            shares: 0,
            saved: false,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn topic_matches_any_tag() {
        let posts = vec![
            post("Study group", &["academic", "study-group"], 0, false),
            post("Textbooks for sale", &["marketplace", "textbooks"], 0, false),
        ];
        let filter = Filter::new().category(Selection::Only(FeedTopic::Marketplace));
        let visible: Vec<_> = filter.apply(&posts).map(|p| p.content.as_str()).collect();
        assert_eq!(visible, vec!["Textbooks for sale"]);
    }

    #[test]
    fn search_covers_author_name() {
        let posts = vec![post("Anything", &["social"], 0, false)];
        assert_eq!(Filter::new().query("rodriguez").apply(&posts).count(), 1);
    }

    #[test]
    fn like_and_save_are_independent() {
        let seed = post("Hello", &["social"], 5, false);
        let id = seed.id;
        let mut store = ItemStore::seeded([seed]);

        let saved = store.toggle(id, PostFlag::Save).unwrap();
        assert!(saved.saved);
        assert_eq!(saved.likes, Engagement::new(false, 5));

        let liked = store.toggle(id, PostFlag::Like).unwrap();
        assert_eq!((liked.likes.count(), liked.likes.active()), (6, true));
        assert!(liked.saved);
    }

    #[test]
    fn new_post_defaults_to_personal_tag() {
        let mut store = ItemStore::<Post>::new();
        let me = Profile::for_identity("jane.doe@state.edu");
        let draft = CreatePostRequest {
            content: "  First post!  ".into(),
            tags: vec![" ".into()],
        };

        let created = store.append(draft, &me).unwrap();
        assert_eq!(created.content, "First post!");
        assert_eq!(created.tags, vec![DEFAULT_POST_TAG.to_string()]);
        assert_eq!(created.author.name, "Jane Doe");
        assert_eq!(created.created_by.as_deref(), Some("jane.doe@state.edu"));
    }

    #[test]
    fn blank_post_is_rejected() {
        let mut store = ItemStore::<Post>::new();
        let draft = CreatePostRequest {
            content: "\n\t ".into(),
            tags: Vec::new(),
        };
        let me = Profile::for_identity("student@college.edu");
        assert!(matches!(store.append(draft, &me), Err(StoreError::Validation(_))));
    }
}
