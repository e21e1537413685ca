use crate::collection::Searchable;
use crate::config::Config;
use crate::dto::{
    CreateEventRequest, CreateListingRequest, CreatePostRequest, CreateQuestionRequest,
    CreateServiceRequest, EmptyState,
};
use crate::models::{Event, Listing, Post, Profile, Question, Service};
use crate::seed;
use crate::store::{Draft, ItemStore, Record, StoreError};
use dashmap::DashMap;
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// APPLICATION STATE - Shared data across all requests
// ============================================================================
/// Each store sits behind its own `RwLock`, so every mutation of an area is
/// applied under a single write guard. Profiles are keyed by identity in a
/// `DashMap` and cloned out before any await.
pub type Shared<T> = Arc<RwLock<ItemStore<T>>>;

#[derive(Clone)]
pub struct AppState {
    pub posts: Shared<Post>,
    pub listings: Shared<Listing>,
    pub events: Shared<Event>,
    pub services: Shared<Service>,
    pub questions: Shared<Question>,
    pub profiles: Arc<DashMap<String, Profile>>, // Lookup by campus email
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let demo = config.seed_demo;
        Self {
            posts: shared(demo.then(seed::posts)),
            listings: shared(demo.then(seed::listings)),
            events: shared(demo.then(seed::events)),
            services: shared(demo.then(seed::services)),
            questions: shared(demo.then(seed::questions)),
            profiles: Arc::new(DashMap::new()),
            config: Arc::new(config),
        }
    }

    /// The caller's profile, created on first use.
    pub fn profile_for(&self, identity: &str) -> Profile {
        self.profiles
            .entry(identity.to_string())
            .or_insert_with(|| Profile::for_identity(identity))
            .value()
            .clone()
    }

    /// Apply `edit` to the caller's profile (creating it first if needed) and
    /// return the result. A failed edit leaves the profile as it was.
    pub fn edit_profile<R>(
        &self,
        identity: &str,
        edit: impl FnOnce(&mut Profile) -> Result<R, StoreError>,
    ) -> Result<Profile, StoreError> {
        let mut entry = self
            .profiles
            .entry(identity.to_string())
            .or_insert_with(|| Profile::for_identity(identity));
        edit(entry.value_mut())?;
        Ok(entry.value().clone())
    }
}

fn shared<T: Record>(items: Option<Vec<T>>) -> Shared<T> {
    Arc::new(RwLock::new(ItemStore::seeded(items.unwrap_or_default())))
}

/// A dashboard area served by the generic collection routes.
pub trait Area: Searchable + Record + Serialize + Send + Sync + 'static {
    type Draft: Draft<Record = Self> + DeserializeOwned + Send;

    /// Route prefix, e.g. `/posts`.
    const PATH: &'static str;
    /// Singular noun used in log lines.
    const NOUN: &'static str;
    const EMPTY_STATE: EmptyState;

    fn store(state: &AppState) -> &Shared<Self>;
}

impl Area for Post {
    type Draft = CreatePostRequest;

    const PATH: &'static str = "/posts";
    const NOUN: &'static str = "post";
    const EMPTY_STATE: EmptyState = EmptyState {
        title: "No posts found",
        hint: "Try adjusting your search or filter to find what you're looking for.",
    };

    fn store(state: &AppState) -> &Shared<Self> {
        &state.posts
    }
}

impl Area for Listing {
    type Draft = CreateListingRequest;

    const PATH: &'static str = "/listings";
    const NOUN: &'static str = "listing";
    const EMPTY_STATE: EmptyState = EmptyState {
        title: "No items found",
        hint: "Try adjusting your search or browse different categories.",
    };

    fn store(state: &AppState) -> &Shared<Self> {
        &state.listings
    }
}

impl Area for Event {
    type Draft = CreateEventRequest;

    const PATH: &'static str = "/events";
    const NOUN: &'static str = "event";
    const EMPTY_STATE: EmptyState = EmptyState {
        title: "No events found",
        hint: "Try a different category or host your own event.",
    };

    fn store(state: &AppState) -> &Shared<Self> {
        &state.events
    }
}

impl Area for Service {
    type Draft = CreateServiceRequest;

    const PATH: &'static str = "/services";
    const NOUN: &'static str = "service";
    const EMPTY_STATE: EmptyState = EmptyState {
        title: "No services found",
        hint: "Try adjusting your search or browse different categories.",
    };

    fn store(state: &AppState) -> &Shared<Self> {
        &state.services
    }
}

impl Area for Question {
    type Draft = CreateQuestionRequest;

    const PATH: &'static str = "/questions";
    const NOUN: &'static str = "question";
    const EMPTY_STATE: EmptyState = EmptyState {
        title: "No queries found",
        hint: "Try adjusting your search or ask a new question.",
    };

    fn store(state: &AppState) -> &Shared<Self> {
        &state.questions
    }
}
