use crate::collection::{Searchable, Unfiltered};
use crate::dto::CreateEventRequest;
use crate::models::Profile;
use crate::store::{Draft, Engagement, Record, StoreError};
use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

string_enum! {
    EventCategory {
        Academic => "academic",
        Social => "social",
        Sports => "sports",
        Cultural => "cultural",
        Workshop => "workshop",
    }
}

string_enum! {
    EventFlag {
        Favorite => "favorite",
        Register => "register",
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: String,
    pub venue: String,
    pub organizer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    pub category: EventCategory,
    pub capacity: u32,
    /// Registration flag for the current user paired with the head count.
    pub registered: Engagement,
    pub price: u32,
    pub tags: Vec<String>,
    pub favorite: bool,
    pub created_at: i64,
}

impl Event {
    pub fn is_full(&self) -> bool {
        self.registered.count() >= self.capacity
    }
}

impl Searchable for Event {
    type Category = EventCategory;
    type Status = Unfiltered;

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.organizer.as_str(),
        ]
    }

    fn in_category(&self, category: &EventCategory) -> bool {
        self.category == *category
    }

    fn has_status(&self, status: &Unfiltered) -> bool {
        match *status {}
    }

    fn owner(&self) -> Option<&str> {
        self.created_by.as_deref()
    }

    fn registered(&self) -> bool {
        self.registered.active()
    }
}

impl Record for Event {
    type Flag = EventFlag;

    fn id(&self) -> Uuid {
        self.id
    }

    fn toggle(&mut self, flag: EventFlag) -> Result<(), StoreError> {
        match flag {
            EventFlag::Favorite => self.favorite = !self.favorite,
            EventFlag::Register => {
                if !self.registered.active() && self.is_full() {
                    return Err(StoreError::Validation(format!(
                        "`{}` is full ({} of {} places taken)",
                        self.title,
                        self.registered.count(),
                        self.capacity
                    )));
                }
                self.registered.toggle();
            }
        }
        Ok(())
    }
}

impl Draft for CreateEventRequest {
    type Record = Event;

    fn into_record(self, id: Uuid, author: &Profile, created_at: i64) -> Event {
        Event {
            id,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            date: self.date,
            time: self.time.trim().to_string(),
            venue: self.venue.trim().to_string(),
            organizer: author.name.clone(),
            created_by: Some(author.email.clone()),
            category: self.category,
            capacity: self.capacity,
            registered: Engagement::new(false, 0),
            price: self.price,
            tags: self.tags,
            favorite: false,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::Filter;
    use crate::store::ItemStore;

    fn draft(capacity: u32) -> CreateEventRequest {
        CreateEventRequest {
            title: "Pitch night".into(),
            description: "Present your startup ideas".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 22).unwrap(),
            time: "10:00 AM - 4:00 PM".into(),
            venue: "Business Center".into(),
            category: EventCategory::Academic,
            capacity,
            price: 5,
            tags: Vec::new(),
        }
    }

    #[test]
    fn registration_respects_capacity() {
        let host = Profile::for_identity("club@college.edu");
        let mut store = ItemStore::<Event>::new();
        let id = store.append(draft(1), &host).unwrap().id;

        let joined = store.toggle(id, EventFlag::Register).unwrap();
        assert!(joined.registered.active());
        assert!(joined.is_full());

        let left = store.toggle(id, EventFlag::Register).unwrap();
        assert_eq!(left.registered, Engagement::new(false, 0));
    }

    #[test]
    fn full_event_rejects_registration_without_change() {
        let host = Profile::for_identity("club@college.edu");
        let mut store = ItemStore::<Event>::new();
        let id = store.append(draft(2), &host).unwrap().id;
        let mut full = store.get(id).unwrap().clone();
        full.registered = Engagement::new(false, 2);
        let mut store = ItemStore::seeded([full]);

        let err = store.toggle(id, EventFlag::Register).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(store.get(id).unwrap().registered, Engagement::new(false, 2));

        let favorite = store.toggle(id, EventFlag::Favorite).unwrap();
        assert!(favorite.favorite);
    }

    #[test]
    fn registered_view_lists_joined_events() {
        let host = Profile::for_identity("club@college.edu");
        let mut store = ItemStore::<Event>::new();
        let joined = store.append(draft(10), &host).unwrap().id;
        store.append(draft(10), &host).unwrap();
        store.toggle(joined, EventFlag::Register).unwrap();

        let mine = Filter::new().registered_only();
        let ids: Vec<Uuid> = mine.apply(store.all()).map(|event| event.id).collect();
        assert_eq!(ids, vec![joined]);
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let host = Profile::for_identity("club@college.edu");
        let mut store = ItemStore::<Event>::new();
        assert!(store.append(draft(0), &host).is_err());
        assert!(store.is_empty());
    }
}
