// ============================================================================
// ITEM STORE - In-memory ordered list with named mutations
// ============================================================================

use crate::models::Profile;
use chrono::Utc;
use serde::Serialize;
use std::collections::HashSet;
use std::str::FromStr;
use tracing::warn;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Validation(String),
    #[error("no item with id {0}")]
    NotFound(Uuid),
}

impl From<ValidationErrors> for StoreError {
    fn from(errors: ValidationErrors) -> Self {
        StoreError::Validation(errors.to_string())
    }
}

/// Rejects strings that are empty once surrounding whitespace is trimmed.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}

/// A boolean flag paired with a counter that moves in lockstep with it.
///
/// The counter is at least 1 while the flag is set, so toggling never drives
/// it below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Engagement {
    active: bool,
    count: u32,
}

impl Engagement {
    pub fn new(active: bool, count: u32) -> Self {
        Self {
            active,
            count: count.max(u32::from(active)),
        }
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn toggle(&mut self) {
        if self.active {
            self.count -= 1;
        } else {
            self.count = self.count.saturating_add(1);
        }
        self.active = !self.active;
    }
}

/// An item kept in an [`ItemStore`].
pub trait Record: Clone {
    /// Named per-item toggles this record supports.
    type Flag: FromStr + Send;

    fn id(&self) -> Uuid;

    /// Flip `flag`. Implementations either apply the whole change or return
    /// an error with the record untouched.
    fn toggle(&mut self, flag: Self::Flag) -> Result<(), StoreError>;
}

/// Validated input for creating a new record.
pub trait Draft: Validate {
    type Record: Record;

    fn into_record(self, id: Uuid, author: &Profile, created_at: i64) -> Self::Record;
}

/// Canonical, most-recent-first list of one kind of record.
#[derive(Debug, Clone)]
pub struct ItemStore<T> {
    items: Vec<T>,
    issued: HashSet<Uuid>,
}

impl<T: Record> Default for ItemStore<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            issued: HashSet::new(),
        }
    }
}

impl<T: Record> ItemStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a mock dataset, keeping its order. Records whose id
    /// was already seen are skipped.
    pub fn seeded(items: impl IntoIterator<Item = T>) -> Self {
        let mut store = Self::new();
        for item in items {
            if store.issued.insert(item.id()) {
                store.items.push(item);
            } else {
                warn!("Skipping seed record with duplicate id {}", item.id());
            }
        }
        store
    }

    /// Current snapshot, most recent first.
    pub fn all(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Result<&T, StoreError> {
        self.items
            .iter()
            .find(|item| item.id() == id)
            .ok_or(StoreError::NotFound(id))
    }

    pub fn toggle(&mut self, id: Uuid, flag: T::Flag) -> Result<&T, StoreError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or(StoreError::NotFound(id))?;
        item.toggle(flag)?;
        Ok(item)
    }

    /// Validate `draft`, stamp it with a fresh id and the current time, and
    /// insert it at the head of the list.
    pub fn append<D>(&mut self, draft: D, author: &Profile) -> Result<&T, StoreError>
    where
        D: Draft<Record = T>,
    {
        draft.validate()?;

        let id = self.fresh_id();
        let record = draft.into_record(id, author, Utc::now().timestamp());
        self.items.insert(0, record);

        Ok(&self.items[0])
    }

    fn fresh_id(&mut self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if self.issued.insert(id) {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Card {
        id: Uuid,
        title: String,
        likes: Engagement,
        saved: bool,
        author: String,
    }

    enum CardFlag {
        Like,
        Save,
        Pin,
    }

    impl FromStr for CardFlag {
        type Err = ();

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s {
                "like" => Ok(CardFlag::Like),
                "save" => Ok(CardFlag::Save),
                "pin" => Ok(CardFlag::Pin),
                _ => Err(()),
            }
        }
    }

    impl Record for Card {
        type Flag = CardFlag;

        fn id(&self) -> Uuid {
            self.id
        }

        fn toggle(&mut self, flag: CardFlag) -> Result<(), StoreError> {
            match flag {
                CardFlag::Like => self.likes.toggle(),
                CardFlag::Save => self.saved = !self.saved,
                CardFlag::Pin => return Err(StoreError::Validation("cards cannot be pinned".into())),
            }
            Ok(())
        }
    }

    #[derive(Validate)]
    struct NewCard {
        #[validate(custom(function = "not_blank"))]
        title: String,
        #[validate(custom(function = "not_blank"))]
        description: String,
    }

    impl Draft for NewCard {
        type Record = Card;

        fn into_record(self, id: Uuid, author: &Profile, _created_at: i64) -> Card {
            Card {
                id,
                title: self.title,
                likes: Engagement::new(false, 0),
                saved: false,
                author: author.email.clone(),
            }
        }
    }

    fn card(likes: u32, liked: bool) -> Card {
        Card {
            id: Uuid::new_v4(),
            title: "Seeded".into(),
            likes: Engagement::new(liked, likes),
            saved: false,
            author: "Sarah Chen".into(),
        }
    }

    fn me() -> Profile {
        Profile::for_identity("student@college.edu")
    }

    #[test]
    fn like_toggle_moves_counter_in_lockstep() {
        let seed = card(5, false);
        let id = seed.id;
        let mut store = ItemStore::seeded([seed]);

        let liked = store.toggle(id, CardFlag::Like).unwrap();
        assert_eq!((liked.likes.count(), liked.likes.active()), (6, true));

        let unliked = store.toggle(id, CardFlag::Like).unwrap();
        assert_eq!((unliked.likes.count(), unliked.likes.active()), (5, false));
    }

    #[test]
    fn toggle_parity_restores_or_flips() {
        for (count, active) in [(0, false), (1, true), (7, true), (3, false)] {
            let seed = card(count, active);
            let id = seed.id;
            let original = seed.likes;
            let mut store = ItemStore::seeded([seed]);

            for round in 1..=6 {
                let likes = store.toggle(id, CardFlag::Like).unwrap().likes;
                if round % 2 == 0 {
                    assert_eq!(likes, original);
                } else {
                    assert_eq!(likes.active(), !original.active());
                    assert_eq!(likes.count().abs_diff(original.count()), 1);
                }
            }
        }
    }

    #[test]
    fn active_flag_never_pairs_with_zero() {
        let mut likes = Engagement::new(true, 0);
        assert_eq!(likes.count(), 1);
        likes.toggle();
        assert_eq!((likes.active(), likes.count()), (false, 0));
    }

    #[test]
    fn toggle_touches_only_the_target() {
        let first = card(2, false);
        let second = card(9, true);
        let (first_id, untouched) = (first.id, second.clone());
        let mut store = ItemStore::seeded([first, second]);

        store.toggle(first_id, CardFlag::Save).unwrap();

        assert!(store.get(first_id).unwrap().saved);
        assert_eq!(store.all()[1], untouched);
    }

    #[test]
    fn toggle_unknown_id_is_not_found() {
        let mut store = ItemStore::seeded([card(1, false)]);
        let missing = Uuid::new_v4();
        assert_eq!(
            store.toggle(missing, CardFlag::Like).unwrap_err(),
            StoreError::NotFound(missing)
        );
    }

    #[test]
    fn rejected_toggle_leaves_item_untouched() {
        let seed = card(4, true);
        let (id, before) = (seed.id, seed.clone());
        let mut store = ItemStore::seeded([seed]);

        assert!(matches!(
            store.toggle(id, CardFlag::Pin),
            Err(StoreError::Validation(_))
        ));
        assert_eq!(store.get(id).unwrap(), &before);
    }

    #[test]
    fn append_rejects_blank_fields() {
        let mut store = ItemStore::<Card>::new();
        let blank = NewCard {
            title: "".into(),
            description: "x".into(),
        };
        assert!(matches!(
            store.append(blank, &me()),
            Err(StoreError::Validation(_))
        ));

        let spaces = NewCard {
            title: "Valid".into(),
            description: "   ".into(),
        };
        assert!(store.append(spaces, &me()).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn append_puts_new_item_first_with_fresh_id() {
        let seed = card(0, false);
        let seed_id = seed.id;
        let mut store = ItemStore::seeded([seed]);

        let draft = NewCard {
            title: "Valid".into(),
            description: "Body".into(),
        };
        let created = store.append(draft, &me()).unwrap().clone();

        assert_ne!(created.id, seed_id);
        assert_eq!(created.author, "student@college.edu");
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0], created);

        let again = NewCard {
            title: "Valid".into(),
            description: "Body".into(),
        };
        let second = store.append(again, &me()).unwrap().id;
        assert_ne!(second, created.id);
        assert_eq!(store.all()[0].id, second);
    }

    #[test]
    fn seeded_skips_duplicate_ids() {
        let first = card(1, false);
        let mut twin = card(2, false);
        twin.id = first.id;

        let store = ItemStore::seeded([first.clone(), twin]);
        assert_eq!(store.all(), &[first]);
    }
}
