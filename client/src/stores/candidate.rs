use crate::models::candidate::CandidateData;

use super::{Store, Subscription};

/// Form state for one candidate session.
///
/// Starts empty; form inputs patch it field by field and submission logic
/// reads the merged result. Nothing is persisted, the value lives and dies
/// with the session. Each session constructs its own instance.
pub struct CandidateStore {
    store: Store<CandidateData>,
}

impl CandidateStore {
    pub fn new() -> Self {
        Self {
            store: Store::new(CandidateData::default()),
        }
    }

    pub fn get(&self) -> CandidateData {
        self.store.get()
    }

    pub fn subscribe(&self, callback: impl FnMut(&CandidateData) + 'static) -> Subscription {
        self.store.subscribe(callback)
    }

    pub fn unsubscribe(&self, subscription: Subscription) {
        self.store.unsubscribe(subscription)
    }

    /// Replaces the whole form value.
    pub fn set(&self, data: CandidateData) {
        self.store.set(data)
    }

    /// Applies `f` to the current form value.
    pub fn update(&self, f: impl FnOnce(&mut CandidateData)) {
        self.store.update(f)
    }

    /// Shallow-merges `patch` into the current form value.
    pub fn patch(&self, patch: CandidateData) {
        self.store.update(|data| data.merge(patch));
    }
}

impl Default for CandidateStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::models::candidate::tests::CANDIDATE_DATA;
    use crate::models::candidate::CandidateData;

    use super::CandidateStore;

    #[test]
    fn test_starts_empty() {
        let store = CandidateStore::new();

        assert_eq!(store.get(), CandidateData::default());
    }

    #[test]
    fn test_patches_shallow_merge_over_the_empty_record() {
        let store = CandidateStore::new();

        store.patch(CandidateData {
            name: Some("Ana".to_string()),
            ..Default::default()
        });
        store.patch(CandidateData {
            surname: Some("Popescu".to_string()),
            ..Default::default()
        });

        let data = store.get();
        assert_eq!(data.name.as_deref(), Some("Ana"));
        assert_eq!(data.surname.as_deref(), Some("Popescu"));
        assert!(data.email.is_none());
    }

    #[test]
    fn test_each_patch_notifies_with_the_merged_value() {
        let store = CandidateStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        store.subscribe(move |data| sink.borrow_mut().push(data.clone()));

        store.patch(CandidateData {
            name: Some("Ana".to_string()),
            ..Default::default()
        });
        store.patch(CandidateData {
            surname: Some("Popescu".to_string()),
            ..Default::default()
        });

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].name.as_deref(), Some("Ana"));
        assert!(seen[0].surname.is_none());
        assert_eq!(seen[1].name.as_deref(), Some("Ana"));
        assert_eq!(seen[1].surname.as_deref(), Some("Popescu"));
    }

    #[test]
    fn test_set_replaces_the_whole_value() {
        let store = CandidateStore::new();

        store.set(CANDIDATE_DATA.clone());
        assert!(store.get().is_filled());

        store.set(CandidateData {
            name: Some("Ana".to_string()),
            ..Default::default()
        });
        let data = store.get();
        assert_eq!(data.name.as_deref(), Some("Ana"));
        assert!(data.surname.is_none());
    }

    #[test]
    fn test_update_edits_in_place() {
        let store = CandidateStore::new();

        store.update(|data| data.study = Some("IT".to_string()));

        assert_eq!(store.get().study.as_deref(), Some("IT"));
    }

    #[test]
    fn test_unsubscribed_handler_stops_receiving() {
        let store = CandidateStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let subscription = store.subscribe(move |data: &CandidateData| {
            sink.borrow_mut().push(data.name.clone())
        });

        store.patch(CandidateData {
            name: Some("Ana".to_string()),
            ..Default::default()
        });
        store.unsubscribe(subscription);
        store.patch(CandidateData {
            name: Some("Jana".to_string()),
            ..Default::default()
        });

        assert_eq!(*seen.borrow(), vec![Some("Ana".to_string())]);
    }
}
