use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use log::{debug, info};
use model::{errors::StoreError, ids::UserId, user::Record};

/// Handle to a record. The store and its callers hold clones of the same handle,
/// so field changes made through one are seen through the other.
pub type Shared<T> = Rc<RefCell<T>>;

pub fn shared<T>(record: T) -> Shared<T> {
    Rc::new(RefCell::new(record))
}

/// Repository contract for one kind of user record.
pub trait UserDao<T: Record> {
    /// Stamps a fresh id onto `record` and keeps it.
    ///
    /// The incoming id is never reused. Adding a handle that is already stored
    /// keeps it under both ids, and only the latest one can be deleted.
    fn add(&mut self, record: Shared<T>) -> Shared<T>;

    /// Replaces the stored record with the same id. Unknown ids are left alone;
    /// existence checks belong to the caller.
    fn update(&mut self, record: Shared<T>) -> Shared<T>;

    fn delete(&mut self, record: &Shared<T>) -> Result<bool, StoreError>;

    fn find_by_id(&self, id: UserId) -> Option<Shared<T>>;

    /// All records in the order they were added.
    fn find_all(&self) -> Vec<Shared<T>>;
}

/// Id keyed records plus the id counter of one store.
///
/// Ids only grow, so key order is insertion order.
pub(crate) struct MemStore<T> {
    records: BTreeMap<UserId, Shared<T>>,
    last_id: UserId,
}

impl<T: Record> MemStore<T> {
    pub(crate) fn new() -> Self {
        MemStore {
            records: BTreeMap::new(),
            last_id: UserId::UNASSIGNED,
        }
    }

    fn next_id(&mut self) -> UserId {
        self.last_id = self.last_id.next();
        self.last_id
    }

    pub(crate) fn add(&mut self, record: Shared<T>) -> Shared<T> {
        let old_id = record.borrow().id();
        if self
            .records
            .get(&old_id)
            .is_some_and(|stored| Rc::ptr_eq(stored, &record))
        {
            debug!("{} {} is already stored, adding it again", T::KIND, old_id);
        }

        let id = self.next_id();
        record.borrow_mut().set_id(id);
        info!(
            "Adding {} {}: {}",
            T::KIND,
            id,
            record.borrow().user().username
        );
        self.records.insert(id, Rc::clone(&record));
        record
    }

    pub(crate) fn update(&mut self, record: Shared<T>) -> Shared<T> {
        let id = record.borrow().id();
        match self.records.get_mut(&id) {
            Some(stored) => {
                if !Rc::ptr_eq(stored, &record) {
                    *stored = Rc::clone(&record);
                }
                info!("Updated {} {}", T::KIND, id);
            }
            None => debug!("Skipping update: {} {} is not stored", T::KIND, id),
        }
        record
    }

    pub(crate) fn remove(&mut self, record: &Shared<T>) -> bool {
        let id = record.borrow().id();
        let removed = self.records.remove(&id).is_some();
        if removed {
            info!("Deleted {} {}", T::KIND, id);
        } else {
            debug!("Nothing to delete: {} {} is not stored", T::KIND, id);
        }
        removed
    }

    pub(crate) fn get(&self, id: UserId) -> Option<Shared<T>> {
        self.records.get(&id).cloned()
    }

    pub(crate) fn all(&self) -> Vec<Shared<T>> {
        self.records.values().cloned().collect()
    }
}

impl<T: Record> Default for MemStore<T> {
    fn default() -> Self {
        MemStore::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use model::{trainee::Trainee, user::UserInfo};

    use super::*;

    fn trainee(id: u64) -> Shared<Trainee> {
        shared(Trainee::new(
            UserInfo::new(format!("firstName{}", id), format!("lastName{}", id))
                .with_id(UserId::new(id)),
            NaiveDate::from_ymd_opt(2024, 12, 12).unwrap(),
            format!("address{}", id),
        ))
    }

    #[test]
    fn test_ids_start_at_one() {
        let mut store: MemStore<Trainee> = MemStore::new();
        let first = store.add(trainee(0));
        let second = store.add(trainee(0));
        assert_eq!(first.borrow().id(), UserId::new(1));
        assert_eq!(second.borrow().id(), UserId::new(2));
    }

    #[test]
    fn test_incoming_id_is_ignored() {
        let mut store: MemStore<Trainee> = MemStore::new();
        let record = store.add(trainee(42));
        assert_eq!(record.borrow().id(), UserId::new(1));
        assert!(store.get(UserId::new(42)).is_none());
    }

    #[test]
    fn test_freed_id_is_not_reissued() {
        let mut store: MemStore<Trainee> = MemStore::new();
        store.add(trainee(0));
        let second = store.add(trainee(0));
        assert!(store.remove(&second));

        let third = store.add(trainee(0));
        assert_eq!(third.borrow().id(), UserId::new(3));
    }

    #[test]
    fn test_readded_record_gets_new_id() {
        let mut store: MemStore<Trainee> = MemStore::new();
        let record = store.add(trainee(0));
        assert!(store.remove(&record));

        let record = store.add(record);
        assert_eq!(record.borrow().id(), UserId::new(2));
        assert_eq!(store.all().len(), 1);
    }

    #[test]
    fn test_adding_stored_handle_keeps_both_keys() {
        let mut store: MemStore<Trainee> = MemStore::new();
        let record = store.add(trainee(0));
        store.add(Rc::clone(&record));

        assert_eq!(record.borrow().id(), UserId::new(2));
        let all = store.all();
        assert_eq!(all.len(), 2);
        assert!(Rc::ptr_eq(&all[0], &all[1]));

        assert!(store.remove(&record));
        assert!(!store.remove(&record));
        assert!(Rc::ptr_eq(&store.get(UserId::new(1)).unwrap(), &record));
    }

    #[test]
    fn test_find_returns_same_handle() {
        let mut store: MemStore<Trainee> = MemStore::new();
        let record = store.add(trainee(0));
        let id = record.borrow().id();
        let found = store.get(id).unwrap();
        assert!(Rc::ptr_eq(&found, &record));
    }

    #[test]
    fn test_update_keeps_position() {
        let mut store: MemStore<Trainee> = MemStore::new();
        let first = store.add(trainee(0));
        store.add(trainee(0));

        let replacement = trainee(0);
        replacement.borrow_mut().set_id(first.borrow().id());
        replacement.borrow_mut().user.first_name = "replaced".to_owned();
        store.update(Rc::clone(&replacement));

        let all = store.all();
        assert_eq!(all.len(), 2);
        assert!(Rc::ptr_eq(&all[0], &replacement));
        assert_eq!(all[0].borrow().user.first_name, "replaced");
    }

    #[test]
    fn test_update_same_handle_is_noop() {
        let mut store: MemStore<Trainee> = MemStore::new();
        let record = store.add(trainee(0));
        let updated = store.update(Rc::clone(&record));
        assert!(Rc::ptr_eq(&updated, &record));
        assert_eq!(store.all().len(), 1);
    }
}
