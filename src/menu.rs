//! Menu Manager
//!
//! Owns the session's pizza list. The working list is what the table shows
//! and is re-ordered by sorting; the session store keeps the same pizzas in
//! insertion order, independent of any display sort.

use std::cmp::Ordering;

use crate::error::{MenuError, MenuResult};
use crate::models::{PizzaEntry, SortDirection, SortField, SortState};
use crate::storage::{PizzaStorage, SessionStore};

pub struct MenuManager<S> {
    /// Display order, re-ordered in place by `sort`
    pizzas: Vec<PizzaEntry>,
    sort_state: SortState,
    storage: PizzaStorage<S>,
}

impl<S: SessionStore> MenuManager<S> {
    /// Start a session over `store`, normalizing whatever it holds
    pub fn new(store: S) -> Self {
        let storage = PizzaStorage::new(store);
        let pizzas = storage.init();
        Self {
            pizzas,
            sort_state: SortState::default(),
            storage,
        }
    }

    /// Working list in display order
    pub fn pizzas(&self) -> &[PizzaEntry] {
        &self.pizzas
    }

    pub fn sort_state(&self) -> SortState {
        self.sort_state
    }

    pub fn contains(&self, name: &str) -> bool {
        self.pizzas.iter().any(|p| p.name == name)
    }

    /// Insertion-ordered copy held by the session store
    pub fn persisted(&self) -> Vec<PizzaEntry> {
        self.storage.load()
    }

    #[cfg(test)]
    pub fn storage(&self) -> &PizzaStorage<S> {
        &self.storage
    }

    /// Append `pizza` unless its name is taken.
    ///
    /// The store is written first; the working list only changes once the
    /// write went through. A new pizza lands at the end of the working list
    /// whatever sort was applied before.
    pub fn try_add(&mut self, pizza: PizzaEntry) -> MenuResult<()> {
        if self.contains(&pizza.name) {
            return Err(MenuError::DuplicateName(pizza.name));
        }

        let mut original = self.storage.load();
        original.push(pizza.clone());
        self.storage.save(&original)?;

        log::info!("added pizza \"{}\"", pizza.name);
        self.pizzas.push(pizza);
        Ok(())
    }

    /// `try_add` flattened to a success flag
    pub fn add(&mut self, pizza: PizzaEntry) -> bool {
        match self.try_add(pizza) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("add rejected: {}", e);
                false
            }
        }
    }

    /// Validate, then add. Used by the form so rejection reasons stay apart.
    pub fn submit(&mut self, pizza: PizzaEntry) -> MenuResult<()> {
        pizza.validate()?;
        self.try_add(pizza)
    }

    /// Drop every pizza named `name`.
    ///
    /// The stored copy is filtered from its own insertion order, not from the
    /// working list, so a display sort never leaks into storage. Unknown names
    /// are a no-op on the list but still rewrite the store.
    pub fn remove(&mut self, name: &str) -> MenuResult<()> {
        let mut original = self.storage.load();
        original.retain(|p| p.name != name);
        self.storage.save(&original)?;

        let before = self.pizzas.len();
        self.pizzas.retain(|p| p.name != name);
        if self.pizzas.len() == before {
            log::debug!("remove: no pizza named \"{}\"", name);
        } else {
            log::info!("removed pizza \"{}\"", name);
        }
        Ok(())
    }

    /// Toggle the sort state for `field` and re-order the working list.
    ///
    /// The sort is stable, and descending reverses the comparison rather than
    /// the list, so ties keep their relative order either way.
    pub fn sort(&mut self, field: SortField) {
        self.sort_state.toggle(field);
        let direction = self.sort_state.direction;
        self.pizzas.sort_by(|a, b| {
            let ordering = compare_by(field, a, b);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
        log::debug!("sorted by {} {:?}", field.as_str(), direction);
    }
}

fn compare_by(field: SortField, a: &PizzaEntry, b: &PizzaEntry) -> Ordering {
    match field {
        SortField::Name => locale_compare(&a.name, &b.name),
        SortField::Price => a.price.total_cmp(&b.price),
        SortField::Heat => a.heat.cmp(&b.heat),
    }
}

#[cfg(target_arch = "wasm32")]
fn locale_compare(a: &str, b: &str) -> Ordering {
    js_sys::JsString::from(a)
        .locale_compare(b, &js_sys::Array::new(), &js_sys::Object::new())
        .cmp(&0)
}

// No ICU off the browser: case-insensitive, then byte order.
#[cfg(not(target_arch = "wasm32"))]
fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::STORAGE_KEY;
    use crate::storage::MemorySessionStore;
    use std::cell::Cell;

    fn margherita() -> PizzaEntry {
        PizzaEntry::new("Margherita", 10.0, 1, &["cheese", "tomato"], "m1")
    }

    fn diablo() -> PizzaEntry {
        PizzaEntry::new("Diablo", 12.0, 3, &["chili", "cheese", "salami"], "d1")
    }

    fn empty_menu() -> MenuManager<MemorySessionStore> {
        MenuManager::new(MemorySessionStore::new())
    }

    fn names<S: SessionStore>(menu: &MenuManager<S>) -> Vec<String> {
        menu.pizzas().iter().map(|p| p.name.clone()).collect()
    }

    fn persisted_names<S: SessionStore>(menu: &MenuManager<S>) -> Vec<String> {
        menu.persisted().into_iter().map(|p| p.name).collect()
    }

    /// Store whose writes can be switched off
    #[derive(Default)]
    struct FlakyStore {
        inner: MemorySessionStore,
        fail_writes: Cell<bool>,
    }

    impl SessionStore for FlakyStore {
        fn get_item(&self, key: &str) -> Option<String> {
            self.inner.get_item(key)
        }

        fn set_item(&self, key: &str, value: &str) -> MenuResult<()> {
            if self.fail_writes.get() {
                return Err(MenuError::Storage("quota exceeded".to_string()));
            }
            self.inner.set_item(key, value)
        }
    }

    #[test]
    fn test_add_appends_and_persists() {
        let mut menu = empty_menu();
        assert!(menu.add(margherita()));
        assert_eq!(menu.pizzas().len(), 1);
        assert_eq!(menu.persisted(), vec![margherita()]);
    }

    #[test]
    fn test_add_rejects_duplicate_name() {
        let mut menu = empty_menu();
        assert!(menu.add(margherita()));

        let mut copy = diablo();
        copy.name = "Margherita".to_string();
        assert!(!menu.add(copy.clone()));
        assert_eq!(menu.try_add(copy), Err(MenuError::DuplicateName("Margherita".to_string())));
        assert_eq!(menu.pizzas().len(), 1);
        assert_eq!(menu.persisted().len(), 1);
    }

    #[test]
    fn test_duplicate_check_is_case_sensitive() {
        let mut menu = empty_menu();
        assert!(menu.add(margherita()));
        let mut lower = margherita();
        lower.name = "margherita".to_string();
        assert!(menu.add(lower));
        assert_eq!(menu.pizzas().len(), 2);
    }

    #[test]
    fn test_submit_keeps_validation_apart_from_duplicates() {
        let mut menu = empty_menu();
        let mut mild = margherita();
        mild.heat = 0;
        assert_eq!(menu.submit(mild), Err(MenuError::HeatOutOfRange(0)));
        assert!(menu.pizzas().is_empty());

        assert_eq!(menu.submit(margherita()), Ok(()));
        assert_eq!(
            menu.submit(margherita()),
            Err(MenuError::DuplicateName("Margherita".to_string()))
        );
    }

    #[test]
    fn test_remove_unknown_name_is_noop() {
        let mut menu = empty_menu();
        menu.add(margherita());
        menu.remove("Hawaiian").unwrap();
        assert_eq!(menu.pizzas(), &[margherita()]);
        assert_eq!(menu.persisted(), vec![margherita()]);
    }

    #[test]
    fn test_sort_toggle_rule() {
        let mut menu = empty_menu();
        menu.sort(SortField::Price);
        assert_eq!(menu.sort_state().direction, SortDirection::Ascending);
        menu.sort(SortField::Price);
        assert_eq!(menu.sort_state().direction, SortDirection::Descending);
        menu.sort(SortField::Heat);
        assert_eq!(
            menu.sort_state(),
            SortState::new(SortField::Heat, SortDirection::Ascending)
        );
    }

    #[test]
    fn test_first_name_sort_is_ascending() {
        let mut menu = empty_menu();
        menu.add(PizzaEntry::new("Beta", 1.0, 1, &["a", "b"], "p"));
        menu.add(PizzaEntry::new("Alpha", 1.0, 1, &["a", "b"], "p"));
        assert_eq!(menu.sort_state().field, None);

        menu.sort(SortField::Name);
        assert_eq!(menu.sort_state(), SortState::new(SortField::Name, SortDirection::Ascending));
        assert_eq!(names(&menu), vec!["Alpha", "Beta"]);

        menu.sort(SortField::Name);
        assert_eq!(names(&menu), vec!["Beta", "Alpha"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut menu = empty_menu();
        menu.add(PizzaEntry::new("First", 9.0, 2, &["a", "b"], "p"));
        menu.add(PizzaEntry::new("Cheap", 5.0, 1, &["a", "b"], "p"));
        menu.add(PizzaEntry::new("Second", 9.0, 3, &["a", "b"], "p"));

        menu.sort(SortField::Price);
        assert_eq!(names(&menu), vec!["Cheap", "First", "Second"]);
        menu.sort(SortField::Price);
        assert_eq!(names(&menu), vec!["First", "Second", "Cheap"]);
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let mut menu = empty_menu();
        menu.add(PizzaEntry::new("calzone", 1.0, 1, &["a", "b"], "p"));
        menu.add(PizzaEntry::new("Boscaiola", 1.0, 1, &["a", "b"], "p"));
        menu.add(PizzaEntry::new("Arrabbiata", 1.0, 1, &["a", "b"], "p"));
        menu.sort(SortField::Heat);
        menu.sort(SortField::Name);
        assert_eq!(names(&menu), vec!["Arrabbiata", "Boscaiola", "calzone"]);
    }

    #[test]
    fn test_sort_does_not_touch_storage() {
        let mut menu = empty_menu();
        menu.add(margherita());
        menu.add(diablo());
        menu.sort(SortField::Heat);
        menu.sort(SortField::Heat);
        assert_eq!(names(&menu), vec!["Diablo", "Margherita"]);
        assert_eq!(persisted_names(&menu), vec!["Margherita", "Diablo"]);
    }

    #[test]
    fn test_add_after_sort_appends_at_end() {
        let mut menu = empty_menu();
        menu.add(diablo());
        menu.add(margherita());
        menu.sort(SortField::Price);
        menu.add(PizzaEntry::new("Bianca", 8.0, 1, &["cheese", "garlic"], "b1"));
        assert_eq!(names(&menu), vec!["Margherita", "Diablo", "Bianca"]);
        assert_eq!(persisted_names(&menu), vec!["Diablo", "Margherita", "Bianca"]);
    }

    #[test]
    fn test_remove_keeps_insertion_order_in_storage() {
        let mut menu = empty_menu();
        menu.add(PizzaEntry::new("C", 3.0, 1, &["a", "b"], "p"));
        menu.add(PizzaEntry::new("A", 1.0, 1, &["a", "b"], "p"));
        menu.add(PizzaEntry::new("B", 2.0, 1, &["a", "b"], "p"));
        menu.sort(SortField::Price);
        assert_eq!(names(&menu), vec!["A", "B", "C"]);

        menu.remove("B").unwrap();
        assert_eq!(names(&menu), vec!["A", "C"]);
        assert_eq!(persisted_names(&menu), vec!["C", "A"]);
    }

    #[test]
    fn test_new_session_restores_stored_order() {
        let store = MemorySessionStore::with_item(
            STORAGE_KEY,
            r#"[{"name":"Diablo","price":"12","heat":"3","toppings":["chili","cheese"],"photo":"d1"},
                {"name":"Margherita","price":10,"heat":1,"toppings":["cheese","tomato"],"photo":"m1"}]"#,
        );
        let menu = MenuManager::new(store);
        assert_eq!(names(&menu), vec!["Diablo", "Margherita"]);
        assert_eq!(menu.sort_state(), SortState::default());
    }

    #[test]
    fn test_malformed_store_starts_empty_and_normalizes() {
        let menu = MenuManager::new(MemorySessionStore::with_item(STORAGE_KEY, r#"{"oops":true}"#));
        assert!(menu.pizzas().is_empty());
        assert_eq!(menu.storage().store().get_item(STORAGE_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_failed_write_leaves_menu_unchanged() {
        let mut menu = MenuManager::new(FlakyStore::default());
        assert!(menu.add(margherita()));

        menu.storage().store().fail_writes.set(true);
        assert_eq!(
            menu.try_add(diablo()),
            Err(MenuError::Storage("quota exceeded".to_string()))
        );
        assert!(menu.remove("Margherita").is_err());
        assert_eq!(names(&menu), vec!["Margherita"]);
        assert_eq!(menu.persisted(), vec![margherita()]);
    }

    #[test]
    fn test_end_to_end_session() {
        let mut menu = empty_menu();

        assert!(menu.add(margherita()));
        assert_eq!(names(&menu), vec!["Margherita"]);

        assert!(!menu.add(margherita()));
        assert_eq!(names(&menu), vec!["Margherita"]);

        assert!(menu.add(diablo()));
        assert_eq!(names(&menu), vec!["Margherita", "Diablo"]);

        menu.sort(SortField::Price);
        assert_eq!(names(&menu), vec!["Margherita", "Diablo"]);

        menu.sort(SortField::Price);
        assert_eq!(names(&menu), vec!["Diablo", "Margherita"]);

        menu.remove("Margherita").unwrap();
        assert_eq!(names(&menu), vec!["Diablo"]);
        assert_eq!(menu.persisted(), vec![diablo()]);
    }
}
