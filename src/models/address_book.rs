//! AddressBook model: all records of a session, keyed by contact name.

use super::record::Record;
use crate::domain::ValidationError;
use std::collections::HashMap;
use tracing::debug;

/// A keyed collection of [`Record`]s.
///
/// Keys are the records' own names. Enumeration follows first-insertion
/// order: overwriting a name keeps its position, deleting and re-adding it
/// moves it to the end.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    data: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name.
    ///
    /// An existing record with the same name is silently replaced, not merged.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.data.insert(key.clone(), record).is_some() {
            debug!(contact = %key, "Replaced existing record");
        } else {
            self.order.push(key);
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.data.get(name)
    }

    /// Remove a record. Returns `false` if no record has that name.
    pub fn delete(&mut self, name: &str) -> bool {
        if self.data.remove(name).is_none() {
            return false;
        }
        self.order.retain(|key| key != name);
        true
    }

    /// Replace all phones of the named record with `new_phone`.
    ///
    /// Returns `Ok(false)` without side effects if the name is absent.
    ///
    /// # Errors
    ///
    /// Propagates `ValidationError::InvalidPhone` from [`Record::edit_phone`];
    /// the record is left unchanged in that case.
    pub fn edit_phone(&mut self, name: &str, new_phone: &str) -> Result<bool, ValidationError> {
        match self.data.get_mut(name) {
            Some(record) => {
                record.edit_phone(new_phone)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Whether a record with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.data.contains_key(name)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the book has no records.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over records in enumeration order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            keys: self.order.iter(),
            data: &self.data,
        }
    }

    /// Collect references to all records in enumeration order.
    pub fn records(&self) -> Vec<&Record> {
        self.iter().collect()
    }
}

/// Iterator over the records of an [`AddressBook`] in enumeration order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    keys: std::slice::Iter<'a, String>,
    data: &'a HashMap<String, Record>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let data = self.data;
        self.keys.by_ref().find_map(|key| data.get(key))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.keys.len()))
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phones: &[&str]) -> Record {
        let mut record = Record::new(name).unwrap();
        for phone in phones {
            record.add_phone(phone);
        }
        record
    }

    fn names(book: &AddressBook) -> Vec<&str> {
        book.iter().map(|r| r.name().as_str()).collect()
    }

    #[test]
    fn test_new_book_is_empty() {
        let book = AddressBook::new();
        assert!(book.is_empty());
        assert_eq!(book.len(), 0);
        assert!(book.records().is_empty());
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", &["0123456789"]));

        let found = book.find("Alice").unwrap();
        assert_eq!(found.to_string(), "Contact name: Alice, phones: 0123456789");
        assert!(book.find("alice").is_none());
        assert!(book.contains("Alice"));
    }

    // Replace-on-add is intentional: the second record wins outright.
    #[test]
    fn test_add_same_name_overwrites() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", &["1111111111", "2222222222"]));
        book.add_record(record("Alice", &["3333333333"]));

        assert_eq!(book.len(), 1);
        assert_eq!(book.find("Alice"), Some(&record("Alice", &["3333333333"])));
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", &[]));
        book.add_record(record("Bob", &[]));
        book.add_record(record("Alice", &["1111111111"]));

        assert_eq!(names(&book), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_delete() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", &[]));
        book.add_record(record("Bob", &[]));

        assert!(!book.delete("Carol"));
        assert_eq!(book.len(), 2);

        assert!(book.delete("Alice"));
        assert_eq!(book.len(), 1);
        assert!(book.find("Alice").is_none());
        assert!(!book.delete("Alice"));
        assert_eq!(names(&book), vec!["Bob"]);
    }

    #[test]
    fn test_readd_after_delete_moves_to_end() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", &[]));
        book.add_record(record("Bob", &[]));
        book.delete("Alice");
        book.add_record(record("Alice", &[]));

        assert_eq!(names(&book), vec!["Bob", "Alice"]);
    }

    #[test]
    fn test_edit_phone_absent() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", &["1111111111"]));

        assert_eq!(book.edit_phone("Bob", "2222222222"), Ok(false));
        assert_eq!(book.len(), 1);
        assert_eq!(book.find("Alice"), Some(&record("Alice", &["1111111111"])));
    }

    #[test]
    fn test_edit_phone_present() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", &["1111111111", "3333333333"]));

        assert_eq!(book.edit_phone("Alice", "2222222222"), Ok(true));
        let phones: Vec<&str> = book
            .find("Alice")
            .unwrap()
            .phones()
            .iter()
            .map(|p| p.as_str())
            .collect();
        assert_eq!(phones, vec!["2222222222"]);
    }

    // Unlike add_phone, a bad number on edit surfaces as an error.
    #[test]
    fn test_edit_phone_invalid_propagates() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", &["1111111111"]));

        let result = book.edit_phone("Alice", "22");
        assert_eq!(result, Err(ValidationError::InvalidPhone("22".to_string())));
        assert_eq!(book.find("Alice"), Some(&record("Alice", &["1111111111"])));
    }

    #[test]
    fn test_iter_follows_order_after_delete() {
        let mut book = AddressBook::new();
        for name in ["Alice", "Bob", "Carol"] {
            book.add_record(record(name, &[]));
        }
        book.delete("Bob");

        let mut iter = book.iter();
        assert_eq!(iter.size_hint(), (0, Some(2)));
        assert_eq!(iter.next().map(|r| r.name().as_str()), Some("Alice"));
        assert_eq!(iter.next().map(|r| r.name().as_str()), Some("Carol"));
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_into_iterator() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", &[]));
        book.add_record(record("Bob", &[]));

        let mut seen = Vec::new();
        for record in &book {
            seen.push(record.name().to_string());
        }
        assert_eq!(seen, vec!["Alice".to_string(), "Bob".to_string()]);
    }
}
