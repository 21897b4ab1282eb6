use crate::errors::AppError;
use crate::storage::Persistence;
use tracing::{debug, info};

use super::contact::Contact;

/// Insertion-ordered contacts for the current session.
#[derive(Debug, Default)]
pub struct ContactStore {
    mem: Vec<Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self { mem: Vec::new() }
    }

    pub fn contact_list(&self) -> &[Contact] {
        &self.mem
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }

    pub fn add_contact(&mut self, contact: Contact) {
        debug!(name = contact.name(), "adding contact");
        self.mem.push(contact);
    }

    /// Appends contacts in the order given.
    pub fn extend<I>(&mut self, contacts: I)
    where
        I: IntoIterator<Item = Contact>,
    {
        self.mem.extend(contacts);
    }

    /// Position of the first contact whose name matches, ignoring case.
    pub fn get_index_by_name(&self, name: &str) -> Option<usize> {
        self.mem.iter().position(|cont| cont.name_matches(name))
    }

    pub fn search_by_name(&self, name: &str) -> Option<&Contact> {
        self.get_index_by_name(name).map(|index| &self.mem[index])
    }

    /// Removes the first contact matching `name` and hands it back.
    /// Later duplicates are left in place.
    pub fn remove_by_name(&mut self, name: &str) -> Result<Contact, AppError> {
        match self.get_index_by_name(name) {
            Some(index) => {
                let removed = self.mem.remove(index);
                debug!(name = removed.name(), index, "removed contact");
                Ok(removed)
            }
            None => Err(AppError::NotFound(format!("Contact with Name '{}'", name))),
        }
    }

    /// Replaces the session contents with whatever `storage` holds.
    ///
    /// The store is cleared first, so a failed load leaves it empty.
    pub fn load(&mut self, storage: &dyn Persistence) -> Result<usize, AppError> {
        self.mem.clear();
        self.mem = storage.load()?;

        info!(
            count = self.mem.len(),
            medium = storage.get_medium(),
            "contacts loaded"
        );
        Ok(self.mem.len())
    }

    pub fn save(&self, storage: &dyn Persistence) -> Result<(), AppError> {
        storage.save(&self.mem)?;

        info!(
            count = self.mem.len(),
            medium = storage.get_medium(),
            "contacts saved"
        );
        Ok(())
    }
}
