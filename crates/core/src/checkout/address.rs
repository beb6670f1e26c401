//! Saved delivery addresses.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::AddressId;

/// A saved delivery address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: AddressId,
    /// Short name shown in the picker ("Home", "Work").
    pub label: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub is_default: bool,
}

impl Address {
    /// Single-line form, e.g. `123 Main St, Apt 4B, New York, NY 10001`.
    #[must_use]
    pub fn one_line(&self) -> String {
        let street = match self.address_line2.as_deref().filter(|s| !s.is_empty()) {
            Some(line2) => format!("{}, {line2}", self.address_line1),
            None => self.address_line1.clone(),
        };
        format!(
            "{street}, {}, {} {}",
            self.city, self.state, self.postal_code
        )
    }
}

/// Read-only source of a customer's saved addresses.
///
/// The checkout session only keeps an [`AddressId`]; it resolves the full
/// address through this trait when it needs one.
pub trait AddressDirectory {
    /// All addresses, in display order.
    fn addresses(&self) -> &[Address];

    /// The address flagged as default, if any.
    fn default_address(&self) -> Option<&Address> {
        self.addresses().iter().find(|a| a.is_default)
    }

    fn find(&self, id: &AddressId) -> Option<&Address> {
        self.addresses().iter().find(|a| &a.id == id)
    }
}

/// Errors building an [`InMemoryAddressBook`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressBookError {
    #[error("more than one default address: {first} and {second}")]
    MultipleDefaults { first: AddressId, second: AddressId },

    #[error("duplicate address id: {0}")]
    DuplicateId(AddressId),
}

/// Fixed list of addresses held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryAddressBook {
    addresses: Vec<Address>,
}

impl InMemoryAddressBook {
    /// # Errors
    ///
    /// Returns [`AddressBookError`] if two addresses share an id or more than
    /// one is flagged default.
    pub fn new(addresses: Vec<Address>) -> Result<Self, AddressBookError> {
        let mut default: Option<&AddressId> = None;
        for (index, address) in addresses.iter().enumerate() {
            if addresses
                .iter()
                .take(index)
                .any(|earlier| earlier.id == address.id)
            {
                return Err(AddressBookError::DuplicateId(address.id.clone()));
            }
            if address.is_default {
                if let Some(first) = default {
                    return Err(AddressBookError::MultipleDefaults {
                        first: first.clone(),
                        second: address.id.clone(),
                    });
                }
                default = Some(&address.id);
            }
        }
        Ok(Self { addresses })
    }
}

impl AddressDirectory for InMemoryAddressBook {
    fn addresses(&self) -> &[Address] {
        &self.addresses
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn address(id: &str, is_default: bool) -> Address {
        Address {
            id: AddressId::new(id),
            label: format!("Address {id}"),
            address_line1: "123 Main St".to_string(),
            address_line2: Some("Apt 4B".to_string()),
            city: "New York".to_string(),
            state: "NY".to_string(),
            postal_code: "10001".to_string(),
            is_default,
        }
    }

    #[test]
    fn test_default_and_find() {
        let book = InMemoryAddressBook::new(vec![address("1", false), address("2", true)]).unwrap();

        assert_eq!(book.default_address().unwrap().id, AddressId::new("2"));
        assert_eq!(book.find(&AddressId::new("1")).unwrap().label, "Address 1");
        assert!(book.find(&AddressId::new("3")).is_none());
    }

    #[test]
    fn test_no_default() {
        let book = InMemoryAddressBook::new(vec![address("1", false)]).unwrap();
        assert!(book.default_address().is_none());
        assert!(InMemoryAddressBook::default().default_address().is_none());
    }

    #[test]
    fn test_rejects_two_defaults() {
        let err = InMemoryAddressBook::new(vec![address("1", true), address("2", true)]).unwrap_err();
        assert_eq!(
            err,
            AddressBookError::MultipleDefaults {
                first: AddressId::new("1"),
                second: AddressId::new("2"),
            }
        );
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = InMemoryAddressBook::new(vec![address("1", false), address("1", false)]).unwrap_err();
        assert_eq!(err, AddressBookError::DuplicateId(AddressId::new("1")));
    }

    #[test]
    fn test_one_line() {
        let mut home = address("1", true);
        assert_eq!(home.one_line(), "123 Main St, Apt 4B, New York, NY 10001");

        home.address_line2 = None;
        assert_eq!(home.one_line(), "123 Main St, New York, NY 10001");
    }
}
