use serde::{Deserialize, Serialize};

// ============ Entity Kind ============

/// Whether a search targets an individual person or a business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    /// A natural person.
    Individual,
    /// A company or other legal entity.
    Business,
}

impl EntityKind {
    /// Wire value for the `EntityType` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Individual => "Individual",
            EntityKind::Business => "Business",
        }
    }
}

// ============ Search Input ============

/// Domain-shaped input for a watchlist search.
///
/// Every field is optional; absent fields are omitted from the wire payload
/// entirely, never sent as null. List fields distinguish "not supplied"
/// (`None`, key omitted) from "supplied empty" (`Some(vec![])`, empty list
/// on the wire).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchInput {
    /// Name of the entity being screened.
    pub name: Option<Name>,
    /// Known addresses.
    pub addresses: Option<Vec<Address>>,
    /// Government or financial identifiers.
    pub ids: Option<Vec<Identifier>>,
    /// Phone numbers.
    pub phones: Option<Vec<Phone>>,
    /// Gender, passed through verbatim.
    pub gender: Option<String>,
    /// Free-form typed attributes (date of birth, nationality, ...).
    pub additional_info: Option<Vec<AdditionalInfo>>,
}

/// Name block of a search input.
///
/// The remote profile expects first + last for individuals and full for
/// businesses; that requirement is enforced by the service, not locally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Name {
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Full or legal name.
    pub full_name: Option<String>,
    /// Middle name.
    pub middle_name: Option<String>,
}

/// One address of the screened entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
    /// Primary street line; feeds both `FullAddress` and `Street1`.
    pub address: Option<String>,
    /// Secondary street line.
    pub address_2: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State or province.
    pub state: Option<String>,
    /// Postal code.
    pub postal_code: Option<String>,
    /// Country.
    pub country: Option<String>,
    /// Address type; validated against the address-type table, defaults to
    /// `Unknown` when absent.
    #[serde(rename = "type")]
    pub type_: Option<String>,
}

/// One identifier (SSN, passport, tax id, ...) of the screened entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Identifier {
    /// Identifier value.
    pub value: Option<String>,
    /// Identifier type; validated against the id-type table, defaults to
    /// `Other` when absent.
    #[serde(rename = "type")]
    pub type_: Option<String>,
}

/// One phone number of the screened entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Phone {
    /// Phone number, passed through verbatim.
    pub value: Option<String>,
    /// Phone type; validated against the phone-type table, defaults to
    /// `Unknown` when absent.
    #[serde(rename = "type")]
    pub type_: Option<String>,
}

/// One free-form attribute of the screened entity.
///
/// Unlike ids and phones there is no default type: an explicit type is
/// validated, an absent type is passed through untyped and left for the
/// remote schema to accept or reject.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdditionalInfo {
    /// Attribute value.
    pub value: Option<String>,
    /// Attribute type (e.g. `DOB`, `Nationality`).
    #[serde(rename = "type")]
    pub type_: Option<String>,
}
