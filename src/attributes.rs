//! Field mapping from domain-shaped search input to the entity schema's
//! wire payload.
//!
//! Everything here is pure: same input, same payload, no I/O. The only
//! failure mode is an explicit type code outside its allow-list, which
//! fails fast before any network call.

use serde_json::{json, Map, Value};

use crate::errors::Error;
use crate::models::{AdditionalInfo, Address, EntityKind, Identifier, Name, Phone, SearchInput};

// ============ Schema Type Tables ============

/// Address types accepted by the schema.
pub const VALID_ADDRESS_TYPES: &[&str] = &["Current", "Mailing", "Previous", "Unknown"];

/// Phone types accepted by the schema.
pub const VALID_PHONE_TYPES: &[&str] = &["Business", "Cell", "Fax", "Home", "Work", "Unknown"];

/// Identifier types accepted by the schema.
pub const VALID_ID_TYPES: &[&str] = &[
    "ABARouting",
    "Account",
    "AlienRegistration",
    "BankIdentifierCode",
    "BankPartyID",
    "Cedula",
    "ChipsUID",
    "CustomerNumber",
    "DriversLicense",
    "DUNS",
    "EFTCode",
    "EIN",
    "GLN",
    "IBAN",
    "IBEI",
    "MedicareID",
    "MedicareReference",
    "Member",
    "Military",
    "National",
    "NIT",
    "Other",
    "Passport",
    "ProprietaryUID",
    "ProviderID",
    "RTACardNumber",
    "SSN",
    "SwiftBEI",
    "SwiftBIC",
    "TaxID",
    "VISA",
];

/// Additional-info types accepted by the schema.
pub const VALID_ADDITIONAL_INFO_TYPES: &[&str] = &[
    "Citizenship",
    "Complexion",
    "DistinguishingMarks",
    "DOB",
    "EyeColor",
    "HairColor",
    "Height",
    "Incident",
    "IPAddress",
    "MothersName",
    "Nationality",
    "Occupation",
    "Other",
    "PlaceOfBirth",
    "Position",
    "Race",
    "VesselCallSign",
    "VesselFlag",
    "VesselGRT",
    "VesselOwner",
    "VesselTonnage",
    "VesselType",
    "Weight",
];

// ============ Record Kinds ============

/// The record kinds of the entity schema. Each owns its wire name, its
/// allow-list, and its default type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// `InputAddress` records under `Addresses`.
    Address,
    /// `InputId` records under `IDs`.
    Identifier,
    /// `InputPhone` records under `Phones`.
    Phone,
    /// `InputAdditionalInfo` records under `AdditionalInfo`.
    AdditionalInfo,
}

impl RecordKind {
    /// Wire name wrapping each record of this kind.
    pub fn wire_name(&self) -> &'static str {
        match self {
            RecordKind::Address => "InputAddress",
            RecordKind::Identifier => "InputId",
            RecordKind::Phone => "InputPhone",
            RecordKind::AdditionalInfo => "InputAdditionalInfo",
        }
    }

    /// Allow-list an explicit type code must belong to.
    pub fn allowed_types(&self) -> &'static [&'static str] {
        match self {
            RecordKind::Address => VALID_ADDRESS_TYPES,
            RecordKind::Identifier => VALID_ID_TYPES,
            RecordKind::Phone => VALID_PHONE_TYPES,
            RecordKind::AdditionalInfo => VALID_ADDITIONAL_INFO_TYPES,
        }
    }

    /// Default type applied when none is given. Additional-info records
    /// have no default; they are emitted untyped and left to the remote
    /// schema.
    pub fn default_type(&self) -> Option<&'static str> {
        match self {
            RecordKind::Address => Some("Unknown"),
            RecordKind::Identifier => Some("Other"),
            RecordKind::Phone => Some("Unknown"),
            RecordKind::AdditionalInfo => None,
        }
    }
}

fn validate_type(kind: RecordKind, type_: Option<&str>) -> Result<(), Error> {
    match type_ {
        None => Ok(()),
        Some(value) if kind.allowed_types().contains(&value) => Ok(()),
        Some(value) => Err(Error::InvalidTypeCode {
            record: kind.wire_name(),
            value: value.to_string(),
            allowed: kind.allowed_types(),
        }),
    }
}

// ============ Payload Building ============

/// Value/type accessors shared by the three `{Number, Type}` record
/// shapes, so one builder serves ids, phones, and additional info.
trait TypedRecord {
    fn value(&self) -> Option<&str>;
    fn type_code(&self) -> Option<&str>;
}

impl TypedRecord for Identifier {
    fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
    fn type_code(&self) -> Option<&str> {
        self.type_.as_deref()
    }
}

impl TypedRecord for Phone {
    fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
    fn type_code(&self) -> Option<&str> {
        self.type_.as_deref()
    }
}

impl TypedRecord for AdditionalInfo {
    fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
    fn type_code(&self) -> Option<&str> {
        self.type_.as_deref()
    }
}

/// Builds the `input.Records.InputRecord.Entity` wire payload for one
/// search.
///
/// Absent optional fields are omitted from the payload entirely, never
/// emitted as null. A supplied-but-empty list stays an empty list; an
/// absent list emits no key at all. Name subfields follow the same rule,
/// and a name with no present subfield emits no `Name` block.
///
/// # Arguments
///
/// * `kind` - Whether the entity is an individual or a business.
/// * `input` - Domain-shaped attributes of the entity.
pub fn format_input(kind: EntityKind, input: &SearchInput) -> Result<Value, Error> {
    let mut entity = Map::new();
    entity.insert("EntityType".to_string(), json!(kind.as_str()));

    if let Some(name) = &input.name {
        let block = name_block(name);
        if !block.is_empty() {
            entity.insert("Name".to_string(), Value::Object(block));
        }
    }

    if let Some(addresses) = &input.addresses {
        entity.insert("Addresses".to_string(), address_records(addresses)?);
    }
    if let Some(ids) = &input.ids {
        entity.insert("IDs".to_string(), record_list(RecordKind::Identifier, ids)?);
    }
    if let Some(phones) = &input.phones {
        entity.insert("Phones".to_string(), record_list(RecordKind::Phone, phones)?);
    }
    if let Some(gender) = &input.gender {
        entity.insert("Gender".to_string(), json!(gender));
    }
    if let Some(info) = &input.additional_info {
        entity.insert(
            "AdditionalInfo".to_string(),
            record_list(RecordKind::AdditionalInfo, info)?,
        );
    }

    Ok(json!({
        "input": {
            "Records": {
                "InputRecord": {
                    "Entity": entity
                }
            }
        }
    }))
}

fn name_block(name: &Name) -> Map<String, Value> {
    let mut block = Map::new();
    if let Some(first) = &name.first_name {
        block.insert("First".to_string(), json!(first));
    }
    if let Some(last) = &name.last_name {
        block.insert("Last".to_string(), json!(last));
    }
    if let Some(full) = &name.full_name {
        block.insert("Full".to_string(), json!(full));
    }
    if let Some(middle) = &name.middle_name {
        block.insert("Middle".to_string(), json!(middle));
    }
    block
}

fn address_records(addresses: &[Address]) -> Result<Value, Error> {
    let kind = RecordKind::Address;
    let mut records = Vec::with_capacity(addresses.len());
    for address in addresses {
        validate_type(kind, address.type_.as_deref())?;

        let mut fields = Map::new();
        if let Some(city) = &address.city {
            fields.insert("City".to_string(), json!(city));
        }
        if let Some(country) = &address.country {
            fields.insert("Country".to_string(), json!(country));
        }
        if let Some(line) = &address.address {
            // The schema wants the primary street line in both fields.
            fields.insert("FullAddress".to_string(), json!(line));
            fields.insert("Street1".to_string(), json!(line));
        }
        if let Some(line_2) = &address.address_2 {
            fields.insert("Street2".to_string(), json!(line_2));
        }
        if let Some(postal_code) = &address.postal_code {
            fields.insert("PostalCode".to_string(), json!(postal_code));
        }
        if let Some(state) = &address.state {
            fields.insert("State".to_string(), json!(state));
        }
        if let Some(code) = address.type_.as_deref().or(kind.default_type()) {
            fields.insert("Type".to_string(), json!(code));
        }

        let mut record = Map::new();
        record.insert(kind.wire_name().to_string(), Value::Object(fields));
        records.push(Value::Object(record));
    }
    Ok(Value::Array(records))
}

fn record_list<R: TypedRecord>(kind: RecordKind, entries: &[R]) -> Result<Value, Error> {
    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        validate_type(kind, entry.type_code())?;

        let mut fields = Map::new();
        if let Some(value) = entry.value() {
            fields.insert("Number".to_string(), json!(value));
        }
        if let Some(code) = entry.type_code().or(kind.default_type()) {
            fields.insert("Type".to_string(), json!(code));
        }

        let mut record = Map::new();
        record.insert(kind.wire_name().to_string(), Value::Object(fields));
        records.push(Value::Object(record));
    }
    Ok(Value::Array(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(payload: &Value) -> &Value {
        &payload["input"]["Records"]["InputRecord"]["Entity"]
    }

    #[test]
    fn maps_name_only_individual() {
        let input = SearchInput {
            name: Some(Name {
                first_name: Some("Donald".into()),
                last_name: Some("Trump".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let payload = format_input(EntityKind::Individual, &input).unwrap();
        let entity = entity(&payload);

        assert_eq!(entity["EntityType"], "Individual");
        assert_eq!(entity["Name"], json!({"First": "Donald", "Last": "Trump"}));
        assert!(entity.get("Addresses").is_none());
        assert!(entity.get("IDs").is_none());
        assert!(entity.get("Phones").is_none());
        assert!(entity.get("AdditionalInfo").is_none());
        assert!(entity.get("Gender").is_none());
    }

    #[test]
    fn maps_full_name_business() {
        let input = SearchInput {
            name: Some(Name {
                full_name: Some("Acme Holdings Ltd".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let payload = format_input(EntityKind::Business, &input).unwrap();
        let entity = entity(&payload);

        assert_eq!(entity["EntityType"], "Business");
        assert_eq!(entity["Name"], json!({"Full": "Acme Holdings Ltd"}));
    }

    #[test]
    fn omits_name_block_when_no_subfield_present() {
        let input = SearchInput {
            name: Some(Name::default()),
            ..Default::default()
        };

        let payload = format_input(EntityKind::Individual, &input).unwrap();
        assert!(entity(&payload).get("Name").is_none());
    }

    #[test]
    fn empty_lists_stay_empty_lists() {
        let input = SearchInput {
            addresses: Some(vec![]),
            ids: Some(vec![]),
            phones: Some(vec![]),
            ..Default::default()
        };

        let payload = format_input(EntityKind::Individual, &input).unwrap();
        let entity = entity(&payload);

        assert_eq!(entity["Addresses"], json!([]));
        assert_eq!(entity["IDs"], json!([]));
        assert_eq!(entity["Phones"], json!([]));
    }

    #[test]
    fn maps_address_with_absent_state_omitted() {
        let input = SearchInput {
            addresses: Some(vec![Address {
                city: Some("Toronto".into()),
                country: Some("Canada".into()),
                address: Some("123 Fake Street".into()),
                postal_code: Some("M5B 2H1".into()),
                type_: Some("Current".into()),
                ..Default::default()
            }]),
            ..Default::default()
        };

        let payload = format_input(EntityKind::Individual, &input).unwrap();
        assert_eq!(
            entity(&payload)["Addresses"],
            json!([{
                "InputAddress": {
                    "City": "Toronto",
                    "Country": "Canada",
                    "FullAddress": "123 Fake Street",
                    "Street1": "123 Fake Street",
                    "PostalCode": "M5B 2H1",
                    "Type": "Current"
                }
            }])
        );
    }

    #[test]
    fn street_lines_fill_full_address_street1_and_street2() {
        let input = SearchInput {
            addresses: Some(vec![Address {
                address: Some("1 Main St".into()),
                address_2: Some("Suite 4".into()),
                ..Default::default()
            }]),
            ..Default::default()
        };

        let payload = format_input(EntityKind::Individual, &input).unwrap();
        let record = &entity(&payload)["Addresses"][0]["InputAddress"];
        assert_eq!(record["FullAddress"], "1 Main St");
        assert_eq!(record["Street1"], "1 Main St");
        assert_eq!(record["Street2"], "Suite 4");
    }

    #[test]
    fn address_type_defaults_to_unknown() {
        let input = SearchInput {
            addresses: Some(vec![Address {
                city: Some("Lisbon".into()),
                ..Default::default()
            }]),
            ..Default::default()
        };

        let payload = format_input(EntityKind::Individual, &input).unwrap();
        assert_eq!(
            entity(&payload)["Addresses"][0]["InputAddress"]["Type"],
            "Unknown"
        );
    }

    #[test]
    fn invalid_address_type_is_rejected_before_any_call() {
        let input = SearchInput {
            addresses: Some(vec![Address {
                type_: Some("Cottage".into()),
                ..Default::default()
            }]),
            ..Default::default()
        };

        let err = format_input(EntityKind::Individual, &input).unwrap_err();
        match err {
            Error::InvalidTypeCode {
                record,
                value,
                allowed,
            } => {
                assert_eq!(record, "InputAddress");
                assert_eq!(value, "Cottage");
                assert_eq!(allowed, VALID_ADDRESS_TYPES);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn maps_identifier_list_with_default_type() {
        let input = SearchInput {
            ids: Some(vec![
                Identifier {
                    value: Some("123-45-6789".into()),
                    type_: Some("SSN".into()),
                },
                Identifier {
                    value: Some("A999".into()),
                    type_: None,
                },
            ]),
            ..Default::default()
        };

        let payload = format_input(EntityKind::Individual, &input).unwrap();
        assert_eq!(
            entity(&payload)["IDs"],
            json!([
                {"InputId": {"Number": "123-45-6789", "Type": "SSN"}},
                {"InputId": {"Number": "A999", "Type": "Other"}}
            ])
        );
    }

    #[test]
    fn phone_type_defaults_to_unknown() {
        let input = SearchInput {
            phones: Some(vec![Phone {
                value: Some("14165550199".into()),
                type_: None,
            }]),
            ..Default::default()
        };

        let payload = format_input(EntityKind::Individual, &input).unwrap();
        assert_eq!(
            entity(&payload)["Phones"],
            json!([{"InputPhone": {"Number": "14165550199", "Type": "Unknown"}}])
        );
    }

    #[test]
    fn invalid_id_type_names_the_id_table() {
        let input = SearchInput {
            ids: Some(vec![Identifier {
                value: Some("x".into()),
                type_: Some("LibraryCard".into()),
            }]),
            ..Default::default()
        };

        let err = format_input(EntityKind::Individual, &input).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidTypeCode {
                record: "InputId",
                ..
            }
        ));
        assert!(err.to_string().contains("SSN"));
    }

    #[test]
    fn additional_info_has_no_default_type() {
        let input = SearchInput {
            additional_info: Some(vec![AdditionalInfo {
                value: Some("1946-06-14".into()),
                type_: None,
            }]),
            ..Default::default()
        };

        let payload = format_input(EntityKind::Individual, &input).unwrap();
        assert_eq!(
            entity(&payload)["AdditionalInfo"],
            json!([{"InputAdditionalInfo": {"Number": "1946-06-14"}}])
        );
    }

    #[test]
    fn explicit_additional_info_type_is_validated() {
        let input = SearchInput {
            additional_info: Some(vec![AdditionalInfo {
                value: Some("tall".into()),
                type_: Some("ShoeSize".into()),
            }]),
            ..Default::default()
        };

        let err = format_input(EntityKind::Individual, &input).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidTypeCode {
                record: "InputAdditionalInfo",
                ..
            }
        ));
    }

    #[test]
    fn valid_additional_info_type_passes_through() {
        let input = SearchInput {
            additional_info: Some(vec![AdditionalInfo {
                value: Some("1946-06-14".into()),
                type_: Some("DOB".into()),
            }]),
            ..Default::default()
        };

        let payload = format_input(EntityKind::Individual, &input).unwrap();
        assert_eq!(
            entity(&payload)["AdditionalInfo"],
            json!([{"InputAdditionalInfo": {"Number": "1946-06-14", "Type": "DOB"}}])
        );
    }

    #[test]
    fn absent_value_omits_number() {
        let input = SearchInput {
            ids: Some(vec![Identifier {
                value: None,
                type_: Some("Passport".into()),
            }]),
            ..Default::default()
        };

        let payload = format_input(EntityKind::Individual, &input).unwrap();
        assert_eq!(
            entity(&payload)["IDs"],
            json!([{"InputId": {"Type": "Passport"}}])
        );
    }

    #[test]
    fn gender_passes_through_verbatim() {
        let input = SearchInput {
            gender: Some("Male".into()),
            ..Default::default()
        };

        let payload = format_input(EntityKind::Individual, &input).unwrap();
        assert_eq!(entity(&payload)["Gender"], "Male");
    }

    #[test]
    fn mapping_is_deterministic() {
        let input = SearchInput {
            name: Some(Name {
                first_name: Some("Jane".into()),
                last_name: Some("Doe".into()),
                ..Default::default()
            }),
            addresses: Some(vec![Address {
                city: Some("Austin".into()),
                state: Some("TX".into()),
                ..Default::default()
            }]),
            ..Default::default()
        };

        let first = format_input(EntityKind::Individual, &input).unwrap();
        let second = format_input(EntityKind::Individual, &input).unwrap();
        assert_eq!(first, second);
    }
}
