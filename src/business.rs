use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::dispatch::send_request;
use crate::errors::Error;
use crate::fault::FaultCodePattern;
use crate::response::Outcome;
use crate::transport::Transport;

/// Remote operation invoked for business instant-ID verification.
pub const BUSINESS_INSTANT_ID_OPERATION: &str = "business_instant_id";

/// Watchlists screened by default.
pub const DEFAULT_WATCHLISTS: &[&str] = &[
    "BES", "CFTC", "DTC", "EUDT", "FBI", "FCEN", "FAR", "IMW", "OFAC", "OCC", "OSFI", "PEP",
    "SDT", "BIS", "UNNT", "WBIF",
];

/// Date-of-birth match modes accepted by the representative DOB filter.
pub const DOB_MATCH_MODES: &[&str] = &[
    "FuzzyCCYYMMDD",
    "FuzzyCCYYMM",
    "RadiusCCYY",
    "ExactCCYYMMDD",
    "ExactCCYYMM",
];

// ============================================================================
// Request blocks
// ============================================================================

/// Billing and data-use context sent as the `User` block of every
/// instant-ID request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserContext {
    /// Free-form reference recorded on the provider's side.
    pub reference_code: String,
    /// Billing code the call is charged under.
    pub billing_code: String,
    /// GLB data-use purpose code; 5 declares risk-compliance use.
    pub glb_purpose: u32,
    /// Driver's-license data-use purpose code; 3 declares business
    /// verification.
    pub dl_purpose: u32,
    /// End user the search is performed for, where resale rules require
    /// disclosure.
    pub end_user: Option<EndUser>,
}

impl Default for UserContext {
    fn default() -> Self {
        Self {
            reference_code: "PartnerSignup".to_string(),
            billing_code: "FPS".to_string(),
            glb_purpose: 5,
            dl_purpose: 3,
            end_user: None,
        }
    }
}

impl UserContext {
    fn to_value(&self) -> Value {
        let mut block = Map::new();
        block.insert("ReferenceCode".to_string(), json!(self.reference_code));
        block.insert("BillingCode".to_string(), json!(self.billing_code));
        block.insert("GLBPurpose".to_string(), json!(self.glb_purpose));
        block.insert("DLPurpose".to_string(), json!(self.dl_purpose));
        if let Some(end_user) = &self.end_user {
            block.insert("EndUser".to_string(), end_user.to_value());
        }
        Value::Object(block)
    }
}

/// Disclosed end user of a search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndUser {
    pub company_name: String,
    pub street_address: String,
    pub state: String,
    pub zip5: String,
}

impl EndUser {
    fn to_value(&self) -> Value {
        json!({
            "CompanyName": self.company_name,
            "StreetAddress1": self.street_address,
            "State": self.state,
            "Zip5": self.zip5,
        })
    }
}

/// Person name block used inside instant-ID requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonName {
    pub first: String,
    pub last: String,
    pub suffix: Option<String>,
    pub middle: Option<String>,
}

impl PersonName {
    fn to_value(&self) -> Value {
        let mut block = Map::new();
        block.insert("First".to_string(), json!(self.first));
        block.insert("Last".to_string(), json!(self.last));
        if let Some(suffix) = &self.suffix {
            block.insert("Suffix".to_string(), json!(suffix));
        }
        if let Some(middle) = &self.middle {
            block.insert("Middle".to_string(), json!(middle));
        }
        Value::Object(block)
    }
}

/// Date of birth as the schema's year/month/day triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dob {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl From<NaiveDate> for Dob {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl Dob {
    fn to_value(&self) -> Value {
        json!({
            "Year": self.year,
            "Month": self.month,
            "Day": self.day,
        })
    }
}

/// Street address block used inside instant-ID requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreetAddress {
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip5: String,
}

impl StreetAddress {
    fn to_value(&self) -> Value {
        json!({
            "StreetAddress1": self.street_address,
            "City": self.city,
            "State": self.state,
            "Zip5": self.zip5,
        })
    }
}

/// Authorized representative supplied with a business search.
///
/// Every field is optional; absent fields are omitted from the block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorizedRepresentative {
    pub name: Option<PersonName>,
    pub address: Option<StreetAddress>,
    pub age: Option<u32>,
    pub dob: Option<Dob>,
    pub ssn: Option<String>,
    pub driver_license_number: Option<String>,
    pub driver_license_state: Option<String>,
    pub phone10: Option<String>,
    pub former_last_name: Option<String>,
}

impl AuthorizedRepresentative {
    fn to_value(&self) -> Value {
        let mut block = Map::new();
        if let Some(name) = &self.name {
            block.insert("Name".to_string(), name.to_value());
        }
        if let Some(address) = &self.address {
            block.insert("Address".to_string(), address.to_value());
        }
        if let Some(age) = self.age {
            block.insert("Age".to_string(), json!(age));
        }
        if let Some(dob) = &self.dob {
            block.insert("Dob".to_string(), dob.to_value());
        }
        if let Some(ssn) = &self.ssn {
            block.insert("Ssn".to_string(), json!(ssn));
        }
        if let Some(number) = &self.driver_license_number {
            block.insert("DriverLicenseNumber".to_string(), json!(number));
        }
        if let Some(state) = &self.driver_license_state {
            block.insert("DriverLicenseState".to_string(), json!(state));
        }
        if let Some(phone) = &self.phone10 {
            block.insert("Phone10".to_string(), json!(phone));
        }
        if let Some(former) = &self.former_last_name {
            block.insert("FormerLastName".to_string(), json!(former));
        }
        Value::Object(block)
    }
}

/// Optional search criteria accompanying the company name.
///
/// Only present fields are sent; the `SearchBy` block always carries at
/// least the company name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyCriteria {
    /// Alternate or former company name.
    pub alternate_company_name: Option<String>,
    /// Company street address.
    pub company_address: Option<StreetAddress>,
    /// Federal employer identification number.
    pub fein: Option<String>,
    /// Company phone number.
    pub company_phone: Option<String>,
    /// Authorized representative of the company.
    pub authorized_representative: Option<AuthorizedRepresentative>,
    /// Whether representative matches are filtered by date of birth.
    pub use_dob_filter: Option<bool>,
    /// Radius in years for date-of-birth filtering.
    pub dob_radius: Option<u32>,
    /// Date-of-birth match mode; must be one of [`DOB_MATCH_MODES`].
    pub dob_match: Option<String>,
}

impl CompanyCriteria {
    fn validate(&self) -> Result<(), Error> {
        match self.dob_match.as_deref() {
            None => Ok(()),
            Some(mode) if DOB_MATCH_MODES.contains(&mode) => Ok(()),
            Some(mode) => Err(Error::InvalidTypeCode {
                record: "DobMatch",
                value: mode.to_string(),
                allowed: DOB_MATCH_MODES,
            }),
        }
    }

    fn extend_search_by(&self, search_by: &mut Map<String, Value>) {
        if let Some(name) = &self.alternate_company_name {
            search_by.insert("AlternateCompanyName".to_string(), json!(name));
        }
        if let Some(address) = &self.company_address {
            search_by.insert("CompanyAddress".to_string(), address.to_value());
        }
        if let Some(fein) = &self.fein {
            search_by.insert("FEIN".to_string(), json!(fein));
        }
        if let Some(phone) = &self.company_phone {
            search_by.insert("CompanyPhone".to_string(), json!(phone));
        }
        if let Some(representative) = &self.authorized_representative {
            search_by.insert(
                "AuthorizedRepresentative".to_string(),
                representative.to_value(),
            );
        }
        if let Some(use_filter) = self.use_dob_filter {
            search_by.insert("UseDobFilter".to_string(), json!(flag(use_filter)));
        }
        if let Some(radius) = self.dob_radius {
            search_by.insert("DobRadius".to_string(), json!(radius));
        }
        if let Some(mode) = &self.dob_match {
            search_by.insert("DobMatch".to_string(), json!(mode));
        }
    }
}

/// Screening options merged into the top level of every instant-ID
/// request.
///
/// Defaults are fixed at construction through `Default`, so a value set
/// explicitly to `0.0` or `false` is sent as-is and never replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningOptions {
    /// Watchlists screened against; defaults to [`DEFAULT_WATCHLISTS`].
    pub watchlists: Vec<String>,
    /// Whether matched-state overrides are included.
    pub include_ms_override: bool,
    /// Whether driver's-license verification runs.
    pub include_dl_verification: bool,
    /// Whether PO-box compliance checks apply.
    pub po_box_compliance: bool,
    /// Minimum score for a global watchlist hit.
    pub global_watchlist_threshold: f64,
    /// Whether the business-defender model runs.
    pub business_defender: bool,
    /// Whether all risk indicators are returned.
    pub include_all_risk_indicators: bool,
}

impl Default for ScreeningOptions {
    fn default() -> Self {
        Self {
            watchlists: DEFAULT_WATCHLISTS.iter().map(|s| s.to_string()).collect(),
            include_ms_override: false,
            include_dl_verification: false,
            po_box_compliance: false,
            global_watchlist_threshold: 0.84,
            business_defender: false,
            include_all_risk_indicators: false,
        }
    }
}

impl ScreeningOptions {
    fn option_fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert(
            "Watchlists".to_string(),
            json!({ "WatchList": self.watchlists }),
        );
        fields.insert(
            "IncludeMSOverride".to_string(),
            json!(flag(self.include_ms_override)),
        );
        fields.insert(
            "IncludeDLVerification".to_string(),
            json!(flag(self.include_dl_verification)),
        );
        fields.insert(
            "PoBoxCompliance".to_string(),
            json!(flag(self.po_box_compliance)),
        );
        fields.insert(
            "GlobalWatchlistThreshold".to_string(),
            json!(self.global_watchlist_threshold),
        );
        fields.insert(
            "IncludeModels".to_string(),
            json!({ "BusinessDefender": flag(self.business_defender) }),
        );
        fields.insert(
            "IncludeAllRiskIndicators".to_string(),
            json!(flag(self.include_all_risk_indicators)),
        );
        fields
    }
}

/// The schema encodes its option flags as 0/1 integers.
fn flag(value: bool) -> u8 {
    u8::from(value)
}

// ============================================================================
// Service
// ============================================================================

/// Client for the business instant-ID operation family.
pub struct InstantIdService<T> {
    transport: T,
    user: UserContext,
}

impl<T: Transport> InstantIdService<T> {
    /// Creates a new `InstantIdService`.
    ///
    /// # Arguments
    ///
    /// * `transport` - Transport collaborator owning the SOAP wire.
    /// * `user` - Billing and data-use context sent with every request.
    pub fn new(transport: T, user: UserContext) -> Self {
        Self { transport, user }
    }

    /// Verifies a business by company name.
    ///
    /// An invalid DOB match mode returns `Err` before any network call.
    /// Remote failures come back inside the outcome, never as `Err`.
    pub async fn find_by_company_name(
        &self,
        company_name: &str,
        criteria: &CompanyCriteria,
        options: &ScreeningOptions,
    ) -> Result<Outcome, Error> {
        criteria.validate()?;

        let mut search_by = Map::new();
        search_by.insert("CompanyName".to_string(), json!(company_name));
        criteria.extend_search_by(&mut search_by);

        let mut message = Map::new();
        message.insert("User".to_string(), self.user.to_value());
        message.insert("SearchBy".to_string(), Value::Object(search_by));
        message.extend(options.option_fields());

        tracing::info!("instant-ID search for company {}", company_name);

        Ok(send_request(
            &self.transport,
            BUSINESS_INSTANT_ID_OPERATION,
            Value::Object(message),
            FaultCodePattern::Numeric,
        )
        .await)
    }
}

// ============================================================================
// Tests
// ============================================================================
