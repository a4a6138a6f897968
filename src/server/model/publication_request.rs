//! Publication request domain parameters.

/// Parameters for submitting a terrace listing for admin review.
///
/// Field presence and the positivity of `capacity` and `price` are validated
/// by the service before these are constructed.
#[derive(Debug, Clone)]
pub struct SubmitPublicationParams {
    pub owner_id: i32,
    pub name: String,
    pub description: String,
    pub capacity: i32,
    pub location: String,
    pub price: f64,
    pub contact_phone: String,
    /// Stored lowercase.
    pub contact_email: String,
    /// JSON array of amenity names; defaults to an empty array.
    pub amenities: serde_json::Value,
    pub rules: Option<String>,
}

/// Parameters for an admin review decision on a pending request.
#[derive(Debug, Clone)]
pub struct ReviewPublicationParams {
    pub reviewer_id: i32,
    /// Free-form notes shown to the owner; empty string when omitted.
    pub admin_notes: String,
}
