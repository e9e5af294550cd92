//! User-facing envelope messages. The UI matches on some of these, keep them stable.

// Shared
pub const INVALID_JSON_FORMAT: &str = "Invalid JSON format";

// Profile
pub const INVALID_PROFILE_DATA: &str = "Invalid profile data";
pub const PROFILE_SAVED: &str = "Profile saved successfully";
pub const PROFILE_SAVE_FAILED: &str = "Failed to save profile";
pub const PROFILE_SAVE_ERROR: &str = "An error occurred while saving the profile";
pub const PROFILE_RETRIEVE_ERROR: &str = "An error occurred while retrieving the profile";
pub const PROFILE_SERIALIZATION_ERROR: &str = "Error serializing profile data";

// Candidacy reads
pub const CANDIDACIES_RETRIEVE_ERROR: &str = "An error occurred while retrieving candidacies";
pub const CANDIDACIES_SERIALIZATION_ERROR: &str = "Error serializing candidacies data";
pub const CANDIDACY_RETRIEVE_ERROR: &str = "An error occurred while retrieving the candidacy";
pub const INVALID_CANDIDACY_ID: &str = "Invalid candidacy ID";

// Candidacy writes
pub const INVALID_CANDIDACY_DATA: &str = "Invalid candidacy data";
pub const REQUIRED_FIELDS_MISSING: &str = "Company and Title are required fields";
pub const CANDIDACY_SAVED: &str = "Candidacy saved successfully";
pub const CANDIDACY_SAVE_FAILED: &str = "Failed to save candidacy";
pub const CANDIDACY_SAVE_ERROR: &str = "An error occurred while saving the candidacy";
pub const CANDIDACY_UPDATED: &str = "Candidacy updated successfully";
pub const CANDIDACY_UPDATE_FAILED: &str = "Failed to update candidacy";
pub const CANDIDACY_UPDATE_ERROR: &str = "An error occurred while updating the candidacy";
pub const CANDIDACY_DELETED: &str = "Candidacy deleted successfully";
pub const CANDIDACY_DELETE_FAILED: &str = "Failed to delete candidacy";
pub const CANDIDACY_DELETE_ERROR: &str = "An error occurred while deleting the candidacy";

// Status
pub const INVALID_STATUS_REQUEST: &str = "Invalid request data. Expected candidacy ID and status.";
pub const STATUS_FIELDS_REQUIRED: &str = "Candidacy ID and status are required";
pub const INVALID_STATUS_VALUE: &str = "Invalid status value";
pub const STATUS_UPDATED: &str = "Candidacy status updated successfully";
pub const STATUS_UPDATE_FAILED: &str = "Failed to update candidacy status";
pub const STATUS_UPDATE_ERROR: &str = "An error occurred while updating the candidacy status";
