pub mod response;

pub use response::UploadResponse;

/// Endpoint accepting the multipart upload
pub const UPLOAD_PATH: &str = "/api/upload";

/// Name of the multipart field carrying the file
pub const FILE_FIELD: &str = "file";
