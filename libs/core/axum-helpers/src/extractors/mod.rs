pub mod int_path;
pub mod validated_json;

pub use int_path::IntPath;
pub use validated_json::ValidatedJson;
