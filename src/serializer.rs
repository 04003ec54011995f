pub mod serializer_trait;
pub mod serde_json_serializer;
pub mod dto_serializer;
