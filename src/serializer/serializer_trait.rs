use std::error::Error;

///
/// The capability under test: converts domain objects to JSON text and back.
///
/// Implementations must be fully configured before they are handed to a
/// [Verifier](crate::verifier::Verifier), which only ever borrows them.
///
pub trait Serializer {
    type Object;
    type Error: Error + 'static;

    fn serialize(&self, object: &Self::Object) -> Result<String, Self::Error>;

    /// Must fail for malformed or unrecognized input instead of returning a partial object
    fn deserialize(&self, json: &str) -> Result<Self::Object, Self::Error>;
}
