//! Round-trip verification of JSON serializers.
//!
//! A [Verifier](verifier::Verifier) collects pairs of expected JSON text and expected object
//! and checks that a [Serializer](serializer::serializer_trait::Serializer) converts each
//! object to structurally equal JSON and each JSON text back to an equal object.

pub mod serializer;
pub mod util;
pub mod verifier;
