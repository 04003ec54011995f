use std::fmt::Debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::verifier::verify_error::VerifyError;
use crate::verifier::Verifier;

///
/// Shortcut for a single case of a serde type:
/// ``data`` must serialize to ``json`` (structurally) and ``json`` must deserialize to ``data``.
///
pub fn serde_and_verify<Data>(data: Data, json: &str) -> Result<(), VerifyError<serde_json::Error>>
    where Data: Debug + Serialize + DeserializeOwned + PartialEq {
    Verifier::serde_json().with_case(data, json).verify()
}
