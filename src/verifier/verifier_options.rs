use serde::{Deserialize, Serialize};
use crate::util::json_equality::NumberEquality;

/// Knobs of the comparisons done by [Verifier::verify](crate::verifier::Verifier::verify)
#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerifierOptions {
    #[serde(default)]
    pub numbers: NumberEquality
}

impl VerifierOptions {
    pub fn with_number_equality(self, numbers: NumberEquality) -> Self {
        Self { numbers, ..self }
    }
}
