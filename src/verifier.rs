pub mod test_case;
pub mod verifier_options;
pub mod verify_error;

use std::fmt::{self, Debug};
use std::ops::Deref;
use std::sync::Arc;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use crate::serializer::dto_serializer::{DtoModule, DtoSerializer};
use crate::serializer::serde_json_serializer::SerdeJsonSerializer;
use crate::serializer::serializer_trait::Serializer;
use crate::util::json_equality::{first_difference, NumberEquality};
use crate::verifier::test_case::TestCase;
use crate::verifier::verifier_options::VerifierOptions;
use crate::verifier::verify_error::{AssertionFailure, FailureKind, VerifyError};

/// The serializer of a [Verifier], either borrowed from the caller or shared with it.
enum SharedSerializer<'s, S> {
    Borrowed(&'s S),
    Shared(Arc<S>)
}

impl<S> Clone for SharedSerializer<'_, S> {
    fn clone(&self) -> Self {
        match self {
            SharedSerializer::Borrowed(serializer) => SharedSerializer::Borrowed(serializer),
            SharedSerializer::Shared(serializer) => SharedSerializer::Shared(Arc::clone(serializer))
        }
    }
}

impl<S> Deref for SharedSerializer<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        match self {
            SharedSerializer::Borrowed(serializer) => serializer,
            SharedSerializer::Shared(serializer) => serializer
        }
    }
}

///
/// An immutable builder of serialization round-trip test cases.
///
/// Registering a case never changes the receiver but returns a new verifier, so a verifier
/// with common cases can be extended differently by several tests.
/// [verify](Verifier::verify) checks all cases in registration order and stops at the first failure:
///
/// ```
/// use serde_roundtrip_verifier::verifier::Verifier;
///
/// #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
/// struct Item { id: u32 }
///
/// let result = Verifier::serde_json()
///     .with_case(Item { id: 1 }, r#"{"id": 1}"#)
///     .object(Item { id: 2 })
///     .json(r#"{"id": 2}"#)
///     .verify();
/// assert!(result.is_ok());
/// ```
///
pub struct Verifier<'s, S: Serializer> {
    serializer: SharedSerializer<'s, S>,
    cases: Vec<Arc<TestCase<S::Object>>>,
    options: VerifierOptions
}

/// Returned by [Verifier::object], waits for the expected JSON of the object.
#[must_use = "the case is only registered by calling json()"]
pub struct PendingCase<'s, S: Serializer> {
    verifier: Verifier<'s, S>,
    object: S::Object
}

impl<'s, S: Serializer> PendingCase<'s, S> {
    pub fn json(self, json: &str) -> Verifier<'s, S> {
        self.verifier.push(TestCase::new(self.object, json))
    }
}

impl<'s, S: Serializer> Verifier<'s, S> {
    pub fn from_serializer(serializer: &'s S) -> Self {
        Self::with_serializer(SharedSerializer::Borrowed(serializer))
    }

    pub fn from_shared(serializer: Arc<S>) -> Self {
        Self::with_serializer(SharedSerializer::Shared(serializer))
    }

    fn with_serializer(serializer: SharedSerializer<'s, S>) -> Self {
        Self { serializer, cases: Vec::new(), options: VerifierOptions::default() }
    }

    #[must_use]
    pub fn with_case(&self, object: S::Object, json: &str) -> Self {
        self.object(object).json(json)
    }

    /// First half of the two-step form of [with_case](Verifier::with_case)
    pub fn object(&self, object: S::Object) -> PendingCase<'s, S> {
        PendingCase { verifier: self.clone(), object }
    }

    #[must_use]
    pub fn with_options(&self, options: VerifierOptions) -> Self {
        Self { options, ..self.clone() }
    }

    #[must_use]
    pub fn with_number_equality(&self, numbers: NumberEquality) -> Self {
        self.with_options(self.options.with_number_equality(numbers))
    }

    pub fn options(&self) -> VerifierOptions {
        self.options
    }

    pub fn serializer(&self) -> &S {
        &self.serializer
    }

    pub fn cases(&self) -> impl Iterator<Item = &TestCase<S::Object>> + '_ {
        self.cases.iter().map(Arc::as_ref)
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    // Copies the pointers, never the objects
    fn push(mut self, case: TestCase<S::Object>) -> Self {
        self.cases.push(Arc::new(case));
        self
    }
}

impl<'s, S: Serializer> Verifier<'s, S> where S::Object: PartialEq + Debug {
    ///
    /// Checks every case in registration order:
    /// 1. the serialized object must be structurally equal to the expected JSON
    ///    (key order and whitespace do not matter),
    /// 2. the deserialized JSON must be equal to the expected object.
    ///
    /// Returns the first failure. Errors of the serializer are passed through in
    /// [VerifyError::Serializer].
    ///
    pub fn verify(&self) -> Result<(), VerifyError<S::Error>> {
        for (index, case) in self.cases.iter().enumerate() {
            if let Err(error) = self.verify_case(index, case) {
                warn!("Case {} of {} failed: {}", index, self.cases.len(), error);
                return Err(error);
            }
        }
        info!("Verified {} case(s)", self.cases.len());
        Ok(())
    }

    fn verify_case(&self, index: usize, case: &TestCase<S::Object>) -> Result<(), VerifyError<S::Error>> {
        debug!("Serialization test {} [{:?}]", index, case.object);
        let json = self.serializer.serialize(&case.object).map_err(VerifyError::Serializer)?;
        self.compare_json(index, case, &json)?;

        debug!("Deserialization test {} [{:?}]", index, case.object);
        let object = self.serializer.deserialize(&case.json).map_err(VerifyError::Serializer)?;
        if object != case.object {
            return Err(Self::failure(FailureKind::Deserialization, index, case, format!("{:?}", object),
                String::from("deserialized object differs from expected object")).into());
        }
        Ok(())
    }

    fn compare_json(&self, index: usize, case: &TestCase<S::Object>, json: &str) -> Result<(), AssertionFailure> {
        let expected: Value = serde_json::from_str(&case.json).map_err(|error|
            Self::failure(FailureKind::Serialization, index, case, String::from(json),
                format!("expected JSON is invalid: {}", error)))?;
        let actual: Value = serde_json::from_str(json).map_err(|error|
            Self::failure(FailureKind::Serialization, index, case, String::from(json),
                format!("serialized JSON is invalid: {}", error)))?;
        match first_difference(&expected, &actual, self.options.numbers) {
            Some(difference) => Err(Self::failure(FailureKind::Serialization, index, case,
                String::from(json), difference.to_string())),
            None => Ok(())
        }
    }

    fn failure(kind: FailureKind, index: usize, case: &TestCase<S::Object>, actual: String, detail: String) -> AssertionFailure {
        AssertionFailure {
            kind,
            case: index,
            object: format!("{:?}", case.object),
            expected: match kind {
                FailureKind::Serialization => case.json.clone(),
                FailureKind::Deserialization => format!("{:?}", case.object)
            },
            actual,
            detail
        }
    }
}

impl<'s, M: DtoModule> Verifier<'s, DtoSerializer<M>> {
    /// A verifier that owns a [DtoSerializer] for ``module``
    pub fn dto_module(module: M) -> Self {
        Self::from_shared(Arc::new(DtoSerializer::new(module)))
    }
}

impl<'s, T: Serialize + DeserializeOwned> Verifier<'s, SerdeJsonSerializer<T>> {
    /// A verifier for types that implement serde's traits directly
    pub fn serde_json() -> Self {
        Self::from_shared(Arc::new(SerdeJsonSerializer::new()))
    }
}

impl<S: Serializer> Clone for Verifier<'_, S> {
    fn clone(&self) -> Self {
        Self { serializer: self.serializer.clone(), cases: self.cases.clone(), options: self.options }
    }
}

impl<S: Serializer> fmt::Debug for Verifier<'_, S> where S::Object: Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Verifier")
            .field("cases", &self.cases)
            .field("options", &self.options)
            .finish()
    }
}
