//! Request and response payloads for calculations.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::engine::{self, CalculationResult};
use super::operation::Operation;

/// A single calculation request as received on the wire.
///
/// `operation` is kept as the raw tag so unknown values surface as
/// [`super::CalculationError::UnsupportedOperation`] rather than a decode
/// failure. Missing operands default to zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CalculationRequest {
    /// Operation name (e.g. `ADDITION`) or symbol (e.g. `+`).
    #[serde(default)]
    pub operation: Option<String>,

    /// First operand.
    #[serde(default)]
    pub a: f64,

    /// Second operand.
    #[serde(default)]
    pub b: f64,
}

impl CalculationRequest {
    /// Evaluate with an explicit operation, ignoring the `operation` field.
    pub fn evaluate_as(&self, operation: Operation) -> CalculationResult<CalculationResponse> {
        engine::evaluate(operation, self.a, self.b).map(CalculationResponse::new)
    }
}

/// The outcome of a successful calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CalculationResponse {
    /// The computed value. Non-finite values are written as `"Infinity"`,
    /// `"-Infinity"` or `"NaN"`.
    #[serde(
        serialize_with = "non_finite::serialize",
        deserialize_with = "non_finite::deserialize"
    )]
    #[schemars(schema_with = "non_finite::schema")]
    pub result: f64,
}

impl CalculationResponse {
    pub fn new(result: f64) -> Self {
        Self { result }
    }
}

/// JSON has no literal for infinity or NaN, so those travel as strings.
mod non_finite {
    use schemars::{Schema, SchemaGenerator, json_schema};
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    const INFINITY: &str = "Infinity";
    const NEG_INFINITY: &str = "-Infinity";
    const NAN: &str = "NaN";

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_str(NAN)
        } else if value.is_infinite() {
            let tag = if value.is_sign_positive() { INFINITY } else { NEG_INFINITY };
            serializer.serialize_str(tag)
        } else {
            serializer.serialize_f64(*value)
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Number(f64),
        Tag(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Wire::deserialize(deserializer)? {
            Wire::Number(value) => Ok(value),
            Wire::Tag(tag) => match tag.as_str() {
                INFINITY => Ok(f64::INFINITY),
                NEG_INFINITY => Ok(f64::NEG_INFINITY),
                NAN => Ok(f64::NAN),
                other => Err(D::Error::custom(format!("invalid result value: {other:?}"))),
            },
        }
    }

    pub fn schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "oneOf": [
                { "type": "number" },
                { "type": "string", "enum": [INFINITY, NEG_INFINITY, NAN] }
            ]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_missing_fields() {
        let req: CalculationRequest = serde_json::from_str(r#"{"a": 4}"#).unwrap();
        assert!(req.operation.is_none());
        assert_eq!(req.a, 4.0);
        assert_eq!(req.b, 0.0);
    }

    #[test]
    fn test_evaluate_as_ignores_operation_field() {
        let req: CalculationRequest =
            serde_json::from_str(r#"{"operation":"ADDITION","a":6,"b":3}"#).unwrap();
        assert_eq!(
            req.evaluate_as(Operation::Division),
            Ok(CalculationResponse::new(2.0))
        );
    }

    #[test]
    fn test_response_serialization() {
        let json = serde_json::to_value(CalculationResponse::new(8.0)).unwrap();
        assert_eq!(json, serde_json::json!({ "result": 8.0 }));
    }

    #[test]
    fn test_non_finite_results_are_tagged() {
        let json = serde_json::to_value(CalculationResponse::new(f64::INFINITY)).unwrap();
        assert_eq!(json, serde_json::json!({ "result": "Infinity" }));

        let json = serde_json::to_value(CalculationResponse::new(f64::NEG_INFINITY)).unwrap();
        assert_eq!(json, serde_json::json!({ "result": "-Infinity" }));

        let json = serde_json::to_value(CalculationResponse::new(f64::NAN)).unwrap();
        assert_eq!(json, serde_json::json!({ "result": "NaN" }));
    }

    #[test]
    fn test_response_reads_back_its_own_output() {
        for value in [8.0, -0.5, f64::INFINITY, f64::NEG_INFINITY] {
            let text = serde_json::to_string(&CalculationResponse::new(value)).unwrap();
            let back: CalculationResponse = serde_json::from_str(&text).unwrap();
            assert_eq!(back.result, value);
        }

        let back: CalculationResponse = serde_json::from_str(r#"{"result":"NaN"}"#).unwrap();
        assert!(back.result.is_nan());

        assert!(serde_json::from_str::<CalculationResponse>(r#"{"result":"lots"}"#).is_err());
    }

    #[test]
    fn test_response_schema_admits_tags() {
        let schema = serde_json::to_value(schemars::schema_for!(CalculationResponse)).unwrap();
        let variants = schema["properties"]["result"]["oneOf"].as_array().unwrap();
        assert_eq!(variants.len(), 2);
        assert_eq!(variants[1]["enum"][0], "Infinity");
    }
}
