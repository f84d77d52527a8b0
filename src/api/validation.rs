//! Declarative request-body validation.
//!
//! A [`RuleSet`] is an ordered chain of [`FieldRule`]s built with a small
//! builder API:
//!
//! ```
//! use movie_api::api::validation::{FieldRule, RuleSet};
//!
//! let rules = RuleSet::new()
//!     .rule(FieldRule::body("title").not_empty().with_message("Title is required"))
//!     .rule(FieldRule::body("rating").optional().is_float(0.0, 10.0));
//!
//! let body = serde_json::json!({ "title": "" });
//! let errors = rules.validate(&body).unwrap_err();
//! assert_eq!(errors[0].field, "title");
//! ```
//!
//! Rules run against the raw JSON body so that a wrong type is reported
//! against the field that carries it. Handlers receive the typed payload
//! through the [`ValidatedJson`] extractor, which only deserializes once
//! every rule has passed.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::error::ApiError;

const DEFAULT_MESSAGE: &str = "Invalid value";

/// One rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    /// JSON key of the offending field, or `body` for the document itself.
    #[schema(example = "rating")]
    pub field: String,
    /// Why the value was rejected.
    #[schema(example = "Rating must be between 0 and 10")]
    pub message: String,
}

impl FieldError {
    /// Creates a field error.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Check {
    NotEmpty,
    IsInt { min: f64, max: f64 },
    IsFloat { min: f64, max: f64 },
}

impl Check {
    fn passes(self, value: &Value) -> bool {
        match self {
            Self::NotEmpty => value.as_str().is_some_and(|s| !s.is_empty()),
            Self::IsInt { min, max } => value
                .as_f64()
                .is_some_and(|n| n.fract() == 0.0 && (min..=max).contains(&n)),
            Self::IsFloat { min, max } => value.as_f64().is_some_and(|n| (min..=max).contains(&n)),
        }
    }
}

/// Rule for a single top-level body field.
#[derive(Debug, Clone)]
pub struct FieldRule {
    field: &'static str,
    optional: bool,
    checks: Vec<Check>,
    message: &'static str,
}

impl FieldRule {
    /// Starts a rule for `field`. The field is required unless
    /// [`FieldRule::optional`] is called.
    #[must_use]
    pub const fn body(field: &'static str) -> Self {
        Self {
            field,
            optional: false,
            checks: Vec::new(),
            message: DEFAULT_MESSAGE,
        }
    }

    /// Skips the rule when the field is absent.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Requires a non-empty string.
    #[must_use]
    pub fn not_empty(mut self) -> Self {
        self.checks.push(Check::NotEmpty);
        self
    }

    /// Requires a whole JSON number no smaller than `min` that fits an
    /// `i32`. `2010` and `2010.0` are both accepted.
    #[must_use]
    pub fn is_int(mut self, min: i32) -> Self {
        self.checks.push(Check::IsInt {
            min: f64::from(min),
            max: f64::from(i32::MAX),
        });
        self
    }

    /// Requires a JSON number in `[min, max]`.
    #[must_use]
    pub fn is_float(mut self, min: f64, max: f64) -> Self {
        self.checks.push(Check::IsFloat { min, max });
        self
    }

    /// Message reported when the rule fails.
    #[must_use]
    pub fn with_message(mut self, message: &'static str) -> Self {
        self.message = message;
        self
    }

    fn evaluate(&self, body: &Map<String, Value>) -> Option<FieldError> {
        let passed = match body.get(self.field) {
            None => self.optional,
            Some(value) => self.checks.iter().all(|check| check.passes(value)),
        };
        (!passed).then(|| FieldError::new(self.field, self.message))
    }
}

/// Ordered chain of field rules for one endpoint.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<FieldRule>,
}

impl RuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule.
    #[must_use]
    pub fn rule(mut self, rule: FieldRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Runs every rule against `body`.
    ///
    /// # Errors
    ///
    /// Returns one [`FieldError`] per failing rule, in rule order. A body
    /// that is not a JSON object fails as a whole under the field `body`.
    pub fn validate(&self, body: &Value) -> Result<(), Vec<FieldError>> {
        let Some(object) = body.as_object() else {
            return Err(vec![FieldError::new(
                "body",
                "Request body must be a JSON object",
            )]);
        };
        let errors: Vec<FieldError> = self
            .rules
            .iter()
            .filter_map(|rule| rule.evaluate(object))
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Request payloads that carry their own validation chain.
pub trait ValidatedBody {
    /// Rules the raw body must satisfy before deserialization.
    fn rules() -> &'static RuleSet;
}

/// JSON extractor that runs [`ValidatedBody::rules`] before handing the
/// typed payload to the handler.
///
/// A request that does not declare a JSON content type is checked as an
/// empty object. Rejects with [`ApiError::Validation`] (400) when a JSON
/// body is malformed, is not an object, or breaks any rule.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + ValidatedBody,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = match Json::<Value>::from_request(req, state).await {
            Ok(Json(body)) => body,
            Err(JsonRejection::MissingJsonContentType(_)) => Value::Object(Map::new()),
            Err(rejection) => {
                return Err(ApiError::Validation(vec![FieldError::new(
                    "body",
                    rejection.body_text(),
                )]));
            }
        };

        T::rules().validate(&body).map_err(ApiError::Validation)?;

        serde_json::from_value(body)
            .map(Self)
            .map_err(|e| ApiError::Validation(vec![FieldError::new("body", e.to_string())]))
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::indexing_slicing)]
mod tests {
    use serde_json::json;

    use super::*;

    fn rules() -> RuleSet {
        RuleSet::new()
            .rule(FieldRule::body("title").not_empty().with_message("Title is required"))
            .rule(FieldRule::body("year").is_int(1888).with_message("bad year"))
            .rule(FieldRule::body("rating").optional().is_float(0.0, 10.0))
    }

    fn fields(result: Result<(), Vec<FieldError>>) -> Vec<String> {
        match result {
            Ok(()) => Vec::new(),
            Err(errors) => errors.into_iter().map(|e| e.field).collect(),
        }
    }

    #[test]
    fn valid_body_passes() {
        let body = json!({ "title": "Alien", "year": 1979, "rating": 8.5 });
        assert!(rules().validate(&body).is_ok());
    }

    #[test]
    fn optional_field_may_be_absent() {
        let body = json!({ "title": "Alien", "year": 1979 });
        assert!(rules().validate(&body).is_ok());
    }

    #[test]
    fn missing_required_field_fails_with_message() {
        let body = json!({ "year": 1979 });
        let Err(errors) = rules().validate(&body) else {
            panic!("expected failure");
        };
        assert_eq!(errors, vec![FieldError::new("title", "Title is required")]);
    }

    #[test]
    fn every_failing_field_is_reported_in_rule_order() {
        let body = json!({ "title": "", "year": 1800, "rating": 11 });
        assert_eq!(fields(rules().validate(&body)), ["title", "year", "rating"]);
    }

    #[test]
    fn wrong_types_fail() {
        let body = json!({ "title": 42, "year": "1979", "rating": "high" });
        assert_eq!(fields(rules().validate(&body)), ["title", "year", "rating"]);
    }

    #[test]
    fn fractional_year_is_not_an_integer() {
        let body = json!({ "title": "Alien", "year": 1979.5 });
        assert_eq!(fields(rules().validate(&body)), ["year"]);
    }

    #[test]
    fn whole_float_year_is_an_integer() {
        let body = json!({ "title": "Alien", "year": 1979.0 });
        assert!(rules().validate(&body).is_ok());
    }

    #[test]
    fn year_beyond_i32_fails() {
        let body = json!({ "title": "Alien", "year": 3_000_000_000_i64 });
        assert_eq!(fields(rules().validate(&body)), ["year"]);
    }

    #[test]
    fn null_optional_field_fails() {
        let body = json!({ "title": "Alien", "year": 1979, "rating": null });
        assert_eq!(fields(rules().validate(&body)), ["rating"]);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        for rating in [0.0, 10.0] {
            let body = json!({ "title": "Alien", "year": 1888, "rating": rating });
            assert!(rules().validate(&body).is_ok());
        }
    }

    #[test]
    fn default_message_is_used_without_override() {
        let body = json!({ "title": "Alien", "year": 1979, "rating": -1 });
        let Err(errors) = rules().validate(&body) else {
            panic!("expected failure");
        };
        assert_eq!(errors[0].message, DEFAULT_MESSAGE);
    }

    #[test]
    fn non_object_body_fails_as_a_whole() {
        assert_eq!(fields(rules().validate(&json!([1, 2]))), ["body"]);
        assert_eq!(fields(rules().validate(&json!("title"))), ["body"]);
    }
}
