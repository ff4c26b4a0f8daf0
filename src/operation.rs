//! mutation descriptors
//!
//! a [`Mutation`] carries everything needed to run one saleor mutation and
//! pull its result out of the response.

use crate::error::{check_errors, Error, Result};
use crate::graphql::{GraphQlResponse, MutationErrorEntry};
use crate::merge::Variables;
use serde_json::Value;

/// declarative description of a single mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mutation {
    /// root field selected by the mutation (e.g. `productCreate`)
    pub name: &'static str,
    /// graphql document sent as `query`
    pub query: &'static str,
    /// variable wrapping the input object, or `None` when the input fields
    /// are themselves the top-level variables
    pub input_variable: Option<&'static str>,
    /// operation-scoped errors field (`shopErrors`, `productErrors`, ...)
    pub errors_field: &'static str,
    /// path to the result below `data.<name>`
    pub result_path: &'static [&'static str],
}

impl Mutation {
    /// build the variables object for `input`, alongside any positional
    /// arguments passed in `extra`
    pub fn variables(&self, input: Variables, mut extra: Variables) -> Variables {
        match self.input_variable {
            Some(name) => {
                extra.insert(name.to_string(), Value::Object(input));
                extra
            }
            None => {
                extra.extend(input);
                extra
            }
        }
    }

    /// check a response for errors and return the value at `result_path`
    pub fn extract(&self, response: GraphQlResponse<Value>) -> Result<Value> {
        if response.has_errors() {
            let message = response
                .errors
                .first()
                .map(|err| err.message.clone())
                .unwrap_or_else(|| "graphql error".to_string());
            let body = serde_json::to_string(&response).unwrap_or_default();
            return Err(Error::GraphQl {
                status: Some(200),
                errors: response.errors,
                body,
                message,
            });
        }

        let mut payload = match response.data {
            Some(Value::Object(mut data)) => data.remove(self.name),
            _ => None,
        }
        .filter(|value| !value.is_null())
        .ok_or_else(|| Error::Response(format!("missing `data.{}`", self.name)))?;

        let errors: Vec<MutationErrorEntry> =
            match payload.get_mut(self.errors_field).map(Value::take) {
                None | Some(Value::Null) => Vec::new(),
                Some(errors) => serde_json::from_value(errors)?,
            };
        check_errors(self.name, &errors)?;

        let mut node = payload;
        for key in self.result_path {
            node = node
                .get_mut(*key)
                .map(Value::take)
                .filter(|value| !value.is_null())
                .ok_or_else(|| {
                    Error::Response(format!(
                        "missing `data.{}.{}`",
                        self.name,
                        self.result_path.join(".")
                    ))
                })?;
        }

        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const CREATE_THING: Mutation = Mutation {
        name: "thingCreate",
        query: "mutation { thingCreate { thing { id } thingErrors { field message } } }",
        input_variable: Some("input"),
        errors_field: "thingErrors",
        result_path: &["thing", "id"],
    };

    fn response(body: Value) -> GraphQlResponse<Value> {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_variables_wraps_input() {
        let mut input = Variables::new();
        input.insert("name".to_string(), json!("default"));
        let mut extra = Variables::new();
        extra.insert("attribute".to_string(), json!("QXR0cmlidXRlOjE="));

        let variables = CREATE_THING.variables(input, extra);
        assert_eq!(
            Value::Object(variables),
            json!({"attribute": "QXR0cmlidXRlOjE=", "input": {"name": "default"}})
        );
    }

    #[test]
    fn test_variables_spreads_input() {
        let mutation = Mutation {
            input_variable: None,
            ..CREATE_THING
        };
        let mut input = Variables::new();
        input.insert("alt".to_string(), json!(""));
        let variables = mutation.variables(input, Variables::new());
        assert_eq!(Value::Object(variables), json!({"alt": ""}));
    }

    #[test]
    fn test_extract_result_path() {
        let id = CREATE_THING
            .extract(response(json!({
                "data": {"thingCreate": {"thing": {"id": "VGhpbmc6MQ=="}, "thingErrors": []}}
            })))
            .unwrap();
        assert_eq!(id, "VGhpbmc6MQ==");
    }

    #[test]
    fn test_extract_mutation_errors() {
        let err = CREATE_THING
            .extract(response(json!({
                "data": {"thingCreate": {
                    "thing": null,
                    "thingErrors": [{"field": "name", "message": "required", "code": "REQUIRED"}]
                }}
            })))
            .unwrap_err();
        assert!(matches!(err, Error::Mutation { .. }));
        assert!(err.to_string().contains("name : required"));
    }

    #[test]
    fn test_extract_top_level_errors() {
        let err = CREATE_THING
            .extract(response(json!({
                "data": {"thingCreate": null},
                "errors": [{"message": "You do not have permission to perform this action"}]
            })))
            .unwrap_err();
        match err {
            Error::GraphQl {
                status,
                message,
                body,
                ..
            } => {
                assert_eq!(status, Some(200));
                assert!(message.contains("permission"));
                let body: Value = serde_json::from_str(&body).unwrap();
                assert_eq!(
                    body["errors"][0]["message"],
                    "You do not have permission to perform this action"
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_extract_missing_result() {
        let err = CREATE_THING
            .extract(response(json!({
                "data": {"thingCreate": {"thing": null, "thingErrors": []}}
            })))
            .unwrap_err();
        assert!(matches!(err, Error::Response(_)));

        let err = CREATE_THING
            .extract(response(json!({"data": null})))
            .unwrap_err();
        assert!(matches!(err, Error::Response(_)));
    }
}
