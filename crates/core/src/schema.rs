//! Declarative table schema.
//!
//! Field names follow the service's PascalCase JSON shape so a schema file
//! written for the service can be loaded verbatim. Empty lists and absent
//! optionals are skipped on serialization.
//!
//! Unknown top-level keys are rejected so nothing the caller wrote is dropped
//! on the way to the service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, TableError};

/// A user-supplied table schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Schema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attribute_definitions: Vec<AttributeDefinition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_schema: Vec<KeySchemaElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<ProvisionedThroughput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_mode: Option<BillingMode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub global_secondary_indexes: Vec<SecondaryIndex>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub local_secondary_indexes: Vec<SecondaryIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_specification: Option<StreamSpecification>,
    #[serde(
        rename = "SSESpecification",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sse_specification: Option<SseSpecification>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_class: Option<TableClass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletion_protection_enabled: Option<bool>,
}

/// Declares the scalar type of an attribute used in a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeDefinition {
    pub attribute_name: String,
    pub attribute_type: AttributeType,
}

/// Scalar attribute types allowed in key attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeType {
    #[serde(rename = "S")]
    String,
    #[serde(rename = "N")]
    Number,
    #[serde(rename = "B")]
    Binary,
}

/// One element of a table or index key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeySchemaElement {
    pub attribute_name: String,
    pub key_type: KeyType,
}

/// Role of a key attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum KeyType {
    /// Partition key.
    Hash,
    /// Sort key.
    Range,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProvisionedThroughput {
    pub read_capacity_units: i64,
    pub write_capacity_units: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingMode {
    Provisioned,
    PayPerRequest,
}

/// A global or local secondary index definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SecondaryIndex {
    pub index_name: String,
    pub key_schema: Vec<KeySchemaElement>,
    pub projection: Projection,
    /// Only meaningful for global indexes on provisioned tables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<ProvisionedThroughput>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Projection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projection_type: Option<ProjectionType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub non_key_attributes: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectionType {
    All,
    KeysOnly,
    Include,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StreamSpecification {
    pub stream_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_view_type: Option<StreamViewType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StreamViewType {
    NewImage,
    OldImage,
    NewAndOldImages,
    KeysOnly,
}

/// Server-side encryption settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SseSpecification {
    #[serde(rename = "Enabled", default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(rename = "SSEType", default, skip_serializing_if = "Option::is_none")]
    pub sse_type: Option<SseType>,
    #[serde(
        rename = "KMSMasterKeyId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub kms_master_key_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SseType {
    #[serde(rename = "AES256")]
    Aes256,
    #[serde(rename = "KMS")]
    Kms,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableClass {
    Standard,
    StandardInfrequentAccess,
}

impl Schema {
    /// Builds a schema from an arbitrary JSON value.
    ///
    /// Anything other than a JSON object is rejected before deserialization,
    /// with `null` reported as `undefined` (no schema given at all).
    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(TableError::InvalidSchema(format!(
                "Expected `schema` to be of type `object`, got `{}`",
                json_type_name(&value)
            )));
        }

        serde_json::from_value(value)
            .map_err(|e| TableError::InvalidSchema(format!("Invalid schema: {e}")))
    }

    /// Parses a schema from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| TableError::InvalidSchema(format!("Invalid schema JSON: {e}")))?;
        Self::from_value(value)
    }

    /// Returns the table name if it is present and non-empty.
    pub fn table_name(&self) -> Option<&str> {
        self.table_name.as_deref().filter(|name| !name.is_empty())
    }

    /// Replaces the table name.
    pub fn with_table_name(mut self, name: impl Into<String>) -> Self {
        self.table_name = Some(name.into());
        self
    }

    /// Checks that the required fields are present.
    ///
    /// Everything beyond the table name is left for the service to judge.
    pub fn validate(&self) -> Result<()> {
        match self.table_name() {
            Some(_) => Ok(()),
            None => Err(TableError::MissingTableName),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "undefined",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "Array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_rejects_null_as_undefined() {
        let err = Schema::from_value(Value::Null).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expected `schema` to be of type `object`, got `undefined`"
        );
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        let err = Schema::from_value(json!("Table")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expected `schema` to be of type `object`, got `string`"
        );

        let err = Schema::from_value(json!([1, 2])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expected `schema` to be of type `object`, got `Array`"
        );
    }

    #[test]
    fn test_from_value_accepts_empty_object() {
        let schema = Schema::from_value(json!({})).unwrap();
        assert_eq!(schema, Schema::default());
        assert_eq!(schema.validate(), Err(TableError::MissingTableName));
    }

    #[test]
    fn test_from_value_reports_malformed_fields() {
        let err = Schema::from_value(json!({
            "TableName": "Table",
            "KeySchema": [{"AttributeName": "id", "KeyType": "PRIMARY"}]
        }))
        .unwrap_err();

        assert!(matches!(err, TableError::InvalidSchema(ref msg) if msg.starts_with("Invalid schema:")));
    }

    #[test]
    fn test_empty_table_name_is_missing() {
        let schema = Schema::default().with_table_name("");
        assert_eq!(schema.table_name(), None);
        assert_eq!(schema.validate(), Err(TableError::MissingTableName));
    }

    #[test]
    fn test_with_table_name_replaces_existing() {
        let schema = Schema::default()
            .with_table_name("Table")
            .with_table_name("Bar");
        assert_eq!(schema.table_name(), Some("Bar"));
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_from_json_str_parses_full_schema() {
        let schema = Schema::from_json_str(
            r#"{
                "TableName": "Events",
                "AttributeDefinitions": [
                    {"AttributeName": "pk", "AttributeType": "S"},
                    {"AttributeName": "ts", "AttributeType": "N"}
                ],
                "KeySchema": [
                    {"AttributeName": "pk", "KeyType": "HASH"},
                    {"AttributeName": "ts", "KeyType": "RANGE"}
                ],
                "BillingMode": "PAY_PER_REQUEST",
                "GlobalSecondaryIndexes": [{
                    "IndexName": "ByTs",
                    "KeySchema": [{"AttributeName": "ts", "KeyType": "HASH"}],
                    "Projection": {"ProjectionType": "KEYS_ONLY"}
                }],
                "StreamSpecification": {"StreamEnabled": true, "StreamViewType": "NEW_AND_OLD_IMAGES"}
            }"#,
        )
        .unwrap();

        assert_eq!(schema.table_name(), Some("Events"));
        assert_eq!(schema.attribute_definitions[1].attribute_type, AttributeType::Number);
        assert_eq!(schema.key_schema[1].key_type, KeyType::Range);
        assert_eq!(schema.billing_mode, Some(BillingMode::PayPerRequest));
        assert_eq!(
            schema.global_secondary_indexes[0].projection.projection_type,
            Some(ProjectionType::KeysOnly)
        );
        assert_eq!(
            schema.stream_specification.and_then(|s| s.stream_view_type),
            Some(StreamViewType::NewAndOldImages)
        );
    }

    #[test]
    fn test_from_json_str_rejects_invalid_json() {
        let err = Schema::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, TableError::InvalidSchema(ref msg) if msg.starts_with("Invalid schema JSON:")));
    }

    #[test]
    fn test_encryption_tags_and_table_options_are_kept() {
        let input = json!({
            "TableName": "Table",
            "AttributeDefinitions": [{"AttributeName": "id", "AttributeType": "S"}],
            "KeySchema": [{"AttributeName": "id", "KeyType": "HASH"}],
            "BillingMode": "PAY_PER_REQUEST",
            "SSESpecification": {"Enabled": true, "SSEType": "KMS", "KMSMasterKeyId": "alias/app"},
            "Tags": [{"Key": "team", "Value": "core"}],
            "TableClass": "STANDARD_INFREQUENT_ACCESS",
            "DeletionProtectionEnabled": true
        });

        let schema = Schema::from_value(input.clone()).unwrap();

        assert_eq!(
            schema.sse_specification.as_ref().and_then(|sse| sse.sse_type),
            Some(SseType::Kms)
        );
        assert_eq!(schema.tags[0].key, "team");
        assert_eq!(schema.table_class, Some(TableClass::StandardInfrequentAccess));
        assert_eq!(schema.deletion_protection_enabled, Some(true));
        assert_eq!(serde_json::to_value(&schema).unwrap(), input);
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let err = Schema::from_value(json!({
            "TableName": "Table",
            "OnDemandThroughput": {"MaxReadRequestUnits": 10}
        }))
        .unwrap_err();
        assert!(matches!(err, TableError::InvalidSchema(ref msg) if msg.contains("unknown field `OnDemandThroughput`")));

        let err = Schema::from_value(json!({
            "TableName": "Table",
            "SSESpecification": {"Enabled": true, "KeyId": "alias/app"}
        }))
        .unwrap_err();
        assert!(matches!(err, TableError::InvalidSchema(ref msg) if msg.contains("unknown field `KeyId`")));
    }

    #[test]
    fn test_serialization_omits_absent_fields() {
        let schema = Schema::default().with_table_name("Table");
        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({"TableName": "Table"})
        );
    }
}
