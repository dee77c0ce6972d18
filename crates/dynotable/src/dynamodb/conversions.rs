//! Conversions between the core request model and SDK types.

use aws_sdk_dynamodb::types as sdk;
use dynotable_core::{
    AttributeDefinition, AttributeType, BillingMode, IndexDescription, IndexStatus,
    KeySchemaElement, KeyType, Projection, ProjectionType, ProvisionedThroughput, Result,
    SecondaryIndex, SseSpecification, SseType, StreamSpecification, StreamViewType, TableClass,
    TableDescription, TableStatus, Tag,
};

use super::error::map_build_error;

pub fn to_attribute_definition(attr: &AttributeDefinition) -> Result<sdk::AttributeDefinition> {
    sdk::AttributeDefinition::builder()
        .attribute_name(&attr.attribute_name)
        .attribute_type(to_scalar_type(attr.attribute_type))
        .build()
        .map_err(map_build_error)
}

pub fn to_key_schema(elements: &[KeySchemaElement]) -> Result<Vec<sdk::KeySchemaElement>> {
    elements
        .iter()
        .map(|element| {
            sdk::KeySchemaElement::builder()
                .attribute_name(&element.attribute_name)
                .key_type(to_key_type(element.key_type))
                .build()
                .map_err(map_build_error)
        })
        .collect()
}

pub fn to_provisioned_throughput(
    throughput: &ProvisionedThroughput,
) -> Result<sdk::ProvisionedThroughput> {
    sdk::ProvisionedThroughput::builder()
        .read_capacity_units(throughput.read_capacity_units)
        .write_capacity_units(throughput.write_capacity_units)
        .build()
        .map_err(map_build_error)
}

pub fn to_global_secondary_index(index: &SecondaryIndex) -> Result<sdk::GlobalSecondaryIndex> {
    let throughput = index
        .provisioned_throughput
        .as_ref()
        .map(to_provisioned_throughput)
        .transpose()?;

    sdk::GlobalSecondaryIndex::builder()
        .index_name(&index.index_name)
        .set_key_schema(Some(to_key_schema(&index.key_schema)?))
        .projection(to_projection(&index.projection))
        .set_provisioned_throughput(throughput)
        .build()
        .map_err(map_build_error)
}

pub fn to_local_secondary_index(index: &SecondaryIndex) -> Result<sdk::LocalSecondaryIndex> {
    sdk::LocalSecondaryIndex::builder()
        .index_name(&index.index_name)
        .set_key_schema(Some(to_key_schema(&index.key_schema)?))
        .projection(to_projection(&index.projection))
        .build()
        .map_err(map_build_error)
}

pub fn to_stream_specification(spec: &StreamSpecification) -> Result<sdk::StreamSpecification> {
    sdk::StreamSpecification::builder()
        .stream_enabled(spec.stream_enabled)
        .set_stream_view_type(spec.stream_view_type.map(to_stream_view_type))
        .build()
        .map_err(map_build_error)
}

pub fn to_sse_specification(sse: &SseSpecification) -> sdk::SseSpecification {
    sdk::SseSpecification::builder()
        .set_enabled(sse.enabled)
        .set_sse_type(sse.sse_type.map(|sse_type| match sse_type {
            SseType::Aes256 => sdk::SseType::Aes256,
            SseType::Kms => sdk::SseType::Kms,
        }))
        .set_kms_master_key_id(sse.kms_master_key_id.clone())
        .build()
}

pub fn to_tag(tag: &Tag) -> Result<sdk::Tag> {
    sdk::Tag::builder()
        .key(&tag.key)
        .value(&tag.value)
        .build()
        .map_err(map_build_error)
}

pub fn to_table_class(class: TableClass) -> sdk::TableClass {
    match class {
        TableClass::Standard => sdk::TableClass::Standard,
        TableClass::StandardInfrequentAccess => sdk::TableClass::StandardInfrequentAccess,
    }
}

fn to_projection(projection: &Projection) -> sdk::Projection {
    let non_key_attributes =
        (!projection.non_key_attributes.is_empty()).then(|| projection.non_key_attributes.clone());

    sdk::Projection::builder()
        .set_projection_type(projection.projection_type.map(to_projection_type))
        .set_non_key_attributes(non_key_attributes)
        .build()
}

fn to_scalar_type(attr_type: AttributeType) -> sdk::ScalarAttributeType {
    match attr_type {
        AttributeType::String => sdk::ScalarAttributeType::S,
        AttributeType::Number => sdk::ScalarAttributeType::N,
        AttributeType::Binary => sdk::ScalarAttributeType::B,
    }
}

fn to_key_type(key_type: KeyType) -> sdk::KeyType {
    match key_type {
        KeyType::Hash => sdk::KeyType::Hash,
        KeyType::Range => sdk::KeyType::Range,
    }
}

pub fn to_billing_mode(mode: BillingMode) -> sdk::BillingMode {
    match mode {
        BillingMode::Provisioned => sdk::BillingMode::Provisioned,
        BillingMode::PayPerRequest => sdk::BillingMode::PayPerRequest,
    }
}

fn to_projection_type(projection_type: ProjectionType) -> sdk::ProjectionType {
    match projection_type {
        ProjectionType::All => sdk::ProjectionType::All,
        ProjectionType::KeysOnly => sdk::ProjectionType::KeysOnly,
        ProjectionType::Include => sdk::ProjectionType::Include,
    }
}

fn to_stream_view_type(view_type: StreamViewType) -> sdk::StreamViewType {
    match view_type {
        StreamViewType::NewImage => sdk::StreamViewType::NewImage,
        StreamViewType::OldImage => sdk::StreamViewType::OldImage,
        StreamViewType::NewAndOldImages => sdk::StreamViewType::NewAndOldImages,
        StreamViewType::KeysOnly => sdk::StreamViewType::KeysOnly,
    }
}

/// Convert an SDK table description, falling back to `fallback_name` when the
/// response omits the name.
pub fn from_table_description(
    table: &sdk::TableDescription,
    fallback_name: &str,
) -> TableDescription {
    TableDescription {
        table_name: table.table_name().unwrap_or(fallback_name).to_string(),
        table_status: from_table_status(table.table_status()),
        global_secondary_indexes: table
            .global_secondary_indexes()
            .iter()
            .map(|gsi| IndexDescription {
                index_name: gsi.index_name().unwrap_or_default().to_string(),
                index_status: from_index_status(gsi.index_status()),
            })
            .collect(),
    }
}

/// Unknown or missing statuses map to a transitional state so waiting keeps polling.
fn from_table_status(status: Option<&sdk::TableStatus>) -> TableStatus {
    match status {
        Some(sdk::TableStatus::Active) => TableStatus::Active,
        Some(sdk::TableStatus::Creating) => TableStatus::Creating,
        Some(sdk::TableStatus::Deleting) => TableStatus::Deleting,
        Some(sdk::TableStatus::Archiving) => TableStatus::Archiving,
        Some(sdk::TableStatus::Archived) => TableStatus::Archived,
        Some(sdk::TableStatus::InaccessibleEncryptionCredentials) => {
            TableStatus::InaccessibleEncryptionCredentials
        }
        _ => TableStatus::Updating,
    }
}

fn from_index_status(status: Option<&sdk::IndexStatus>) -> IndexStatus {
    match status {
        Some(sdk::IndexStatus::Active) => IndexStatus::Active,
        Some(sdk::IndexStatus::Creating) => IndexStatus::Creating,
        Some(sdk::IndexStatus::Deleting) => IndexStatus::Deleting,
        _ => IndexStatus::Updating,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sse_tags_and_table_class_conversion() {
        let sse = to_sse_specification(&SseSpecification {
            enabled: Some(true),
            sse_type: Some(SseType::Kms),
            kms_master_key_id: Some("alias/app".to_string()),
        });
        assert_eq!(sse.enabled(), Some(true));
        assert_eq!(sse.sse_type(), Some(&sdk::SseType::Kms));
        assert_eq!(sse.kms_master_key_id(), Some("alias/app"));

        let tag = to_tag(&Tag {
            key: "team".to_string(),
            value: "core".to_string(),
        })
        .unwrap();
        assert_eq!(tag.key(), "team");
        assert_eq!(tag.value(), "core");

        assert_eq!(
            to_table_class(TableClass::StandardInfrequentAccess),
            sdk::TableClass::StandardInfrequentAccess
        );
    }

    #[test]
    fn test_key_schema_conversion() {
        let key_schema = to_key_schema(&[
            KeySchemaElement {
                attribute_name: "pk".to_string(),
                key_type: KeyType::Hash,
            },
            KeySchemaElement {
                attribute_name: "sk".to_string(),
                key_type: KeyType::Range,
            },
        ])
        .unwrap();

        assert_eq!(key_schema[0].attribute_name(), "pk");
        assert_eq!(key_schema[0].key_type(), &sdk::KeyType::Hash);
        assert_eq!(key_schema[1].key_type(), &sdk::KeyType::Range);
    }

    #[test]
    fn test_attribute_definition_conversion() {
        let definition = to_attribute_definition(&AttributeDefinition {
            attribute_name: "ts".to_string(),
            attribute_type: AttributeType::Number,
        })
        .unwrap();

        assert_eq!(definition.attribute_name(), "ts");
        assert_eq!(definition.attribute_type(), &sdk::ScalarAttributeType::N);
    }

    #[test]
    fn test_global_index_conversion() {
        let index = to_global_secondary_index(&SecondaryIndex {
            index_name: "GSI1".to_string(),
            key_schema: vec![KeySchemaElement {
                attribute_name: "GSI1PK".to_string(),
                key_type: KeyType::Hash,
            }],
            projection: Projection {
                projection_type: Some(ProjectionType::Include),
                non_key_attributes: vec!["title".to_string()],
            },
            provisioned_throughput: Some(ProvisionedThroughput {
                read_capacity_units: 5,
                write_capacity_units: 2,
            }),
        })
        .unwrap();

        assert_eq!(index.index_name(), "GSI1");
        let projection = index.projection().unwrap();
        assert_eq!(
            projection.projection_type(),
            Some(&sdk::ProjectionType::Include)
        );
        assert_eq!(projection.non_key_attributes(), ["title".to_string()]);
        assert_eq!(
            index
                .provisioned_throughput()
                .map(|t| t.read_capacity_units()),
            Some(5)
        );
    }

    #[test]
    fn test_table_description_conversion() {
        let table = sdk::TableDescription::builder()
            .table_name("foo.Table")
            .table_status(sdk::TableStatus::Active)
            .global_secondary_indexes(
                sdk::GlobalSecondaryIndexDescription::builder()
                    .index_name("GSI1")
                    .index_status(sdk::IndexStatus::Creating)
                    .build(),
            )
            .build();

        let description = from_table_description(&table, "ignored");
        assert_eq!(description.table_name, "foo.Table");
        assert_eq!(description.table_status, TableStatus::Active);
        assert_eq!(
            description.global_secondary_indexes[0].index_status,
            IndexStatus::Creating
        );
    }

    #[test]
    fn test_missing_status_keeps_waiting() {
        let table = sdk::TableDescription::builder().build();
        let description = from_table_description(&table, "foo.Table");

        assert_eq!(description.table_name, "foo.Table");
        assert_eq!(description.table_status, TableStatus::Updating);
    }
}
