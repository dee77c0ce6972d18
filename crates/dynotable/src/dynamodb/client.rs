//! AWS SDK client setup and the DynamoDB-backed `TableClient`.

use async_trait::async_trait;
use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_dynamodb::Client;

use dynotable_core::{
    CreateTableRequest, DeleteTableRequest, DescribeTableRequest, Result, TableClient,
    TableDescription,
};

use super::conversions::{
    from_table_description, to_attribute_definition, to_billing_mode, to_global_secondary_index,
    to_key_schema, to_local_secondary_index, to_provisioned_throughput, to_sse_specification,
    to_stream_specification, to_table_class, to_tag,
};
use super::error::{
    map_create_table_error, map_delete_table_error, map_describe_table_error,
    map_list_tables_error,
};
use crate::config::Config;

/// DynamoDB-based raw client.
#[derive(Debug, Clone)]
pub struct DynamoDbClient {
    client: Client,
}

impl DynamoDbClient {
    /// Wraps an existing SDK client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a client for the region and endpoint in `config`.
    ///
    /// Credentials come from the SDK's default provider chain.
    pub async fn from_config(config: &Config) -> Self {
        let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));

        if let Some(endpoint) = &config.endpoint_url {
            sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
        }

        let sdk_config = sdk_config_loader.load().await;
        Self::new(Client::new(&sdk_config))
    }

    /// The underlying SDK client.
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl TableClient for DynamoDbClient {
    async fn create_table(&self, request: &CreateTableRequest) -> Result<()> {
        let attribute_definitions = request
            .attribute_definitions
            .iter()
            .map(to_attribute_definition)
            .collect::<Result<Vec<_>>>()?;

        let global_secondary_indexes = request
            .global_secondary_indexes
            .iter()
            .map(to_global_secondary_index)
            .collect::<Result<Vec<_>>>()?;

        let local_secondary_indexes = request
            .local_secondary_indexes
            .iter()
            .map(to_local_secondary_index)
            .collect::<Result<Vec<_>>>()?;

        let provisioned_throughput = request
            .provisioned_throughput
            .as_ref()
            .map(to_provisioned_throughput)
            .transpose()?;

        let stream_specification = request
            .stream_specification
            .as_ref()
            .map(to_stream_specification)
            .transpose()?;

        let tags = request
            .tags
            .iter()
            .map(to_tag)
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            table = %request.table_name,
            attributes = attribute_definitions.len(),
            gsis = global_secondary_indexes.len(),
            lsis = local_secondary_indexes.len(),
            "Sending CreateTable"
        );

        self.client
            .create_table()
            .table_name(&request.table_name)
            .set_attribute_definitions(Some(attribute_definitions))
            .set_key_schema(Some(to_key_schema(&request.key_schema)?))
            .set_provisioned_throughput(provisioned_throughput)
            .set_billing_mode(request.billing_mode.map(to_billing_mode))
            .set_global_secondary_indexes(
                (!global_secondary_indexes.is_empty()).then_some(global_secondary_indexes),
            )
            .set_local_secondary_indexes(
                (!local_secondary_indexes.is_empty()).then_some(local_secondary_indexes),
            )
            .set_stream_specification(stream_specification)
            .set_sse_specification(
                request
                    .sse_specification
                    .as_ref()
                    .map(to_sse_specification),
            )
            .set_tags((!tags.is_empty()).then_some(tags))
            .set_table_class(request.table_class.map(to_table_class))
            .set_deletion_protection_enabled(request.deletion_protection_enabled)
            .send()
            .await
            .map_err(|e| map_create_table_error(e, &request.table_name))?;

        Ok(())
    }

    async fn describe_table(
        &self,
        request: &DescribeTableRequest,
    ) -> Result<Option<TableDescription>> {
        match self
            .client
            .describe_table()
            .table_name(&request.table_name)
            .send()
            .await
        {
            Ok(response) => Ok(response
                .table()
                .map(|table| from_table_description(table, &request.table_name))),
            Err(err) => {
                if let Some(DescribeTableError::ResourceNotFoundException(_)) =
                    err.as_service_error()
                {
                    return Ok(None);
                }
                Err(map_describe_table_error(err))
            }
        }
    }

    async fn delete_table(&self, request: &DeleteTableRequest) -> Result<()> {
        self.client
            .delete_table()
            .table_name(&request.table_name)
            .send()
            .await
            .map_err(|e| map_delete_table_error(e, &request.table_name))?;
        Ok(())
    }

    async fn list_tables(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut exclusive_start: Option<String> = None;

        loop {
            let response = self
                .client
                .list_tables()
                .set_exclusive_start_table_name(exclusive_start.take())
                .send()
                .await
                .map_err(map_list_tables_error)?;

            names.extend(response.table_names().iter().cloned());

            match response.last_evaluated_table_name() {
                Some(last) => exclusive_start = Some(last.to_string()),
                None => break,
            }
        }

        Ok(names)
    }
}
