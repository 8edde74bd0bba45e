//! Tag command handlers.

use tabled::Tabled;

use nlb_api::types::common::TagResourceType;
use nlb_api::types::tag::{ListTagResourcesRequest, TagResource};

use crate::cli::TagCommand;
use crate::commands::Ctx;
use crate::error::CliError;
use crate::output;

fn parse_resource_type(raw: &str) -> Result<TagResourceType, CliError> {
    match raw.to_ascii_lowercase().as_str() {
        "loadbalancer" | "lb" => Ok(TagResourceType::LoadBalancer),
        "listener" => Ok(TagResourceType::Listener),
        "servergroup" | "server-group" => Ok(TagResourceType::ServerGroup),
        "securitypolicy" | "policy" => Ok(TagResourceType::SecurityPolicy),
        other => Err(CliError::Validation {
            field: "type".into(),
            reason: format!(
                "unknown resource type '{other}' \
                 (expected loadbalancer, listener, servergroup, or securitypolicy)"
            ),
        }),
    }
}

#[derive(Tabled)]
struct TagRow {
    #[tabled(rename = "RESOURCE")]
    resource: String,
    #[tabled(rename = "TYPE")]
    resource_type: String,
    #[tabled(rename = "KEY")]
    key: String,
    #[tabled(rename = "VALUE")]
    value: String,
}

fn tag_row(binding: &TagResource) -> TagRow {
    TagRow {
        resource: binding.resource_id.clone().unwrap_or_default(),
        resource_type: binding.resource_type.clone().unwrap_or_default(),
        key: binding.tag_key.clone().unwrap_or_default(),
        value: binding.tag_value.clone().unwrap_or_default(),
    }
}

pub async fn handle(ctx: &Ctx, cmd: TagCommand) -> Result<(), CliError> {
    match cmd {
        TagCommand::List { resource_type, ids } => {
            let resource_type = parse_resource_type(&resource_type)?;

            let all = ctx
                .client
                .paginate_all(|token| async {
                    let mut req = ListTagResourcesRequest::new(resource_type);
                    req.resource_id = ids.clone();
                    req.region_id = ctx.region.clone();
                    req.next_token = token;
                    let page = ctx.client.list_tag_resources(&req).await?;
                    Ok((page.tag_resources, page.next_token))
                })
                .await?;

            let rendered = output::render_list(ctx.output, &all, tag_row, |t| {
                t.resource_id.clone().unwrap_or_default()
            });
            output::print_output(&rendered, ctx.quiet);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_type_aliases() {
        assert_eq!(
            parse_resource_type("lb").unwrap(),
            TagResourceType::LoadBalancer
        );
        assert_eq!(
            parse_resource_type("server-group").unwrap(),
            TagResourceType::ServerGroup
        );
        assert!(parse_resource_type("bucket").is_err());
    }
}
