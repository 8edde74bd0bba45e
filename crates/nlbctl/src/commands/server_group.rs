//! Server group command handlers.

use tabled::Tabled;

use nlb_api::types::server_group::{
    ListServerGroupServersRequest, ListServerGroupsRequest, ServerGroup, ServerGroupServer,
};

use crate::cli::ServerGroupCommand;
use crate::commands::Ctx;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "TYPE")]
    group_type: String,
    #[tabled(rename = "PROTO")]
    protocol: String,
    #[tabled(rename = "SCHEDULER")]
    scheduler: String,
    #[tabled(rename = "SERVERS")]
    servers: String,
    #[tabled(rename = "STATUS")]
    status: String,
}

fn group_row(group: &ServerGroup, color: bool) -> GroupRow {
    GroupRow {
        id: group.server_group_id.clone().unwrap_or_default(),
        name: group.server_group_name.clone().unwrap_or_default(),
        group_type: group.server_group_type.clone().unwrap_or_default(),
        protocol: group.protocol.clone().unwrap_or_default(),
        scheduler: group.scheduler.clone().unwrap_or_default(),
        servers: group.server_count.map(|n| n.to_string()).unwrap_or_default(),
        status: output::colorize_status(
            group.server_group_status.as_deref().unwrap_or("-"),
            color,
        ),
    }
}

#[derive(Tabled)]
struct ServerRow {
    #[tabled(rename = "SERVER")]
    server: String,
    #[tabled(rename = "TYPE")]
    server_type: String,
    #[tabled(rename = "IP")]
    ip: String,
    #[tabled(rename = "PORT")]
    port: String,
    #[tabled(rename = "WEIGHT")]
    weight: String,
    #[tabled(rename = "STATUS")]
    status: String,
}

fn server_row(server: &ServerGroupServer, color: bool) -> ServerRow {
    ServerRow {
        server: server.server_id.clone().unwrap_or_default(),
        server_type: server.server_type.clone().unwrap_or_default(),
        ip: server.server_ip.clone().unwrap_or_default(),
        port: server.port.map(|p| p.to_string()).unwrap_or_default(),
        weight: server.weight.map(|w| w.to_string()).unwrap_or_default(),
        status: output::colorize_status(server.status.as_deref().unwrap_or("-"), color),
    }
}

pub async fn handle(ctx: &Ctx, cmd: ServerGroupCommand) -> Result<(), CliError> {
    match cmd {
        ServerGroupCommand::List { vpc_id } => {
            let all = ctx
                .client
                .paginate_all(|token| async {
                    let req = ListServerGroupsRequest {
                        vpc_id: vpc_id.clone(),
                        region_id: ctx.region.clone(),
                        next_token: token,
                        ..ListServerGroupsRequest::default()
                    };
                    let page = ctx.client.list_server_groups(&req).await?;
                    Ok((page.server_groups, page.next_token))
                })
                .await?;

            let rendered = output::render_list(
                ctx.output,
                &all,
                |g| group_row(g, ctx.color),
                |g| g.server_group_id.clone().unwrap_or_default(),
            );
            output::print_output(&rendered, ctx.quiet);
            Ok(())
        }

        ServerGroupCommand::Servers { id } => {
            let all = ctx
                .client
                .paginate_all(|token| async {
                    let mut req = ListServerGroupServersRequest::new(id.as_str());
                    req.region_id = ctx.region.clone();
                    req.next_token = token;
                    let page = ctx.client.list_server_group_servers(&req).await?;
                    Ok((page.servers, page.next_token))
                })
                .await?;

            let rendered = output::render_list(
                ctx.output,
                &all,
                |s| server_row(s, ctx.color),
                |s| s.server_id.clone().unwrap_or_default(),
            );
            output::print_output(&rendered, ctx.quiet);
            Ok(())
        }
    }
}
