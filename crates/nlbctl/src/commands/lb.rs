//! Load balancer command handlers.

use std::fmt::Write as _;
use std::time::Duration;

use tabled::Tabled;

use nlb_api::types::listener::{GetListenerHealthStatusRequest, ListListenersRequest};
use nlb_api::types::load_balancer::{
    DeleteLoadBalancerRequest, GetLoadBalancerAttributeRequest, ListLoadBalancersRequest,
    LoadBalancer,
};

use crate::cli::LbCommand;
use crate::commands::{Ctx, util};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct LbRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "ADDRESS")]
    address_type: String,
    #[tabled(rename = "VPC")]
    vpc: String,
    #[tabled(rename = "ZONES")]
    zones: usize,
}

fn to_row(lb: &LoadBalancer, color: bool) -> LbRow {
    LbRow {
        id: lb.load_balancer_id.clone().unwrap_or_default(),
        name: lb.load_balancer_name.clone().unwrap_or_default(),
        status: output::colorize_status(
            lb.load_balancer_status.as_deref().unwrap_or("-"),
            color,
        ),
        address_type: lb.address_type.clone().unwrap_or_default(),
        vpc: lb.vpc_id.clone().unwrap_or_default(),
        zones: lb.zone_mappings.len(),
    }
}

fn detail(lb: &LoadBalancer) -> String {
    let mut out = String::new();
    let field = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".into());

    let _ = writeln!(out, "Id:             {}", field(&lb.load_balancer_id));
    let _ = writeln!(out, "Name:           {}", field(&lb.load_balancer_name));
    let _ = writeln!(out, "Status:         {}", field(&lb.load_balancer_status));
    let _ = writeln!(
        out,
        "Business:       {}",
        field(&lb.load_balancer_business_status)
    );
    let _ = writeln!(out, "Address type:   {}", field(&lb.address_type));
    let _ = writeln!(out, "IP version:     {}", field(&lb.address_ip_version));
    let _ = writeln!(out, "DNS name:       {}", field(&lb.dns_name));
    let _ = writeln!(out, "VPC:            {}", field(&lb.vpc_id));
    let _ = writeln!(out, "Region:         {}", field(&lb.region_id));
    let _ = writeln!(out, "Created:        {}", field(&lb.create_time));
    for zone in &lb.zone_mappings {
        let addresses: Vec<String> = zone
            .load_balancer_addresses
            .iter()
            .filter_map(|a| {
                a.public_ipv4_address
                    .clone()
                    .or_else(|| a.private_ipv4_address.clone())
            })
            .collect();
        let _ = writeln!(
            out,
            "Zone:           {} ({}) {}",
            zone.zone_id.clone().unwrap_or_default(),
            zone.status.clone().unwrap_or_default(),
            addresses.join(", "),
        );
    }
    out.truncate(out.trim_end().len());
    out
}

pub async fn handle(ctx: &Ctx, cmd: LbCommand) -> Result<(), CliError> {
    match cmd {
        LbCommand::List {
            status,
            vpc_id,
            zone_id,
        } => {
            let all = ctx
                .client
                .paginate_all(|token| async {
                    let req = ListLoadBalancersRequest {
                        load_balancer_status: status.clone(),
                        vpc_ids: vpc_id.clone().into_iter().collect(),
                        zone_id: zone_id.clone(),
                        region_id: ctx.region.clone(),
                        next_token: token,
                        ..ListLoadBalancersRequest::default()
                    };
                    let page = ctx.client.list_load_balancers(&req).await?;
                    Ok((page.load_balancers, page.next_token))
                })
                .await?;

            let rendered = output::render_list(
                ctx.output,
                &all,
                |lb| to_row(lb, ctx.color),
                |lb| lb.load_balancer_id.clone().unwrap_or_default(),
            );
            output::print_output(&rendered, ctx.quiet);
            Ok(())
        }

        LbCommand::Get { id } => {
            let mut req = GetLoadBalancerAttributeRequest::new(id);
            req.region_id = ctx.region.clone();
            let resp = ctx.client.get_load_balancer_attribute(&req).await?;

            let rendered = output::render_single(
                ctx.output,
                &resp.load_balancer,
                detail,
                |lb| lb.load_balancer_id.clone().unwrap_or_default(),
            );
            output::print_output(&rendered, ctx.quiet);
            Ok(())
        }

        LbCommand::Delete { id, wait } => {
            if !util::confirm(
                "lb delete",
                &format!("Delete load balancer '{id}'? This is destructive."),
                ctx.yes,
            )? {
                return Ok(());
            }

            let mut req = DeleteLoadBalancerRequest::new(id.as_str());
            req.region_id = ctx.region.clone();
            let resp = ctx.client.delete_load_balancer(&req).await?;

            util::report_job(ctx, &format!("Deletion of '{id}' started"), resp.job_id.as_deref());
            if wait {
                if let Some(job_id) = resp.job_id.as_deref() {
                    util::wait_for_job(
                        ctx,
                        job_id,
                        Duration::from_secs(2),
                        Duration::from_secs(300),
                    )
                    .await?;
                }
            }
            Ok(())
        }

        LbCommand::Health { id } => {
            let listeners_req = ListListenersRequest {
                load_balancer_ids: vec![id],
                region_id: ctx.region.clone(),
                ..ListListenersRequest::default()
            };
            let listeners = ctx.client.list_listeners(&listeners_req).await?.listeners;

            #[derive(Tabled, serde::Serialize)]
            struct HealthRow {
                #[tabled(rename = "LISTENER")]
                listener: String,
                #[tabled(rename = "SERVER GROUP")]
                server_group: String,
                #[tabled(rename = "SERVER")]
                server: String,
                #[tabled(rename = "PORT")]
                port: String,
                #[tabled(rename = "STATUS")]
                status: String,
                #[tabled(rename = "REASON")]
                reason: String,
            }

            let mut rows = Vec::new();
            for listener in &listeners {
                let Some(listener_id) = listener.listener_id.clone() else {
                    continue;
                };
                let health = ctx
                    .client
                    .get_listener_health_status(&GetListenerHealthStatusRequest::new(
                        listener_id.as_str(),
                    ))
                    .await?;
                for status in &health.listener_health_status {
                    for group in &status.server_group_infos {
                        for server in &group.non_normal_servers {
                            rows.push(HealthRow {
                                listener: listener_id.clone(),
                                server_group: group.server_group_id.clone().unwrap_or_default(),
                                server: server.server_id.clone().unwrap_or_default(),
                                port: server.port.map(|p| p.to_string()).unwrap_or_default(),
                                status: output::colorize_status(
                                    server.status.as_deref().unwrap_or("-"),
                                    ctx.color,
                                ),
                                reason: server
                                    .reason
                                    .as_ref()
                                    .and_then(|r| r.reason_code.clone())
                                    .unwrap_or_default(),
                            });
                        }
                    }
                }
            }

            if rows.is_empty() {
                if !ctx.quiet {
                    eprintln!("All backends healthy");
                }
                return Ok(());
            }

            let rendered = output::render_list(
                ctx.output,
                &rows,
                |r| HealthRow {
                    listener: r.listener.clone(),
                    server_group: r.server_group.clone(),
                    server: r.server.clone(),
                    port: r.port.clone(),
                    status: r.status.clone(),
                    reason: r.reason.clone(),
                },
                |r| r.server.clone(),
            );
            output::print_output(&rendered, ctx.quiet);
            Ok(())
        }
    }
}
