//! Listener command handlers.

use std::fmt::Write as _;
use std::time::Duration;

use tabled::Tabled;

use nlb_api::types::listener::{
    GetListenerAttributeRequest, ListListenersRequest, Listener, StartListenerRequest,
    StopListenerRequest,
};

use crate::cli::ListenerCommand;
use crate::commands::{Ctx, util};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct ListenerRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "PROTO")]
    protocol: String,
    #[tabled(rename = "PORT")]
    port: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "LB")]
    lb: String,
    #[tabled(rename = "SERVER GROUP")]
    server_group: String,
}

fn port_display(listener: &Listener) -> String {
    match (listener.listener_port, listener.start_port, listener.end_port) {
        (Some(0), Some(start), Some(end)) => format!("{start}-{end}"),
        (Some(port), _, _) => port.to_string(),
        _ => "-".into(),
    }
}

fn to_row(listener: &Listener, color: bool) -> ListenerRow {
    ListenerRow {
        id: listener.listener_id.clone().unwrap_or_default(),
        protocol: listener.listener_protocol.clone().unwrap_or_default(),
        port: port_display(listener),
        status: output::colorize_status(
            listener.listener_status.as_deref().unwrap_or("-"),
            color,
        ),
        lb: listener.load_balancer_id.clone().unwrap_or_default(),
        server_group: listener.server_group_id.clone().unwrap_or_default(),
    }
}

fn detail(listener: &Listener) -> String {
    let mut out = String::new();
    let field = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".into());

    let _ = writeln!(out, "Id:             {}", field(&listener.listener_id));
    let _ = writeln!(out, "Description:    {}", field(&listener.listener_description));
    let _ = writeln!(out, "Protocol:       {}", field(&listener.listener_protocol));
    let _ = writeln!(out, "Port:           {}", port_display(listener));
    let _ = writeln!(out, "Status:         {}", field(&listener.listener_status));
    let _ = writeln!(out, "Load balancer:  {}", field(&listener.load_balancer_id));
    let _ = writeln!(out, "Server group:   {}", field(&listener.server_group_id));
    let _ = writeln!(out, "Security policy:{}", field(&listener.security_policy_id));
    if let Some(idle) = listener.idle_timeout {
        let _ = writeln!(out, "Idle timeout:   {idle}s");
    }
    if listener.proxy_protocol_enabled == Some(true) {
        let _ = writeln!(out, "Proxy protocol: enabled");
    }
    out.truncate(out.trim_end().len());
    out
}

pub async fn handle(ctx: &Ctx, cmd: ListenerCommand) -> Result<(), CliError> {
    match cmd {
        ListenerCommand::List { lb } => {
            let all = ctx
                .client
                .paginate_all(|token| async {
                    let req = ListListenersRequest {
                        load_balancer_ids: lb.clone().into_iter().collect(),
                        region_id: ctx.region.clone(),
                        next_token: token,
                        ..ListListenersRequest::default()
                    };
                    let page = ctx.client.list_listeners(&req).await?;
                    Ok((page.listeners, page.next_token))
                })
                .await?;

            let rendered = output::render_list(
                ctx.output,
                &all,
                |l| to_row(l, ctx.color),
                |l| l.listener_id.clone().unwrap_or_default(),
            );
            output::print_output(&rendered, ctx.quiet);
            Ok(())
        }

        ListenerCommand::Get { id } => {
            let mut req = GetListenerAttributeRequest::new(id);
            req.region_id = ctx.region.clone();
            let resp = ctx.client.get_listener_attribute(&req).await?;

            let rendered = output::render_single(
                ctx.output,
                &resp.listener,
                detail,
                |l| l.listener_id.clone().unwrap_or_default(),
            );
            output::print_output(&rendered, ctx.quiet);
            Ok(())
        }

        ListenerCommand::Start { id, wait } => {
            let mut req = StartListenerRequest::new(id.as_str());
            req.region_id = ctx.region.clone();
            let resp = ctx.client.start_listener(&req).await?;

            util::report_job(ctx, &format!("Listener '{id}' starting"), resp.job_id.as_deref());
            if wait {
                if let Some(job_id) = resp.job_id.as_deref() {
                    util::wait_for_job(ctx, job_id, Duration::from_secs(2), Duration::from_secs(300))
                        .await?;
                }
            }
            Ok(())
        }

        ListenerCommand::Stop { id, wait } => {
            if !util::confirm(
                "listener stop",
                &format!("Stop listener '{id}'? Traffic will be refused while stopped."),
                ctx.yes,
            )? {
                return Ok(());
            }

            let mut req = StopListenerRequest::new(id.as_str());
            req.region_id = ctx.region.clone();
            let resp = ctx.client.stop_listener(&req).await?;

            util::report_job(ctx, &format!("Listener '{id}' stopping"), resp.job_id.as_deref());
            if wait {
                if let Some(job_id) = resp.job_id.as_deref() {
                    util::wait_for_job(ctx, job_id, Duration::from_secs(2), Duration::from_secs(300))
                        .await?;
                }
            }
            Ok(())
        }
    }
}
