//! TLS security policy command handlers.

use tabled::Tabled;

use nlb_api::types::security_policy::{
    ListSecurityPolicyRequest, ListSystemSecurityPolicyRequest, SecurityPolicy,
    SystemSecurityPolicy,
};

use crate::cli::PolicyCommand;
use crate::commands::Ctx;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct PolicyRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "TLS")]
    tls: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "LISTENERS")]
    listeners: usize,
}

fn policy_row(policy: &SecurityPolicy, color: bool) -> PolicyRow {
    PolicyRow {
        id: policy.security_policy_id.clone().unwrap_or_default(),
        name: policy.security_policy_name.clone().unwrap_or_default(),
        tls: policy.tls_version.clone().unwrap_or_default(),
        status: output::colorize_status(
            policy.security_policy_status.as_deref().unwrap_or("-"),
            color,
        ),
        listeners: policy.related_listeners.len(),
    }
}

#[derive(Tabled)]
struct SystemPolicyRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "TLS")]
    tls: String,
    #[tabled(rename = "CIPHERS")]
    ciphers: String,
}

fn system_policy_row(policy: &SystemSecurityPolicy) -> SystemPolicyRow {
    SystemPolicyRow {
        id: policy.security_policy_id.clone().unwrap_or_default(),
        tls: policy.tls_version.clone().unwrap_or_default(),
        ciphers: policy.ciphers.clone().unwrap_or_default(),
    }
}

pub async fn handle(ctx: &Ctx, cmd: PolicyCommand) -> Result<(), CliError> {
    match cmd {
        PolicyCommand::List => {
            let all = ctx
                .client
                .paginate_all(|token| async {
                    let req = ListSecurityPolicyRequest {
                        region_id: ctx.region.clone(),
                        next_token: token,
                        ..ListSecurityPolicyRequest::default()
                    };
                    let page = ctx.client.list_security_policy(&req).await?;
                    Ok((page.security_policies, page.next_token))
                })
                .await?;

            let rendered = output::render_list(
                ctx.output,
                &all,
                |p| policy_row(p, ctx.color),
                |p| p.security_policy_id.clone().unwrap_or_default(),
            );
            output::print_output(&rendered, ctx.quiet);
            Ok(())
        }

        PolicyCommand::System => {
            let req = ListSystemSecurityPolicyRequest {
                region_id: ctx.region.clone(),
            };
            let resp = ctx.client.list_system_security_policy(&req).await?;

            let rendered = output::render_list(
                ctx.output,
                &resp.security_policies,
                system_policy_row,
                |p| p.security_policy_id.clone().unwrap_or_default(),
            );
            output::print_output(&rendered, ctx.quiet);
            Ok(())
        }
    }
}
