//! Region and zone discovery handlers.

use tabled::Tabled;

use nlb_api::types::region::{DescribeRegionsRequest, DescribeZonesRequest, Region, Zone};

use crate::commands::Ctx;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct RegionRow {
    #[tabled(rename = "REGION")]
    region: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "ENDPOINT")]
    endpoint: String,
}

fn region_row(region: &Region) -> RegionRow {
    RegionRow {
        region: region.region_id.clone().unwrap_or_default(),
        name: region.local_name.clone().unwrap_or_default(),
        endpoint: region.region_endpoint.clone().unwrap_or_default(),
    }
}

pub async fn regions(ctx: &Ctx) -> Result<(), CliError> {
    let req = DescribeRegionsRequest {
        accept_language: Some("en-US".into()),
    };
    let resp = ctx.client.describe_regions(&req).await?;

    let rendered = output::render_list(ctx.output, &resp.regions, region_row, |r| {
        r.region_id.clone().unwrap_or_default()
    });
    output::print_output(&rendered, ctx.quiet);
    Ok(())
}

#[derive(Tabled)]
struct ZoneRow {
    #[tabled(rename = "ZONE")]
    zone: String,
    #[tabled(rename = "NAME")]
    name: String,
}

fn zone_row(zone: &Zone) -> ZoneRow {
    ZoneRow {
        zone: zone.zone_id.clone().unwrap_or_default(),
        name: zone.local_name.clone().unwrap_or_default(),
    }
}

pub async fn zones(ctx: &Ctx) -> Result<(), CliError> {
    let req = DescribeZonesRequest {
        accept_language: Some("en-US".into()),
        region_id: ctx.region.clone(),
    };
    let resp = ctx.client.describe_zones(&req).await?;

    let rendered = output::render_list(ctx.output, &resp.zones, zone_row, |z| {
        z.zone_id.clone().unwrap_or_default()
    });
    output::print_output(&rendered, ctx.quiet);
    Ok(())
}
