//! Simulated face scan.

use std::time::Duration;

use anyhow::Result;
use glow_commerce::catalog::{products, SkinType};
use glow_commerce::studio::{
    FaceScan, FixedDetector, RandomDetector, ScanStage, SkinTypeDetector, SCAN_DURATION,
};

use super::ScanArgs;
use crate::context::Context;

/// Run the scan command.
pub async fn run(args: ScanArgs, ctx: &Context) -> Result<()> {
    let duration = if args.instant {
        Duration::ZERO
    } else {
        SCAN_DURATION
    };

    match args.skin {
        Some(name) => {
            let skin_type: SkinType = name.parse()?;
            scan(FaceScan::new(FixedDetector(skin_type)), duration, ctx).await
        }
        None => scan(FaceScan::new(RandomDetector::new()), duration, ctx).await,
    }
}

async fn scan<D: SkinTypeDetector>(
    mut face_scan: FaceScan<D>,
    duration: Duration,
    ctx: &Context,
) -> Result<()> {
    ctx.output.info(face_scan.stage().prompt());

    face_scan.start()?;
    let spinner = ctx.output.spinner(ScanStage::Scanning.prompt());
    let result = face_scan.complete(products(), duration).await;
    spinner.finish_and_clear();
    let result = result?;

    ctx.logger
        .info("face scan")
        .field("skin_type", result.skin_type.as_str())
        .field("recommendations", result.recommendations.len() as i64)
        .emit();

    if ctx.output.is_json() {
        ctx.output.json(result);
        return Ok(());
    }

    ctx.output.success(ScanStage::Results.prompt());
    ctx.output.header(&format!("{} Skin Type", result.skin_type));
    println!("  {}", result.description);

    ctx.output.header("Recommended for you");
    if result.recommendations.is_empty() {
        ctx.output.info("No matching products in the catalog.");
    }
    for product in &result.recommendations {
        ctx.output.list_item(&format!(
            "{} ({}) - {}",
            product.name,
            product.brand,
            ctx.config.price(product.price)
        ));
    }
    Ok(())
}
