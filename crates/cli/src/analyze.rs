//! The analyze command

use anyhow::{Context, Result};
use layout::{resolve, LayoutProfile, PageSize};
use log::info;
use pdf_geom::PdfDocument;

use crate::report::{self, Analysis};
use crate::{Cli, OutputFormat};

pub fn run(cli: &Cli, profile: &LayoutProfile) -> Result<()> {
    info!("analyzing {}", cli.template.display());

    let doc = PdfDocument::open(&cli.template)
        .with_context(|| format!("failed to open {}", cli.template.display()))?;
    let page_count = doc.page_count();
    let geometry = doc.page_geometry(cli.page)?;
    info!(
        "page {} of {}: {:.2} x {:.2} pt",
        cli.page,
        page_count,
        geometry.width(),
        geometry.height()
    );

    let page = PageSize::new(geometry.width(), geometry.height());
    let anchors = resolve(profile, page)?;

    let analysis = Analysis {
        template: cli.template.clone(),
        page: cli.page,
        page_count,
        metadata: doc.metadata(),
        geometry,
        profile_name: profile.name.clone(),
        anchors,
    };

    match cli.format {
        OutputFormat::Text => report::print_text(&analysis),
        OutputFormat::Json => report::print_json(&analysis)?,
    }

    Ok(())
}
