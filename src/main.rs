//! A glyph anatomy inspector for UFO fonts and raw outlines.

use anyhow::{bail, Context, Result};
use clap::Parser;

use counterpunch::cli::CliArgs;
use counterpunch::utils::logger::init_logger;
use counterpunch::{
    analyze, AnatomyConfig, FontMetrics, GlyphAnatomy, GlyphOutline,
};

fn main() -> Result<()> {
    init_logger();
    let args = CliArgs::parse();
    let config = AnatomyConfig::default();

    if let Some(data) = &args.svg_path {
        let outline = GlyphOutline::from_svg(data)
            .context("failed to parse svg path data")?;
        let metrics = FontMetrics::for_units_per_em(args.units_per_em);
        let anatomy = analyze(&outline, &metrics, &config);
        report("path", &anatomy, args.json)?;
        return Ok(());
    }

    let Some(ufo_path) = &args.ufo_path else {
        bail!("nothing to inspect: pass --load-ufo or --svg-path");
    };
    let font = norad::Font::load(ufo_path).with_context(|| {
        format!("failed to load UFO: {}", ufo_path.display())
    })?;
    let metrics = FontMetrics::from_ufo(&font);

    let mut matched = 0usize;
    for glyph in font.default_layer().iter() {
        let name = glyph.name().to_string();
        if !args.glyphs.is_empty() && !args.glyphs.contains(&name) {
            continue;
        }
        matched += 1;
        let outline = GlyphOutline::from_glyph(glyph);
        let anatomy = analyze(&outline, &metrics, &config);
        report(&name, &anatomy, args.json)?;
    }
    if matched == 0 && !args.glyphs.is_empty() {
        bail!(
            "no glyph named {} in {}",
            args.glyphs.join(", "),
            ufo_path.display()
        );
    }
    Ok(())
}

fn report(name: &str, anatomy: &GlyphAnatomy, json: bool) -> Result<()> {
    if json {
        let value = serde_json::json!({
            "glyph": name,
            "bowl": anatomy.bowl.as_ref().map(|bowl| serde_json::json!({
                "outer": bowl.outer,
                "inner": bowl.inner,
                "counter_points": bowl.counter.len(),
            })),
            "tittle": anatomy.tittle.as_ref().map(|tittle| {
                serde_json::json!({
                    "index": tittle.index,
                    "dot_points": tittle.dot.len(),
                })
            }),
            "eye": anatomy.eye.as_ref().map(|eye| serde_json::json!({
                "outer": eye.outer,
                "inner": eye.inner,
                "openings": eye
                    .openings
                    .iter()
                    .map(|p| [p.x, p.y])
                    .collect::<Vec<_>>(),
            })),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let mut features = Vec::new();
    if anatomy.bowl.is_some() {
        features.push("bowl");
    }
    if anatomy.eye.is_some() {
        features.push("eye");
    }
    if anatomy.tittle.is_some() {
        features.push("tittle");
    }
    if features.is_empty() {
        println!("{name}: no anatomy detected");
    } else {
        println!("{name}: {}", features.join(", "));
    }
    Ok(())
}
