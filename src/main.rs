//! Iso Region Editor.
//!
//! Kommandozeilen-Frontend: lädt eine JSON-Map, wendet Höhen-Edits an
//! und gibt die resultierende Map als JSON aus.

use anyhow::{bail, Context};
use iso_region_editor::{AppController, AppIntent, AppState, Area, EditorOptions};

const USAGE: &str = "Aufruf: iso-region-editor <map.json> [raise|lower x y w h]...";

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Iso Region Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((map_path, edit_args)) = args.split_first() else {
        bail!(USAGE);
    };
    let edits = parse_edits(edit_args)?;

    let mut state = AppState::new();
    state.options = EditorOptions::load_from_file(&EditorOptions::config_path());
    let mut controller = AppController::new();

    controller.handle_intent(
        &mut state,
        AppIntent::LoadMapRequested {
            path: map_path.clone(),
        },
    )?;

    for (raise, area) in edits {
        state.selection.area = Some(area);
        let intent = if raise {
            AppIntent::RaiseSelectionRequested
        } else {
            AppIntent::LowerSelectionRequested
        };
        controller.handle_intent(&mut state, intent)?;
        log::info!(
            "{} {}: {}",
            if raise { "raise" } else { "lower" },
            area,
            state.status_message.as_deref().unwrap_or("-")
        );
    }

    log::info!(
        "{} Höhen-Edits angewandt",
        state.command_log.elevation_edits_since_load()
    );
    let map = state.map.as_ref().context("Keine Map geladen")?;
    for region in map.regions() {
        log::info!(
            "Region {} {} Elevation {}",
            region.id(),
            region.area(),
            region.elevation()
        );
    }
    println!("{}", map.to_description().to_json()?);
    Ok(())
}

/// Zerlegt `raise|lower x y w h`-Gruppen in Edits.
fn parse_edits(args: &[String]) -> anyhow::Result<Vec<(bool, Area)>> {
    if args.len() % 5 != 0 {
        bail!("Unvollständiger Edit-Befehl\n{}", USAGE);
    }

    args.chunks(5)
        .map(|chunk| {
            let raise = match chunk[0].as_str() {
                "raise" => true,
                "lower" => false,
                other => bail!("Unbekannter Edit-Befehl '{}'\n{}", other, USAGE),
            };
            let mut values = [0i32; 4];
            for (value, text) in values.iter_mut().zip(&chunk[1..]) {
                *value = text
                    .parse()
                    .with_context(|| format!("Keine Ganzzahl: '{}'", text))?;
            }
            Ok((raise, Area::new(values[0], values[1], values[2], values[3])))
        })
        .collect()
}
