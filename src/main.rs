//! Hall Wayfinder CLI.
//!
//! Lädt einen Ausstellungsplan (JSON) und gibt die Route vom Kiosk der
//! Halle zum gewählten Ziel-Marker aus.
//!
//! Aufruf: `hall-wayfinder <floor-plan.json> <destination-marker-id>`

use hall_wayfinder::{AppCommand, AppController, AppState, MarkerId, WayfinderOptions};

fn main() {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    if let Err(e) = run() {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let (Some(path), Some(marker_id)) = (args.next(), args.next()) else {
        anyhow::bail!("Aufruf: hall-wayfinder <floor-plan.json> <destination-marker-id>");
    };

    log::info!("Hall Wayfinder v{} startet...", env!("CARGO_PKG_VERSION"));

    // Optionen aus TOML laden (oder Standardwerte)
    let options = WayfinderOptions::load_from_file(&WayfinderOptions::config_path());
    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();

    controller.handle_command(&mut state, AppCommand::LoadFloorPlan { path })?;

    let marker_id = MarkerId::new(marker_id);
    let destination_exists = state
        .floor_plan
        .as_deref()
        .is_some_and(|fp| fp.find_marker(&marker_id).is_some());
    if !destination_exists {
        anyhow::bail!("Marker {} existiert nicht", marker_id);
    }

    controller.handle_command(
        &mut state,
        AppCommand::SelectMarker {
            marker_id: marker_id.clone(),
        },
    )?;

    match &state.viewer.active_route {
        Some(route) => {
            let ids: Vec<&str> = route.node_ids.iter().map(|id| id.as_str()).collect();
            println!("Route zu {}: {}", marker_id, ids.join(" -> "));
            for point in &route.points {
                println!("  ({:.1}, {:.1})", point.x, point.y);
            }
            println!("Länge: {:.1}", route.total_length());
        }
        None => println!("Keine Route zu {} gefunden", marker_id),
    }

    Ok(())
}
