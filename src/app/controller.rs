//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert Eingabe-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Datei-I/O ===
            AppCommand::LoadMapFile { path } => handlers::file_io::load(state, path)?,
            AppCommand::LoadMapDescription { description } => {
                handlers::file_io::load_description(state, *description)?
            }
            AppCommand::SaveMapFile { path } => handlers::file_io::save(state, path)?,

            // === Selektion ===
            AppCommand::SelectCell { cell, additive } => {
                handlers::selection::select_cell(state, cell, additive)
            }
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Elevation ===
            AppCommand::RaiseArea { area } => handlers::elevation::raise(state, area),
            AppCommand::LowerArea { area } => handlers::elevation::lower(state, area),

            // === Assets ===
            AppCommand::PlaceAsset { placement } => handlers::assets::place(state, placement),
            AppCommand::RemoveAsset { id } => handlers::assets::remove(state, &id),

            // === Optionen ===
            AppCommand::ApplyOptions { options } => handlers::options::apply(state, *options),
        }

        Ok(())
    }
}
