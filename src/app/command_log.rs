//! Begrenztes Log der ausgeführten Commands mit Auswertung der Höhen-Edits.

use super::AppCommand;
use crate::core::Area;

/// Richtung eines geloggten Höhen-Edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElevationEdit {
    Raise,
    Lower,
}

/// Speichert ausgeführte Commands in Reihenfolge; die ältere Hälfte
/// wird verworfen, sobald `MAX_ENTRIES` erreicht ist.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, command: AppCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }

    /// Alle geloggten Höhen-Edits in Ausführungsreihenfolge.
    ///
    /// `None` als Fläche steht für einen Edit ohne Auswahl (erste Region).
    pub fn elevation_edits(&self) -> impl Iterator<Item = (ElevationEdit, Option<Area>)> + '_ {
        self.entries.iter().filter_map(|command| match command {
            AppCommand::RaiseArea { area } => Some((ElevationEdit::Raise, *area)),
            AppCommand::LowerArea { area } => Some((ElevationEdit::Lower, *area)),
            _ => None,
        })
    }

    /// Seit dem letzten Laden der Map ausgeführte Höhen-Edits.
    pub fn elevation_edits_since_load(&self) -> usize {
        self.entries
            .iter()
            .rev()
            .take_while(|command| {
                !matches!(
                    command,
                    AppCommand::LoadMapFile { .. } | AppCommand::LoadMapDescription { .. }
                )
            })
            .filter(|command| {
                matches!(
                    command,
                    AppCommand::RaiseArea { .. } | AppCommand::LowerArea { .. }
                )
            })
            .count()
    }
}
