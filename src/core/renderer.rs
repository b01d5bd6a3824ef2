//! Renderer-Registry: Materialnamen pro Renderer, geteilt zwischen Edit- und Render-Thread.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{MapError, MapResult, MaterialContext};

/// Persistierte Beschreibung eines Zell-Renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RendererDescription {
    /// Material der Deckfläche
    pub ground: String,
    /// Material der linken Stufenfläche
    pub left_elevation: String,
    /// Material der rechten Stufenfläche
    pub right_elevation: String,
}

impl RendererDescription {
    /// Renderer mit demselben Material auf allen Flächen.
    pub fn uniform(material: impl Into<String>) -> Self {
        let material = material.into();
        Self {
            ground: material.clone(),
            left_elevation: material.clone(),
            right_elevation: material,
        }
    }
}

/// Aufgelöste Material-Handles eines registrierten Renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererHandle {
    pub name: String,
    pub ground: String,
    pub left_elevation: String,
    pub right_elevation: String,
}

impl RendererHandle {
    pub fn material(&self, context: MaterialContext) -> &str {
        match context {
            MaterialContext::Ground => &self.ground,
            MaterialContext::LeftElevation => &self.left_elevation,
            MaterialContext::RightElevation => &self.right_elevation,
        }
    }
}

/// Registry aller Zell-Renderer.
///
/// Klone teilen sich denselben Inhalt; jeder Zugriff läuft serialisiert
/// über einen Mutex.
#[derive(Debug, Clone, Default)]
pub struct RendererRegistry {
    inner: Arc<Mutex<IndexMap<String, RendererDescription>>>,
}

impl RendererRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, IndexMap<String, RendererDescription>> {
        // Ein vergifteter Mutex enthält trotzdem konsistente Daten (nur Inserts).
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registriert (oder ersetzt) einen Renderer.
    pub fn register(&self, name: impl Into<String>, description: RendererDescription) {
        let name = name.into();
        log::debug!("Renderer registriert: {}", name);
        self.entries().insert(name, description);
    }

    /// Löst einen Renderer auf.
    pub fn lookup(&self, name: &str) -> MapResult<RendererHandle> {
        let entries = self.entries();
        let description = entries
            .get(name)
            .ok_or_else(|| MapError::RendererNotRegistered {
                name: name.to_string(),
            })?;
        Ok(RendererHandle {
            name: name.to_string(),
            ground: description.ground.clone(),
            left_elevation: description.left_elevation.clone(),
            right_elevation: description.right_elevation.clone(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries().contains_key(name)
    }

    /// Registrierte Namen in Registrierungsreihenfolge.
    pub fn names(&self) -> Vec<String> {
        self.entries().keys().cloned().collect()
    }

    /// Kopie aller Beschreibungen (für den Export).
    pub fn snapshot(&self) -> IndexMap<String, RendererDescription> {
        self.entries().clone()
    }
}
