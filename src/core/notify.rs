//! Synchrone Änderungs-Benachrichtigung der Map.
//!
//! Abonnenten laufen inline während des mutierenden Aufrufs und erhalten
//! nur eine geteilte Referenz auf die Map. Sie dürfen die Map nicht
//! erneut mutieren (kein Re-Entry).

use super::MapModel;

/// Handle eines Abonnements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&MapModel) + Send>;

/// Explizite Callback-Registry.
#[derive(Default)]
pub struct ChangeNotifier {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Callback.
    pub fn subscribe(&mut self, listener: impl FnMut(&MapModel) + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Entfernt einen Callback; `false` wenn unbekannt.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() < before
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Ruft alle Callbacks in Registrierungsreihenfolge auf.
    pub(crate) fn emit(&mut self, map: &MapModel) {
        for (_, listener) in &mut self.listeners {
            listener(map);
        }
    }
}
