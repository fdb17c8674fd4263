//! Signal/slot notifications for Horizon Combobox.
//!
//! A combobox never talks to its renderer directly. Instead it emits signals
//! when its observable state changes, and the projection layer connects slots
//! (callbacks) to them.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - The signal type that slots are connected to
//! - [`ConnectionId`] - Unique identifier returned when connecting a slot
//!
//! # Invocation
//!
//! The interaction engine handles exactly one input event at a time, so every
//! slot is invoked synchronously on the emitting thread, in the order the
//! slots were connected. The connection table is copied out of its lock before
//! any slot runs, which lets a slot connect or disconnect slots on the very
//! signal that is invoking it.
//!
//! # Example
//!
//! ```
//! use horizon_combobox_core::Signal;
//!
//! let menu_toggled = Signal::<bool>::new();
//!
//! let conn_id = menu_toggled.connect(|open| {
//!     println!("menu is now {}", if *open { "open" } else { "closed" });
//! });
//!
//! menu_toggled.emit(true);
//! menu_toggled.disconnect(conn_id);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via [`Signal::disconnect`].
    /// The ID remains valid until the connection is explicitly disconnected or
    /// the signal is dropped.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A type-safe signal that can have multiple connected slots.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for signals
///   with no arguments, or a tuple like `(usize, String)` for several.
///
/// # Thread Safety
///
/// `Signal<Args>` is `Send + Sync` when `Args` is, so a combobox carrying
/// signals can be moved into whatever owns the UI thread.
pub struct Signal<Args> {
    /// All active connections.
    connections: Mutex<Connections<Args>>,
    /// Whether signal emission is temporarily blocked.
    blocked: AtomicBool,
}

/// The connection table.
///
/// `SlotMap` reuses freed slots, so its iteration order says nothing about
/// when a slot was connected. `order` keeps the ids in connection order.
struct Connections<Args> {
    slots: SlotMap<ConnectionId, Slot<Args>>,
    order: Vec<ConnectionId>,
}

impl<Args> Connections<Args> {
    fn new() -> Self {
        Self {
            slots: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    fn insert(&mut self, slot: Slot<Args>) -> ConnectionId {
        let id = self.slots.insert(slot);
        self.order.push(id);
        id
    }

    fn remove(&mut self, id: ConnectionId) -> bool {
        if self.slots.remove(id).is_none() {
            return false;
        }
        self.order.retain(|&connected| connected != id);
        true
    }

    fn clear(&mut self) {
        self.slots.clear();
        self.order.clear();
    }

    fn len(&self) -> usize {
        self.slots.len()
    }

    /// Every slot, in connection order.
    fn ordered(&self) -> Vec<Slot<Args>> {
        self.order
            .iter()
            .filter_map(|&id| self.slots.get(id).cloned())
            .collect()
    }
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(Connections::new()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    ///
    /// # Example
    ///
    /// ```
    /// use horizon_combobox_core::Signal;
    ///
    /// let signal = Signal::<String>::new();
    /// let _id = signal.connect(|s| println!("Got: {}", s));
    /// signal.emit("Apple".to_string());
    /// ```
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed, `false` otherwise.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id)
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Whether any slot is connected.
    ///
    /// Emitters use this to skip building expensive arguments nobody reads.
    pub fn has_connections(&self) -> bool {
        self.connections.lock().len() > 0
    }

    /// Block signal emission temporarily.
    ///
    /// While blocked, calls to `emit()` do nothing.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots in connection order.
    ///
    /// If the signal is blocked, this does nothing.
    #[tracing::instrument(skip_all, target = "horizon_combobox_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "signal blocked, skipping emit");
            return;
        }

        let slots = self.connections.lock().ordered();
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for slot in slots {
            slot(&args);
        }
    }
}

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connections.lock().len())
            .field("blocked", &self.blocked.load(Ordering::SeqCst))
            .finish()
    }
}
