//! Reactive property primitives for the wizard form
//!
//! The option engine is built on four small pieces:
//!
//! - [`Property`] - a named value cell with write-if-new semantics and
//!   synchronous change notification
//! - [`PropertyGraph`] - the context object that stamps out properties; it is
//!   constructed once and handed to every block constructor so that each
//!   block only ever holds handles to the properties it actually depends on
//! - [`Signal`] - a payload-free "please re-render me" channel
//! - [`SuppressionGuard`] - a reentrant marker that lets preset cascades
//!   write values without those writes being classified as user edits
//!
//! # Design Principles
//!
//! - **Single-threaded**: every write and every subscriber runs synchronously
//!   on the thread that originated the user action; no locking, no suspension
//! - **Write-if-new**: writing a value equal to the current value produces no
//!   notification, which is what guarantees cascade termination
//! - **No global state**: suppression lives in an explicit guard handle, not
//!   a thread-local

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// A named reactive value cell.
///
/// Handles are cheap clones sharing one underlying cell. Subscribers are
/// invoked in subscription order, and only when a write actually changes the
/// value. Re-entrant writes (a subscriber writing a property that has its own
/// subscribers, including this one) are supported.
pub struct Property<T> {
    inner: Rc<PropertyInner<T>>,
}

struct PropertyInner<T> {
    name: &'static str,
    value: RefCell<T>,
    subscribers: RefCell<Vec<Rc<dyn Fn(&T)>>>,
}

impl<T> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("name", &self.inner.name)
            .field("value", &*self.inner.value.borrow())
            .finish_non_exhaustive()
    }
}

impl<T: Clone + PartialEq + 'static> Property<T> {
    fn new(name: &'static str, initial: T) -> Self {
        Self {
            inner: Rc::new(PropertyInner {
                name,
                value: RefCell::new(initial),
                subscribers: RefCell::new(Vec::new()),
            }),
        }
    }

    /// The name this property was registered under.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.inner.name
    }

    /// Returns a clone of the current value.
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Write-if-new: stores `value` and notifies subscribers in subscription
    /// order, unless `value` equals the current value, in which case nothing
    /// happens at all.
    pub fn set(&self, value: T) {
        {
            let mut current = self.inner.value.borrow_mut();
            if *current == value {
                return;
            }
            *current = value.clone();
        }
        tracing::trace!(property = self.inner.name, "value changed");
        // Snapshot the subscriber list so a subscriber may subscribe or write
        // re-entrantly without holding the borrow.
        let subscribers: Vec<_> = self.inner.subscribers.borrow().clone();
        for subscriber in subscribers {
            subscriber(&value);
        }
    }

    /// Registers a change listener. Listeners fire synchronously, after the
    /// value has been stored, in the order they were registered.
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) {
        self.inner.subscribers.borrow_mut().push(Rc::new(f));
    }

    /// Registers a correction rule on the property itself: whenever a write
    /// lands a value for which `rule` returns `Some(corrected)`, the corrected
    /// value is written back immediately. The rule must accept its own
    /// corrections or the cascade will not settle.
    ///
    /// The property is captured weakly, so a cell may constrain itself without
    /// keeping itself alive.
    pub fn constrain(&self, rule: impl Fn(&T) -> Option<T> + 'static) {
        let weak = Rc::downgrade(&self.inner);
        self.subscribe(move |value| {
            if let Some(corrected) = rule(value) {
                if let Some(inner) = weak.upgrade() {
                    Property { inner }.set(corrected);
                }
            }
        });
    }
}

/// The one shared context used to construct every property of a wizard
/// session.
///
/// Blocks receive `&PropertyGraph` in their constructors and keep only the
/// `Property` handles they create or are explicitly given, which keeps the
/// dependency edges between blocks auditable.
#[derive(Default)]
pub struct PropertyGraph {
    created: Cell<usize>,
}

impl PropertyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a named property with an initial value.
    pub fn property<T: Clone + PartialEq + 'static>(
        &self,
        name: &'static str,
        initial: T,
    ) -> Property<T> {
        self.created.set(self.created.get() + 1);
        Property::new(name, initial)
    }

    /// Number of properties created through this graph.
    pub fn property_count(&self) -> usize {
        self.created.get()
    }
}

/// A payload-free notification channel from a block to its container.
///
/// Emitting means "recompute my view and any shared layout now"; the engine
/// does not interpret it further.
#[derive(Clone, Default)]
pub struct Signal {
    subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl Signal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connect(&self, f: impl Fn() + 'static) {
        self.subscribers.borrow_mut().push(Rc::new(f));
    }

    pub fn emit(&self) {
        let subscribers: Vec<_> = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            subscriber();
        }
    }
}

/// Reentrant marker separating cascade writes from user edits.
///
/// While any `run` call is on the stack, `is_suppressed` reports true and
/// listeners that would demote the preset to Custom return early instead.
/// The depth is a counter, not a boolean: a cascade handler for one block may
/// itself trigger another guarded pass, and nested `run` calls must unwind
/// correctly.
#[derive(Clone, Default)]
pub struct SuppressionGuard {
    depth: Rc<Cell<u32>>,
}

impl SuppressionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` with suppression active.
    pub fn run<R>(&self, f: impl FnOnce() -> R) -> R {
        self.depth.set(self.depth.get() + 1);
        let result = f();
        self.depth.set(self.depth.get() - 1);
        result
    }

    /// True while any `run` call is active.
    #[inline]
    pub fn is_suppressed(&self) -> bool {
        self.depth.get() > 0
    }
}

/// A string property derived from a source property until the user edits it.
///
/// Two states: *derived* (recomputed from the source on every source change)
/// and *explicit* (detached). Any write that did not come from the derivation
/// itself transitions derived -> explicit permanently; derivation refreshes
/// never count as touches.
pub struct DerivedProperty {
    property: Property<String>,
    state: Rc<DerivedState>,
}

#[derive(Default)]
struct DerivedState {
    touched: Cell<bool>,
    refreshing: Cell<bool>,
}

impl DerivedProperty {
    /// Creates a property initialized to `derive(source)` that tracks
    /// `source` until first touched.
    pub fn new(
        graph: &PropertyGraph,
        name: &'static str,
        source: &Property<String>,
        derive: impl Fn(&str) -> String + 'static,
    ) -> Self {
        let property = graph.property(name, derive(&source.get()));
        let state = Rc::new(DerivedState::default());

        {
            let state = Rc::clone(&state);
            property.subscribe(move |_| {
                if !state.refreshing.get() {
                    state.touched.set(true);
                }
            });
        }
        {
            let state = Rc::clone(&state);
            let property = property.clone();
            source.subscribe(move |value| {
                if state.touched.get() {
                    return;
                }
                state.refreshing.set(true);
                property.set(derive(value));
                state.refreshing.set(false);
            });
        }

        Self { property, state }
    }

    /// The underlying property; external writes through it detach the
    /// derivation.
    pub fn property(&self) -> &Property<String> {
        &self.property
    }

    /// True once the user has explicitly edited the value.
    pub fn is_touched(&self) -> bool {
        self.state.touched.get()
    }
}
