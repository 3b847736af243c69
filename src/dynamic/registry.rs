//! The capability registry.
//!
//! Built-in shapes resolve through a fixed match table. Record shapes resolve
//! through conformances declared once on a [`RegistryBuilder`]; a built
//! [`Registry`] is immutable and cheap to clone.
//!
//! # Examples
//!
//! ```rust
//! use algebars::dynamic::{Capability, Record, Registry, Shape, Value};
//!
//! let registry = Registry::builder()
//!     .semigroup("Total", |registry, left, right| {
//!         let left = left.as_record()?.get("sum")?.clone();
//!         let right = right.as_record()?.get("sum")?.clone();
//!         Ok(Record::new("Total").with("sum", registry.append(left, right)?).into())
//!     })
//!     .build()?;
//!
//! assert!(registry.conforms(Capability::Semigroup, &Shape::record("Total")));
//! assert!(!registry.conforms(Capability::Monoid, &Shape::record("Total")));
//!
//! let total = registry.append(
//!     Value::from(Record::new("Total").with("sum", 2)),
//!     Value::from(Record::new("Total").with("sum", 3)),
//! )?;
//! assert_eq!(total, Value::from(Record::new("Total").with("sum", 5)));
//! # Ok::<(), algebars::dynamic::AlgebraError>(())
//! ```

use std::fmt;
use std::sync::{Arc, OnceLock};

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use super::error::{AlgebraError, Result};
use super::func::Func;
use super::shape::{Capability, Shape};
use super::value::Value;
use crate::typeclass::Ordering;

pub(crate) type Equivalence = Arc<dyn Fn(&Registry, &Value, &Value) -> Result<bool> + Send + Sync>;
pub(crate) type Comparison =
    Arc<dyn Fn(&Registry, &Value, &Value) -> Result<Ordering> + Send + Sync>;
pub(crate) type Combination =
    Arc<dyn Fn(&Registry, Value, Value) -> Result<Value> + Send + Sync>;
pub(crate) type Invocation =
    Arc<dyn Fn(&Registry, &Value, Vec<Value>) -> Result<Value> + Send + Sync>;
pub(crate) type Element = Arc<dyn Fn(&Registry, &Value) -> Result<Value> + Send + Sync>;
pub(crate) type Transformation =
    Arc<dyn Fn(&Registry, Value, &Func) -> Result<Value> + Send + Sync>;
pub(crate) type Lifting = Arc<dyn Fn(&Registry, &Value, Func) -> Result<Value> + Send + Sync>;

/// Conformances registered for one record name.
#[derive(Clone, Default)]
pub(crate) struct RecordConformances {
    pub(crate) setoid: Option<Equivalence>,
    pub(crate) ord: Option<Comparison>,
    pub(crate) compose: Option<Combination>,
    pub(crate) invoke: Option<Invocation>,
    pub(crate) identity: Option<Element>,
    pub(crate) arrowize: Option<Lifting>,
    pub(crate) append: Option<Combination>,
    pub(crate) empty: Option<Element>,
    pub(crate) map: Option<Transformation>,
    pub(crate) convey: Option<Combination>,
}

impl RecordConformances {
    fn has(&self, capability: Capability) -> bool {
        match capability {
            Capability::Setoid => self.setoid.is_some(),
            Capability::Ord => self.ord.is_some(),
            Capability::Semigroupoid => self.compose.is_some(),
            Capability::Category => self.identity.is_some(),
            Capability::Arrow => self.arrowize.is_some(),
            Capability::Semigroup => self.append.is_some(),
            Capability::Monoid => self.empty.is_some(),
            Capability::Functor => self.map.is_some(),
            Capability::Apply => self.convey.is_some(),
        }
    }

    /// Stores a conformance, handing back its capability if one was already
    /// present.
    fn install(&mut self, conformance: Conformance) -> std::result::Result<(), Capability> {
        let capability = conformance.capability();
        if self.has(capability) {
            return Err(capability);
        }
        match conformance {
            Conformance::Setoid(equivalent) => self.setoid = Some(equivalent),
            Conformance::Ord(compare) => self.ord = Some(compare),
            Conformance::Semigroupoid { compose, invoke } => {
                self.compose = Some(compose);
                self.invoke = Some(invoke);
            }
            Conformance::Category(identity) => self.identity = Some(identity),
            Conformance::Arrow(arrowize) => self.arrowize = Some(arrowize),
            Conformance::Semigroup(append) => self.append = Some(append),
            Conformance::Monoid(empty) => self.empty = Some(empty),
            Conformance::Functor(map) => self.map = Some(map),
            Conformance::Apply(convey) => self.convey = Some(convey),
        }
        Ok(())
    }
}

enum Conformance {
    Setoid(Equivalence),
    Ord(Comparison),
    Semigroupoid {
        compose: Combination,
        invoke: Invocation,
    },
    Category(Element),
    Arrow(Lifting),
    Semigroup(Combination),
    Monoid(Element),
    Functor(Transformation),
    Apply(Combination),
}

impl Conformance {
    const fn capability(&self) -> Capability {
        match self {
            Self::Setoid(_) => Capability::Setoid,
            Self::Ord(_) => Capability::Ord,
            Self::Semigroupoid { .. } => Capability::Semigroupoid,
            Self::Category(_) => Capability::Category,
            Self::Arrow(_) => Capability::Arrow,
            Self::Semigroup(_) => Capability::Semigroup,
            Self::Monoid(_) => Capability::Monoid,
            Self::Functor(_) => Capability::Functor,
            Self::Apply(_) => Capability::Apply,
        }
    }
}

/// Whether a built-in shape conforms to a capability.
const fn builtin_conforms(capability: Capability, shape: &Shape) -> bool {
    use Capability::{Apply, Arrow, Category, Functor, Monoid, Ord, Semigroup, Semigroupoid, Setoid};

    match shape {
        Shape::Function => matches!(
            capability,
            Semigroupoid | Category | Arrow | Semigroup | Monoid | Functor | Apply
        ),
        Shape::Integer | Shape::Float | Shape::Text | Shape::Set => {
            matches!(capability, Setoid | Ord | Semigroup | Monoid)
        }
        Shape::Sequence => !matches!(capability, Semigroupoid | Category | Arrow),
        Shape::Mapping => matches!(capability, Setoid | Ord | Semigroup | Monoid | Functor),
        Shape::Tuple(arity) => match capability {
            Setoid | Ord | Semigroup | Monoid => true,
            Functor | Apply => *arity >= 1,
            Semigroupoid | Category | Arrow => false,
        },
        Shape::Record(_) => false,
    }
}

static INSTALLED: OnceLock<Registry> = OnceLock::new();
static BUILTIN: OnceLock<Registry> = OnceLock::new();

/// Resolves (capability, shape) pairs to implementations.
///
/// All dispatching operations live on `Registry`; see the `setoid`,
/// `semigroup`, `functor`, `apply` and `arrow` modules for them.
#[derive(Clone, Default)]
pub struct Registry {
    records: Arc<FxHashMap<Arc<str>, RecordConformances>>,
}

impl Registry {
    /// A registry with only the built-in conformances.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Starts declaring record conformances.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Makes `registry` the process-wide instance returned by
    /// [`Registry::global`].
    ///
    /// # Errors
    ///
    /// [`AlgebraError::AlreadyInstalled`] when a registry was installed
    /// before.
    pub fn install(registry: Self) -> Result<&'static Self> {
        let mut installed_now = false;
        let installed = INSTALLED.get_or_init(|| {
            installed_now = true;
            registry
        });
        if installed_now {
            debug!(records = installed.records.len(), "installed global registry");
            Ok(installed)
        } else {
            Err(AlgebraError::AlreadyInstalled)
        }
    }

    /// The installed registry, or the built-in one when nothing was
    /// installed.
    pub fn global() -> &'static Self {
        INSTALLED
            .get()
            .unwrap_or_else(|| BUILTIN.get_or_init(Self::builtin))
    }

    /// Whether `shape` conforms to `capability`.
    pub fn conforms(&self, capability: Capability, shape: &Shape) -> bool {
        match shape {
            Shape::Record(name) => self
                .records
                .get(name)
                .is_some_and(|conformances| conformances.has(capability)),
            builtin => builtin_conforms(capability, builtin),
        }
    }

    /// Every capability `shape` conforms to.
    pub fn capabilities(&self, shape: &Shape) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|capability| self.conforms(*capability, shape))
            .collect()
    }

    /// Fails unless `shape` conforms to `capability`.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::NoConformance`].
    pub fn require(&self, capability: Capability, shape: &Shape) -> Result<()> {
        if self.conforms(capability, shape) {
            Ok(())
        } else {
            trace!(%capability, %shape, "no conformance");
            Err(AlgebraError::no_conformance(capability, shape.clone()))
        }
    }

    /// Looks up the record conformance chosen by `select`.
    pub(crate) fn record<'a, T>(
        &'a self,
        capability: Capability,
        shape: &Shape,
        select: impl FnOnce(&'a RecordConformances) -> Option<&'a T>,
    ) -> Result<&'a T> {
        let found = match shape {
            Shape::Record(name) => self.records.get(name).and_then(select),
            _ => None,
        };
        found.ok_or_else(|| {
            trace!(%capability, %shape, "no conformance");
            AlgebraError::no_conformance(capability, shape.clone())
        })
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.records.keys().map(AsRef::as_ref).collect();
        names.sort_unstable();
        formatter
            .debug_struct("Registry")
            .field("records", &names)
            .finish()
    }
}

/// Declares record conformances before a [`Registry`] is used.
///
/// Each method attaches one capability to one record name. Nothing is
/// validated until [`RegistryBuilder::build`].
#[derive(Default)]
pub struct RegistryBuilder {
    registrations: Vec<(Arc<str>, Conformance)>,
}

impl RegistryBuilder {
    fn register(mut self, record: impl Into<Arc<str>>, conformance: Conformance) -> Self {
        self.registrations.push((record.into(), conformance));
        self
    }

    /// Registers equivalence for a record.
    #[must_use]
    pub fn setoid<F>(self, record: impl Into<Arc<str>>, equivalent: F) -> Self
    where
        F: Fn(&Registry, &Value, &Value) -> Result<bool> + Send + Sync + 'static,
    {
        self.register(record, Conformance::Setoid(Arc::new(equivalent)))
    }

    /// Registers a total order for a record. Requires `setoid`.
    #[must_use]
    pub fn ord<F>(self, record: impl Into<Arc<str>>, compare: F) -> Self
    where
        F: Fn(&Registry, &Value, &Value) -> Result<Ordering> + Send + Sync + 'static,
    {
        self.register(record, Conformance::Ord(Arc::new(compare)))
    }

    /// Registers composition for a record morphism.
    ///
    /// `compose(later, earlier)` runs `earlier` first; `invoke` applies a
    /// morphism to its arguments.
    #[must_use]
    pub fn semigroupoid<C, I>(self, record: impl Into<Arc<str>>, compose: C, invoke: I) -> Self
    where
        C: Fn(&Registry, Value, Value) -> Result<Value> + Send + Sync + 'static,
        I: Fn(&Registry, &Value, Vec<Value>) -> Result<Value> + Send + Sync + 'static,
    {
        self.register(
            record,
            Conformance::Semigroupoid {
                compose: Arc::new(compose),
                invoke: Arc::new(invoke),
            },
        )
    }

    /// Registers the identity morphism, built from a sample morphism.
    /// Requires `semigroupoid`.
    #[must_use]
    pub fn category<F>(self, record: impl Into<Arc<str>>, identity: F) -> Self
    where
        F: Fn(&Registry, &Value) -> Result<Value> + Send + Sync + 'static,
    {
        self.register(record, Conformance::Category(Arc::new(identity)))
    }

    /// Registers lifting of plain functions into record morphisms.
    /// Requires `category`.
    #[must_use]
    pub fn arrow<F>(self, record: impl Into<Arc<str>>, arrowize: F) -> Self
    where
        F: Fn(&Registry, &Value, Func) -> Result<Value> + Send + Sync + 'static,
    {
        self.register(record, Conformance::Arrow(Arc::new(arrowize)))
    }

    /// Registers associative combination.
    #[must_use]
    pub fn semigroup<F>(self, record: impl Into<Arc<str>>, append: F) -> Self
    where
        F: Fn(&Registry, Value, Value) -> Result<Value> + Send + Sync + 'static,
    {
        self.register(record, Conformance::Semigroup(Arc::new(append)))
    }

    /// Registers the identity element, built from a sample value.
    /// Requires `semigroup`.
    #[must_use]
    pub fn monoid<F>(self, record: impl Into<Arc<str>>, empty: F) -> Self
    where
        F: Fn(&Registry, &Value) -> Result<Value> + Send + Sync + 'static,
    {
        self.register(record, Conformance::Monoid(Arc::new(empty)))
    }

    /// Registers structure-preserving mapping.
    #[must_use]
    pub fn functor<F>(self, record: impl Into<Arc<str>>, map: F) -> Self
    where
        F: Fn(&Registry, Value, &Func) -> Result<Value> + Send + Sync + 'static,
    {
        self.register(record, Conformance::Functor(Arc::new(map)))
    }

    /// Registers `convey(data, functions)`. Requires `functor`.
    #[must_use]
    pub fn apply<F>(self, record: impl Into<Arc<str>>, convey: F) -> Self
    where
        F: Fn(&Registry, Value, Value) -> Result<Value> + Send + Sync + 'static,
    {
        self.register(record, Conformance::Apply(Arc::new(convey)))
    }

    /// Validates the declarations and freezes them.
    ///
    /// # Errors
    ///
    /// - [`AlgebraError::DuplicateConformance`] when a capability was declared
    ///   twice for one record
    /// - [`AlgebraError::MissingPrerequisite`] when a capability was declared
    ///   without the one it requires
    pub fn build(self) -> Result<Registry> {
        let mut records: FxHashMap<Arc<str>, RecordConformances> = FxHashMap::default();

        for (name, conformance) in self.registrations {
            trace!(record = %name, capability = %conformance.capability(), "registering conformance");
            records
                .entry(Arc::clone(&name))
                .or_default()
                .install(conformance)
                .map_err(|capability| AlgebraError::DuplicateConformance {
                    capability,
                    shape: Shape::Record(name),
                })?;
        }

        let mut names: Vec<&Arc<str>> = records.keys().collect();
        names.sort_unstable();
        for name in names {
            let conformances = &records[name];
            for capability in Capability::ALL {
                let Some(prerequisite) = capability.prerequisite() else {
                    continue;
                };
                if conformances.has(capability) && !conformances.has(prerequisite) {
                    return Err(AlgebraError::MissingPrerequisite {
                        capability,
                        prerequisite,
                        shape: Shape::Record(Arc::clone(name)),
                    });
                }
            }
        }

        debug!(records = records.len(), "built capability registry");
        Ok(Registry {
            records: Arc::new(records),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn always_equal(_: &Registry, _: &Value, _: &Value) -> Result<bool> {
        Ok(true)
    }

    #[rstest]
    #[case(Capability::Setoid, Shape::Integer, true)]
    #[case(Capability::Functor, Shape::Integer, false)]
    #[case(Capability::Setoid, Shape::Function, false)]
    #[case(Capability::Arrow, Shape::Function, true)]
    #[case(Capability::Apply, Shape::Sequence, true)]
    #[case(Capability::Apply, Shape::Mapping, false)]
    #[case(Capability::Functor, Shape::Mapping, true)]
    #[case(Capability::Functor, Shape::Tuple(0), false)]
    #[case(Capability::Apply, Shape::Tuple(3), true)]
    #[case(Capability::Monoid, Shape::Tuple(0), true)]
    #[case(Capability::Setoid, Shape::record("Unknown"), false)]
    fn builtin_table(#[case] capability: Capability, #[case] shape: Shape, #[case] expected: bool) {
        assert_eq!(Registry::builtin().conforms(capability, &shape), expected);
    }

    #[rstest]
    fn require_reports_no_conformance() {
        assert_eq!(
            Registry::builtin().require(Capability::Ord, &Shape::Function),
            Err(AlgebraError::no_conformance(Capability::Ord, Shape::Function))
        );
    }

    #[rstest]
    fn record_conformance_is_found_by_name() {
        let registry = Registry::builder()
            .setoid("Point", always_equal)
            .build()
            .unwrap();
        assert!(registry.conforms(Capability::Setoid, &Shape::record("Point")));
        assert!(!registry.conforms(Capability::Setoid, &Shape::record("Line")));
        assert_eq!(
            registry.capabilities(&Shape::record("Point")),
            vec![Capability::Setoid]
        );
    }

    #[rstest]
    fn duplicate_registration_fails() {
        let result = Registry::builder()
            .setoid("Point", always_equal)
            .setoid("Point", always_equal)
            .build();
        assert_eq!(
            result.map(|_| ()),
            Err(AlgebraError::DuplicateConformance {
                capability: Capability::Setoid,
                shape: Shape::record("Point"),
            })
        );
    }

    #[rstest]
    fn missing_prerequisite_fails() {
        let result = Registry::builder()
            .ord("Point", |_, _, _| Ok(Ordering::Equal))
            .build();
        assert_eq!(
            result.map(|_| ()),
            Err(AlgebraError::MissingPrerequisite {
                capability: Capability::Ord,
                prerequisite: Capability::Setoid,
                shape: Shape::record("Point"),
            })
        );
    }

    #[rstest]
    fn registration_order_does_not_matter() {
        let registry = Registry::builder()
            .ord("Point", |_, _, _| Ok(Ordering::Equal))
            .setoid("Point", always_equal)
            .build();
        assert!(registry.is_ok());
    }

    #[rstest]
    fn clones_share_conformances() {
        let registry = Registry::builder()
            .setoid("Point", always_equal)
            .build()
            .unwrap();
        let copy = registry.clone();
        assert!(copy.conforms(Capability::Setoid, &Shape::record("Point")));
        assert_eq!(format!("{copy:?}"), "Registry { records: [\"Point\"] }");
    }

    #[rstest]
    fn builtin_capabilities_of_function() {
        assert_eq!(
            Registry::builtin().capabilities(&Shape::Function),
            vec![
                Capability::Semigroupoid,
                Capability::Category,
                Capability::Arrow,
                Capability::Semigroup,
                Capability::Monoid,
                Capability::Functor,
                Capability::Apply,
            ]
        );
    }
}
