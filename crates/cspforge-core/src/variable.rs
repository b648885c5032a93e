//! CSP variables.
//!
//! A variable owns its declared domain and a mask marking which of those
//! values are still in the current domain. Pruning and unpruning are the
//! only mutators of the mask, so every change made during propagation can
//! be undone exactly by replaying the pruning record in reverse.

use std::fmt::{self, Debug};
use std::hash::Hash;

use crate::error::{CspError, Result};

/// Marker trait for values a variable can take.
///
/// Blanket-implemented for every small copyable, hashable type, so plain
/// integers, `char`s and fieldless enums all work out of the box.
pub trait Value: Copy + Eq + Hash + Debug + Send + Sync + 'static {}

impl<T> Value for T where T: Copy + Eq + Hash + Debug + Send + Sync + 'static {}

/// Index of a variable inside its [`Csp`](crate::Csp).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VarId(pub usize);

impl VarId {
    /// Returns the arena index.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// A finite-domain variable.
///
/// # Example
///
/// ```
/// use cspforge_core::Variable;
///
/// let mut x = Variable::new("x", vec![1, 2, 3]).unwrap();
/// assert_eq!(x.cur_domain(), vec![1, 2, 3]);
///
/// x.prune_value(2);
/// assert_eq!(x.cur_domain(), vec![1, 3]);
/// assert!(!x.in_cur_domain(2));
///
/// x.unprune_value(2);
/// assert_eq!(x.cur_domain_size(), 3);
/// ```
#[derive(Clone)]
pub struct Variable<V> {
    name: String,
    domain: Vec<V>,
    active: Vec<bool>,
    active_count: usize,
    assigned: Option<V>,
}

impl<V: Value> Variable<V> {
    /// Creates a variable with the given declared domain.
    ///
    /// # Errors
    ///
    /// Returns an error if the domain is empty or lists a value twice.
    pub fn new(name: impl Into<String>, domain: impl IntoIterator<Item = V>) -> Result<Self> {
        let name = name.into();
        let domain: Vec<V> = domain.into_iter().collect();
        if domain.is_empty() {
            return Err(CspError::EmptyDomain(name));
        }
        for (i, value) in domain.iter().enumerate() {
            if domain[..i].contains(value) {
                return Err(CspError::DuplicateDomainValue {
                    variable: name,
                    value: format!("{value:?}"),
                });
            }
        }
        let size = domain.len();
        Ok(Self {
            name,
            domain,
            active: vec![true; size],
            active_count: size,
            assigned: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared domain in declaration order.
    pub fn domain(&self) -> &[V] {
        &self.domain
    }

    pub fn domain_size(&self) -> usize {
        self.domain.len()
    }

    /// Returns the current domain.
    ///
    /// An assigned variable reports the singleton of its assigned value.
    pub fn cur_domain(&self) -> Vec<V> {
        match self.assigned {
            Some(value) => vec![value],
            None => self
                .domain
                .iter()
                .zip(&self.active)
                .filter(|(_, &active)| active)
                .map(|(value, _)| *value)
                .collect(),
        }
    }

    pub fn cur_domain_size(&self) -> usize {
        if self.assigned.is_some() {
            1
        } else {
            self.active_count
        }
    }

    /// Returns true if `value` is in the current domain.
    ///
    /// For an assigned variable only the assigned value qualifies.
    pub fn in_cur_domain(&self, value: V) -> bool {
        match self.assigned {
            Some(assigned) => assigned == value,
            None => self.position(value).is_some_and(|i| self.active[i]),
        }
    }

    /// Removes `value` from the current domain.
    ///
    /// Returns false (and changes nothing) if the value is not currently
    /// active. Propagators never prune a value twice.
    pub fn prune_value(&mut self, value: V) -> bool {
        match self.position(value) {
            Some(i) if self.active[i] => {
                self.active[i] = false;
                self.active_count -= 1;
                true
            }
            _ => {
                debug_assert!(false, "pruning inactive value {value:?} from {}", self.name);
                false
            }
        }
    }

    /// Puts a previously pruned `value` back into the current domain.
    pub fn unprune_value(&mut self, value: V) -> bool {
        match self.position(value) {
            Some(i) if !self.active[i] => {
                self.active[i] = true;
                self.active_count += 1;
                true
            }
            _ => {
                debug_assert!(false, "restoring active value {value:?} to {}", self.name);
                false
            }
        }
    }

    /// Makes every declared value active again.
    pub fn restore_cur_domain(&mut self) {
        self.active.fill(true);
        self.active_count = self.domain.len();
    }

    /// Assigns `value` to this variable.
    ///
    /// # Errors
    ///
    /// Fails if the variable is already assigned or the value has been pruned.
    pub fn assign(&mut self, value: V) -> Result<()> {
        if self.assigned.is_some() {
            return Err(CspError::AlreadyAssigned(self.name.clone()));
        }
        if !self.in_cur_domain(value) {
            return Err(CspError::ValueNotInDomain {
                variable: self.name.clone(),
                value: format!("{value:?}"),
            });
        }
        self.assigned = Some(value);
        Ok(())
    }

    pub fn unassign(&mut self) {
        self.assigned = None;
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned.is_some()
    }

    pub fn assigned_value(&self) -> Option<V> {
        self.assigned
    }

    fn position(&self, value: V) -> Option<usize> {
        self.domain.iter().position(|v| *v == value)
    }
}

impl<V: Debug> Debug for Variable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let active: Vec<&V> = self
            .domain
            .iter()
            .zip(&self.active)
            .filter_map(|(value, &active)| active.then_some(value))
            .collect();
        f.debug_struct("Variable")
            .field("name", &self.name)
            .field("active", &active)
            .field("assigned", &self.assigned)
            .finish()
    }
}

impl<V: Value> fmt::Display for Variable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.assigned {
            Some(value) => write!(f, "Var-{}={:?}", self.name, value),
            None => write!(f, "Var-{}", self.name),
        }
    }
}
