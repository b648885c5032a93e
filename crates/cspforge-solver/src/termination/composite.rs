//! Composite termination conditions (AND/OR).
//!
//! Uses macro-generated tuple implementations for zero type erasure.

use super::Termination;
use crate::scope::SearchScope;

/// Combines multiple terminations with OR logic (any must terminate).
///
/// Wraps a tuple of terminations. Terminates when ANY child terminates.
///
/// # Examples
///
/// ```
/// use cspforge_solver::termination::{NodeCountTermination, OrTermination, TimeTermination};
///
/// // Terminate after 30 seconds OR 1000 nodes
/// let termination = OrTermination((
///     TimeTermination::seconds(30),
///     NodeCountTermination::new(1000),
/// ));
/// ```
#[derive(Debug)]
pub struct OrTermination<T>(pub T);

impl<T> OrTermination<T> {
    /// Creates a new OR termination from a tuple of terminations.
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

/// Combines multiple terminations with AND logic (all must terminate).
///
/// Wraps a tuple of terminations. Terminates when ALL children terminate.
#[derive(Debug)]
pub struct AndTermination<T>(pub T);

impl<T> AndTermination<T> {
    /// Creates a new AND termination from a tuple of terminations.
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

/// Generates `Termination` implementations for OR and AND tuples.
macro_rules! impl_composite_termination {
    ($($idx:tt: $T:ident),+) => {
        impl<$($T),+> Termination for OrTermination<($($T,)+)>
        where
            $($T: Termination,)+
        {
            fn is_terminated(&self, scope: &SearchScope) -> bool {
                $((self.0).$idx.is_terminated(scope))||+
            }
        }

        impl<$($T),+> Termination for AndTermination<($($T,)+)>
        where
            $($T: Termination,)+
        {
            fn is_terminated(&self, scope: &SearchScope) -> bool {
                $((self.0).$idx.is_terminated(scope))&&+
            }
        }
    };
}

impl_composite_termination!(0: T0);
impl_composite_termination!(0: T0, 1: T1);
impl_composite_termination!(0: T0, 1: T1, 2: T2);
impl_composite_termination!(0: T0, 1: T1, 2: T2, 3: T3);
