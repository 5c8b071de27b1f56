//! The form-list consistency check.
//!
//! No two forms with the same classification and field slot may request
//! intersecting integration capabilities: both would submit the same
//! information, and the later submission would silently overwrite or
//! double-count the earlier one inside the evaluator.
//!
//! The authoritative check is [`signatures_consistent`], a `const fn` the
//! [`Forms`](crate::forms::Forms) constructor asserts in `const` context,
//! so a conflicting list fails the build. [`validate_signatures`] is the
//! runtime mirror: same walk, but it reports which pair conflicts. The
//! walk is the quadratic accumulate-and-scan; form lists are a handful of
//! entries and the cost is paid once per list type.

use smallvec::SmallVec;
use thiserror::Error;

use weakform_core::{FormKind, IntegrationFlags};

/// Upper bound on the number of forms in one list.
pub const MAX_FORMS: usize = 32;

/// The compile-time identity of one form: classification, field slot and
/// requested integration capabilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormSignature {
    kind: FormKind,
    fe_number: u32,
    flags: IntegrationFlags,
}

impl FormSignature {
    /// Builds a signature.
    #[must_use]
    pub const fn new(kind: FormKind, fe_number: u32, flags: IntegrationFlags) -> Self {
        Self {
            kind,
            fe_number,
            flags,
        }
    }

    /// The form's classification.
    #[must_use]
    pub const fn kind(self) -> FormKind {
        self.kind
    }

    /// The form's field slot.
    #[must_use]
    pub const fn fe_number(self) -> u32 {
        self.fe_number
    }

    /// The form's integration capabilities.
    #[must_use]
    pub const fn flags(self) -> IntegrationFlags {
        self.flags
    }

    /// True if two forms would submit overlapping information.
    #[must_use]
    pub const fn conflicts_with(self, other: Self) -> bool {
        self.kind.same(other.kind)
            && self.fe_number == other.fe_number
            && self.flags.intersects(other.flags)
    }
}

/// Two forms submit the same information for the same field slot.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error(
    "forms {first} and {second} both submit {kind:?} information for fe number {fe_number}"
)]
pub struct ConflictError {
    /// Position of the earlier form in the list.
    pub first: usize,
    /// Position of the later, conflicting form.
    pub second: usize,
    /// The shared classification.
    pub kind: FormKind,
    /// The shared field slot.
    pub fe_number: u32,
}

/// `const`-evaluable pairwise conflict scan over a signature array.
///
/// `None` entries are unused capacity; occupied entries are checked
/// against every earlier occupied entry.
pub(crate) const fn signatures_consistent(
    signatures: &[Option<FormSignature>; MAX_FORMS],
) -> bool {
    let mut i = 0;
    while i < MAX_FORMS {
        if let Some(current) = signatures[i] {
            let mut j = 0;
            while j < i {
                if let Some(earlier) = signatures[j] {
                    if current.conflicts_with(earlier) {
                        return false;
                    }
                }
                j += 1;
            }
        }
        i += 1;
    }
    true
}

/// Runtime conflict scan reporting the offending pair.
///
/// # Errors
///
/// Returns the first conflicting pair in list order, if any.
pub fn validate_signatures(signatures: &[FormSignature]) -> Result<(), ConflictError> {
    let mut seen: SmallVec<[FormSignature; 8]> = SmallVec::new();
    for (second, &sig) in signatures.iter().enumerate() {
        for (first, earlier) in seen.iter().enumerate() {
            if sig.conflicts_with(*earlier) {
                return Err(ConflictError {
                    first,
                    second,
                    kind: sig.kind(),
                    fe_number: sig.fe_number(),
                });
            }
        }
        seen.push(sig);
    }
    Ok(())
}
