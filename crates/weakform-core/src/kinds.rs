//! Form classifications and integration capability flags.
//!
//! Both types in this module are `Copy` value types usable in `const`
//! evaluation; the assembly crate's consistency check depends on that.

use std::ops::{BitAnd, BitOr};

/// Where a form is integrated.
///
/// This is a closed set: interior cells, interior faces between two cells,
/// and boundary faces. A form participates in exactly one of the three
/// traversal paths, selected by this tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormKind {
    /// Integration over interior cells.
    Cell,
    /// Integration over interior (interface) faces.
    Face,
    /// Integration over boundary faces.
    Boundary,
}

impl FormKind {
    /// Number of distinct kinds.
    pub const COUNT: usize = 3;

    /// Returns the position of this kind in a presence-set array.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// `const`-evaluable equality.
    #[must_use]
    pub const fn same(self, other: Self) -> bool {
        self as usize == other as usize
    }
}

/// What a test object wants the evaluator to integrate.
///
/// The exterior-side flags only carry meaning for [`FormKind::Face`] and
/// [`FormKind::Boundary`] forms; [`IntegrationFlags::masked_for`] zeroes
/// them for cell forms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntegrationFlags {
    /// Function values on the interior side.
    pub value: bool,
    /// Function values on the exterior side.
    pub value_exterior: bool,
    /// Gradients on the interior side.
    pub gradient: bool,
    /// Gradients on the exterior side.
    pub gradient_exterior: bool,
}

impl IntegrationFlags {
    /// No capability requested.
    pub const NONE: Self = Self {
        value: false,
        value_exterior: false,
        gradient: false,
        gradient_exterior: false,
    };

    /// Interior values only.
    pub const VALUE: Self = Self {
        value: true,
        ..Self::NONE
    };

    /// Exterior values only.
    pub const VALUE_EXTERIOR: Self = Self {
        value_exterior: true,
        ..Self::NONE
    };

    /// Interior gradients only.
    pub const GRADIENT: Self = Self {
        gradient: true,
        ..Self::NONE
    };

    /// Exterior gradients only.
    pub const GRADIENT_EXTERIOR: Self = Self {
        gradient_exterior: true,
        ..Self::NONE
    };

    /// Returns the union of two flag sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            value: self.value || other.value,
            value_exterior: self.value_exterior || other.value_exterior,
            gradient: self.gradient || other.gradient,
            gradient_exterior: self.gradient_exterior || other.gradient_exterior,
        }
    }

    /// Returns true if any capability bit is shared with `other`.
    ///
    /// Two forms whose flags intersect would submit the same information,
    /// which the assembly crate rejects at build time.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        (self.value && other.value)
            || (self.value_exterior && other.value_exterior)
            || (self.gradient && other.gradient)
            || (self.gradient_exterior && other.gradient_exterior)
    }

    /// Returns true if any capability is requested.
    #[must_use]
    pub const fn any(self) -> bool {
        self.value || self.value_exterior || self.gradient || self.gradient_exterior
    }

    /// Restricts the flags to what is meaningful for `kind`.
    ///
    /// Cell forms have no exterior side, so both exterior flags are
    /// dropped there. Face and boundary forms keep all four.
    #[must_use]
    pub const fn masked_for(self, kind: FormKind) -> Self {
        match kind {
            FormKind::Cell => Self {
                value: self.value,
                value_exterior: false,
                gradient: self.gradient,
                gradient_exterior: false,
            },
            FormKind::Face | FormKind::Boundary => self,
        }
    }
}

impl BitOr for IntegrationFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitAnd for IntegrationFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self {
            value: self.value && rhs.value,
            value_exterior: self.value_exterior && rhs.value_exterior,
            gradient: self.gradient && rhs.gradient,
            gradient_exterior: self.gradient_exterior && rhs.gradient_exterior,
        }
    }
}
