//! Static field registry of SWAT input files
//!
//! Every editable parameter of a file kind is a variant of that kind's
//! parameter enum, and every variant knows where its value lives in the
//! file. Nothing is discovered at runtime: a name missing from the table is
//! an `UnknownParameter` error.

use crate::app::models::FileKind;
use crate::constants::SOIL_LAYER_STRIDE;
use crate::{Error, Result};
use std::fmt::Debug;
use std::hash::Hash;

/// Location of one fixed-width numeric field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldLocation {
    /// 1-indexed line number
    pub line: usize,
    /// 0-indexed first column
    pub col_start: usize,
    /// 0-indexed column one past the last
    pub col_end: usize,
    /// Digits after the decimal point when written
    pub decimals: usize,
}

impl FieldLocation {
    pub const fn width(&self) -> usize {
        self.col_end - self.col_start
    }

    /// Same field shifted right by `offset` columns
    pub const fn shifted(&self, offset: usize) -> Self {
        Self {
            line: self.line,
            col_start: self.col_start + offset,
            col_end: self.col_end + offset,
            decimals: self.decimals,
        }
    }
}

/// Shape of a parameter within its file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldDescriptor {
    /// Exactly one value
    Scalar(FieldLocation),
    /// One value per soil horizon, repeated every `stride` columns on the
    /// same line for as long as the line carries them
    Layered { base: FieldLocation, stride: usize },
}

impl FieldDescriptor {
    /// First (or only) slot
    pub fn base(&self) -> FieldLocation {
        match self {
            FieldDescriptor::Scalar(location) => *location,
            FieldDescriptor::Layered { base, .. } => *base,
        }
    }

    pub fn is_layered(&self) -> bool {
        matches!(self, FieldDescriptor::Layered { .. })
    }

    /// Slot of the given 0-indexed occurrence
    pub fn occurrence(&self, index: usize) -> FieldLocation {
        match self {
            FieldDescriptor::Scalar(location) => *location,
            FieldDescriptor::Layered { base, stride } => base.shifted(index * stride),
        }
    }
}

/// Convert documented `(line, first, last, decimals)` coordinates with
/// 1-indexed inclusive columns into a scalar descriptor
pub(crate) const fn scalar(line: usize, first: usize, last: usize, decimals: usize) -> FieldDescriptor {
    FieldDescriptor::Scalar(FieldLocation {
        line,
        col_start: first - 1,
        col_end: last,
        decimals,
    })
}

/// Like [`scalar`], for one value per soil horizon
pub(crate) const fn layered(line: usize, first: usize, last: usize, decimals: usize) -> FieldDescriptor {
    FieldDescriptor::Layered {
        base: FieldLocation {
            line,
            col_start: first - 1,
            col_end: last,
            decimals,
        },
        stride: SOIL_LAYER_STRIDE,
    }
}

/// A registered parameter of one file kind
pub trait Parameter: Copy + Eq + Ord + Hash + Debug + 'static {
    /// File kind the parameter belongs to
    const KIND: FileKind;

    /// Name as used in SWAT documentation and calibration tools
    fn name(self) -> &'static str;

    fn descriptor(self) -> FieldDescriptor;

    /// Every registered parameter of the kind, in file order
    fn all() -> &'static [Self];

    /// Look a parameter up by name
    fn from_name(name: &str) -> Result<Self> {
        let wanted = name.trim();
        Self::all()
            .iter()
            .copied()
            .find(|parameter| parameter.name() == wanted)
            .ok_or_else(|| Error::unknown_parameter(Self::KIND, name))
    }
}

macro_rules! parameter_registry {
    (
        $(#[$meta:meta])*
        $enum_name:ident, $kind:expr, {
            $( $variant:ident => $label:literal, $shape:ident($line:expr, $first:expr, $last:expr, $decimals:expr) ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $enum_name {
            $($variant),*
        }

        impl $crate::app::services::field_registry::Parameter for $enum_name {
            const KIND: FileKind = $kind;

            fn name(self) -> &'static str {
                match self {
                    $($enum_name::$variant => $label),*
                }
            }

            fn descriptor(self) -> $crate::app::services::field_registry::FieldDescriptor {
                match self {
                    $($enum_name::$variant => $shape($line, $first, $last, $decimals)),*
                }
            }

            fn all() -> &'static [Self] {
                &[$($enum_name::$variant),*]
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", $crate::app::services::field_registry::Parameter::name(*self))
            }
        }
    };
}

mod tables;

#[cfg(test)]
pub mod tests;

pub use tables::{
    BasinParameter, ControlParameter, GroundwaterParameter, HruParameter, ManagementParameter,
    RoutingParameter, SoilParameter, SubbasinParameter,
};

fn names_of<P: Parameter>() -> Vec<&'static str> {
    P::all().iter().map(|p| p.name()).collect()
}

/// Descriptor of a parameter given by file kind and name
///
/// # Errors
/// `Error::UnknownParameter` if the name is not registered for the kind
pub fn locations_for(kind: FileKind, name: &str) -> Result<FieldDescriptor> {
    match kind {
        FileKind::Basin => BasinParameter::from_name(name).map(Parameter::descriptor),
        FileKind::Groundwater => GroundwaterParameter::from_name(name).map(Parameter::descriptor),
        FileKind::Management => ManagementParameter::from_name(name).map(Parameter::descriptor),
        FileKind::Subbasin => SubbasinParameter::from_name(name).map(Parameter::descriptor),
        FileKind::Hru => HruParameter::from_name(name).map(Parameter::descriptor),
        FileKind::Soil => SoilParameter::from_name(name).map(Parameter::descriptor),
        FileKind::Routing => RoutingParameter::from_name(name).map(Parameter::descriptor),
        FileKind::Control => ControlParameter::from_name(name).map(Parameter::descriptor),
    }
}

/// Registered parameter names of a file kind, in file order
pub fn parameter_names(kind: FileKind) -> Vec<&'static str> {
    match kind {
        FileKind::Basin => names_of::<BasinParameter>(),
        FileKind::Groundwater => names_of::<GroundwaterParameter>(),
        FileKind::Management => names_of::<ManagementParameter>(),
        FileKind::Subbasin => names_of::<SubbasinParameter>(),
        FileKind::Hru => names_of::<HruParameter>(),
        FileKind::Soil => names_of::<SoilParameter>(),
        FileKind::Routing => names_of::<RoutingParameter>(),
        FileKind::Control => names_of::<ControlParameter>(),
    }
}

/// Resolve a list of names, failing on the first unknown one
pub fn resolve_names<P: Parameter>(names: &[&str]) -> Result<Vec<P>> {
    names.iter().map(|name| P::from_name(name)).collect()
}
