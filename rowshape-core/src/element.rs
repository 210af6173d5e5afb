use crate::{
    ArcPattern, BoxPattern, ElementInfo, Error, Family, OptionPattern, RcPattern, Result,
    VecPattern,
};
use proc_macro2::TokenStream;
use quote::{ToTokens, TokenStreamExt, quote};
use std::{
    any::{self, Any},
    fmt::{self, Debug},
    rc::Rc,
    str::FromStr,
    sync::Arc,
};

/// Role an element plays inside a descriptor list.
///
/// The classification is attached to the type (see [`Element::kind`]) and cached in
/// [`ElementInfo`], predicates and filters read it from there.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Plain value, not a descriptor.
    #[default]
    Value,
    /// Table column.
    Column,
    /// Primary key constraint.
    PrimaryKey,
    /// Unique constraint.
    Unique,
    /// Foreign key constraint.
    ForeignKey,
    /// Check constraint.
    Check,
    /// Index definition.
    Index,
}

impl FromStr for ElementKind {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "value" => ElementKind::Value,
            "column" => ElementKind::Column,
            "primary_key" => ElementKind::PrimaryKey,
            "unique" => ElementKind::Unique,
            "foreign_key" => ElementKind::ForeignKey,
            "check" => ElementKind::Check,
            "index" => ElementKind::Index,
            _ => {
                return Err(Error::msg(format!(
                    "Unknown element kind `{s}`, expected one of: value, column, primary_key, unique, foreign_key, check, index"
                )));
            }
        })
    }
}

impl ToTokens for ElementKind {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        use ElementKind::*;
        tokens.append_all(match self {
            Value => quote!(::rowshape::ElementKind::Value),
            Column => quote!(::rowshape::ElementKind::Column),
            PrimaryKey => quote!(::rowshape::ElementKind::PrimaryKey),
            Unique => quote!(::rowshape::ElementKind::Unique),
            ForeignKey => quote!(::rowshape::ElementKind::ForeignKey),
            Check => quote!(::rowshape::ElementKind::Check),
            Index => quote!(::rowshape::ElementKind::Index),
        });
    }
}

/// A type that can occupy a position of a sequence.
///
/// Both methods describe the type, not a value: they are available while enumerating a
/// shape that has no instance yet. Use `#[derive(Element)]` for descriptor types.
pub trait Element: ElementDyn + 'static {
    /// Classification used by predicates.
    fn kind() -> ElementKind
    where
        Self: Sized,
    {
        ElementKind::Value
    }
    /// Generic family `Self` instantiates (`Option<_>`, `Vec<_>`, ...), if any.
    fn family() -> Option<Family>
    where
        Self: Sized,
    {
        None
    }
}

/// Object safe half of [`Element`], implemented for every element.
pub trait ElementDyn: Any {
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
    fn info(&self) -> ElementInfo;
    fn type_name(&self) -> &'static str;
}

impl<T: Element> ElementDyn for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
    fn info(&self) -> ElementInfo {
        ElementInfo::of::<T>()
    }
    fn type_name(&self) -> &'static str {
        any::type_name::<T>()
    }
}

impl dyn Element {
    pub fn is<T: Element>(&self) -> bool {
        self.as_any().is::<T>()
    }
    pub fn downcast_ref<T: Element>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// Prints the element type, values are not required to be `Debug`.
impl Debug for dyn Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

macro_rules! impl_element {
    ($($source:ty),+ $(,)?) => {
        $(impl Element for $source {})+
    };
}
impl_element!(
    (),
    bool,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    char,
    String,
    &'static str,
);
#[cfg(feature = "decimal")]
impl_element!(rust_decimal::Decimal);
#[cfg(feature = "time")]
impl_element!(
    time::Date,
    time::Time,
    time::PrimitiveDateTime,
    time::OffsetDateTime,
);
#[cfg(feature = "uuid")]
impl_element!(uuid::Uuid);

macro_rules! impl_element_family {
    ($source:ident, $pattern:ident) => {
        impl<T: Element> Element for $source<T> {
            fn kind() -> ElementKind {
                T::kind()
            }
            fn family() -> Option<Family> {
                Some(Family::of::<$pattern>())
            }
        }
    };
}
impl_element_family!(Option, OptionPattern);
impl_element_family!(Vec, VecPattern);
impl_element_family!(Box, BoxPattern);
impl_element_family!(Rc, RcPattern);
impl_element_family!(Arc, ArcPattern);
