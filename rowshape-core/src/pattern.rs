use std::{
    any::TypeId,
    fmt::{self, Display},
};

/// Marker naming a single-parameter generic family, like `Option<_>`.
///
/// Rust has no way to abstract over a type constructor, so each family is identified
/// by a marker type instead, and the generic type opts in through [`Element::family`](crate::Element::family).
/// Use `#[derive(Pattern)]` on a unit struct to declare a new one.
pub trait Pattern: 'static {
    const NAME: &'static str;
}

/// Runtime identity of a [`Pattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Family {
    id: TypeId,
    name: &'static str,
}

impl Family {
    pub fn of<P: Pattern>() -> Self {
        Self {
            id: TypeId::of::<P>(),
            name: P::NAME,
        }
    }
    pub fn name(&self) -> &'static str {
        self.name
    }
    pub fn is<P: Pattern>(&self) -> bool {
        self.id == TypeId::of::<P>()
    }
}

impl Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<_>", self.name)
    }
}

macro_rules! std_pattern {
    ($pattern:ident, $name:literal) => {
        #[doc = concat!("Matches any `", $name, "<_>`.")]
        #[derive(Debug, Default, Clone, Copy)]
        pub struct $pattern;
        impl Pattern for $pattern {
            const NAME: &'static str = $name;
        }
    };
}
std_pattern!(OptionPattern, "Option");
std_pattern!(VecPattern, "Vec");
std_pattern!(BoxPattern, "Box");
std_pattern!(RcPattern, "Rc");
std_pattern!(ArcPattern, "Arc");
