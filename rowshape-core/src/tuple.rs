use crate::{
    Cons, Element, Invoke, InvokeMethod, List, Nil, Result, Sequence, SequenceError, Shape,
    Tuple, TypeTag, TypeVisitor, Visitor, record::take_element,
};
use std::ops::ControlFlow;

macro_rules! list_type {
    () => { Nil };
    ($head:ident $(, $tail:ident)*) => { Cons<$head, list_type!($($tail),*)> };
}

/// Expands to a list value, or to a pattern destructuring one.
macro_rules! list_value {
    () => { Nil };
    ($head:ident $(, $tail:ident)*) => { Cons($head, list_value!($($tail),*)) };
}

macro_rules! impl_sequence {
    ($len:literal $(, ($idx:tt, $T:ident))*) => {
        #[allow(unused_variables)]
        impl<$($T: Element),*> Shape for ($($T,)*) {
            const LEN: usize = $len;
            fn visit_type_at<V: TypeVisitor>(index: usize, visitor: &mut V) {
                match index {
                    $($idx => visitor.visit::<$T>(index, TypeTag::new()),)*
                    _ => {}
                }
            }
        }

        #[allow(unused_variables, unused_mut)]
        impl<$($T: Element),*> Sequence for ($($T,)*) {
            fn element(&self, index: usize) -> Option<&dyn Element> {
                match index {
                    $($idx => Some(&self.$idx as &dyn Element),)*
                    _ => None,
                }
            }
            fn visit_at<V: Visitor>(&self, index: usize, visitor: &mut V) -> ControlFlow<()> {
                match index {
                    $($idx => visitor.visit(index, &self.$idx),)*
                    _ => ControlFlow::Continue(()),
                }
            }
            fn transfer(self, destination: &mut Self) {
                $(destination.$idx = self.$idx;)*
            }
            fn into_elements(self) -> Vec<Box<dyn Element>> {
                vec![$(Box::new(self.$idx) as Box<dyn Element>),*]
            }
            fn from_elements(elements: Vec<Box<dyn Element>>) -> Result<Self> {
                if elements.len() != $len {
                    return Err(SequenceError::ArityMismatch {
                        expected: $len,
                        found: elements.len(),
                    }
                    .into());
                }
                let found = elements.len();
                let mut elements = elements.into_iter();
                Ok(($(take_element::<$T>($idx, $len, found, elements.next())?,)*))
            }
        }

        impl<$($T),*> Tuple for ($($T,)*) {
            type AsList = list_type!($($T),*);
            #[allow(non_snake_case)]
            fn into_list(self) -> Self::AsList {
                let ($($T,)*) = self;
                list_value!($($T),*)
            }
        }

        impl<$($T),*> List for list_type!($($T),*) {
            type AsTuple = ($($T,)*);
            #[allow(non_snake_case)]
            fn into_tuple(self) -> Self::AsTuple {
                let list_value!($($T),*) = self;
                ($($T,)*)
            }
        }

        impl<Func, Out $(, $T)*> Invoke<($($T,)*)> for Func
        where
            Func: FnOnce($($T),*) -> Out,
        {
            type Output = Out;
            #[allow(non_snake_case)]
            fn invoke(self, args: ($($T,)*)) -> Out {
                let ($($T,)*) = args;
                self($($T),*)
            }
        }

        impl<Target, Func, Out $(, $T)*> InvokeMethod<Target, ($($T,)*)> for Func
        where
            Func: FnOnce(&mut Target $(, $T)*) -> Out,
        {
            type Output = Out;
            #[allow(non_snake_case)]
            fn invoke_method(self, target: &mut Target, args: ($($T,)*)) -> Out {
                let ($($T,)*) = args;
                self(target $(, $T)*)
            }
        }
    };
}

impl_sequence!(0);
impl_sequence!(1, (0, A));
impl_sequence!(2, (0, A), (1, B));
impl_sequence!(3, (0, A), (1, B), (2, C));
impl_sequence!(4, (0, A), (1, B), (2, C), (3, D));
impl_sequence!(5, (0, A), (1, B), (2, C), (3, D), (4, E));
impl_sequence!(6, (0, A), (1, B), (2, C), (3, D), (4, E), (5, F));
impl_sequence!(7, (0, A), (1, B), (2, C), (3, D), (4, E), (5, F), (6, G));
impl_sequence!(8, (0, A), (1, B), (2, C), (3, D), (4, E), (5, F), (6, G), (7, H));
impl_sequence!(9, (0, A), (1, B), (2, C), (3, D), (4, E), (5, F), (6, G), (7, H), (8, I));
impl_sequence!(
    10,
    (0, A),
    (1, B),
    (2, C),
    (3, D),
    (4, E),
    (5, F),
    (6, G),
    (7, H),
    (8, I),
    (9, J)
);
impl_sequence!(
    11,
    (0, A),
    (1, B),
    (2, C),
    (3, D),
    (4, E),
    (5, F),
    (6, G),
    (7, H),
    (8, I),
    (9, J),
    (10, K)
);
impl_sequence!(
    12,
    (0, A),
    (1, B),
    (2, C),
    (3, D),
    (4, E),
    (5, F),
    (6, G),
    (7, H),
    (8, I),
    (9, J),
    (10, K),
    (11, L)
);
