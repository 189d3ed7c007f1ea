/// Declare an attribute tag enum and its `AttributeKind` name table.
///
/// ```ignore
/// sift_core::attribute_kind! {
///     pub enum UserAttr {
///         Name => "name",
///         Age => "age",
///     }
/// }
/// ```
#[macro_export]
macro_rules! attribute_kind {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident => $label:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        $vis enum $name {
            $( $(#[$variant_meta])* $variant ),*
        }

        impl $crate::model::AttributeKind for $name {
            const ALL: &'static [Self] = &[ $( Self::$variant ),* ];

            fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $label ),*
                }
            }
        }
    };
}
