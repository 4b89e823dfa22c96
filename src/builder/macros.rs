//! Macros for ergonomic operation vocabularies.

/// Generate an operation enum and its `Operation` implementation.
///
/// Each variant is bound to its wire name. The macro also derives serde
/// (using the wire names), implements `Display` and `FromStr`, and adds an
/// `ALL` constant listing every variant in declaration order.
///
/// The generated derives name `serde::Serialize` and `serde::Deserialize`
/// directly, so the calling crate must depend on `serde` with the `derive`
/// feature enabled.
///
/// # Example
///
/// ```
/// use order_sim::core::Operation;
/// use order_sim::operation_enum;
///
/// operation_enum! {
///     pub enum TicketOperation {
///         Open => "ticket_open",
///         Close => "ticket_close",
///     }
/// }
///
/// assert_eq!(TicketOperation::Close.name(), "ticket_close");
/// assert_eq!("ticket_open".parse::<TicketOperation>().unwrap(), TicketOperation::Open);
/// assert_eq!(TicketOperation::ALL.len(), 2);
/// ```
#[macro_export]
macro_rules! operation_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $wire)]
                $variant
            ),*
        }

        impl $name {
            /// Every operation, in declaration order.
            #[allow(dead_code)]
            $vis const ALL: &'static [$name] = &[$($name::$variant),*];
        }

        impl $crate::core::Operation for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::Operation::name(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::core::ParseOperationError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)*
                    other => Err($crate::core::ParseOperationError(other.to_string())),
                }
            }
        }
    };
}
